//! A growable double-ended queue over a circular buffer.
//!
//! [`Deque`] keeps its elements in one contiguous allocation and tracks the
//! slot of the front element (`head`) together with the number of elements.
//! The occupied window starts at `head` and may wrap around the end of the
//! buffer:
//! ```text
//!                   +- head
//!                   v
//! +---+---+---+---+---+---+---+---+
//! | 4 | 5 |   |   | 0 | 1 | 2 | 3 |
//! +---+---+---+---+---+---+---+---+
//!       ^
//!       +- tail (head + len - 1, modulo capacity)
//! ```
//!
//! Pushing onto either end is *O(1)* as long as there is a free slot. Once the
//! window covers every slot, the next push allocates a strictly larger buffer
//! (see [`MINIMUM_GROWTH`] and [`GROWTH_FACTOR`]) and repacks the elements at
//! its start. The deque never shrinks on its own; call
//! [`Deque::trim_excess`] to give memory back.
//!
//! Operations that can fail because of a caller error return a
//! [`Result`] with a [`DequeError`] instead of panicking:
//!
//! ```
//! use circdeque::{Deque, DequeError};
//!
//! let mut deque = Deque::new();
//! deque.push_back(1);
//! deque.push_back(2);
//! deque.push_front(0);
//!
//! assert_eq!(deque.pop_front(), Ok(0));
//! assert_eq!(deque.get(5), Err(DequeError::IndexOutOfRange { index: 5, len: 2 }));
//! ```

use core::cmp::{self, Ordering};
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut, Range};

use std::fmt;
use std::iter::repeat_with;
use std::mem;

#[macro_use]
mod macros;

mod cursor;
mod error;
mod into_iter;
mod iter;

pub use cursor::Cursor;
pub use error::{DequeError, Result};
pub use into_iter::IntoIter;
pub use iter::{Iter, IterMut};


/// The smallest number of slots a growth adds to the buffer.
pub const MINIMUM_GROWTH: usize = 4;

/// The factor the capacity is multiplied by when the buffer grows.
pub const GROWTH_FACTOR: usize = 2;

/// [`Deque::trim_excess`] only reallocates when less than this fraction of the
/// capacity is in use.
pub const TRIM_THRESHOLD: f64 = 0.9;

/// A double-ended queue implemented with a growable circular buffer.
///
/// See the [module-level documentation](./index.html) for more details.
pub struct Deque<T> {
    // Slot `head` holds the front element. The occupied window is
    // [head, head + len) modulo the capacity. Every slot inside the window
    // is `Some` and every slot outside it is `None`.
    // head < capacity, or head == 0 if capacity == 0.
    buf: Box<[Option<T>]>,
    head: usize,
    len: usize,
    // Bumped on every structural change, checked by `Cursor`.
    version: u64,
}

impl<T> Deque<T> {
    /// Creates an empty deque.
    ///
    /// No memory is allocated until the first element is pushed.
    ///
    /// # Examples
    ///
    /// ```
    /// use circdeque::Deque;
    ///
    /// let deque: Deque<i32> = Deque::new();
    /// assert_eq!(deque.capacity(), 0);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty deque with space for exactly `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use circdeque::Deque;
    ///
    /// let deque: Deque<i32> = Deque::with_capacity(10);
    /// assert_eq!(deque.capacity(), 10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: empty_slots(capacity), head: 0, len: 0, version: 0 }
    }

    /// Creates an empty deque from a capacity of any integer type.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::InvalidArgument`] if `capacity` is negative or
    /// does not fit into a `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circdeque::{Deque, DequeError};
    ///
    /// let deque = Deque::<u8>::try_with_capacity(16i64).unwrap();
    /// assert_eq!(deque.capacity(), 16);
    ///
    /// let err = Deque::<u8>::try_with_capacity(-1).unwrap_err();
    /// assert!(matches!(err, DequeError::InvalidArgument(_)));
    /// ```
    pub fn try_with_capacity<C>(capacity: C) -> Result<Self>
    where
        C: TryInto<usize> + fmt::Display + Copy,
    {
        match capacity.try_into() {
            Ok(capacity) => Ok(Self::with_capacity(capacity)),
            Err(_) => Err(DequeError::InvalidArgument(format!(
                "capacity may not be negative, got {}",
                capacity
            ))),
        }
    }

    /// Returns the number of elements the deque can hold without reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::with_capacity(4);
    /// deque.extend([1, 2, 3, 4, 5]);
    /// assert_eq!(deque.capacity(), 8);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap()
    }

    /// Returns the number of elements in the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circdeque::Deque;
    /// let deque = Deque::from([1, 2, 3]);
    /// assert_eq!(deque.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the deque is empty or not.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::new();
    /// assert!(deque.is_empty());
    /// deque.push_back(42);
    /// assert!(!deque.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Provides a reference to the element at the given index.
    ///
    /// Element at index 0 is the front of the deque.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circdeque::Deque;
    /// let deque = Deque::from([1, 2, 3]);
    /// assert_eq!(deque.get(1), Ok(&2));
    /// assert!(deque.get(3).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(DequeError::IndexOutOfRange { index, len: self.len });
        }
        let slot = self.to_physical(index);
        Ok(occupied(self.buf[slot].as_ref()))
    }

    /// Provides a mutable reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::from([1, 2, 3]);
    /// *deque.get_mut(1).unwrap() += 40;
    /// assert_eq!(deque.get(1), Ok(&42));
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len {
            return Err(DequeError::IndexOutOfRange { index, len: self.len });
        }
        let slot = self.to_physical(index);
        Ok(occupied(self.buf[slot].as_mut()))
    }

    /// Provides a reference to the front element, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::new();
    /// assert_eq!(deque.peek_front(), None);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.peek_front(), Some(&1));
    /// ```
    pub fn peek_front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(occupied(self.buf[self.head].as_ref()))
        }
    }

    /// Provides a reference to the back element, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::new();
    /// assert_eq!(deque.peek_back(), None);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.peek_back(), Some(&2));
    /// ```
    pub fn peek_back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            let tail = self.to_physical(self.len - 1);
            Some(occupied(self.buf[tail].as_ref()))
        }
    }

    /// Prepends an element to the front of the deque.
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity overflows a `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_front(1);
    /// deque.push_front(2);
    /// deque.push_front(3);
    /// assert_eq!(deque, [3, 2, 1]);
    /// ```
    pub fn push_front(&mut self, value: T) {
        if self.is_full() {
            // keep slot 0 free for the new front element
            self.grow(1);
            self.head = 0;
        } else {
            self.head = self.wrap_sub(self.head, 1);
        }
        self.buf[self.head] = Some(value);
        self.len += 1;
        self.bump_version();
    }

    /// Appends an element to the back of the deque.
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity overflows a `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// deque.push_back(3);
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.is_full() {
            self.grow(0);
        }
        let slot = self.to_physical(self.len);
        self.buf[slot] = Some(value);
        self.len += 1;
        self.bump_version();
    }

    /// Removes the first element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circdeque::{Deque, DequeError};
    /// let mut deque = Deque::from([1, 2]);
    /// assert_eq!(deque.pop_front(), Ok(1));
    /// assert_eq!(deque.pop_front(), Ok(2));
    /// assert_eq!(deque.pop_front(), Err(DequeError::EmptyContainer));
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(DequeError::EmptyContainer);
        }
        let value = occupied(self.buf[self.head].take());
        self.head = self.wrap_add(self.head, 1);
        self.len -= 1;
        self.bump_version();
        Ok(value)
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circdeque::{Deque, DequeError};
    /// let mut deque = Deque::from([1, 2]);
    /// assert_eq!(deque.pop_back(), Ok(2));
    /// assert_eq!(deque.pop_back(), Ok(1));
    /// assert_eq!(deque.pop_back(), Err(DequeError::EmptyContainer));
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(DequeError::EmptyContainer);
        }
        let tail = self.to_physical(self.len - 1);
        let value = occupied(self.buf[tail].take());
        self.len -= 1;
        self.bump_version();
        Ok(value)
    }

    /// Returns `true` if the deque contains an element equal to the given value.
    ///
    /// This operation is *O(n)*.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::new();
    ///
    /// deque.push_back(0);
    /// deque.push_back(1);
    ///
    /// assert!(deque.contains(&1));
    /// assert!(!deque.contains(&4));
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|elem| elem == x)
    }

    /// Clears the deque, removing all elements.
    ///
    /// The capacity is not changed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::with_capacity(8);
    /// deque.push_back(1);
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 8);
    /// ```
    pub fn clear(&mut self) {
        let (head, len) = (self.head, self.len);
        // reset first so a panicking destructor leaves an empty deque behind
        self.head = 0;
        self.len = 0;
        self.bump_version();
        let (front, back) = window_mut(&mut self.buf, head, len);
        front.iter_mut().chain(back).for_each(|slot| *slot = None);
    }

    /// Clones all elements, front to back, into `destination` starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::InvalidArgument`] if `offset` is past the end of
    /// `destination` or if fewer than `len` slots remain after `offset`.
    /// Nothing is written in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circdeque::Deque;
    /// let deque = Deque::from([1, 2, 3]);
    /// let mut out = [0; 5];
    /// deque.copy_to(&mut out, 1).unwrap();
    /// assert_eq!(out, [0, 1, 2, 3, 0]);
    /// assert!(deque.copy_to(&mut out, 3).is_err());
    /// ```
    pub fn copy_to(&self, destination: &mut [T], offset: usize) -> Result<()>
    where
        T: Clone,
    {
        if offset > destination.len() {
            return Err(DequeError::InvalidArgument(format!(
                "offset {} is past the end of a destination of length {}",
                offset,
                destination.len()
            )));
        }
        let room = destination.len() - offset;
        if room < self.len {
            return Err(DequeError::InvalidArgument(format!(
                "destination has room for {} elements after offset {} but the deque holds {}",
                room, offset, self.len
            )));
        }

        let (front, back) = self.slices();
        let (dst_front, dst_back) = destination[offset..offset + self.len].split_at_mut(front.len());
        clone_run(dst_front, front);
        clone_run(dst_back, back);
        Ok(())
    }

    /// Returns a newly allocated vector holding clones of all elements, front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_back(2);
    /// deque.push_front(1);
    /// assert_eq!(deque.to_array(), vec![1, 2]);
    /// ```
    pub fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        let (front, back) = self.slices();
        let mut vec = Vec::with_capacity(self.len);
        vec.extend(front.iter().flatten().cloned());
        vec.extend(back.iter().flatten().cloned());
        vec
    }

    /// Shrinks the capacity to exactly `len` if less than [`TRIM_THRESHOLD`]
    /// of the buffer is in use.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::with_capacity(32);
    /// deque.extend([1, 2]);
    /// deque.trim_excess();
    /// assert_eq!(deque.capacity(), 2);
    /// assert_eq!(deque, [1, 2]);
    /// ```
    pub fn trim_excess(&mut self) {
        let threshold = (self.cap() as f64 * TRIM_THRESHOLD) as usize;
        if self.len < threshold {
            self.relocate(self.len, 0);
        }
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_back(5);
    /// deque.push_back(3);
    /// deque.push_front(4);
    /// let collected: Vec<&i32> = deque.iter().collect();
    /// assert_eq!(collected, [&4, &5, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = self.slices();
        Iter::new(front, back)
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::from([5, 3]);
    /// deque.push_front(4);
    /// for num in deque.iter_mut() {
    ///     *num -= 2;
    /// }
    /// assert_eq!(deque, [2, 3, 1]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (front, back) = window_mut(&mut self.buf, self.head, self.len);
        IterMut::new(front, back)
    }

    /// Returns a [`Cursor`] positioned at the front element.
    ///
    /// Unlike [`iter`](Deque::iter) a cursor does not borrow the deque, so the
    /// deque can be modified while the cursor is alive. The cursor notices
    /// such modifications and refuses to continue.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circdeque::{Deque, DequeError};
    /// let mut deque = Deque::from([1, 2]);
    /// let mut cursor = deque.cursor();
    /// assert_eq!(cursor.next(&deque), Ok(Some(&1)));
    ///
    /// deque.push_back(3);
    /// assert_eq!(cursor.next(&deque), Err(DequeError::ConcurrentModification));
    /// ```
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.version)
    }

    #[inline]
    pub(crate) fn version(&self) -> u64 {
        self.version
    }

    #[inline]
    fn cap(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.len == self.cap()
    }

    #[inline]
    fn bump_version(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// Maps a logical index to a slot. Requires `index <= len` and a non-empty buffer.
    #[inline]
    fn to_physical(&self, index: usize) -> usize {
        self.wrap_add(self.head, index)
    }

    #[inline]
    fn wrap_add(&self, slot: usize, addend: usize) -> usize {
        debug_assert!(slot < self.cap() && addend <= self.cap());
        let slot = slot + addend;
        if slot >= self.cap() {
            slot - self.cap()
        } else {
            slot
        }
    }

    #[inline]
    fn wrap_sub(&self, slot: usize, subtrahend: usize) -> usize {
        debug_assert!(slot < self.cap() && subtrahend <= self.cap());
        if slot >= subtrahend {
            slot - subtrahend
        } else {
            slot + self.cap() - subtrahend
        }
    }

    /// The occupied slots as (up to) two contiguous runs, front run first.
    fn slices(&self) -> (&[Option<T>], &[Option<T>]) {
        let (front, back) = window(self.head, self.len, self.cap());
        (&self.buf[front], &self.buf[back])
    }

    #[inline(never)]
    fn grow(&mut self, offset: usize) {
        debug_assert!(self.is_full());
        let new_cap = grown_capacity(self.cap());
        self.relocate(new_cap, offset);
        debug_assert!(!self.is_full());
    }

    /// Moves all elements into a fresh buffer of `new_cap` slots, packed in
    /// order starting at slot `offset`.
    fn relocate(&mut self, new_cap: usize, offset: usize) {
        debug_assert!(offset + self.len <= new_cap);
        let old_cap = self.cap();
        let mut old = mem::replace(&mut self.buf, empty_slots(new_cap));
        let (front, back) = window_mut(&mut old, self.head, self.len);
        for (dst, src) in self.buf[offset..].iter_mut().zip(front.iter_mut().chain(back)) {
            *dst = src.take();
        }
        self.head = offset;
        self.bump_version();
        log::trace!("deque reallocated from {} to {} slots ({} elements)", old_cap, new_cap, self.len);
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        let mut deque = Self::with_capacity(self.len);
        deque.extend(self.iter().cloned());
        deque
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T> Default for Deque<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for Deque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    fn from(other: Vec<T>) -> Self {
        let buf: Box<[Option<T>]> = other.into_iter().map(Some).collect();
        Self { head: 0, len: buf.len(), buf, version: 0 }
    }
}

impl<T> From<Deque<T>> for Vec<T> {
    fn from(other: Deque<T>) -> Self {
        other.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for Deque<T> {
    fn from(arr: [T; N]) -> Self {
        Self::from(Vec::from(arr))
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut deque = Self::with_capacity(lower);
        deque.extend(iter);
        deque
    }
}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        self.iter().for_each(|elem| elem.hash(state));
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(elem) => elem,
            Err(_) => index_out_of_bounds(self.len, index),
        }
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Ok(elem) => elem,
            Err(_) => index_out_of_bounds(len, index),
        }
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Deque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: PartialOrd> PartialOrd for Deque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for Deque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

__impl_slice_eq! { [] Deque<T>, Vec<U>, }
__impl_slice_eq! { [] Deque<T>, &[U], }
__impl_slice_eq! { [] Deque<T>, &mut [U], }
__impl_slice_eq! { [const N: usize] Deque<T>, [U; N], }
__impl_slice_eq! { [const N: usize] Deque<T>, &[U; N], }
__impl_slice_eq! { [const N: usize] Deque<T>, &mut [U; N], }

/// Unwraps a slot that the window invariant guarantees to be occupied.
#[inline]
pub(crate) fn occupied<S>(slot: Option<S>) -> S {
    match slot {
        Some(elem) => elem,
        None => unreachable!("empty slot inside the occupied window"),
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    repeat_with(|| None).take(capacity).collect()
}

/// Slot ranges of a window of `len` elements starting at `head` in a buffer of `cap` slots.
fn window(head: usize, len: usize, cap: usize) -> (Range<usize>, Range<usize>) {
    let room = cap - head;
    if len <= room {
        (head..head + len, 0..0)
    } else {
        (head..cap, 0..len - room)
    }
}

fn window_mut<T>(buf: &mut [T], head: usize, len: usize) -> (&mut [T], &mut [T]) {
    let (front, back) = window(head, len, buf.len());
    let (wrapped, rest) = buf.split_at_mut(head);
    (&mut rest[..front.len()], &mut wrapped[back])
}

fn clone_run<T: Clone>(dst: &mut [T], src: &[Option<T>]) {
    for (dst, src) in dst.iter_mut().zip(src.iter().flatten()) {
        dst.clone_from(src);
    }
}

fn grown_capacity(cap: usize) -> usize {
    match (cap.checked_add(MINIMUM_GROWTH), cap.checked_mul(GROWTH_FACTOR)) {
        (Some(bumped), Some(scaled)) => cmp::max(bumped, scaled),
        _ => panic!("capacity overflow"),
    }
}

fn index_out_of_bounds(len: usize, index: usize) -> ! {
    panic!("index out of bounds: the len is {} but the index is {}", len, index);
}
