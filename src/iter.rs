use std::iter::{Chain, FusedIterator};
use std::slice;

use super::occupied;

/// An iterator over the elements of a `Deque`.
///
/// This `struct` is created by the [`iter`] method on [`Deque`]. See its
/// documentation for more information.
///
/// [`iter`]: crate::Deque::iter
/// [`Deque`]: crate::Deque
#[derive(Debug)]
pub struct Iter<'a, T> {
    slots: Chain<slice::Iter<'a, Option<T>>, slice::Iter<'a, Option<T>>>,
}

// a derive would require `T: Clone`
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { slots: self.slots.clone() }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(front: &'a [Option<T>], back: &'a [Option<T>]) -> Self {
        Iter { slots: front.iter().chain(back.iter()) }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.slots.next().map(|slot| occupied(slot.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.slots.next_back().map(|slot| occupied(slot.as_ref()))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the elements of a `Deque`.
///
/// This `struct` is created by the [`iter_mut`] method on [`Deque`]. See its
/// documentation for more information.
///
/// [`iter_mut`]: crate::Deque::iter_mut
/// [`Deque`]: crate::Deque
#[derive(Debug)]
pub struct IterMut<'a, T> {
    slots: Chain<slice::IterMut<'a, Option<T>>, slice::IterMut<'a, Option<T>>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(front: &'a mut [Option<T>], back: &'a mut [Option<T>]) -> Self {
        IterMut { slots: front.iter_mut().chain(back.iter_mut()) }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.slots.next().map(|slot| occupied(slot.as_mut()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.slots.next_back().map(|slot| occupied(slot.as_mut()))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
