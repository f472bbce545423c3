use super::{Deque, DequeError, Result};

/// A front-to-back traversal position that does not borrow the deque it walks.
///
/// A cursor remembers the structural version of the deque it was created
/// from. Pushing, popping, clearing or reallocating the deque afterwards
/// invalidates the cursor and every further [`next`](Cursor::next) call fails
/// with [`DequeError::ConcurrentModification`]. Mutating elements in place
/// (through [`Deque::get_mut`] or [`Deque::iter_mut`]) does not.
///
/// A cursor must only be used with the deque that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    version: u64,
}

impl Cursor {
    pub(super) fn new(version: u64) -> Self {
        Cursor { index: 0, version }
    }

    /// Logical index of the element the next call to [`next`](Cursor::next) returns.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the element at the cursor and moves past it, or `Ok(None)`
    /// once all elements have been visited.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::ConcurrentModification`] if `deque` was
    /// structurally modified since the cursor was created.
    pub fn next<'a, T>(&mut self, deque: &'a Deque<T>) -> Result<Option<&'a T>> {
        if deque.version() != self.version {
            return Err(DequeError::ConcurrentModification);
        }
        match deque.get(self.index) {
            Ok(elem) => {
                self.index += 1;
                Ok(Some(elem))
            }
            Err(_) => Ok(None),
        }
    }
}
