use thiserror::Error;

/// Errors reported by [`Deque`](crate::Deque) operations.
///
/// All of them are precondition violations by the caller. The deque never
/// mutates itself before returning one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DequeError {
    /// A capacity, destination or offset argument was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An element was requested from an empty deque.
    #[error("deque is empty")]
    EmptyContainer,

    /// A positional access was past the last element.
    #[error("index out of range: the len is {len} but the index is {index}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The deque was structurally modified while a [`Cursor`](crate::Cursor) was walking it.
    #[error("deque was modified during traversal")]
    ConcurrentModification,
}

pub type Result<T, E = DequeError> = std::result::Result<T, E>;
