//! Error kinds reported by the containers.
//!
//! Each container has its own closed set of failures. Errors are plain values
//! compared by kind; no container retries internally and a failed operation
//! never leaves partial state behind.

/// Errors that can occur when operating on a [`GrowableArray`].
///
/// [`GrowableArray`]: crate::array::GrowableArray
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArrayError {
    /// A construction-time capacity was outside `1..max_capacity`.
    #[error("capacity must be at least 1 and below the array ceiling")]
    InvalidCapacity,
    /// An index was not below the logical length.
    #[error("index must be below the length of the array")]
    IndexOutOfRange,
    /// A search found no matching element.
    #[error("element is not in the array")]
    ElementNotFound,
    /// The backing store is already at its ceiling and cannot grow.
    #[error("array capacity ceiling exceeded")]
    CapacityExceeded,
}

/// Errors that can occur when operating on a [`CircularQueue`].
///
/// [`CircularQueue`]: crate::queue::CircularQueue
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// A construction-time capacity was outside `1..=MAX_QUEUE_CAPACITY`.
    #[error("capacity should be in range [1, {}]", crate::limits::MAX_QUEUE_CAPACITY)]
    InvalidCapacity,
    /// The queue already holds as many elements as its capacity.
    #[error("queue capacity exceeded")]
    CapacityExceeded,
    /// Dequeue or peek on a queue with no elements.
    #[error("operation not permitted on an empty queue")]
    EmptyQueue,
}
