//! Fixed-capacity circular queue with a sentinel slot.
//!
//! This module provides [`CircularQueue`], a First-In-First-Out queue over a
//! backing store that wraps around when a cursor reaches its end.
//!
//! # Capacity
//!
//! A queue created with capacity `c` allocates `c + 1` slots. The extra slot
//! is never filled, so `front == end` always means empty and a full queue
//! always has exactly one free slot between `end` and `front`. No element
//! counter is kept; the size is derived from the two cursors.
//!
//! # Performance
//!
//! - Enqueue: O(1)
//! - Dequeue: O(1)
//! - Peek: O(1)
//!
//! # Examples
//!
//! ```
//! use planck_linear::error::QueueError;
//! use planck_linear::queue::CircularQueue;
//!
//! let mut queue = CircularQueue::new(3).unwrap();
//!
//! queue.enqueue(1).unwrap();
//! queue.enqueue(2).unwrap();
//! queue.enqueue(3).unwrap();
//! assert_eq!(queue.enqueue(4), Err(QueueError::CapacityExceeded));
//!
//! // Dequeuing frees a slot; the next enqueue wraps around.
//! assert_eq!(queue.dequeue(), Ok(1));
//! queue.enqueue(4).unwrap();
//!
//! assert_eq!(queue.peek(), Ok(&2));
//! assert_eq!(queue.size(), 3);
//! ```

use alloc::boxed::Box;

use crate::error::QueueError;
use crate::limits::MAX_QUEUE_CAPACITY;

/// A fixed-capacity FIFO queue over a wrap-around backing store.
///
/// Elements enter at `end` and leave at `front`; both cursors advance modulo
/// the store length.
///
/// # Examples
///
/// ```
/// use planck_linear::queue::CircularQueue;
///
/// let mut queue = CircularQueue::new(16).unwrap();
///
/// queue.enqueue(10).unwrap();
/// queue.enqueue(20).unwrap();
/// queue.enqueue(30).unwrap();
///
/// assert_eq!(queue.dequeue(), Ok(10));
/// assert_eq!(queue.dequeue(), Ok(20));
/// assert_eq!(queue.size(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    store: Box<[Option<T>]>,
    front: usize,
    end: usize,
}

impl<T> CircularQueue<T> {
    /// Creates an empty queue that holds up to `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidCapacity`] unless
    /// `1 <= capacity <= MAX_QUEUE_CAPACITY`, or if the store cannot be
    /// allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use planck_linear::error::QueueError;
    /// use planck_linear::queue::CircularQueue;
    ///
    /// let queue = CircularQueue::<u8>::new(1).unwrap();
    /// assert!(queue.is_empty());
    ///
    /// assert_eq!(CircularQueue::<u8>::new(0).unwrap_err(), QueueError::InvalidCapacity);
    /// ```
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        if capacity == 0 || capacity > MAX_QUEUE_CAPACITY {
            return Err(QueueError::InvalidCapacity);
        }
        let store = crate::empty_store(capacity + 1).ok_or(QueueError::InvalidCapacity)?;
        Ok(Self {
            store,
            front: 0,
            end: 0,
        })
    }

    /// Number of slots in the store, sentinel included.
    fn slots(&self) -> usize {
        self.store.len()
    }

    /// Returns the maximum number of elements the queue holds.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots() - 1
    }

    /// Returns true if the queue holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.front == self.end
    }

    /// Returns true if the queue holds `capacity()` elements.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.size() == self.capacity()
    }

    /// Returns the number of elements in the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use planck_linear::queue::CircularQueue;
    ///
    /// let mut queue = CircularQueue::new(2).unwrap();
    /// queue.enqueue('a').unwrap();
    /// queue.enqueue('b').unwrap();
    /// queue.dequeue().unwrap();
    /// queue.enqueue('c').unwrap();
    ///
    /// // `end` has wrapped behind `front`.
    /// assert_eq!(queue.size(), 2);
    /// ```
    #[must_use]
    pub fn size(&self) -> usize {
        if self.front > self.end {
            self.end + self.slots() - self.front
        } else {
            self.end - self.front
        }
    }

    /// Adds `value` at the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::CapacityExceeded`] if the queue is full. The
    /// queue is left unchanged.
    pub fn enqueue(&mut self, value: T) -> Result<(), QueueError> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity(), "queue full, rejecting enqueue");
            return Err(QueueError::CapacityExceeded);
        }
        self.store[self.end] = Some(value);
        self.end = (self.end + 1) % self.slots();
        Ok(())
    }

    /// Removes and returns the element at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::EmptyQueue`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        let value = self.store[self.front].take().ok_or(QueueError::EmptyQueue)?;
        self.front = (self.front + 1) % self.slots();
        Ok(value)
    }

    /// Returns a reference to the element at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::EmptyQueue`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        self.store[self.front].as_ref().ok_or(QueueError::EmptyQueue)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    extern crate std;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn new_rejects_bad_capacity() {
        assert_eq!(CircularQueue::<i32>::new(0).unwrap_err(), QueueError::InvalidCapacity);
        assert_eq!(CircularQueue::<i32>::new(9999).unwrap_err(), QueueError::InvalidCapacity);
        assert_eq!(
            CircularQueue::<i32>::new(MAX_QUEUE_CAPACITY + 1).unwrap_err(),
            QueueError::InvalidCapacity
        );
    }

    #[test]
    fn new_accepts_bounds() {
        let small = CircularQueue::<i32>::new(1).unwrap();
        assert_eq!(small.capacity(), 1);
        assert_eq!(small.store.len(), 2);

        let large = CircularQueue::<i32>::new(MAX_QUEUE_CAPACITY).unwrap();
        assert_eq!(large.capacity(), MAX_QUEUE_CAPACITY);
    }

    #[test]
    fn enqueue_then_peek() {
        let mut queue = CircularQueue::new(2).unwrap();
        assert_eq!(queue.size(), 0);
        queue.enqueue(15).unwrap();
        queue.enqueue(2).unwrap();
        assert_eq!(queue.size(), 2);
        assert_eq!(queue.peek(), Ok(&15));
        assert_eq!(queue.size(), 2);
    }

    #[test]
    fn enqueue_beyond_capacity() {
        let mut queue = CircularQueue::new(2).unwrap();
        queue.enqueue(15).unwrap();
        queue.enqueue(2).unwrap();
        assert!(queue.is_full());
        assert_eq!(queue.enqueue(9), Err(QueueError::CapacityExceeded));
        assert_eq!(queue.size(), 2);
        assert_eq!(queue.peek(), Ok(&15));
    }

    #[test]
    fn dequeue_scenario() {
        let mut queue = CircularQueue::new(2).unwrap();
        queue.enqueue(111).unwrap();
        queue.enqueue(1337).unwrap();
        assert_eq!(queue.dequeue(), Ok(111));
        queue.enqueue(5).unwrap();
        assert_eq!(queue.dequeue(), Ok(1337));
        assert_eq!(queue.dequeue(), Ok(5));
        assert!(queue.is_empty());
    }

    #[test]
    fn dequeue_and_peek_empty() {
        let mut queue = CircularQueue::<i32>::new(2).unwrap();
        assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));
        assert_eq!(queue.peek(), Err(QueueError::EmptyQueue));
    }

    #[test]
    fn wrap_around_multiple_times() {
        let mut queue = CircularQueue::new(2).unwrap();
        for index in 0..10 {
            queue.enqueue(index).unwrap();
            queue.enqueue(index + 1).unwrap();
            assert_eq!(queue.size(), 2);
            assert_eq!(queue.dequeue(), Ok(index));
            assert_eq!(queue.dequeue(), Ok(index + 1));
            assert_eq!(queue.size(), 0);
        }
    }

    #[test]
    fn size_after_end_wraps_behind_front() {
        let mut queue = CircularQueue::new(3).unwrap();
        for value in 0..3 {
            queue.enqueue(value).unwrap();
        }
        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        queue.enqueue(3).unwrap();
        queue.enqueue(4).unwrap();
        assert!(queue.front > queue.end);
        assert_eq!(queue.size(), 3);
        assert!(queue.is_full());
    }

    #[test]
    fn capacity_one_alternates() {
        let mut queue = CircularQueue::new(1).unwrap();
        for value in 0..5 {
            queue.enqueue(value).unwrap();
            assert_eq!(queue.enqueue(value), Err(QueueError::CapacityExceeded));
            assert_eq!(queue.dequeue(), Ok(value));
        }
    }

    #[test]
    fn dequeue_releases_slot() {
        let shared = Rc::new(1);
        let mut queue = CircularQueue::new(2).unwrap();
        queue.enqueue(Rc::clone(&shared)).unwrap();
        assert_eq!(Rc::strong_count(&shared), 2);
        drop(queue.dequeue());
        assert_eq!(Rc::strong_count(&shared), 1);
        assert!(queue.store.iter().all(Option::is_none));
    }
}
