//! Capability traits shared by containers with the same behaviour.
//!
//! Code that only needs indexed access or FIFO semantics can be written
//! against [`Array`] or [`Queue`] instead of a concrete container.
//!
//! # Examples
//!
//! ```
//! use planck_linear::traits::Queue;
//! use planck_linear::queue::CircularQueue;
//!
//! fn drain<Q: Queue<u32>>(queue: &mut Q) -> u32 {
//!     let mut total = 0;
//!     while let Ok(value) = queue.dequeue() {
//!         total += value;
//!     }
//!     total
//! }
//!
//! let mut queue = CircularQueue::new(4).unwrap();
//! queue.enqueue(1).unwrap();
//! queue.enqueue(2).unwrap();
//! assert_eq!(drain(&mut queue), 3);
//! ```

use crate::array::GrowableArray;
use crate::error::{ArrayError, QueueError};
use crate::queue::CircularQueue;

/// An indexed container with search, removal and reversal.
pub trait Array<T> {
    /// Appends `value` at the end.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityExceeded`] if the container cannot grow.
    fn add(&mut self, value: T) -> Result<(), ArrayError>;

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= size()`.
    fn get(&self, index: usize) -> Result<&T, ArrayError>;

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= size()`.
    fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError>;

    /// Returns the lowest index holding an element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::ElementNotFound`] if no element is equal.
    fn find(&self, value: &T) -> Result<usize, ArrayError>
    where
        T: PartialEq;

    /// Removes and returns the element at `index`, keeping the rest in order.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= size()`.
    fn remove_at(&mut self, index: usize) -> Result<T, ArrayError>;

    /// Reverses the order of the elements in place.
    fn reverse(&mut self);

    /// Returns the number of elements.
    fn size(&self) -> usize;
}

/// A first-in-first-out container.
pub trait Queue<T> {
    /// Adds `value` at the back.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::CapacityExceeded`] if the queue is full.
    fn enqueue(&mut self, value: T) -> Result<(), QueueError>;

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::EmptyQueue`] if the queue is empty.
    fn dequeue(&mut self) -> Result<T, QueueError>;

    /// Returns a reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::EmptyQueue`] if the queue is empty.
    fn peek(&self) -> Result<&T, QueueError>;

    /// Returns true if the queue holds no elements.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements.
    fn size(&self) -> usize;
}

impl<T> Array<T> for GrowableArray<T> {
    fn add(&mut self, value: T) -> Result<(), ArrayError> {
        GrowableArray::add(self, value)
    }

    fn get(&self, index: usize) -> Result<&T, ArrayError> {
        GrowableArray::get(self, index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        GrowableArray::set(self, index, value)
    }

    fn find(&self, value: &T) -> Result<usize, ArrayError>
    where
        T: PartialEq,
    {
        GrowableArray::find(self, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, ArrayError> {
        GrowableArray::remove_at(self, index)
    }

    fn reverse(&mut self) {
        GrowableArray::reverse(self);
    }

    fn size(&self) -> usize {
        GrowableArray::size(self)
    }
}

impl<T> Queue<T> for CircularQueue<T> {
    fn enqueue(&mut self, value: T) -> Result<(), QueueError> {
        CircularQueue::enqueue(self, value)
    }

    fn dequeue(&mut self) -> Result<T, QueueError> {
        CircularQueue::dequeue(self)
    }

    fn peek(&self) -> Result<&T, QueueError> {
        CircularQueue::peek(self)
    }

    fn is_empty(&self) -> bool {
        CircularQueue::is_empty(self)
    }

    fn size(&self) -> usize {
        CircularQueue::size(self)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    fn fill<A: Array<i32>>(array: &mut A, values: &[i32]) {
        for &value in values {
            array.add(value).unwrap();
        }
    }

    #[test]
    fn array_through_trait() {
        let mut array = GrowableArray::new();
        fill(&mut array, &[10, 11, 10]);
        let dyn_array: &mut dyn Array<i32> = &mut array;

        assert_eq!(dyn_array.find(&10), Ok(0));
        assert_eq!(dyn_array.remove_at(0), Ok(10));
        assert_eq!(dyn_array.size(), 2);
        dyn_array.reverse();
        assert_eq!(dyn_array.get(0), Ok(&10));
        dyn_array.set(1, 7).unwrap();
        assert_eq!(dyn_array.get(1), Ok(&7));
    }

    #[test]
    fn queue_through_trait() {
        let mut queue = CircularQueue::new(2).unwrap();
        let dyn_queue: &mut dyn Queue<i32> = &mut queue;

        assert!(dyn_queue.is_empty());
        dyn_queue.enqueue(1).unwrap();
        dyn_queue.enqueue(2).unwrap();
        assert_eq!(dyn_queue.enqueue(3), Err(QueueError::CapacityExceeded));
        assert_eq!(dyn_queue.peek(), Ok(&1));
        assert_eq!(dyn_queue.dequeue(), Ok(1));
        assert_eq!(dyn_queue.size(), 1);
    }
}
