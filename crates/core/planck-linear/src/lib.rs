//! Linear containers managed directly over a contiguous backing store.
//!
//! Instead of delegating to `Vec` or `VecDeque`, the types in this crate own a
//! boxed slice of slots and do their own capacity management and index
//! arithmetic on top of it.
//!
//! # Overview
//!
//! - [`array::GrowableArray`] - an indexed container that doubles its backing
//!   store when it runs out of room, up to a hard ceiling
//! - [`queue::CircularQueue`] - a fixed-capacity FIFO over a store with one
//!   reserved sentinel slot
//!
//! Both are exposed through the [`traits::Array`] and [`traits::Queue`]
//! capability traits so code can be written against the behaviour rather than
//! the concrete container.
//!
//! All types in this crate:
//! - Allocate exactly one backing store at a time, owned exclusively
//! - Report every failure as a typed [`Result`], including a backing store
//!   that cannot be allocated
//! - Leave the container unchanged when an operation fails
//! - Work in `no_std` environments with an allocator
//!
//! # Examples
//!
//! ## Using `GrowableArray`
//!
//! ```
//! use planck_linear::array::GrowableArray;
//!
//! let mut array = GrowableArray::new();
//! array.add(10).unwrap();
//! array.add(11).unwrap();
//! array.add(10).unwrap();
//!
//! assert_eq!(array.find(&10), Ok(0));
//! assert_eq!(array.remove_at(0), Ok(10));
//! assert_eq!(array.size(), 2);
//! assert_eq!(array.get(0), Ok(&11));
//! ```
//!
//! ## Using `CircularQueue`
//!
//! ```
//! use planck_linear::queue::CircularQueue;
//!
//! let mut queue = CircularQueue::new(2).unwrap();
//! queue.enqueue(111).unwrap();
//! queue.enqueue(1337).unwrap();
//! assert_eq!(queue.dequeue(), Ok(111));
//!
//! queue.enqueue(5).unwrap();
//! assert_eq!(queue.dequeue(), Ok(1337));
//! assert_eq!(queue.dequeue(), Ok(5));
//! assert!(queue.is_empty());
//! ```
//!
//! # Features
//!
//! - `std` (default): Forwards `std` to the error and logging dependencies
//!
//! # Logging
//!
//! Reallocations and rejected inserts are reported through [`tracing`]. The
//! crate never installs a subscriber.
//!
//! # Thread Safety
//!
//! None of the containers synchronize internally. Share them across threads
//! only behind a caller-provided lock.

#![no_std]

extern crate alloc;

pub mod array;
pub mod error;
pub mod limits;
pub mod queue;
pub mod traits;

pub use array::GrowableArray;
pub use error::{ArrayError, QueueError};
pub use limits::{ArrayLimits, DEFAULT_CAPACITY, MAX_CAPACITY, MAX_QUEUE_CAPACITY};
pub use queue::CircularQueue;
pub use traits::{Array, Queue};

use alloc::boxed::Box;
use alloc::vec::Vec;

/// Allocates a backing store of `slots` empty markers.
///
/// Returns `None` if the allocator refuses the request or its size in bytes
/// overflows.
fn empty_store<T>(slots: usize) -> Option<Box<[Option<T>]>> {
    let mut store = Vec::new();
    store.try_reserve_exact(slots).ok()?;
    store.resize_with(slots, || None);
    Some(store.into_boxed_slice())
}
