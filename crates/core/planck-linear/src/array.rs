//! Growable indexed array over a manually reallocated backing store.
//!
//! This module provides [`GrowableArray`], an indexed container that keeps its
//! elements in a single boxed slice of slots and replaces that slice with a
//! larger one when it runs out of room.
//!
//! # Capacity Management
//!
//! An insert that would leave no free slot grows the store first. Growth
//! doubles the capacity while it is below half of the ceiling and clamps to
//! the ceiling exactly otherwise, so the ratio stays at 2 until the final
//! step. Once the store is at the ceiling, [`GrowableArray::add`] fails with
//! [`ArrayError::CapacityExceeded`]. The store never shrinks.
//!
//! One slot is always left free: the array holds at most `capacity - 1`
//! elements.
//!
//! # Performance
//!
//! - Add: amortized O(1)
//! - Get/set: O(1)
//! - Find, remove, reverse: O(n)
//!
//! # Examples
//!
//! ```
//! use planck_linear::array::GrowableArray;
//!
//! let mut array = GrowableArray::new();
//! assert_eq!(array.capacity(), 4);
//!
//! for value in 0..4 {
//!     array.add(value).unwrap();
//! }
//! assert_eq!(array.capacity(), 8);
//!
//! array.reverse();
//! let collected: Vec<_> = array.iter().copied().collect();
//! assert_eq!(collected, [3, 2, 1, 0]);
//! ```

use alloc::boxed::Box;

use crate::error::ArrayError;
use crate::limits::{ArrayLimits, DEFAULT_CAPACITY, MAX_CAPACITY};

/// Returns the capacity the store grows to from `current`, or `None` if
/// `current` is already at `max`.
///
/// # Examples
///
/// ```
/// use planck_linear::array::next_capacity;
///
/// assert_eq!(next_capacity(4, 64), Some(8));
/// assert_eq!(next_capacity(40, 64), Some(64));
/// assert_eq!(next_capacity(64, 64), None);
/// ```
#[must_use]
pub const fn next_capacity(current: usize, max: usize) -> Option<usize> {
    if current >= max {
        None
    } else if current < max / 2 {
        Some(current * 2)
    } else {
        Some(max)
    }
}

/// An indexed container backed by a store it reallocates itself.
///
/// Elements live contiguously in slots `[0, size)` in insertion order; every
/// slot past that is empty.
///
/// # Type Parameters
///
/// - `T`: The element type. [`GrowableArray::find`] additionally requires
///   `T: PartialEq`.
///
/// # Examples
///
/// ```
/// use planck_linear::array::GrowableArray;
/// use planck_linear::error::ArrayError;
///
/// let mut array = GrowableArray::with_capacity(2).unwrap();
/// array.add("a").unwrap();
/// array.add("b").unwrap();
///
/// array.set(1, "c").unwrap();
/// assert_eq!(array.get(1), Ok(&"c"));
/// assert_eq!(array.get(2), Err(ArrayError::IndexOutOfRange));
/// ```
#[derive(Debug, Clone)]
pub struct GrowableArray<T> {
    store: Box<[Option<T>]>,
    len: usize,
    max_capacity: usize,
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GrowableArray<T> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: core::iter::repeat_with(|| None).take(DEFAULT_CAPACITY).collect(),
            len: 0,
            max_capacity: MAX_CAPACITY,
        }
    }

    /// Creates an empty array with `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidCapacity`] unless
    /// `1 <= capacity < MAX_CAPACITY`.
    ///
    /// # Examples
    ///
    /// ```
    /// use planck_linear::array::GrowableArray;
    /// use planck_linear::error::ArrayError;
    ///
    /// let array = GrowableArray::<u8>::with_capacity(10).unwrap();
    /// assert_eq!(array.capacity(), 10);
    ///
    /// assert_eq!(
    ///     GrowableArray::<u8>::with_capacity(0).unwrap_err(),
    ///     ArrayError::InvalidCapacity,
    /// );
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Self::with_limits(ArrayLimits::new().with_initial_capacity(capacity))
    }

    /// Creates an empty array sized and bounded by `limits`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidCapacity`] unless
    /// `1 <= initial_capacity < max_capacity <= MAX_CAPACITY`, or if the
    /// initial store cannot be allocated.
    pub fn with_limits(limits: ArrayLimits) -> Result<Self, ArrayError> {
        if !limits.is_valid() {
            return Err(ArrayError::InvalidCapacity);
        }
        let Some(store) = crate::empty_store(limits.initial_capacity()) else {
            tracing::debug!(
                capacity = limits.initial_capacity(),
                "failed to allocate array backing store"
            );
            return Err(ArrayError::InvalidCapacity);
        };
        Ok(Self {
            store,
            len: 0,
            max_capacity: limits.max_capacity(),
        })
    }

    /// Appends `value`, growing the backing store first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityExceeded`] if the store needs to grow but
    /// is already at the ceiling, or the larger store cannot be allocated.
    /// The array is left unchanged.
    pub fn add(&mut self, value: T) -> Result<(), ArrayError> {
        if self.len + 1 >= self.capacity() {
            self.grow()?;
        }
        self.store[self.len] = Some(value);
        self.len += 1;
        Ok(())
    }

    fn grow(&mut self) -> Result<(), ArrayError> {
        let old = self.capacity();
        let Some(new) = next_capacity(old, self.max_capacity) else {
            tracing::debug!(capacity = old, "array at capacity ceiling, rejecting add");
            return Err(ArrayError::CapacityExceeded);
        };

        let Some(mut store) = crate::empty_store(new) else {
            tracing::debug!(old, new, "failed to allocate larger array backing store");
            return Err(ArrayError::CapacityExceeded);
        };
        for (dst, src) in store.iter_mut().zip(self.store.iter_mut()) {
            *dst = src.take();
        }
        self.store = store;

        tracing::trace!(old, new, "grew array backing store");
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfRange);
        }
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= size()`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        self.check_index(index)?;
        self.store[index].as_ref().ok_or(ArrayError::IndexOutOfRange)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= size()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        self.check_index(index)?;
        self.store[index].as_mut().ok_or(ArrayError::IndexOutOfRange)
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= size()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        self.check_index(index)?;
        self.store[index] = Some(value);
        Ok(())
    }

    /// Returns the index of the first element matching `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::ElementNotFound`] if nothing matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use planck_linear::array::GrowableArray;
    ///
    /// let mut array = GrowableArray::new();
    /// array.add("alpha").unwrap();
    /// array.add("beta").unwrap();
    ///
    /// assert_eq!(array.find_by(|s| s.starts_with('b')), Ok(1));
    /// ```
    pub fn find_by<F>(&self, mut predicate: F) -> Result<usize, ArrayError>
    where
        F: FnMut(&T) -> bool,
    {
        // Scans the whole store; empty slots never match.
        self.store
            .iter()
            .position(|slot| slot.as_ref().is_some_and(&mut predicate))
            .ok_or(ArrayError::ElementNotFound)
    }

    /// Removes and returns the element at `index`, shifting every later
    /// element one slot left. Preserves ordering.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= size()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use planck_linear::array::GrowableArray;
    ///
    /// let mut array = GrowableArray::new();
    /// array.add(1).unwrap();
    /// array.add(2).unwrap();
    /// array.add(3).unwrap();
    ///
    /// assert_eq!(array.remove_at(1), Ok(2));
    /// assert_eq!(array.get(1), Ok(&3));
    /// assert_eq!(array.size(), 2);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, ArrayError> {
        self.check_index(index)?;
        let removed = self.store[index].take().ok_or(ArrayError::IndexOutOfRange)?;
        // The hole left at `index` travels to `len - 1`, clearing the old tail.
        self.store[index..self.len].rotate_left(1);
        self.len -= 1;
        Ok(removed)
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) {
        let len = self.len;
        for i in 0..len / 2 {
            let j = len - i - 1;
            self.store.swap(i, j);
        }
    }

    /// Returns the number of elements in the array.
    #[must_use]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns true if the array holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the current backing store.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    /// Returns the ceiling the backing store may grow to.
    #[must_use]
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Returns an iterator over the elements in index order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.store[..self.len].iter().flatten()
    }
}

impl<T> GrowableArray<T>
where
    T: PartialEq,
{
    /// Returns the lowest index holding an element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::ElementNotFound`] if no element is equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use planck_linear::array::GrowableArray;
    /// use planck_linear::error::ArrayError;
    ///
    /// let mut array = GrowableArray::new();
    /// array.add(10).unwrap();
    /// array.add(11).unwrap();
    /// array.add(10).unwrap();
    ///
    /// assert_eq!(array.find(&10), Ok(0));
    /// assert_eq!(array.find(&12), Err(ArrayError::ElementNotFound));
    /// ```
    pub fn find(&self, value: &T) -> Result<usize, ArrayError> {
        self.find_by(|element| element == value)
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = core::iter::Flatten<core::slice::Iter<'a, Option<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.store[..self.len].iter().flatten()
    }
}
