//! Capacity ceilings and construction-time configuration.
//!
//! The ceilings are explicit constants rather than anything derived from the
//! platform. [`ArrayLimits`] lets a caller pick a lower array ceiling, for
//! example to bound memory use in a constrained environment.

/// Backing store size of an array built with [`GrowableArray::new`].
///
/// [`GrowableArray::new`]: crate::array::GrowableArray::new
pub const DEFAULT_CAPACITY: usize = 1 << 2;

/// Hard ceiling on the backing store size of a [`GrowableArray`].
///
/// This is the largest 32-bit signed index.
///
/// [`GrowableArray`]: crate::array::GrowableArray
pub const MAX_CAPACITY: usize = 0x7FFF_FFFF;

/// Largest usable capacity a [`CircularQueue`] may be created with.
///
/// [`CircularQueue`]: crate::queue::CircularQueue
pub const MAX_QUEUE_CAPACITY: usize = 1 << 10;

/// Initial size and ceiling for a [`GrowableArray`].
///
/// # Examples
///
/// ```
/// use planck_linear::array::GrowableArray;
/// use planck_linear::limits::ArrayLimits;
///
/// let limits = ArrayLimits::new()
///     .with_initial_capacity(2)
///     .with_max_capacity(16);
/// let array = GrowableArray::<u32>::with_limits(limits).unwrap();
///
/// assert_eq!(array.capacity(), 2);
/// assert_eq!(array.max_capacity(), 16);
/// ```
///
/// [`GrowableArray`]: crate::array::GrowableArray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayLimits {
    initial_capacity: usize,
    max_capacity: usize,
}

impl ArrayLimits {
    /// Limits of [`DEFAULT_CAPACITY`] and [`MAX_CAPACITY`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            max_capacity: MAX_CAPACITY,
        }
    }

    /// Sets the size of the first backing store.
    #[must_use]
    pub const fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the ceiling the backing store may grow to.
    #[must_use]
    pub const fn with_max_capacity(mut self, capacity: usize) -> Self {
        self.max_capacity = capacity;
        self
    }

    /// Size of the first backing store.
    #[must_use]
    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Ceiling the backing store may grow to.
    #[must_use]
    pub const fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Returns true if `1 <= initial_capacity < max_capacity <= MAX_CAPACITY`.
    ///
    /// The ceiling can only be lowered, never raised past [`MAX_CAPACITY`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.initial_capacity >= 1
            && self.initial_capacity < self.max_capacity
            && self.max_capacity <= MAX_CAPACITY
    }
}

impl Default for ArrayLimits {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let limits = ArrayLimits::default();
        assert_eq!(limits.initial_capacity(), 4);
        assert_eq!(limits.max_capacity(), MAX_CAPACITY);
        assert!(limits.is_valid());
    }

    #[test]
    fn zero_initial_is_invalid() {
        assert!(!ArrayLimits::new().with_initial_capacity(0).is_valid());
    }

    #[test]
    fn initial_must_stay_below_max() {
        let limits = ArrayLimits::new().with_initial_capacity(8).with_max_capacity(8);
        assert!(!limits.is_valid());
        assert!(limits.with_max_capacity(9).is_valid());
    }

    #[test]
    fn max_cannot_exceed_ceiling() {
        assert!(ArrayLimits::new().with_max_capacity(MAX_CAPACITY).is_valid());
        assert!(!ArrayLimits::new().with_max_capacity(MAX_CAPACITY + 1).is_valid());
        assert!(!ArrayLimits::new().with_max_capacity(usize::MAX).is_valid());

        let oversized = ArrayLimits::new()
            .with_initial_capacity(MAX_CAPACITY + 1)
            .with_max_capacity(usize::MAX);
        assert!(!oversized.is_valid());
    }

    #[test]
    fn initial_at_ceiling_is_invalid() {
        assert!(!ArrayLimits::new().with_initial_capacity(MAX_CAPACITY).is_valid());
        assert!(
            ArrayLimits::new()
                .with_initial_capacity(MAX_CAPACITY - 1)
                .is_valid()
        );
    }

    #[test]
    fn queue_ceiling_value() {
        assert_eq!(MAX_QUEUE_CAPACITY, 1024);
    }
}
