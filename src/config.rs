//! Construction-time tuning for [`Deque`].
//!
//! The defaults suit general use; high-churn queues that repeatedly drain and
//! refill to a known size can raise `min_capacity` to avoid shrinking and
//! regrowing, and callers that prefer a stable footprint can turn shrinking off.

use crate::deque::Deque;

/// Capacity used by [`Deque::new`] and [`DequeConfig::default`].
pub const DEFAULT_CAPACITY: usize = 4;

/// Smallest capacity a deque will ever have.
///
/// One slot is always kept free, so two slots is the least that can hold an
/// element.
pub const MIN_CAPACITY: usize = 2;

/// Configuration for a [`Deque`].
///
/// # Examples
/// ```
/// use ringque::{Deque, DequeConfig};
///
/// let config = DequeConfig {
///     initial_capacity: 100,
///     ..Default::default()
/// };
/// let deque: Deque<u32> = config.build();
/// assert_eq!(deque.capacity(), 128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DequeConfig {
    /// Lower bound for the capacity chosen at construction.
    ///
    /// Rounded up to a power of two. When building from a sequence the
    /// capacity is also large enough to hold every element with one slot
    /// to spare.
    ///
    /// Default: 4
    pub initial_capacity: usize,

    /// Capacity below which removals never shrink the deque.
    ///
    /// Rounded up to a power of two, and never less than [`MIN_CAPACITY`].
    ///
    /// Default: 4
    pub min_capacity: usize,

    /// Whether removals halve the capacity once the deque is a quarter full.
    ///
    /// Default: true
    pub shrink: bool,
}

impl Default for DequeConfig {
    fn default() -> Self {
        DequeConfig {
            initial_capacity: DEFAULT_CAPACITY,
            min_capacity: DEFAULT_CAPACITY,
            shrink: true,
        }
    }
}

impl DequeConfig {
    /// Creates an empty deque with this configuration.
    #[inline]
    pub fn build<T>(self) -> Deque<T> {
        Deque::with_config(self)
    }

    /// Creates a deque holding `items` in order, with this configuration.
    ///
    /// # Examples
    /// ```
    /// let deque = ringque::DequeConfig::default().build_from(1..=15);
    /// assert_eq!(deque.capacity(), 16);
    /// assert_eq!(deque.len(), 15);
    /// ```
    pub fn build_from<T, I: IntoIterator<Item = T>>(self, items: I) -> Deque<T> {
        Deque::from_iter_with_config(items, self)
    }

    /// The normalized shrink floor: a power of two no less than [`MIN_CAPACITY`].
    pub(crate) fn floor(&self) -> usize {
        round_capacity(self.min_capacity.max(MIN_CAPACITY))
    }

    /// The capacity to allocate for a deque that must hold `len` elements.
    pub(crate) fn capacity_for(&self, len: usize) -> usize {
        let needed = len.checked_add(1).unwrap_or_else(|| capacity_overflow());
        round_capacity(needed.max(self.initial_capacity).max(self.floor()))
    }
}

/// Rounds `n` up to the next power of two.
///
/// # Panics
/// Panics if the result does not fit in `usize`.
#[inline]
pub(crate) fn round_capacity(n: usize) -> usize {
    n.checked_next_power_of_two()
        .unwrap_or_else(|| capacity_overflow())
}

#[inline(never)]
#[cold]
#[track_caller]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}
