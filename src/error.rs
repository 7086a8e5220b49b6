//! Errors reported by the fallible growth path.

use core::alloc::Layout;

/// The reason a deque could not make room for more elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ReserveError {
    /// The required capacity does not fit in `usize`, or the backing storage
    /// would exceed `isize::MAX` bytes.
    #[error("deque capacity overflow")]
    CapacityOverflow,
    /// The allocator could not satisfy the request.
    #[error("memory allocation of {} bytes failed", .layout.size())]
    AllocFailed {
        /// The layout of the storage that could not be allocated.
        layout: Layout,
    },
}

/// Returned by [`Deque::try_push_back`](crate::Deque::try_push_back) and
/// [`Deque::try_push_front`](crate::Deque::try_push_front) when the deque
/// could not grow; hands the rejected value back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("could not make room for another element: {source}")]
pub struct PushError<T> {
    /// The value that was not inserted.
    pub value: T,
    /// Why growing the deque failed.
    pub source: ReserveError,
}

impl<T> PushError<T> {
    /// Consumes the error, returning the value that was not inserted.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}
