//! Error types for the sequence buffer.
//!
//! [`BufferError`] is only produced by the fallible `try_*` entry points of
//! [`SequenceBuffer`](super::SequenceBuffer). Running out of unread elements
//! is not an error: [`read`](super::SequenceBuffer::read) reports it as `None`.

use thiserror::Error;

/// Errors that can occur while growing a sequence buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BufferError {
    /// The requested backing store is too large: its slot count does not fit
    /// in `usize`, or its size in bytes exceeds `isize::MAX`.
    #[error("capacity overflow: cannot make room for {requested} more elements (capacity {capacity})")]
    CapacityOverflow {
        /// Number of additional writable slots that were requested.
        requested: usize,
        /// Capacity of the backing store at the time of the request.
        capacity: usize,
    },

    /// The allocator refused to provide the new backing store.
    #[error("allocation of {slots} element slots failed")]
    AllocationFailed {
        /// Size, in elements, of the backing store that could not be allocated.
        slots: usize,
    },
}

impl BufferError {
    /// Returns the number of slots involved in the failed request.
    #[must_use]
    pub fn requested_slots(&self) -> usize {
        match self {
            BufferError::CapacityOverflow { requested, .. } => *requested,
            BufferError::AllocationFailed { slots } => *slots,
        }
    }
}
