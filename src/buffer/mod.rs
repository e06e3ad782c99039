//! Sequential staging buffer with write and read cursors.
//!
//! The [`SequenceBuffer`] keeps written elements in one contiguous backing
//! store. Producers append with `write`, `write_all` or `write_slice`;
//! consumers take elements back out in the same order with `read` or
//! `drain`. Room for new writes comes from two places:
//!
//! - **Compaction**: when the unread elements plus the request fit in half of
//!   the current capacity, the unread window slides to the front of the same
//!   store.
//! - **Reallocation**: otherwise a new store of `request + 2 * capacity` slots
//!   replaces the old one.
//!
//! A read attempt on a drained buffer rewinds both cursors to zero, so a
//! buffer that is regularly emptied keeps writing into the same slots.

mod drain;
pub mod error;
mod sequence;

pub use drain::{Drain, IntoIter};
pub use error::BufferError;
pub use sequence::SequenceBuffer;
