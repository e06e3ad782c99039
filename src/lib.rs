//! # Sequential Staging Buffer
//!
//! A generic, growable buffer for producer/consumer code. Values are written
//! at one end and read back in the same order from the other; once the
//! buffer has been fully drained it rewinds and reuses its storage instead of
//! growing without bound.
//!
//! ## Key Features
//!
//! - **Generic Elements**: Stores any `T: Default`. Reads move values out, so
//!   elements never need to be `Clone`.
//!
//! - **Amortized Growth**: When a write does not fit, the buffer either slides
//!   its unread elements to the front of the existing store (when they plus
//!   the request fit in half of it) or reallocates to `request + 2 * capacity`
//!   slots.
//!
//! - **Batch Writes**: `write_all` and `write_slice` take a single growth
//!   decision for a whole batch.
//!
//! - **Cursor Rewind**: A read on a drained buffer returns `None` and resets
//!   both cursors, so long-running pipelines keep writing at the front of the
//!   store.
//!
//! - **Fallible Growth**: `try_grow`, `try_write` and `try_write_all` report
//!   capacity overflow and allocation failure as [`BufferError`] instead of
//!   panicking or aborting.
//!
//! ## Design Goals
//!
//! 1. **Predictable Growth**: The compaction threshold and the reallocation
//!    size are fixed formulas, so capacities are reproducible across runs.
//! 2. **No Hidden Copies**: Reads move, compaction swaps, reallocation moves.
//!    Only `write_slice` and `Clone` copy elements.
//! 3. **Small Surface**: Write, read, view, grow, reset. No random access, no
//!    removal from the middle, no wrap-around addressing.
//!
//! ## Use Cases
//!
//! - **Batching**: Accumulate values and flush them in one pass with `view` or
//!   `drain`.
//! - **Work Queues**: Drain a queue of pending items while new ones arrive.
//! - **Parsers and Codecs**: Stage decoded items between pipeline stages.
//!
//! ## Example
//!
//! ```rust
//! use seqbuf::SequenceBuffer;
//!
//! let mut buffer = SequenceBuffer::with_capacity(4);
//! buffer.write_all([1, 2, 3, 4]);
//! assert_eq!(buffer.capacity(), 4);
//!
//! buffer.write(5);
//! assert_eq!(buffer.capacity(), 9);
//! assert_eq!(buffer.view(), &[1, 2, 3, 4, 5]);
//!
//! while let Some(value) = buffer.read() {
//!     assert!(value > 0);
//! }
//! assert!(buffer.is_empty());
//! ```
//!
//! ## Thread Safety
//!
//! The buffer has no internal locking. Every mutating method takes
//! `&mut self`, so sharing one buffer between threads requires an external
//! `Mutex` around it, or handing ownership from one thread to another.
//!
//! ## Logging
//!
//! Growth decisions, cursor rewinds and discarding resets are reported as
//! `tracing` events at `TRACE` level. Install any `tracing` subscriber to see
//! them.

pub mod buffer;

pub mod prelude;

pub use buffer::{BufferError, Drain, IntoIter, SequenceBuffer};

/// Buffer of raw bytes, the element type the growth policy was first
/// designed around.
pub type ByteBuffer = SequenceBuffer<u8>;
