/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/10/25
******************************************************************************/

//! Prelude module that re-exports commonly used types.
//!
//! Instead of importing each type individually, you can use:
//!
//! ```rust
//! use seqbuf::prelude::*;
//! ```

// Buffer types
pub use crate::buffer::{Drain, IntoIter, SequenceBuffer};

// Error types
pub use crate::buffer::BufferError;

// Type aliases for common use cases
pub use crate::ByteBuffer;
