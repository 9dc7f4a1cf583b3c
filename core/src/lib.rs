//! record-compress
//!
//! Compression codecs for exporters that ship record batches to a
//! streaming sink. Pure Rust, no FFI.

#![forbid(unsafe_code)]

pub mod compression;

// -----------------------------------------------------------------------------
// Prelude
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{
        new_compressor, CompressionConfig, CompressionError, CompressionFormat, Compressor,
    };
}
