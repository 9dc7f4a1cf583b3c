//! compression/mod.rs
//! Per-record compression for streaming-sink exporters.
//!
//! Notes:
//! - A format name is resolved once, at startup, into a `Compressor`.
//! - Each `compress` call owns a fresh codec and destination buffer.
//! - Unknown formats fail at construction, never at call time.

pub mod codecs;
pub mod config;
pub mod constants;
pub mod registry;
pub mod types;

pub use config::*;
pub use constants::*;
pub use registry::*;
pub use types::*;
