//! compression/codecs/mod.rs
//! Codec implementations behind the `CodecWriter` capability.

pub mod deflate;
pub mod noop;

pub use deflate::*;
pub use noop::*;
