//! codecs/noop.rs
//! Pass-through codec.

use crate::compression::constants::format_ids;
use crate::compression::types::{CodecWriter, CompressionError};

/// Copies input to the destination unchanged.
///
/// `NoopCodec::default()` is the unbound sentinel: closing it before `reset`
/// is a caller bug and reports `CompressionError::Unbound`.
#[derive(Debug, Default)]
pub struct NoopCodec {
    destination: Option<Vec<u8>>,
}

impl NoopCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bound(destination: Vec<u8>) -> Self {
        Self { destination: Some(destination) }
    }

    fn unbound(&self) -> CompressionError {
        CompressionError::Unbound { codec: self.name() }
    }
}

impl CodecWriter for NoopCodec {
    fn write(&mut self, input: &[u8]) -> Result<usize, CompressionError> {
        let err = self.unbound();
        let dest = self.destination.as_mut().ok_or(err)?;
        dest.extend_from_slice(input);
        Ok(input.len())
    }

    fn flush(&mut self) -> Result<(), CompressionError> {
        Ok(())
    }

    fn close(&mut self) -> Result<Vec<u8>, CompressionError> {
        let err = self.unbound();
        self.destination.take().ok_or(err)
    }

    fn reset(&mut self, destination: Vec<u8>) {
        self.destination = Some(destination);
    }

    fn name(&self) -> &'static str {
        format_ids::NOOP
    }
}
