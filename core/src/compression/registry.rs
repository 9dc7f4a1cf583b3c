//! compression/registry.rs
//! The compressor factory.
//!
//! The factory only validates the format. Every `compress` call builds its
//! own codec and destination buffer, uses them once and drops them, so a
//! single `Compressor` can be shared by any number of export workers with no
//! locking and no cross-call state.

use std::str::FromStr;

use crate::compression::codecs::{DeflateCodec, DeflateFlavor, NoopCodec};
use crate::compression::types::{CodecWriter, CompressionError, CompressionFormat};

/// Fresh, unbound codec for `format`.
pub(crate) fn create_codec(format: CompressionFormat) -> Box<dyn CodecWriter> {
    match format {
        CompressionFormat::None | CompressionFormat::Noop => Box::new(NoopCodec::new()),
        CompressionFormat::Gzip  => Box::new(DeflateCodec::new(DeflateFlavor::Gzip)),
        CompressionFormat::Zlib  => Box::new(DeflateCodec::new(DeflateFlavor::Zlib)),
        CompressionFormat::Flate => Box::new(DeflateCodec::new(DeflateFlavor::Flate)),
    }
}

/// Build the compression operation for a configured format name.
///
/// # Errors
/// - `CompressionError::UnsupportedFormat` if `format` is not one of
///   `none`, `noop`, `gzip`, `zlib`, `flate`. Treat as fatal configuration.
pub fn new_compressor(format: &str) -> Result<Compressor, CompressionError> {
    let format = CompressionFormat::from_str(format)?;
    log::debug!("record compression format selected: {format}");
    Ok(Compressor { format })
}

/// Stateless compression operation bound to one codec family.
///
/// Holds nothing but the format, so it is `Copy + Send + Sync`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Compressor {
    format: CompressionFormat,
}

impl Compressor {
    pub fn format(&self) -> CompressionFormat {
        self.format
    }

    /// Compress one payload into a newly allocated buffer.
    ///
    /// # Errors
    /// - `CompressionError::Io` if the encoder fails to write or finalize.
    pub fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut codec = create_codec(self.format);
        codec.reset(Vec::new());
        codec.write_all(input)?;
        let out = codec.close()?;

        log::trace!("{} compressed {} -> {} bytes", self.format, input.len(), out.len());
        Ok(out)
    }
}
