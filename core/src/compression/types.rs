//! compression/types.rs
//! Format enum, error taxonomy and the codec writer capability.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::compression::constants::format_ids;

/// Closed set of codec families selectable by configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionFormat {
    None,
    Noop,
    Gzip,
    Zlib,
    Flate,
}

impl CompressionFormat {
    pub const ALL: [CompressionFormat; 5] = [
        CompressionFormat::None,
        CompressionFormat::Noop,
        CompressionFormat::Gzip,
        CompressionFormat::Zlib,
        CompressionFormat::Flate,
    ];

    /// Configuration identifier of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompressionFormat::None  => format_ids::NONE,
            CompressionFormat::Noop  => format_ids::NOOP,
            CompressionFormat::Gzip  => format_ids::GZIP,
            CompressionFormat::Zlib  => format_ids::ZLIB,
            CompressionFormat::Flate => format_ids::FLATE,
        }
    }

    /// `none` and `noop` both pass bytes through untouched.
    pub fn is_passthrough(&self) -> bool {
        matches!(self, CompressionFormat::None | CompressionFormat::Noop)
    }
}

impl FromStr for CompressionFormat {
    type Err = CompressionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            format_ids::NONE  => Ok(CompressionFormat::None),
            format_ids::NOOP  => Ok(CompressionFormat::Noop),
            format_ids::GZIP  => Ok(CompressionFormat::Gzip),
            format_ids::ZLIB  => Ok(CompressionFormat::Zlib),
            format_ids::FLATE => Ok(CompressionFormat::Flate),
            other => Err(CompressionError::UnsupportedFormat { format: other.to_string() }),
        }
    }
}

impl fmt::Display for CompressionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CompressionError {
    /// Fatal at startup; the exporter must not retry.
    #[error("unsupported compression format: {format:?}")]
    UnsupportedFormat { format: String },

    #[error("invalid compression config: {0}")]
    Config(String),

    #[error("compression i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// A codec was driven before `reset` bound it to a destination.
    #[error("codec {codec} used without a bound destination")]
    Unbound { codec: &'static str },
}

/// Uniform writer capability shared by every codec.
///
/// A codec starts unbound. `reset` binds it to a destination buffer, `write`
/// and `flush` feed it, and `close` finalizes the stream and hands the
/// destination back, leaving the codec unbound again.
pub trait CodecWriter: Send {
    /// Feed `input` through the codec. Returns the number of bytes consumed.
    fn write(&mut self, input: &[u8]) -> Result<usize, CompressionError>;

    /// Push buffered state to the destination without finalizing.
    fn flush(&mut self) -> Result<(), CompressionError>;

    /// Finalize the stream (trailer/footer included) and return the destination.
    fn close(&mut self) -> Result<Vec<u8>, CompressionError>;

    /// Bind to `destination`, dropping any state left from a previous one.
    /// A still-bound previous destination is discarded, not finalized into
    /// the new one.
    fn reset(&mut self, destination: Vec<u8>);

    /// Canonical name, reported in `CompressionError::Unbound`.
    fn name(&self) -> &'static str;

    /// Write the whole of `input`, looping over short writes.
    fn write_all(&mut self, mut input: &[u8]) -> Result<(), CompressionError> {
        while !input.is_empty() {
            let n = self.write(input)?;
            if n == 0 {
                return Err(CompressionError::Io(std::io::Error::new(
                    std::io::ErrorKind::WriteZero,
                    "codec accepted zero bytes",
                )));
            }
            input = &input[n..];
        }
        Ok(())
    }
}
