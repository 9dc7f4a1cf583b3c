//! Deflate family (gzip, zlib, raw deflate) via flate2 write-side encoders.

use std::io::Write;
use flate2::{Compression, write::{DeflateEncoder, GzEncoder, ZlibEncoder}};

use crate::compression::constants::{format_ids, DEFAULT_LEVEL_DEFLATE};
use crate::compression::types::{CodecWriter, CompressionError};

/// Container framing around the deflate bitstream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeflateFlavor {
    /// RFC 1952 header + CRC32/ISIZE footer.
    Gzip,
    /// RFC 1950 header + Adler-32 footer.
    Zlib,
    /// Bare RFC 1951 stream.
    Flate,
}

impl DeflateFlavor {
    pub fn name(&self) -> &'static str {
        match self {
            DeflateFlavor::Gzip  => format_ids::GZIP,
            DeflateFlavor::Zlib  => format_ids::ZLIB,
            DeflateFlavor::Flate => format_ids::FLATE,
        }
    }
}

enum Encoder {
    Gzip(GzEncoder<Vec<u8>>),
    Zlib(ZlibEncoder<Vec<u8>>),
    Flate(DeflateEncoder<Vec<u8>>),
}

impl Encoder {
    fn new(flavor: DeflateFlavor, destination: Vec<u8>, level: Compression) -> Self {
        match flavor {
            DeflateFlavor::Gzip  => Encoder::Gzip(GzEncoder::new(destination, level)),
            DeflateFlavor::Zlib  => Encoder::Zlib(ZlibEncoder::new(destination, level)),
            DeflateFlavor::Flate => Encoder::Flate(DeflateEncoder::new(destination, level)),
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Encoder::Gzip(enc)  => enc,
            Encoder::Zlib(enc)  => enc,
            Encoder::Flate(enc) => enc,
        }
    }

    fn finish(self) -> std::io::Result<Vec<u8>> {
        match self {
            Encoder::Gzip(enc)  => enc.finish(),
            Encoder::Zlib(enc)  => enc.finish(),
            Encoder::Flate(enc) => enc.finish(),
        }
    }
}

/// One deflate-family stream. The encoder only exists while bound;
/// `reset` always builds a new one so no window or pending bits leak
/// from a previous destination.
pub struct DeflateCodec {
    flavor: DeflateFlavor,
    level: Compression,
    encoder: Option<Encoder>,
}

impl DeflateCodec {
    /// Unbound codec; call `reset` before writing.
    pub fn new(flavor: DeflateFlavor) -> Self {
        Self {
            flavor,
            level: Compression::new(DEFAULT_LEVEL_DEFLATE),
            encoder: None,
        }
    }

    pub fn bound(flavor: DeflateFlavor, destination: Vec<u8>) -> Self {
        let mut codec = Self::new(flavor);
        codec.reset(destination);
        codec
    }

    fn encoder(&mut self) -> Result<&mut Encoder, CompressionError> {
        let codec = self.name();
        self.encoder.as_mut().ok_or(CompressionError::Unbound { codec })
    }
}

impl CodecWriter for DeflateCodec {
    fn write(&mut self, input: &[u8]) -> Result<usize, CompressionError> {
        Ok(self.encoder()?.writer().write(input)?)
    }

    fn flush(&mut self) -> Result<(), CompressionError> {
        self.encoder()?.writer().flush()?;
        Ok(())
    }

    fn close(&mut self) -> Result<Vec<u8>, CompressionError> {
        let encoder = self.encoder.take()
            .ok_or(CompressionError::Unbound { codec: self.name() })?;
        Ok(encoder.finish()?)
    }

    /// Rebinding a bound codec drops the old encoder, and flate2 finishes it
    /// into the discarded buffer on drop. `compress` never rebinds.
    fn reset(&mut self, destination: Vec<u8>) {
        self.encoder = Some(Encoder::new(self.flavor, destination, self.level));
    }

    fn name(&self) -> &'static str {
        self.flavor.name()
    }
}
