//! compression/constants.rs
//! Stable format identifiers and encoder defaults.

/// Format identifiers accepted in exporter configuration (exact, case-sensitive).
pub mod format_ids {
    pub const NONE: &str  = "none";
    pub const NOOP: &str  = "noop";
    pub const GZIP: &str  = "gzip";
    pub const ZLIB: &str  = "zlib";
    pub const FLATE: &str = "flate";
}

/// Format used when the configuration section omits one.
pub const DEFAULT_FORMAT: &str = format_ids::NONE;

/// Encoder level shared by the deflate family (1 = fastest).
pub const DEFAULT_LEVEL_DEFLATE: u32 = 1;
