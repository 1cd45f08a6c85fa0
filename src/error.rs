use alloc::string::String;
use enough::StopReason;

use crate::format::PixelFormat;

/// Errors from the pixel-format codec.
///
/// Only caller contract violations end up here. An unrecognized format
/// yields an all-zero [`FormatDetails`](crate::FormatDetails), and a mask
/// set with no canonical match yields `None`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PixelError {
    #[error("value {value} does not fit in a {width}-bit field")]
    FieldOverflow { value: u32, width: u32 },

    #[error("indexed format {0} requires a palette")]
    MissingPalette(PixelFormat),

    #[error("palette index {index} out of range (palette has {len} entries)")]
    PaletteIndexOutOfRange { index: u32, len: usize },

    #[error("palette write of {count} colors at {first} exceeds palette of {len} entries")]
    PaletteRange {
        first: usize,
        count: usize,
        len: usize,
    },

    #[error("palette must have at least one entry")]
    EmptyPalette,

    #[error("pixel format {0} has no scalar channel mapping")]
    UnsupportedFormat(PixelFormat),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for PixelError {
    fn from(r: StopReason) -> Self {
        PixelError::Cancelled(r)
    }
}
