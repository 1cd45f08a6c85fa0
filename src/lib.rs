//! # zenpixfmt
//!
//! Pixel-format and colorspace identifiers, packed into 32-bit values
//! compatible with the SDL 3 encoding, plus the channel math built on them.
//!
//! ## What's here
//!
//! - [`PixelFormat`]: compose and decompose format ids, including FourCC
//!   codes, with the full canonical table as constants.
//! - [`FormatDetails`]: per-channel masks, widths and shifts derived from
//!   a format id.
//! - [`match_masks`]: the canonical format for a bits-per-pixel and mask
//!   set, the inverse of [`masks_for_format`].
//! - [`map_rgba`] / [`get_rgba`]: 8-bit color to pixel value and back,
//!   with [`Palette`] lookup for indexed formats.
//! - [`Colorspace`]: compose and decompose colorspace ids with the
//!   standard named spaces.
//! - [`ConvertRequest`]: convert pitched pixel buffers between formats.
//!
//! ## Non-Goals
//!
//! - Blitting, scaling and SIMD paths
//! - YUV conversion (FourCC formats are identified, not mapped)
//! - Color management
//!
//! ## Usage
//!
//! ```
//! use zenpixfmt::{PixelFormat, map_rgb, get_rgba, match_masks};
//!
//! let details = PixelFormat::RGB565.details();
//! assert_eq!(details.masks(), [0xF800, 0x07E0, 0x001F, 0]);
//!
//! let pixel = map_rgb(&details, None, 255, 255, 255)?;
//! assert_eq!(pixel, 0xFFFF);
//! assert_eq!(get_rgba(pixel, &details, None)?.r, 255);
//!
//! assert_eq!(
//!     match_masks(16, 0xF800, 0x07E0, 0x001F, 0),
//!     Some(PixelFormat::RGB565)
//! );
//! # Ok::<(), zenpixfmt::PixelError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod bits;
mod colorspace;
mod convert;
mod details;
mod error;
mod format;
mod limits;
mod map;
mod masks;
mod palette;

// Re-exports
pub use colorspace::{
    ChromaLocation, ColorPrimaries, ColorRange, ColorType, Colorspace, ColorspaceFields,
    MatrixCoefficients, TransferCharacteristics,
};
pub use convert::{ConvertRequest, read_pixel, row_bytes, write_pixel};
pub use details::{Channel, FormatDetails};
pub use enough::{Stop, Unstoppable};
pub use error::PixelError;
pub use format::{
    ArrayOrder, BitmapOrder, FormatFields, PackedLayout, PackedOrder, PixelFormat, PixelOrder,
    PixelType,
};
pub use limits::Limits;
pub use map::{compress_from_8, expand_to_8, get_rgb, get_rgba, map_rgb, map_rgba};
pub use masks::{MASK_MATCH_ORDER, masks_for_format, match_masks};
pub use palette::{Color, Palette};
