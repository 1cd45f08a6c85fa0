//! Channel masks to canonical formats and back.

use crate::details::FormatDetails;
use crate::format::PixelFormat;

/// Candidates for mask matching, in priority order.
///
/// Packed formats come first, grouped by storage width, then the byte
/// arrays whose masks are expressible as a native-endian integer. No two
/// entries derive the same (bits-per-pixel, masks) pair, so the order
/// only matters for the storage-width pass.
pub const MASK_MATCH_ORDER: &[PixelFormat] = &[
    PixelFormat::RGB332,
    PixelFormat::XRGB4444,
    PixelFormat::XBGR4444,
    PixelFormat::XRGB1555,
    PixelFormat::XBGR1555,
    PixelFormat::ARGB4444,
    PixelFormat::RGBA4444,
    PixelFormat::ABGR4444,
    PixelFormat::BGRA4444,
    PixelFormat::ARGB1555,
    PixelFormat::RGBA5551,
    PixelFormat::ABGR1555,
    PixelFormat::BGRA5551,
    PixelFormat::RGB565,
    PixelFormat::BGR565,
    PixelFormat::XRGB8888,
    PixelFormat::RGBX8888,
    PixelFormat::XBGR8888,
    PixelFormat::BGRX8888,
    PixelFormat::ARGB8888,
    PixelFormat::RGBA8888,
    PixelFormat::ABGR8888,
    PixelFormat::BGRA8888,
    PixelFormat::XRGB2101010,
    PixelFormat::XBGR2101010,
    PixelFormat::ARGB2101010,
    PixelFormat::ABGR2101010,
    PixelFormat::RGB24,
    PixelFormat::BGR24,
];

/// Bits per pixel and (red, green, blue, alpha) masks of `format`.
///
/// Returns `None` for formats outside the canonical set. Indexed, FourCC
/// and wide array formats report zero masks.
pub fn masks_for_format(format: PixelFormat) -> Option<(u8, [u32; 4])> {
    if !format.is_canonical() || format == PixelFormat::UNKNOWN {
        return None;
    }
    let details = format.details();
    Some((details.bits_per_pixel, details.masks()))
}

/// Find the canonical format whose derived masks equal the given ones.
///
/// Matching runs in three passes:
/// 1. exact: same bits-per-pixel and all four masks, in
///    [`MASK_MATCH_ORDER`];
/// 2. storage width: same masks where the format's byte width × 8 equals
///    `bpp` (16-bit callers describing XRGB1555, for example);
/// 3. all-zero masks at 1, 2, 4 or 8 bits resolve to the MSB-first
///    indexed format of that depth.
///
/// `None` is the ordinary outcome for masks no canonical format uses.
pub fn match_masks(bpp: u8, rmask: u32, gmask: u32, bmask: u32, amask: u32) -> Option<PixelFormat> {
    let wanted = [rmask, gmask, bmask, amask];

    let found = MASK_MATCH_ORDER
        .iter()
        .map(|&f| FormatDetails::new(f))
        .find(|d| d.bits_per_pixel == bpp && d.masks() == wanted)
        .or_else(|| {
            MASK_MATCH_ORDER
                .iter()
                .map(|&f| FormatDetails::new(f))
                .find(|d| u16::from(d.format.bytes_per_pixel()) * 8 == u16::from(bpp) && d.masks() == wanted)
        })
        .map(|d| d.format);
    if found.is_some() {
        return found;
    }

    if wanted == [0; 4] {
        let indexed = match bpp {
            1 => Some(PixelFormat::INDEX1MSB),
            2 => Some(PixelFormat::INDEX2MSB),
            4 => Some(PixelFormat::INDEX4MSB),
            8 => Some(PixelFormat::INDEX8),
            _ => None,
        };
        if indexed.is_some() {
            return indexed;
        }
    }

    tracing::trace!(bpp, rmask, gmask, bmask, amask, "no canonical format for masks");
    None
}

impl PixelFormat {
    /// See [`match_masks`].
    pub fn from_masks(bpp: u8, rmask: u32, gmask: u32, bmask: u32, amask: u32) -> Option<Self> {
        match_masks(bpp, rmask, gmask, bmask, amask)
    }

    /// See [`masks_for_format`].
    pub fn masks(self) -> Option<(u8, [u32; 4])> {
        masks_for_format(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb565_from_masks() {
        assert_eq!(
            match_masks(16, 0xF800, 0x07E0, 0x001F, 0),
            Some(PixelFormat::RGB565)
        );
    }

    #[test]
    fn argb8888_from_masks() {
        assert_eq!(
            match_masks(32, 0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000),
            Some(PixelFormat::ARGB8888)
        );
        assert_eq!(
            match_masks(32, 0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0),
            Some(PixelFormat::XRGB8888)
        );
    }

    #[test]
    fn storage_width_pass() {
        // 1555 masks described at 16 bits instead of 15.
        assert_eq!(
            match_masks(16, 0x7C00, 0x03E0, 0x001F, 0),
            Some(PixelFormat::XRGB1555)
        );
        assert_eq!(
            match_masks(15, 0x7C00, 0x03E0, 0x001F, 0),
            Some(PixelFormat::XRGB1555)
        );
        assert_eq!(
            match_masks(16, 0x0F00, 0x00F0, 0x000F, 0),
            Some(PixelFormat::XRGB4444)
        );
    }

    #[test]
    fn rgb24_vs_xbgr8888() {
        let (bpp, m) = masks_for_format(PixelFormat::RGB24).unwrap();
        assert_eq!(bpp, 24);
        assert_eq!(match_masks(24, m[0], m[1], m[2], m[3]), Some(PixelFormat::RGB24));
        let (bpp, m) = masks_for_format(PixelFormat::XBGR8888).unwrap();
        assert_eq!(bpp, 32);
        assert_eq!(match_masks(32, m[0], m[1], m[2], m[3]), Some(PixelFormat::XBGR8888));
    }

    #[test]
    fn indexed_fallback() {
        assert_eq!(match_masks(1, 0, 0, 0, 0), Some(PixelFormat::INDEX1MSB));
        assert_eq!(match_masks(2, 0, 0, 0, 0), Some(PixelFormat::INDEX2MSB));
        assert_eq!(match_masks(4, 0, 0, 0, 0), Some(PixelFormat::INDEX4MSB));
        assert_eq!(match_masks(8, 0, 0, 0, 0), Some(PixelFormat::INDEX8));
        assert_eq!(match_masks(8, 0xE0, 0x1C, 0x03, 0), Some(PixelFormat::RGB332));
    }

    #[test]
    fn no_match_is_none() {
        assert_eq!(match_masks(16, 0xF000, 0x0F00, 0x00F0, 0x00F0), None);
        assert_eq!(match_masks(32, 0xFF, 0xFF, 0xFF, 0), None);
        assert_eq!(match_masks(16, 0, 0, 0, 0), None);
        assert_eq!(match_masks(7, 0x7F, 0, 0, 0), None);
    }

    #[test]
    fn masks_for_unknown() {
        assert_eq!(masks_for_format(PixelFormat::UNKNOWN), None);
        assert_eq!(masks_for_format(PixelFormat(0x1596_1002)), None);
        assert_eq!(masks_for_format(PixelFormat::NV12), Some((0, [0; 4])));
    }
}
