//! Scalar mapping between 8-bit channel intensities and pixel values.

use rgb::RGB8;

use crate::details::{Channel, FormatDetails};
use crate::error::PixelError;
use crate::palette::{self, Color, Palette};

/// Multipliers that replicate an N-bit value across 8 bits.
const MUL_TABLE: [u32; 9] = [
    0,    // 0 bits
    0xff, // 1 bit:  0b11111111
    0x55, // 2 bits: 0b01010101
    0x49, // 3 bits: 0b01001001
    0x11, // 4 bits: 0b00010001
    0x21, // 5 bits: 0b00100001
    0x41, // 6 bits: 0b01000001
    0x81, // 7 bits: 0b10000001
    0x01, // 8 bits: 0b00000001
];

const SHIFT_TABLE: [u32; 9] = [0, 0, 0, 1, 0, 2, 4, 6, 0];

/// Widen an N-bit channel value to 0..=255.
///
/// Narrow values are bit-replicated, so the largest N-bit value becomes
/// 255. Values wider than 8 bits keep their top 8 bits.
#[inline]
pub const fn expand_to_8(value: u32, bits: u8) -> u8 {
    match bits {
        0 => 0,
        1..=8 => {
            let v = value & crate::bits::low_mask(bits as u32);
            ((v * MUL_TABLE[bits as usize]) >> SHIFT_TABLE[bits as usize]) as u8
        }
        _ => (value >> (bits - 8)) as u8,
    }
}

/// Narrow (or widen) an 8-bit intensity to an N-bit channel value.
///
/// Narrow channels keep the top N bits (truncation). Wide channels
/// replicate the 8 input bits downward, so 255 fills the channel.
#[inline]
pub const fn compress_from_8(value: u8, bits: u8) -> u32 {
    let v = value as u32;
    match bits {
        0 => 0,
        1..=8 => v >> (8 - bits),
        _ => {
            let bits = if bits > 32 { 32 } else { bits as u32 };
            let mut out = v << (bits - 8);
            let mut shift = 8;
            while shift < bits {
                out |= out >> shift;
                shift *= 2;
            }
            out
        }
    }
}

#[inline]
fn place(channel: &Channel, value: u8) -> u32 {
    if !channel.is_present() {
        return 0;
    }
    (compress_from_8(value, channel.bits) << channel.shift) & channel.mask
}

#[inline]
fn take(channel: &Channel, pixel: u32) -> Option<u8> {
    if !channel.is_present() {
        return None;
    }
    Some(expand_to_8(channel.extract(pixel), channel.bits))
}

/// Number of palette entries an indexed pixel can address.
fn addressable(details: &FormatDetails, palette: &Palette) -> usize {
    let reach = 1usize << details.bits_per_pixel.min(16);
    palette.len().min(reach)
}

fn require_palette<'p>(
    details: &FormatDetails,
    palette: Option<&'p Palette>,
) -> Result<&'p Palette, PixelError> {
    palette.ok_or(PixelError::MissingPalette(details.format))
}

/// Map an RGBA color to a pixel value.
///
/// Indexed formats return the nearest palette entry reachable by the
/// format's index width (alpha ignored). Absent channels are dropped.
pub fn map_rgba(
    details: &FormatDetails,
    palette: Option<&Palette>,
    r: u8,
    g: u8,
    b: u8,
    a: u8,
) -> Result<u32, PixelError> {
    if !details.is_mappable() {
        return Err(PixelError::UnsupportedFormat(details.format));
    }
    if details.format.is_indexed() {
        let palette = require_palette(details, palette)?;
        let reach = addressable(details, palette);
        return Ok(palette::nearest(&palette.colors()[..reach], r, g, b) as u32);
    }
    Ok(place(&details.red, r)
        | place(&details.green, g)
        | place(&details.blue, b)
        | place(&details.alpha, a))
}

/// Map an opaque RGB color to a pixel value.
pub fn map_rgb(
    details: &FormatDetails,
    palette: Option<&Palette>,
    r: u8,
    g: u8,
    b: u8,
) -> Result<u32, PixelError> {
    map_rgba(details, palette, r, g, b, 255)
}

/// Read the RGBA color of a pixel value.
///
/// Missing color channels read as 0 and a missing alpha channel as 255.
/// Indexed pixels outside the palette are an error.
pub fn get_rgba(
    pixel: u32,
    details: &FormatDetails,
    palette: Option<&Palette>,
) -> Result<Color, PixelError> {
    if !details.is_mappable() {
        return Err(PixelError::UnsupportedFormat(details.format));
    }
    if details.format.is_indexed() {
        let palette = require_palette(details, palette)?;
        let index = pixel as usize;
        if index >= addressable(details, palette) {
            return Err(PixelError::PaletteIndexOutOfRange {
                index: pixel,
                len: palette.len(),
            });
        }
        return Ok(palette.colors()[index]);
    }
    Ok(Color::new(
        take(&details.red, pixel).unwrap_or(0),
        take(&details.green, pixel).unwrap_or(0),
        take(&details.blue, pixel).unwrap_or(0),
        take(&details.alpha, pixel).unwrap_or(255),
    ))
}

/// Read the RGB color of a pixel value.
pub fn get_rgb(
    pixel: u32,
    details: &FormatDetails,
    palette: Option<&Palette>,
) -> Result<RGB8, PixelError> {
    let c = get_rgba(pixel, details, palette)?;
    Ok(RGB8::new(c.r, c.g, c.b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixelFormat;

    #[test]
    fn expand_replicates_bits() {
        assert_eq!(expand_to_8(0b11111, 5), 255);
        assert_eq!(expand_to_8(0b10000, 5), 0b1000_0100);
        assert_eq!(expand_to_8(0b101, 3), 0b1011_0110);
        assert_eq!(expand_to_8(1, 1), 255);
        assert_eq!(expand_to_8(1, 2), 0x55);
        assert_eq!(expand_to_8(0b100001, 6), 0b1000_0110);
        assert_eq!(expand_to_8(0x3FF, 10), 255);
        assert_eq!(expand_to_8(0x200, 10), 0x80);
        assert_eq!(expand_to_8(0xAB, 8), 0xAB);
    }

    #[test]
    fn compress_truncates_and_widens() {
        assert_eq!(compress_from_8(255, 5), 31);
        assert_eq!(compress_from_8(7, 5), 0);
        assert_eq!(compress_from_8(8, 5), 1);
        assert_eq!(compress_from_8(255, 10), 0x3FF);
        assert_eq!(compress_from_8(0x80, 10), 0x202);
        assert_eq!(compress_from_8(0xAB, 16), 0xABAB);
    }

    #[test]
    fn rgb565_max_maps_to_255() {
        let d = PixelFormat::RGB565.details();
        let px = map_rgb(&d, None, 255, 255, 255).unwrap();
        assert_eq!(px, 0xFFFF);
        let c = get_rgba(px, &d, None).unwrap();
        assert_eq!(c, Color::new(255, 255, 255, 255));
    }

    #[test]
    fn rgb565_known_value() {
        let d = PixelFormat::RGB565.details();
        let px = map_rgb(&d, None, 0xF8, 0xFC, 0x00).unwrap();
        assert_eq!(px, 0xFFE0);
        let px = map_rgb(&d, None, 0x00, 0x00, 0xFF).unwrap();
        assert_eq!(px, 0x001F);
    }

    #[test]
    fn alpha_dropped_and_defaulted() {
        let d = PixelFormat::XRGB8888.details();
        let px = map_rgba(&d, None, 1, 2, 3, 4).unwrap();
        assert_eq!(px, 0x0001_0203);
        assert_eq!(get_rgba(px, &d, None).unwrap().a, 255);
    }

    #[test]
    fn map_rgb_sets_opaque_alpha() {
        let d = PixelFormat::ARGB4444.details();
        let px = map_rgb(&d, None, 0, 0, 0).unwrap();
        assert_eq!(px, 0xF000);
        let d = PixelFormat::RGBA8888.details();
        let px = map_rgba(&d, None, 0x11, 0x22, 0x33, 0x44).unwrap();
        assert_eq!(px, 0x1122_3344);
    }

    #[test]
    fn ten_bit_round_trip_is_exact() {
        let d = PixelFormat::XRGB2101010.details();
        for v in 0..=255u8 {
            let px = map_rgb(&d, None, v, v, v).unwrap();
            let c = get_rgb(px, &d, None).unwrap();
            assert_eq!(c, RGB8::new(v, v, v));
        }
    }

    #[test]
    fn indexed_nearest() {
        let pal =
            Palette::from_colors(&[Color::new(0, 0, 0, 255), Color::new(255, 255, 255, 255)])
                .unwrap();
        let d = PixelFormat::INDEX8.details();
        assert_eq!(map_rgb(&d, Some(&pal), 10, 10, 10).unwrap(), 0);
        assert_eq!(map_rgb(&d, Some(&pal), 250, 250, 250).unwrap(), 1);
        assert_eq!(
            get_rgba(1, &d, Some(&pal)).unwrap(),
            Color::new(255, 255, 255, 255)
        );
    }

    #[test]
    fn indexed_search_limited_to_index_width() {
        let pal = Palette::from_colors(&[
            Color::new(0, 0, 0, 255),
            Color::new(255, 255, 255, 255),
            Color::new(200, 0, 0, 255),
        ])
        .unwrap();
        let d = PixelFormat::INDEX1MSB.details();
        // Entry 2 is an exact match but a 1-bit pixel cannot address it.
        assert_eq!(map_rgb(&d, Some(&pal), 200, 0, 0).unwrap(), 0);
        assert!(matches!(
            get_rgba(2, &d, Some(&pal)),
            Err(PixelError::PaletteIndexOutOfRange { index: 2, len: 3 })
        ));
    }

    #[test]
    fn indexed_errors() {
        let d = PixelFormat::INDEX8.details();
        assert!(matches!(
            map_rgb(&d, None, 0, 0, 0),
            Err(PixelError::MissingPalette(_))
        ));
        let pal = Palette::new(2).unwrap();
        assert!(matches!(
            get_rgba(5, &d, Some(&pal)),
            Err(PixelError::PaletteIndexOutOfRange { index: 5, len: 2 })
        ));
    }

    #[test]
    fn unmappable_formats() {
        for f in [PixelFormat::RGBA64, PixelFormat::NV12, PixelFormat(0x1234_5678)] {
            let d = f.details();
            assert!(matches!(
                map_rgb(&d, None, 1, 2, 3),
                Err(PixelError::UnsupportedFormat(_))
            ));
            assert!(matches!(
                get_rgba(0, &d, None),
                Err(PixelError::UnsupportedFormat(_))
            ));
        }
    }

    #[test]
    fn unknown_maps_to_zero() {
        let d = PixelFormat::UNKNOWN.details();
        assert_eq!(map_rgba(&d, None, 9, 9, 9, 9).unwrap(), 0);
        assert_eq!(get_rgba(123, &d, None).unwrap(), Color::new(0, 0, 0, 255));
    }

    #[test]
    fn rgb24_native_value() {
        let d = PixelFormat::RGB24.details();
        let px = map_rgb(&d, None, 0x10, 0x20, 0x30).unwrap();
        let bytes = px.to_ne_bytes();
        if cfg!(target_endian = "little") {
            assert_eq!(&bytes[..3], &[0x10, 0x20, 0x30]);
        } else {
            assert_eq!(&bytes[1..], &[0x10, 0x20, 0x30]);
        }
    }
}
