//! Per-channel layout derived from a [`PixelFormat`].

use crate::format::{ArrayOrder, PackedLayout, PackedOrder, PixelFormat};

/// One color channel inside a pixel value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Channel {
    /// Width in bits; 0 means the channel is absent.
    pub bits: u8,
    /// Position of the least significant bit.
    pub shift: u8,
    pub mask: u32,
}

impl Channel {
    pub const NONE: Channel = Channel {
        bits: 0,
        shift: 0,
        mask: 0,
    };

    /// Channel described by a contiguous mask.
    pub const fn from_mask(mask: u32) -> Self {
        if mask == 0 {
            return Self::NONE;
        }
        Channel {
            bits: mask.count_ones() as u8,
            shift: mask.trailing_zeros() as u8,
            mask,
        }
    }

    pub const fn is_present(&self) -> bool {
        self.bits != 0
    }

    /// Raw channel value from a pixel.
    ///
    /// Channels of wide array formats have no mask and extract as 0.
    #[inline]
    pub const fn extract(&self, pixel: u32) -> u32 {
        match (pixel & self.mask).checked_shr(self.shift as u32) {
            Some(v) => v,
            None => 0,
        }
    }
}

/// Immutable description of a pixel format's channels.
///
/// For indexed formats all channels are absent; the palette supplies
/// colors. For byte arrays of at most four bytes the masks describe the
/// pixel read as a native-endian integer. Wider arrays report channel
/// widths and the bit offset from the first byte, with zero masks, since
/// a pixel does not fit a `u32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormatDetails {
    pub format: PixelFormat,
    pub bits_per_pixel: u8,
    pub bytes_per_pixel: u8,
    pub red: Channel,
    pub green: Channel,
    pub blue: Channel,
    pub alpha: Channel,
}

// Slot masks for each packed layout, most significant slot first.
const fn layout_slots(layout: PackedLayout) -> Option<[u32; 4]> {
    Some(match layout {
        PackedLayout::Layout332 => [0x0000_0000, 0x0000_00E0, 0x0000_001C, 0x0000_0003],
        PackedLayout::Layout4444 => [0x0000_F000, 0x0000_0F00, 0x0000_00F0, 0x0000_000F],
        PackedLayout::Layout1555 => [0x0000_8000, 0x0000_7C00, 0x0000_03E0, 0x0000_001F],
        PackedLayout::Layout5551 => [0x0000_F800, 0x0000_07C0, 0x0000_003E, 0x0000_0001],
        PackedLayout::Layout565 => [0x0000_0000, 0x0000_F800, 0x0000_07E0, 0x0000_001F],
        PackedLayout::Layout8888 => [0xFF00_0000, 0x00FF_0000, 0x0000_FF00, 0x0000_00FF],
        PackedLayout::Layout2101010 => [0xC000_0000, 0x3FF0_0000, 0x000F_FC00, 0x0000_03FF],
        PackedLayout::Layout1010102 => [0xFFC0_0000, 0x003F_F000, 0x0000_0FFC, 0x0000_0003],
        PackedLayout::None => return None,
    })
}

const NO_SLOT: usize = 4;

// Slot index of (red, green, blue, alpha) for each packed order.
const fn order_slots(order: PackedOrder) -> Option<[usize; 4]> {
    Some(match order {
        PackedOrder::Xrgb => [1, 2, 3, NO_SLOT],
        PackedOrder::Rgbx => [0, 1, 2, NO_SLOT],
        PackedOrder::Argb => [1, 2, 3, 0],
        PackedOrder::Rgba => [0, 1, 2, 3],
        PackedOrder::Xbgr => [3, 2, 1, NO_SLOT],
        PackedOrder::Bgrx => [2, 1, 0, NO_SLOT],
        PackedOrder::Abgr => [3, 2, 1, 0],
        PackedOrder::Bgra => [2, 1, 0, 3],
        PackedOrder::None => return None,
    })
}

/// Byte index of (red, green, blue, alpha) within an array pixel.
pub(crate) const fn array_offsets(order: ArrayOrder) -> Option<[Option<u8>; 4]> {
    Some(match order {
        ArrayOrder::Rgb => [Some(0), Some(1), Some(2), None],
        ArrayOrder::Rgba => [Some(0), Some(1), Some(2), Some(3)],
        ArrayOrder::Argb => [Some(1), Some(2), Some(3), Some(0)],
        ArrayOrder::Bgr => [Some(2), Some(1), Some(0), None],
        ArrayOrder::Bgra => [Some(2), Some(1), Some(0), Some(3)],
        ArrayOrder::Abgr => [Some(3), Some(2), Some(1), Some(0)],
        ArrayOrder::None => return None,
    })
}

impl FormatDetails {
    /// Descriptor reported for formats outside the canonical set.
    pub const fn unknown(format: PixelFormat) -> Self {
        Self {
            format,
            bits_per_pixel: 0,
            bytes_per_pixel: 0,
            red: Channel::NONE,
            green: Channel::NONE,
            blue: Channel::NONE,
            alpha: Channel::NONE,
        }
    }

    /// Derive the channel layout of `format`.
    pub const fn new(format: PixelFormat) -> Self {
        if format.raw() == 0 || !format.is_canonical() {
            return Self::unknown(format);
        }

        let mut out = Self::unknown(format);

        if format.is_fourcc() {
            out.bytes_per_pixel = format.bytes_per_pixel();
            return out;
        }

        if format.is_indexed() {
            out.bits_per_pixel = format.bits_per_pixel();
            out.bytes_per_pixel = out.bits_per_pixel.div_ceil(8);
            return out;
        }

        if format.is_packed() {
            let bytes = format.bytes_per_pixel();
            out.bits_per_pixel = if bytes <= 2 {
                format.bits_per_pixel()
            } else {
                bytes * 8
            };
            out.bytes_per_pixel = out.bits_per_pixel.div_ceil(8);

            let (Some(layout), Some(order)) = (format.packed_layout(), format.packed_order())
            else {
                return Self::unknown(format);
            };
            let (Some(slots), Some(idx)) = (layout_slots(layout), order_slots(order)) else {
                return Self::unknown(format);
            };
            let masks = [slots[0], slots[1], slots[2], slots[3], 0];
            out.red = Channel::from_mask(masks[idx[0]]);
            out.green = Channel::from_mask(masks[idx[1]]);
            out.blue = Channel::from_mask(masks[idx[2]]);
            out.alpha = Channel::from_mask(masks[idx[3]]);
            return out;
        }

        if format.is_array() {
            let bytes = format.bytes_per_pixel();
            out.bits_per_pixel = bytes * 8;
            out.bytes_per_pixel = bytes;

            let Some(order) = format.array_order() else {
                return Self::unknown(format);
            };
            let Some(offsets) = array_offsets(order) else {
                return Self::unknown(format);
            };
            let component = format.pixel_type().component_bytes();
            out.red = array_channel(offsets[0], component, bytes);
            out.green = array_channel(offsets[1], component, bytes);
            out.blue = array_channel(offsets[2], component, bytes);
            out.alpha = array_channel(offsets[3], component, bytes);
            return out;
        }

        Self::unknown(format)
    }

    pub const fn masks(&self) -> [u32; 4] {
        [
            self.red.mask,
            self.green.mask,
            self.blue.mask,
            self.alpha.mask,
        ]
    }

    pub const fn channels(&self) -> [Channel; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Bits of the pixel value covered by no channel.
    ///
    /// Indexed pixels are entirely index bits and report 0.
    pub const fn padding_bits(&self) -> u8 {
        if self.format.is_indexed() {
            return 0;
        }
        let used = self.red.bits as u16
            + self.green.bits as u16
            + self.blue.bits as u16
            + self.alpha.bits as u16;
        (self.bits_per_pixel as u16).saturating_sub(used) as u8
    }

    /// Byte index of (red, green, blue, alpha) for array formats.
    pub const fn byte_offsets(&self) -> Option<[Option<u8>; 4]> {
        if !self.format.is_array() {
            return None;
        }
        let component = self.format.pixel_type().component_bytes();
        match self.format.array_order() {
            Some(order) => match array_offsets(order) {
                Some(idx) => {
                    let mut out = [None; 4];
                    let mut i = 0;
                    while i < 4 {
                        if let Some(n) = idx[i] {
                            out[i] = Some(n * component);
                        }
                        i += 1;
                    }
                    Some(out)
                }
                None => None,
            },
            None => None,
        }
    }

    /// Whether a pixel of this format fits the scalar `u32` mapping.
    pub const fn is_mappable(&self) -> bool {
        if self.format.raw() == 0 {
            return true;
        }
        if self.bits_per_pixel == 0 {
            return false;
        }
        if self.format.is_indexed() {
            return true;
        }
        (self.format.is_packed() || self.format.is_array()) && self.bytes_per_pixel <= 4
    }
}

const fn array_channel(offset: Option<u8>, component: u8, bytes: u8) -> Channel {
    let Some(offset) = offset else {
        return Channel::NONE;
    };
    let bits = component * 8;
    if bytes > 4 {
        return Channel {
            bits,
            shift: offset * bits,
            mask: 0,
        };
    }
    // Pixel read as a native-endian integer of `bytes` bytes.
    let byte = if cfg!(target_endian = "little") {
        offset * component
    } else {
        bytes - (offset + 1) * component
    };
    let shift = byte * 8;
    Channel {
        bits,
        shift,
        mask: crate::bits::low_mask(bits as u32) << shift,
    }
}

impl PixelFormat {
    /// Derive the channel layout of this format.
    ///
    /// Formats outside the canonical set yield an all-zero descriptor.
    pub fn details(self) -> FormatDetails {
        let details = FormatDetails::new(self);
        if details.bits_per_pixel == 0 && !self.is_fourcc() && self.raw() != 0 {
            tracing::trace!(format = self.raw(), "unrecognized pixel format");
        }
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb565_shifts() {
        let d = PixelFormat::RGB565.details();
        assert_eq!(d.bits_per_pixel, 16);
        assert_eq!(d.bytes_per_pixel, 2);
        assert_eq!((d.red.bits, d.red.shift), (5, 11));
        assert_eq!((d.green.bits, d.green.shift), (6, 5));
        assert_eq!((d.blue.bits, d.blue.shift), (5, 0));
        assert!(!d.alpha.is_present());
        assert_eq!(d.masks(), [0xF800, 0x07E0, 0x001F, 0]);
    }

    #[test]
    fn order_is_not_uniform() {
        let d = PixelFormat::BGRA5551.details();
        assert_eq!(d.blue.mask, 0xF800);
        assert_eq!(d.green.mask, 0x07C0);
        assert_eq!(d.red.mask, 0x003E);
        assert_eq!(d.alpha.mask, 0x0001);

        let d = PixelFormat::ABGR8888.details();
        assert_eq!(d.masks(), [0x0000_00FF, 0x0000_FF00, 0x00FF_0000, 0xFF00_0000]);

        let d = PixelFormat::XBGR4444.details();
        assert_eq!(d.masks(), [0x000F, 0x00F0, 0x0F00, 0]);
        assert_eq!(d.bits_per_pixel, 12);
        assert_eq!(d.bytes_per_pixel, 2);
    }

    #[test]
    fn ten_bit_layout() {
        let d = PixelFormat::ARGB2101010.details();
        assert_eq!(d.alpha.bits, 2);
        assert_eq!(d.alpha.shift, 30);
        assert_eq!(d.red.bits, 10);
        assert_eq!(d.red.shift, 20);
        assert_eq!(d.blue.mask, 0x3FF);
    }

    #[test]
    fn padded_formats() {
        let d = PixelFormat::XRGB8888.details();
        assert_eq!(d.bits_per_pixel, 32);
        assert_eq!(d.padding_bits(), 8);
        assert_eq!(PixelFormat::XRGB2101010.details().padding_bits(), 2);
        assert_eq!(PixelFormat::XRGB1555.details().bits_per_pixel, 15);
        assert_eq!(PixelFormat::XRGB1555.details().padding_bits(), 0);
        assert_eq!(PixelFormat::RGBA8888.details().padding_bits(), 0);
    }

    #[test]
    fn indexed_has_no_channels() {
        let d = PixelFormat::INDEX1MSB.details();
        assert_eq!(d.bits_per_pixel, 1);
        assert_eq!(d.bytes_per_pixel, 1);
        assert_eq!(d.masks(), [0; 4]);
        assert_eq!(PixelFormat::INDEX4LSB.details().bytes_per_pixel, 1);
        assert_eq!(PixelFormat::INDEX8.details().bits_per_pixel, 8);
    }

    #[test]
    fn rgb24_native_masks() {
        let d = PixelFormat::RGB24.details();
        assert_eq!(d.bits_per_pixel, 24);
        assert_eq!(d.bytes_per_pixel, 3);
        if cfg!(target_endian = "little") {
            assert_eq!(d.masks(), [0x0000FF, 0x00FF00, 0xFF0000, 0]);
        } else {
            assert_eq!(d.masks(), [0xFF0000, 0x00FF00, 0x0000FF, 0]);
        }
        assert_eq!(d.byte_offsets(), Some([Some(0), Some(1), Some(2), None]));
    }

    #[test]
    fn wide_arrays() {
        let d = PixelFormat::ARGB64.details();
        assert_eq!(d.bits_per_pixel, 64);
        assert_eq!(d.bytes_per_pixel, 8);
        assert_eq!(d.red.bits, 16);
        assert_eq!(d.alpha.shift, 0);
        assert_eq!(d.red.shift, 16);
        assert_eq!(d.masks(), [0; 4]);
        assert_eq!(
            d.byte_offsets(),
            Some([Some(2), Some(4), Some(6), Some(0)])
        );
        assert!(!d.is_mappable());

        let d = PixelFormat::BGR96_FLOAT.details();
        assert_eq!(d.blue.bits, 32);
        assert_eq!(d.byte_offsets(), Some([Some(8), Some(4), Some(0), None]));
    }

    #[test]
    fn unknown_and_fourcc() {
        let d = PixelFormat(0x1234_5678).details();
        assert_eq!(d.bits_per_pixel, 0);
        assert_eq!(d.bytes_per_pixel, 0);
        assert_eq!(d.masks(), [0; 4]);

        let d = PixelFormat::UNKNOWN.details();
        assert_eq!(d, FormatDetails::unknown(PixelFormat::UNKNOWN));

        let d = PixelFormat::YUY2.details();
        assert_eq!(d.bits_per_pixel, 0);
        assert_eq!(d.bytes_per_pixel, 2);
        assert_eq!(d.masks(), [0; 4]);
        assert!(!d.is_mappable());
    }

    #[test]
    fn extract_never_overflows() {
        for &f in PixelFormat::ALL {
            let d = f.details();
            for c in d.channels() {
                assert_eq!(c.extract(0), 0, "{f:?}");
                let all = c.extract(u32::MAX);
                assert_eq!(all, c.mask >> c.shift.min(31), "{f:?} {c:?}");
            }
        }
        let wide = PixelFormat::RGBA128_FLOAT.details().alpha;
        assert_eq!(wide.shift, 96);
        assert_eq!(wide.extract(u32::MAX), 0);
    }

    #[test]
    fn indexed_and_array_padding() {
        assert_eq!(PixelFormat::INDEX8.details().padding_bits(), 0);
        assert_eq!(PixelFormat::INDEX1LSB.details().padding_bits(), 0);
        assert_eq!(PixelFormat::RGB48.details().padding_bits(), 0);
        assert_eq!(PixelFormat::RGBA128_FLOAT.details().padding_bits(), 0);
        assert_eq!(PixelFormat::RGB24.details().padding_bits(), 0);
    }

    #[test]
    fn details_is_const() {
        const D: FormatDetails = FormatDetails::new(PixelFormat::RGB332);
        assert_eq!(D.masks(), [0xE0, 0x1C, 0x03, 0]);
    }
}
