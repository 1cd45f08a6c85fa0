//! Pixel-format identifiers.
//!
//! A [`PixelFormat`] is a 32-bit value. Defined formats pack five fields
//! with [`bits::pack`](crate::bits::pack), least-significant first:
//!
//! | bits  | field                                |
//! |-------|--------------------------------------|
//! | 0–7   | bytes per pixel                      |
//! | 8–15  | bits per pixel                       |
//! | 16–19 | packed layout                        |
//! | 20–23 | channel order                        |
//! | 24–27 | pixel type                           |
//! | 28–31 | flag nibble, always `1`              |
//!
//! Planar and compressed formats instead carry a four-character code
//! (first character in the lowest byte), recognizable by the flag nibble
//! not being `1`.

use core::fmt;

use crate::bits::{pack, unpack};

// ── Field enumerations ──────────────────────────────────────────────

/// How pixels are stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PixelType {
    Unknown = 0,
    /// 1 bit per pixel, palette index.
    Index1 = 1,
    /// 4 bits per pixel, palette index.
    Index4 = 2,
    /// 8 bits per pixel, palette index.
    Index8 = 3,
    /// Channels packed into a native `u8`.
    Packed8 = 4,
    /// Channels packed into a native `u16`.
    Packed16 = 5,
    /// Channels packed into a native `u32`.
    Packed32 = 6,
    /// One `u8` per channel.
    ArrayU8 = 7,
    /// One `u16` per channel.
    ArrayU16 = 8,
    /// One `u32` per channel.
    ArrayU32 = 9,
    /// One half-float per channel.
    ArrayF16 = 10,
    /// One `f32` per channel.
    ArrayF32 = 11,
    /// 2 bits per pixel, palette index.
    Index2 = 12,
}

impl PixelType {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::Unknown,
            1 => Self::Index1,
            2 => Self::Index4,
            3 => Self::Index8,
            4 => Self::Packed8,
            5 => Self::Packed16,
            6 => Self::Packed32,
            7 => Self::ArrayU8,
            8 => Self::ArrayU16,
            9 => Self::ArrayU32,
            10 => Self::ArrayF16,
            11 => Self::ArrayF32,
            12 => Self::Index2,
            _ => return None,
        })
    }

    pub const fn is_indexed(self) -> bool {
        matches!(
            self,
            Self::Index1 | Self::Index2 | Self::Index4 | Self::Index8
        )
    }

    pub const fn is_packed(self) -> bool {
        matches!(self, Self::Packed8 | Self::Packed16 | Self::Packed32)
    }

    pub const fn is_array(self) -> bool {
        matches!(
            self,
            Self::ArrayU8 | Self::ArrayU16 | Self::ArrayU32 | Self::ArrayF16 | Self::ArrayF32
        )
    }

    pub const fn is_float(self) -> bool {
        matches!(self, Self::ArrayF16 | Self::ArrayF32)
    }

    /// Bytes per channel for array types, 0 otherwise.
    pub const fn component_bytes(self) -> u8 {
        match self {
            Self::ArrayU8 => 1,
            Self::ArrayU16 | Self::ArrayF16 => 2,
            Self::ArrayU32 | Self::ArrayF32 => 4,
            _ => 0,
        }
    }
}

/// Bit order within a byte for sub-byte indexed formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BitmapOrder {
    None = 0,
    /// First pixel in the least significant bits.
    Order4321 = 1,
    /// First pixel in the most significant bits.
    Order1234 = 2,
}

/// Channel order of a packed integer, most significant channel first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PackedOrder {
    None = 0,
    Xrgb = 1,
    Rgbx = 2,
    Argb = 3,
    Rgba = 4,
    Xbgr = 5,
    Bgrx = 6,
    Abgr = 7,
    Bgra = 8,
}

/// Channel order of a byte array, first byte first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ArrayOrder {
    None = 0,
    Rgb = 1,
    Rgba = 2,
    Argb = 3,
    Bgr = 4,
    Bgra = 5,
    Abgr = 6,
}

/// Channel order, interpreted according to the [`PixelType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelOrder {
    None,
    Bitmap(BitmapOrder),
    Packed(PackedOrder),
    Array(ArrayOrder),
}

impl PixelOrder {
    pub const fn raw(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Bitmap(o) => o as u8,
            Self::Packed(o) => o as u8,
            Self::Array(o) => o as u8,
        }
    }

    /// Interpret a raw order nibble for the given pixel type.
    pub const fn from_raw(pixel_type: PixelType, raw: u8) -> Option<Self> {
        if pixel_type.is_indexed() {
            return match raw {
                0 => Some(Self::Bitmap(BitmapOrder::None)),
                1 => Some(Self::Bitmap(BitmapOrder::Order4321)),
                2 => Some(Self::Bitmap(BitmapOrder::Order1234)),
                _ => None,
            };
        }
        if pixel_type.is_packed() {
            return Some(Self::Packed(match raw {
                0 => PackedOrder::None,
                1 => PackedOrder::Xrgb,
                2 => PackedOrder::Rgbx,
                3 => PackedOrder::Argb,
                4 => PackedOrder::Rgba,
                5 => PackedOrder::Xbgr,
                6 => PackedOrder::Bgrx,
                7 => PackedOrder::Abgr,
                8 => PackedOrder::Bgra,
                _ => return None,
            }));
        }
        if pixel_type.is_array() {
            return Some(Self::Array(match raw {
                0 => ArrayOrder::None,
                1 => ArrayOrder::Rgb,
                2 => ArrayOrder::Rgba,
                3 => ArrayOrder::Argb,
                4 => ArrayOrder::Bgr,
                5 => ArrayOrder::Bgra,
                6 => ArrayOrder::Abgr,
                _ => return None,
            }));
        }
        match raw {
            0 => Some(Self::None),
            _ => None,
        }
    }
}

/// Sub-layout of a packed integer, most significant slot first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PackedLayout {
    None = 0,
    Layout332 = 1,
    Layout4444 = 2,
    Layout1555 = 3,
    Layout5551 = 4,
    Layout565 = 5,
    Layout8888 = 6,
    Layout2101010 = 7,
    Layout1010102 = 8,
}

impl PackedLayout {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::None,
            1 => Self::Layout332,
            2 => Self::Layout4444,
            3 => Self::Layout1555,
            4 => Self::Layout5551,
            5 => Self::Layout565,
            6 => Self::Layout8888,
            7 => Self::Layout2101010,
            8 => Self::Layout1010102,
            _ => return None,
        })
    }
}

// ── Identifier ──────────────────────────────────────────────────────

const FIELD_WIDTHS: [u32; 6] = [8, 8, 4, 4, 4, 4];
const FLAG: u32 = 1;

/// Decomposed form of a [`PixelFormat`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatFields {
    /// The all-zero identifier.
    Unknown,
    Defined {
        pixel_type: PixelType,
        order: PixelOrder,
        layout: PackedLayout,
        bits: u8,
        bytes: u8,
    },
    /// Planar or compressed format; no channel information.
    FourCc([u8; 4]),
}

impl FormatFields {
    pub const fn compose(self) -> PixelFormat {
        match self {
            Self::Unknown => PixelFormat::UNKNOWN,
            Self::Defined {
                pixel_type,
                order,
                layout,
                bits,
                bytes,
            } => PixelFormat::define(pixel_type, order, layout, bits, bytes),
            Self::FourCc(code) => PixelFormat::from_fourcc(code),
        }
    }
}

/// A 32-bit pixel-format identifier.
///
/// Equality is equality of the raw value. The associated constants are
/// the canonical set; [`PixelFormat::ALL`] lists them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct PixelFormat(pub u32);

impl PixelFormat {
    /// Compose a defined (non-FourCC) identifier.
    pub const fn define(
        pixel_type: PixelType,
        order: PixelOrder,
        layout: PackedLayout,
        bits: u8,
        bytes: u8,
    ) -> Self {
        Self(pack([
            (bytes as u32, FIELD_WIDTHS[0]),
            (bits as u32, FIELD_WIDTHS[1]),
            (layout as u32, FIELD_WIDTHS[2]),
            (order.raw() as u32, FIELD_WIDTHS[3]),
            (pixel_type as u32, FIELD_WIDTHS[4]),
            (FLAG, FIELD_WIDTHS[5]),
        ]))
    }

    /// Compose a four-character-code identifier.
    pub const fn from_fourcc(code: [u8; 4]) -> Self {
        Self(pack([
            (code[0] as u32, 8),
            (code[1] as u32, 8),
            (code[2] as u32, 8),
            (code[3] as u32, 8),
        ]))
    }

    /// Split the identifier back into its fields.
    ///
    /// Returns `None` if a defined identifier holds a type, order or layout
    /// value that no enumeration names.
    pub fn decompose(self) -> Option<FormatFields> {
        if self.0 == 0 {
            return Some(FormatFields::Unknown);
        }
        if let Some(code) = self.fourcc() {
            return Some(FormatFields::FourCc(code));
        }
        let [bytes, bits, layout, order, pixel_type, _flag] = unpack(self.0, FIELD_WIDTHS);
        let pixel_type = PixelType::from_raw(pixel_type as u8)?;
        Some(FormatFields::Defined {
            pixel_type,
            order: PixelOrder::from_raw(pixel_type, order as u8)?,
            layout: PackedLayout::from_raw(layout as u8)?,
            bits: bits as u8,
            bytes: bytes as u8,
        })
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    const fn flag(self) -> u32 {
        (self.0 >> 28) & 0x0F
    }

    pub const fn is_fourcc(self) -> bool {
        self.0 != 0 && self.flag() != FLAG
    }

    /// The four-character code, if this is a FourCC identifier.
    pub const fn fourcc(self) -> Option<[u8; 4]> {
        if self.is_fourcc() {
            Some(self.0.to_le_bytes())
        } else {
            None
        }
    }

    /// Pixel type; [`PixelType::Unknown`] for FourCC and unrecognized values.
    pub const fn pixel_type(self) -> PixelType {
        if self.is_fourcc() {
            return PixelType::Unknown;
        }
        match PixelType::from_raw(((self.0 >> 24) & 0x0F) as u8) {
            Some(t) => t,
            None => PixelType::Unknown,
        }
    }

    /// Raw order nibble.
    pub const fn order_raw(self) -> u8 {
        ((self.0 >> 20) & 0x0F) as u8
    }

    /// Raw layout nibble.
    pub const fn layout_raw(self) -> u8 {
        ((self.0 >> 16) & 0x0F) as u8
    }

    pub const fn packed_order(self) -> Option<PackedOrder> {
        match PixelOrder::from_raw(self.pixel_type(), self.order_raw()) {
            Some(PixelOrder::Packed(o)) if self.pixel_type().is_packed() => Some(o),
            _ => None,
        }
    }

    pub const fn array_order(self) -> Option<ArrayOrder> {
        match PixelOrder::from_raw(self.pixel_type(), self.order_raw()) {
            Some(PixelOrder::Array(o)) if self.pixel_type().is_array() => Some(o),
            _ => None,
        }
    }

    pub const fn bitmap_order(self) -> Option<BitmapOrder> {
        match PixelOrder::from_raw(self.pixel_type(), self.order_raw()) {
            Some(PixelOrder::Bitmap(o)) if self.pixel_type().is_indexed() => Some(o),
            _ => None,
        }
    }

    pub const fn packed_layout(self) -> Option<PackedLayout> {
        if self.is_fourcc() {
            return None;
        }
        PackedLayout::from_raw(self.layout_raw())
    }

    /// Bits-per-pixel field; 0 for FourCC formats.
    pub const fn bits_per_pixel(self) -> u8 {
        if self.is_fourcc() {
            0
        } else {
            ((self.0 >> 8) & 0xFF) as u8
        }
    }

    /// Bytes-per-pixel field. Packed YUV FourCC formats report 2, other
    /// FourCC formats 1.
    pub const fn bytes_per_pixel(self) -> u8 {
        if self.is_fourcc() {
            match self {
                Self::YUY2 | Self::UYVY | Self::YVYU | Self::P010 => 2,
                _ => 1,
            }
        } else {
            (self.0 & 0xFF) as u8
        }
    }

    pub const fn is_indexed(self) -> bool {
        !self.is_fourcc() && self.pixel_type().is_indexed()
    }

    pub const fn is_packed(self) -> bool {
        !self.is_fourcc() && self.pixel_type().is_packed()
    }

    pub const fn is_array(self) -> bool {
        !self.is_fourcc() && self.pixel_type().is_array()
    }

    pub const fn is_float(self) -> bool {
        !self.is_fourcc() && self.pixel_type().is_float()
    }

    /// Packed 32-bit format with 10-bit color channels.
    pub const fn is_10bit(self) -> bool {
        matches!(self.pixel_type(), PixelType::Packed32)
            && matches!(
                self.packed_layout(),
                Some(PackedLayout::Layout2101010 | PackedLayout::Layout1010102)
            )
    }

    /// Whether the format stores an alpha channel.
    pub const fn has_alpha(self) -> bool {
        matches!(
            self.packed_order(),
            Some(PackedOrder::Argb | PackedOrder::Rgba | PackedOrder::Abgr | PackedOrder::Bgra)
        ) || matches!(
            self.array_order(),
            Some(ArrayOrder::Argb | ArrayOrder::Rgba | ArrayOrder::Abgr | ArrayOrder::Bgra)
        )
    }

    /// Whether this identifier is one of the canonical constants.
    pub const fn is_canonical(self) -> bool {
        let mut i = 0;
        while i < Self::ALL.len() {
            if Self::ALL[i].0 == self.0 {
                return true;
            }
            i += 1;
        }
        false
    }
}

macro_rules! canonical_formats {
    ($( $name:ident = $value:expr; )*) => {
        impl PixelFormat {
            $( pub const $name: PixelFormat = $value; )*

            /// Every canonical identifier, in declaration order.
            pub const ALL: &'static [PixelFormat] = &[ $( PixelFormat::$name, )* ];

            /// Canonical name, or `"UNKNOWN"` for anything outside the table.
            pub fn name(self) -> &'static str {
                $( if self == PixelFormat::$name { return stringify!($name); } )*
                "UNKNOWN"
            }
        }
    };
}

use PackedLayout as L;
use PixelOrder::{Array as A, Bitmap as B, Packed as P};
use PixelType as T;

const fn d(t: PixelType, o: PixelOrder, l: PackedLayout, bits: u8, bytes: u8) -> PixelFormat {
    PixelFormat::define(t, o, l, bits, bytes)
}

const fn cc(code: &[u8; 4]) -> PixelFormat {
    PixelFormat::from_fourcc(*code)
}

canonical_formats! {
    UNKNOWN = PixelFormat(0);
    INDEX1LSB = d(T::Index1, B(BitmapOrder::Order4321), L::None, 1, 0);
    INDEX1MSB = d(T::Index1, B(BitmapOrder::Order1234), L::None, 1, 0);
    INDEX2LSB = d(T::Index2, B(BitmapOrder::Order4321), L::None, 2, 0);
    INDEX2MSB = d(T::Index2, B(BitmapOrder::Order1234), L::None, 2, 0);
    INDEX4LSB = d(T::Index4, B(BitmapOrder::Order4321), L::None, 4, 0);
    INDEX4MSB = d(T::Index4, B(BitmapOrder::Order1234), L::None, 4, 0);
    INDEX8 = d(T::Index8, B(BitmapOrder::None), L::None, 8, 1);
    RGB332 = d(T::Packed8, P(PackedOrder::Xrgb), L::Layout332, 8, 1);
    XRGB4444 = d(T::Packed16, P(PackedOrder::Xrgb), L::Layout4444, 12, 2);
    XBGR4444 = d(T::Packed16, P(PackedOrder::Xbgr), L::Layout4444, 12, 2);
    XRGB1555 = d(T::Packed16, P(PackedOrder::Xrgb), L::Layout1555, 15, 2);
    XBGR1555 = d(T::Packed16, P(PackedOrder::Xbgr), L::Layout1555, 15, 2);
    ARGB4444 = d(T::Packed16, P(PackedOrder::Argb), L::Layout4444, 16, 2);
    RGBA4444 = d(T::Packed16, P(PackedOrder::Rgba), L::Layout4444, 16, 2);
    ABGR4444 = d(T::Packed16, P(PackedOrder::Abgr), L::Layout4444, 16, 2);
    BGRA4444 = d(T::Packed16, P(PackedOrder::Bgra), L::Layout4444, 16, 2);
    ARGB1555 = d(T::Packed16, P(PackedOrder::Argb), L::Layout1555, 16, 2);
    RGBA5551 = d(T::Packed16, P(PackedOrder::Rgba), L::Layout5551, 16, 2);
    ABGR1555 = d(T::Packed16, P(PackedOrder::Abgr), L::Layout1555, 16, 2);
    BGRA5551 = d(T::Packed16, P(PackedOrder::Bgra), L::Layout5551, 16, 2);
    RGB565 = d(T::Packed16, P(PackedOrder::Xrgb), L::Layout565, 16, 2);
    BGR565 = d(T::Packed16, P(PackedOrder::Xbgr), L::Layout565, 16, 2);
    RGB24 = d(T::ArrayU8, A(ArrayOrder::Rgb), L::None, 24, 3);
    BGR24 = d(T::ArrayU8, A(ArrayOrder::Bgr), L::None, 24, 3);
    XRGB8888 = d(T::Packed32, P(PackedOrder::Xrgb), L::Layout8888, 24, 4);
    RGBX8888 = d(T::Packed32, P(PackedOrder::Rgbx), L::Layout8888, 24, 4);
    XBGR8888 = d(T::Packed32, P(PackedOrder::Xbgr), L::Layout8888, 24, 4);
    BGRX8888 = d(T::Packed32, P(PackedOrder::Bgrx), L::Layout8888, 24, 4);
    ARGB8888 = d(T::Packed32, P(PackedOrder::Argb), L::Layout8888, 32, 4);
    RGBA8888 = d(T::Packed32, P(PackedOrder::Rgba), L::Layout8888, 32, 4);
    ABGR8888 = d(T::Packed32, P(PackedOrder::Abgr), L::Layout8888, 32, 4);
    BGRA8888 = d(T::Packed32, P(PackedOrder::Bgra), L::Layout8888, 32, 4);
    XRGB2101010 = d(T::Packed32, P(PackedOrder::Xrgb), L::Layout2101010, 32, 4);
    XBGR2101010 = d(T::Packed32, P(PackedOrder::Xbgr), L::Layout2101010, 32, 4);
    ARGB2101010 = d(T::Packed32, P(PackedOrder::Argb), L::Layout2101010, 32, 4);
    ABGR2101010 = d(T::Packed32, P(PackedOrder::Abgr), L::Layout2101010, 32, 4);
    RGB48 = d(T::ArrayU16, A(ArrayOrder::Rgb), L::None, 48, 6);
    BGR48 = d(T::ArrayU16, A(ArrayOrder::Bgr), L::None, 48, 6);
    RGBA64 = d(T::ArrayU16, A(ArrayOrder::Rgba), L::None, 64, 8);
    ARGB64 = d(T::ArrayU16, A(ArrayOrder::Argb), L::None, 64, 8);
    BGRA64 = d(T::ArrayU16, A(ArrayOrder::Bgra), L::None, 64, 8);
    ABGR64 = d(T::ArrayU16, A(ArrayOrder::Abgr), L::None, 64, 8);
    RGB48_FLOAT = d(T::ArrayF16, A(ArrayOrder::Rgb), L::None, 48, 6);
    BGR48_FLOAT = d(T::ArrayF16, A(ArrayOrder::Bgr), L::None, 48, 6);
    RGBA64_FLOAT = d(T::ArrayF16, A(ArrayOrder::Rgba), L::None, 64, 8);
    ARGB64_FLOAT = d(T::ArrayF16, A(ArrayOrder::Argb), L::None, 64, 8);
    BGRA64_FLOAT = d(T::ArrayF16, A(ArrayOrder::Bgra), L::None, 64, 8);
    ABGR64_FLOAT = d(T::ArrayF16, A(ArrayOrder::Abgr), L::None, 64, 8);
    RGB96_FLOAT = d(T::ArrayF32, A(ArrayOrder::Rgb), L::None, 96, 12);
    BGR96_FLOAT = d(T::ArrayF32, A(ArrayOrder::Bgr), L::None, 96, 12);
    RGBA128_FLOAT = d(T::ArrayF32, A(ArrayOrder::Rgba), L::None, 128, 16);
    ARGB128_FLOAT = d(T::ArrayF32, A(ArrayOrder::Argb), L::None, 128, 16);
    BGRA128_FLOAT = d(T::ArrayF32, A(ArrayOrder::Bgra), L::None, 128, 16);
    ABGR128_FLOAT = d(T::ArrayF32, A(ArrayOrder::Abgr), L::None, 128, 16);
    YV12 = cc(b"YV12");
    IYUV = cc(b"IYUV");
    YUY2 = cc(b"YUY2");
    UYVY = cc(b"UYVY");
    YVYU = cc(b"YVYU");
    NV12 = cc(b"NV12");
    NV21 = cc(b"NV21");
    P010 = cc(b"P010");
    EXTERNAL_OES = cc(b"OES ");
    MJPG = cc(b"MJPG");
}

// Byte-order aliases: each names the packed format whose in-memory byte
// sequence is the alias's channel order on this target.
impl PixelFormat {
    #[cfg(target_endian = "big")]
    pub const RGBA32: Self = Self::RGBA8888;
    #[cfg(target_endian = "big")]
    pub const ARGB32: Self = Self::ARGB8888;
    #[cfg(target_endian = "big")]
    pub const BGRA32: Self = Self::BGRA8888;
    #[cfg(target_endian = "big")]
    pub const ABGR32: Self = Self::ABGR8888;
    #[cfg(target_endian = "big")]
    pub const RGBX32: Self = Self::RGBX8888;
    #[cfg(target_endian = "big")]
    pub const XRGB32: Self = Self::XRGB8888;
    #[cfg(target_endian = "big")]
    pub const BGRX32: Self = Self::BGRX8888;
    #[cfg(target_endian = "big")]
    pub const XBGR32: Self = Self::XBGR8888;

    #[cfg(target_endian = "little")]
    pub const RGBA32: Self = Self::ABGR8888;
    #[cfg(target_endian = "little")]
    pub const ARGB32: Self = Self::BGRA8888;
    #[cfg(target_endian = "little")]
    pub const BGRA32: Self = Self::ARGB8888;
    #[cfg(target_endian = "little")]
    pub const ABGR32: Self = Self::RGBA8888;
    #[cfg(target_endian = "little")]
    pub const RGBX32: Self = Self::XBGR8888;
    #[cfg(target_endian = "little")]
    pub const XRGB32: Self = Self::BGRX8888;
    #[cfg(target_endian = "little")]
    pub const BGRX32: Self = Self::XRGB8888;
    #[cfg(target_endian = "little")]
    pub const XBGR32: Self = Self::RGBX8888;
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PixelFormat::{}({:#010x})", self.name(), self.0)
    }
}

impl From<PixelFormat> for u32 {
    fn from(format: PixelFormat) -> u32 {
        format.0
    }
}

impl From<u32> for PixelFormat {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_values() {
        assert_eq!(PixelFormat::INDEX1LSB.0, 0x1110_0100);
        assert_eq!(PixelFormat::INDEX1MSB.0, 0x1120_0100);
        assert_eq!(PixelFormat::INDEX2LSB.0, 0x1c10_0200);
        assert_eq!(PixelFormat::INDEX4MSB.0, 0x1220_0400);
        assert_eq!(PixelFormat::INDEX8.0, 0x1300_0801);
        assert_eq!(PixelFormat::RGB332.0, 0x1411_0801);
        assert_eq!(PixelFormat::XRGB4444.0, 0x1512_0c02);
        assert_eq!(PixelFormat::XRGB1555.0, 0x1513_0f02);
        assert_eq!(PixelFormat::RGBA5551.0, 0x1544_1002);
        assert_eq!(PixelFormat::RGB565.0, 0x1515_1002);
        assert_eq!(PixelFormat::BGR565.0, 0x1555_1002);
        assert_eq!(PixelFormat::RGB24.0, 0x1710_1803);
        assert_eq!(PixelFormat::XRGB8888.0, 0x1616_1804);
        assert_eq!(PixelFormat::ARGB8888.0, 0x1636_2004);
        assert_eq!(PixelFormat::BGRA8888.0, 0x1686_2004);
        assert_eq!(PixelFormat::ABGR2101010.0, 0x1677_2004);
        assert_eq!(PixelFormat::RGBA64.0, 0x1820_4008);
        assert_eq!(PixelFormat::RGB96_FLOAT.0, 0x1b10_600c);
        assert_eq!(PixelFormat::ABGR128_FLOAT.0, 0x1b60_8010);
    }

    #[test]
    fn fourcc_values() {
        assert_eq!(PixelFormat::YV12.0, 0x3231_5659);
        assert_eq!(PixelFormat::IYUV.0, 0x5655_5949);
        assert_eq!(PixelFormat::NV12.0, 0x3231_564e);
        assert_eq!(PixelFormat::P010.0, 0x3031_3050);
        assert_eq!(PixelFormat::EXTERNAL_OES.0, 0x2053_454f);
        assert_eq!(PixelFormat::MJPG.fourcc(), Some(*b"MJPG"));
        assert!(PixelFormat::YUY2.is_fourcc());
        assert!(!PixelFormat::UNKNOWN.is_fourcc());
        assert!(!PixelFormat::RGB565.is_fourcc());
    }

    #[test]
    fn fourcc_bytes_per_pixel() {
        assert_eq!(PixelFormat::YUY2.bytes_per_pixel(), 2);
        assert_eq!(PixelFormat::P010.bytes_per_pixel(), 2);
        assert_eq!(PixelFormat::NV12.bytes_per_pixel(), 1);
        assert_eq!(PixelFormat::NV12.bits_per_pixel(), 0);
    }

    #[test]
    fn decompose_defined() {
        let fields = PixelFormat::RGB565.decompose().unwrap();
        assert_eq!(
            fields,
            FormatFields::Defined {
                pixel_type: PixelType::Packed16,
                order: PixelOrder::Packed(PackedOrder::Xrgb),
                layout: PackedLayout::Layout565,
                bits: 16,
                bytes: 2,
            }
        );
        assert_eq!(fields.compose(), PixelFormat::RGB565);
    }

    #[test]
    fn decompose_fourcc_and_unknown() {
        assert_eq!(
            PixelFormat::NV21.decompose(),
            Some(FormatFields::FourCc(*b"NV21"))
        );
        assert_eq!(PixelFormat::UNKNOWN.decompose(), Some(FormatFields::Unknown));
    }

    #[test]
    fn decompose_rejects_unnamed_fields() {
        // Pixel type 13 is not defined.
        let bogus = PixelFormat(0x1d00_0000);
        assert_eq!(bogus.decompose(), None);
        // Packed order 9 is not defined.
        let bogus = PixelFormat(0x1596_1002);
        assert_eq!(bogus.decompose(), None);
    }

    #[test]
    fn predicates() {
        assert!(PixelFormat::INDEX4LSB.is_indexed());
        assert!(PixelFormat::RGB332.is_packed());
        assert!(PixelFormat::BGR24.is_array());
        assert!(PixelFormat::RGBA64_FLOAT.is_float());
        assert!(!PixelFormat::RGBA64.is_float());
        assert!(PixelFormat::XRGB2101010.is_10bit());
        assert!(!PixelFormat::XRGB8888.is_10bit());
        assert!(PixelFormat::ARGB1555.has_alpha());
        assert!(PixelFormat::BGRA64.has_alpha());
        assert!(!PixelFormat::XRGB1555.has_alpha());
        assert!(!PixelFormat::RGB48.has_alpha());
        assert!(!PixelFormat::INDEX8.has_alpha());
    }

    #[test]
    fn byte_order_aliases_match_memory_order() {
        // RGBA32 is R,G,B,A in memory regardless of target.
        let px = PixelFormat::RGBA32;
        assert!(px.is_packed());
        if cfg!(target_endian = "little") {
            assert_eq!(px, PixelFormat::ABGR8888);
            assert_eq!(PixelFormat::XRGB32, PixelFormat::BGRX8888);
        } else {
            assert_eq!(px, PixelFormat::RGBA8888);
            assert_eq!(PixelFormat::XRGB32, PixelFormat::XRGB8888);
        }
    }

    #[test]
    fn names_and_display() {
        assert_eq!(PixelFormat::RGB565.name(), "RGB565");
        assert_eq!(PixelFormat(0x1234_5678).name(), "UNKNOWN");
        assert_eq!(alloc::format!("{}", PixelFormat::ABGR8888), "ABGR8888");
        assert_eq!(
            alloc::format!("{:?}", PixelFormat::RGB565),
            "PixelFormat::RGB565(0x15151002)"
        );
    }

    #[test]
    fn canonical_table_is_unique() {
        for (i, a) in PixelFormat::ALL.iter().enumerate() {
            for b in &PixelFormat::ALL[i + 1..] {
                assert_ne!(a, b, "duplicate canonical value {a:?}");
            }
            assert!(a.is_canonical());
        }
        assert!(!PixelFormat(0x1234_5678).is_canonical());
    }
}
