//! Colorspace identifiers.
//!
//! A [`Colorspace`] packs six fields into 32 bits, least-significant
//! first:
//!
//! | bits  | field                     |
//! |-------|---------------------------|
//! | 0–4   | matrix coefficients       |
//! | 5–9   | transfer characteristics  |
//! | 10–14 | color primaries           |
//! | 15–19 | reserved, zero            |
//! | 20–23 | chroma sample location    |
//! | 24–27 | range                     |
//! | 28–31 | color type                |
//!
//! Primaries, transfer and matrix values follow ITU-T H.273 code points.
//! The `Custom` value of each signals that an out-of-band profile
//! describes the space and the numeric field should be ignored.

use core::fmt;

use crate::bits::{pack, unpack};

const FIELD_WIDTHS: [u32; 7] = [5, 5, 5, 5, 4, 4, 4];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorType {
    Unknown = 0,
    Rgb = 1,
    Ycbcr = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorRange {
    Unknown = 0,
    /// Narrow range, e.g. 16–235 for 8-bit luma.
    Limited = 1,
    /// Full range, 0–255 for 8-bit.
    Full = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorPrimaries {
    Unknown = 0,
    Bt709 = 1,
    Unspecified = 2,
    Bt470m = 4,
    Bt470bg = 5,
    Bt601 = 6,
    Smpte240 = 7,
    GenericFilm = 8,
    Bt2020 = 9,
    Xyz = 10,
    Smpte431 = 11,
    Smpte432 = 12,
    Ebu3213 = 22,
    Custom = 31,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TransferCharacteristics {
    Unknown = 0,
    Bt709 = 1,
    Unspecified = 2,
    Gamma22 = 4,
    Gamma28 = 5,
    Bt601 = 6,
    Smpte240 = 7,
    Linear = 8,
    Log100 = 9,
    Log100Sqrt10 = 10,
    Iec61966 = 11,
    Bt1361 = 12,
    Srgb = 13,
    Bt2020_10bit = 14,
    Bt2020_12bit = 15,
    /// SMPTE ST 2084 (HDR10).
    Pq = 16,
    Smpte428 = 17,
    /// ARIB STD-B67.
    Hlg = 18,
    Custom = 31,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MatrixCoefficients {
    Identity = 0,
    Bt709 = 1,
    Unspecified = 2,
    Fcc = 4,
    Bt470bg = 5,
    Bt601 = 6,
    Smpte240 = 7,
    Ycgco = 8,
    Bt2020Ncl = 9,
    Bt2020Cl = 10,
    Smpte2085 = 11,
    ChromaDerivedNcl = 12,
    ChromaDerivedCl = 13,
    Ictcp = 14,
    Custom = 31,
}

/// Position of subsampled chroma relative to luma.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChromaLocation {
    None = 0,
    Left = 1,
    Center = 2,
    TopLeft = 3,
}

impl ColorType {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::Unknown,
            1 => Self::Rgb,
            2 => Self::Ycbcr,
            _ => return None,
        })
    }
}

impl ColorRange {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::Unknown,
            1 => Self::Limited,
            2 => Self::Full,
            _ => return None,
        })
    }
}

impl ColorPrimaries {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::Unknown,
            1 => Self::Bt709,
            2 => Self::Unspecified,
            4 => Self::Bt470m,
            5 => Self::Bt470bg,
            6 => Self::Bt601,
            7 => Self::Smpte240,
            8 => Self::GenericFilm,
            9 => Self::Bt2020,
            10 => Self::Xyz,
            11 => Self::Smpte431,
            12 => Self::Smpte432,
            22 => Self::Ebu3213,
            31 => Self::Custom,
            _ => return None,
        })
    }
}

impl TransferCharacteristics {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::Unknown,
            1 => Self::Bt709,
            2 => Self::Unspecified,
            4 => Self::Gamma22,
            5 => Self::Gamma28,
            6 => Self::Bt601,
            7 => Self::Smpte240,
            8 => Self::Linear,
            9 => Self::Log100,
            10 => Self::Log100Sqrt10,
            11 => Self::Iec61966,
            12 => Self::Bt1361,
            13 => Self::Srgb,
            14 => Self::Bt2020_10bit,
            15 => Self::Bt2020_12bit,
            16 => Self::Pq,
            17 => Self::Smpte428,
            18 => Self::Hlg,
            31 => Self::Custom,
            _ => return None,
        })
    }
}

impl MatrixCoefficients {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::Identity,
            1 => Self::Bt709,
            2 => Self::Unspecified,
            4 => Self::Fcc,
            5 => Self::Bt470bg,
            6 => Self::Bt601,
            7 => Self::Smpte240,
            8 => Self::Ycgco,
            9 => Self::Bt2020Ncl,
            10 => Self::Bt2020Cl,
            11 => Self::Smpte2085,
            12 => Self::ChromaDerivedNcl,
            13 => Self::ChromaDerivedCl,
            14 => Self::Ictcp,
            31 => Self::Custom,
            _ => return None,
        })
    }
}

impl ChromaLocation {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::None,
            1 => Self::Left,
            2 => Self::Center,
            3 => Self::TopLeft,
            _ => return None,
        })
    }
}

/// Decomposed form of a [`Colorspace`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorspaceFields {
    pub color_type: ColorType,
    pub range: ColorRange,
    pub primaries: ColorPrimaries,
    pub transfer: TransferCharacteristics,
    pub matrix: MatrixCoefficients,
    pub chroma: ChromaLocation,
}

impl ColorspaceFields {
    pub const fn compose(self) -> Colorspace {
        Colorspace::define(
            self.color_type,
            self.range,
            self.primaries,
            self.transfer,
            self.matrix,
            self.chroma,
        )
    }
}

/// A 32-bit colorspace identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Colorspace(pub u32);

impl Colorspace {
    pub const fn define(
        color_type: ColorType,
        range: ColorRange,
        primaries: ColorPrimaries,
        transfer: TransferCharacteristics,
        matrix: MatrixCoefficients,
        chroma: ChromaLocation,
    ) -> Self {
        Self(pack([
            (matrix as u32, FIELD_WIDTHS[0]),
            (transfer as u32, FIELD_WIDTHS[1]),
            (primaries as u32, FIELD_WIDTHS[2]),
            (0, FIELD_WIDTHS[3]),
            (chroma as u32, FIELD_WIDTHS[4]),
            (range as u32, FIELD_WIDTHS[5]),
            (color_type as u32, FIELD_WIDTHS[6]),
        ]))
    }

    /// Split into fields; `None` if any field holds an unnamed value or a
    /// reserved bit is set.
    pub fn decompose(self) -> Option<ColorspaceFields> {
        let [matrix, transfer, primaries, reserved, chroma, range, color_type] =
            unpack(self.0, FIELD_WIDTHS);
        if reserved != 0 {
            return None;
        }
        Some(ColorspaceFields {
            color_type: ColorType::from_raw(color_type as u8)?,
            range: ColorRange::from_raw(range as u8)?,
            primaries: ColorPrimaries::from_raw(primaries as u8)?,
            transfer: TransferCharacteristics::from_raw(transfer as u8)?,
            matrix: MatrixCoefficients::from_raw(matrix as u8)?,
            chroma: ChromaLocation::from_raw(chroma as u8)?,
        })
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn color_type_raw(self) -> u8 {
        ((self.0 >> 28) & 0x0F) as u8
    }

    pub const fn range_raw(self) -> u8 {
        ((self.0 >> 24) & 0x0F) as u8
    }

    pub const fn chroma_raw(self) -> u8 {
        ((self.0 >> 20) & 0x0F) as u8
    }

    pub const fn primaries_raw(self) -> u8 {
        ((self.0 >> 10) & 0x1F) as u8
    }

    pub const fn transfer_raw(self) -> u8 {
        ((self.0 >> 5) & 0x1F) as u8
    }

    pub const fn matrix_raw(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    pub const fn color_type(self) -> Option<ColorType> {
        ColorType::from_raw(self.color_type_raw())
    }

    pub const fn range(self) -> Option<ColorRange> {
        ColorRange::from_raw(self.range_raw())
    }

    pub const fn primaries(self) -> Option<ColorPrimaries> {
        ColorPrimaries::from_raw(self.primaries_raw())
    }

    pub const fn transfer(self) -> Option<TransferCharacteristics> {
        TransferCharacteristics::from_raw(self.transfer_raw())
    }

    pub const fn matrix(self) -> Option<MatrixCoefficients> {
        MatrixCoefficients::from_raw(self.matrix_raw())
    }

    pub const fn chroma(self) -> Option<ChromaLocation> {
        ChromaLocation::from_raw(self.chroma_raw())
    }

    pub const fn is_matrix_bt601(self) -> bool {
        matches!(
            self.matrix(),
            Some(MatrixCoefficients::Bt601 | MatrixCoefficients::Bt470bg)
        )
    }

    pub const fn is_matrix_bt709(self) -> bool {
        matches!(self.matrix(), Some(MatrixCoefficients::Bt709))
    }

    pub const fn is_matrix_bt2020_ncl(self) -> bool {
        matches!(self.matrix(), Some(MatrixCoefficients::Bt2020Ncl))
    }

    /// Anything not explicitly full range counts as limited.
    pub const fn is_limited_range(self) -> bool {
        !self.is_full_range()
    }

    pub const fn is_full_range(self) -> bool {
        matches!(self.range(), Some(ColorRange::Full))
    }

    /// Whether any of primaries, transfer or matrix defers to an
    /// out-of-band profile.
    pub const fn is_custom(self) -> bool {
        matches!(self.primaries(), Some(ColorPrimaries::Custom))
            || matches!(self.transfer(), Some(TransferCharacteristics::Custom))
            || matches!(self.matrix(), Some(MatrixCoefficients::Custom))
    }
}

macro_rules! named_colorspaces {
    ($( $(#[$doc:meta])* $name:ident = $value:expr; )*) => {
        impl Colorspace {
            $( $(#[$doc])* pub const $name: Colorspace = $value; )*

            /// Every named colorspace, in declaration order.
            pub const ALL: &'static [Colorspace] = &[ $( Colorspace::$name, )* ];

            pub fn name(self) -> Option<&'static str> {
                $( if self == Colorspace::$name { return Some(stringify!($name)); } )*
                None
            }
        }
    };
}

use ChromaLocation as C;
use ColorPrimaries as P;
use ColorRange as R;
use ColorType as T;
use MatrixCoefficients as M;
use TransferCharacteristics as X;

named_colorspaces! {
    UNKNOWN = Colorspace(0);
    /// sRGB, the default for RGB surfaces.
    SRGB = Colorspace::define(T::Rgb, R::Full, P::Bt709, X::Srgb, M::Identity, C::None);
    /// sRGB primaries with linear transfer.
    SRGB_LINEAR = Colorspace::define(T::Rgb, R::Full, P::Bt709, X::Linear, M::Identity, C::None);
    /// BT.2020 primaries with PQ transfer.
    HDR10 = Colorspace::define(T::Rgb, R::Full, P::Bt2020, X::Pq, M::Identity, C::None);
    /// Full-range BT.601 YCbCr, as used by JPEG.
    JPEG = Colorspace::define(T::Ycbcr, R::Full, P::Bt709, X::Bt601, M::Bt601, C::None);
    BT601_LIMITED = Colorspace::define(T::Ycbcr, R::Limited, P::Bt601, X::Bt601, M::Bt601, C::Left);
    BT601_FULL = Colorspace::define(T::Ycbcr, R::Full, P::Bt601, X::Bt601, M::Bt601, C::Left);
    BT709_LIMITED = Colorspace::define(T::Ycbcr, R::Limited, P::Bt709, X::Bt709, M::Bt709, C::Left);
    BT709_FULL = Colorspace::define(T::Ycbcr, R::Full, P::Bt709, X::Bt709, M::Bt709, C::Left);
    BT2020_LIMITED = Colorspace::define(T::Ycbcr, R::Limited, P::Bt2020, X::Pq, M::Bt2020Ncl, C::Left);
    BT2020_FULL = Colorspace::define(T::Ycbcr, R::Full, P::Bt2020, X::Pq, M::Bt2020Ncl, C::Left);
}

impl Colorspace {
    pub const RGB_DEFAULT: Colorspace = Colorspace::SRGB;
    pub const YUV_DEFAULT: Colorspace = Colorspace::BT601_LIMITED;
}

impl fmt::Debug for Colorspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Colorspace::{name}({:#010x})", self.0),
            None => write!(f, "Colorspace({:#010x})", self.0),
        }
    }
}

impl From<Colorspace> for u32 {
    fn from(c: Colorspace) -> u32 {
        c.0
    }
}

impl From<u32> for Colorspace {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}
