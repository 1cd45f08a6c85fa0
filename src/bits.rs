//! Bit-field packing for fixed-width identifiers.
//!
//! Fields are listed least-significant first: each field sits directly
//! above the previous one. Both identifier codecs in this crate are built
//! on these two functions.

use crate::error::PixelError;

/// A single field: `(value, width_in_bits)`.
pub type Field = (u32, u32);

/// Mask with the low `width` bits set.
#[inline]
pub const fn low_mask(width: u32) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}

/// Pack fields into a `u32`, least-significant field first.
///
/// Values wider than their field are truncated to the field width, the
/// same way a C bit-field or shift-and-or macro behaves. Use [`try_pack`]
/// when the input is not a compile-time constant.
pub const fn pack<const N: usize>(fields: [Field; N]) -> u32 {
    let mut out = 0u32;
    let mut shift = 0u32;
    let mut i = 0;
    while i < N {
        let (value, width) = fields[i];
        if shift < 32 {
            out |= (value & low_mask(width)) << shift;
        }
        shift += width;
        i += 1;
    }
    out
}

/// Like [`pack`], but rejects any value that does not fit its field.
pub fn try_pack<const N: usize>(fields: [Field; N]) -> Result<u32, PixelError> {
    let total: u32 = fields.iter().map(|&(_, w)| w).sum();
    if total > 32 {
        return Err(PixelError::FieldOverflow {
            value: total,
            width: 32,
        });
    }
    for &(value, width) in &fields {
        if value > low_mask(width) {
            return Err(PixelError::FieldOverflow { value, width });
        }
    }
    Ok(pack(fields))
}

/// Split `value` into fields of the given widths, least-significant first.
pub const fn unpack<const N: usize>(value: u32, widths: [u32; N]) -> [u32; N] {
    let mut out = [0u32; N];
    let mut shift = 0u32;
    let mut i = 0;
    while i < N {
        if shift < 32 {
            out[i] = (value >> shift) & low_mask(widths[i]);
        }
        shift += widths[i];
        i += 1;
    }
    out
}
