//! Row-wise conversion between pixel formats.
//!
//! Built on the scalar mapper: every source pixel is unmapped to RGBA and
//! mapped into the destination format. Buffers are pitched rows. Pixels of
//! one to four bytes are stored as native-endian integers; 1-, 2- and
//! 4-bit indexed pixels are packed into bytes in the format's bit order.

use alloc::borrow::Cow;
use alloc::vec;

use enough::Stop;

use crate::bits::low_mask;
use crate::error::PixelError;
use crate::format::{BitmapOrder, PixelFormat};
use crate::limits::Limits;
use crate::map::{get_rgba, map_rgba};
use crate::palette::Palette;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Storage {
    /// Several pixels per byte.
    Bits { bits: u8, msb_first: bool },
    /// Whole bytes per pixel.
    Bytes(u8),
}

fn storage(format: PixelFormat) -> Result<Storage, PixelError> {
    let details = format.details();
    if format == PixelFormat::UNKNOWN || !details.is_mappable() {
        return Err(PixelError::UnsupportedFormat(format));
    }
    if format.is_indexed() && details.bits_per_pixel < 8 {
        let msb_first = !matches!(format.bitmap_order(), Some(BitmapOrder::Order4321));
        return Ok(Storage::Bits {
            bits: details.bits_per_pixel,
            msb_first,
        });
    }
    Ok(Storage::Bytes(details.bytes_per_pixel))
}

#[inline]
fn bit_shift(bit: usize, bits: u8, msb_first: bool) -> u32 {
    let within = (bit % 8) as u32;
    if msb_first {
        8 - u32::from(bits) - within
    } else {
        within
    }
}

impl Storage {
    fn row_bytes(self, width: usize) -> Option<usize> {
        match self {
            Storage::Bits { bits, .. } => width
                .checked_mul(usize::from(bits))
                .map(|b| b.div_ceil(8)),
            Storage::Bytes(n) => width.checked_mul(usize::from(n)),
        }
    }

    fn read(self, row: &[u8], x: usize) -> Option<u32> {
        match self {
            Storage::Bits { bits, msb_first } => {
                let bit = x.checked_mul(usize::from(bits))?;
                let byte = *row.get(bit / 8)?;
                let shift = bit_shift(bit, bits, msb_first);
                Some(u32::from(byte >> shift) & low_mask(u32::from(bits)))
            }
            Storage::Bytes(n) => {
                let n = usize::from(n);
                let start = x.checked_mul(n)?;
                let bytes = row.get(start..start.checked_add(n)?)?;
                let mut buf = [0u8; 4];
                Some(if cfg!(target_endian = "little") {
                    buf[..n].copy_from_slice(bytes);
                    u32::from_le_bytes(buf)
                } else {
                    buf[4 - n..].copy_from_slice(bytes);
                    u32::from_be_bytes(buf)
                })
            }
        }
    }

    fn write(self, row: &mut [u8], x: usize, value: u32) -> Option<()> {
        match self {
            Storage::Bits { bits, msb_first } => {
                let bit = x.checked_mul(usize::from(bits))?;
                let byte = row.get_mut(bit / 8)?;
                let shift = bit_shift(bit, bits, msb_first);
                let mask = (low_mask(u32::from(bits)) << shift) as u8;
                *byte = (*byte & !mask) | ((value << shift) as u8 & mask);
            }
            Storage::Bytes(n) => {
                let n = usize::from(n);
                let start = x.checked_mul(n)?;
                let out = row.get_mut(start..start.checked_add(n)?)?;
                if cfg!(target_endian = "little") {
                    out.copy_from_slice(&value.to_le_bytes()[..n]);
                } else {
                    out.copy_from_slice(&value.to_be_bytes()[4 - n..]);
                }
            }
        }
        Some(())
    }

    /// Bytes a row must hold for pixel `x` to be in bounds.
    fn needed_for(self, x: usize) -> usize {
        self.row_bytes(x.saturating_add(1)).unwrap_or(usize::MAX)
    }
}

/// Read pixel `x` of a row as a pixel value.
pub fn read_pixel(row: &[u8], x: usize, format: PixelFormat) -> Result<u32, PixelError> {
    let storage = storage(format)?;
    storage.read(row, x).ok_or(PixelError::BufferTooSmall {
        needed: storage.needed_for(x),
        actual: row.len(),
    })
}

/// Store a pixel value at pixel `x` of a row.
///
/// Bits of `value` outside the pixel width are dropped. Neighboring
/// pixels sharing the byte are left untouched.
pub fn write_pixel(
    row: &mut [u8],
    x: usize,
    format: PixelFormat,
    value: u32,
) -> Result<(), PixelError> {
    let storage = storage(format)?;
    let actual = row.len();
    storage
        .write(row, x, value)
        .ok_or(PixelError::BufferTooSmall {
            needed: storage.needed_for(x),
            actual,
        })
}

/// Tightly packed row length of `width` pixels in `format`.
pub fn row_bytes(format: PixelFormat, width: u32) -> Result<usize, PixelError> {
    storage(format)?
        .row_bytes(width as usize)
        .ok_or(PixelError::DimensionsTooLarge { width, height: 1 })
}

#[derive(Clone, Copy, Debug)]
struct Rows {
    storage: Storage,
    pitch: usize,
    row_bytes: usize,
    height: usize,
}

impl Rows {
    fn new(
        storage: Storage,
        width: u32,
        height: u32,
        pitch: usize,
        len: usize,
    ) -> Result<Self, PixelError> {
        let too_large = PixelError::DimensionsTooLarge { width, height };
        let row_bytes = storage.row_bytes(width as usize).ok_or(too_large)?;
        if pitch < row_bytes {
            return Err(PixelError::BufferTooSmall {
                needed: row_bytes,
                actual: pitch,
            });
        }
        let needed = match (height as usize).checked_sub(1) {
            None => 0,
            Some(full_rows) => pitch
                .checked_mul(full_rows)
                .and_then(|n| n.checked_add(row_bytes))
                .ok_or(PixelError::DimensionsTooLarge { width, height })?,
        };
        if len < needed {
            return Err(PixelError::BufferTooSmall {
                needed,
                actual: len,
            });
        }
        Ok(Self {
            storage,
            pitch,
            row_bytes,
            height: height as usize,
        })
    }

    fn row<'b>(&self, data: &'b [u8], y: usize) -> &'b [u8] {
        &data[y * self.pitch..][..self.row_bytes]
    }

    fn row_mut<'b>(&self, data: &'b mut [u8], y: usize) -> &'b mut [u8] {
        &mut data[y * self.pitch..][..self.row_bytes]
    }
}

/// Conversion of a pitched pixel buffer from one format to another.
///
/// ```
/// use zenpixfmt::{ConvertRequest, PixelFormat, Unstoppable};
///
/// let src = [0xFFu8, 0xFF]; // one white RGB565 pixel
/// let out = ConvertRequest::new(PixelFormat::RGB565, PixelFormat::XRGB8888)
///     .convert(&src, 1, 1, 2, &Unstoppable)?;
/// assert_eq!(&out[..], &0x00FF_FFFFu32.to_ne_bytes());
/// # Ok::<(), zenpixfmt::PixelError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ConvertRequest<'a> {
    src_format: PixelFormat,
    dst_format: PixelFormat,
    src_palette: Option<&'a Palette>,
    dst_palette: Option<&'a Palette>,
    limits: Option<&'a Limits>,
}

impl<'a> ConvertRequest<'a> {
    pub fn new(src_format: PixelFormat, dst_format: PixelFormat) -> Self {
        Self {
            src_format,
            dst_format,
            src_palette: None,
            dst_palette: None,
            limits: None,
        }
    }

    /// Palette for an indexed source format.
    pub fn with_src_palette(mut self, palette: &'a Palette) -> Self {
        self.src_palette = Some(palette);
        self
    }

    /// Palette for an indexed destination format.
    pub fn with_dst_palette(mut self, palette: &'a Palette) -> Self {
        self.dst_palette = Some(palette);
        self
    }

    /// Limits applied by [`convert`](Self::convert) before allocating.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn src_format(&self) -> PixelFormat {
        self.src_format
    }

    pub fn dst_format(&self) -> PixelFormat {
        self.dst_format
    }

    // Indices keep their meaning unless a different palette is requested.
    fn is_identity(&self) -> bool {
        self.src_format == self.dst_format
            && (!self.src_format.is_indexed()
                || self.dst_palette.is_none()
                || self.src_palette == self.dst_palette)
    }

    fn check_palettes(&self) -> Result<(), PixelError> {
        if self.is_identity() {
            return Ok(());
        }
        if self.src_format.is_indexed() && self.src_palette.is_none() {
            return Err(PixelError::MissingPalette(self.src_format));
        }
        if self.dst_format.is_indexed() && self.dst_palette.is_none() {
            return Err(PixelError::MissingPalette(self.dst_format));
        }
        Ok(())
    }

    /// Convert into a tightly packed buffer.
    ///
    /// Borrows `src` when no conversion is needed and its rows are already
    /// tightly packed; otherwise allocates, after checking the limits.
    pub fn convert<'b>(
        &self,
        src: &'b [u8],
        width: u32,
        height: u32,
        src_pitch: usize,
        stop: &dyn Stop,
    ) -> Result<Cow<'b, [u8]>, PixelError> {
        let src_rows = Rows::new(storage(self.src_format)?, width, height, src_pitch, src.len())?;
        let dst_storage = storage(self.dst_format)?;
        self.check_palettes()?;
        if let Some(limits) = self.limits {
            limits.check(width, height)?;
        }
        let too_large = PixelError::DimensionsTooLarge { width, height };
        let dst_row = dst_storage.row_bytes(width as usize).ok_or(too_large)?;
        let total = dst_row
            .checked_mul(height as usize)
            .ok_or(PixelError::DimensionsTooLarge { width, height })?;

        if self.is_identity() && src_pitch == dst_row {
            stop.check()?;
            tracing::trace!(format = %self.src_format, width, height, "borrowing source rows");
            return Ok(Cow::Borrowed(&src[..total]));
        }

        if let Some(limits) = self.limits {
            limits.check_memory(total)?;
        }
        let mut out = vec![0u8; total];
        let dst_rows = Rows::new(dst_storage, width, height, dst_row, total)?;
        self.run(src, src_rows, &mut out, dst_rows, width as usize, stop)?;
        Ok(Cow::Owned(out))
    }

    /// Convert into a caller-provided pitched buffer.
    ///
    /// Padding bytes past each destination row are left untouched.
    #[allow(clippy::too_many_arguments)]
    pub fn convert_into(
        &self,
        src: &[u8],
        width: u32,
        height: u32,
        src_pitch: usize,
        dst: &mut [u8],
        dst_pitch: usize,
        stop: &dyn Stop,
    ) -> Result<(), PixelError> {
        let src_rows = Rows::new(storage(self.src_format)?, width, height, src_pitch, src.len())?;
        let dst_rows = Rows::new(storage(self.dst_format)?, width, height, dst_pitch, dst.len())?;
        self.check_palettes()?;
        self.run(src, src_rows, dst, dst_rows, width as usize, stop)
    }

    fn run(
        &self,
        src: &[u8],
        src_rows: Rows,
        dst: &mut [u8],
        dst_rows: Rows,
        width: usize,
        stop: &dyn Stop,
    ) -> Result<(), PixelError> {
        tracing::debug!(
            src = %self.src_format,
            dst = %self.dst_format,
            width,
            height = src_rows.height,
            "converting pixels"
        );
        let identity = self.is_identity();
        let src_details = self.src_format.details();
        let dst_details = self.dst_format.details();
        // Runs of equal source pixels are common; remember the last one.
        let mut last: Option<(u32, u32)> = None;

        for y in 0..src_rows.height {
            stop.check()?;
            let src_row = src_rows.row(src, y);
            let dst_row = dst_rows.row_mut(dst, y);
            if identity {
                dst_row.copy_from_slice(src_row);
                continue;
            }
            for x in 0..width {
                let Some(value) = src_rows.storage.read(src_row, x) else {
                    return Err(PixelError::BufferTooSmall {
                        needed: src_rows.storage.needed_for(x),
                        actual: src_row.len(),
                    });
                };
                let mapped = match last {
                    Some((from, to)) if from == value => to,
                    _ => {
                        let c = get_rgba(value, &src_details, self.src_palette)?;
                        let to = map_rgba(&dst_details, self.dst_palette, c.r, c.g, c.b, c.a)?;
                        last = Some((value, to));
                        to
                    }
                };
                let actual = dst_row.len();
                if dst_rows.storage.write(dst_row, x, mapped).is_none() {
                    return Err(PixelError::BufferTooSmall {
                        needed: dst_rows.storage.needed_for(x),
                        actual,
                    });
                }
            }
        }
        Ok(())
    }
}
