//! Color palettes for indexed formats.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::PixelError;

/// An 8-bit RGBA color.
pub type Color = rgb::RGBA8;

/// An ordered, fixed-length list of colors.
///
/// The length is set at creation. Writes replace entries in place and
/// bump [`version`](Palette::version), so holders of a derived cache can
/// tell when it went stale. Share a palette between surfaces by
/// reference (or `Arc`); the codec does no locking of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
    version: u32,
}

impl Palette {
    /// Palette of `len` entries, all opaque white.
    pub fn new(len: usize) -> Result<Self, PixelError> {
        if len == 0 {
            return Err(PixelError::EmptyPalette);
        }
        Ok(Self {
            colors: vec![Color::new(255, 255, 255, 255); len],
            version: 1,
        })
    }

    /// Palette holding a copy of `colors`.
    pub fn from_colors(colors: &[Color]) -> Result<Self, PixelError> {
        if colors.is_empty() {
            return Err(PixelError::EmptyPalette);
        }
        Ok(Self {
            colors: colors.to_vec(),
            version: 1,
        })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no entries. Never true for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Incremented on every successful write. Never 0.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Replace entries `first..first + colors.len()`.
    ///
    /// A range running past the end is rejected without touching any
    /// entry; the palette never grows.
    pub fn set_colors(&mut self, first: usize, colors: &[Color]) -> Result<(), PixelError> {
        let len = self.colors.len();
        let end = first.checked_add(colors.len()).filter(|&end| end <= len);
        let Some(end) = end else {
            tracing::debug!(first, count = colors.len(), len, "palette write out of range");
            return Err(PixelError::PaletteRange {
                first,
                count: colors.len(),
                len,
            });
        };
        self.colors[first..end].copy_from_slice(colors);
        self.version = self.version.wrapping_add(1).max(1);
        Ok(())
    }

    /// Index of the entry closest to (r, g, b) by squared distance.
    ///
    /// Alpha takes no part in the search. Ties go to the lowest index, and
    /// an exact match ends the scan.
    pub fn find_nearest(&self, r: u8, g: u8, b: u8) -> usize {
        nearest(&self.colors, r, g, b)
    }
}

pub(crate) fn nearest(colors: &[Color], r: u8, g: u8, b: u8) -> usize {
    let mut best = 0;
    let mut best_distance = u32::MAX;
    for (i, c) in colors.iter().enumerate() {
        let dr = i32::from(c.r) - i32::from(r);
        let dg = i32::from(c.g) - i32::from(g);
        let db = i32::from(c.b) - i32::from(b);
        let distance = (dr * dr + dg * dg + db * db) as u32;
        if distance < best_distance {
            best = i;
            best_distance = distance;
            if distance == 0 {
                break;
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bw() -> Palette {
        Palette::from_colors(&[Color::new(0, 0, 0, 255), Color::new(255, 255, 255, 255)]).unwrap()
    }

    #[test]
    fn new_is_opaque_white() {
        let p = Palette::new(4).unwrap();
        assert_eq!(p.len(), 4);
        assert!(!p.is_empty());
        assert!(p.colors().iter().all(|c| *c == Color::new(255, 255, 255, 255)));
    }

    #[test]
    fn empty_rejected() {
        assert!(matches!(Palette::new(0), Err(PixelError::EmptyPalette)));
        assert!(matches!(
            Palette::from_colors(&[]),
            Err(PixelError::EmptyPalette)
        ));
    }

    #[test]
    fn nearest_black_white() {
        let p = bw();
        assert_eq!(p.find_nearest(10, 10, 10), 0);
        assert_eq!(p.find_nearest(250, 250, 250), 1);
    }

    #[test]
    fn nearest_ties_go_to_first() {
        let p = Palette::from_colors(&[
            Color::new(0, 0, 0, 255),
            Color::new(100, 0, 0, 255),
            Color::new(100, 0, 0, 0),
        ])
        .unwrap();
        assert_eq!(p.find_nearest(50, 0, 0), 0);
        assert_eq!(p.find_nearest(100, 0, 0), 1);
    }

    #[test]
    fn set_colors_in_place() {
        let mut p = Palette::new(4).unwrap();
        let v0 = p.version();
        p.set_colors(1, &[Color::new(1, 2, 3, 4), Color::new(5, 6, 7, 8)])
            .unwrap();
        assert_eq!(p.len(), 4);
        assert_eq!(p.get(1), Some(Color::new(1, 2, 3, 4)));
        assert_eq!(p.get(2), Some(Color::new(5, 6, 7, 8)));
        assert_eq!(p.get(3), Some(Color::new(255, 255, 255, 255)));
        assert!(p.version() > v0);
    }

    #[test]
    fn set_colors_out_of_range() {
        let mut p = Palette::new(2).unwrap();
        let before = p.clone();
        let err = p
            .set_colors(1, &[Color::new(0, 0, 0, 0), Color::new(0, 0, 0, 0)])
            .unwrap_err();
        assert!(matches!(
            err,
            PixelError::PaletteRange {
                first: 1,
                count: 2,
                len: 2
            }
        ));
        assert_eq!(p, before);
        assert!(p.set_colors(usize::MAX, &[Color::new(0, 0, 0, 0)]).is_err());
    }
}
