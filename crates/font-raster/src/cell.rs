//! Fixed-size raster cells.

use crate::Rgb;

/// Width and height of every cell, in pixels.
pub const CELL_SIZE: usize = 8;

/// One 8x8 glyph cell cut from the spritesheet.
///
/// `pixels[y][x]` is addressed top-left first, `y` growing downwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterCell {
    index: usize,
    pixels: [[Rgb; CELL_SIZE]; CELL_SIZE],
}

impl RasterCell {
    pub fn new(index: usize, pixels: [[Rgb; CELL_SIZE]; CELL_SIZE]) -> Self {
        Self { index, pixels }
    }

    /// Build a cell by sampling `f(x, y)` for every pixel.
    pub fn from_fn(index: usize, mut f: impl FnMut(usize, usize) -> Rgb) -> Self {
        let mut pixels = [[Rgb::default(); CELL_SIZE]; CELL_SIZE];
        for (y, row) in pixels.iter_mut().enumerate() {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = f(x, y);
            }
        }
        Self { index, pixels }
    }

    /// A cell filled entirely with `color`.
    pub fn filled(index: usize, color: Rgb) -> Self {
        Self { index, pixels: [[color; CELL_SIZE]; CELL_SIZE] }
    }

    /// Sequential row-major position of this cell in the sheet.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y][x]
    }

    pub fn rows(&self) -> &[[Rgb; CELL_SIZE]; CELL_SIZE] {
        &self.pixels
    }

    /// Ink is any pixel that is not exactly the background triple.
    pub fn is_ink(&self, x: usize, y: usize, background: Rgb) -> bool {
        self.pixels[y][x] != background
    }

    /// Iterate `(x, y)` of every ink pixel, row by row from the top.
    pub fn ink_pixels(&self, background: Rgb) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pixels.iter().enumerate().flat_map(move |(y, row)| {
            row.iter()
                .enumerate()
                .filter(move |&(_, pixel)| *pixel != background)
                .map(move |(x, _)| (x, y))
        })
    }

    pub fn ink_count(&self, background: Rgb) -> usize {
        self.ink_pixels(background).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BACKGROUND;

    #[test]
    fn test_blank_cell_has_no_ink() {
        let cell = RasterCell::filled(0, BACKGROUND);
        assert_eq!(cell.ink_count(BACKGROUND), 0);
    }

    #[test]
    fn test_near_background_is_ink() {
        let almost = Rgb::new(0x9F, 0x5B, 0x54);
        let cell = RasterCell::from_fn(3, |x, y| if (x, y) == (2, 5) { almost } else { BACKGROUND });
        assert_eq!(cell.index(), 3);
        assert!(cell.is_ink(2, 5, BACKGROUND));
        assert_eq!(cell.ink_pixels(BACKGROUND).collect::<Vec<_>>(), vec![(2, 5)]);
    }

    #[test]
    fn test_ink_pixels_row_major() {
        let ink = Rgb::new(255, 255, 255);
        let cell = RasterCell::from_fn(0, |x, y| if x == y { ink } else { BACKGROUND });
        let pixels: Vec<_> = cell.ink_pixels(BACKGROUND).collect();
        assert_eq!(pixels.len(), CELL_SIZE);
        assert_eq!(pixels[0], (0, 0));
        assert_eq!(pixels[7], (7, 7));
    }
}
