//! Raster cell to TrueType outline conversion.
//!
//! Every ink pixel becomes its own closed 4-point square. Adjacent pixels are
//! never merged, so a glyph has exactly as many contours as ink pixels.

use font_raster::{RasterCell, Rgb};
use kurbo::Rect;
use read_fonts::tables::glyf::CurvePoint;
use write_fonts::tables::glyf::{Bbox, Contour, SimpleGlyph};

use crate::config::{CELL_EXTENT, GRID_SIZE, PIXEL_SCALE};

/// Vector shape of one glyph in design units.
#[derive(Clone, Debug, PartialEq)]
pub enum GlyphOutline {
    /// One square per ink pixel, in raster scan order.
    Squares(Vec<Rect>),
    /// A cell without ink. The container still needs an outline entry, so
    /// this compiles to a single zero-area point at the origin.
    Blank,
}

impl GlyphOutline {
    /// A filled em square, used for the missing glyph.
    pub fn em_box() -> Self {
        let extent = f64::from(CELL_EXTENT);
        Self::Squares(vec![Rect::new(0.0, 0.0, extent, extent)])
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    pub fn squares(&self) -> &[Rect] {
        match self {
            Self::Squares(squares) => squares,
            Self::Blank => &[],
        }
    }

    pub fn contour_count(&self) -> usize {
        match self {
            Self::Squares(squares) => squares.len(),
            Self::Blank => 1,
        }
    }

    pub fn point_count(&self) -> usize {
        match self {
            Self::Squares(squares) => squares.len() * 4,
            Self::Blank => 1,
        }
    }

    /// Union of all squares; zero for a blank outline.
    pub fn bounds(&self) -> Rect {
        self.squares()
            .iter()
            .copied()
            .reduce(|acc, square| acc.union(square))
            .unwrap_or(Rect::ZERO)
    }

    /// Compile into a TrueType simple glyph without instructions.
    pub fn to_simple_glyph(&self) -> SimpleGlyph {
        let contours = match self {
            Self::Squares(squares) => squares.iter().map(square_contour).collect(),
            Self::Blank => vec![Contour::from(vec![CurvePoint::new(0, 0, true)])],
        };
        let bounds = self.bounds();
        SimpleGlyph {
            bbox: Bbox {
                x_min: bounds.x0 as i16,
                y_min: bounds.y0 as i16,
                x_max: bounds.x1 as i16,
                y_max: bounds.y1 as i16,
            },
            contours,
            instructions: vec![],
        }
    }
}

/// The design-unit square covering raster pixel `(x, y)`.
///
/// Raster rows count down from the top while design space grows upwards,
/// hence the vertical flip.
pub fn pixel_square(x: usize, y: usize) -> Rect {
    let x0 = x as i16 * PIXEL_SCALE;
    let y0 = (GRID_SIZE - 1 - y as i16) * PIXEL_SCALE;
    Rect::new(
        f64::from(x0),
        f64::from(y0),
        f64::from(x0 + PIXEL_SCALE),
        f64::from(y0 + PIXEL_SCALE),
    )
}

/// Vectorize one cell. Pure and total over any cell.
pub fn vectorize(cell: &RasterCell, background: Rgb) -> GlyphOutline {
    let squares: Vec<Rect> = cell
        .ink_pixels(background)
        .map(|(x, y)| pixel_square(x, y))
        .collect();

    if squares.is_empty() {
        GlyphOutline::Blank
    } else {
        GlyphOutline::Squares(squares)
    }
}

// (x0,y0) -> (x1,y0) -> (x1,y1) -> (x0,y1)
fn square_contour(square: &Rect) -> Contour {
    let (x0, y0, x1, y1) = (square.x0 as i16, square.y0 as i16, square.x1 as i16, square.y1 as i16);
    Contour::from(vec![
        CurvePoint::new(x0, y0, true),
        CurvePoint::new(x1, y0, true),
        CurvePoint::new(x1, y1, true),
        CurvePoint::new(x0, y1, true),
    ])
}

#[cfg(test)]
mod tests {
    use font_raster::BACKGROUND;

    use super::*;

    const INK: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    #[test]
    fn test_blank_cell_is_degenerate_not_absent() {
        let outline = vectorize(&RasterCell::filled(0, BACKGROUND), BACKGROUND);
        assert!(outline.is_blank());

        let glyph = outline.to_simple_glyph();
        assert_eq!(glyph.contours.len(), 1);
        assert_eq!(glyph.contours[0].len(), 1);
        assert_eq!((glyph.bbox.x_min, glyph.bbox.y_min, glyph.bbox.x_max, glyph.bbox.y_max), (0, 0, 0, 0));
    }

    #[test]
    fn test_square_per_ink_pixel() {
        // a full row plus a full column: 15 ink pixels, all touching
        let cell = RasterCell::from_fn(0, |x, y| if x == 0 || y == 0 { INK } else { BACKGROUND });
        let outline = vectorize(&cell, BACKGROUND);
        assert_eq!(outline.squares().len(), cell.ink_count(BACKGROUND));
        assert_eq!(outline.squares().len(), 15);
        assert_eq!(outline.to_simple_glyph().contours.len(), 15);
    }

    #[test]
    fn test_full_cell() {
        let outline = vectorize(&RasterCell::filled(0, INK), BACKGROUND);
        assert_eq!(outline.squares().len(), 64);
        assert_eq!(outline.bounds(), Rect::new(0.0, 0.0, 1024.0, 1024.0));
    }

    #[test]
    fn test_vertical_flip() {
        assert_eq!(pixel_square(0, 0), Rect::new(0.0, 896.0, 128.0, 1024.0));
        assert_eq!(pixel_square(7, 7), Rect::new(896.0, 0.0, 1024.0, 128.0));
        assert_eq!(pixel_square(2, 5), Rect::new(256.0, 256.0, 384.0, 384.0));
    }

    #[test]
    fn test_contour_winding() {
        let cell = RasterCell::from_fn(0, |x, y| if (x, y) == (1, 6) { INK } else { BACKGROUND });
        let glyph = vectorize(&cell, BACKGROUND).to_simple_glyph();
        let points: Vec<(i16, i16)> = glyph.contours[0].iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(points, vec![(128, 128), (256, 128), (256, 256), (128, 256)]);
        assert_eq!((glyph.bbox.x_min, glyph.bbox.y_min, glyph.bbox.x_max, glyph.bbox.y_max), (128, 128, 256, 256));
    }

    #[test]
    fn test_any_non_background_is_ink() {
        let near = Rgb::new(0x9F, 0x5B, 0x52);
        let cell = RasterCell::filled(0, near);
        assert_eq!(vectorize(&cell, BACKGROUND).squares().len(), 64);
    }

    #[test]
    fn test_em_box() {
        let outline = GlyphOutline::em_box();
        assert_eq!(outline.point_count(), 4);
        assert_eq!(outline.contour_count(), 1);
    }
}
