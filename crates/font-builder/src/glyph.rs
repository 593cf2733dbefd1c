//! Per-glyph records fed to the assembler.

use font_raster::{RasterCell, Rgb};

use crate::{
    config::{ADVANCE_WIDTH, LEFT_SIDE_BEARING},
    glyph_order::GlyphName,
    outline::{GlyphOutline, vectorize},
};

/// A named glyph with its outline and horizontal metrics.
///
/// All glyphs share the same advance and bearing; spacing is not proportional.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphRecord {
    pub name: GlyphName,
    pub outline: GlyphOutline,
    pub advance_width: u16,
    pub left_side_bearing: i16,
}

impl GlyphRecord {
    pub fn new(name: impl Into<GlyphName>, outline: GlyphOutline) -> Self {
        Self {
            name: name.into(),
            outline,
            advance_width: ADVANCE_WIDTH,
            left_side_bearing: LEFT_SIDE_BEARING,
        }
    }

    /// The sentinel missing glyph: a filled em box.
    pub fn notdef() -> Self {
        Self::new(GlyphName::notdef(), GlyphOutline::em_box())
    }

    /// A content glyph vectorized from a raster cell.
    pub fn from_cell(name: impl Into<GlyphName>, cell: &RasterCell, background: Rgb) -> Self {
        Self::new(name, vectorize(cell, background))
    }

    /// The trailing space glyph, always blank.
    pub fn space(name: impl Into<GlyphName>) -> Self {
        Self::new(name, GlyphOutline::Blank)
    }
}
