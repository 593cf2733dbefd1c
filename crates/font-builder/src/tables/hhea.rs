//! hhea table construction

use font_types::{FWord, UfWord};
use write_fonts::tables::hhea::Hhea;

use crate::config::{ADVANCE_WIDTH, CELL_EXTENT, PIXEL_SCALE};

/// Horizontal header for a monospaced cell font with one metric per glyph.
pub fn build_hhea(number_of_h_metrics: u16) -> Hhea {
    Hhea::new(
        FWord::new(CELL_EXTENT),
        FWord::new(0),
        FWord::new(PIXEL_SCALE), // one pixel of line gap
        UfWord::new(ADVANCE_WIDTH),
        FWord::new(0),
        FWord::new(0),
        FWord::new(CELL_EXTENT),
        1,
        0,
        0,
        number_of_h_metrics,
    )
}
