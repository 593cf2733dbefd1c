//! Design-space constants shared by every table.

/// Units per em of the output font.
pub const UNITS_PER_EM: u16 = 1024;

/// Cells are an 8x8 grid in design space as well as in the raster.
pub const GRID_SIZE: i16 = 8;

/// Design units covered by one raster pixel.
pub const PIXEL_SCALE: i16 = UNITS_PER_EM as i16 / GRID_SIZE;

/// Full cell extent in design units.
pub const CELL_EXTENT: i16 = GRID_SIZE * PIXEL_SCALE;

/// Every glyph advances by one full cell.
pub const ADVANCE_WIDTH: u16 = CELL_EXTENT as u16;

/// Every glyph starts at the origin.
pub const LEFT_SIDE_BEARING: i16 = 0;

/// Pinned `head.created`/`head.modified`, seconds since 1904-01-01.
pub const FIXED_TIMESTAMP: i64 = 3_543_565_422;

/// Seconds between 1904-01-01 and the Unix epoch.
pub const MAC_EPOCH_OFFSET: i64 = 2_082_844_800;

/// Name of the sentinel missing glyph.
pub const NOTDEF: &str = ".notdef";

/// Character code of the trailing space glyph.
pub const SPACE_CODE: u32 = 32;

pub const DEFAULT_FAMILY: &str = "PCXFont";
pub const DEFAULT_STYLE: &str = "Regular";
pub const DEFAULT_VERSION: &str = "Version 1.0";

/// Sequential glyph name for 1-based glyph order slot `n`.
pub fn glyph_name(n: usize) -> String {
    format!("glyph{n:05}")
}
