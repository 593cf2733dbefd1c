//! head table construction

use font_types::{Fixed, LongDateTime};
use write_fonts::tables::{
    head::{Flags, Head, MacStyle},
    loca::LocaFormat,
};

use crate::{
    config::{CELL_EXTENT, UNITS_PER_EM},
    options::FontOptions,
    tables::glyf::index_to_loc_format,
};

const LOWEST_REC_PPEM: u16 = 8;

/// Global header: fixed 1024 upem and the full-cell bounding box.
pub fn build_head(options: &FontOptions, loca_format: LocaFormat) -> Head {
    let stamp = LongDateTime::new(options.timestamp.seconds());
    Head::new(
        Fixed::from_f64(1.0),
        0, // recomputed on write
        Flags::empty(),
        UNITS_PER_EM,
        stamp,
        stamp,
        0,
        0,
        CELL_EXTENT,
        CELL_EXTENT,
        MacStyle::empty(),
        LOWEST_REC_PPEM,
        index_to_loc_format(loca_format),
    )
}
