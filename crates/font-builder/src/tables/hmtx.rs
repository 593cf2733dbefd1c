//! hmtx table construction

use write_fonts::tables::hmtx::{Hmtx, LongMetric};

use crate::glyph::GlyphRecord;

/// One long metric per record, no trailing bearing-only entries.
pub fn build_hmtx(records: &[GlyphRecord]) -> Hmtx {
    let h_metrics = records
        .iter()
        .map(|record| LongMetric {
            advance: record.advance_width,
            side_bearing: record.left_side_bearing,
        })
        .collect();
    Hmtx::new(h_metrics, Vec::new())
}
