//! glyf/loca construction

use write_fonts::tables::{
    glyf::{Glyf, GlyfLocaBuilder, Glyph},
    loca::{Loca, LocaFormat},
};

use crate::{Result, glyph::GlyphRecord};

/// Compile every record's outline, in glyph order.
pub fn build_glyf(records: &[GlyphRecord]) -> Result<(Glyf, Loca, LocaFormat)> {
    let mut builder = GlyfLocaBuilder::new();
    for record in records {
        builder.add_glyph(&Glyph::Simple(record.outline.to_simple_glyph()))?;
    }
    Ok(builder.build())
}

/// `head.indexToLocFormat` value for a loca format.
pub fn index_to_loc_format(format: LocaFormat) -> i16 {
    match format {
        LocaFormat::Short => 0,
        LocaFormat::Long => 1,
    }
}
