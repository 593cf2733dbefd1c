//! Cells to font: vectorize, map, assemble.

use std::path::Path;

use font_raster::RasterCell;
use log::{debug, info};

use crate::{
    Result,
    assembler::{FontAssembler, FontTableSet},
    glyph::GlyphRecord,
    glyph_order::GlyphOrder,
    mapping::{CodepointMap, ResolvedMap},
    options::FontOptions,
};

/// Vectorize `cells` into glyph records in glyph order.
///
/// The result starts with `.notdef` and ends with the blank space glyph.
pub fn glyph_records(
    order: &GlyphOrder,
    cells: &[RasterCell],
    options: &FontOptions,
) -> Vec<GlyphRecord> {
    info!("Vectorizing {} cells", cells.len());

    let mut records = Vec::with_capacity(order.len());
    records.push(GlyphRecord::notdef());
    for (cell, name) in cells.iter().zip(order.iter().skip(1)) {
        let record = GlyphRecord::from_cell(name.clone(), cell, options.background);
        match record.outline.squares().len() {
            0 => debug!("{name}: empty"),
            n => debug!("{name}: {n} pixels"),
        }
        records.push(record);
    }
    if let Some(space) = order.space() {
        records.push(GlyphRecord::space(space.clone()));
    }
    records
}

/// Assign and resolve character codes for a cell glyph order.
pub fn resolve_codepoints(order: &GlyphOrder, options: &FontOptions) -> Result<ResolvedMap> {
    let resolved = CodepointMap::for_glyph_order(order).resolve(options.collision_policy)?;
    info!(
        "Mapped {} character codes ({} collisions)",
        resolved.len(),
        resolved.collisions().len()
    );
    Ok(resolved)
}

/// Build the full table set for a sheet of cells.
pub fn build_font(cells: &[RasterCell], options: &FontOptions) -> Result<FontTableSet> {
    let order = GlyphOrder::for_cells(cells.len())?;
    let records = glyph_records(&order, cells, options);
    let codepoints = resolve_codepoints(&order, options)?;
    FontAssembler::new(options.clone()).assemble(order, &records, codepoints)
}

/// Assemble and, only if assembly succeeds, write the font to `path`.
pub fn assemble_and_write(
    assembler: &FontAssembler,
    order: GlyphOrder,
    records: &[GlyphRecord],
    codepoints: ResolvedMap,
    path: impl AsRef<Path>,
) -> Result<FontTableSet> {
    let font = assembler.assemble(order, records, codepoints)?;
    font.write(path)?;
    Ok(font)
}

/// Build a font from `cells` and write it to `path`.
pub fn convert_cells(
    cells: &[RasterCell],
    options: &FontOptions,
    path: impl AsRef<Path>,
) -> Result<FontTableSet> {
    let font = build_font(cells, options)?;
    font.write(path)?;
    Ok(font)
}

#[cfg(test)]
mod tests {
    use font_raster::{BACKGROUND, Rgb};

    use super::*;

    #[test]
    fn test_records_follow_order() {
        let cells: Vec<_> = (0..3).map(|i| RasterCell::filled(i, BACKGROUND)).collect();
        let order = GlyphOrder::for_cells(cells.len()).unwrap();
        let records = glyph_records(&order, &cells, &FontOptions::default());
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec![".notdef", "glyph00001", "glyph00002", "glyph00003", "glyph00004"]);
    }

    #[test]
    fn test_custom_background() {
        let matte = Rgb::new(0, 0, 0);
        let cells = vec![RasterCell::filled(0, matte)];
        let order = GlyphOrder::for_cells(1).unwrap();
        let options = FontOptions::new().background(matte);
        let records = glyph_records(&order, &cells, &options);
        assert!(records[1].outline.is_blank());
    }

    #[test]
    fn test_build_font() {
        let cells: Vec<_> = (0..96).map(|i| RasterCell::filled(i, BACKGROUND)).collect();
        let font = build_font(&cells, &FontOptions::default()).unwrap();
        assert_eq!(font.glyph_order().len(), 98);
        assert_eq!(font.codepoints().collisions().len(), 2);
    }
}
