//! cmap table construction

use read_fonts::types::GlyphId;
use write_fonts::tables::cmap::Cmap;

use crate::{Error, Result, glyph_order::GlyphOrder, mapping::ResolvedMap};

/// Resolve every code to a glyph ID and build the character map.
///
/// Fails on a code naming a glyph outside `order`; such a mapping means the
/// glyph set and the code assignment drifted apart.
pub fn build_cmap(codepoints: &ResolvedMap, order: &GlyphOrder) -> Result<Cmap> {
    let mappings = resolve_glyph_ids(codepoints, order)?;
    Ok(Cmap::from_mappings(mappings)?)
}

/// `(char, glyph ID)` pairs sorted by code.
pub fn resolve_glyph_ids(
    codepoints: &ResolvedMap,
    order: &GlyphOrder,
) -> Result<Vec<(char, GlyphId)>> {
    codepoints
        .iter()
        .map(|(code, glyph)| {
            let gid = order.glyph_id(glyph).ok_or_else(|| Error::DanglingCodepoint {
                code,
                glyph: glyph.to_string(),
            })?;
            let ch = code.to_char().ok_or(Error::InvalidCodepoint(code))?;
            Ok((ch, GlyphId::new(u32::from(gid))))
        })
        .collect()
}
