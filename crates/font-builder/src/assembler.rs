//! Font table assembly
//!
//! Builds every table from the glyph records and the resolved code mapping,
//! after checking that all of them agree on the glyph order.

use log::info;
use write_fonts::tables::{
    cmap::Cmap, glyf::Glyf, head::Head, hhea::Hhea, hmtx::Hmtx, loca::Loca, maxp::Maxp,
    name::Name, os2::Os2, post::Post,
};

use crate::{
    Error, Result,
    glyph::GlyphRecord,
    glyph_order::GlyphOrder,
    mapping::ResolvedMap,
    options::FontOptions,
    tables::{
        cmap::build_cmap, glyf::build_glyf, head::build_head, hhea::build_hhea,
        hmtx::build_hmtx, maxp::build_maxp, name::build_name, os2::build_os2, post::build_post,
    },
};

/// The complete, mutually consistent table set of one font.
///
/// Only [`FontAssembler::assemble`] creates it, so holding one means the
/// consistency checks passed.
#[derive(Debug)]
pub struct FontTableSet {
    pub(crate) glyph_order: GlyphOrder,
    pub(crate) codepoints: ResolvedMap,
    pub(crate) head: Head,
    pub(crate) hhea: Hhea,
    pub(crate) maxp: Maxp,
    pub(crate) os2: Os2,
    pub(crate) hmtx: Hmtx,
    pub(crate) cmap: Cmap,
    pub(crate) name: Name,
    pub(crate) post: Post,
    pub(crate) glyf: Glyf,
    pub(crate) loca: Loca,
}

impl FontTableSet {
    pub fn glyph_order(&self) -> &GlyphOrder {
        &self.glyph_order
    }

    pub fn codepoints(&self) -> &ResolvedMap {
        &self.codepoints
    }

    pub fn head(&self) -> &Head {
        &self.head
    }

    pub fn maxp(&self) -> &Maxp {
        &self.maxp
    }

    pub fn hmtx(&self) -> &Hmtx {
        &self.hmtx
    }
}

/// Assembles glyph records and code mappings into a [`FontTableSet`]
#[derive(Debug, Default)]
pub struct FontAssembler {
    options: FontOptions,
}

impl FontAssembler {
    pub fn new(options: FontOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FontOptions {
        &self.options
    }

    /// Build all tables.
    ///
    /// `records` must line up one-to-one with `order`, and every code in
    /// `codepoints` must name a glyph in `order`.
    pub fn assemble(
        &self,
        order: GlyphOrder,
        records: &[GlyphRecord],
        codepoints: ResolvedMap,
    ) -> Result<FontTableSet> {
        check_consistency(&order, records)?;

        let num_glyphs = order.num_glyphs();
        let content_glyphs = order.len().saturating_sub(2);
        info!("Assembling {num_glyphs} glyphs and {} character codes", codepoints.len());

        let cmap = build_cmap(&codepoints, &order)?;
        let (glyf, loca, loca_format) = build_glyf(records)?;
        let hmtx = build_hmtx(records);

        Ok(FontTableSet {
            head: build_head(&self.options, loca_format),
            hhea: build_hhea(num_glyphs),
            maxp: build_maxp(records, num_glyphs),
            os2: build_os2(content_glyphs),
            name: build_name(&self.options),
            post: build_post(&self.options, &order),
            hmtx,
            cmap,
            glyf,
            loca,
            glyph_order: order,
            codepoints,
        })
    }
}

/// Records must cover the glyph order exactly, slot by slot.
pub fn check_consistency(order: &GlyphOrder, records: &[GlyphRecord]) -> Result<()> {
    if records.len() != order.len() {
        return Err(Error::MetricsMismatch { glyphs: order.len(), metrics: records.len() });
    }
    for (index, (expected, record)) in order.iter().zip(records).enumerate() {
        if *expected != record.name {
            return Err(Error::GlyphOrderMismatch {
                index,
                expected: expected.to_string(),
                actual: record.name.to_string(),
            });
        }
    }
    Ok(())
}
