//! The `map` subcommand: show which glyph each character code reaches.

use std::fmt::Write;

use anyhow::Result;
use font_builder::{CodepointMap, CollisionPolicy, GlyphOrder};

/// Render the resolved code table for a sheet of `cells` cells.
pub fn render_map(cells: usize) -> Result<String> {
    let order = GlyphOrder::for_cells(cells)?;
    let resolved = CodepointMap::for_glyph_order(&order).resolve(CollisionPolicy::LastWins)?;

    let mut out = String::new();
    for (code, glyph) in resolved.iter() {
        writeln!(out, "{code} -> {glyph}")?;
    }
    writeln!(out, "{} collisions", resolved.collisions().len())?;
    for collision in resolved.collisions() {
        writeln!(
            out,
            "  {}: kept {}, dropped {}",
            collision.code, collision.kept, collision.dropped
        )?;
    }
    Ok(out)
}

pub fn print_map(cells: usize) -> Result<()> {
    print!("{}", render_map(cells)?);
    Ok(())
}
