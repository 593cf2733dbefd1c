//! Error types for glyph synthesis and font assembly.

use std::{io, path::PathBuf, result};

use write_fonts::{BuilderError, tables::cmap::CmapConflict};

use crate::types::Codepoint;

/// Result type for font building operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while building or writing a font.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two glyphs claimed the same character code under the reject policy.
    #[error("{code} is claimed by both '{previous}' and '{next}'")]
    MappingCollision {
        code: Codepoint,
        previous: String,
        next: String,
    },

    /// The metrics table does not cover the glyph order one-to-one.
    #[error("glyph order has {glyphs} entries but {metrics} metrics were supplied")]
    MetricsMismatch { glyphs: usize, metrics: usize },

    /// A glyph record does not line up with its slot in the glyph order.
    #[error("glyph order slot {index} is '{expected}' but the record is named '{actual}'")]
    GlyphOrderMismatch {
        index: usize,
        expected: String,
        actual: String,
    },

    /// A codepoint points at a glyph that is not in the glyph order.
    #[error("{code} maps to '{glyph}', which is not in the glyph order")]
    DanglingCodepoint { code: Codepoint, glyph: String },

    /// A code that is not a Unicode scalar value.
    #[error("{0} is not a valid character code")]
    InvalidCodepoint(Codepoint),

    /// A glyph name appears more than once in the glyph order.
    #[error("glyph '{0}' appears more than once in the glyph order")]
    DuplicateGlyphName(String),

    /// The glyph order does not start with the sentinel missing glyph.
    #[error("glyph order must start with '.notdef', found '{0}'")]
    MissingNotdef(String),

    /// More glyphs than a TrueType font can index.
    #[error("{0} glyphs exceed the 65535 glyph limit")]
    TooManyGlyphs(usize),

    /// Serializing a table failed.
    #[error("failed to compile font tables: {0}")]
    Compile(#[from] write_fonts::error::Error),

    /// Adding a table to the container failed.
    #[error("failed to build font: {0}")]
    Builder(#[from] BuilderError),

    /// The cmap builder rejected the mapping.
    #[error("failed to build cmap table: {0}")]
    Cmap(#[from] CmapConflict),

    /// Writing the font file failed.
    #[error("failed to write font '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },
}

impl Error {
    /// Pipeline stage that produced this error.
    pub fn stage(&self) -> &'static str {
        match self {
            Error::MappingCollision { .. } => "mapping",
            Error::MetricsMismatch { .. }
            | Error::GlyphOrderMismatch { .. }
            | Error::DanglingCodepoint { .. }
            | Error::InvalidCodepoint(_)
            | Error::DuplicateGlyphName(_)
            | Error::MissingNotdef(_)
            | Error::TooManyGlyphs(_) => "assembly",
            Error::Compile(_) | Error::Builder(_) | Error::Cmap(_) => "serialization",
            Error::Write { .. } => "write",
        }
    }
}
