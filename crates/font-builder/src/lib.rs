//! # Sprite font builder
//!
//! Turn 8x8 raster glyph cells into a TrueType font.
//!
//! - [`outline`] converts each cell into one square contour per ink pixel.
//! - [`mapping`] assigns every glyph its layered set of character codes.
//! - [`FontAssembler`] builds the mutually consistent table set.
//! - [`FontTableSet::write`] serializes it to disk.
//!
//! ## Example
//!
//! ```no_run
//! use font_builder::{FontOptions, build_font};
//! use font_raster::{GridSpec, extract_cells, load_image};
//!
//! let sheet = load_image("font.pcx").unwrap();
//! let cells = extract_cells(&sheet, GridSpec::default()).unwrap();
//! let font = build_font(&cells, &FontOptions::default()).unwrap();
//! font.write("font.ttf").unwrap();
//! ```

mod assembler;
pub mod config;
mod error;
mod glyph;
mod glyph_order;
pub mod mapping;
mod options;
pub mod outline;
mod pipeline;
pub mod tables;
mod types;
mod writer;

pub use assembler::{FontAssembler, FontTableSet, check_consistency};
pub use error::{Error, Result};
pub use glyph::GlyphRecord;
pub use glyph_order::{GlyphName, GlyphOrder};
pub use mapping::{CodepointMap, CollisionPolicy, GlyphCodes, ResolvedMap, codes_for_position};
pub use options::{FontOptions, Timestamp};
pub use outline::{GlyphOutline, vectorize};
pub use pipeline::{assemble_and_write, build_font, convert_cells, glyph_records, resolve_codepoints};
pub use types::Codepoint;
