//! # Raster cell extraction
//!
//! Decode a fixed-grid spritesheet and slice it into 8x8 [`RasterCell`]s,
//! one per candidate glyph, in row-major order.
//!
//! ```no_run
//! use font_raster::{GridSpec, extract_cells, load_image};
//!
//! let sheet = load_image("font.pcx").unwrap();
//! let cells = extract_cells(&sheet, GridSpec::default()).unwrap();
//! assert_eq!(cells.len(), 96);
//! ```

mod cell;
mod color;
mod error;
mod grid;
mod io;

pub use cell::{CELL_SIZE, RasterCell};
pub use color::{BACKGROUND, Rgb};
pub use error::{Error, Result};
pub use grid::{GridSpec, extract_cells};
pub use io::{dump_cells, load_image};
