//! Table builders.
//!
//! Each builder is a pure function of the glyph set and options; the
//! assembler combines their results into one immutable table set.

pub mod cmap;
pub mod glyf;
pub mod head;
pub mod hhea;
pub mod hmtx;
pub mod maxp;
pub mod name;
pub mod os2;
pub mod post;
