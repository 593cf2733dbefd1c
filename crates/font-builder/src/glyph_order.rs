//! Glyph names and the glyph order.
//!
//! The order always starts with `.notdef`, followed by one glyph per raster
//! cell and a trailing space glyph.

use std::{
    borrow::Borrow,
    fmt::{Display, Formatter, Result as FmtResult},
    ops::Deref,
};

use indexmap::IndexSet;

use crate::{
    Error, Result,
    config::{NOTDEF, glyph_name},
};

/// A glyph name, unique within a [`GlyphOrder`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlyphName(String);

impl GlyphName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn notdef() -> Self {
        Self::new(NOTDEF)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_notdef(&self) -> bool {
        self.0 == NOTDEF
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for GlyphName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for GlyphName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for GlyphName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Display for GlyphName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for GlyphName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for GlyphName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// The ordered, duplicate-free list of glyph names. Position is glyph ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphOrder {
    names: IndexSet<GlyphName>,
}

impl GlyphOrder {
    /// Build an order from explicit names.
    ///
    /// Fails if the first name is not `.notdef`, if any name repeats, or if
    /// the order would not fit 16-bit glyph IDs.
    pub fn new(names: impl IntoIterator<Item = GlyphName>) -> Result<Self> {
        let mut set = IndexSet::new();
        for name in names {
            if set.is_empty() && !name.is_notdef() {
                return Err(Error::MissingNotdef(name.into_string()));
            }
            if !set.insert(name.clone()) {
                return Err(Error::DuplicateGlyphName(name.into_string()));
            }
        }
        if set.is_empty() {
            return Err(Error::MissingNotdef(String::new()));
        }
        if set.len() > usize::from(u16::MAX) {
            return Err(Error::TooManyGlyphs(set.len()));
        }
        Ok(Self { names: set })
    }

    /// `.notdef`, `glyph00001..=glyph{cells}` and the trailing space glyph.
    pub fn for_cells(cells: usize) -> Result<Self> {
        Self::new(
            std::iter::once(GlyphName::notdef())
                .chain((1..=cells + 1).map(|n| GlyphName::new(glyph_name(n)))),
        )
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of glyphs as stored in `maxp`/`hhea`.
    pub fn num_glyphs(&self) -> u16 {
        // bounded in `new`
        self.names.len() as u16
    }

    pub fn glyph_id(&self, name: &str) -> Option<u16> {
        self.names.get_index_of(name).map(|idx| idx as u16)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn get(&self, glyph_id: usize) -> Option<&GlyphName> {
        self.names.get_index(glyph_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlyphName> {
        self.names.iter()
    }

    /// The trailing space glyph, always last.
    pub fn space(&self) -> Option<&GlyphName> {
        (self.names.len() > 1).then(|| self.names.last()).flatten()
    }
}
