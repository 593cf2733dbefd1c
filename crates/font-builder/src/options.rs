//! Options for font building

use font_raster::{BACKGROUND, Rgb};

use crate::{
    config::{DEFAULT_FAMILY, DEFAULT_STYLE, DEFAULT_VERSION, FIXED_TIMESTAMP, MAC_EPOCH_OFFSET},
    mapping::CollisionPolicy,
};

/// Source of the `head.created`/`head.modified` stamps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Timestamp {
    /// Seconds since 1904-01-01. Keeps output byte-identical across runs.
    Fixed(i64),
    /// The wall clock at build time.
    Now,
}

impl Timestamp {
    /// Seconds since 1904-01-01.
    pub fn seconds(self) -> i64 {
        match self {
            Timestamp::Fixed(seconds) => seconds,
            Timestamp::Now => chrono::Utc::now().timestamp() + MAC_EPOCH_OFFSET,
        }
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::Fixed(FIXED_TIMESTAMP)
    }
}

/// Options for font building
#[derive(Debug, Clone)]
pub struct FontOptions {
    /// Family name (name ID 1)
    pub family: String,

    /// Subfamily name (name ID 2)
    pub style: String,

    /// Version string (name ID 5)
    pub version: String,

    /// Matte color treated as ink-absent
    pub background: Rgb,

    pub collision_policy: CollisionPolicy,

    pub timestamp: Timestamp,

    /// Store glyph names in a version 2 `post` table
    pub glyph_names: bool,
}

impl Default for FontOptions {
    fn default() -> Self {
        Self {
            family: DEFAULT_FAMILY.to_string(),
            style: DEFAULT_STYLE.to_string(),
            version: DEFAULT_VERSION.to_string(),
            background: BACKGROUND,
            collision_policy: CollisionPolicy::default(),
            timestamp: Timestamp::default(),
            glyph_names: false,
        }
    }
}

impl FontOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    pub fn collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    pub fn timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn glyph_names(mut self, glyph_names: bool) -> Self {
        self.glyph_names = glyph_names;
        self
    }

    /// `{family}-{style}` with spaces removed, used for name IDs 3 and 6.
    pub fn postscript_name(&self) -> String {
        format!("{}-{}", self.family, self.style).replace(' ', "")
    }

    /// `{family} {style}`, name ID 4.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.family, self.style)
    }
}
