//! Character code assignment.
//!
//! Each content glyph is reachable through several layered codes:
//!
//! 1. `base = 33 + i - 1` for content position `i`, and `original_pos = base + 32`.
//! 2. The primary code is `base` for lowercase letters and `base - 32` otherwise.
//! 3. When `original_pos` is in `32..=63` the primary code moves to
//!    `62 + (original_pos - 32)`, right after `=`.
//! 4. A lowercase primary code also maps its uppercase partner.
//! 5. When `original_pos > 61` the glyph is also reachable at `primary + 128`
//!    and at `U+E000 + (original_pos - 32)` in the Private Use Area.
//!
//! The trailing space glyph owns code 32 and nothing else. Code 0 is the
//! explicit missing-glyph entry and always resolves to `.notdef`.
//!
//! The codes are collected as an ordered list of assertions and resolved with
//! an explicit [`CollisionPolicy`]. The `.notdef` and space entries are pinned:
//! they win every collision regardless of policy, and the policy only decides
//! between two content glyphs.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};

use crate::{
    Error, Result,
    config::SPACE_CODE,
    glyph_order::{GlyphName, GlyphOrder},
    types::Codepoint,
};

/// First code of the scheme, one past space.
const FIRST_CODE: u32 = 33;

/// Offset between a source position and its base code.
const ORIGINAL_OFFSET: i64 = 32;

/// Source positions relocated to start right after `=`.
const REMAP_RANGE: std::ops::RangeInclusive<i64> = 32..=63;

/// First relocated code (one past `=`).
const REMAP_START: i64 = 62;

/// Source positions above this also get extended and private-use codes.
const EXTENDED_THRESHOLD: i64 = 61;

const EXTENDED_OFFSET: i64 = 128;
const PRIVATE_USE_START: i64 = 0xE000;
const CASE_OFFSET: i64 = 32;

/// All codes derived for one content glyph, in rule order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlyphCodes {
    /// Source position the codes were derived from (`base + 32`).
    pub original_pos: u32,
    pub primary: Codepoint,
    pub uppercase: Option<Codepoint>,
    pub extended: Option<Codepoint>,
    pub private_use: Option<Codepoint>,
}

impl GlyphCodes {
    pub fn iter(&self) -> impl Iterator<Item = Codepoint> {
        [Some(self.primary), self.uppercase, self.extended, self.private_use]
            .into_iter()
            .flatten()
    }
}

/// Codes for the content glyph at 0-based position `position`.
///
/// Positions exclude `.notdef` and the trailing space glyph.
pub fn codes_for_position(position: usize) -> GlyphCodes {
    codes_for_base(FIRST_CODE + position as u32 - 1)
}

/// Apply the layered rules to a base code.
pub fn codes_for_base(base: u32) -> GlyphCodes {
    let base = i64::from(base);
    let original_pos = base + ORIGINAL_OFFSET;

    let mut primary = if is_ascii_lowercase(base) { base } else { base - CASE_OFFSET };
    if REMAP_RANGE.contains(&original_pos) {
        primary = REMAP_START + (original_pos - ORIGINAL_OFFSET);
    }

    let uppercase = is_ascii_lowercase(primary).then(|| primary - CASE_OFFSET);

    let (extended, private_use) = if original_pos > EXTENDED_THRESHOLD {
        (
            Some(primary + EXTENDED_OFFSET),
            Some(PRIVATE_USE_START + (original_pos - ORIGINAL_OFFSET)),
        )
    } else {
        (None, None)
    };

    // base >= 0, so primary is either >= 0 or relocated into 62..=93
    let code = |value: i64| Codepoint::new(value as u32);
    GlyphCodes {
        original_pos: original_pos as u32,
        primary: code(primary),
        uppercase: uppercase.map(code),
        extended: extended.map(code),
        private_use: private_use.map(code),
    }
}

fn is_ascii_lowercase(value: i64) -> bool {
    (i64::from(b'a')..=i64::from(b'z')).contains(&value)
}

/// What to do when two glyphs claim the same code.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// The later assertion wins; each collision is logged.
    #[default]
    LastWins,
    /// A collision between two content glyphs is fatal.
    Reject,
}

/// One `(code, glyph)` claim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assertion {
    pub code: Codepoint,
    pub glyph: GlyphName,
    /// Reserved entry that overrides content claims on the same code.
    pub pinned: bool,
}

/// A code claimed by more than one glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collision {
    pub code: Codepoint,
    /// The glyph the code resolves to.
    pub kept: GlyphName,
    /// The glyph that lost the code.
    pub dropped: GlyphName,
    /// Settled by a pinned entry rather than by the policy.
    pub pinned: bool,
}

/// Ordered list of code assertions, many codes to one glyph.
#[derive(Clone, Debug, Default)]
pub struct CodepointMap {
    assertions: Vec<Assertion>,
}

impl CodepointMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assertions for a glyph order built by [`GlyphOrder::for_cells`]:
    /// `.notdef` at 0, the layered codes of every content glyph in order,
    /// then the space glyph at 32.
    pub fn for_glyph_order(order: &GlyphOrder) -> Self {
        let mut map = Self::new();
        map.pin(Codepoint::NULL, GlyphName::notdef());

        let content = order.len().saturating_sub(2);
        for (position, glyph) in order.iter().skip(1).take(content).enumerate() {
            let codes = codes_for_position(position);
            debug!(
                "{glyph}: primary {} (source position {})",
                codes.primary, codes.original_pos
            );
            for code in codes.iter() {
                map.push(code, glyph.clone());
            }
        }

        if let Some(space) = order.space() {
            map.pin(Codepoint::new(SPACE_CODE), space.clone());
        }
        map
    }

    /// Add a content claim, subject to the collision policy.
    pub fn push(&mut self, code: Codepoint, glyph: GlyphName) {
        self.assertions.push(Assertion { code, glyph, pinned: false });
    }

    /// Add a reserved entry that wins against any content claim.
    pub fn pin(&mut self, code: Codepoint, glyph: GlyphName) {
        self.assertions.push(Assertion { code, glyph, pinned: true });
    }

    pub fn assertions(&self) -> &[Assertion] {
        &self.assertions
    }

    /// Resolve assertions in order into a one-code-one-glyph mapping.
    ///
    /// Code 0 always resolves to `.notdef`. A pinned entry beats any content
    /// claim on its code, whichever comes first; such collisions are recorded
    /// but never rejected. Between two content claims the policy decides.
    pub fn resolve(&self, policy: CollisionPolicy) -> Result<ResolvedMap> {
        let mut entries: BTreeMap<Codepoint, GlyphName> = BTreeMap::new();
        let mut pinned: BTreeSet<Codepoint> = BTreeSet::new();
        let mut collisions = Vec::new();
        entries.insert(Codepoint::NULL, GlyphName::notdef());
        pinned.insert(Codepoint::NULL);

        for assertion in &self.assertions {
            let code = assertion.code;
            let glyph = &assertion.glyph;
            let held = pinned.contains(&code);
            let previous = match entries.get(&code) {
                Some(existing) if existing == glyph => {
                    if assertion.pinned {
                        pinned.insert(code);
                    }
                    continue;
                }
                Some(existing) => existing.clone(),
                None => {
                    entries.insert(code, glyph.clone());
                    if assertion.pinned {
                        pinned.insert(code);
                    }
                    continue;
                }
            };

            let collision = if held {
                Collision { code, kept: previous, dropped: glyph.clone(), pinned: true }
            } else if assertion.pinned {
                entries.insert(code, glyph.clone());
                pinned.insert(code);
                Collision { code, kept: glyph.clone(), dropped: previous, pinned: true }
            } else if policy == CollisionPolicy::Reject {
                return Err(Error::MappingCollision {
                    code,
                    previous: previous.into_string(),
                    next: glyph.to_string(),
                });
            } else {
                entries.insert(code, glyph.clone());
                Collision { code, kept: glyph.clone(), dropped: previous, pinned: false }
            };
            warn!(
                "{} claimed by both '{}' and '{}'; keeping '{}'",
                collision.code, collision.dropped, collision.kept, collision.kept
            );
            collisions.push(collision);
        }

        Ok(ResolvedMap { entries, collisions })
    }
}

/// Final code to glyph mapping, sorted by code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedMap {
    entries: BTreeMap<Codepoint, GlyphName>,
    collisions: Vec<Collision>,
}

impl ResolvedMap {
    pub fn get(&self, code: Codepoint) -> Option<&GlyphName> {
        self.entries.get(&code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Codepoint, &GlyphName)> {
        self.entries.iter().map(|(code, name)| (*code, name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Every code resolving to `glyph`, ascending.
    pub fn codes_for(&self, glyph: &str) -> Vec<Codepoint> {
        self.iter()
            .filter(|(_, name)| name.as_str() == glyph)
            .map(|(code, _)| code)
            .collect()
    }
}
