//! Character code newtype.

use std::fmt::{Display, Formatter, Result};

/// An integer character code a text renderer uses to select a glyph
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codepoint(pub u32);

impl Codepoint {
    /// The only code the sentinel missing glyph owns.
    pub const NULL: Self = Self(0);

    pub const fn new(cp: u32) -> Self {
        Self(cp)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Convert to a Rust char if valid
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    pub const fn is_ascii_lowercase(self) -> bool {
        self.0 >= b'a' as u32 && self.0 <= b'z' as u32
    }
}

impl From<u32> for Codepoint {
    fn from(cp: u32) -> Self {
        Self(cp)
    }
}

impl From<Codepoint> for u32 {
    fn from(cp: Codepoint) -> Self {
        cp.0
    }
}

impl Display for Codepoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "U+{:04X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepoint() {
        let cp = Codepoint::new(0x0041);
        assert_eq!(cp.to_char(), Some('A'));
        assert_eq!(format!("{}", cp), "U+0041");
        assert_eq!(format!("{}", Codepoint::new(0xE020)), "U+E020");
    }

    #[test]
    fn test_lowercase_range() {
        assert!(Codepoint::new(u32::from(b'a')).is_ascii_lowercase());
        assert!(Codepoint::new(u32::from(b'z')).is_ascii_lowercase());
        assert!(!Codepoint::new(u32::from(b'`')).is_ascii_lowercase());
        assert!(!Codepoint::new(u32::from(b'{')).is_ascii_lowercase());
    }
}
