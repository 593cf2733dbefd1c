//! RGB samples and the matte color.

use std::{
    fmt::{self, Display, Formatter},
    ops::Range,
    str::FromStr,
};

use crate::Error;

/// The salmon matte color (`#9F5B53`) that marks ink-absent pixels.
pub const BACKGROUND: Rgb = Rgb::new(0x9F, 0x5B, 0x53);

/// An RGB triple. Alpha never takes part in ink detection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<image::Rgba<u8>> for Rgb {
    fn from(image::Rgba([r, g, b, _]): image::Rgba<u8>) -> Self {
        Self::new(r, g, b)
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parse `RRGGBB`, optionally prefixed with `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let channel = |range: Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_display() {
        assert_eq!(BACKGROUND.to_string(), "#9F5B53");
    }

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!("9F5B53".parse::<Rgb>().unwrap(), BACKGROUND);
        assert_eq!("#9f5b53".parse::<Rgb>().unwrap(), BACKGROUND);
        assert_eq!("000000".parse::<Rgb>().unwrap(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_parse_invalid() {
        assert!("9F5B5".parse::<Rgb>().is_err());
        assert!("ZZ5B53".parse::<Rgb>().is_err());
        assert!("#9F5B5300".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_alpha_is_dropped() {
        let rgb = Rgb::from(image::Rgba([0x9F, 0x5B, 0x53, 0]));
        assert_eq!(rgb, BACKGROUND);
    }
}
