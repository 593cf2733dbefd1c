//! name table construction

use read_fonts::types::NameId;
use write_fonts::tables::name::{Name, NameRecord};

use crate::options::FontOptions;

const PLATFORM_WINDOWS: u16 = 3;
const ENCODING_UNICODE_BMP: u16 = 1;
const LANGUAGE_EN_US: u16 = 0x409;

/// Static descriptive strings, IDs 1 through 6.
pub fn build_name(options: &FontOptions) -> Name {
    let postscript = options.postscript_name();
    let strings = [
        (1, options.family.clone()),
        (2, options.style.clone()),
        (3, postscript.clone()),
        (4, options.full_name()),
        (5, options.version.clone()),
        (6, postscript),
    ];

    let records = strings
        .into_iter()
        .map(|(name_id, string)| {
            NameRecord::new(
                PLATFORM_WINDOWS,
                ENCODING_UNICODE_BMP,
                LANGUAGE_EN_US,
                NameId::new(name_id),
                string.into(),
            )
        })
        .collect();

    Name::new(records)
}
