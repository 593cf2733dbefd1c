//! OS/2 table construction

use font_types::Tag;
use write_fonts::tables::os2::{Os2, SelectionFlags};

use crate::config::{ADVANCE_WIDTH, CELL_EXTENT, PIXEL_SCALE, SPACE_CODE};

const WEIGHT_REGULAR: u16 = 400;
const WIDTH_NORMAL: u16 = 5;

/// Basic Latin bit of ulUnicodeRange1.
const UNICODE_RANGE_BASIC_LATIN: u32 = 1;

/// Latin 1 bit of ulCodePageRange1.
const CODE_PAGE_LATIN_1: u32 = 1;

/// Version 4 OS/2 metrics for `content_glyphs` cells following space.
pub fn build_os2(content_glyphs: usize) -> Os2 {
    let extent = CELL_EXTENT;
    let last_char = SPACE_CODE as usize + content_glyphs;

    Os2 {
        x_avg_char_width: ADVANCE_WIDTH as i16,
        us_weight_class: WEIGHT_REGULAR,
        us_width_class: WIDTH_NORMAL,
        fs_type: 0,
        y_subscript_x_size: extent,
        y_subscript_y_size: extent,
        y_subscript_x_offset: 0,
        y_subscript_y_offset: 0,
        y_superscript_x_size: extent,
        y_superscript_y_size: extent,
        y_superscript_x_offset: 0,
        y_superscript_y_offset: extent,
        y_strikeout_size: PIXEL_SCALE,
        y_strikeout_position: 4 * PIXEL_SCALE,
        s_family_class: 0,
        panose_10: [0; 10],
        ul_unicode_range_1: UNICODE_RANGE_BASIC_LATIN,
        ul_unicode_range_2: 0,
        ul_unicode_range_3: 0,
        ul_unicode_range_4: 0,
        ach_vend_id: Tag::new(b"NONE"),
        fs_selection: SelectionFlags::empty(),
        us_first_char_index: SPACE_CODE as u16,
        us_last_char_index: u16::try_from(last_char).unwrap_or(u16::MAX),
        s_typo_ascender: extent,
        s_typo_descender: 0,
        s_typo_line_gap: PIXEL_SCALE,
        us_win_ascent: extent as u16,
        us_win_descent: 0,
        ul_code_page_range_1: Some(CODE_PAGE_LATIN_1),
        ul_code_page_range_2: Some(0),
        sx_height: Some(extent),
        s_cap_height: Some(extent),
        us_default_char: Some(0),
        us_break_char: Some(SPACE_CODE as u16),
        us_max_context: Some(0),
        us_lower_optical_point_size: None,
        us_upper_optical_point_size: None,
    }
}
