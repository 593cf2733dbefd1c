//! maxp table construction

use write_fonts::tables::maxp::Maxp;

use crate::glyph::GlyphRecord;

/// Points in one pixel square.
const SQUARE_POINTS: u16 = 4;

/// Contours in one pixel square.
const SQUARE_CONTOURS: u16 = 1;

/// Version 1.0 profile for unhinted simple glyphs.
///
/// Point and contour maxima never drop below a single pixel square and grow
/// to the largest glyph in `records`. The one-square profile (4 points,
/// 1 contour) is only a floor: a fully inked cell needs 256 points in 64 contours.
pub fn build_maxp(records: &[GlyphRecord], num_glyphs: u16) -> Maxp {
    let clamp = |value: usize| u16::try_from(value).unwrap_or(u16::MAX);
    let max_points = records
        .iter()
        .map(|record| clamp(record.outline.point_count()))
        .fold(SQUARE_POINTS, u16::max);
    let max_contours = records
        .iter()
        .map(|record| clamp(record.outline.contour_count()))
        .fold(SQUARE_CONTOURS, u16::max);

    Maxp {
        num_glyphs,
        max_points: Some(max_points),
        max_contours: Some(max_contours),
        max_composite_points: Some(0),
        max_composite_contours: Some(0),
        max_zones: Some(1),
        max_twilight_points: Some(0),
        max_storage: Some(0),
        max_function_defs: Some(0),
        max_instruction_defs: Some(0),
        max_stack_elements: Some(0),
        max_size_of_instructions: Some(0),
        max_component_elements: Some(0),
        max_component_depth: Some(0),
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::*;
    use crate::outline::{GlyphOutline, pixel_square};

    #[test]
    fn test_floor_is_one_square() {
        let records = vec![GlyphRecord::notdef(), GlyphRecord::space("glyph00001")];
        let maxp = build_maxp(&records, 2);
        assert_eq!(maxp.num_glyphs, 2);
        assert_eq!(maxp.max_points, Some(4));
        assert_eq!(maxp.max_contours, Some(1));
    }

    #[test]
    fn test_grows_with_largest_glyph() {
        let squares: Vec<Rect> = (0..3).map(|x| pixel_square(x, 0)).collect();
        let records = vec![
            GlyphRecord::notdef(),
            GlyphRecord::new("glyph00001", GlyphOutline::Squares(squares)),
        ];
        let maxp = build_maxp(&records, 2);
        assert_eq!(maxp.max_points, Some(12));
        assert_eq!(maxp.max_contours, Some(3));
    }

    #[test]
    fn test_full_cell() {
        let squares: Vec<Rect> = (0..64).map(|i| pixel_square(i % 8, i / 8)).collect();
        let records = vec![GlyphRecord::new("glyph00001", GlyphOutline::Squares(squares))];
        let maxp = build_maxp(&records, 1);
        assert_eq!(maxp.max_points, Some(256));
        assert_eq!(maxp.max_contours, Some(64));
    }
}
