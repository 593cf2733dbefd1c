//! post table construction

use font_types::{FWord, Fixed, Version16Dot16};
use write_fonts::tables::post::Post;

use crate::{glyph_order::GlyphOrder, options::FontOptions};

/// Monospaced `post` table; version 2.0 with names when requested, else 3.0.
pub fn build_post(options: &FontOptions, order: &GlyphOrder) -> Post {
    let mut post = if options.glyph_names {
        Post::new_v2(order.iter().map(|name| name.as_str()))
    } else {
        let mut post = Post::new(Fixed::ZERO, FWord::new(0), FWord::new(0), 0, 0, 0, 0, 0);
        post.version = Version16Dot16::VERSION_3_0;
        post
    };

    post.italic_angle = Fixed::ZERO;
    post.underline_position = FWord::new(-1);
    post.underline_thickness = FWord::new(1);
    post.is_fixed_pitch = 1;
    post
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v3_by_default() {
        let order = GlyphOrder::for_cells(2).unwrap();
        let post = build_post(&FontOptions::default(), &order);
        assert_eq!(post.version, Version16Dot16::VERSION_3_0);
        assert_eq!(post.is_fixed_pitch, 1);
        assert_eq!(post.underline_position.to_i16(), -1);
    }

    #[test]
    fn test_v2_with_glyph_names() {
        let order = GlyphOrder::for_cells(2).unwrap();
        let post = build_post(&FontOptions::new().glyph_names(true), &order);
        assert_eq!(post.version, Version16Dot16::VERSION_2_0);
        assert_eq!(post.is_fixed_pitch, 1);
    }
}
