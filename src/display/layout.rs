/*
 *  display/layout.rs
 *
 *  ringsdown - five rings, one number
 *  (c) 2025-26 ringsdown authors
 *
 *  Split-screen layout and adaptive font selection
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::primitives::Rectangle;

use crate::display::manager::FontSet;

/// Margin inside the logo region, pixels
const LOGO_MARGIN: u32 = 2;

/// Margin inside the text region, pixels
const TEXT_MARGIN: u32 = 4;

/// Extra spacing added to each text line, pixels
const LINE_SPACING: u32 = 2;

/// Split-screen layout: logo on the left half, text on the right.
#[derive(Debug, Clone)]
pub struct SplitLayout {
    pub width: u32,
    pub height: u32,

    /// Left half minus margins, where the logo goes
    pub logo_region: Rectangle,

    /// Right half minus margins, where the text lines go
    pub text_region: Rectangle,
}

impl SplitLayout {
    /// Compute the layout for a display of the given dimensions.
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        let left_half = width / 2;
        let right_half = width - left_half;

        let logo_w = left_half.saturating_sub(2 * LOGO_MARGIN);
        let logo_h = height.saturating_sub(2 * LOGO_MARGIN);
        let logo_region = Rectangle::new(
            Point::new(LOGO_MARGIN as i32, LOGO_MARGIN as i32),
            Size::new(logo_w, logo_h),
        );

        let text_w = right_half.saturating_sub(TEXT_MARGIN);
        let text_h = height.saturating_sub(TEXT_MARGIN);
        let text_region = Rectangle::new(
            Point::new(left_half as i32, (TEXT_MARGIN / 2) as i32),
            Size::new(text_w, text_h),
        );

        Self {
            width,
            height,
            logo_region,
            text_region,
        }
    }
}

/// Result of fitting a block of text lines into a region.
#[derive(Debug, Clone, Copy)]
pub struct TextLayout {
    /// Chosen font
    pub font: &'static MonoFont<'static>,

    /// Height per line, pixels (shrunk if the block would overflow)
    pub line_height: u32,

    /// Total height of the block
    pub total_height: u32,

    /// Y of the first line, centering the block within the region
    pub start_y: i32,
}

/// Select the largest font whose widest line fits the region, then center
/// the line block vertically.
///
/// Falls back to the smallest font when nothing fits; if even then the
/// stacked lines exceed the region height, line height is shrunk
/// proportionally so all lines stay on screen.
pub fn fit_text(lines: &[String], region: &Rectangle, fonts: &FontSet) -> TextLayout {
    let avail_width = region.size.width;
    let avail_height = region.size.height;

    let max_chars = lines
        .iter()
        .map(|line| line.chars().count() as u32)
        .max()
        .unwrap_or(0);

    let mut chosen: Option<&'static MonoFont<'static>> = None;
    for font in [fonts.regular, fonts.small, fonts.extra_small] {
        let widest = max_chars * (font.character_size.width + font.character_spacing);
        if widest <= avail_width {
            chosen = Some(font);
            break;
        }
    }
    let font = chosen.unwrap_or(fonts.extra_small);

    let mut line_height = font.character_size.height + LINE_SPACING;
    let mut total_height = line_height * lines.len() as u32;

    if total_height > avail_height && !lines.is_empty() {
        line_height = (avail_height / lines.len() as u32).max(1);
        total_height = line_height * lines.len() as u32;
    }

    let start_y = region.top_left.y + ((avail_height.saturating_sub(total_height)) / 2) as i32;

    TextLayout {
        font,
        line_height,
        total_height,
        start_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::manager::FontSet;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_layout_128x64() {
        let layout = SplitLayout::for_dimensions(128, 64);
        assert_eq!(layout.logo_region.top_left, Point::new(2, 2));
        assert_eq!(layout.logo_region.size, Size::new(60, 60));
        assert_eq!(layout.text_region.top_left.x, 64);
        assert_eq!(layout.text_region.size.width, 60);
    }

    #[test]
    fn test_split_layout_odd_width() {
        let layout = SplitLayout::for_dimensions(65, 32);
        // right half gets the spare column
        assert_eq!(layout.text_region.top_left.x, 32);
        assert_eq!(layout.text_region.size.width, 33 - TEXT_MARGIN);
    }

    #[test]
    fn test_fit_prefers_largest_font() {
        let fonts = FontSet::default();
        let region = Rectangle::new(Point::new(64, 2), Size::new(60, 60));
        let fit = fit_text(&lines(&["123", "DAYS"]), &region, &fonts);
        assert_eq!(
            fit.font.character_size,
            fonts.regular.character_size
        );
    }

    #[test]
    fn test_fit_steps_down_for_wide_lines() {
        let fonts = FontSet::default();
        let region = Rectangle::new(Point::new(32, 2), Size::new(28, 28));
        // 10 chars * 6px won't fit 28px; 10 * 4 won't either -> extra small fallback
        let fit = fit_text(&lines(&["DAYS UNTIL"]), &region, &fonts);
        assert_eq!(
            fit.font.character_size,
            fonts.extra_small.character_size
        );
    }

    #[test]
    fn test_fit_shrinks_overflowing_block() {
        let fonts = FontSet::default();
        let region = Rectangle::new(Point::new(0, 0), Size::new(60, 20));
        let many = lines(&["1", "2", "3", "4", "5", "6"]);
        let fit = fit_text(&many, &region, &fonts);
        assert!(fit.total_height <= 20);
        assert!(fit.line_height >= 1);
    }

    #[test]
    fn test_fit_centers_vertically() {
        let fonts = FontSet::default();
        let region = Rectangle::new(Point::new(64, 2), Size::new(60, 60));
        let fit = fit_text(&lines(&["1"]), &region, &fonts);
        let slack = 60 - fit.total_height;
        assert_eq!(fit.start_y, 2 + (slack / 2) as i32);
    }
}
