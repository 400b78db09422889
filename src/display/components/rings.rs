/*
 *  display/components/rings.rs
 *
 *  ringsdown - five rings, one number
 *  (c) 2025-26 ringsdown authors
 *
 *  Programmatic five-ring logo, drawn when no bundled logo exists
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

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::draw::draw_circle_from_center;

/// Official ring colors, top row left to right then bottom row.
pub const RING_COLORS: [Rgb888; 5] = [
    Rgb888::new(0, 129, 200),  // blue
    Rgb888::new(0, 0, 0),      // black
    Rgb888::new(255, 20, 24),  // red
    Rgb888::new(255, 195, 0),  // yellow
    Rgb888::new(0, 158, 96),   // green
];

/// Draw the five interlocking rings scaled to `region`.
///
/// Three rings on the top row, two offset below, stroke width scaled from
/// the ring radius. The black ring is drawn faithfully even though it
/// vanishes on a black background.
pub fn draw_rings<D>(target: &mut D, region: Rectangle) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888> + OriginDimensions,
{
    let width = region.size.width as i32;
    let height = region.size.height as i32;
    if width == 0 || height == 0 {
        return Ok(());
    }

    let radius = (width.min(height) / 6).max(1);
    let stroke = (radius / 8).max(1) as u32;
    let center_x = region.top_left.x + width / 2;
    let center_y = region.top_left.y + height / 2;

    // Top row: blue, black, red
    let top_y = center_y - radius;
    for (i, color) in RING_COLORS[..3].iter().enumerate() {
        let x = center_x - radius + (i as i32 * radius * 3) / 2;
        let style = PrimitiveStyle::with_stroke(*color, stroke);
        draw_circle_from_center(target, Point::new(x, top_y), radius * 2, style)?;
    }

    // Bottom row: yellow, green
    let bottom_y = center_y + radius;
    for (i, color) in RING_COLORS[3..].iter().enumerate() {
        let x = center_x + (i as i32 * radius * 3) / 2;
        let style = PrimitiveStyle::with_stroke(*color, stroke);
        draw_circle_from_center(target, Point::new(x, bottom_y), radius * 2, style)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::framebuffer::VarFrameBuf;
    use embedded_graphics::geometry::Size;

    fn count_color(fb: &VarFrameBuf<Rgb888>, color: Rgb888) -> usize {
        fb.as_slice().iter().filter(|&&p| p == color).count()
    }

    #[test]
    fn test_rings_draw_all_visible_colors() {
        let mut fb = VarFrameBuf::new(60, 60, Rgb888::new(0, 0, 0));
        let region = Rectangle::new(Point::new(0, 0), Size::new(60, 60));
        draw_rings(&mut fb, region).unwrap();

        // Black ring is invisible on the cleared buffer; the other four
        // must each contribute stroke pixels.
        for color in [RING_COLORS[0], RING_COLORS[2], RING_COLORS[3], RING_COLORS[4]] {
            assert!(count_color(&fb, color) > 0, "missing ring {:?}", color);
        }
    }

    #[test]
    fn test_rings_stay_inside_padded_region() {
        let mut fb = VarFrameBuf::new(64, 64, Rgb888::new(0, 0, 0));
        let region = Rectangle::new(Point::new(16, 16), Size::new(32, 32));
        draw_rings(&mut fb, region).unwrap();

        for y in 0..64 {
            for x in 0..64 {
                if fb.get_pixel(x, y) != Some(Rgb888::new(0, 0, 0)) {
                    assert!((8..56).contains(&x), "x {} out of bounds", x);
                    assert!((8..56).contains(&y), "y {} out of bounds", y);
                }
            }
        }
    }

    #[test]
    fn test_rings_tolerate_degenerate_region() {
        let mut fb = VarFrameBuf::new(8, 8, Rgb888::new(0, 0, 0));
        let region = Rectangle::new(Point::new(0, 0), Size::new(0, 8));
        draw_rings(&mut fb, region).unwrap();
        assert_eq!(count_color(&fb, RING_COLORS[0]), 0);
    }
}
