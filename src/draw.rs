use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::PixelColor,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle},
};

use embedded_text::{
    TextBox,
    alignment::{HorizontalAlignment, VerticalAlignment},
    style::TextBoxStyleBuilder,
};

#[allow(clippy::too_many_arguments)]
pub fn draw_text_region_align<D, C>(
    target: &mut D,
    text: &str,
    top_left: Point,
    size: Size,
    halign: HorizontalAlignment,
    valign: VerticalAlignment,
    font: &MonoFont,
    color: C,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C> + OriginDimensions,
    C: PixelColor,
{
    let character_style = MonoTextStyle::new(font, color);
    let textbox_style = TextBoxStyleBuilder::new()
        .alignment(halign)
        .vertical_alignment(valign)
        .build();
    let label_rect = Rectangle::new(top_left, size);
    let label_box = TextBox::with_textbox_style(text, label_rect, character_style, textbox_style);
    label_box.draw(target)?;
    Ok(())
}

pub fn draw_circle_from_center<D, C>(
    target: &mut D,
    center: Point,
    diameter: i32,
    style: PrimitiveStyle<C>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C> + OriginDimensions,
    C: PixelColor,
{
    assert!(diameter >= 0, "diameter must be non-negative");
    let r = diameter / 2;
    // Convert (center, diameter) -> (top_left, diameter)
    let top_left = Point::new(center.x - r, center.y - r);
    Circle::new(top_left, diameter as u32)
        .into_styled(style)
        .draw(target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::framebuffer::VarFrameBuf;
    use embedded_graphics::pixelcolor::Rgb888;

    #[test]
    fn test_circle_from_center_stays_centered() {
        let mut fb = VarFrameBuf::new(21, 21, Rgb888::new(0, 0, 0));
        let style = PrimitiveStyle::with_stroke(Rgb888::new(255, 0, 0), 1);
        draw_circle_from_center(&mut fb, Point::new(10, 10), 11, style).unwrap();
        // Extreme stroke pixels sit symmetric around the center
        assert_eq!(fb.get_pixel(5, 10), Some(Rgb888::new(255, 0, 0)));
        assert_eq!(fb.get_pixel(15, 10), Some(Rgb888::new(255, 0, 0)));
        assert_eq!(fb.get_pixel(10, 5), Some(Rgb888::new(255, 0, 0)));
        assert_eq!(fb.get_pixel(10, 10), Some(Rgb888::new(0, 0, 0)));
    }
}
