/*
 *  display/manager.rs
 *
 *  ringsdown - five rings, one number
 *  (c) 2025-26 ringsdown authors
 *
 *  Display manager - owns the driver, framebuffer and fonts
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
use embedded_graphics::mono_font::ascii::{FONT_4X6, FONT_5X8, FONT_6X13};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::primitives::Rectangle;
use embedded_text::alignment::{HorizontalAlignment, VerticalAlignment};
use log::debug;

use crate::display::error::DisplayError;
use crate::display::framebuffer::VarFrameBuf;
use crate::display::traits::{DisplayCapabilities, DisplayDriver};
use crate::draw;

/// The three font sizes the manager hands to pages.
#[derive(Debug, Clone, Copy)]
pub struct FontSet {
    pub regular: &'static MonoFont<'static>,
    pub small: &'static MonoFont<'static>,
    pub extra_small: &'static MonoFont<'static>,
}

impl Default for FontSet {
    fn default() -> Self {
        Self {
            regular: &FONT_6X13,
            small: &FONT_5X8,
            extra_small: &FONT_4X6,
        }
    }
}

/// Owns a boxed display driver, an RGB framebuffer matching its dimensions,
/// and the font set. Pages draw into the framebuffer through this type and
/// call `present()` to push the packed frame to the driver.
pub struct DisplayManager {
    driver: Box<dyn DisplayDriver>,
    frame: VarFrameBuf<Rgb888>,
    fonts: FontSet,
}

impl DisplayManager {
    /// Wrap a driver, initializing it and sizing the framebuffer from its
    /// capabilities.
    pub fn new(mut driver: Box<dyn DisplayDriver>) -> Result<Self, DisplayError> {
        driver.init()?;

        let (width, height) = driver.dimensions();
        debug!("Display manager ready: {}x{}", width, height);

        Ok(Self {
            driver,
            frame: VarFrameBuf::new(width, height, Rgb888::new(0, 0, 0)),
            fonts: FontSet::default(),
        })
    }

    pub fn capabilities(&self) -> &DisplayCapabilities {
        self.driver.capabilities()
    }

    pub fn width(&self) -> u32 {
        self.driver.capabilities().width
    }

    pub fn height(&self) -> u32 {
        self.driver.capabilities().height
    }

    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    /// Direct DrawTarget access to the framebuffer
    pub fn frame_mut(&mut self) -> &mut VarFrameBuf<Rgb888> {
        &mut self.frame
    }

    /// Clear the framebuffer to black
    pub fn clear(&mut self) {
        self.frame.clear_color(Rgb888::new(0, 0, 0));
    }

    /// Draw a line of text centered within `region`.
    pub fn draw_text(
        &mut self,
        text: &str,
        region: Rectangle,
        font: &'static MonoFont<'static>,
        color: Rgb888,
    ) -> Result<(), DisplayError> {
        draw::draw_text_region_align(
            &mut self.frame,
            text,
            region.top_left,
            region.size,
            HorizontalAlignment::Center,
            VerticalAlignment::Middle,
            font,
            color,
        )?;
        Ok(())
    }

    /// Draw a line of text left-aligned at a point (fallback messages).
    pub fn draw_text_at(
        &mut self,
        text: &str,
        position: Point,
        font: &'static MonoFont<'static>,
        color: Rgb888,
    ) -> Result<(), DisplayError> {
        let width = self.width().saturating_sub(position.x.max(0) as u32);
        let size = Size::new(width, font.character_size.height);
        draw::draw_text_region_align(
            &mut self.frame,
            text,
            position,
            size,
            HorizontalAlignment::Left,
            VerticalAlignment::Top,
            font,
            color,
        )?;
        Ok(())
    }

    pub fn set_brightness(&mut self, value: u8) -> Result<(), DisplayError> {
        self.driver.set_brightness(value)
    }

    /// Pack the framebuffer and push it to the driver.
    pub fn present(&mut self) -> Result<(), DisplayError> {
        let packed = self.frame.to_packed_rgb();
        self.driver.write_buffer(&packed)
    }

    /// Downcast the driver for driver-specific inspection (tests, snapshots).
    pub fn driver_as<T: 'static>(&self) -> Option<&T> {
        self.driver.as_any().downcast_ref::<T>()
    }
}
