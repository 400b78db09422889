/*
 *  display/traits.rs
 *
 *  ringsdown - five rings, one number
 *  (c) 2025-26 ringsdown authors
 *
 *  Core trait definitions for display driver abstraction
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

use crate::display::error::DisplayError;

/// Display capabilities and metadata
#[derive(Debug, Clone)]
pub struct DisplayCapabilities {
    /// Display width in pixels
    pub width: u32,

    /// Display height in pixels
    pub height: u32,

    /// Maximum recommended frame rate
    pub max_fps: u32,

    /// Whether the display supports brightness control
    pub supports_brightness: bool,
}

/// Minimal hardware abstraction - all display drivers must implement this trait
///
/// The countdown page never talks to a driver directly; the manager draws
/// into an RGB framebuffer and pushes packed frames through this trait.
pub trait DisplayDriver: Send {
    /// Downcast support, mainly so tests and the harness can reach
    /// driver-specific inspection methods.
    fn as_any(&self) -> &dyn std::any::Any;

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;

    /// Returns the capabilities of this display
    fn capabilities(&self) -> &DisplayCapabilities;

    /// Returns the display dimensions as (width, height)
    fn dimensions(&self) -> (u32, u32) {
        let caps = self.capabilities();
        (caps.width, caps.height)
    }

    /// Initialize the display hardware
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Set display brightness (0-255)
    ///
    /// Returns an error if the display doesn't support brightness control.
    fn set_brightness(&mut self, value: u8) -> Result<(), DisplayError>;

    /// Flush the current framebuffer to the display hardware
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Clear the display to blank/off state
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write a raw frame to the display
    ///
    /// The frame is packed RGB, 3 bytes per pixel, row-major.
    fn write_buffer(&mut self, buffer: &[u8]) -> Result<(), DisplayError>;
}
