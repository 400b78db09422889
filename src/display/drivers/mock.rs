/*
 *  display/drivers/mock.rs
 *
 *  ringsdown - five rings, one number
 *  (c) 2025-26 ringsdown authors
 *
 *  Mock display driver for testing without hardware
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

use crate::display::error::DisplayError;
use crate::display::framebuffer::VarFrameBuf;
use crate::display::traits::{DisplayCapabilities, DisplayDriver};

use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock display driver
///
/// Simulates a display without requiring hardware. Useful for:
/// - Unit and integration tests
/// - CI/CD pipelines
/// - Running the harness on a desktop (optionally dumping PPM snapshots)
///
/// The driver records all operations and exposes its framebuffer so tests
/// can verify what was actually presented.
#[derive(Debug, Clone)]
pub struct MockDriver {
    /// Last frame received via write_buffer
    framebuffer: VarFrameBuf<Rgb888>,

    /// Display capabilities
    capabilities: DisplayCapabilities,

    /// Shared state for inspection in tests
    state: Arc<Mutex<MockDriverState>>,
}

/// Internal state for the mock driver (shared for inspection in tests)
#[derive(Debug, Default)]
pub struct MockDriverState {
    /// Number of times init() was called
    pub init_count: usize,

    /// Number of times flush() was called
    pub flush_count: usize,

    /// Number of times clear() was called
    pub clear_count: usize,

    /// Last brightness value set
    pub last_brightness: Option<u8>,

    /// Whether the driver is initialized
    pub is_initialized: bool,

    /// Total bytes written via write_buffer
    pub bytes_written: usize,

    /// Simulate failures (for error testing)
    pub simulate_flush_failure: bool,
    pub simulate_init_failure: bool,
}

impl MockDriver {
    /// Create a mock driver with specific dimensions
    pub fn new(width: u32, height: u32) -> Self {
        let capabilities = DisplayCapabilities {
            width,
            height,
            max_fps: 60,
            supports_brightness: true,
        };

        Self {
            framebuffer: VarFrameBuf::new(width, height, Rgb888::new(0, 0, 0)),
            capabilities,
            state: Arc::new(Mutex::new(MockDriverState::default())),
        }
    }

    /// Pixel of the last presented frame, None when out of bounds
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        self.framebuffer.get_pixel(x, y)
    }

    /// Get reference to state for inspection in tests
    pub fn state(&self) -> Arc<Mutex<MockDriverState>> {
        Arc::clone(&self.state)
    }

    /// Reset state counters (useful between tests)
    pub fn reset_state(&mut self) {
        let mut state = self.state.lock().unwrap();
        *state = MockDriverState::default();
    }

    /// Count pixels that are not black
    pub fn count_lit_pixels(&self) -> usize {
        self.framebuffer
            .as_slice()
            .iter()
            .filter(|&&p| p != Rgb888::new(0, 0, 0))
            .count()
    }

    /// Count pixels of an exact color
    pub fn count_pixels_of(&self, color: Rgb888) -> usize {
        self.framebuffer
            .as_slice()
            .iter()
            .filter(|&&p| p == color)
            .count()
    }

    /// Save the last presented frame as an ASCII PPM (for visual debugging)
    pub fn save_to_ppm(&self, path: &Path) -> std::io::Result<()> {
        use std::fs::File;
        use std::io::Write;

        let mut file = File::create(path)?;

        writeln!(file, "P3")?;
        writeln!(file, "{} {}", self.capabilities.width, self.capabilities.height)?;
        writeln!(file, "255")?;

        for (i, &pixel) in self.framebuffer.as_slice().iter().enumerate() {
            write!(file, "{} {} {}", pixel.r(), pixel.g(), pixel.b())?;
            if (i + 1) % self.capabilities.width as usize == 0 {
                writeln!(file)?;
            } else {
                write!(file, " ")?;
            }
        }

        Ok(())
    }
}

impl DisplayDriver for MockDriver {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn capabilities(&self) -> &DisplayCapabilities {
        &self.capabilities
    }

    fn init(&mut self) -> Result<(), DisplayError> {
        let mut state = self.state.lock().unwrap();

        if state.simulate_init_failure {
            return Err(DisplayError::InitializationFailed(
                "Simulated init failure".to_string(),
            ));
        }

        state.init_count += 1;
        state.is_initialized = true;
        Ok(())
    }

    fn set_brightness(&mut self, value: u8) -> Result<(), DisplayError> {
        let mut state = self.state.lock().unwrap();
        state.last_brightness = Some(value);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        let mut state = self.state.lock().unwrap();

        if state.simulate_flush_failure {
            return Err(DisplayError::Other("Simulated flush failure".to_string()));
        }

        state.flush_count += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        {
            let mut state = self.state.lock().unwrap();
            state.clear_count += 1;
        } // Release lock before calling flush

        self.framebuffer.clear_color(Rgb888::new(0, 0, 0));
        self.flush()
    }

    fn write_buffer(&mut self, buffer: &[u8]) -> Result<(), DisplayError> {
        let expected_size = (self.capabilities.width * self.capabilities.height * 3) as usize;

        if buffer.len() != expected_size {
            return Err(DisplayError::BufferSizeMismatch {
                expected: expected_size,
                actual: buffer.len(),
            });
        }

        {
            let mut state = self.state.lock().unwrap();
            state.bytes_written += buffer.len();
        }

        // Unpack the RGB frame back into pixels
        let fb_slice = self.framebuffer.as_mut_slice();
        for (pixel, rgb) in fb_slice.iter_mut().zip(buffer.chunks_exact(3)) {
            *pixel = Rgb888::new(rgb[0], rgb[1], rgb[2]);
        }

        self.flush()
    }
}
