/*
 *  display/mod.rs
 *
 *  ringsdown - five rings, one number
 *  (c) 2025-26 ringsdown authors
 *
 *  Display subsystem - drivers, framebuffer, layout, manager, pages
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

pub mod components;
pub mod drivers;
pub mod error;
pub mod framebuffer;
pub mod layout;
pub mod manager;
pub mod plugin;
pub mod traits;

pub use components::CountdownPage;
pub use drivers::MockDriver;
pub use error::DisplayError;
pub use framebuffer::VarFrameBuf;
pub use layout::{fit_text, SplitLayout, TextLayout};
pub use manager::{DisplayManager, FontSet};
pub use plugin::{Page, PageInfo};
pub use traits::{DisplayCapabilities, DisplayDriver};
