/*
 *  display/plugin.rs
 *
 *  ringsdown - five rings, one number
 *  (c) 2025-26 ringsdown authors
 *
 *  Page trait - the seam between the host loop and renderable pages
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

use serde::Serialize;

use crate::display::manager::DisplayManager;

/// A renderable page driven by the host on a timer.
///
/// Entry points never propagate errors to the host; implementations catch
/// and log internally, drawing a fallback message when they can.
pub trait Page {
    /// Stable page identifier
    fn name(&self) -> &'static str;

    /// Recompute internal state from the wall clock.
    fn update(&mut self);

    /// Render onto the display. `force` requests a full redraw even when
    /// the page believes nothing changed.
    fn display(&mut self, manager: &mut DisplayManager, force: bool);

    /// Check the page's configured options; a false return means the host
    /// should not show the page (it keeps running regardless).
    fn validate_config(&self) -> bool;

    /// Snapshot of page state for status surfaces.
    fn info(&self) -> PageInfo;
}

/// Page state snapshot, serialized for status/diagnostic output.
#[derive(Debug, Clone, Serialize)]
pub struct PageInfo {
    pub name: &'static str,
    pub days_until: i64,
    pub active: bool,
    pub phase: crate::schedule::Phase,
    pub kind: Option<String>,
    pub location: Option<String>,
    pub text_color: Vec<u8>,
    pub logo_size: Option<u32>,
}
