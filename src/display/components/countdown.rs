/*
 *  display/components/countdown.rs
 *
 *  ringsdown - five rings, one number
 *  (c) 2025-26 ringsdown authors
 *
 *  Olympics countdown page - logo left, stacked countdown text right
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

use chrono::{Local, NaiveDate};
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::primitives::Rectangle;
use log::{debug, error, info, warn};

use crate::config::PageSettings;
use crate::display::components::rings;
use crate::display::error::DisplayError;
use crate::display::layout::{self, SplitLayout};
use crate::display::manager::DisplayManager;
use crate::display::plugin::{Page, PageInfo};
use crate::logo::LogoRenderer;
use crate::schedule::{self, Countdown};

/// The Olympics countdown page.
///
/// `update()` recomputes the countdown from the wall clock; `display()`
/// renders it split-screen, skipping the redraw when the message has not
/// changed since the previous call.
pub struct CountdownPage {
    settings: PageSettings,
    text_color: Rgb888,
    logo: Option<LogoRenderer>,
    state: Countdown,

    /// Day the state was last logged, to keep the log quiet
    last_computed: Option<NaiveDate>,

    /// Render cache: last message actually drawn
    last_message: Option<String>,
}

/// Build the one-line summary plus the stacked display lines for a state.
pub fn compose(countdown: &Countdown) -> (String, Vec<String>) {
    let lines_of = |texts: &[&str]| texts.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    let Some(event) = countdown.event else {
        return ("NO OLYMPICS FOUND".to_string(), lines_of(&["NO OLYMPICS", "FOUND"]));
    };

    if countdown.active {
        if countdown.days == 0 {
            return ("OLYMPICS CLOSING".to_string(), lines_of(&["OLYMPICS", "CLOSING", "TODAY"]));
        }
        return (
            format!("{} DAYS UNTIL CLOSING", countdown.days),
            vec![
                countdown.days.to_string(),
                "DAYS UNTIL".to_string(),
                "CLOSING".to_string(),
            ],
        );
    }

    if countdown.days == 0 {
        return (
            "OLYMPICS OPENING TODAY".to_string(),
            lines_of(&["OLYMPICS", "OPENING", "TODAY"]),
        );
    }

    let kind = event.kind.to_string().to_uppercase();
    (
        format!("{} DAYS UNTIL {} OLYMPICS", countdown.days, kind),
        vec![
            countdown.days.to_string(),
            "DAYS UNTIL".to_string(),
            kind,
            "OLYMPICS".to_string(),
        ],
    )
}

impl CountdownPage {
    pub fn new(settings: PageSettings) -> Self {
        let logo = LogoRenderer::load(&settings.asset_dir);
        let text_color = settings.text_color_rgb();

        let page = Self {
            settings,
            text_color,
            logo,
            state: schedule::countdown_for(Local::now().date_naive()),
            last_computed: None,
            last_message: None,
        };

        info!("Olympics countdown page initialized");
        page
    }

    /// Recompute the countdown for a specific date. `update()` feeds in the
    /// wall clock; tests feed in fixed dates.
    pub fn update_for(&mut self, today: NaiveDate) {
        self.state = schedule::countdown_for(today);

        // Only log when the day changes
        if self.last_computed != Some(today) {
            match self.state.event {
                Some(event) if self.state.active => {
                    info!(
                        "Olympics {} {} is active. Days until closing: {}",
                        event.kind, event.location, self.state.days
                    );
                }
                Some(event) => {
                    info!(
                        "Days until {} Olympics {} opening: {}",
                        event.kind, event.location, self.state.days
                    );
                }
                None => warn!("No upcoming Olympics found"),
            }
            self.last_computed = Some(today);
        }
    }

    /// Current countdown state
    pub fn state(&self) -> &Countdown {
        &self.state
    }

    /// Logo region, shrunk and re-centered when `logo_size` is configured.
    fn logo_region(&self, layout: &SplitLayout) -> Rectangle {
        let region = layout.logo_region;
        let Some(size) = self.settings.logo_size else {
            return region;
        };

        let w = size.min(region.size.width);
        let h = size.min(region.size.height);
        let x = region.top_left.x + ((region.size.width - w) / 2) as i32;
        let y = region.top_left.y + ((region.size.height - h) / 2) as i32;
        Rectangle::new(Point::new(x, y), Size::new(w, h))
    }

    /// Render pass; Ok(false) when the redraw was skipped.
    fn try_display(
        &mut self,
        manager: &mut DisplayManager,
        force: bool,
    ) -> Result<bool, DisplayError> {
        let (message, lines) = compose(&self.state);

        // Unchanged content, no forced redraw: leave the frame alone
        if !force && self.last_message.as_deref() == Some(message.as_str()) {
            return Ok(false);
        }

        let layout = SplitLayout::for_dimensions(manager.width(), manager.height());

        manager.clear();

        // Logo on the left: bundled file when present, drawn rings otherwise
        let logo_region = self.logo_region(&layout);
        match self.logo.as_ref() {
            Some(renderer) => {
                let rendered = renderer.render(logo_region.size.width, logo_region.size.height)?;
                // center within the region, aspect fit may undershoot one axis
                let x = logo_region.top_left.x
                    + ((logo_region.size.width - rendered.width) / 2) as i32;
                let y = logo_region.top_left.y
                    + ((logo_region.size.height - rendered.height) / 2) as i32;
                rendered.draw_at(manager.frame_mut(), Point::new(x, y))?;
            }
            None => {
                rings::draw_rings(manager.frame_mut(), logo_region)?;
            }
        }

        // Stacked text on the right, largest font that fits
        let fit = layout::fit_text(&lines, &layout.text_region, manager.fonts());
        for (i, line) in lines.iter().enumerate() {
            let line_region = Rectangle::new(
                Point::new(
                    layout.text_region.top_left.x,
                    fit.start_y + (i as u32 * fit.line_height) as i32,
                ),
                Size::new(layout.text_region.size.width, fit.line_height),
            );
            manager.draw_text(line, line_region, fit.font, self.text_color)?;
        }

        manager.present()?;

        debug!("Displayed: {}", message);
        self.last_message = Some(message);
        Ok(true)
    }

    /// Last-resort rendering when the normal pass fails.
    fn draw_error_fallback(&self, manager: &mut DisplayManager) {
        manager.clear();
        let font = manager.fonts().small;
        if manager
            .draw_text_at("COUNTDOWN ERROR", Point::new(5, 15), font, Rgb888::new(255, 0, 0))
            .is_err()
        {
            return;
        }
        let _ = manager.present();
    }
}

impl Page for CountdownPage {
    fn name(&self) -> &'static str {
        "olympics_countdown"
    }

    fn update(&mut self) {
        self.update_for(Local::now().date_naive());
    }

    fn display(&mut self, manager: &mut DisplayManager, force: bool) {
        if let Err(e) = self.try_display(manager, force) {
            error!("Error displaying countdown: {}", e);
            // keep the cache clear so the next tick retries a full redraw
            self.last_message = None;
            self.draw_error_fallback(manager);
        }
    }

    fn validate_config(&self) -> bool {
        if self.settings.text_color.len() != 3 {
            error!("Invalid text_color: must be an RGB triple");
            return false;
        }
        if self.settings.logo_size == Some(0) {
            error!("logo_size must be a positive number");
            return false;
        }
        if self.settings.display_duration.is_zero() {
            error!("display_duration must be a positive number of seconds");
            return false;
        }
        true
    }

    fn info(&self) -> PageInfo {
        PageInfo {
            name: self.name(),
            days_until: self.state.days,
            active: self.state.active,
            phase: self.state.phase,
            kind: self.state.event.map(|e| e.kind.to_string()),
            location: self
                .state
                .event
                .map(|e| schedule::shorten_location(e.location)),
            text_color: self.settings.text_color.clone(),
            logo_size: self.settings.logo_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{GamesEvent, Phase};
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_event() -> GamesEvent {
        GamesEvent {
            opening: day(2026, 2, 6),
            closing: day(2026, 2, 22),
            kind: crate::schedule::GamesKind::Winter,
            location: "Milan-Cortina",
        }
    }

    #[test]
    fn test_compose_upcoming() {
        let cd = Countdown {
            days: 42,
            active: false,
            event: Some(sample_event()),
            phase: Phase::Opening,
        };
        let (message, lines) = compose(&cd);
        assert_eq!(message, "42 DAYS UNTIL WINTER OLYMPICS");
        assert_eq!(lines, vec!["42", "DAYS UNTIL", "WINTER", "OLYMPICS"]);
    }

    #[test]
    fn test_compose_opening_today() {
        let cd = Countdown {
            days: 0,
            active: false,
            event: Some(sample_event()),
            phase: Phase::Opening,
        };
        let (message, lines) = compose(&cd);
        assert_eq!(message, "OLYMPICS OPENING TODAY");
        assert_eq!(lines, vec!["OLYMPICS", "OPENING", "TODAY"]);
    }

    #[test]
    fn test_compose_active() {
        let cd = Countdown {
            days: 5,
            active: true,
            event: Some(sample_event()),
            phase: Phase::Closing,
        };
        let (message, lines) = compose(&cd);
        assert_eq!(message, "5 DAYS UNTIL CLOSING");
        assert_eq!(lines, vec!["5", "DAYS UNTIL", "CLOSING"]);
    }

    #[test]
    fn test_compose_closing_today() {
        let cd = Countdown {
            days: 0,
            active: true,
            event: Some(sample_event()),
            phase: Phase::Closing,
        };
        let (message, _) = compose(&cd);
        assert_eq!(message, "OLYMPICS CLOSING");
    }

    #[test]
    fn test_compose_no_event() {
        let cd = Countdown {
            days: 0,
            active: false,
            event: None,
            phase: Phase::Opening,
        };
        let (message, lines) = compose(&cd);
        assert_eq!(message, "NO OLYMPICS FOUND");
        assert_eq!(lines, vec!["NO OLYMPICS", "FOUND"]);
    }

    #[test]
    fn test_validate_config() {
        let mut settings = PageSettings::default();
        settings.asset_dir = "/nonexistent".into();

        let page = CountdownPage::new(settings.clone());
        assert!(page.validate_config());

        settings.text_color = vec![1, 2];
        let page = CountdownPage::new(settings.clone());
        assert!(!page.validate_config());

        settings.text_color = vec![1, 2, 3];
        settings.logo_size = Some(0);
        let page = CountdownPage::new(settings);
        assert!(!page.validate_config());
    }

    #[test]
    fn test_info_shortens_location() {
        let mut settings = PageSettings::default();
        settings.asset_dir = "/nonexistent".into();
        let mut page = CountdownPage::new(settings);
        page.update_for(day(2025, 10, 29));

        let info = page.info();
        assert_eq!(info.days_until, 100);
        assert_eq!(info.location.as_deref(), Some("Milan"));
        assert_eq!(info.kind.as_deref(), Some("winter"));
    }
}
