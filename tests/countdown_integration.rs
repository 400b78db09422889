/*
 *  tests/countdown_integration.rs
 *
 *  Integration tests for the countdown page against the mock driver
 *
 *  ringsdown - five rings, one number
 *  (c) 2025-26 ringsdown authors
 */

use chrono::NaiveDate;
use embedded_graphics::pixelcolor::Rgb888;

use ringsdown::config::PageSettings;
use ringsdown::display::components::rings::RING_COLORS;
use ringsdown::display::drivers::MockDriver;
use ringsdown::schedule;
use ringsdown::{CountdownPage, DisplayManager, Page};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Manager backed by a mock with no logo on disk, so the rings path runs.
fn manager_and_page(width: u32, height: u32) -> (DisplayManager, CountdownPage) {
    let driver = MockDriver::new(width, height);
    let manager = DisplayManager::new(Box::new(driver)).unwrap();

    let settings = PageSettings {
        asset_dir: "/nonexistent".into(),
        ..Default::default()
    };
    let page = CountdownPage::new(settings);
    (manager, page)
}

fn flush_count(manager: &DisplayManager) -> usize {
    let mock = manager.driver_as::<MockDriver>().unwrap();
    let state = mock.state();
    let n = state.lock().unwrap().flush_count;
    n
}

#[test]
fn test_countdown_days_to_known_opening() {
    // Milan-Cortina opens 2026-02-06
    let cd = schedule::countdown_for(day(2025, 10, 29));
    assert_eq!(cd.days, 100);
    assert!(!cd.active);
    assert_eq!(cd.event.unwrap().location, "Milan-Cortina");
}

#[test]
fn test_countdown_during_games() {
    let cd = schedule::countdown_for(day(2026, 2, 10));
    assert!(cd.active);
    // closing 2026-02-22
    assert_eq!(cd.days, 12);
}

#[test]
fn test_display_writes_frame_to_driver() {
    let (mut manager, mut page) = manager_and_page(128, 64);
    page.update_for(day(2025, 10, 29));

    page.display(&mut manager, false);

    let mock = manager.driver_as::<MockDriver>().unwrap();
    assert!(mock.count_lit_pixels() > 0);
    assert_eq!(mock.state().lock().unwrap().bytes_written, 128 * 64 * 3);
}

#[test]
fn test_redraw_skipped_when_message_unchanged() {
    let (mut manager, mut page) = manager_and_page(128, 64);
    page.update_for(day(2025, 10, 29));

    page.display(&mut manager, false);
    let after_first = flush_count(&manager);
    assert!(after_first > 0);

    // Same day, same message: no new flush
    page.update_for(day(2025, 10, 29));
    page.display(&mut manager, false);
    assert_eq!(flush_count(&manager), after_first);

    // Next day changes the message and triggers a redraw
    page.update_for(day(2025, 10, 30));
    page.display(&mut manager, false);
    assert!(flush_count(&manager) > after_first);
}

#[test]
fn test_force_redraws_unchanged_message() {
    let (mut manager, mut page) = manager_and_page(128, 64);
    page.update_for(day(2025, 10, 29));

    page.display(&mut manager, false);
    let after_first = flush_count(&manager);

    page.display(&mut manager, true);
    assert!(flush_count(&manager) > after_first);
}

#[test]
fn test_rings_fallback_draws_ring_colors() {
    let (mut manager, mut page) = manager_and_page(128, 64);
    page.update_for(day(2025, 10, 29));

    page.display(&mut manager, false);

    let mock = manager.driver_as::<MockDriver>().unwrap();
    // Blue, red, yellow and green strokes must all land on the frame
    for color in [RING_COLORS[0], RING_COLORS[2], RING_COLORS[3], RING_COLORS[4]] {
        assert!(
            mock.count_pixels_of(color) > 0,
            "missing ring color {:?}",
            color
        );
    }
}

#[test]
fn test_text_uses_configured_color() {
    let driver = MockDriver::new(128, 64);
    let mut manager = DisplayManager::new(Box::new(driver)).unwrap();

    let settings = PageSettings {
        asset_dir: "/nonexistent".into(),
        text_color: vec![0, 255, 255],
        ..Default::default()
    };
    let mut page = CountdownPage::new(settings);
    page.update_for(day(2025, 10, 29));
    page.display(&mut manager, false);

    let mock = manager.driver_as::<MockDriver>().unwrap();
    assert!(mock.count_pixels_of(Rgb888::new(0, 255, 255)) > 0);
}

#[test]
fn test_flush_failure_does_not_panic() {
    let (mut manager, mut page) = manager_and_page(128, 64);
    page.update_for(day(2025, 10, 29));

    {
        let mock = manager.driver_as::<MockDriver>().unwrap();
        mock.state().lock().unwrap().simulate_flush_failure = true;
    }

    // display() catches internally; nothing propagates
    page.display(&mut manager, false);

    {
        let mock = manager.driver_as::<MockDriver>().unwrap();
        mock.state().lock().unwrap().simulate_flush_failure = false;
    }

    // Recovery: next call redraws from scratch
    page.display(&mut manager, false);
    let mock = manager.driver_as::<MockDriver>().unwrap();
    assert!(mock.count_lit_pixels() > 0);
}

#[test]
fn test_small_display_still_renders() {
    let (mut manager, mut page) = manager_and_page(64, 32);
    page.update_for(day(2025, 10, 29));

    page.display(&mut manager, false);

    let mock = manager.driver_as::<MockDriver>().unwrap();
    assert!(mock.count_lit_pixels() > 0);
}

#[test]
fn test_page_info_serializes() {
    let (_, mut page) = manager_and_page(128, 64);
    page.update_for(day(2025, 10, 29));

    let info = page.info();
    assert_eq!(info.name, "olympics_countdown");
    assert_eq!(info.days_until, 100);
    assert!(!info.active);

    let json = serde_json::to_string(&info).unwrap();
    assert!(json.contains("\"days_until\":100"));
    assert!(json.contains("\"location\":\"Milan\""));
}
