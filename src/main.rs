/*
 *  main.rs
 *
 *  ringsdown - five rings, one number
 *  (c) 2025-26 ringsdown authors
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

use std::time::Duration;

use anyhow::Context;
use env_logger::Env;
use log::{error, info, warn};

use tokio::signal::unix::{signal, SignalKind};

use ringsdown::config::{self, PageSettings};
use ringsdown::display::drivers::MockDriver;
use ringsdown::pacer::Pacer;
use ringsdown::{CountdownPage, DisplayManager, Page};

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

const DEFAULT_WIDTH: u32 = 128;
const DEFAULT_HEIGHT: u32 = 64;

/// Waits for SIGINT, SIGTERM, or SIGHUP.
async fn signal_handler() -> anyhow::Result<()> {
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sighup = signal(SignalKind::hangup())?;

    tokio::select! {
        _ = sigint.recv() => {
            info!("SIGINT received. Initiating graceful shutdown.");
        }
        _ = sigterm.recv() => {
            info!("SIGTERM received. Initiating graceful shutdown.");
        }
        _ = sighup.recv() => {
            info!("SIGHUP received. Initiating graceful shutdown.");
        }
    }
    Ok(())
}

/// Drives the countdown page on a one second tick, forcing a full redraw
/// every `display_duration`.
async fn run_loop(
    manager: &mut DisplayManager,
    page: &mut CountdownPage,
    settings: &PageSettings,
    snapshot: Option<&std::path::Path>,
) {
    let mut refresh = Pacer::new(settings.display_duration);
    let mut ticker = tokio::time::interval(Duration::from_secs(1));

    loop {
        ticker.tick().await;

        page.update();
        let force = refresh.due();
        page.display(manager, force);

        if let Some(path) = snapshot {
            if let Some(mock) = manager.driver_as::<MockDriver>() {
                if let Err(e) = mock.save_to_ppm(path) {
                    warn!("Failed to write snapshot {}: {}", path.display(), e);
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = config::load().context("failed to load configuration")?;

    let level = cfg.log_level.as_deref().unwrap_or("info");
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();

    info!("{} - five rings, one number", env!("CARGO_PKG_NAME"));
    info!("v.{} built {}", env!("CARGO_PKG_VERSION"), BUILD_DATE);

    let (width, height) = cfg
        .display
        .as_ref()
        .map(|d| {
            (
                d.width.unwrap_or(DEFAULT_WIDTH),
                d.height.unwrap_or(DEFAULT_HEIGHT),
            )
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT));

    let driver = Box::new(MockDriver::new(width, height));
    let mut manager = DisplayManager::new(driver).context("display initialization failed")?;
    info!("Display ready at {}x{}", width, height);

    if let Some(brightness) = cfg.display.as_ref().and_then(|d| d.brightness) {
        if let Err(e) = manager.set_brightness(brightness) {
            warn!("Failed to set brightness: {}", e);
        }
    }

    let mut settings = PageSettings::from_config(&cfg);
    let mut page = CountdownPage::new(settings.clone());
    if !page.validate_config() {
        error!("Invalid page configuration, falling back to defaults");
        settings = PageSettings::default();
        page = CountdownPage::new(settings.clone());
    }

    match serde_json::to_string(&page.info()) {
        Ok(json) => info!("Page info: {}", json),
        Err(e) => warn!("Failed to serialize page info: {}", e),
    }

    tokio::select! {
        _ = signal_handler() => {}
        _ = run_loop(&mut manager, &mut page, &settings, cfg.snapshot.as_deref()) => {
            info!("Closed application loop.");
        }
    }

    info!("Main application exiting. Clearing display.");
    manager.clear();
    let _ = manager.present();

    Ok(())
}
