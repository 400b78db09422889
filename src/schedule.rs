/*
 *  schedule.rs
 *
 *  ringsdown - five rings, one number
 *  (c) 2025-26 ringsdown authors
 *
 *  Olympic Games schedule and countdown arithmetic
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

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Summer or winter Games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GamesKind {
    Summer,
    Winter,
}

impl fmt::Display for GamesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamesKind::Summer => write!(f, "summer"),
            GamesKind::Winter => write!(f, "winter"),
        }
    }
}

/// Which ceremony the countdown targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Opening,
    Closing,
}

/// A single Games with its ceremony bracket dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GamesEvent {
    pub opening: NaiveDate,
    pub closing: NaiveDate,
    pub kind: GamesKind,
    pub location: &'static str,
}

/// Countdown state derived from today's date and the schedule.
///
/// `days` is the signed difference to the target ceremony. It only goes
/// negative in the fallback case where every scheduled Games is in the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub active: bool,
    pub event: Option<GamesEvent>,
    pub phase: Phase,
}

/// Ceremony dates, two rows per Games: opening first, closing second.
/// Format: (year, month, day, kind, location)
const SCHEDULE: &[(i32, u32, u32, GamesKind, &str)] = &[
    // Winter 2026 - Milan-Cortina
    (2026, 2, 6, GamesKind::Winter, "Milan-Cortina"),
    (2026, 2, 22, GamesKind::Winter, "Milan-Cortina"),
    // Summer 2028 - Los Angeles
    (2028, 7, 14, GamesKind::Summer, "Los Angeles"),
    (2028, 7, 30, GamesKind::Summer, "Los Angeles"),
    // Winter 2030 - TBD (placeholder dates)
    (2030, 2, 8, GamesKind::Winter, "TBD"),
    (2030, 2, 24, GamesKind::Winter, "TBD"),
    // Summer 2032 - Brisbane
    (2032, 7, 23, GamesKind::Summer, "Brisbane"),
    (2032, 8, 8, GamesKind::Summer, "Brisbane"),
];

/// Pair the schedule rows into events, oldest first.
pub fn events() -> Vec<GamesEvent> {
    SCHEDULE
        .chunks_exact(2)
        .filter_map(|pair| {
            let (o, c) = (&pair[0], &pair[1]);
            let opening = NaiveDate::from_ymd_opt(o.0, o.1, o.2)?;
            let closing = NaiveDate::from_ymd_opt(c.0, c.1, c.2)?;
            Some(GamesEvent {
                opening,
                closing,
                kind: o.3,
                location: o.4,
            })
        })
        .collect()
}

/// Find the Games the countdown should target for `today`.
///
/// Returns the event plus whether it is currently underway. Before an
/// opening we count down to that opening; between opening and closing we
/// count down to the closing. Once every event is past, the last known
/// event is returned inactive so callers still have something to show.
pub fn next_event(today: NaiveDate) -> Option<(GamesEvent, bool)> {
    let all = events();

    for event in &all {
        if today < event.opening {
            return Some((*event, false));
        }
        if today <= event.closing {
            return Some((*event, true));
        }
    }

    all.last().map(|event| (*event, false))
}

/// Compute the full countdown state for `today`.
pub fn countdown_for(today: NaiveDate) -> Countdown {
    match next_event(today) {
        Some((event, true)) => Countdown {
            days: (event.closing - today).num_days(),
            active: true,
            event: Some(event),
            phase: Phase::Closing,
        },
        Some((event, false)) => Countdown {
            days: (event.opening - today).num_days(),
            active: false,
            event: Some(event),
            phase: Phase::Opening,
        },
        None => Countdown {
            days: 0,
            active: false,
            event: None,
            phase: Phase::Opening,
        },
    }
}

/// Shorten a host-city name to at most 12 characters.
///
/// Hyphenated names lose everything after the first hyphen before any
/// hard truncation kicks in.
pub fn shorten_location(location: &str) -> String {
    let mut loc = location.to_string();
    if loc.chars().count() > 12 {
        if let Some(first) = loc.split('-').next() {
            loc = first.to_string();
        }
    }
    if loc.chars().count() > 12 {
        loc = format!("{}..", loc.chars().take(10).collect::<String>());
    }
    loc
}
