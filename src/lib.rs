//! ringsdown - Olympics countdown page for small pixel displays.
//!
//! The library half of the crate: the countdown schedule, the display
//! subsystem (driver trait, framebuffer, manager, layout) and the page
//! components. `main.rs` is a thin host harness that drives a page on a
//! timer.

pub mod config;
pub mod display;
pub mod draw;
pub mod logo;
pub mod pacer;
pub mod schedule;

pub use display::{DisplayCapabilities, DisplayDriver, DisplayError, DisplayManager};
pub use display::components::countdown::CountdownPage;
pub use display::plugin::{Page, PageInfo};
pub use schedule::{Countdown, GamesEvent, GamesKind, Phase};
