//! Widget components for the polisher dashboard.
//!
//! - [`battery`]: Battery outline with a four-step fill
//! - [`divider`]: Chevron line under the header band
//! - [`signal`]: Link quality bars with a fault cross for timeouts
//! - [`clock`]: Elapsed operating time
//! - [`flags`]: Polisher and automatic mode lamps
//!
//! # Conventions
//!
//! Every widget is a free function generic over [`Canvas`](crate::canvas::Canvas),
//! reads only the shared [`LayoutConfig`](crate::config::LayoutConfig) and its
//! own slice of the frame state, and never depends on another widget having
//! run. Each one selects the foreground color first and leaves it selected on
//! exit. Out-of-range readings degrade to drawing less, never to a panic.

mod battery;
mod clock;
mod divider;
mod flags;
mod signal;

pub use battery::draw_battery;
pub use clock::{CLOCK_TEXT_LEN, draw_elapsed, format_elapsed};
pub use divider::draw_divider;
pub use flags::{draw_control_flags, lamp_color};
pub use signal::draw_signal;
