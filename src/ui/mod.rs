//! UI styling and visual constants.
//!
//! - `colors`: RGB565 color constants and their dashboard roles
//! - `styles`: Pre-computed text styles and fonts

mod colors;
mod styles;

pub use colors::{BACKGROUND, BLACK, FAULT_COLOR, FOREGROUND, GREEN, LAMP_OFF, LAMP_ON, RED, WHITE};
pub use styles::{CLOCK_FONT, LABEL_FONT, TOP_LEFT};
