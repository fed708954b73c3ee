//! Color constants for the polisher dashboard.
//!
//! Built on the `RgbColor` trait constants so the RGB565 values are the
//! exact full-scale primaries the ILI9341-class panels expect.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Outlines, bars, divider and text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Inactive lamps and the link fault cross.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Active lamps.
pub const GREEN: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Roles
// =============================================================================

/// Default draw color. Every widget leaves the canvas in this color.
pub const FOREGROUND: Rgb565 = WHITE;

/// Color the host clears the screen to before each frame.
pub const BACKGROUND: Rgb565 = BLACK;

/// Overlay color for the signal-quality fault cross.
pub const FAULT_COLOR: Rgb565 = RED;

/// Lamp fill for an active mode flag.
pub const LAMP_ON: Rgb565 = GREEN;

/// Lamp fill for an inactive mode flag.
pub const LAMP_OFF: Rgb565 = RED;
