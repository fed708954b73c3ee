//! Elapsed operating time in the header band.
//!
//! # Format
//!
//! | Elapsed | Shown |
//! |---------|-------|
//! | 0 s | `00:00` |
//! | 65 s | `01:05` |
//! | 3661 s | `1:01:01` |
//!
//! The hours field only appears once it is nonzero and carries no leading
//! zero. The minutes field is always present, zero-padded. Recomputed from the
//! raw second count every frame.

use core::fmt::Write;

use heapless::String;

use crate::canvas::{Canvas, FontSize};
use crate::config::LayoutConfig;
use crate::ui::FOREGROUND;

/// Longest readout: `u32::MAX` seconds is `1193046:28:15`.
pub const CLOCK_TEXT_LEN: usize = 16;

const SECS_PER_HOUR: u32 = 3600;
const SECS_PER_MINUTE: u32 = 60;

/// Format elapsed seconds as `H:MM:SS`, or `MM:SS` below one hour.
pub fn format_elapsed(elapsed_seconds: u32) -> String<CLOCK_TEXT_LEN> {
    let hours = elapsed_seconds / SECS_PER_HOUR;
    let minutes = (elapsed_seconds % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = elapsed_seconds % SECS_PER_MINUTE;

    let mut text: String<CLOCK_TEXT_LEN> = String::new();
    if hours > 0 {
        let _ = write!(text, "{hours}:");
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(text, "{minutes:02}:");
    } else {
        let _ = text.push_str("00:");
    }
    let _ = write!(text, "{seconds:02}");
    text
}

/// Draw the elapsed time at the clock anchor.
pub fn draw_elapsed<C>(
    canvas: &mut C,
    layout: &LayoutConfig,
    elapsed_seconds: u32,
) where
    C: Canvas + ?Sized,
{
    canvas.set_color(FOREGROUND);
    let text = format_elapsed(elapsed_seconds);
    canvas.print(&text, layout.clock_position(), FontSize::Large);
}
