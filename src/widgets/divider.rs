//! Chevron divider under the header band.

use crate::canvas::Canvas;
use crate::config::LayoutConfig;
use crate::ui::FOREGROUND;

/// Draw the three-segment divider: left diagonal, middle run, right diagonal.
pub fn draw_divider<C>(
    canvas: &mut C,
    layout: &LayoutConfig,
) where
    C: Canvas + ?Sized,
{
    canvas.set_color(FOREGROUND);
    for segment in layout.divider_path().windows(2) {
        canvas.draw_line(segment[0], segment[1]);
    }
}
