//! Link signal indicator next to the battery.
//!
//! Three ascending bars share the battery's bottom edge. A link timeout draws
//! all three bars and crosses them out in red, so a dead link never looks
//! like a strong one.

use embedded_graphics::prelude::Point;

use crate::canvas::{Canvas, ColorScope};
use crate::config::LayoutConfig;
use crate::state::SignalQuality;
use crate::ui::{FAULT_COLOR, FOREGROUND};

/// Draw the bars for `quality`. `None` (unrecognized reading) draws nothing.
pub fn draw_signal<C>(
    canvas: &mut C,
    layout: &LayoutConfig,
    quality: Option<SignalQuality>,
) where
    C: Canvas + ?Sized,
{
    canvas.set_color(FOREGROUND);

    let Some(quality) = quality else {
        return;
    };

    for (top_left, bottom_right) in layout.signal_bars().into_iter().take(quality.bar_count()) {
        canvas.fill_rect(top_left, bottom_right);
    }

    if quality.is_fault() {
        draw_fault_cross(canvas, layout);
    }
}

/// Red X over the whole bar cluster.
fn draw_fault_cross<C>(
    canvas: &mut C,
    layout: &LayoutConfig,
) where
    C: Canvas + ?Sized,
{
    let (top_left, bottom_right) = layout.signal_cluster();
    let mut red = ColorScope::new(canvas, FAULT_COLOR);
    red.draw_line(top_left, bottom_right);
    red.draw_line(Point::new(top_left.x, bottom_right.y), Point::new(bottom_right.x, top_left.y));
}
