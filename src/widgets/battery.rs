//! Battery gauge in the top-left corner.
//!
//! The outline spans 4x3 base units. The fill is quantized to four steps of
//! one unit each, so even a critical battery shows a sliver.

use crate::canvas::Canvas;
use crate::config::LayoutConfig;
use crate::state::BatteryLevel;
use crate::ui::FOREGROUND;

/// Draw the battery outline and the fill for a raw level code.
///
/// Codes outside `0..=3` draw the outline only.
pub fn draw_battery<C>(
    canvas: &mut C,
    layout: &LayoutConfig,
    level: u8,
) where
    C: Canvas + ?Sized,
{
    canvas.set_color(FOREGROUND);

    let (top_left, bottom_right) = layout.battery_outline();
    canvas.draw_rect(top_left, bottom_right);

    let Some(level) = BatteryLevel::from_raw(level) else {
        return;
    };
    let (top_left, bottom_right) = layout.battery_fill(level.fill_units());
    canvas.fill_rect(top_left, bottom_right);
}
