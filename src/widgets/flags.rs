//! Control-mode lamps below the divider.
//!
//! Each mode gets a text label and a round lamp: green while the mode is on,
//! red while it is off. The lamp fill is inset by one pixel so the white
//! outline ring stays visible in both states.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Point;

use crate::canvas::{Canvas, ColorScope, FontSize};
use crate::config::{AUTO_LABEL, LayoutConfig, POLISH_LABEL};
use crate::ui::{FOREGROUND, LAMP_OFF, LAMP_ON};

/// Fill color for a lamp.
#[inline]
pub const fn lamp_color(active: bool) -> Rgb565 { if active { LAMP_ON } else { LAMP_OFF } }

/// Draw both mode labels and their lamps.
pub fn draw_control_flags<C>(
    canvas: &mut C,
    layout: &LayoutConfig,
    polish: bool,
    automatic: bool,
) where
    C: Canvas + ?Sized,
{
    canvas.set_color(FOREGROUND);

    canvas.print(POLISH_LABEL, layout.polish_label_position(), FontSize::Small);
    draw_lamp(canvas, layout.polish_lamp_center(), layout.lamp_radius, polish);

    canvas.print(AUTO_LABEL, layout.auto_label_position(), FontSize::Small);
    draw_lamp(canvas, layout.auto_lamp_center(), layout.lamp_radius, automatic);
}

fn draw_lamp<C>(
    canvas: &mut C,
    center: Point,
    radius: u32,
    active: bool,
) where
    C: Canvas + ?Sized,
{
    canvas.draw_circle(center, radius);
    let mut fill = ColorScope::new(canvas, lamp_color(active));
    fill.fill_circle(center, radius.saturating_sub(1));
}
