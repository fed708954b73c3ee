//! Full-frame dashboard rendering.
//!
//! [`DashboardRenderer`] paints the whole dashboard from one
//! [`DashboardState`] snapshot. It keeps no state between frames: the same
//! snapshot always produces the same primitive sequence.
//!
//! # Frame Order
//!
//! | Step | Widget |
//! |------|--------|
//! | 1 | Battery gauge |
//! | 2 | Divider |
//! | 3 | Signal bars |
//! | 4 | Elapsed time |
//! | 5 | Mode lamps |
//!
//! The host clears the screen between frames; partial redraws are not
//! tracked.

use crate::canvas::Canvas;
use crate::config::LayoutConfig;
use crate::state::DashboardState;
use crate::widgets::{draw_battery, draw_control_flags, draw_divider, draw_elapsed, draw_signal};

/// Paints the dashboard against a borrowed layout.
#[derive(Clone, Copy, Debug)]
pub struct DashboardRenderer<'a> {
    layout: &'a LayoutConfig,
}

impl<'a> DashboardRenderer<'a> {
    /// Create a renderer for `layout`.
    pub const fn new(layout: &'a LayoutConfig) -> Self { Self { layout } }

    /// Draw one frame.
    pub fn render<C>(
        &self,
        canvas: &mut C,
        state: &DashboardState,
    ) where
        C: Canvas + ?Sized,
    {
        draw_battery(canvas, self.layout, state.battery_level);
        draw_divider(canvas, self.layout);
        draw_signal(canvas, self.layout, state.signal);
        draw_elapsed(canvas, self.layout, state.elapsed_seconds);
        draw_control_flags(canvas, self.layout, state.polish, state.automatic);
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::{Dimensions, Point, Size};
    use embedded_graphics::primitives::PointsIter;
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::canvas::{DisplayCanvas, DrawCall, RecordingCanvas};
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::state::SignalQuality;
    use crate::ui::{BLACK, FOREGROUND, GREEN, RED, WHITE};

    const LAYOUT: LayoutConfig = LayoutConfig::standard();

    fn busy_state() -> DashboardState {
        DashboardState {
            battery_level: 2,
            signal: Some(SignalQuality::Timeout),
            elapsed_seconds: 3661,
            polish: true,
            automatic: false,
        }
    }

    fn record(state: &DashboardState) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        DashboardRenderer::new(&LAYOUT).render(&mut canvas, state);
        canvas
    }

    // -------------------------------------------------------------------------
    // Sequence Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_frame_fits_recording() {
        let canvas = record(&busy_state());
        assert_eq!(canvas.dropped(), 0, "A full frame should fit the recorder");
    }

    #[test]
    fn test_render_is_idempotent() {
        let renderer = DashboardRenderer::new(&LAYOUT);
        let state = busy_state();

        let mut canvas = RecordingCanvas::new();
        renderer.render(&mut canvas, &state);
        let first = canvas.clone();
        canvas.clear();
        renderer.render(&mut canvas, &state);

        assert_eq!(first.calls(), canvas.calls(), "Same state must give the same draw calls");
    }

    #[test]
    fn test_widget_order() {
        let canvas = record(&busy_state());
        let calls = canvas.calls();

        let outline = calls.iter().position(|c| matches!(c, DrawCall::Rect { .. }));
        let divider = calls.iter().position(|c| matches!(c, DrawCall::Line { color, .. } if *color == WHITE));
        let bars = calls.iter().rposition(|c| matches!(c, DrawCall::FillRect { .. }));
        let clock = calls.iter().position(|c| matches!(c, DrawCall::Text { .. }));
        let lamps = calls.iter().position(|c| matches!(c, DrawCall::Circle { .. }));

        assert!(outline < divider, "Battery before divider");
        assert!(divider < bars, "Divider before signal bars");
        assert!(bars < clock, "Signal before clock");
        assert!(clock < lamps, "Clock before mode lamps");
    }

    #[test]
    fn test_frame_ends_in_foreground() {
        let canvas = record(&busy_state());
        assert_eq!(canvas.color(), FOREGROUND);
    }

    #[test]
    fn test_bad_readings_still_render_frame() {
        let state = DashboardState {
            battery_level: 42,
            signal: None,
            ..DashboardState::default()
        };
        let canvas = record(&state);

        let fills = canvas
            .calls()
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect { .. }))
            .count();
        assert_eq!(fills, 0, "No battery fill and no bars");
        assert!(canvas.calls().iter().any(|c| matches!(c, DrawCall::Rect { .. })), "Outline remains");
        assert!(canvas.calls().iter().any(|c| matches!(c, DrawCall::Text { .. })), "Clock remains");
    }

    // -------------------------------------------------------------------------
    // Pixel Tests
    // -------------------------------------------------------------------------

    fn rasterize(state: &DashboardState) -> SimulatorDisplay<Rgb565> {
        let mut display = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let mut canvas = DisplayCanvas::new(&mut display);
        DashboardRenderer::new(&LAYOUT).render(&mut canvas, state);
        display
    }

    #[test]
    fn test_pixels_battery_fill() {
        let full = rasterize(&DashboardState {
            battery_level: 3,
            ..DashboardState::default()
        });
        let critical = rasterize(&DashboardState::default());

        assert_eq!(full.get_pixel(Point::new(40, 16)), WHITE, "Full battery is filled");
        assert_eq!(critical.get_pixel(Point::new(40, 16)), BLACK, "Critical battery is mostly empty");
        assert_eq!(critical.get_pixel(Point::new(15, 16)), WHITE);
    }

    #[test]
    fn test_pixels_lamps_and_fault() {
        let display = rasterize(&busy_state());

        assert_eq!(display.get_pixel(LAYOUT.polish_lamp_center()), GREEN);
        assert_eq!(display.get_pixel(LAYOUT.auto_lamp_center()), RED);
        // Both diagonals of the fault cross meet inside the cluster
        let (top_left, _) = LAYOUT.signal_cluster();
        assert_eq!(display.get_pixel(top_left), RED, "Cross starts at the cluster corner");
    }

    #[test]
    fn test_pixels_widest_clock_clears_divider() {
        let mut divider: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_divider(&mut DisplayCanvas::new(&mut divider), &LAYOUT);

        // 4_294_967 s is the u32 millisecond clock's limit: "1193:02:47"
        let mut clock: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_elapsed(&mut DisplayCanvas::new(&mut clock), &LAYOUT, 4_294_967);

        let shared = divider
            .bounding_box()
            .points()
            .filter(|&p| divider.get_pixel(p) != BLACK && clock.get_pixel(p) != BLACK)
            .count();
        assert_eq!(shared, 0, "Clock glyphs must not touch the divider");
    }

    #[test]
    fn test_pixels_divider_middle() {
        let display = rasterize(&DashboardState::default());
        assert_eq!(display.get_pixel(Point::new(160, LAYOUT.divider_y())), WHITE);
    }
}
