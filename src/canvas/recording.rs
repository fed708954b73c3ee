//! Draw-call recorder.
//!
//! [`RecordingCanvas`] stores every primitive together with the color it was
//! drawn in. Comparing two recordings shows whether two frames issued the
//! same drawing work, without rasterizing anything.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Point;
use heapless::{String, Vec};

use super::{Canvas, FontSize};
use crate::ui::FOREGROUND;

/// Maximum primitives kept per recording. A full dashboard frame needs fewer than 40.
pub const MAX_DRAW_CALLS: usize = 64;

/// Maximum characters kept per recorded text primitive.
pub const MAX_TEXT_LEN: usize = 16;

/// One recorded canvas operation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DrawCall {
    /// Current color changed.
    SetColor(Rgb565),
    /// Rectangle outline.
    Rect {
        top_left: Point,
        bottom_right: Point,
        color: Rgb565,
    },
    /// Solid rectangle.
    FillRect {
        top_left: Point,
        bottom_right: Point,
        color: Rgb565,
    },
    /// One-pixel line.
    Line {
        start: Point,
        end: Point,
        color: Rgb565,
    },
    /// Circle outline.
    Circle {
        center: Point,
        radius: u32,
        color: Rgb565,
    },
    /// Solid circle.
    FillCircle {
        center: Point,
        radius: u32,
        color: Rgb565,
    },
    /// Text (truncated to [`MAX_TEXT_LEN`]).
    Text {
        text: String<MAX_TEXT_LEN>,
        top_left: Point,
        size: FontSize,
        color: Rgb565,
    },
}

/// Canvas that records primitives instead of drawing them.
#[derive(Clone, Debug)]
pub struct RecordingCanvas {
    calls: Vec<DrawCall, MAX_DRAW_CALLS>,
    color: Rgb565,
    dropped: usize,
}

impl RecordingCanvas {
    /// Create an empty recording. The current color starts as the foreground.
    pub const fn new() -> Self {
        Self {
            calls: Vec::new(),
            color: FOREGROUND,
            dropped: 0,
        }
    }

    /// Recorded calls, oldest first.
    #[inline]
    pub fn calls(&self) -> &[DrawCall] { &self.calls }

    /// Number of calls that did not fit into the recording.
    #[inline]
    pub const fn dropped(&self) -> usize { self.dropped }

    /// Forget recorded calls. The current color is kept.
    pub fn clear(&mut self) {
        self.calls.clear();
        self.dropped = 0;
    }

    /// Recorded calls excluding color changes.
    pub fn primitives(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(|call| !matches!(call, DrawCall::SetColor(_)))
    }

    fn record(
        &mut self,
        call: DrawCall,
    ) {
        if self.calls.push(call).is_err() {
            self.dropped += 1;
        }
    }
}

impl Default for RecordingCanvas {
    fn default() -> Self { Self::new() }
}

impl Canvas for RecordingCanvas {
    fn set_color(
        &mut self,
        color: Rgb565,
    ) {
        self.color = color;
        self.record(DrawCall::SetColor(color));
    }

    fn color(&self) -> Rgb565 { self.color }

    fn draw_rect(
        &mut self,
        top_left: Point,
        bottom_right: Point,
    ) {
        self.record(DrawCall::Rect {
            top_left,
            bottom_right,
            color: self.color,
        });
    }

    fn fill_rect(
        &mut self,
        top_left: Point,
        bottom_right: Point,
    ) {
        self.record(DrawCall::FillRect {
            top_left,
            bottom_right,
            color: self.color,
        });
    }

    fn draw_line(
        &mut self,
        start: Point,
        end: Point,
    ) {
        self.record(DrawCall::Line {
            start,
            end,
            color: self.color,
        });
    }

    fn draw_circle(
        &mut self,
        center: Point,
        radius: u32,
    ) {
        self.record(DrawCall::Circle {
            center,
            radius,
            color: self.color,
        });
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: u32,
    ) {
        self.record(DrawCall::FillCircle {
            center,
            radius,
            color: self.color,
        });
    }

    fn print(
        &mut self,
        text: &str,
        top_left: Point,
        size: FontSize,
    ) {
        let mut stored: String<MAX_TEXT_LEN> = String::new();
        for c in text.chars() {
            if stored.push(c).is_err() {
                break;
            }
        }
        self.record(DrawCall::Text {
            text: stored,
            top_left,
            size,
            color: self.color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{RED, WHITE};

    #[test]
    fn test_records_in_order_with_color() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Point::new(0, 0), Point::new(1, 1));
        canvas.set_color(RED);
        canvas.draw_line(Point::new(0, 0), Point::new(2, 2));

        assert_eq!(
            canvas.calls(),
            &[
                DrawCall::FillRect {
                    top_left: Point::new(0, 0),
                    bottom_right: Point::new(1, 1),
                    color: WHITE,
                },
                DrawCall::SetColor(RED),
                DrawCall::Line {
                    start: Point::new(0, 0),
                    end: Point::new(2, 2),
                    color: RED,
                },
            ]
        );
    }

    #[test]
    fn test_primitives_skip_color_changes() {
        let mut canvas = RecordingCanvas::new();
        canvas.set_color(RED);
        canvas.set_color(WHITE);
        canvas.draw_circle(Point::new(5, 5), 2);
        assert_eq!(canvas.primitives().count(), 1);
    }

    #[test]
    fn test_overflow_is_counted() {
        let mut canvas = RecordingCanvas::new();
        for _ in 0..MAX_DRAW_CALLS + 3 {
            canvas.draw_line(Point::zero(), Point::zero());
        }
        assert_eq!(canvas.calls().len(), MAX_DRAW_CALLS);
        assert_eq!(canvas.dropped(), 3, "Calls past capacity are counted, not stored");

        canvas.clear();
        assert!(canvas.calls().is_empty());
        assert_eq!(canvas.dropped(), 0);
    }

    #[test]
    fn test_long_text_truncated() {
        let mut canvas = RecordingCanvas::new();
        canvas.print("0123456789ABCDEFGHIJ", Point::zero(), FontSize::Large);
        match &canvas.calls()[0] {
            DrawCall::Text { text, .. } => assert_eq!(text.as_str(), "0123456789ABCDEF"),
            other => panic!("Expected text call, got {other:?}"),
        }
    }
}
