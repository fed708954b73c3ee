//! Display dimensions and the dashboard layout model.
//!
//! Every widget position is derived from one immutable [`LayoutConfig`].
//! The battery origin doubles as the base unit: the battery box spans
//! `(x, y)..(4x, 3y)` and most other offsets are multiples of it.
//!
//! # Fixed-Point Geometry
//!
//! All coordinates are integer pixels. Bar tops are expressed in half units
//! (`5y/2`, `4y/2`, `3y/2 - 2`) and divided with truncation, so the standard
//! layout produces the same pixels as a float computation truncated to `int`.
//!
//! ```text
//!  ┌──────┐ ▌▌▌                    H:MM:SS
//!  └──────┘ ▌▌▌
//! ╲________________________________________╱   divider
//!  POLISHER (●)  AUTOMATIC (●)
//! ```

use core::fmt;

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::prelude::Point;

use crate::state::elapsed_seconds_from_millis;
use crate::ui::{CLOCK_FONT, LABEL_FONT};
use crate::widgets::format_elapsed;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ILI9341 landscape: 320x240)
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

/// Last addressable column, as `i32` for drawing code.
const MAX_X: i32 = SCREEN_WIDTH as i32 - 1;

/// Last addressable row, as `i32` for drawing code.
const MAX_Y: i32 = SCREEN_HEIGHT as i32 - 1;

/// Label next to the manual polisher lamp.
pub const POLISH_LABEL: &str = "POLISHER";

/// Label next to the automatic mode lamp.
pub const AUTO_LABEL: &str = "AUTOMATIC";

/// Longest uptime the clock can show: the millisecond uptime clock at its
/// limit, `1193:02:47`.
const CLOCK_MAX_SECONDS: u32 = elapsed_seconds_from_millis(u32::MAX);

// =============================================================================
// Layout Configuration
// =============================================================================

/// Geometric constants for the whole dashboard.
///
/// Created once at startup and passed by reference to every widget.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LayoutConfig {
    /// Top-left corner of the battery outline; also the base unit.
    pub battery_origin: Point,
    /// Vertical gap between the battery bottom and the divider's middle segment.
    pub padding_line_from_battery: i32,
    /// Horizontal gap between the battery's right edge and the first bar.
    pub padding_bars_from_battery: i32,
    /// Width of each signal bar.
    pub bar_width: i32,
    /// Nominal gap between bars (packed 2px tighter when laid out).
    pub padding_between_bars: i32,
    /// Distance of the clock text from the right screen edge.
    pub padding_time_from_right: i32,
    /// Clock text offset below the battery origin row.
    pub clock_offset_y: i32,
    /// Mode label top, measured below the divider.
    pub padding_labels_from_line: i32,
    /// Lamp outline radius.
    pub lamp_radius: u32,
    /// Lamp center, measured below the divider.
    pub padding_lamp_from_line: i32,
    /// Gap added after doubling the first lamp's x to place the second label.
    pub padding_between_labels: i32,
    /// First lamp center x, relative to the first label's first character.
    pub first_lamp_offset: i32,
    /// Second lamp center x, relative to the second label's first character.
    pub second_lamp_offset: i32,
}

/// Corners of an axis-aligned box, both inclusive.
pub type Corners = (Point, Point);

impl LayoutConfig {
    /// The tuned layout for the 320x240 controller display.
    pub const fn standard() -> Self {
        Self {
            battery_origin: Point::new(15, 8),
            padding_line_from_battery: 10,
            padding_bars_from_battery: 10,
            bar_width: 5,
            padding_between_bars: 5,
            padding_time_from_right: 130,
            clock_offset_y: 5,
            padding_labels_from_line: 10,
            lamp_radius: 6,
            padding_lamp_from_line: 15,
            padding_between_labels: 10,
            first_lamp_offset: 60,
            second_lamp_offset: 66,
        }
    }

    // -------------------------------------------------------------------------
    // Battery
    // -------------------------------------------------------------------------

    /// Battery outline: `(x, y)` to `(4x, 3y)`.
    pub const fn battery_outline(&self) -> Corners {
        let o = self.battery_origin;
        (o, Point::new(4 * o.x, 3 * o.y))
    }

    /// Battery fill spanning `units` base units (1 to 4).
    pub const fn battery_fill(&self, units: i32) -> Corners {
        let o = self.battery_origin;
        (o, Point::new(units * o.x, 3 * o.y))
    }

    /// Bottom edge of the battery box, shared by the signal bars.
    #[inline]
    pub const fn battery_bottom(&self) -> i32 { 3 * self.battery_origin.y }

    // -------------------------------------------------------------------------
    // Divider
    // -------------------------------------------------------------------------

    /// Row of the divider's horizontal middle segment.
    #[inline]
    pub const fn divider_y(&self) -> i32 { self.battery_bottom() + self.padding_line_from_battery }

    /// Chevron path: screen edge, down to the battery column, across, back up.
    pub const fn divider_path(&self) -> [Point; 4] {
        let x = self.battery_origin.x;
        let top = self.battery_bottom();
        let bottom = self.divider_y();
        [
            Point::new(0, top),
            Point::new(x, bottom),
            Point::new(MAX_X - x, bottom),
            Point::new(MAX_X, top),
        ]
    }

    // -------------------------------------------------------------------------
    // Signal bars
    // -------------------------------------------------------------------------

    /// The three signal bars, shortest first.
    pub const fn signal_bars(&self) -> [Corners; 3] {
        let unit = self.battery_origin;
        let bottom = self.battery_bottom();
        let step = self.bar_width + self.padding_between_bars - 2;

        let x0 = 4 * unit.x + self.padding_bars_from_battery;
        let x1 = x0 + step;
        let x2 = x1 + step;

        let top0 = 5 * unit.y / 2;
        let top1 = 4 * unit.y / 2;
        let top2 = 3 * unit.y / 2 - 2;

        [
            (Point::new(x0, top0), Point::new(x0 + self.bar_width, bottom)),
            (Point::new(x1, top1), Point::new(x1 + self.bar_width, bottom)),
            (Point::new(x2, top2), Point::new(x2 + self.bar_width, bottom)),
        ]
    }

    /// Bounding box of the full bar cluster.
    pub const fn signal_cluster(&self) -> Corners {
        let bars = self.signal_bars();
        (Point::new(bars[0].0.x, bars[2].0.y), Point::new(bars[2].1.x, bars[2].1.y))
    }

    // -------------------------------------------------------------------------
    // Clock
    // -------------------------------------------------------------------------

    /// Top-left anchor of the elapsed-time text.
    pub const fn clock_position(&self) -> Point {
        Point::new(
            SCREEN_WIDTH as i32 - self.padding_time_from_right,
            self.battery_origin.y + self.clock_offset_y,
        )
    }

    // -------------------------------------------------------------------------
    // Mode labels and lamps
    // -------------------------------------------------------------------------

    /// Top-left anchor of the "POLISHER" label.
    pub const fn polish_label_position(&self) -> Point {
        Point::new(self.battery_origin.x, self.divider_y() + self.padding_labels_from_line)
    }

    /// Center of the polisher lamp.
    pub const fn polish_lamp_center(&self) -> Point {
        Point::new(
            self.polish_label_position().x + self.first_lamp_offset,
            self.divider_y() + self.padding_lamp_from_line,
        )
    }

    /// Top-left anchor of the "AUTOMATIC" label: first lamp x doubled plus padding.
    pub const fn auto_label_position(&self) -> Point {
        Point::new(
            2 * self.polish_lamp_center().x + self.padding_between_labels,
            self.polish_label_position().y,
        )
    }

    /// Center of the automatic mode lamp.
    pub const fn auto_lamp_center(&self) -> Point {
        Point::new(
            self.auto_label_position().x + self.second_lamp_offset,
            self.polish_lamp_center().y,
        )
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Verify the layout fits the screen and no widgets collide.
    ///
    /// Meant to run once at startup. Widgets never call this and draw
    /// whatever the layout says.
    pub fn check(&self) -> Result<(), LayoutError> {
        let (battery_tl, battery_br) = self.battery_outline();
        if battery_tl.x <= 0 || battery_tl.y <= 0 || self.bar_width <= 0 || self.lamp_radius == 0 {
            return Err(LayoutError::Degenerate("base unit"));
        }
        ensure_on_screen(battery_br, "battery")?;

        let bars = self.signal_bars();
        for (top_left, bottom_right) in bars {
            if top_left.y < 0 || top_left.y >= bottom_right.y {
                return Err(LayoutError::Degenerate("signal bar"));
            }
            ensure_on_screen(bottom_right, "signal bar")?;
        }
        if bars[0].0.x <= battery_br.x {
            return Err(LayoutError::Overlap("battery", "signal bar"));
        }

        let divider_y = self.divider_y();
        if divider_y <= self.battery_bottom() || divider_y > MAX_Y {
            return Err(LayoutError::OutOfBounds("divider"));
        }
        let path = self.divider_path();
        if path[1].x >= path[2].x {
            return Err(LayoutError::Degenerate("divider"));
        }

        let clock = self.clock_position();
        let clock_br = text_corner(CLOCK_FONT, &format_elapsed(CLOCK_MAX_SECONDS), clock);
        if clock.y < 0 {
            return Err(LayoutError::OutOfBounds("clock"));
        }
        ensure_on_screen(clock_br, "clock")?;
        if clock.x <= self.signal_cluster().1.x {
            return Err(LayoutError::Overlap("signal bar", "clock"));
        }
        // Middle run, then the right diagonal rising to the battery baseline
        if clock_br.y >= divider_y || (clock_br.x >= path[2].x && clock_br.y >= path[3].y) {
            return Err(LayoutError::Overlap("clock", "divider"));
        }

        let radius = self.lamp_radius as i32;
        let polish_label = self.polish_label_position();
        let polish_lamp = self.polish_lamp_center();
        let auto_label = self.auto_label_position();
        let auto_lamp = self.auto_lamp_center();

        if polish_label.y <= divider_y || polish_lamp.y - radius <= divider_y {
            return Err(LayoutError::Overlap("divider", "mode labels"));
        }
        if polish_lamp.x - radius <= text_corner(LABEL_FONT, POLISH_LABEL, polish_label).x {
            return Err(LayoutError::Overlap("polisher label", "polisher lamp"));
        }
        if auto_label.x <= polish_lamp.x + radius {
            return Err(LayoutError::Overlap("polisher lamp", "automatic label"));
        }
        let auto_label_br = text_corner(LABEL_FONT, AUTO_LABEL, auto_label);
        if auto_lamp.x - radius <= auto_label_br.x {
            return Err(LayoutError::Overlap("automatic label", "automatic lamp"));
        }
        ensure_on_screen(auto_label_br, "automatic label")?;
        ensure_on_screen(Point::new(auto_lamp.x + radius, auto_lamp.y + radius), "automatic lamp")?;

        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self { Self::standard() }
}

/// Bottom-right pixel covered by `text` drawn with `font` at `top_left`.
pub fn text_corner(
    font: &MonoFont<'_>,
    text: &str,
    top_left: Point,
) -> Point {
    let advance = (font.character_size.width + font.character_spacing) as i32;
    let width = text.len() as i32 * advance - font.character_spacing as i32;
    Point::new(top_left.x + width - 1, top_left.y + font.character_size.height as i32 - 1)
}

fn ensure_on_screen(
    point: Point,
    what: &'static str,
) -> Result<(), LayoutError> {
    if point.x < 0 || point.y < 0 || point.x > MAX_X || point.y > MAX_Y {
        return Err(LayoutError::OutOfBounds(what));
    }
    Ok(())
}

// =============================================================================
// Layout Errors
// =============================================================================

/// Reason a [`LayoutConfig`] was rejected by [`LayoutConfig::check`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LayoutError {
    /// A widget extends past the 320x240 address space.
    OutOfBounds(&'static str),
    /// Two widgets share pixels.
    Overlap(&'static str, &'static str),
    /// A size or span collapsed to zero or went negative.
    Degenerate(&'static str),
}

impl fmt::Display for LayoutError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::OutOfBounds(what) => write!(f, "{what} is outside the {SCREEN_WIDTH}x{SCREEN_HEIGHT} screen"),
            Self::Overlap(a, b) => write!(f, "{a} overlaps {b}"),
            Self::Degenerate(what) => write!(f, "{what} has no area"),
        }
    }
}
