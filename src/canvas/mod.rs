//! Drawing surface abstraction.
//!
//! Widgets talk to a [`Canvas`]: a small, stateful set of pixel primitives
//! with one global "current color". That mirrors the display controllers the
//! dashboard runs on, where the color register is shared by every draw call.
//!
//! - [`DisplayCanvas`]: executes primitives on any `DrawTarget<Color = Rgb565>`
//! - [`RecordingCanvas`]: records primitives for inspection and comparison
//!
//! # Color Discipline
//!
//! The current color is shared mutable state. Every widget selects
//! [`FOREGROUND`](crate::ui::FOREGROUND) before drawing and leaves the canvas in
//! it on exit. Temporary colors go through [`ColorScope`], which restores the
//! previous color when dropped, including on early returns.

mod display;
mod recording;

use core::ops::{Deref, DerefMut};

pub use display::DisplayCanvas;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Point;
pub use recording::{DrawCall, RecordingCanvas};

/// Text size selector for [`Canvas::print`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FontSize {
    /// Mode labels.
    Small,
    /// Elapsed-time readout.
    Large,
}

/// Primitive 2D drawing surface with a current draw color.
///
/// Corner pairs are inclusive pixel coordinates. Circles are given by center
/// and radius. Implementations clip or ignore what they cannot draw; no
/// primitive reports failure.
pub trait Canvas {
    /// Select the color for subsequent primitives.
    fn set_color(
        &mut self,
        color: Rgb565,
    );

    /// Currently selected color.
    fn color(&self) -> Rgb565;

    /// Rectangle outline between two corners.
    fn draw_rect(
        &mut self,
        top_left: Point,
        bottom_right: Point,
    );

    /// Solid rectangle between two corners.
    fn fill_rect(
        &mut self,
        top_left: Point,
        bottom_right: Point,
    );

    /// One-pixel line.
    fn draw_line(
        &mut self,
        start: Point,
        end: Point,
    );

    /// Circle outline.
    fn draw_circle(
        &mut self,
        center: Point,
        radius: u32,
    );

    /// Solid circle.
    fn fill_circle(
        &mut self,
        center: Point,
        radius: u32,
    );

    /// Text whose first glyph's top-left corner sits at `top_left`.
    fn print(
        &mut self,
        text: &str,
        top_left: Point,
        size: FontSize,
    );
}

/// Temporarily switches the canvas color, restoring the previous one on drop.
///
/// Derefs to the wrapped canvas so primitives can be drawn through it.
///
/// ```ignore
/// {
///     let mut red = ColorScope::new(canvas, RED);
///     red.draw_line(a, b);
/// } // previous color restored here
/// ```
pub struct ColorScope<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
    restore: Rgb565,
}

impl<'a, C: Canvas + ?Sized> ColorScope<'a, C> {
    /// Select `color` until the scope is dropped.
    pub fn new(
        canvas: &'a mut C,
        color: Rgb565,
    ) -> Self {
        let restore = canvas.color();
        canvas.set_color(color);
        Self { canvas, restore }
    }
}

impl<C: Canvas + ?Sized> Deref for ColorScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &C { self.canvas }
}

impl<C: Canvas + ?Sized> DerefMut for ColorScope<'_, C> {
    fn deref_mut(&mut self) -> &mut C { self.canvas }
}

impl<C: Canvas + ?Sized> Drop for ColorScope<'_, C> {
    fn drop(&mut self) { self.canvas.set_color(self.restore); }
}
