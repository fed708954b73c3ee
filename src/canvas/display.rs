//! [`Canvas`] adapter over embedded-graphics draw targets.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use super::{Canvas, FontSize};
use crate::ui::{CLOCK_FONT, FOREGROUND, LABEL_FONT, TOP_LEFT};

/// Executes canvas primitives on a `DrawTarget<Color = Rgb565>`.
///
/// Works with the simulator window, an in-memory framebuffer or a panel
/// driver alike. Errors from the target are discarded: a failed SPI write
/// loses pixels, never the frame.
pub struct DisplayCanvas<'a, D> {
    target: &'a mut D,
    color: Rgb565,
}

impl<'a, D> DisplayCanvas<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Wrap a draw target. The current color starts as the foreground.
    pub fn new(target: &'a mut D) -> Self {
        Self {
            target,
            color: FOREGROUND,
        }
    }

    #[inline]
    const fn stroke(&self) -> PrimitiveStyle<Rgb565> { PrimitiveStyle::with_stroke(self.color, 1) }

    #[inline]
    const fn fill(&self) -> PrimitiveStyle<Rgb565> { PrimitiveStyle::with_fill(self.color) }
}

/// Diameter of a circle with the given radius, center pixel included.
#[inline]
const fn diameter(radius: u32) -> u32 { 2 * radius + 1 }

impl<D> Canvas for DisplayCanvas<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn set_color(
        &mut self,
        color: Rgb565,
    ) {
        self.color = color;
    }

    fn color(&self) -> Rgb565 { self.color }

    fn draw_rect(
        &mut self,
        top_left: Point,
        bottom_right: Point,
    ) {
        Rectangle::with_corners(top_left, bottom_right)
            .into_styled(self.stroke())
            .draw(&mut *self.target)
            .ok();
    }

    fn fill_rect(
        &mut self,
        top_left: Point,
        bottom_right: Point,
    ) {
        Rectangle::with_corners(top_left, bottom_right)
            .into_styled(self.fill())
            .draw(&mut *self.target)
            .ok();
    }

    fn draw_line(
        &mut self,
        start: Point,
        end: Point,
    ) {
        Line::new(start, end)
            .into_styled(self.stroke())
            .draw(&mut *self.target)
            .ok();
    }

    fn draw_circle(
        &mut self,
        center: Point,
        radius: u32,
    ) {
        Circle::with_center(center, diameter(radius))
            .into_styled(self.stroke())
            .draw(&mut *self.target)
            .ok();
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: u32,
    ) {
        Circle::with_center(center, diameter(radius))
            .into_styled(self.fill())
            .draw(&mut *self.target)
            .ok();
    }

    fn print(
        &mut self,
        text: &str,
        top_left: Point,
        size: FontSize,
    ) {
        let font = match size {
            FontSize::Small => LABEL_FONT,
            FontSize::Large => CLOCK_FONT,
        };
        Text::with_text_style(text, top_left, MonoTextStyle::new(font, self.color), TOP_LEFT)
            .draw(&mut *self.target)
            .ok();
    }
}
