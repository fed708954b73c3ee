//! Pre-computed static text styles.
//!
//! The dashboard draws text with a single placement convention: the position
//! passed to [`Canvas::print`](crate::canvas::Canvas::print) is the top-left
//! corner of the first glyph. `TOP_LEFT` encodes that once as a `const` so no
//! style is built per frame; only the color varies and is applied by the
//! canvas when the text is drawn.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_14_POINT;

/// Left-aligned text hanging below its anchor point.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Small font (6x10 pixels) for the mode labels.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Large font (`ProFont` 14pt) for the elapsed-time readout in the header band.
pub const CLOCK_FONT: &MonoFont = &PROFONT_14_POINT;
