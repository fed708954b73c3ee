//! Application configuration.
//!
//! - `layout`: Display dimensions and the immutable dashboard layout

pub mod layout;

// Re-export layout items at config level for convenience
pub use layout::{
    AUTO_LABEL,
    Corners,
    LayoutConfig,
    LayoutError,
    POLISH_LABEL,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    text_corner,
};
