//! Status dashboard for the robot polisher controller.
//!
//! Paints a fixed 320x240 layout from a per-frame snapshot of the controller's
//! readings: battery charge, link quality, elapsed operating time and the two
//! control-mode flags. The binary (`main.rs`, `simulator` feature) drives this
//! library from a desktop window; the controller firmware drives it from its
//! display refresh loop.
//!
//! - [`config`]: Screen size and the immutable [`LayoutConfig`](config::LayoutConfig)
//! - [`canvas`]: Drawing surface trait, embedded-graphics adapter and recorder
//! - [`state`]: Per-frame [`DashboardState`](state::DashboardState)
//! - [`widgets`]: Battery, divider, signal, clock and mode lamp drawing
//! - [`render`]: [`DashboardRenderer`](render::DashboardRenderer) frame sequence
//! - [`log_buffer`] / [`monitor`]: On-device diagnostics
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the firmware build stays `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod canvas;
pub mod config;
pub mod log_buffer;
pub mod monitor;
pub mod render;
pub mod state;
pub mod ui;
pub mod widgets;

// Re-export commonly used items
pub use canvas::{Canvas, DisplayCanvas, RecordingCanvas};
pub use config::{LayoutConfig, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use render::DashboardRenderer;
pub use state::{DashboardState, SignalQuality};
