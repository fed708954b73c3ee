//! Robot polisher dashboard simulator.
//!
//! Plays the part of the controller's display loop on a desktop: samples
//! stand-in sensors, logs state changes and repaints the dashboard every
//! frame into an SDL window.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `B` | Cycle battery level 0, 1, 2, 3, then an out-of-range code |
//! | `N` | Cycle link quality Bad, Medium, Best, Timeout, then an unrecognized code |
//! | `P` | Toggle the polisher flag |
//! | `A` | Toggle the automatic flag |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.
//!
//! ```text
//! ┌──────┐ ▌▌▌                 1:01:01
//! └──────┘ ▌▌▌
//! ╲______________________________________╱
//!  POLISHER (●)      AUTOMATIC (●)
//! ```

use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use polisher_dashboard::log_buffer::{LogBuffer, LogLevel};
use polisher_dashboard::monitor::StateMonitor;
use polisher_dashboard::state::{elapsed_seconds_from_millis, uptime_millis};
use polisher_dashboard::ui::BACKGROUND;
use polisher_dashboard::{
    DashboardRenderer,
    DashboardState,
    DisplayCanvas,
    LayoutConfig,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    SignalQuality,
};

/// Target frame time (20 FPS). The loop sleeps if a frame completes early.
const FRAME_TIME: Duration = Duration::from_millis(50);

/// Battery codes cycled by `B`; the last one is deliberately out of range.
const BATTERY_CODES: u8 = 5;

/// Link codes cycled by `N`; the last one is deliberately unrecognized.
const SIGNAL_CODES: u8 = 5;

fn main() -> ExitCode {
    // Layout is fixed for the process lifetime
    let layout = LayoutConfig::standard();
    if let Err(err) = layout.check() {
        eprintln!("Invalid dashboard layout: {err}");
        return ExitCode::FAILURE;
    }
    let renderer = DashboardRenderer::new(&layout);

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Robot Polisher Dashboard", &output_settings);

    display.clear(BACKGROUND).ok();
    window.update(&display);

    // ==========================================================================
    // Stand-in Sensor State
    // ==========================================================================

    let boot = Instant::now();
    let mut battery_level = 3u8;
    let mut signal_code = 2u8;
    let mut polish = false;
    let mut automatic = false;

    let mut log = LogBuffer::new();
    let mut monitor = StateMonitor::new();
    let mut echoed = 0u32;
    log.push_fmt(LogLevel::Info, 0, format_args!("System started"));

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return ExitCode::SUCCESS,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::B => battery_level = (battery_level + 1) % BATTERY_CODES,
                        Keycode::N => signal_code = (signal_code + 1) % SIGNAL_CODES,
                        Keycode::P => polish = !polish,
                        Keycode::A => automatic = !automatic,
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Snapshot once per frame; the renderer never sees a half-updated state
        let uptime_ms = uptime_millis(boot.elapsed());
        let state = DashboardState {
            battery_level,
            signal: SignalQuality::from_code(signal_code),
            elapsed_seconds: elapsed_seconds_from_millis(uptime_ms),
            polish,
            automatic,
        };

        monitor.observe(&state, uptime_ms, &mut log);
        let fresh = log.total().wrapping_sub(echoed) as usize;
        for entry in log.newest(fresh) {
            eprintln!("{entry}");
        }
        echoed = log.total();

        display.clear(BACKGROUND).ok();
        renderer.render(&mut DisplayCanvas::new(&mut display), &state);
        window.update(&display);

        let render_time = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(render_time) {
            thread::sleep(remaining);
        }
    }
}
