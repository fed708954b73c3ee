//! State change logging.
//!
//! [`StateMonitor`] watches successive [`DashboardState`] snapshots and writes
//! a log entry whenever a reading changes. Rendering never looks at it; it
//! only feeds the [`LogBuffer`].
//!
//! | Change | Level |
//! |--------|-------|
//! | Battery level | Info |
//! | Battery code out of range | Warn |
//! | Link quality | Info |
//! | Link timeout | Error |
//! | Link reading unrecognized | Warn |
//! | Mode flag toggled | Info |
//! | Uptime crossed an hour | Debug |

use crate::log_buffer::{LogBuffer, LogLevel};
use crate::state::{BatteryLevel, DashboardState, SignalQuality};

const SECS_PER_HOUR: u32 = 3600;

/// Remembers the previous snapshot to detect changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct StateMonitor {
    previous: Option<DashboardState>,
}

impl StateMonitor {
    /// Create a monitor that has not seen any state yet.
    pub const fn new() -> Self { Self { previous: None } }

    /// Compare `state` with the previous snapshot and log differences.
    ///
    /// The first observation logs every reading. Returns the number of
    /// entries written.
    pub fn observe(
        &mut self,
        state: &DashboardState,
        timestamp_ms: u32,
        log: &mut LogBuffer,
    ) -> usize {
        let before = log.total();
        let previous = self.previous.replace(*state);

        if previous.map(|p| p.battery_level) != Some(state.battery_level) {
            log_battery(log, timestamp_ms, state.battery_level);
        }

        if previous.map(|p| p.signal) != Some(state.signal) {
            log_signal(log, timestamp_ms, state.signal);
        }

        if previous.map(|p| p.polish) != Some(state.polish) {
            log.push_fmt(LogLevel::Info, timestamp_ms, format_args!("Polisher {}", on_off(state.polish)));
        }

        if previous.map(|p| p.automatic) != Some(state.automatic) {
            log.push_fmt(LogLevel::Info, timestamp_ms, format_args!("Automatic {}", on_off(state.automatic)));
        }

        if let Some(previous) = previous {
            let hours = state.elapsed_seconds / SECS_PER_HOUR;
            if hours > previous.elapsed_seconds / SECS_PER_HOUR {
                log.push_fmt(LogLevel::Debug, timestamp_ms, format_args!("Uptime {hours}h"));
            }
        }

        log.total().wrapping_sub(before) as usize
    }
}

fn log_battery(
    log: &mut LogBuffer,
    timestamp_ms: u32,
    raw: u8,
) {
    match BatteryLevel::from_raw(raw) {
        Some(level) => log.push_fmt(LogLevel::Info, timestamp_ms, format_args!("Battery {}/3", level as u8)),
        None => log.push_fmt(LogLevel::Warn, timestamp_ms, format_args!("Battery code {raw} out of range")),
    }
}

fn log_signal(
    log: &mut LogBuffer,
    timestamp_ms: u32,
    signal: Option<SignalQuality>,
) {
    match signal {
        Some(quality) if quality.is_fault() => {
            log.push_fmt(LogLevel::Error, timestamp_ms, format_args!("Link {}", quality.label()));
        }
        Some(quality) => log.push_fmt(LogLevel::Info, timestamp_ms, format_args!("Link {}", quality.label())),
        None => log.push_fmt(LogLevel::Warn, timestamp_ms, format_args!("Link reading unrecognized")),
    }
}

#[inline]
const fn on_off(flag: bool) -> &'static str { if flag { "ON" } else { "OFF" } }
