//! Per-frame dashboard snapshot and the discretized sensor readings it carries.
//!
//! The host loop samples its collaborators (battery ADC, radio link, uptime
//! clock, mode switches) into a fresh [`DashboardState`] before every frame.
//! Nothing here is retained between frames.
//!
//! # Raw Readings
//!
//! Readings keep their raw shape so a bad sample still reaches the renderer:
//! - `battery_level` is the sensor's integer code; only `0..=3` map to a
//!   [`BatteryLevel`], anything else draws an empty battery outline.
//! - `signal` is `None` when the link code was not one of the four known
//!   [`SignalQuality`] values, which draws no bars.

use core::time::Duration;

// =============================================================================
// Battery Level
// =============================================================================

/// Quantized battery charge, as reported by the battery sensor.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum BatteryLevel {
    /// Close to the critical minimum charge.
    Critical = 0,
    /// About one third charged.
    OneThird = 1,
    /// About two thirds charged.
    TwoThirds = 2,
    /// Fully charged.
    Full = 3,
}

impl BatteryLevel {
    /// Map a raw sensor code. Codes outside `0..=3` are not a level.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Critical),
            1 => Some(Self::OneThird),
            2 => Some(Self::TwoThirds),
            3 => Some(Self::Full),
            _ => None,
        }
    }

    /// Battery fill width in base units: 1 for critical up to 4 for full.
    #[inline]
    pub const fn fill_units(self) -> i32 { self as i32 + 1 }
}

// =============================================================================
// Signal Quality
// =============================================================================

/// Link quality reported by the radio.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SignalQuality {
    /// Weak link, one bar.
    Bad,
    /// Usable link, two bars.
    Medium,
    /// Strong link, three bars.
    Best,
    /// No answer from the remote end. Drawn as three bars under a red cross.
    Timeout,
}

impl SignalQuality {
    /// Map a raw link code (0 = bad, 1 = medium, 2 = best, 3 = timeout).
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Bad),
            1 => Some(Self::Medium),
            2 => Some(Self::Best),
            3 => Some(Self::Timeout),
            _ => None,
        }
    }

    /// Number of bars drawn for this quality.
    pub const fn bar_count(self) -> usize {
        match self {
            Self::Bad => 1,
            Self::Medium => 2,
            Self::Best | Self::Timeout => 3,
        }
    }

    /// Whether this reading is a link fault rather than a strength.
    #[inline]
    pub const fn is_fault(self) -> bool { matches!(self, Self::Timeout) }

    /// Short name for logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bad => "BAD",
            Self::Medium => "MEDIUM",
            Self::Best => "BEST",
            Self::Timeout => "TIMEOUT",
        }
    }
}

// =============================================================================
// Dashboard State
// =============================================================================

/// Values rendered in one frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DashboardState {
    /// Raw battery level code, `0..=3` when valid.
    pub battery_level: u8,
    /// Link quality, `None` for an unrecognized reading.
    pub signal: Option<SignalQuality>,
    /// Seconds since the controller started.
    pub elapsed_seconds: u32,
    /// Manual polisher running.
    pub polish: bool,
    /// Automatic mode engaged.
    pub automatic: bool,
}

impl DashboardState {
    /// Decoded battery level, if the raw code is valid.
    #[inline]
    pub const fn battery(&self) -> Option<BatteryLevel> { BatteryLevel::from_raw(self.battery_level) }
}

/// Whole seconds from the controller's millisecond uptime clock.
#[inline]
pub const fn elapsed_seconds_from_millis(millis: u32) -> u32 { millis / 1000 }

/// Uptime in milliseconds, held at `u32::MAX` instead of wrapping.
///
/// Keeps the elapsed counter monotonic on hosts that run past 49.7 days.
#[inline]
pub fn uptime_millis(uptime: Duration) -> u32 { u32::try_from(uptime.as_millis()).unwrap_or(u32::MAX) }

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // BatteryLevel Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_battery_level_from_raw() {
        assert_eq!(BatteryLevel::from_raw(0), Some(BatteryLevel::Critical));
        assert_eq!(BatteryLevel::from_raw(1), Some(BatteryLevel::OneThird));
        assert_eq!(BatteryLevel::from_raw(2), Some(BatteryLevel::TwoThirds));
        assert_eq!(BatteryLevel::from_raw(3), Some(BatteryLevel::Full));
    }

    #[test]
    fn test_battery_level_out_of_range() {
        for raw in [4, 7, 100, u8::MAX] {
            assert_eq!(BatteryLevel::from_raw(raw), None, "Code {raw} should not be a level");
        }
    }

    #[test]
    fn test_battery_fill_units() {
        assert_eq!(BatteryLevel::Critical.fill_units(), 1, "Critical still shows a sliver");
        assert_eq!(BatteryLevel::OneThird.fill_units(), 2);
        assert_eq!(BatteryLevel::TwoThirds.fill_units(), 3);
        assert_eq!(BatteryLevel::Full.fill_units(), 4);
    }

    // -------------------------------------------------------------------------
    // SignalQuality Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_signal_from_code() {
        assert_eq!(SignalQuality::from_code(0), Some(SignalQuality::Bad));
        assert_eq!(SignalQuality::from_code(1), Some(SignalQuality::Medium));
        assert_eq!(SignalQuality::from_code(2), Some(SignalQuality::Best));
        assert_eq!(SignalQuality::from_code(3), Some(SignalQuality::Timeout));
        assert_eq!(SignalQuality::from_code(4), None);
    }

    #[test]
    fn test_signal_bar_count() {
        assert_eq!(SignalQuality::Bad.bar_count(), 1);
        assert_eq!(SignalQuality::Medium.bar_count(), 2);
        assert_eq!(SignalQuality::Best.bar_count(), 3);
        assert_eq!(SignalQuality::Timeout.bar_count(), 3);
    }

    #[test]
    fn test_timeout_is_distinct_from_best() {
        assert!(SignalQuality::Timeout.is_fault());
        assert!(!SignalQuality::Best.is_fault(), "Full signal is not a fault");
        assert_eq!(
            SignalQuality::Best.bar_count(),
            SignalQuality::Timeout.bar_count(),
            "Both draw three bars; only the overlay tells them apart"
        );
    }

    // -------------------------------------------------------------------------
    // DashboardState Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_state_battery_decode() {
        let mut state = DashboardState {
            battery_level: 2,
            ..DashboardState::default()
        };
        assert_eq!(state.battery(), Some(BatteryLevel::TwoThirds));
        state.battery_level = 9;
        assert_eq!(state.battery(), None);
    }

    #[test]
    fn test_elapsed_seconds_from_millis() {
        assert_eq!(elapsed_seconds_from_millis(0), 0);
        assert_eq!(elapsed_seconds_from_millis(999), 0, "Partial seconds are dropped");
        assert_eq!(elapsed_seconds_from_millis(3_661_500), 3661);
    }

    #[test]
    fn test_uptime_millis_saturates() {
        assert_eq!(uptime_millis(Duration::from_millis(1500)), 1500);
        assert_eq!(uptime_millis(Duration::from_millis(u64::from(u32::MAX))), u32::MAX);
        let fifty_days = Duration::from_secs(50 * 24 * 3600);
        assert_eq!(uptime_millis(fifty_days), u32::MAX, "Uptime past the u32 range holds instead of wrapping");
        assert!(
            elapsed_seconds_from_millis(uptime_millis(fifty_days))
                >= elapsed_seconds_from_millis(uptime_millis(Duration::from_secs(49 * 24 * 3600))),
            "Elapsed seconds never go backwards"
        );
    }
}
