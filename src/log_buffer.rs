//! Log buffer with levels and timestamps for on-device diagnostics.
//!
//! A fixed-capacity ring of log entries owned by the host loop. When full,
//! the oldest entry is dropped. Nothing allocates, so the same buffer works on
//! the controller and in the desktop simulator.
//!
//! # Log Levels
//!
//! - `Trace`: verbose debugging
//! - `Debug`: debugging information
//! - `Info`: normal operation
//! - `Warn`: bad sensor readings
//! - `Error`: link faults
//!
//! # Usage
//!
//! ```ignore
//! let mut log = LogBuffer::new();
//! log.push_fmt(LogLevel::Warn, now_ms, format_args!("Battery code {} out of range", raw));
//! for entry in log.iter() {
//!     // draw or print entry
//! }
//! ```

use core::fmt::{self, Write};

use heapless::{Deque, String};

/// Maximum number of log entries to keep.
pub const LOG_ENTRIES: usize = 14;

/// Maximum characters per log message.
pub const LOG_MSG_LEN: usize = 40;

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[repr(u8)]
pub enum LogLevel {
    /// Verbose debugging
    Trace = 0,
    /// Debug information
    Debug = 1,
    /// Normal operation
    #[default]
    Info = 2,
    /// Bad sensor readings
    Warn = 3,
    /// Link faults
    Error = 4,
}

impl LogLevel {
    /// Get the single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// A single log entry with level, message, and timestamp.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct LogEntry {
    /// Log severity level.
    pub level: LogLevel,
    /// Log message (truncated to `LOG_MSG_LEN`).
    pub message: String<LOG_MSG_LEN>,
    /// Timestamp in milliseconds since boot.
    pub timestamp_ms: u32,
}

impl LogEntry {
    /// Create a new log entry, truncating long messages.
    pub fn new(
        level: LogLevel,
        message: &str,
        timestamp_ms: u32,
    ) -> Self {
        let mut msg: String<LOG_MSG_LEN> = String::new();
        for c in message.chars() {
            if msg.push(c).is_err() {
                break;
            }
        }
        Self {
            level,
            message: msg,
            timestamp_ms,
        }
    }
}

impl fmt::Display for LogEntry {
    /// `[I] 12.345 message`
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "[{}] {}.{:03} {}",
            self.level.prefix(),
            self.timestamp_ms / 1000,
            self.timestamp_ms % 1000,
            self.message
        )
    }
}

/// Writer that fills a message buffer and silently drops overflow.
struct Truncating<'a>(&'a mut String<LOG_MSG_LEN>);

impl Write for Truncating<'_> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Circular buffer of log entries.
pub struct LogBuffer {
    entries: Deque<LogEntry, LOG_ENTRIES>,
    total: u32,
}

impl LogBuffer {
    /// Create a new empty log buffer.
    pub const fn new() -> Self {
        Self {
            entries: Deque::new(),
            total: 0,
        }
    }

    /// Push a new log entry. Oldest entry is dropped if buffer is full.
    pub fn push(
        &mut self,
        entry: LogEntry,
    ) {
        if self.entries.is_full() {
            self.entries.pop_front();
        }
        // Cannot fail: a slot was freed above.
        let _ = self.entries.push_back(entry);
        self.total = self.total.wrapping_add(1);
    }

    /// Format and push a message.
    pub fn push_fmt(
        &mut self,
        level: LogLevel,
        timestamp_ms: u32,
        args: fmt::Arguments<'_>,
    ) {
        let mut message: String<LOG_MSG_LEN> = String::new();
        let _ = Truncating(&mut message).write_fmt(args);
        self.push(LogEntry {
            level,
            message,
            timestamp_ms,
        });
    }

    /// Get the number of entries in the buffer.
    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Entries pushed since creation, including dropped ones.
    ///
    /// Lets a reader that polls the buffer tell how many entries are new.
    #[inline]
    pub const fn total(&self) -> u32 { self.total }

    /// Iterate over entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> { self.entries.iter() }

    /// The `count` newest entries, oldest first.
    pub fn newest(
        &self,
        count: usize,
    ) -> impl Iterator<Item = &LogEntry> {
        let skip = self.entries.len().saturating_sub(count);
        self.entries.iter().skip(skip)
    }
}

impl Default for LogBuffer {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_prefix_and_order() {
        assert_eq!(LogLevel::Info.prefix(), 'I');
        assert_eq!(LogLevel::Trace.prefix(), 'T');
        assert!(LogLevel::Error > LogLevel::Warn, "Levels are ordered by severity");
    }

    #[test]
    fn test_entry_truncates() {
        let long = "x".repeat(LOG_MSG_LEN + 10);
        let entry = LogEntry::new(LogLevel::Info, &long, 0);
        assert_eq!(entry.message.len(), LOG_MSG_LEN);
    }

    #[test]
    fn test_entry_display() {
        let entry = LogEntry::new(LogLevel::Warn, "Battery code 7", 12_345);
        assert_eq!(entry.to_string(), "[W] 12.345 Battery code 7");
    }

    #[test]
    fn test_push_drops_oldest() {
        let mut log = LogBuffer::new();
        for i in 0..LOG_ENTRIES as u32 + 2 {
            log.push(LogEntry::new(LogLevel::Info, "tick", i));
        }
        assert_eq!(log.len(), LOG_ENTRIES);
        assert_eq!(log.total(), LOG_ENTRIES as u32 + 2);
        assert_eq!(log.iter().next().map(|e| e.timestamp_ms), Some(2), "Two oldest dropped");
    }

    #[test]
    fn test_push_fmt() {
        let mut log = LogBuffer::new();
        log.push_fmt(LogLevel::Error, 5, format_args!("Link {}", "TIMEOUT"));
        let entry = log.iter().next().unwrap();
        assert_eq!(entry.level, LogLevel::Error);
        assert_eq!(entry.message, "Link TIMEOUT");
    }

    #[test]
    fn test_push_fmt_truncates_overflow() {
        let mut log = LogBuffer::new();
        log.push_fmt(LogLevel::Info, 0, format_args!("{}", "y".repeat(100)));
        assert_eq!(log.iter().next().unwrap().message.len(), LOG_MSG_LEN);
    }

    #[test]
    fn test_newest() {
        let mut log = LogBuffer::new();
        for i in 0..5 {
            log.push(LogEntry::new(LogLevel::Debug, "n", i));
        }
        let newest: std::vec::Vec<u32> = log.newest(2).map(|e| e.timestamp_ms).collect();
        assert_eq!(newest, [3, 4]);
        assert_eq!(log.newest(10).count(), 5);
    }
}
