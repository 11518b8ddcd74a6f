use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI8, Ordering};
use std::sync::{Arc, OnceLock};

use crate::error::ParseLevelError;

/// Severity of a log record.
///
/// Stored as a plain signed integer so that a threshold can hold values that
/// have no name (they simply match nothing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Level(i8);

impl Level {
    pub const DEBUG: Level = Level(0);
    pub const WARNING: Level = Level(1);
    pub const INFO: Level = Level(2);
    pub const ERROR: Level = Level(3);
    pub const DISABLED: Level = Level(-1);

    pub const fn from_i8(value: i8) -> Level {
        Level(value)
    }

    pub const fn as_i8(self) -> i8 {
        self.0
    }

    /// Human readable tag, empty for anything that is not a named level.
    pub fn prefix(self) -> &'static str {
        match self {
            Level::DEBUG => "Debug",
            Level::WARNING => "Warn",
            Level::INFO => "Info",
            Level::ERROR => "Error",
            _ => "",
        }
    }
}

pub fn prefix(level: Level) -> &'static str {
    level.prefix()
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl From<i8> for Level {
    fn from(value: i8) -> Level {
        Level(value)
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Level, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::DEBUG),
            "warn" | "warning" => Ok(Level::WARNING),
            "info" => Ok(Level::INFO),
            "error" => Ok(Level::ERROR),
            "disabled" => Ok(Level::DISABLED),
            _ => s
                .parse::<i8>()
                .map(Level)
                .map_err(|_| ParseLevelError::new(s)),
        }
    }
}

/// Severity gate shared by every event of the loggers holding it.
#[derive(Debug, Default)]
pub struct Threshold(AtomicI8);

impl Threshold {
    pub fn new(level: Level) -> Threshold {
        Threshold(AtomicI8::new(level.0))
    }

    /// Overwrites the threshold. Any value is accepted.
    pub fn set(&self, level: Level) {
        self.0.store(level.0, Ordering::Relaxed);
    }

    pub fn get(&self) -> Level {
        Level(self.0.load(Ordering::Relaxed))
    }

    // Exact match, except DEBUG which lets everything through.
    pub fn enabled(&self, level: Level) -> bool {
        let threshold = self.get();
        threshold == Level::DEBUG || level == threshold
    }
}

static GLOBAL_THRESHOLD: OnceLock<Arc<Threshold>> = OnceLock::new();

/// The process-wide threshold read by loggers created with `Logger::new`.
pub fn global_threshold() -> Arc<Threshold> {
    Arc::clone(GLOBAL_THRESHOLD.get_or_init(|| Arc::new(Threshold::new(Level::DEBUG))))
}

pub fn set_global_threshold(level: Level) {
    global_threshold().set(level);
}
