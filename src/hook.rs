use std::fmt;
use std::sync::Arc;

use crate::level::Level;
use crate::utils::datetime_format;

/// Produces one `key=value` fragment of a log line.
///
/// Hooks run every time a line is rendered, in the order they were added, so
/// they are free to read the clock or any other ambient state.
pub trait Hook: Send + Sync {
    fn render(&self) -> String;
}

impl<F> Hook for F
where
    F: Fn() -> String + Send + Sync,
{
    fn render(&self) -> String {
        self()
    }
}

pub type Hooks = Vec<Arc<dyn Hook>>;

/// `time=YYYY-MM-DD HH:MM:SS` on the local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeHook;

impl Hook for TimeHook {
    fn render(&self) -> String {
        format!("time={}", datetime_format::now())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LevelHook(pub Level);

impl Hook for LevelHook {
    fn render(&self) -> String {
        format!("level={}", self.0.prefix())
    }
}

/// A constant `key=value` pair.
#[derive(Debug, Clone)]
pub struct FieldHook {
    rendered: String,
}

impl FieldHook {
    pub fn new(key: impl fmt::Display, value: impl fmt::Display) -> FieldHook {
        FieldHook {
            rendered: format!("{}={}", key, value),
        }
    }
}

impl Hook for FieldHook {
    fn render(&self) -> String {
        self.rendered.clone()
    }
}
