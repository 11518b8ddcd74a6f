use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::LogError;
use crate::hook::{Hook, Hooks, LevelHook};
use crate::level::{Level, Threshold};

pub(crate) type Sink<W> = Arc<Mutex<W>>;

/// A pending log record for one level.
///
/// Obtained from [`Logger::info`](crate::Logger::info) and friends and consumed
/// by [`Event::msg`]. Cloning an event and emitting both copies writes the
/// line twice.
pub struct Event<W> {
    level: Level,
    sink: Sink<W>,
    hooks: Hooks,
    threshold: Arc<Threshold>,
}

impl<W> Clone for Event<W> {
    fn clone(&self) -> Self {
        Event {
            level: self.level,
            sink: Arc::clone(&self.sink),
            hooks: self.hooks.clone(),
            threshold: Arc::clone(&self.threshold),
        }
    }
}

impl<W: Write> Event<W> {
    pub(crate) fn new(
        level: Level,
        sink: Sink<W>,
        mut hooks: Hooks,
        threshold: Arc<Threshold>,
    ) -> Event<W> {
        hooks.push(Arc::new(LevelHook(level)));
        Event {
            level,
            sink,
            hooks,
            threshold,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether the threshold lets this event through right now.
    pub fn enabled(&self) -> bool {
        self.threshold.enabled(self.level)
    }

    /// Writes the line if the threshold allows it. Sink errors are dropped.
    pub fn msg(self, msg: impl AsRef<[u8]>) {
        let _ = self.try_msg(msg);
    }

    /// Like [`Event::msg`] but reports sink errors. A filtered event is `Ok`.
    pub fn try_msg(self, msg: impl AsRef<[u8]>) -> Result<(), LogError> {
        if !self.enabled() {
            return Ok(());
        }
        let line = render_line(&self.hooks, msg.as_ref());
        write_line(&self.sink, &line)
    }
}

/// `<hook>,<hook>,...,msg: <msg>\n`. Every hook output keeps its trailing comma.
pub(crate) fn render_line(hooks: &[Arc<dyn Hook>], msg: &[u8]) -> Vec<u8> {
    let mut line = Vec::with_capacity(64 + msg.len());
    for hook in hooks {
        line.extend_from_slice(hook.render().as_bytes());
        line.push(b',');
    }
    line.extend_from_slice(b"msg: ");
    line.extend_from_slice(msg);
    line.push(b'\n');
    line
}

// One write per line, under the lock, so concurrent callers never interleave.
pub(crate) fn write_line<W: Write>(sink: &Sink<W>, line: &[u8]) -> Result<(), LogError> {
    let mut w = sink.lock().unwrap_or_else(PoisonError::into_inner);
    w.write_all(line)?;
    w.flush()?;
    Ok(())
}
