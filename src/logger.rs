use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::LogError;
use crate::event::{render_line, write_line, Event, Sink};
use crate::hook::{Hook, Hooks, TimeHook};
use crate::level::{global_threshold, Level, Threshold};

/// Binds a sink and a sequence of context hooks.
pub struct Logger<W> {
    sink: Sink<W>,
    hooks: Hooks,
    threshold: Arc<Threshold>,
}

impl<W: Write> Logger<W> {
    /// A logger filtered by the process-wide threshold.
    pub fn new(w: W) -> Logger<W> {
        Logger::with_threshold(w, global_threshold())
    }

    pub fn with_threshold(w: W, threshold: Arc<Threshold>) -> Logger<W> {
        Logger {
            sink: Arc::new(Mutex::new(w)),
            hooks: vec![Arc::new(TimeHook) as Arc<dyn Hook>],
            threshold,
        }
    }

    /// Appends a context hook after the ones already present.
    pub fn hook(mut self, hook: impl Hook + 'static) -> Logger<W> {
        self.hooks.push(Arc::new(hook));
        self
    }

    pub fn threshold(&self) -> &Arc<Threshold> {
        &self.threshold
    }

    pub fn debug(&self) -> Event<W> {
        self.event(Level::DEBUG)
    }

    pub fn info(&self) -> Event<W> {
        self.event(Level::INFO)
    }

    pub fn warn(&self) -> Event<W> {
        self.event(Level::WARNING)
    }

    pub fn error(&self) -> Event<W> {
        self.event(Level::ERROR)
    }

    pub fn event(&self, level: Level) -> Event<W> {
        Event::new(
            level,
            Arc::clone(&self.sink),
            self.hooks.clone(),
            Arc::clone(&self.threshold),
        )
    }

    /// Writes `msg` with the logger's own hooks, ignoring the threshold.
    pub fn write(&self, msg: impl AsRef<[u8]>) {
        let _ = self.try_write(msg);
    }

    pub fn try_write(&self, msg: impl AsRef<[u8]>) -> Result<(), LogError> {
        let line = render_line(&self.hooks, msg.as_ref());
        write_line(&self.sink, &line)
    }

    /// Hands the sink back, or `None` while an event still holds it.
    pub fn into_inner(self) -> Option<W> {
        Arc::try_unwrap(self.sink)
            .ok()
            .map(|m| m.into_inner().unwrap_or_else(PoisonError::into_inner))
    }
}
