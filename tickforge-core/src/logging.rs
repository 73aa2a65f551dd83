//! Log/signal sink contract.
//!
//! Components emit INFO/WARNING/ERROR diagnostics and SIGNAL records through
//! an injected [`LogSink`] trait object rather than a process-wide global,
//! so tests can swap sinks per instance. [`CallbackSink`] carries the host
//! contract: one replaceable callback invoked under a dedicated mutex, with
//! callback panics caught at the boundary and reported to stderr — a failing
//! sink must never corrupt engine state. With no callback registered,
//! records are silently dropped, never buffered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Mutex;

/// Severity of an emitted record. `Signal` marks actionable trade signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Signal,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARNING"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Signal => write!(f, "SIGNAL"),
        }
    }
}

/// Destination for emitted records. Implementations must be safe to call
/// from worker threads.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

/// Drops every record. The default when the host registers nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _level: LogLevel, _message: &str) {}
}

/// Host-supplied callback type.
pub type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + 'static>;

/// Forwards records to a host-registered callback.
///
/// The callback is replaceable at any time via [`CallbackSink::set_callback`]
/// and is always invoked while holding the sink's own mutex, so records are
/// serialized even when emitted from multiple worker threads.
#[derive(Default)]
pub struct CallbackSink {
    callback: Mutex<Option<LogCallback>>,
}

impl CallbackSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: LogCallback) -> Self {
        Self {
            callback: Mutex::new(Some(callback)),
        }
    }

    /// Register or replace the callback.
    pub fn set_callback(&self, callback: LogCallback) {
        let mut guard = self.callback.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(callback);
    }

    /// Remove the callback; subsequent records are dropped.
    pub fn clear_callback(&self) {
        let mut guard = self.callback.lock().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }
}

impl LogSink for CallbackSink {
    fn log(&self, level: LogLevel, message: &str) {
        let guard = self.callback.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(callback) = guard.as_ref() {
            // The callback crosses into host code; a panic there is reported
            // locally and swallowed, never propagated into the engine.
            let outcome = catch_unwind(AssertUnwindSafe(|| callback(level, message)));
            if outcome.is_err() {
                eprintln!("log callback panicked while handling [{level}] {message}");
            }
        }
    }
}

/// Captures records in memory. Used by tests and host diagnostics.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<(LogLevel, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(LogLevel, String)> {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Messages recorded at the given level, in emission order.
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

impl LogSink for MemorySink {
    fn log(&self, level: LogLevel, message: &str) {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((level, message.to_string()));
    }
}
