//! Event and log callback system.
//!
//! The controller reports what it does through two process-global hooks:
//! a log callback for diagnostics and an event callback for the caret-cache
//! lifecycle. Both are no-ops until a callback is installed.

use std::sync::{Mutex, OnceLock, PoisonError};

/// Event emitted when a caret offset is cached on blur.
pub const CARET_CACHED: &str = "caret_cached";
/// Event emitted when a cached caret offset expires unused.
pub const CARET_CACHE_EXPIRED: &str = "caret_cache_expired";
/// Event emitted when a name is spliced in through an insert trigger.
pub const NAME_INSERTED: &str = "name_inserted";

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type EventCallback = Box<dyn Fn(&str, &str) + Send + Sync + 'static>;
type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn event_callback() -> &'static Mutex<Option<EventCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<EventCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global event callback.
pub fn set_event_callback<F>(callback: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    let mut guard = event_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Some(Box::new(callback));
}

/// Remove the global event callback.
pub fn clear_event_callback() {
    let mut guard = event_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// Emit an event to the registered callback.
pub fn emit_event(name: &str, data: &str) {
    if let Ok(guard) = event_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(name, data);
        }
    }
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    let mut guard = log_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Some(Box::new(callback));
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    let mut guard = log_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// Emit a log event.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Callbacks are process-global; exercise them from a single test so
    // parallel test threads do not race on the registration.
    #[test]
    fn test_callbacks() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let called = Arc::new(AtomicBool::new(false));
        let called_clone = Arc::clone(&called);
        set_event_callback(move |name, data| {
            if name == "unit_test_event" {
                assert_eq!(data, "offset=5");
                called_clone.store(true, Ordering::SeqCst);
            }
        });
        emit_event("unit_test_event", "offset=5");
        assert!(called.load(Ordering::SeqCst));
        clear_event_callback();

        let logged = Arc::new(AtomicBool::new(false));
        let logged_clone = Arc::clone(&logged);
        set_log_callback(move |level, msg| {
            if msg == "unit_test_log" {
                assert_eq!(level, LogLevel::Info);
                logged_clone.store(true, Ordering::SeqCst);
            }
        });
        emit_log(LogLevel::Info, "unit_test_log");
        assert!(logged.load(Ordering::SeqCst));
        clear_log_callback();
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Warn);
        assert!(LogLevel::Error > LogLevel::Info);
    }
}
