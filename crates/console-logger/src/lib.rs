//! Console Logger
//!
//! Global tracing subscriber for the console and its dev backend. `log`
//! records from the other crates are bridged in by the registry. Layers:
//! - a level filter
//! - `RingLayer`: keeps the most recent formatted lines for a diagnostics view
//! - a sink: the fmt layer on stderr (native) or the browser console (wasm32)

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::Layer;

/// Lines kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

static RING: OnceLock<SharedRing> = OnceLock::new();

pub type SharedRing = Arc<Mutex<LineRing>>;

/// Fixed-size buffer of formatted lines; the oldest line is dropped first
#[derive(Debug)]
pub struct LineRing {
    capacity: usize,
    lines: VecDeque<String>,
}

impl LineRing {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            lines: VecDeque::with_capacity(capacity.max(1)),
        }
    }

    pub fn shared(capacity: usize) -> SharedRing {
        Arc::new(Mutex::new(Self::new(capacity)))
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// ========================
// Event Formatting
// ========================

/// Collects the message, and the original target of bridged `log` records
#[derive(Default)]
struct LineVisitor {
    message: String,
    log_target: Option<String>,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            "log.target" => self.log_target = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

/// `[12:00:01.250] [fwconsole] WARN fwconsole_core::panel: message`
pub fn format_line(time: &str, app_name: &str, level: &Level, target: &str, message: &str) -> String {
    format!("[{}] [{}] {} {}: {}", time, app_name, level, target, message)
}

fn format_event(app_name: &str, event: &Event<'_>) -> String {
    let mut visitor = LineVisitor::default();
    event.record(&mut visitor);
    let metadata = event.metadata();
    let target = visitor.log_target.as_deref().unwrap_or(metadata.target());
    format_line(
        &chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
        app_name,
        metadata.level(),
        target,
        &visitor.message,
    )
}

// ========================
// Layers
// ========================

/// Layer that appends every event to a shared ring
#[derive(Debug)]
pub struct RingLayer {
    app_name: String,
    ring: SharedRing,
}

impl RingLayer {
    pub fn new(app_name: &str, ring: SharedRing) -> Self {
        Self { app_name: app_name.to_string(), ring }
    }
}

impl<S> Layer<S> for RingLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let line = format_event(&self.app_name, event);
        if let Ok(mut ring) = self.ring.lock() {
            ring.push(line);
        }
    }
}

/// Layer writing each event to the browser console at its level
#[cfg(target_arch = "wasm32")]
struct BrowserConsoleLayer {
    app_name: String,
}

#[cfg(target_arch = "wasm32")]
impl<S> Layer<S> for BrowserConsoleLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        use wasm_bindgen::JsValue;
        use web_sys::console;

        let value = JsValue::from_str(&format_event(&self.app_name, event));
        match *event.metadata().level() {
            Level::ERROR => console::error_1(&value),
            Level::WARN => console::warn_1(&value),
            Level::INFO => console::info_1(&value),
            _ => console::debug_1(&value),
        }
    }
}

// ========================
// Installation
// ========================

/// Tracing filter for a `log` level
pub fn level_filter(level: log::LevelFilter) -> LevelFilter {
    match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Fails if one is already set.
pub fn init_logger(app_name: &str, level: log::LevelFilter) -> Result<(), TryInitError> {
    let ring = RING.get_or_init(|| LineRing::shared(DEFAULT_CAPACITY)).clone();
    let registry = tracing_subscriber::registry()
        .with(level_filter(level))
        .with(RingLayer::new(app_name, ring));

    #[cfg(target_arch = "wasm32")]
    let registry = registry.with(BrowserConsoleLayer { app_name: app_name.to_string() });

    #[cfg(not(target_arch = "wasm32"))]
    let registry = registry.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    registry.try_init()
}

/// Most recent lines, oldest first; empty before `init_logger`
pub fn recent_lines() -> Vec<String> {
    RING.get()
        .and_then(|ring| ring.lock().ok().map(|ring| ring.snapshot()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(level: LevelFilter, emit: impl FnOnce()) -> Vec<String> {
        let ring = LineRing::shared(10);
        let subscriber = tracing_subscriber::registry()
            .with(level)
            .with(RingLayer::new("test", ring.clone()));
        tracing::subscriber::with_default(subscriber, emit);
        let lines = ring.lock().unwrap().snapshot();
        lines
    }

    #[test]
    fn test_ring_drops_oldest() {
        let mut ring = LineRing::new(3);
        for i in 0..5 {
            ring.push(format!("line {}", i));
        }
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.snapshot(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_ring_zero_capacity_keeps_one() {
        let mut ring = LineRing::new(0);
        ring.push("a".into());
        ring.push("b".into());
        assert_eq!(ring.snapshot(), vec!["b"]);
    }

    #[test]
    fn test_format_line() {
        let line = format_line("12:00:01.250", "fwconsole", &Level::WARN, "fwconsole_core::panel", "stale list");
        assert_eq!(line, "[12:00:01.250] [fwconsole] WARN fwconsole_core::panel: stale list");
    }

    #[test]
    fn test_ring_layer_keeps_enabled_levels_only() {
        let lines = capture(LevelFilter::INFO, || {
            tracing::debug!(target: "t", "hidden");
            tracing::warn!(target: "t", "shown {}", 1);
        });
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("[test] WARN t: shown 1"), "{}", lines[0]);
    }

    #[test]
    fn test_bridged_records_keep_their_target() {
        let lines = capture(LevelFilter::DEBUG, || {
            tracing::info!(target: "log", { log.target = "fwconsole_core::panel" }, "loaded 2 localities");
        });
        assert!(lines[0].ends_with("INFO fwconsole_core::panel: loaded 2 localities"), "{}", lines[0]);
    }

    #[test]
    fn test_level_filter_mapping() {
        assert_eq!(level_filter(log::LevelFilter::Warn), LevelFilter::WARN);
        assert_eq!(level_filter(log::LevelFilter::Off), LevelFilter::OFF);
    }
}
