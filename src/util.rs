// Browser helpers shared by the components.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

pub fn init_logger() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // A second init (hot reload) keeps the first logger.
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Fresh seed for each page load.
pub fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}
