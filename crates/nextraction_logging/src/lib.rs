#![deny(missing_docs)]
//! Shared logging utilities for the Nextraction workspace.
//!
//! This crate provides the `nx_*` logging macros used across the codebase,
//! a minimal test initializer for the global logger, and a browser-console
//! logger for the wasm front-ends.

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! nx_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! nx_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! nx_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! nx_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! nx_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

fn default_level() -> log::LevelFilter {
    // Use debug level in debug builds, info in release builds.
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        default_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use log::{Level, Log, Metadata, Record};
    use wasm_bindgen::JsValue;

    /// Forwards log records to the browser developer console.
    pub(crate) struct BrowserConsoleLogger {
        pub(crate) level: log::LevelFilter,
    }

    impl Log for BrowserConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= self.level
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = JsValue::from_str(&format!(
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            ));
            match record.level() {
                Level::Error => web_sys::console::error_1(&line),
                Level::Warn => web_sys::console::warn_1(&line),
                Level::Info => web_sys::console::info_1(&line),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
            }
        }

        fn flush(&self) {}
    }
}

/// Installs the browser-console logger as the global logger.
///
/// Safe to call more than once; later calls are ignored.
#[cfg(target_arch = "wasm32")]
pub fn initialize_for_browser() {
    let level = default_level();
    let logger = Box::new(browser::BrowserConsoleLogger { level });
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}
