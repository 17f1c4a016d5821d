//! Browser glue: DOM events in, DOM commands out, timers and fetches in
//! between. Everything here runs on the single UI thread.
mod admin;
mod chat;
mod dom;
mod storage;

use std::cell::RefCell;
use std::collections::HashMap;

use gloo_timers::callback::{Interval, Timeout};
use nextraction_core::{ConsoleConfig, TickerKind};
use nextraction_logging::{nx_info, nx_warn};

use crate::constants::CONFIG_SCRIPT;

pub use admin::run_admin;
pub use chat::run_chat;

fn install_hooks() {
    console_error_panic_hook::set_once();
    nextraction_logging::initialize_for_browser();
}

/// Reads the optional RON block embedded in the page. A broken block is
/// logged and ignored.
fn load_config() -> ConsoleConfig {
    let Some(text) = dom::document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(CONFIG_SCRIPT))
        .and_then(|node| node.text_content())
        .filter(|text| !text.trim().is_empty())
    else {
        return ConsoleConfig::default();
    };
    match ConsoleConfig::from_ron(&text) {
        Ok(config) => {
            nx_info!("Loaded console config, api_base={}", config.api_base);
            config
        }
        Err(err) => {
            nx_warn!("Ignoring page config: {}", err);
            ConsoleConfig::default()
        }
    }
}

/// Running animation timers, one per kind.
#[derive(Default)]
struct Tickers {
    running: RefCell<HashMap<TickerKind, Interval>>,
}

impl Tickers {
    fn start(&self, kind: TickerKind, interval: Interval) {
        let previous = self.running.borrow_mut().insert(kind, interval);
        retire(previous);
    }

    fn stop(&self, kind: TickerKind) {
        let previous = self.running.borrow_mut().remove(&kind);
        retire(previous);
    }
}

/// Clears the timer now but frees its callback on the next turn of the event
/// loop: a ticker may be stopped from inside its own callback.
fn retire(interval: Option<Interval>) {
    if let Some(interval) = interval {
        let callback = interval.cancel();
        Timeout::new(0, move || drop(callback)).forget();
    }
}
