//! Nextraction core: pure view-state machines for the admin console and the
//! chat client, plus the formatting helpers both views share.
mod activity;
pub mod admin;
pub mod chat;
mod config;
mod html;
mod markdown;
mod progress;
mod settings;
mod stats;
mod ticker;
mod types;
mod url_list;

pub use activity::{ActivityEntry, ActivityLevel, ActivityLog};
pub use config::{ConfigError, ConsoleConfig};
pub use html::{el, escape_html, text_el, Node, UiElement};
pub use markdown::format_assistant_text;
pub use progress::{ProgressBar, ProgressStep};
pub use settings::{MemorySettingsStore, SettingsError, SettingsStore, Theme, THEME_KEY};
pub use stats::{CountUp, StatsPanel, StatsStatus};
pub use ticker::TickerKind;
pub use types::{
    ApiCall, ApiReply, FailureKind, IngestItem, IngestReport, Ingestion, RequestFailure,
    StatsSnapshot, Verification, VerificationResult, INGEST_SUCCESS,
};
pub use url_list::{parse_url_list, ParsedUrls};
