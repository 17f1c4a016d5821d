use chrono::NaiveTime;
use serde_json::Value;

use crate::admin::view_model::{self, AdminViewModel};
use crate::{
    ActivityLevel, ActivityLog, ConsoleConfig, IngestReport, ProgressBar, StatsPanel,
    VerificationResult,
};

/// Sample URLs offered by "load examples".
pub const EXAMPLE_URLS: [&str; 5] = [
    "https://example.com",
    "https://fr.wikipedia.org/wiki/Python",
    "https://docs.python.org/3/tutorial/",
    "https://fr.wikipedia.org/wiki/Intelligence_artificielle",
    "https://httpbin.org/html",
];

/// Request currently holding the trigger controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Verify,
    Ingest,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultsPanel {
    #[default]
    Empty,
    Verification(Vec<VerificationResult>),
    Ingestion(IngestReport),
    /// Valid JSON with an unexpected shape, pretty-printed.
    Malformed { operation: Operation, raw: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminState {
    config: ConsoleConfig,
    input: String,
    in_flight: Option<Operation>,
    progress: ProgressBar,
    results: ResultsPanel,
    stats: StatsPanel,
    log: ActivityLog,
    dirty: bool,
}

impl Default for AdminState {
    fn default() -> Self {
        Self::new(ConsoleConfig::default())
    }
}

impl AdminState {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            config,
            input: String::new(),
            in_flight: None,
            progress: ProgressBar::default(),
            results: ResultsPanel::Empty,
            stats: StatsPanel::default(),
            log: ActivityLog::default(),
            dirty: false,
        }
    }

    pub fn view(&self) -> AdminViewModel {
        view_model::build(self)
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn in_flight(&self) -> Option<Operation> {
        self.in_flight
    }

    pub fn progress(&self) -> &ProgressBar {
        &self.progress
    }

    pub fn results(&self) -> &ResultsPanel {
        &self.results
    }

    pub fn stats(&self) -> &StatsPanel {
        &self.stats
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    /// Returns whether the view changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.mark_dirty();
        }
    }

    pub(crate) fn log_entry(&mut self, now: NaiveTime, level: ActivityLevel, message: String) {
        self.log.push(now, level, message);
        self.mark_dirty();
    }

    pub(crate) fn clear_log(&mut self, now: NaiveTime) {
        self.log.clear(now);
        self.mark_dirty();
    }

    pub(crate) fn acquire(&mut self, operation: Operation) {
        self.in_flight = Some(operation);
        self.mark_dirty();
    }

    /// Gives the trigger controls back. Runs on every exit path of a flow.
    pub(crate) fn release(&mut self) {
        self.in_flight = None;
        self.mark_dirty();
    }

    pub(crate) fn set_results(&mut self, results: ResultsPanel) {
        self.results = results;
        self.mark_dirty();
    }

    pub(crate) fn set_malformed(&mut self, operation: Operation, raw: &Value) {
        let raw = serde_json::to_string_pretty(raw).unwrap_or_else(|_| raw.to_string());
        self.set_results(ResultsPanel::Malformed { operation, raw });
    }

    pub(crate) fn progress_mut(&mut self) -> &mut ProgressBar {
        self.mark_dirty();
        &mut self.progress
    }

    pub(crate) fn stats_mut(&mut self) -> &mut StatsPanel {
        self.mark_dirty();
        &mut self.stats
    }
}
