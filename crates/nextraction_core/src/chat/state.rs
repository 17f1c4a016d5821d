use chrono::NaiveTime;

use crate::chat::view_model::{self, ChatViewModel};
use crate::{ConsoleConfig, StatsPanel, Theme};

pub const WELCOME: &str =
    "Hello! I answer questions using the documents indexed in the knowledge base. Ask away.";
pub const APOLOGY: &str = "Sorry, something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub at: NaiveTime,
    pub latency_secs: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connection {
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatState {
    config: ConsoleConfig,
    input: String,
    transcript: Vec<ChatMessage>,
    awaiting_answer: bool,
    message_count: u32,
    last_latency: Option<f64>,
    stats: StatsPanel,
    connection: Connection,
    theme: Theme,
    dirty: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(ConsoleConfig::default(), Theme::default(), NaiveTime::MIN)
    }
}

impl ChatState {
    /// Starts a transcript holding only the welcome message.
    pub fn new(config: ConsoleConfig, theme: Theme, now: NaiveTime) -> Self {
        Self {
            config,
            input: String::new(),
            transcript: vec![ChatMessage {
                role: Role::Assistant,
                text: WELCOME.to_string(),
                at: now,
                latency_secs: None,
            }],
            awaiting_answer: false,
            message_count: 0,
            last_latency: None,
            stats: StatsPanel::default(),
            connection: Connection::Unknown,
            theme,
            dirty: true,
        }
    }

    pub fn view(&self) -> ChatViewModel {
        view_model::build(self)
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Single-flight guard; the typing indicator is shown while set.
    pub fn is_awaiting_answer(&self) -> bool {
        self.awaiting_answer
    }

    pub fn message_count(&self) -> u32 {
        self.message_count
    }

    pub fn last_latency(&self) -> Option<f64> {
        self.last_latency
    }

    pub fn stats(&self) -> &StatsPanel {
        &self.stats
    }

    pub fn connection(&self) -> Connection {
        self.connection
    }

    pub fn theme(&self) -> Theme {
        self.theme
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

    pub(crate) fn push_user(&mut self, text: String, now: NaiveTime) {
        self.transcript.push(ChatMessage {
            role: Role::User,
            text,
            at: now,
            latency_secs: None,
        });
        self.message_count += 1;
        self.mark_dirty();
    }

    pub(crate) fn push_assistant(&mut self, text: String, latency_secs: f64, now: NaiveTime) {
        self.transcript.push(ChatMessage {
            role: Role::Assistant,
            text,
            at: now,
            latency_secs: Some(latency_secs),
        });
        self.mark_dirty();
    }

    pub(crate) fn set_awaiting_answer(&mut self, awaiting: bool) {
        self.awaiting_answer = awaiting;
        self.mark_dirty();
    }

    pub(crate) fn set_last_latency(&mut self, latency_secs: f64) {
        self.last_latency = Some(latency_secs);
        self.mark_dirty();
    }

    /// Truncates to the welcome message and resets the counter.
    pub(crate) fn reset_transcript(&mut self) {
        self.transcript.truncate(1);
        self.message_count = 0;
        self.mark_dirty();
    }

    pub(crate) fn set_connection(&mut self, connection: Connection) {
        if self.connection != connection {
            self.connection = connection;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.mark_dirty();
    }

    pub(crate) fn stats_mut(&mut self) -> &mut StatsPanel {
        self.mark_dirty();
        &mut self.stats
    }
}
