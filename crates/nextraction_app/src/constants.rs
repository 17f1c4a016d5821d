//! Element ids shared by the renderer, the DOM wiring and the HTML pages.

pub mod admin {
    pub const INPUT_URLS: &str = "urls-input";
    pub const BUTTON_VERIFY: &str = "verify-btn";
    pub const BUTTON_INGEST: &str = "ingest-btn";
    pub const BUTTON_CLEAR: &str = "clear-btn";
    pub const BUTTON_EXAMPLES: &str = "examples-btn";
    pub const BUTTON_TEST_CONNECTION: &str = "test-connection-btn";
    pub const BUTTON_CLEAR_LOG: &str = "clear-log-btn";
    pub const BUTTON_OPEN_CHAT: &str = "open-chat-btn";
    pub const PROGRESS_CONTAINER: &str = "progress-container";
    pub const PROGRESS_BAR: &str = "progress-bar";
    pub const PROGRESS_PERCENT: &str = "progress-percent";
    pub const RESULTS: &str = "results-container";
    pub const SUMMARY: &str = "summary";
    pub const LOG: &str = "activity-log";
    pub const STAT_VECTORS: &str = "vector-count";
    pub const STAT_CHUNKS: &str = "chunk-count";
    pub const STATS_STATUS: &str = "stats-status";
}

pub mod chat {
    pub const MESSAGES: &str = "chat-messages";
    pub const INPUT_QUESTION: &str = "question-input";
    pub const BUTTON_SEND: &str = "send-btn";
    pub const BUTTON_CLEAR: &str = "clear-chat-btn";
    pub const THEME_TOGGLE: &str = "theme-toggle";
    pub const TYPING: &str = "typing-indicator";
    pub const KNOWLEDGE_SIZE: &str = "knowledge-size";
    pub const RESPONSE_TIME: &str = "response-time";
    pub const MESSAGE_COUNT: &str = "message-count";
    pub const CONNECTION_STATUS: &str = "connection-status";
}

/// `<script type="application/ron">` block holding an optional console config.
pub const CONFIG_SCRIPT: &str = "nextraction-config";
