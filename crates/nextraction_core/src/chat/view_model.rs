use crate::chat::{ChatMessage, ChatState, Connection, Role};
use crate::{escape_html, format_assistant_text, StatsStatus, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatViewModel {
    pub input: String,
    pub send_enabled: bool,
    pub typing: bool,
    pub messages: Vec<MessageView>,
    pub message_count: u32,
    /// Last measured response time, e.g. `"1.2s"`.
    pub last_latency: Option<String>,
    pub knowledge: KnowledgeView,
    pub connection: Connection,
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeView {
    pub status: StatsStatus,
    pub vectors: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub role: Role,
    /// Escaped markup, safe to insert as HTML.
    pub body_html: String,
    pub meta: String,
    pub author: &'static str,
}

pub(crate) fn build(state: &ChatState) -> ChatViewModel {
    ChatViewModel {
        input: state.input().to_string(),
        send_enabled: !state.input().trim().is_empty() && !state.is_awaiting_answer(),
        typing: state.is_awaiting_answer(),
        messages: state.transcript().iter().map(message_view).collect(),
        message_count: state.message_count(),
        last_latency: state.last_latency().map(format_seconds),
        knowledge: KnowledgeView {
            status: state.stats().status(),
            vectors: state.stats().displayed(),
        },
        connection: state.connection(),
        theme: state.theme(),
    }
}

fn message_view(message: &ChatMessage) -> MessageView {
    let time = message.at.format("%H:%M").to_string();
    match message.role {
        Role::User => MessageView {
            role: Role::User,
            body_html: escape_html(&message.text),
            meta: time,
            author: "You",
        },
        Role::Assistant => MessageView {
            role: Role::Assistant,
            body_html: format_assistant_text(&message.text),
            meta: match message.latency_secs {
                Some(latency) if latency > 0.0 => {
                    format!("{time} • {}", format_seconds(latency))
                }
                _ => time,
            },
            author: "Assistant",
        },
    }
}

fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.1}s")
}
