use nextraction_core::admin::{
    AdminViewModel, IngestRow, IngestSummary, ResultsView, StatsView, VerificationRow,
    VerificationSummary,
};
use nextraction_core::chat::{ChatViewModel, Connection, KnowledgeView, MessageView, Role};
use nextraction_core::{el, text_el, ActivityEntry, Node, StatsStatus, UiElement};

use crate::constants::{admin as admin_ids, chat as chat_ids};

const LIGHT_THEME_CLASS: &str = "theme-light";

/// One DOM mutation. The platform applies these in order and skips the ones
/// that would not change anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomCommand {
    SetText { id: &'static str, text: String },
    SetHtml { id: &'static str, html: String },
    SetValue { id: &'static str, value: String },
    SetEnabled { id: &'static str, enabled: bool },
    SetHidden { id: &'static str, hidden: bool },
    SetStyle {
        id: &'static str,
        property: &'static str,
        value: String,
    },
    SetClassName { id: &'static str, class: String },
    ToggleClass {
        id: &'static str,
        class: &'static str,
        on: bool,
    },
    ToggleBodyClass { class: &'static str, on: bool },
    ScrollToBottom { id: &'static str },
}

/// `previous` is the last view painted, if any. Panels only scroll when it
/// had fewer entries.
#[allow(clippy::vec_init_then_push)]
pub fn render_admin(view: &AdminViewModel, previous: Option<&AdminViewModel>) -> Vec<DomCommand> {
    let mut cmds = Vec::new();

    cmds.push(DomCommand::SetValue {
        id: admin_ids::INPUT_URLS,
        value: view.input.clone(),
    });
    cmds.push(DomCommand::SetEnabled {
        id: admin_ids::BUTTON_VERIFY,
        enabled: view.verify_enabled,
    });
    cmds.push(DomCommand::SetText {
        id: admin_ids::BUTTON_VERIFY,
        text: view.verify_label.to_string(),
    });
    cmds.push(DomCommand::SetEnabled {
        id: admin_ids::BUTTON_INGEST,
        enabled: view.ingest_enabled,
    });
    cmds.push(DomCommand::SetText {
        id: admin_ids::BUTTON_INGEST,
        text: view.ingest_label.to_string(),
    });

    cmds.push(DomCommand::SetHidden {
        id: admin_ids::PROGRESS_CONTAINER,
        hidden: view.progress.is_none(),
    });
    if let Some(percent) = view.progress {
        cmds.push(DomCommand::SetStyle {
            id: admin_ids::PROGRESS_BAR,
            property: "width",
            value: format!("{percent}%"),
        });
        cmds.push(DomCommand::SetText {
            id: admin_ids::PROGRESS_PERCENT,
            text: format!("{percent}%"),
        });
    }

    let (results, summary) = results_markup(&view.results);
    cmds.push(DomCommand::SetHtml {
        id: admin_ids::RESULTS,
        html: results,
    });
    cmds.push(DomCommand::SetHidden {
        id: admin_ids::SUMMARY,
        hidden: summary.is_none(),
    });
    if let Some(summary) = summary {
        cmds.push(DomCommand::SetHtml {
            id: admin_ids::SUMMARY,
            html: summary,
        });
    }

    cmds.extend(stats_commands(&view.stats));

    cmds.push(DomCommand::SetHtml {
        id: admin_ids::LOG,
        html: log_markup(&view.log),
    });
    if grew(view.log.len(), previous.map(|previous| previous.log.len())) {
        cmds.push(DomCommand::ScrollToBottom { id: admin_ids::LOG });
    }

    cmds
}

fn grew(now: usize, before: Option<usize>) -> bool {
    before.is_none_or(|before| now > before)
}

fn results_markup(results: &ResultsView) -> (String, Option<String>) {
    match results {
        ResultsView::Empty => (
            el("div")
                .with_class("results-empty")
                .with_child(text_el(
                    "p",
                    "No results yet. Add URLs and click \"Index into the knowledge base\".",
                ))
                .render(),
            None,
        ),
        ResultsView::Verification { rows, summary } => (
            render_all(rows.iter().map(verification_row)),
            Some(verification_summary(summary).render()),
        ),
        ResultsView::Ingestion { rows, summary } => (
            render_all(rows.iter().map(ingest_row)),
            Some(ingest_summary(summary).render()),
        ),
        ResultsView::Malformed { title, raw_json } => (
            el("div")
                .with_class("alert alert-danger")
                .with_text(*title)
                .with_child(text_el("pre", raw_json.clone()).with_class("mt-2"))
                .render(),
            None,
        ),
    }
}

fn render_all(items: impl Iterator<Item = UiElement>) -> String {
    items.map(|item| item.render()).collect()
}

fn outcome_class(ok: bool) -> &'static str {
    if ok {
        "result-item result-success"
    } else {
        "result-item result-error"
    }
}

fn status_badge(ok: bool, label: &'static str) -> UiElement {
    let class = if ok {
        "status-badge badge-success"
    } else {
        "status-badge badge-error"
    };
    text_el("div", label).with_class(class)
}

fn verification_row(row: &VerificationRow) -> UiElement {
    let mut detail = el("div").with_child(text_el("strong", row.url.clone()));
    if let Some(error) = &row.error {
        detail = detail.with_child(text_el("div", error.clone()).with_class("mt-1 small"));
    }
    el("div")
        .with_class(outcome_class(row.accessible))
        .with_child(detail)
        .with_child(status_badge(
            row.accessible,
            if row.accessible {
                "✓ Accessible"
            } else {
                "✗ Unreachable"
            },
        ))
}

fn verification_summary(summary: &VerificationSummary) -> UiElement {
    let class = if summary.all_accessible() {
        "alert alert-success"
    } else {
        "alert alert-warning"
    };
    el("div")
        .with_class(class)
        .with_child(text_el("strong", "Verification result: "))
        .with_text(summary.headline())
        .with_child(text_el("small", summary.hint()).with_class("d-block"))
}

fn ingest_row(row: &IngestRow) -> UiElement {
    let mut detail = el("div").with_class("mt-1 small");
    if let Some(chunks) = row.chunks_added {
        detail = detail
            .with_child(text_el("span", format!("{chunks} chunks")).with_class("badge bg-info"));
    }
    if let Some(reason) = &row.reason {
        detail = detail.with_child(text_el("div", reason.clone()).with_class("text-danger"));
    }
    el("div")
        .with_class(format!("{} result-enter", outcome_class(row.success)))
        .with_attr("style", format!("animation-delay: {}ms", row.entrance_delay_ms))
        .with_child(
            el("div")
                .with_child(text_el("strong", row.url.clone()))
                .with_child(detail),
        )
        .with_child(status_badge(
            row.success,
            if row.success { "✓ Indexed" } else { "✗ Failed" },
        ))
}

fn ingest_summary(summary: &IngestSummary) -> UiElement {
    let line = |label: &'static str, value: String| {
        el("p")
            .with_child(text_el("strong", label))
            .with_text(value)
    };
    el("div")
        .with_class("alert alert-info")
        .with_child(text_el("h5", "Indexing summary"))
        .with_child(line("Total URLs: ", summary.total_urls.to_string()))
        .with_child(line("Indexed successfully: ", summary.successful.to_string()))
        .with_child(line("Vectors in the store: ", summary.total_vectors.to_string()))
        .with_child(line("Status: ", summary.status.clone()))
}

fn status_text(status: StatsStatus) -> (&'static str, &'static str) {
    match status {
        StatsStatus::Pending => ("Loading...", "status-indicator status-pending"),
        StatsStatus::Live => ("Live", "status-indicator status-live"),
        StatsStatus::Offline => ("Offline", "status-indicator status-offline"),
        StatsStatus::Error => ("Error", "status-indicator status-error"),
    }
}

fn stats_commands(stats: &StatsView) -> Vec<DomCommand> {
    let (label, class) = status_text(stats.status);
    let counter = |value: Option<u64>| {
        if stats.is_unavailable() {
            label.to_string()
        } else {
            value.map_or_else(|| "-".to_string(), |value| value.to_string())
        }
    };
    vec![
        DomCommand::SetText {
            id: admin_ids::STAT_VECTORS,
            text: counter(stats.vectors),
        },
        DomCommand::SetText {
            id: admin_ids::STAT_CHUNKS,
            text: counter(stats.chunks),
        },
        DomCommand::SetText {
            id: admin_ids::STATS_STATUS,
            text: label.to_string(),
        },
        DomCommand::SetClassName {
            id: admin_ids::STATS_STATUS,
            class: class.to_string(),
        },
    ]
}

fn log_markup(entries: &[ActivityEntry]) -> String {
    render_all(entries.iter().map(|entry| {
        el("div")
            .with_class("log-entry")
            .with_child(text_el("span", format!("[{}]", entry.time_label())).with_class("log-time"))
            .with_child(
                text_el("span", format!(" {}", entry.message)).with_class(entry.level.css_class()),
            )
    }))
}

#[allow(clippy::vec_init_then_push)]
pub fn render_chat(view: &ChatViewModel, previous: Option<&ChatViewModel>) -> Vec<DomCommand> {
    let mut cmds = Vec::new();

    cmds.push(DomCommand::SetHtml {
        id: chat_ids::MESSAGES,
        html: render_all(view.messages.iter().map(message_markup)),
    });
    if grew(
        view.messages.len(),
        previous.map(|previous| previous.messages.len()),
    ) {
        cmds.push(DomCommand::ScrollToBottom {
            id: chat_ids::MESSAGES,
        });
    }
    cmds.push(DomCommand::SetHidden {
        id: chat_ids::TYPING,
        hidden: !view.typing,
    });
    cmds.push(DomCommand::SetValue {
        id: chat_ids::INPUT_QUESTION,
        value: view.input.clone(),
    });
    cmds.push(DomCommand::SetEnabled {
        id: chat_ids::BUTTON_SEND,
        enabled: view.send_enabled,
    });
    cmds.push(DomCommand::SetText {
        id: chat_ids::MESSAGE_COUNT,
        text: view.message_count.to_string(),
    });
    cmds.push(DomCommand::SetText {
        id: chat_ids::RESPONSE_TIME,
        text: view.last_latency.clone().unwrap_or_else(|| "-".to_string()),
    });
    cmds.push(DomCommand::SetHtml {
        id: chat_ids::KNOWLEDGE_SIZE,
        html: knowledge_markup(&view.knowledge),
    });

    let (label, class) = match view.connection {
        Connection::Unknown => ("Checking...", "badge bg-secondary"),
        Connection::Connected => ("Connected", "badge bg-success"),
        Connection::Disconnected => ("Disconnected", "badge bg-danger"),
    };
    cmds.push(DomCommand::SetText {
        id: chat_ids::CONNECTION_STATUS,
        text: label.to_string(),
    });
    cmds.push(DomCommand::SetClassName {
        id: chat_ids::CONNECTION_STATUS,
        class: class.to_string(),
    });

    let light = view.theme.root_marker() == Some(LIGHT_THEME_CLASS);
    cmds.push(DomCommand::ToggleBodyClass {
        class: LIGHT_THEME_CLASS,
        on: light,
    });
    cmds.push(DomCommand::ToggleClass {
        id: chat_ids::THEME_TOGGLE,
        class: "active",
        on: light,
    });

    cmds
}

fn message_markup(message: &MessageView) -> UiElement {
    let class = match message.role {
        Role::User => "message message-user",
        Role::Assistant => "message message-ai",
    };
    el("div")
        .with_class(class)
        .with_child(text_el("div", message.author).with_class("message-author"))
        .with_child(
            el("div")
                .with_class("message-content")
                .with_child(Node::trusted(message.body_html.clone())),
        )
        .with_child(text_el("div", message.meta.clone()).with_class("message-meta"))
}

fn knowledge_markup(knowledge: &KnowledgeView) -> String {
    match knowledge.status {
        StatsStatus::Pending | StatsStatus::Live => format!("{} vectors", knowledge.vectors),
        StatsStatus::Offline => text_el("span", "Offline")
            .with_class("text-warning")
            .render(),
        StatsStatus::Error => text_el("span", "Error").with_class("text-danger").render(),
    }
}
