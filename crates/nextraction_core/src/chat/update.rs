use chrono::NaiveTime;

use crate::chat::{ChatEffect, ChatMsg, ChatState, Connection, APOLOGY};
use crate::{ApiCall, ApiReply, TickerKind};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ChatState, msg: ChatMsg, now: NaiveTime) -> (ChatState, Vec<ChatEffect>) {
    let effects = match msg {
        ChatMsg::Started => vec![
            ChatEffect::Call(ApiCall::Stats),
            ChatEffect::Call(ApiCall::Health),
        ],
        ChatMsg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        ChatMsg::SendClicked => {
            let question = state.input().to_string();
            ask(&mut state, &question, now)
        }
        ChatMsg::Ask(question) => ask(&mut state, &question, now),
        ChatMsg::ClearClicked => {
            if state.transcript().len() <= 1 {
                Vec::new()
            } else {
                vec![ChatEffect::ConfirmClear(
                    "Do you really want to clear the whole conversation?".to_string(),
                )]
            }
        }
        ChatMsg::ClearConfirmed => {
            state.reset_transcript();
            Vec::new()
        }
        ChatMsg::ThemeToggled => {
            let theme = state.theme().toggled();
            state.set_theme(theme);
            vec![ChatEffect::PersistTheme(theme)]
        }
        ChatMsg::StatsTick => vec![ChatEffect::Call(ApiCall::Stats)],
        ChatMsg::HealthTick => vec![ChatEffect::Call(ApiCall::Health)],
        ChatMsg::Ticked(TickerKind::Counter) => {
            if state.stats_mut().tick() {
                Vec::new()
            } else {
                vec![ChatEffect::StopTicker(TickerKind::Counter)]
            }
        }
        ChatMsg::Ticked(TickerKind::Progress) => Vec::new(),
        ChatMsg::Api(reply) => apply_reply(&mut state, reply, now),
        ChatMsg::RuntimeError(message) => vec![ChatEffect::ReportError(message)],
        ChatMsg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn ask(state: &mut ChatState, question: &str, now: NaiveTime) -> Vec<ChatEffect> {
    let question = question.trim();
    if question.is_empty() || state.is_awaiting_answer() {
        return Vec::new();
    }
    state.push_user(question.to_string(), now);
    state.set_input(String::new());
    state.set_awaiting_answer(true);
    vec![ChatEffect::Call(ApiCall::Ask(question.to_string()))]
}

fn apply_reply(state: &mut ChatState, reply: ApiReply, now: NaiveTime) -> Vec<ChatEffect> {
    match reply {
        ApiReply::Ask {
            result,
            latency_secs,
        } => {
            state.set_awaiting_answer(false);
            match result {
                Ok(answer) => {
                    state.push_assistant(answer, latency_secs, now);
                    state.set_last_latency(latency_secs);
                    vec![ChatEffect::Call(ApiCall::Stats)]
                }
                Err(failure) => {
                    state.push_assistant(APOLOGY.to_string(), 0.0, now);
                    vec![ChatEffect::ReportError(format!("question failed: {failure}"))]
                }
            }
        }
        ApiReply::Stats(result) => {
            let steps = state.config().counter_steps;
            let interval_ms = state.config().counter_tick_ms();
            if state.stats_mut().apply(result, steps) {
                vec![ChatEffect::StartTicker {
                    kind: TickerKind::Counter,
                    interval_ms,
                }]
            } else {
                Vec::new()
            }
        }
        ApiReply::Health(result) => {
            state.set_connection(if result.is_ok() {
                Connection::Connected
            } else {
                Connection::Disconnected
            });
            Vec::new()
        }
        ApiReply::Verify(_) | ApiReply::Ingest(_) => Vec::new(),
    }
}
