use chrono::NaiveTime;

use crate::admin::{AdminEffect, AdminMsg, AdminState, Operation, ResultsPanel, EXAMPLE_URLS};
use crate::{
    parse_url_list, ActivityLevel, ApiCall, ApiReply, Ingestion, ProgressStep, RequestFailure,
    StatsSnapshot, TickerKind, Verification,
};

const EMPTY_INPUT_ALERT: &str = "Please enter at least one URL.";
const VERIFY_FAILED_ALERT: &str =
    "Unable to verify the URLs. Check your connection and that the server is running.";
const INGEST_FAILED_ALERT: &str = "Ingestion failed. See the activity log for details.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(
    mut state: AdminState,
    msg: AdminMsg,
    now: NaiveTime,
) -> (AdminState, Vec<AdminEffect>) {
    let effects = match msg {
        AdminMsg::Started => {
            state.log_entry(
                now,
                ActivityLevel::Info,
                "System ready. Waiting for URLs.".to_string(),
            );
            vec![AdminEffect::Call(ApiCall::Stats)]
        }
        AdminMsg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        AdminMsg::VerifyClicked => start_flow(&mut state, Operation::Verify, now),
        AdminMsg::IngestClicked => start_flow(&mut state, Operation::Ingest, now),
        AdminMsg::ClearClicked => {
            if state.input().trim().is_empty() {
                vec![AdminEffect::Alert("There are no URLs to clear.".to_string())]
            } else {
                vec![AdminEffect::ConfirmClear(
                    "Do you really want to clear all URLs?".to_string(),
                )]
            }
        }
        AdminMsg::ClearConfirmed => {
            state.set_input(String::new());
            state.set_results(ResultsPanel::Empty);
            state.log_entry(now, ActivityLevel::Info, "URL list cleared.".to_string());
            Vec::new()
        }
        AdminMsg::LoadExamplesClicked => {
            state.set_input(EXAMPLE_URLS.join("\n"));
            state.log_entry(now, ActivityLevel::Info, "Sample URLs loaded.".to_string());
            Vec::new()
        }
        AdminMsg::TestConnectionClicked => vec![AdminEffect::Call(ApiCall::Health)],
        AdminMsg::ClearLogClicked => {
            state.clear_log(now);
            Vec::new()
        }
        AdminMsg::OpenChatClicked => vec![AdminEffect::OpenInNewTab(
            state.config().chat_client_path.clone(),
        )],
        AdminMsg::StatsTick => vec![AdminEffect::Call(ApiCall::Stats)],
        AdminMsg::Ticked(TickerKind::Progress) => advance_progress(&mut state),
        AdminMsg::Ticked(TickerKind::Counter) => {
            if state.stats_mut().tick() {
                Vec::new()
            } else {
                vec![AdminEffect::StopTicker(TickerKind::Counter)]
            }
        }
        AdminMsg::ProgressHideElapsed { run } => {
            // Ignored once a newer ingestion owns the bar.
            if state.progress().run() == run && state.progress().percent() >= 100 {
                state.progress_mut().hide();
            }
            Vec::new()
        }
        AdminMsg::Api(reply) => apply_reply(&mut state, reply, now),
        AdminMsg::RuntimeError(message) => {
            state.log_entry(now, ActivityLevel::Error, format!("Runtime error: {message}"));
            Vec::new()
        }
        AdminMsg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn start_flow(state: &mut AdminState, operation: Operation, now: NaiveTime) -> Vec<AdminEffect> {
    if state.in_flight().is_some() {
        return Vec::new();
    }

    let parsed = parse_url_list(state.input());
    for rejected in &parsed.rejected {
        state.log_entry(
            now,
            ActivityLevel::Warning,
            format!("Skipped URL (must start with http:// or https://): {rejected}"),
        );
    }
    if parsed.urls.is_empty() {
        return vec![AdminEffect::Alert(EMPTY_INPUT_ALERT.to_string())];
    }

    let count = parsed.urls.len();
    state.acquire(operation);
    match operation {
        Operation::Verify => {
            state.log_entry(
                now,
                ActivityLevel::Info,
                format!("Verifying {count} URL(s)..."),
            );
            vec![AdminEffect::Call(ApiCall::VerifyUrls(parsed.urls))]
        }
        Operation::Ingest => {
            state.progress_mut().begin();
            state.log_entry(
                now,
                ActivityLevel::Info,
                format!("Starting ingestion of {count} URL(s)..."),
            );
            vec![
                progress_ticker(state),
                AdminEffect::Call(ApiCall::Ingest(parsed.urls)),
            ]
        }
    }
}

fn progress_ticker(state: &AdminState) -> AdminEffect {
    AdminEffect::StartTicker {
        kind: TickerKind::Progress,
        interval_ms: state.config().progress_tick_ms,
    }
}

fn advance_progress(state: &mut AdminState) -> Vec<AdminEffect> {
    let step = state.config().progress_step;
    let hide_delay = state.config().progress_hide_delay_ms;
    let run = state.progress().run();
    match state.progress_mut().advance(step) {
        ProgressStep::Climbing => Vec::new(),
        ProgressStep::Holding => vec![AdminEffect::StopTicker(TickerKind::Progress)],
        ProgressStep::Completed => vec![
            AdminEffect::StopTicker(TickerKind::Progress),
            AdminEffect::Schedule {
                delay_ms: hide_delay,
                msg: Box::new(AdminMsg::ProgressHideElapsed { run }),
            },
        ],
    }
}

fn apply_reply(state: &mut AdminState, reply: ApiReply, now: NaiveTime) -> Vec<AdminEffect> {
    match reply {
        ApiReply::Verify(result) => finish_verify(state, result, now),
        ApiReply::Ingest(result) => finish_ingest(state, result, now),
        ApiReply::Stats(result) => apply_stats(state, result),
        ApiReply::Health(Ok(())) => {
            state.log_entry(now, ActivityLevel::Success, "API connection OK.".to_string());
            vec![AdminEffect::Alert("Connected to the server.".to_string())]
        }
        ApiReply::Health(Err(failure)) => {
            state.log_entry(
                now,
                ActivityLevel::Error,
                format!("Unable to reach the API: {failure}"),
            );
            vec![AdminEffect::Alert(
                "Unable to reach the server. Check that the backend is running.".to_string(),
            )]
        }
        ApiReply::Ask { .. } => Vec::new(),
    }
}

fn finish_verify(
    state: &mut AdminState,
    result: Result<Verification, RequestFailure>,
    now: NaiveTime,
) -> Vec<AdminEffect> {
    let mut effects = Vec::new();
    match result {
        Ok(Verification::Checked(results)) => {
            let count = results.len();
            state.set_results(ResultsPanel::Verification(results));
            state.log_entry(
                now,
                ActivityLevel::Success,
                format!("Verification finished: {count} URL(s) checked."),
            );
        }
        Ok(Verification::Malformed(raw)) => {
            state.set_malformed(Operation::Verify, &raw);
            state.log_entry(
                now,
                ActivityLevel::Warning,
                "Verification response is not a list of results.".to_string(),
            );
        }
        Err(failure) => {
            state.log_entry(now, ActivityLevel::Error, format!("Error: {failure}"));
            effects.push(AdminEffect::Alert(VERIFY_FAILED_ALERT.to_string()));
        }
    }
    state.release();
    effects
}

fn finish_ingest(
    state: &mut AdminState,
    result: Result<Ingestion, RequestFailure>,
    now: NaiveTime,
) -> Vec<AdminEffect> {
    state.progress_mut().finish_request();
    let mut effects = vec![progress_ticker(state)];
    match result {
        Ok(Ingestion::Completed(report)) => {
            let successful = report.success_count();
            if successful != report.successful {
                state.log_entry(
                    now,
                    ActivityLevel::Warning,
                    format!(
                        "Backend reported {} successful URL(s) but {successful} result(s) succeeded.",
                        report.successful
                    ),
                );
            }
            state.log_entry(
                now,
                ActivityLevel::Success,
                format!(
                    "Ingestion finished: {successful}/{} URL(s) succeeded.",
                    report.total_urls
                ),
            );
            state.set_results(ResultsPanel::Ingestion(report));
        }
        Ok(Ingestion::Malformed(raw)) => {
            state.set_malformed(Operation::Ingest, &raw);
            state.log_entry(
                now,
                ActivityLevel::Warning,
                "Ingestion response has no results list.".to_string(),
            );
        }
        Err(failure) => {
            state.log_entry(
                now,
                ActivityLevel::Error,
                format!("Ingestion error: {failure}"),
            );
            effects.push(AdminEffect::Alert(INGEST_FAILED_ALERT.to_string()));
        }
    }
    state.release();
    effects.push(AdminEffect::Call(ApiCall::Stats));
    effects
}

fn apply_stats(
    state: &mut AdminState,
    result: Result<StatsSnapshot, RequestFailure>,
) -> Vec<AdminEffect> {
    let steps = state.config().counter_steps;
    let interval_ms = state.config().counter_tick_ms();
    if state.stats_mut().apply(result, steps) {
        vec![AdminEffect::StartTicker {
            kind: TickerKind::Counter,
            interval_ms,
        }]
    } else {
        Vec::new()
    }
}
