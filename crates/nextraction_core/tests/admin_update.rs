use std::sync::Once;

use chrono::NaiveTime;
use nextraction_core::admin::{
    self, AdminEffect, AdminMsg, AdminState, Operation, ResultsView, EXAMPLE_URLS,
};
use nextraction_core::{
    ActivityLevel, ApiCall, ApiReply, FailureKind, IngestItem, IngestReport, Ingestion,
    RequestFailure, StatsSnapshot, StatsStatus, TickerKind, Verification, VerificationResult,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(nextraction_logging::initialize_for_tests);
}

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap()
}

fn step(state: AdminState, msg: AdminMsg) -> (AdminState, Vec<AdminEffect>) {
    admin::update(state, msg, noon())
}

fn with_input(input: &str) -> AdminState {
    step(AdminState::default(), AdminMsg::InputChanged(input.to_string())).0
}

fn item(url: &str, status: &str, chunks: Option<u64>, reason: Option<&str>) -> IngestItem {
    IngestItem {
        url: url.to_string(),
        status: status.to_string(),
        chunks_added: chunks,
        reason: reason.map(str::to_string),
    }
}

#[test]
fn verify_renders_rows_and_summary() {
    init_logging();
    let (state, _) = step(with_input("https://a.com\nhttps://b.com"), AdminMsg::VerifyClicked);
    assert_eq!(state.in_flight(), Some(Operation::Verify));
    assert!(!state.view().verify_enabled);
    assert_eq!(state.view().verify_label, "Verifying...");

    let reply = Verification::from_json(json!([
        {"url": "https://a.com", "accessible": true},
        {"url": "https://b.com", "accessible": false, "error": "timeout"}
    ]));
    let (mut state, effects) = step(state, AdminMsg::Api(ApiReply::Verify(Ok(reply))));

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let view = state.view();
    assert!(view.verify_enabled);
    assert!(view.ingest_enabled);
    match view.results {
        ResultsView::Verification { rows, summary } => {
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[1].error.as_deref(), Some("timeout"));
            assert_eq!(summary.headline(), "1 of 2 URLs accessible");
            assert!(!summary.all_accessible());
        }
        other => panic!("unexpected results view: {other:?}"),
    }
    assert_eq!(state.log().last().unwrap().level, ActivityLevel::Success);
}

#[test]
fn verify_with_non_array_response_shows_raw_payload() {
    init_logging();
    let (state, _) = step(with_input("https://a.com"), AdminMsg::VerifyClicked);
    let reply = Verification::from_json(json!({"detail": "nope"}));
    let (state, effects) = step(state, AdminMsg::Api(ApiReply::Verify(Ok(reply))));

    assert!(effects.is_empty(), "malformed payload must not alert");
    assert!(state.view().verify_enabled);
    match state.view().results {
        ResultsView::Malformed { raw_json, .. } => assert!(raw_json.contains("\"detail\"")),
        other => panic!("unexpected results view: {other:?}"),
    }
}

#[test]
fn verify_failure_alerts_logs_and_releases() {
    init_logging();
    let (state, _) = step(with_input("https://a.com"), AdminMsg::VerifyClicked);
    let failure = RequestFailure::new(FailureKind::HttpStatus(502), "bad gateway");
    let (state, effects) = step(state, AdminMsg::Api(ApiReply::Verify(Err(failure))));

    assert_eq!(effects.len(), 1);
    assert!(matches!(effects[0], AdminEffect::Alert(_)));
    assert!(state.view().verify_enabled);
    let last = state.log().last().unwrap();
    assert_eq!(last.level, ActivityLevel::Error);
    assert!(last.message.contains("502"));
}

#[test]
fn second_trigger_while_in_flight_is_ignored() {
    init_logging();
    let (state, _) = step(with_input("https://a.com"), AdminMsg::VerifyClicked);
    let (state, effects) = step(state, AdminMsg::IngestClicked);
    assert!(effects.is_empty());
    assert_eq!(state.in_flight(), Some(Operation::Verify));

    let (_, effects) = step(state, AdminMsg::VerifyClicked);
    assert!(effects.is_empty());
}

#[test]
fn ingest_drives_progress_in_two_phases() {
    init_logging();
    let (state, effects) = step(with_input("https://a.com"), AdminMsg::IngestClicked);
    assert_eq!(
        effects,
        vec![
            AdminEffect::StartTicker {
                kind: TickerKind::Progress,
                interval_ms: 100,
            },
            AdminEffect::Call(ApiCall::Ingest(vec!["https://a.com".to_string()])),
        ]
    );
    assert_eq!(state.view().progress, Some(0));
    assert!(!state.view().verify_enabled);
    assert!(!state.view().ingest_enabled);

    let mut state = state;
    let mut last_effects = Vec::new();
    for _ in 0..10 {
        let (next, effects) = step(state, AdminMsg::Ticked(TickerKind::Progress));
        state = next;
        last_effects = effects;
    }
    assert_eq!(state.view().progress, Some(50));
    assert_eq!(
        last_effects,
        vec![AdminEffect::StopTicker(TickerKind::Progress)]
    );

    let report = IngestReport {
        total_urls: 1,
        successful: 1,
        total_vectors: 12,
        status: "completed".to_string(),
        results: vec![item("https://a.com", "success", Some(12), None)],
    };
    let (mut state, effects) = step(
        state,
        AdminMsg::Api(ApiReply::Ingest(Ok(Ingestion::Completed(report)))),
    );
    assert!(effects.contains(&AdminEffect::StartTicker {
        kind: TickerKind::Progress,
        interval_ms: 100,
    }));
    assert_eq!(effects.last(), Some(&AdminEffect::Call(ApiCall::Stats)));
    assert!(state.view().ingest_enabled);

    let mut ticks = 0;
    loop {
        let (next, effects) = step(state, AdminMsg::Ticked(TickerKind::Progress));
        state = next;
        ticks += 1;
        if !effects.is_empty() {
            assert_eq!(
                effects,
                vec![
                    AdminEffect::StopTicker(TickerKind::Progress),
                    AdminEffect::Schedule {
                        delay_ms: 2_000,
                        msg: Box::new(AdminMsg::ProgressHideElapsed { run: 1 }),
                    },
                ]
            );
            break;
        }
    }
    assert_eq!(ticks, 10);
    assert_eq!(state.view().progress, Some(100));

    let (state, _) = step(state, AdminMsg::ProgressHideElapsed { run: 1 });
    assert_eq!(state.view().progress, None);
}

#[test]
fn ingest_summary_counts_success_items() {
    init_logging();
    let (state, _) = step(
        with_input("https://a.com\nhttps://b.com\nhttps://c.com"),
        AdminMsg::IngestClicked,
    );
    let report = IngestReport {
        total_urls: 3,
        // Deliberately inconsistent with the items below.
        successful: 3,
        total_vectors: 40,
        status: "completed".to_string(),
        results: vec![
            item("https://a.com", "success", Some(10), None),
            item("https://b.com", "failed", None, Some("Not enough content")),
            item("https://c.com", "success", Some(0), None),
        ],
    };
    let (state, _) = step(
        state,
        AdminMsg::Api(ApiReply::Ingest(Ok(Ingestion::Completed(report)))),
    );

    match state.view().results {
        ResultsView::Ingestion { rows, summary } => {
            assert_eq!(summary.successful, 2);
            assert_eq!(summary.total_urls, 3);
            assert_eq!(summary.total_vectors, 40);
            assert_eq!(rows[0].chunks_added, Some(10));
            assert_eq!(rows[1].reason.as_deref(), Some("Not enough content"));
            assert!(!rows[1].success);
            // Zero chunks shows no badge.
            assert_eq!(rows[2].chunks_added, None);
            let delays: Vec<u32> = rows.iter().map(|row| row.entrance_delay_ms).collect();
            assert_eq!(delays, vec![0, 100, 200]);
        }
        other => panic!("unexpected results view: {other:?}"),
    }
    assert_eq!(state.log().count(ActivityLevel::Warning), 1);
}

#[test]
fn ingest_without_results_field_is_malformed() {
    init_logging();
    let ingestion = Ingestion::from_json(json!({"status": "completed", "results": "oops"}));
    assert!(matches!(ingestion, Ingestion::Malformed(_)));

    let (state, _) = step(with_input("https://a.com"), AdminMsg::IngestClicked);
    let (state, effects) = step(state, AdminMsg::Api(ApiReply::Ingest(Ok(ingestion))));

    assert!(!effects.iter().any(|e| matches!(e, AdminEffect::Alert(_))));
    assert!(matches!(state.view().results, ResultsView::Malformed { .. }));
    assert!(state.view().ingest_enabled);
}

#[test]
fn ingest_failure_still_refreshes_stats_and_releases() {
    init_logging();
    let (state, _) = step(with_input("https://a.com"), AdminMsg::IngestClicked);
    let failure = RequestFailure::new(FailureKind::Network, "connection refused");
    let (state, effects) = step(state, AdminMsg::Api(ApiReply::Ingest(Err(failure))));

    assert!(effects.iter().any(|e| matches!(e, AdminEffect::Alert(_))));
    assert_eq!(effects.last(), Some(&AdminEffect::Call(ApiCall::Stats)));
    assert!(state.view().verify_enabled);
    assert!(state.view().ingest_enabled);
}

#[test]
fn stale_hide_does_not_hide_a_restarted_bar() {
    init_logging();
    let (state, _) = step(with_input("https://a.com"), AdminMsg::IngestClicked);
    let (state, _) = step(state, AdminMsg::Ticked(TickerKind::Progress));
    let (state, _) = step(state, AdminMsg::ProgressHideElapsed { run: 1 });
    assert_eq!(state.view().progress, Some(5));
}

fn complete_ingestion(state: AdminState) -> (AdminState, AdminMsg) {
    let (state, _) = step(state, AdminMsg::IngestClicked);
    let report = IngestReport {
        total_urls: 1,
        successful: 1,
        total_vectors: 3,
        status: "completed".to_string(),
        results: vec![item("https://a.com", "success", Some(3), None)],
    };
    let (mut state, _) = step(
        state,
        AdminMsg::Api(ApiReply::Ingest(Ok(Ingestion::Completed(report)))),
    );
    loop {
        let (next, effects) = step(state, AdminMsg::Ticked(TickerKind::Progress));
        state = next;
        let scheduled = effects.into_iter().find_map(|effect| match effect {
            AdminEffect::Schedule { msg, .. } => Some(*msg),
            _ => None,
        });
        if let Some(msg) = scheduled {
            return (state, msg);
        }
    }
}

#[test]
fn hide_from_an_earlier_run_leaves_the_next_bar_visible() {
    init_logging();
    let (state, first_hide) = complete_ingestion(with_input("https://a.com"));
    assert_eq!(first_hide, AdminMsg::ProgressHideElapsed { run: 1 });

    let (state, second_hide) = complete_ingestion(state);
    assert_eq!(second_hide, AdminMsg::ProgressHideElapsed { run: 2 });
    assert_eq!(state.view().progress, Some(100));

    let (state, _) = step(state, first_hide);
    assert_eq!(state.view().progress, Some(100));

    let (state, _) = step(state, second_hide);
    assert_eq!(state.view().progress, None);
}

#[test]
fn clear_requires_confirmation_and_resets() {
    init_logging();
    let (state, effects) = step(AdminState::default(), AdminMsg::ClearClicked);
    assert!(matches!(effects.as_slice(), [AdminEffect::Alert(_)]));

    let (state, _) = step(state, AdminMsg::LoadExamplesClicked);
    assert_eq!(state.input(), EXAMPLE_URLS.join("\n"));

    let (state, effects) = step(state, AdminMsg::ClearClicked);
    assert!(matches!(effects.as_slice(), [AdminEffect::ConfirmClear(_)]));
    assert_eq!(state.input(), EXAMPLE_URLS.join("\n"));

    let (state, _) = step(state, AdminMsg::ClearConfirmed);
    assert_eq!(state.input(), "");
    assert_eq!(state.view().results, ResultsView::Empty);
}

#[test]
fn test_connection_reports_both_outcomes() {
    init_logging();
    let (state, effects) = step(AdminState::default(), AdminMsg::TestConnectionClicked);
    assert_eq!(effects, vec![AdminEffect::Call(ApiCall::Health)]);

    let (state, effects) = step(state, AdminMsg::Api(ApiReply::Health(Ok(()))));
    assert!(matches!(effects.as_slice(), [AdminEffect::Alert(_)]));
    assert_eq!(state.log().last().unwrap().level, ActivityLevel::Success);

    let failure = RequestFailure::new(FailureKind::Network, "refused");
    let (state, _) = step(state, AdminMsg::Api(ApiReply::Health(Err(failure))));
    assert_eq!(state.log().last().unwrap().level, ActivityLevel::Error);
}

#[test]
fn stats_count_up_then_offline() {
    init_logging();
    let snapshot = StatsSnapshot {
        total_vectors: 120,
        chunks_count: 118,
    };
    let (state, effects) = step(
        AdminState::default(),
        AdminMsg::Api(ApiReply::Stats(Ok(snapshot))),
    );
    assert_eq!(
        effects,
        vec![AdminEffect::StartTicker {
            kind: TickerKind::Counter,
            interval_ms: 16,
        }]
    );
    assert_eq!(state.view().stats.vectors, Some(0));
    assert_eq!(state.view().stats.chunks, Some(118));

    let mut state = state;
    let mut frames = 0;
    loop {
        let (next, effects) = step(state, AdminMsg::Ticked(TickerKind::Counter));
        state = next;
        frames += 1;
        if effects == vec![AdminEffect::StopTicker(TickerKind::Counter)] {
            break;
        }
    }
    assert_eq!(frames, 60);
    assert_eq!(state.view().stats.vectors, Some(120));
    assert_eq!(state.view().stats.status, StatsStatus::Live);

    let failure = RequestFailure::new(FailureKind::Network, "down");
    let (state, effects) = step(state, AdminMsg::Api(ApiReply::Stats(Err(failure))));
    assert!(effects.is_empty());
    let stats = state.view().stats;
    assert_eq!(stats.status, StatsStatus::Offline);
    assert_eq!(stats.vectors, None);
    assert_eq!(stats.chunks, None);

    let (state, effects) = step(state, AdminMsg::Api(ApiReply::Stats(Ok(snapshot))));
    assert_eq!(effects.len(), 1);
    assert_eq!(state.view().stats.vectors, Some(0));
    assert_eq!(state.view().stats.chunks, Some(118));
}

#[test]
fn stats_http_error_hides_both_counters() {
    init_logging();
    let snapshot = StatsSnapshot {
        total_vectors: 500,
        chunks_count: 1234,
    };
    let (state, _) = step(
        AdminState::default(),
        AdminMsg::Api(ApiReply::Stats(Ok(snapshot))),
    );
    let failure = RequestFailure::new(FailureKind::HttpStatus(503), "unavailable");
    let (state, _) = step(state, AdminMsg::Api(ApiReply::Stats(Err(failure))));
    let stats = state.view().stats;
    assert_eq!(stats.status, StatsStatus::Error);
    assert!(stats.is_unavailable());
    assert_eq!((stats.vectors, stats.chunks), (None, None));
}

#[test]
fn runtime_errors_land_in_the_activity_log() {
    init_logging();
    let (state, effects) = step(
        AdminState::default(),
        AdminMsg::RuntimeError("undefined is not a function".to_string()),
    );
    assert!(effects.is_empty());
    assert_eq!(state.log().count(ActivityLevel::Error), 1);
}

#[test]
fn clearing_the_log_keeps_a_single_notice() {
    init_logging();
    let (state, _) = step(AdminState::default(), AdminMsg::Started);
    let (state, _) = step(state, AdminMsg::LoadExamplesClicked);
    let (state, _) = step(state, AdminMsg::ClearLogClicked);

    assert_eq!(state.log().entries().len(), 1);
    assert_eq!(state.log().pushed(), 3);
    assert_eq!(state.log().entries_since(2).len(), 1);
}

#[test]
fn open_chat_targets_the_configured_path() {
    init_logging();
    let (_, effects) = step(AdminState::default(), AdminMsg::OpenChatClicked);
    assert_eq!(
        effects,
        vec![AdminEffect::OpenInNewTab("../chat/index.html".to_string())]
    );
}

#[test]
fn verification_fields_default_when_missing() {
    let verification = Verification::from_json(json!([{"url": "https://a.com"}]));
    assert_eq!(
        verification,
        Verification::Checked(vec![VerificationResult {
            url: "https://a.com".to_string(),
            accessible: false,
            error: None,
        }])
    );
}
