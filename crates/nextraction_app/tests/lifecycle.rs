use std::sync::Once;
use std::time::Duration;

use chrono::NaiveTime;
use nextraction_app::{client_settings, perform, AdminController, ChatController};
use nextraction_client::ReqwestApiClient;
use nextraction_core::admin::{AdminEffect, AdminMsg, ResultsView};
use nextraction_core::chat::{ChatEffect, ChatMsg, Role, APOLOGY};
use nextraction_core::{ApiCall, ApiReply, ConsoleConfig, Theme, TickerKind};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(nextraction_logging::initialize_for_tests);
}

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap()
}

fn config_for(server: &MockServer) -> ConsoleConfig {
    ConsoleConfig {
        api_base: format!("{}/api", server.uri()),
        ..ConsoleConfig::default()
    }
}

fn client_for(config: &ConsoleConfig) -> ReqwestApiClient {
    ReqwestApiClient::new(client_settings(config)).expect("client")
}

fn single_call<E: std::fmt::Debug>(effects: &[E], pick: impl Fn(&E) -> Option<ApiCall>) -> ApiCall {
    let calls: Vec<ApiCall> = effects.iter().filter_map(pick).collect();
    assert_eq!(calls.len(), 1, "expected one call in {effects:?}");
    calls.into_iter().next().unwrap()
}

fn admin_call(effect: &AdminEffect) -> Option<ApiCall> {
    match effect {
        AdminEffect::Call(call) => Some(call.clone()),
        _ => None,
    }
}

async fn verify_round(server: &MockServer) -> (AdminController, Vec<AdminEffect>) {
    let config = config_for(server);
    let client = client_for(&config);
    let mut admin = AdminController::new(config);

    admin.on_input_changed("https://a.com\nhttps://b.com".to_string());
    let started = admin.on_verify();
    let view = started.view.expect("verify repaints");
    assert!(!view.verify_enabled);
    assert!(!view.ingest_enabled);
    assert_eq!(view.verify_label, "Verifying...");

    let call = single_call(&started.effects, admin_call);
    let reply = perform(&client, call).await;
    let finished = admin.dispatch(AdminMsg::Api(reply), noon());
    (admin, finished.effects)
}

#[tokio::test]
async fn verify_success_reenables_buttons() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/verify-urls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"url": "https://a.com", "accessible": true},
            {"url": "https://b.com", "accessible": false, "error": "403"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (admin, effects) = verify_round(&server).await;
    assert!(effects.is_empty());
    let view = admin.view();
    assert!(view.verify_enabled);
    assert!(view.ingest_enabled);
    assert_eq!(view.verify_label, "Verify URLs");
    let ResultsView::Verification { summary, .. } = view.results else {
        panic!("expected verification rows");
    };
    assert_eq!(summary.headline(), "1 of 2 URLs accessible");
}

#[tokio::test]
async fn verify_malformed_reenables_buttons() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/verify-urls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let (admin, _) = verify_round(&server).await;
    let view = admin.view();
    assert!(view.verify_enabled);
    assert!(matches!(view.results, ResultsView::Malformed { ref raw_json, .. } if raw_json.contains("unexpected")));
}

#[tokio::test]
async fn verify_failure_alerts_and_reenables_buttons() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/verify-urls"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let (admin, effects) = verify_round(&server).await;
    assert!(matches!(effects.as_slice(), [AdminEffect::Alert(_)]));
    assert!(admin.view().verify_enabled);
    let last = admin.state().log().last().expect("log entry");
    assert!(last.message.contains("502"), "{}", last.message);
}

#[tokio::test]
async fn ingest_refreshes_stats_after_completion() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ingest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "completed",
            "total_urls": 1,
            "successful": 1,
            "total_vectors": 12,
            "results": [{"url": "https://a.com", "status": "success", "chunks_added": 12}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"total_vectors": 12, "chunks_count": 12})),
        )
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = client_for(&config);
    let mut admin = AdminController::new(config);
    admin.on_input_changed("https://a.com".to_string());

    let started = admin.on_ingest();
    assert!(started.effects.contains(&AdminEffect::StartTicker {
        kind: TickerKind::Progress,
        interval_ms: 100,
    }));
    assert_eq!(admin.view().ingest_label, "Indexing...");

    let call = single_call(&started.effects, admin_call);
    let reply = perform(&client, call).await;
    let finished = admin.dispatch(AdminMsg::Api(reply), noon());
    assert!(admin.view().ingest_enabled);

    let refresh = single_call(&finished.effects, admin_call);
    assert_eq!(refresh, ApiCall::Stats);
    let stats = perform(&client, refresh).await;
    let counted = admin.dispatch(AdminMsg::Api(stats), noon());
    assert!(matches!(
        counted.effects.as_slice(),
        [AdminEffect::StartTicker { kind: TickerKind::Counter, .. }]
    ));
}

#[test]
fn unchanged_state_skips_repaint() {
    init_logging();
    let mut admin = AdminController::new(ConsoleConfig::default());
    let dispatched = admin.dispatch(AdminMsg::NoOp, noon());
    assert!(dispatched.view.is_none());
    assert!(dispatched.effects.is_empty());

    let dispatched = admin.dispatch(AdminMsg::LoadExamplesClicked, noon());
    assert!(dispatched.view.is_some());
}

fn chat_call(effect: &ChatEffect) -> Option<ApiCall> {
    match effect {
        ChatEffect::Call(call) => Some(call.clone()),
        _ => None,
    }
}

#[tokio::test]
async fn failed_question_yields_exactly_one_apology() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ask"))
        .respond_with(ResponseTemplate::new(500).set_body_string("llm offline"))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = client_for(&config);
    let mut chat = ChatController::new(config, Theme::Dark, noon());

    chat.on_input_changed("What is indexed?".to_string());
    let asked = chat.on_submit();
    assert_eq!(chat.view().input, "");
    assert!(chat.view().typing);
    let call = single_call(&asked.effects, chat_call);

    let reply = perform(&client, call).await;
    let answered = chat.dispatch(ChatMsg::Api(reply), noon());
    assert!(matches!(answered.effects.as_slice(), [ChatEffect::ReportError(_)]));

    let view = chat.view();
    assert!(!view.typing);
    assert_eq!(view.messages.len(), 3);
    assert_eq!(view.messages[1].role, Role::User);
    assert_eq!(view.messages[2].body_html, APOLOGY);
    assert_eq!(
        chat.state()
            .transcript()
            .iter()
            .filter(|message| message.text == APOLOGY)
            .count(),
        1
    );
}

#[tokio::test]
async fn answer_latency_is_measured() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ask"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"answer": "Two pages."}))
                .set_delay(Duration::from_millis(150)),
        )
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = client_for(&config);
    let reply = perform(&client, ApiCall::Ask("how many?".to_string())).await;
    let ApiReply::Ask {
        result,
        latency_secs,
    } = reply
    else {
        panic!("expected an ask reply");
    };
    assert_eq!(result, Ok("Two pages.".to_string()));
    assert!(latency_secs >= 0.15, "latency {latency_secs}");
    assert!(latency_secs < 10.0, "latency {latency_secs}");
}

#[tokio::test]
async fn unreachable_backend_marks_chat_disconnected() {
    init_logging();
    let config = ConsoleConfig {
        api_base: "http://127.0.0.1:9/api".to_string(),
        request_timeout_ms: Some(2_000),
        ..ConsoleConfig::default()
    };
    let client = client_for(&config);
    let mut chat = ChatController::new(config, Theme::Dark, noon());

    let reply = perform(&client, ApiCall::Health).await;
    chat.dispatch(ChatMsg::Api(reply), noon());
    assert_eq!(
        chat.view().connection,
        nextraction_core::chat::Connection::Disconnected
    );
}
