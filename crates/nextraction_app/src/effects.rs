use std::time::Duration;

use chrono::Utc;
use nextraction_client::{ApiClient, ApiError, ClientSettings};
use nextraction_core::{ApiCall, ApiReply, ConsoleConfig, RequestFailure};
use nextraction_logging::{nx_info, nx_warn};

pub fn client_settings(config: &ConsoleConfig) -> ClientSettings {
    ClientSettings {
        base_url: config.api_base.clone(),
        request_timeout: config.request_timeout_ms.map(Duration::from_millis),
    }
}

fn failure(call: &str, err: ApiError) -> RequestFailure {
    nx_warn!("{} failed: {}", call, err);
    err.to_failure()
}

/// Runs one backend call and wraps the outcome as a reply message payload.
/// Never fails: transport problems come back inside the reply.
pub async fn perform(client: &dyn ApiClient, call: ApiCall) -> ApiReply {
    match call {
        ApiCall::Health => ApiReply::Health(client.health().await.map_err(|e| failure("health", e))),
        ApiCall::Stats => ApiReply::Stats(client.stats().await.map_err(|e| failure("stats", e))),
        ApiCall::VerifyUrls(urls) => {
            nx_info!("verifying {} url(s)", urls.len());
            ApiReply::Verify(
                client
                    .verify_urls(&urls)
                    .await
                    .map_err(|e| failure("verify-urls", e)),
            )
        }
        ApiCall::Ingest(urls) => {
            nx_info!("ingesting {} url(s)", urls.len());
            ApiReply::Ingest(client.ingest(&urls).await.map_err(|e| failure("ingest", e)))
        }
        ApiCall::Ask(question) => {
            let started = Utc::now();
            let result = client.ask(&question).await.map_err(|e| failure("ask", e));
            let elapsed = Utc::now().signed_duration_since(started);
            let latency_secs = elapsed.num_milliseconds().max(0) as f64 / 1000.0;
            nx_info!("answer received in {:.2}s", latency_secs);
            ApiReply::Ask {
                result,
                latency_secs,
            }
        }
    }
}
