use std::time::Duration;

use nextraction_core::{Ingestion, StatsSnapshot, Verification};
use nextraction_logging::{nx_debug, nx_warn};
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ApiError;

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    /// `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            request_timeout: None,
        }
    }
}

/// Backend operations used by the admin console and the chat client.
///
/// Futures are not required to be `Send`: in the browser every request runs
/// on the single UI thread.
#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    /// Succeeds on any 2xx answer from `/health`.
    async fn health(&self) -> Result<(), ApiError>;
    async fn stats(&self) -> Result<StatsSnapshot, ApiError>;
    async fn verify_urls(&self, urls: &[String]) -> Result<Verification, ApiError>;
    async fn ingest(&self, urls: &[String]) -> Result<Ingestion, ApiError>;
    async fn ask(&self, question: &str) -> Result<String, ApiError>;
}

#[derive(Debug, Serialize)]
struct UrlsRequest<'a> {
    urls: &'a [String],
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

#[derive(Debug, Deserialize)]
struct AskResponse {
    answer: String,
}

#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestApiClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let base_url = settings.base_url.trim().trim_end_matches('/').to_string();
        url::Url::parse(&base_url).map_err(|err| ApiError::InvalidBaseUrl {
            url: settings.base_url.clone(),
            reason: err.to_string(),
        })?;

        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match settings.request_timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        let client = builder.build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, ApiError> {
        let url = self.endpoint(path);
        nx_debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        check_status(&url, response).await
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.endpoint(path);
        nx_debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;
        check_status(&url, response).await
    }
}

/// Turns any non-2xx answer into [`ApiError::HttpStatus`] carrying the body text.
async fn check_status(url: &str, response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    nx_warn!("{} answered {}: {}", url, status.as_u16(), body);
    Err(ApiError::HttpStatus {
        status: status.as_u16(),
        body,
    })
}

async fn read_json(response: reqwest::Response) -> Result<Value, ApiError> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|err| ApiError::Decode(err.to_string()))
}

#[async_trait::async_trait(?Send)]
impl ApiClient for ReqwestApiClient {
    async fn health(&self) -> Result<(), ApiError> {
        self.get("health").await.map(|_| ())
    }

    async fn stats(&self) -> Result<StatsSnapshot, ApiError> {
        let value = read_json(self.get("stats").await?).await?;
        serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn verify_urls(&self, urls: &[String]) -> Result<Verification, ApiError> {
        let response = self.post("verify-urls", &UrlsRequest { urls }).await?;
        Ok(Verification::from_json(read_json(response).await?))
    }

    async fn ingest(&self, urls: &[String]) -> Result<Ingestion, ApiError> {
        let response = self.post("ingest", &UrlsRequest { urls }).await?;
        Ok(Ingestion::from_json(read_json(response).await?))
    }

    async fn ask(&self, question: &str) -> Result<String, ApiError> {
        let value = read_json(self.post("ask", &AskRequest { question }).await?).await?;
        let reply: AskResponse =
            serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(reply.answer)
    }
}
