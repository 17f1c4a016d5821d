use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status string the backend uses for a successfully ingested URL.
pub const INGEST_SUCCESS: &str = "success";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    #[serde(default)]
    pub total_vectors: u64,
    #[serde(default)]
    pub chunks_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub url: String,
    #[serde(default)]
    pub accessible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestItem {
    pub url: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks_added: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl IngestItem {
    pub fn is_success(&self) -> bool {
        self.status == INGEST_SUCCESS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IngestReport {
    #[serde(default)]
    pub total_urls: usize,
    #[serde(default)]
    pub successful: usize,
    #[serde(default)]
    pub total_vectors: u64,
    #[serde(default)]
    pub status: String,
    pub results: Vec<IngestItem>,
}

impl IngestReport {
    /// Number of result items whose status is `"success"`.
    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|item| item.is_success()).count()
    }
}

/// Decoded `/verify-urls` payload. A body that is valid JSON but not an array
/// of results is kept verbatim for the diagnostic panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Verification {
    Checked(Vec<VerificationResult>),
    Malformed(Value),
}

impl Verification {
    pub fn from_json(value: Value) -> Self {
        if !value.is_array() {
            return Verification::Malformed(value);
        }
        match serde_json::from_value::<Vec<VerificationResult>>(value.clone()) {
            Ok(results) => Verification::Checked(results),
            Err(_) => Verification::Malformed(value),
        }
    }
}

/// Decoded `/ingest` payload, with the same raw fallback as [`Verification`].
#[derive(Debug, Clone, PartialEq)]
pub enum Ingestion {
    Completed(IngestReport),
    Malformed(Value),
}

impl Ingestion {
    pub fn from_json(value: Value) -> Self {
        let has_results = value.get("results").is_some_and(Value::is_array);
        if !has_results {
            return Ingestion::Malformed(value);
        }
        match serde_json::from_value::<IngestReport>(value.clone()) {
            Ok(report) => Ingestion::Completed(report),
            Err(_) => Ingestion::Malformed(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    HttpStatus(u16),
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Decode => write!(f, "invalid response body"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl RequestFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::HttpStatus(code) => write!(f, "Error {code}: {}", self.message),
            _ => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

/// A backend request a view wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Health,
    Stats,
    VerifyUrls(Vec<String>),
    Ingest(Vec<String>),
    Ask(String),
}

/// The outcome of an [`ApiCall`], fed back into the view that issued it.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply {
    Health(Result<(), RequestFailure>),
    Stats(Result<StatsSnapshot, RequestFailure>),
    Verify(Result<Verification, RequestFailure>),
    Ingest(Result<Ingestion, RequestFailure>),
    Ask {
        result: Result<String, RequestFailure>,
        latency_secs: f64,
    },
}
