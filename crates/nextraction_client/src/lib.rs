//! Nextraction client: typed access to the knowledge-base REST API.
mod client;
mod error;

pub use client::{ApiClient, ClientSettings, ReqwestApiClient};
pub use error::ApiError;
