pub mod get_available_centers;
pub mod list_regions;

use anyhow::anyhow;
use shared_kernel::http_client::HttpClientError;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum FetchError {
    #[error("network error: {0:#}")]
    Network(anyhow::Error),
    #[error("decode error: {0:#}")]
    Decode(anyhow::Error),
}

impl From<HttpClientError> for FetchError {
    fn from(err: HttpClientError) -> Self {
        match err {
            HttpClientError::Network(err) => FetchError::Network(err),
            HttpClientError::Decode(err) => FetchError::Decode(err),
            HttpClientError::HTTPBuilderError(err) => FetchError::Network(anyhow!(err)),
        }
    }
}

/// Joins a configured host and an endpoint path, tolerating a trailing slash on the host.
pub(crate) fn endpoint(host: &str, path: &str) -> String {
    format!("{}{}", host.trim_end_matches('/'), path)
}
