use anyhow::{anyhow, Context};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Response;
use reqwest_tracing::TracingMiddleware;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error as ThisError;

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::de::DeserializeOwned;
use url::Url;

/// How much of an unexpected response body is kept in error messages.
const BODY_SNIPPET_LEN: usize = 200;

#[derive(Debug, Deserialize, Clone)]
pub struct HttpSettings {
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(ThisError, Debug)]
pub enum HttpClientError {
    /// The request could not be completed: connection, timeout,
    /// unreadable body or a non-success status.
    #[error("network error: {0:#}")]
    Network(anyhow::Error),
    /// The response arrived but its body is not the expected JSON.
    #[error("decode error: {0:#}")]
    Decode(anyhow::Error),
    #[error("httpBuilderError {0}")]
    HTTPBuilderError(String),
}

struct HeadersMapGenerator(HeaderMap);

impl HeadersMapGenerator {
    fn into_inner(self) -> HeaderMap {
        self.0
    }
}

impl TryFrom<HashMap<&'static str, String>> for HeadersMapGenerator {
    type Error = HttpClientError;

    fn try_from(value: HashMap<&'static str, String>) -> Result<Self, Self::Error> {
        let mut header_map = HeaderMap::new();

        for (key, value) in value.into_iter() {
            let value = HeaderValue::from_str(&value)
                .map_err(|err| HttpClientError::HTTPBuilderError(format!("{err} {value}")))?;
            header_map.insert(key, value);
        }
        Ok(Self(header_map))
    }
}

/// Only the origin of a url is safe to log, paths may carry credentials.
fn origin(url: &Url) -> String {
    url.origin().ascii_serialization()
}

fn snippet(body: &str) -> &str {
    match body.char_indices().nth(BODY_SNIPPET_LEN) {
        Some((index, _)) => &body[..index],
        None => body,
    }
}

/// GET-only client shared by every outbound call. Each request carries a json
/// content type and a browser-like user agent since the slot API rejects
/// requests without a recognizable client signature.
#[derive(Clone)]
pub struct HttpClient {
    client: ClientWithMiddleware,
}

impl HttpClient {
    pub fn new(settings: &HttpSettings) -> Result<Self, HttpClientError> {
        let headers = HashMap::from([
            ("content-type", "application/json".to_string()),
            ("user-agent", settings.user_agent.clone()),
        ]);
        let header_map = HeadersMapGenerator::try_from(headers)?.into_inner();

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .default_headers(header_map)
            .build()
            .map_err(|err| HttpClientError::HTTPBuilderError(err.to_string()))?;

        let client = ClientBuilder::new(client)
            .with(TracingMiddleware::default())
            .build();
        Ok(Self { client })
    }

    async fn get(&self, url: Url) -> Result<Response, HttpClientError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| match err {
                reqwest_middleware::Error::Reqwest(err) => anyhow::Error::new(err.without_url()),
                reqwest_middleware::Error::Middleware(err) => err,
            })
            .with_context(|| format!("Failed to fetch request from {}", origin(&url)))
            .map_err(HttpClientError::Network)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(HttpClientError::Network(anyhow!(
            "Unexpected status {status} from {}: {}",
            origin(&url),
            snippet(&body)
        )))
    }

    pub async fn get_text(&self, url: Url) -> Result<String, HttpClientError> {
        self.get(url)
            .await?
            .text()
            .await
            .map_err(|err| anyhow::Error::new(err.without_url()))
            .context("Failed to get text response")
            .map_err(HttpClientError::Network)
    }

    pub async fn get_json<DTO: DeserializeOwned>(&self, url: Url) -> Result<DTO, HttpClientError> {
        let body = self.get_text(url.clone()).await?;
        serde_json::from_str::<DTO>(&body)
            .with_context(|| {
                format!(
                    "Failed to deserialize response from {}: {}",
                    origin(&url),
                    snippet(&body)
                )
            })
            .map_err(HttpClientError::Decode)
    }
}
