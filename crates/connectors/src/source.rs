use crate::error::FetchError;
use async_trait::async_trait;
use model::record::ChangelogRecord;
use serde_json::Value;
use std::time::Duration;
use tracing::warn;

/// Read-only source of changelog records.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetches the current batch of candidate records.
    async fn fetch(&self) -> Result<Vec<ChangelogRecord>, FetchError>;
}

/// Basic-auth credentials for the changelog endpoint.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

/// `RecordSource` backed by an HTTP GET against the changelog API.
pub struct HttpRecordSource {
    client: reqwest::Client,
    url: String,
    auth: Option<BasicAuth>,
    timeout: Duration,
}

impl HttpRecordSource {
    pub fn new(url: String, auth: Option<BasicAuth>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            auth,
            timeout,
        }
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch(&self) -> Result<Vec<ChangelogRecord>, FetchError> {
        let mut request = self.client.get(&self.url).timeout(self.timeout);
        if let Some(auth) = &self.auth {
            request = request.basic_auth(&auth.username, Some(&auth.password));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body: Value = response.json().await.map_err(FetchError::InvalidJson)?;
        Ok(parse_batch(body))
    }
}

/// Decodes the response body into records.
///
/// The API has been seen returning either a bare array or an object with a
/// `data` array; anything else is an empty batch. Entries that do not
/// decode are skipped with a warning rather than failing the whole fetch.
pub fn parse_batch(body: Value) -> Vec<ChangelogRecord> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("Skipping undecodable changelog entry: {err}");
                None
            }
        })
        .collect()
}
