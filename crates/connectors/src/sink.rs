use crate::{error::DeliveryError, payload};
use async_trait::async_trait;
use model::record::ChangelogRecord;
use std::time::Duration;

/// Delivery sink for formatted changelog messages.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Delivers one record. Errors are per-record; the caller decides
    /// whether to keep going with the rest of the batch.
    async fn publish(&self, record: &ChangelogRecord) -> Result<(), DeliveryError>;
}

/// `Publisher` backed by an HTTP POST to a chat webhook.
///
/// The webhook answers 200 or 204 on success; any other status is a
/// delivery failure carrying the response body for the logs.
pub struct WebhookPublisher {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl WebhookPublisher {
    pub fn new(url: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            timeout,
        }
    }
}

#[async_trait]
impl Publisher for WebhookPublisher {
    async fn publish(&self, record: &ChangelogRecord) -> Result<(), DeliveryError> {
        let body = payload::build_message(record);
        let response = self
            .client
            .post(&self.url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected { status, body })
    }
}
