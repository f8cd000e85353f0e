use thiserror::Error;

/// Errors from the remote changelog endpoint.
///
/// Every variant is transient: the caller treats a failed fetch as "zero
/// new records this pass", never as a fatal condition.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure or timeout talking to the endpoint.
    #[error("Changelog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("Changelog endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    /// The endpoint answered 2xx but the body was not valid JSON.
    #[error("Changelog endpoint returned invalid JSON: {0}")]
    InvalidJson(#[source] reqwest::Error),
}

/// Errors delivering a single record to the webhook.
///
/// Failure of one record never aborts the rest of the batch; the driver
/// catches each attempt independently.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Network-level failure or timeout talking to the webhook.
    #[error("Webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The webhook answered with a non-success status.
    #[error("Webhook rejected the message with status {status}: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
}
