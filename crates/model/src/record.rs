use crate::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single changelog entry as returned by the remote API.
///
/// Field presence varies across API shapes, so every field is optional and
/// unknown fields are ignored. The message text is either pre-split into
/// language variants or a single raw `message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChangelogRecord {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default, rename = "createdAt", alias = "created_at")]
    pub created_at: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default, alias = "messagePt")]
    pub message_pt: Option<String>,

    #[serde(default, alias = "messageEn")]
    pub message_en: Option<String>,
}

impl ChangelogRecord {
    /// Parsed `createdAt`, or `None` when absent or malformed.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .as_deref()
            .and_then(timestamp::parse_timestamp)
    }

    /// Synthetic ordering key: the numeric id when present, otherwise the
    /// parsed timestamp in epoch milliseconds, otherwise 0 (sorts first).
    ///
    /// Best-effort only: records lacking both fields are unordered
    /// relative to each other.
    pub fn sort_key(&self) -> i128 {
        if let Some(id) = self.id {
            return id as i128;
        }
        self.timestamp()
            .map(|ts| ts.timestamp_millis() as i128)
            .unwrap_or(0)
    }
}
