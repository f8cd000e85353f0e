use crate::record::ChangelogRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimal persisted marker of the newest record already published.
///
/// Both components are optional; once set, each only ever moves forward.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cursor {
    #[serde(default)]
    pub last_id: Option<u64>,

    #[serde(default)]
    pub last_timestamp: Option<DateTime<Utc>>,
}

impl Cursor {
    /// True only before the first record was ever covered.
    pub fn is_empty(&self) -> bool {
        self.last_id.is_none() && self.last_timestamp.is_none()
    }

    /// Moves the cursor forward to cover `record`.
    ///
    /// Components never roll back, even when a stale or out-of-order
    /// record is applied.
    pub fn advance(&mut self, record: &ChangelogRecord) {
        if let Some(id) = record.id {
            self.last_id = Some(self.last_id.map_or(id, |last| last.max(id)));
        }
        if let Some(ts) = record.timestamp() {
            self.last_timestamp = Some(self.last_timestamp.map_or(ts, |last| last.max(ts)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: Option<u64>, created_at: Option<&str>) -> ChangelogRecord {
        ChangelogRecord {
            id,
            created_at: created_at.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn starts_empty() {
        assert!(Cursor::default().is_empty());
    }

    #[test]
    fn advances_both_components() {
        let mut cursor = Cursor::default();
        cursor.advance(&record(Some(3), Some("2025-03-01T10:00:00Z")));

        assert_eq!(cursor.last_id, Some(3));
        assert!(cursor.last_timestamp.is_some());
        assert!(!cursor.is_empty());
    }

    #[test]
    fn never_rolls_back() {
        let mut cursor = Cursor::default();
        cursor.advance(&record(Some(9), Some("2025-03-01T10:00:00Z")));

        // A stale record must not move either component backwards.
        cursor.advance(&record(Some(4), Some("2025-02-01T10:00:00Z")));

        assert_eq!(cursor.last_id, Some(9));
        assert_eq!(
            cursor.last_timestamp.unwrap().to_rfc3339(),
            "2025-03-01T10:00:00+00:00"
        );
    }

    #[test]
    fn record_without_id_advances_timestamp_only() {
        let mut cursor = Cursor::default();
        cursor.advance(&record(None, Some("2025-03-01T10:00:00Z")));

        assert_eq!(cursor.last_id, None);
        assert!(cursor.last_timestamp.is_some());
    }

    #[test]
    fn round_trips_through_json() {
        let mut cursor = Cursor::default();
        cursor.advance(&record(Some(5), Some("2025-03-01T10:00:00Z")));

        let json = serde_json::to_string(&cursor).unwrap();
        let loaded: Cursor = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, cursor);
    }
}
