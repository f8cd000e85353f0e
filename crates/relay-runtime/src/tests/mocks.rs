use async_trait::async_trait;
use connectors::{
    error::{DeliveryError, FetchError},
    sink::Publisher,
    source::RecordSource,
};
use model::{cursor::Cursor, record::ChangelogRecord};
use relay_core::store::{CursorStore, PersistenceError};
use std::{
    collections::HashSet,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

/// Source that replays a fixed batch, or fails every fetch.
pub struct MockSource {
    batch: Vec<ChangelogRecord>,
    fail: bool,
    pub fetch_count: AtomicUsize,
}

impl MockSource {
    pub fn with_batch(batch: Vec<ChangelogRecord>) -> Self {
        Self {
            batch,
            fail: false,
            fetch_count: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            batch: Vec::new(),
            fail: true,
            fetch_count: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RecordSource for MockSource {
    async fn fetch(&self) -> Result<Vec<ChangelogRecord>, FetchError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(FetchError::Status(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
        Ok(self.batch.clone())
    }
}

/// Publisher that records delivery order and fails configured ids.
pub struct MockPublisher {
    fail_ids: HashSet<u64>,
    pub delivered: Mutex<Vec<Option<u64>>>,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self::failing_ids(&[])
    }

    pub fn failing_ids(ids: &[u64]) -> Self {
        Self {
            fail_ids: ids.iter().copied().collect(),
            delivered: Mutex::new(Vec::new()),
        }
    }

    pub fn delivered_ids(&self) -> Vec<Option<u64>> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for MockPublisher {
    async fn publish(&self, record: &ChangelogRecord) -> Result<(), DeliveryError> {
        if record.id.is_some_and(|id| self.fail_ids.contains(&id)) {
            return Err(DeliveryError::Rejected {
                status: reqwest::StatusCode::BAD_GATEWAY,
                body: "mock outage".to_string(),
            });
        }
        self.delivered.lock().unwrap().push(record.id);
        Ok(())
    }
}

/// In-memory cursor store that keeps the full save history.
pub struct MemoryCursorStore {
    current: Mutex<Cursor>,
    pub saves: Mutex<Vec<Cursor>>,
}

impl MemoryCursorStore {
    pub fn empty() -> Self {
        Self::seeded(Cursor::default())
    }

    pub fn seeded(cursor: Cursor) -> Self {
        Self {
            current: Mutex::new(cursor),
            saves: Mutex::new(Vec::new()),
        }
    }

    pub fn current(&self) -> Cursor {
        self.current.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }
}

#[async_trait]
impl CursorStore for MemoryCursorStore {
    async fn load(&self) -> Result<Cursor, PersistenceError> {
        Ok(self.current())
    }

    async fn save(&self, cursor: &Cursor) -> Result<(), PersistenceError> {
        *self.current.lock().unwrap() = cursor.clone();
        self.saves.lock().unwrap().push(cursor.clone());
        Ok(())
    }
}

pub fn record_with_id(id: u64) -> ChangelogRecord {
    ChangelogRecord {
        id: Some(id),
        message: Some(format!("update {id}")),
        ..Default::default()
    }
}

pub fn record_with_timestamp(created_at: &str) -> ChangelogRecord {
    ChangelogRecord {
        created_at: Some(created_at.to_string()),
        message: Some("timestamped update".to_string()),
        ..Default::default()
    }
}
