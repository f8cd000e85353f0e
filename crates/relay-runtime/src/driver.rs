use connectors::{sink::Publisher, source::RecordSource};
use model::cursor::Cursor;
use relay_core::{
    resolver::{self, Resolution},
    store::CursorStore,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of one synchronization pass, for logging and tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PassSummary {
    pub fetched: usize,
    pub published: usize,
    pub failed: usize,
    pub bootstrapped: bool,
}

/// Orchestrates one fetch → resolve → publish → advance cycle.
///
/// Collaborators sit behind trait objects so alternate transports can be
/// substituted without touching the resolution logic.
pub struct SyncDriver {
    source: Arc<dyn RecordSource>,
    publisher: Arc<dyn Publisher>,
    store: Arc<dyn CursorStore>,
    post_history: bool,
}

impl SyncDriver {
    pub fn new(
        source: Arc<dyn RecordSource>,
        publisher: Arc<dyn Publisher>,
        store: Arc<dyn CursorStore>,
        post_history: bool,
    ) -> Self {
        Self {
            source,
            publisher,
            store,
            post_history,
        }
    }

    /// Runs a single pass to completion.
    ///
    /// Every failure mode is contained here: a fetch failure skips the
    /// pass, a delivery failure skips that record, a cursor write failure
    /// is logged. A pass never takes the scheduled loop down with it.
    pub async fn run_pass(&self) -> PassSummary {
        let mut summary = PassSummary::default();

        // The cursor is read once per pass, before resolution.
        let mut cursor = match self.store.load().await {
            Ok(cursor) => cursor,
            Err(err) => {
                warn!("Failed to load cursor, treating it as empty: {err}");
                Cursor::default()
            }
        };

        let records = match self.source.fetch().await {
            Ok(records) => records,
            Err(err) => {
                warn!("Failed to fetch changelogs, skipping this pass: {err}");
                return summary;
            }
        };
        summary.fetched = records.len();

        let fresh = match resolver::resolve(records, &cursor, self.post_history) {
            Resolution::Bootstrap(initialized) => {
                info!("First run: initializing cursor without publishing history");
                summary.bootstrapped = true;
                self.persist(&initialized).await;
                return summary;
            }
            Resolution::Publish(fresh) => fresh,
        };

        if !fresh.is_empty() {
            info!("Publishing {} new changelog record(s)", fresh.len());
        }

        for record in &fresh {
            // A failed record must not block later ones, but it is never
            // silently marked as published either: the cursor only moves
            // after a confirmed delivery.
            if let Err(err) = self.publisher.publish(record).await {
                warn!("Failed to publish changelog {:?}: {err}", record.id);
                summary.failed += 1;
                continue;
            }

            cursor.advance(record);
            self.persist(&cursor).await;
            summary.published += 1;
            info!("Published changelog {:?}", record.id);
        }

        summary
    }

    async fn persist(&self, cursor: &Cursor) {
        if let Err(err) = self.store.save(cursor).await {
            warn!("Failed to persist cursor, last publish may repeat next pass: {err}");
        }
    }
}
