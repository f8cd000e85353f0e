use async_trait::async_trait;
use model::cursor::Cursor;
use thiserror::Error;

pub mod file_store;

/// Cursor read/write failures.
///
/// Load failures degrade to the empty cursor at the call site; save
/// failures are logged by the driver and the pass goes on, at the cost of
/// possible re-delivery next pass.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Cursor I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cursor serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable storage for the publication cursor.
///
/// Read once at the start of a pass, written after each individual
/// successful publish. No concurrent access happens within a pass.
#[async_trait]
pub trait CursorStore: Send + Sync {
    async fn load(&self) -> Result<Cursor, PersistenceError>;
    async fn save(&self, cursor: &Cursor) -> Result<(), PersistenceError>;
}
