use crate::store::{CursorStore, PersistenceError};
use async_trait::async_trait;
use model::cursor::Cursor;
use std::path::PathBuf;
use tracing::warn;

/// Cursor persistence as a small JSON document on disk.
pub struct FileCursorStore {
    path: PathBuf,
}

impl FileCursorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

#[async_trait]
impl CursorStore for FileCursorStore {
    async fn load(&self) -> Result<Cursor, PersistenceError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Cursor::default());
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(cursor) => Ok(cursor),
            Err(err) => {
                warn!(
                    "Cursor file {} is unreadable, starting from an empty cursor: {err}",
                    self.path.display()
                );
                Ok(Cursor::default())
            }
        }
    }

    async fn save(&self, cursor: &Cursor) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(cursor)?;

        // Write-then-rename so a crash mid-write never leaves a torn cursor.
        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
