//! Row data access
//!
//! The screen never owns the canonical rows; it talks to a [`RowSource`].
//! Every operation is asynchronous so a network or storage backed store can
//! stand in for [`InMemoryRowSource`].

use std::path::Path;
use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr};
use futures::future::BoxFuture;
use tokio::sync::Mutex;

use crate::domain::row::{Row, RowId};

const SAMPLE_ROWS: &str = include_str!("../../.config/rows.json5");

pub trait RowSource: Send + Sync {
    /// All rows in insertion order
    fn list_rows(&self) -> BoxFuture<'_, Result<Vec<Row>>>;
    /// Returns `false` when no row has this id
    fn set_pinned(&self, id: RowId, pinned: bool) -> BoxFuture<'_, Result<bool>>;
    /// Returns `false` when no row has this id
    fn set_archived(&self, id: RowId, archived: bool) -> BoxFuture<'_, Result<bool>>;
    /// Returns `false` when no row has this id
    fn delete_row(&self, id: RowId) -> BoxFuture<'_, Result<bool>>;
    /// Returns `false` when no row has this id
    fn mark_read(&self, id: RowId) -> BoxFuture<'_, Result<bool>>;
}

/// Memory-resident rows, recreated on every launch
#[derive(Debug, Clone, Default)]
pub struct InMemoryRowSource {
    rows: Arc<Mutex<Vec<Row>>>,
}

impl InMemoryRowSource {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
        }
    }

    /// Parse rows from a JSON5 array
    pub fn from_json5(source: &str) -> Result<Self> {
        let rows: Vec<Row> = json5::from_str(source).wrap_err("Failed to parse rows")?;
        Ok(Self::new(rows))
    }

    /// Rows bundled with the binary
    pub fn sample() -> Result<Self> {
        Self::from_json5(SAMPLE_ROWS)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        Self::from_json5(&source)
    }

    async fn modify(&self, id: &RowId, f: impl FnOnce(&mut Row) + Send) -> bool {
        let mut rows = self.rows.lock().await;
        match rows.iter_mut().find(|row| &row.id == id) {
            Some(row) => {
                f(row);
                true
            }
            None => {
                log::debug!("row {id} not found");
                false
            }
        }
    }
}

impl RowSource for InMemoryRowSource {
    fn list_rows(&self) -> BoxFuture<'_, Result<Vec<Row>>> {
        Box::pin(async move { Ok(self.rows.lock().await.clone()) })
    }

    fn set_pinned(&self, id: RowId, pinned: bool) -> BoxFuture<'_, Result<bool>> {
        Box::pin(async move { Ok(self.modify(&id, |row| row.pinned = pinned).await) })
    }

    fn set_archived(&self, id: RowId, archived: bool) -> BoxFuture<'_, Result<bool>> {
        Box::pin(async move { Ok(self.modify(&id, |row| row.archived = archived).await) })
    }

    fn delete_row(&self, id: RowId) -> BoxFuture<'_, Result<bool>> {
        Box::pin(async move {
            let mut rows = self.rows.lock().await;
            let before = rows.len();
            rows.retain(|row| row.id != id);
            Ok(rows.len() != before)
        })
    }

    fn mark_read(&self, id: RowId) -> BoxFuture<'_, Result<bool>> {
        Box::pin(async move { Ok(self.modify(&id, |row| row.unread_count = 0).await) })
    }
}
