//! Collection Service
//!
//! In-memory backing collection for a table. Every mutation publishes a new
//! snapshot; snapshots already handed out are never modified.

use crate::error::Result;
use crate::table::{CollectionProvider, TableRow};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

/// Mutable collection of rows with change notification
pub struct CollectionService<R: TableRow> {
    rows: watch::Sender<Arc<Vec<R>>>,
}

impl<R: TableRow> CollectionService<R> {
    pub fn new(rows: Vec<R>) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(rows));
        Self { rows: tx }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Replace the whole collection
    pub fn replace(&self, rows: Vec<R>) {
        info!(rows = rows.len(), "Collection replaced");
        self.rows.send_replace(Arc::new(rows));
    }

    /// Replace the row with the same id, or append it.
    ///
    /// Returns `true` when an existing row was replaced.
    pub fn upsert(&self, row: R) -> bool {
        let mut replaced = false;
        self.rows.send_modify(|rows| {
            let rows = Arc::make_mut(rows);
            match rows.iter_mut().find(|existing| existing.id() == row.id()) {
                Some(existing) => {
                    *existing = row;
                    replaced = true;
                }
                None => rows.push(row),
            }
        });
        tracing::debug!(replaced, "Row upserted");
        replaced
    }

    /// Remove the row with `id`; no change event when it is absent
    pub fn remove(&self, id: &str) -> bool {
        self.rows.send_if_modified(|rows| {
            let Some(position) = rows.iter().position(|row| row.id() == id) else {
                return false;
            };
            Arc::make_mut(rows).remove(position);
            tracing::debug!(id, "Row removed");
            true
        })
    }

    /// Look up a row by id
    pub fn get(&self, id: &str) -> Option<R> {
        self.rows.borrow().iter().find(|row| row.id() == id).cloned()
    }
}

impl<R: TableRow + DeserializeOwned> CollectionService<R> {
    /// Parse a JSON array of rows
    pub fn from_json_str(text: &str) -> Result<Self> {
        let rows: Vec<R> = serde_json::from_str(text)?;
        Ok(Self::new(rows))
    }

    /// Load a JSON array of rows from `path`
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!(path = ?path, "Loading collection file");
        let text = std::fs::read_to_string(path)?;
        let rows: Vec<R> = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(error = %e, path = ?path, "Failed to parse collection file");
            e
        })?;
        info!(rows = rows.len(), "Collection loaded");
        Ok(Self::new(rows))
    }
}

impl<R: TableRow> CollectionProvider for CollectionService<R> {
    type Row = R;

    fn snapshot(&self) -> Arc<Vec<R>> {
        self.rows.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Arc<Vec<R>>> {
        self.rows.subscribe()
    }
}

impl<R: TableRow> Default for CollectionService<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R: TableRow> std::fmt::Debug for CollectionService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionService")
            .field("rows", &self.rows.borrow().len())
            .finish()
    }
}
