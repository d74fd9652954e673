//! CollectionProvider Trait
//!
//! Abstraction over the backing collection of a table: a current snapshot
//! plus a change notification.

use super::column::TableRow;
use std::sync::Arc;
use tokio::sync::watch;

/// Trait for providing the full collection to a data source
pub trait CollectionProvider: Send + Sync {
    type Row: TableRow;

    /// Current snapshot of the collection
    fn snapshot(&self) -> Arc<Vec<Self::Row>>;

    /// Receiver notified whenever the snapshot is replaced
    fn subscribe(&self) -> watch::Receiver<Arc<Vec<Self::Row>>>;

    /// Get the total number of rows
    fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Check if empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
