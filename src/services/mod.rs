//! Service Layer
//!
//! Backing collections for table views. Services own the rows; data sources
//! only ever read snapshots.
//!
//! ```text
//! ┌──────────────────────────┐
//! │    CollectionService     │  replace / upsert / remove
//! └──────────────────────────┘
//!              │
//!              ▼ Arc<Vec<Row>> snapshot
//! ┌──────────────────────────┐
//! │    TabularDataSource     │
//! └──────────────────────────┘
//! ```

mod collection;

pub use collection::*;
