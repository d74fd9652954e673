//! table-source
//!
//! Reactive data source for admin table views: a backing collection, a
//! paginator, a sorter and a free-text filter are merged into one stream of
//! rendered pages (filter → sort → paginate).

pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod state;
pub mod table;

pub use error::{Error, Result};
