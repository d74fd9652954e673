//! Table data source
//!
//! In-memory filter/sort/paginate pipeline backing a table view.

pub mod column;
pub mod data_provider;
pub mod data_source;
pub mod filter;
pub mod pagination;
pub mod pipeline;
pub mod sort;
pub mod value;

pub use column::{SortColumn, TableRow};
pub use data_provider::CollectionProvider;
pub use data_source::{FilterSink, TabularDataSource};
pub use filter::filter_rows;
pub use pagination::{DEFAULT_PAGE_SIZE, PageState, paginate, total_pages};
pub use pipeline::{RenderedPage, compute_page};
pub use sort::{SortDirection, SortState, sort_rows};
pub use value::FieldValue;
