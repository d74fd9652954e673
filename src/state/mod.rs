//! State - table controllers
//!
//! Each controller owns one piece of table state and publishes changes over
//! a `watch` channel that data sources subscribe to.
//!
//! ```text
//! UI Action → Controller Method → watch::send → TabularDataSource → RenderedPage
//! ```

mod filter_input;
mod paginator;
mod sorter;

pub use filter_input::*;
pub use paginator::*;
pub use sorter::*;
