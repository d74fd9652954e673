//! Column Definitions
//!
//! Rows expose their fields through an enumerated column type. Sorting maps
//! the active column identifier to a typed accessor instead of looking
//! fields up by name at runtime.

use super::value::FieldValue;

/// Enumerated, sortable columns of a row type
pub trait SortColumn: Copy + Send + Sync + 'static {
    /// Resolve a column identifier (as used by table headers).
    ///
    /// Unknown identifiers return `None`, which disables sorting.
    fn from_id(id: &str) -> Option<Self>;

    /// Canonical identifier of this column
    fn id(self) -> &'static str;

    /// All sortable columns, in display order
    fn all() -> &'static [Self];
}

/// A record that can be displayed in a table
pub trait TableRow: Clone + Send + Sync + 'static {
    type Column: SortColumn;

    /// Stable identity of the row
    fn id(&self) -> &str;

    /// Every field of the row, considered by the free-text filter
    fn fields(&self) -> Vec<FieldValue>;

    /// Value of `column`, compared by the sort stage
    fn sort_key(&self, column: Self::Column) -> FieldValue;
}
