//! Filter → sort → paginate pipeline

use super::column::TableRow;
use super::filter::filter_rows;
use super::pagination::{PageState, paginate, total_pages};
use super::sort::{SortState, sort_rows};
use serde::Serialize;

/// One page of the filtered and sorted collection
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPage<R> {
    /// Rows to display, at most `page.page_size`
    pub rows: Vec<R>,
    /// Number of rows that passed the filter (sizes the paginator)
    pub filtered_len: usize,
    /// Page state this page was computed for
    pub page: PageState,
}

impl<R> RenderedPage<R> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_len, self.page.page_size)
    }
}

/// Compute the page to render. `rows` is never modified.
pub fn compute_page<R: TableRow>(
    rows: &[R],
    filter: &str,
    sort: &SortState,
    page: PageState,
) -> RenderedPage<R> {
    let filtered = filter_rows(rows, filter);
    let filtered_len = filtered.len();
    let sorted = sort_rows(filtered, sort);
    let rows_out = paginate(sorted, page);

    tracing::trace!(
        total = rows.len(),
        filtered = filtered_len,
        page_index = page.page_index,
        page_size = page.page_size,
        rendered = rows_out.len(),
        "Computed page"
    );

    RenderedPage {
        rows: rows_out,
        filtered_len,
        page,
    }
}
