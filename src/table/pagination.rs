//! Pagination
//!
//! Page state and the final slicing step of the pipeline.

use serde::{Deserialize, Serialize};

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Current page index and page size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    pub page_index: usize,
    pub page_size: usize,
}

impl PageState {
    /// Create a page state; a zero page size is raised to 1
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size: page_size.max(1),
        }
    }

    /// 0-based offset of the first row, `None` on overflow
    pub fn offset(&self) -> Option<usize> {
        self.page_index.checked_mul(self.page_size.max(1))
    }

    /// Index range of this page within a collection of `len` rows
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        match self.offset() {
            Some(start) if start < len => {
                let end = start.saturating_add(self.page_size.max(1)).min(len);
                start..end
            }
            _ => 0..0,
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// Number of pages needed for `len` rows (at least 1)
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Take the rows of `page` out of `rows`; out-of-range pages are empty
pub fn paginate<R>(rows: Vec<R>, page: PageState) -> Vec<R> {
    let range = page.range(rows.len());
    if range.is_empty() {
        return Vec::new();
    }
    rows.into_iter()
        .skip(range.start)
        .take(range.end - range.start)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_is_at_least_one() {
        assert_eq!(PageState::new(0, 0).page_size, 1);
    }

    #[test]
    fn slices_pages_and_clips_last() {
        let rows: Vec<u32> = (0..7).collect();
        assert_eq!(paginate(rows.clone(), PageState::new(0, 3)), vec![0, 1, 2]);
        assert_eq!(paginate(rows.clone(), PageState::new(1, 3)), vec![3, 4, 5]);
        assert_eq!(paginate(rows, PageState::new(2, 3)), vec![6]);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let rows = vec![1, 2, 3];
        assert!(paginate(rows.clone(), PageState::new(5, 2)).is_empty());
        assert!(paginate(rows, PageState::new(usize::MAX, 2)).is_empty());
    }

    #[test]
    fn page_length_formula() {
        for len in 0..12usize {
            for size in 1..5usize {
                for index in 0..6usize {
                    let rows: Vec<usize> = (0..len).collect();
                    let expected = size.min(len.saturating_sub(index * size));
                    assert_eq!(paginate(rows, PageState::new(index, size)).len(), expected);
                }
            }
        }
    }

    #[test]
    fn total_pages_never_zero() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }
}
