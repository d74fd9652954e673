//! Paginator - page state owner
//!
//! Holds the current `PageState` and publishes every change to bound data
//! sources. Navigation is clamped once the filtered length is known.

use crate::table::{PageState, RenderedPage, total_pages};
use tokio::sync::watch;

/// Pagination controller
pub struct Paginator {
    state: watch::Sender<PageState>,
    /// Filtered row count, `None` until the first page was rendered
    length: Option<usize>,
    page_size_options: Vec<usize>,
}

impl Paginator {
    pub fn new(initial: PageState) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            state,
            length: None,
            page_size_options: Vec::new(),
        }
    }

    /// Restrict the page sizes offered to the user
    pub fn with_page_size_options(mut self, options: impl IntoIterator<Item = usize>) -> Self {
        self.page_size_options = options.into_iter().filter(|size| *size > 0).collect();
        self
    }

    // ==================== Getters ====================

    pub fn state(&self) -> PageState {
        *self.state.borrow()
    }

    pub fn page_index(&self) -> usize {
        self.state().page_index
    }

    pub fn page_size(&self) -> usize {
        self.state().page_size
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    pub fn length(&self) -> Option<usize> {
        self.length
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.length.unwrap_or(0), self.page_size())
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_index() > 0
    }

    pub fn has_next_page(&self) -> bool {
        match self.length {
            Some(_) => self.page_index().saturating_add(1) < self.total_pages(),
            None => true,
        }
    }

    /// Receiver notified on every page change
    pub fn subscribe(&self) -> watch::Receiver<PageState> {
        self.state.subscribe()
    }

    // ==================== Setters ====================

    /// Jump to `index`, clamped to the last page when the length is known
    pub fn set_page_index(&mut self, index: usize) {
        let index = self.clamp_index(index);
        self.update(|state| state.page_index = index);
    }

    /// Change the page size and return to the first page
    pub fn set_page_size(&mut self, size: usize) {
        let size = size.max(1);
        self.update(|state| {
            state.page_size = size;
            state.page_index = 0;
        });
    }

    pub fn next_page(&mut self) {
        if self.has_next_page() {
            self.set_page_index(self.page_index().saturating_add(1));
        }
    }

    pub fn previous_page(&mut self) {
        if self.has_previous_page() {
            self.set_page_index(self.page_index() - 1);
        }
    }

    pub fn first_page(&mut self) {
        self.set_page_index(0);
    }

    pub fn last_page(&mut self) {
        if self.length.is_some() {
            self.set_page_index(self.total_pages() - 1);
        }
    }

    /// Record the filtered row count, keeping the current page in range
    pub fn set_length(&mut self, length: usize) {
        self.length = Some(length);
        let clamped = self.clamp_index(self.page_index());
        self.update(|state| state.page_index = clamped);
    }

    /// Size the paginator from a rendered page.
    ///
    /// Returns `true` when the page index had to move, in which case bound
    /// data sources render again.
    pub fn observe<R>(&mut self, page: &RenderedPage<R>) -> bool {
        let before = self.state();
        self.set_length(page.filtered_len);
        self.state() != before
    }

    fn clamp_index(&self, index: usize) -> usize {
        match self.length {
            Some(_) => index.min(self.total_pages() - 1),
            None => index,
        }
    }

    fn update(&self, apply: impl FnOnce(&mut PageState)) {
        self.state.send_if_modified(|state| {
            let before = *state;
            apply(state);
            let changed = *state != before;
            if changed {
                tracing::debug!(
                    page_index = state.page_index,
                    page_size = state.page_size,
                    "Page changed"
                );
            }
            changed
        });
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PageState::default())
    }
}
