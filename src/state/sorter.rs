//! Sorter - sort state owner
//!
//! Header clicks cycle a column through ascending, descending and unsorted.

use crate::table::{SortDirection, SortState};
use tokio::sync::watch;

/// Sort controller
pub struct Sorter {
    state: watch::Sender<SortState>,
}

impl Sorter {
    pub fn new() -> Self {
        Self::with_state(SortState::none())
    }

    pub fn with_state(initial: SortState) -> Self {
        let (state, _) = watch::channel(initial);
        Self { state }
    }

    pub fn state(&self) -> SortState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every sort change
    pub fn subscribe(&self) -> watch::Receiver<SortState> {
        self.state.subscribe()
    }

    /// Replace the sort state; notifies only when it differs
    pub fn set(&self, next: SortState) {
        self.state.send_if_modified(|state| {
            if *state == next {
                return false;
            }
            tracing::debug!(active = ?next.active, direction = %next.direction, "Sort changed");
            *state = next;
            true
        });
    }

    /// Header click on `column`
    pub fn sort(&self, column: &str) {
        let current = self.state();
        let next = if current.active.as_deref() == Some(column) {
            match current.direction {
                SortDirection::Ascending => SortState::descending(column),
                SortDirection::Descending => SortState::new(column, SortDirection::None),
                SortDirection::None => SortState::ascending(column),
            }
        } else {
            SortState::ascending(column)
        };
        self.set(next);
    }

    pub fn clear(&self) {
        self.set(SortState::none());
    }
}

impl Default for Sorter {
    fn default() -> Self {
        Self::new()
    }
}
