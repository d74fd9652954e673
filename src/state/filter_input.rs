//! FilterInput - debounced free-text filter
//!
//! Raw keystroke values go in; after a quiet period the latest value is
//! forwarded to the data source, unless it equals the filter already applied.

use crate::table::FilterSink;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Default quiet period before a typed filter is applied
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

/// Handle to a running filter input task
#[derive(Clone, Debug)]
pub struct FilterInput {
    tx: mpsc::UnboundedSender<String>,
}

impl FilterInput {
    /// Spawn the debounce task feeding `sink`.
    ///
    /// Must be called from within a tokio runtime. The task ends when every
    /// `FilterInput` clone is dropped or the data source disconnects.
    pub fn spawn(sink: FilterSink, debounce: Duration) -> (Self, JoinHandle<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run(rx, sink, debounce));
        (Self { tx }, handle)
    }

    /// Feed the current content of the filter field.
    ///
    /// Returns `false` once the task has stopped.
    pub fn input(&self, value: impl Into<String>) -> bool {
        self.tx.send(value.into()).is_ok()
    }
}

async fn run(mut rx: mpsc::UnboundedReceiver<String>, mut sink: FilterSink, debounce: Duration) {
    loop {
        let mut pending = tokio::select! {
            value = rx.recv() => match value {
                Some(value) => value,
                None => break,
            },
            _ = sink.closed() => break,
        };

        // Keep absorbing input until the field goes quiet.
        loop {
            match tokio::time::timeout(debounce, rx.recv()).await {
                Ok(Some(value)) => pending = value,
                Ok(None) | Err(_) => break,
            }
        }

        if pending != sink.current() {
            sink.set(pending);
        } else {
            tracing::trace!(filter = %pending, "Skipping unchanged filter");
        }
    }

    tracing::debug!("Filter input stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;
    use crate::services::CollectionService;
    use crate::state::{Paginator, Sorter};
    use crate::table::TabularDataSource;

    fn source() -> TabularDataSource<Product> {
        let collection = CollectionService::new(vec![Product::new("1", "Jazz Night", 30.0)]);
        TabularDataSource::new(&collection, &Paginator::default(), &Sorter::new())
    }

    #[tokio::test(start_paused = true)]
    async fn applies_latest_value_after_quiet_period() {
        let source = source();
        let (input, _task) = FilterInput::spawn(source.filter_sink(), DEFAULT_DEBOUNCE);

        assert!(input.input("j"));
        assert!(input.input("ja"));
        assert!(input.input("jaz"));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(source.filter(), "");

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(source.filter(), "jaz");
    }

    #[tokio::test(start_paused = true)]
    async fn identical_values_are_not_reapplied() {
        let source = source();
        let mut changes = source.filter_sink().subscribe();
        let (input, _task) = FilterInput::spawn(source.filter_sink(), DEFAULT_DEBOUNCE);

        input.input("night");
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(changes.has_changed().expect("filter alive"));
        assert_eq!(*changes.borrow_and_update(), "night");

        input.input("nigh");
        input.input("night");
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!changes.has_changed().expect("filter alive"));
    }

    #[tokio::test(start_paused = true)]
    async fn compares_against_filter_set_elsewhere() {
        let source = source();
        let mut changes = source.filter_sink().subscribe();
        let (input, _task) = FilterInput::spawn(source.filter_sink(), DEFAULT_DEBOUNCE);

        input.input("jazz");
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(*changes.borrow_and_update(), "jazz");

        source.set_filter("night");
        changes.borrow_and_update();
        input.input("jazz");
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(source.filter(), "jazz");

        source.set_filter("wine");
        changes.borrow_and_update();
        input.input("wine");
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!changes.has_changed().expect("filter alive"));
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_inputs_dropped() {
        let source = source();
        let (input, task) = FilterInput::spawn(source.filter_sink(), DEFAULT_DEBOUNCE);
        input.input("jazz");
        drop(input);
        task.await.expect("task finished cleanly");
        assert_eq!(source.filter(), "jazz");
    }

    #[tokio::test(start_paused = true)]
    async fn stops_on_disconnect() {
        let source = source();
        let (input, task) = FilterInput::spawn(source.filter_sink(), DEFAULT_DEBOUNCE);
        source.disconnect();
        task.await.expect("task finished cleanly");
        assert!(!input.input("late"));
    }
}
