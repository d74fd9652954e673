//! TabularDataSource
//!
//! Merges four change sources (collection, page, filter, sort) into one
//! stream of rendered pages.
//!
//! ```text
//! collection ─┐
//! page ───────┤
//! filter ─────┼─► select! ─► filter → sort → paginate ─► RenderedPage
//! sort ───────┘
//! ```
//!
//! Every source is a `watch` channel, so pending changes coalesce and only
//! the latest combination of states is ever rendered.

use super::column::TableRow;
use super::data_provider::CollectionProvider;
use super::pagination::PageState;
use super::pipeline::{RenderedPage, compute_page};
use super::sort::SortState;
use crate::state::{Paginator, Sorter};
use futures::Stream;
use futures::stream;
use std::sync::Arc;
use tokio::sync::watch;

/// Reactive filter/sort/paginate data source bound to one collection,
/// one paginator and one sorter
pub struct TabularDataSource<R: TableRow> {
    collection: watch::Receiver<Arc<Vec<R>>>,
    page: watch::Receiver<PageState>,
    sort: watch::Receiver<SortState>,
    filter: Arc<watch::Sender<String>>,
    shutdown: watch::Sender<bool>,
}

impl<R: TableRow> TabularDataSource<R> {
    /// Create a data source bound to its collaborators
    pub fn new<P>(provider: &P, paginator: &Paginator, sorter: &Sorter) -> Self
    where
        P: CollectionProvider<Row = R> + ?Sized,
    {
        let (filter, _) = watch::channel(String::new());
        let (shutdown, _) = watch::channel(false);
        Self {
            collection: provider.subscribe(),
            page: paginator.subscribe(),
            sort: sorter.subscribe(),
            filter: Arc::new(filter),
            shutdown,
        }
    }

    /// Current filter text
    pub fn filter(&self) -> String {
        self.filter.borrow().clone()
    }

    /// Replace the filter text and trigger a recomputation
    pub fn set_filter(&self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(filter = %text, "Filter changed");
        self.filter.send_replace(text);
    }

    /// Handle for feeding the filter from another task
    pub fn filter_sink(&self) -> FilterSink {
        FilterSink {
            filter: self.filter.clone(),
            shutdown: self.shutdown.subscribe(),
        }
    }

    /// Compute the current page synchronously
    pub fn render(&self) -> RenderedPage<R> {
        let rows = self.collection.borrow().clone();
        let filter = self.filter.borrow().clone();
        let sort = self.sort.borrow().clone();
        let page = *self.page.borrow();
        compute_page(&rows, &filter, &sort, page)
    }

    /// Whether `disconnect` has been called
    pub fn is_disconnected(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Subscribe to rendered pages.
    ///
    /// The stream yields the current page on first poll, then one page per
    /// observed change. It ends after [`disconnect`](Self::disconnect) or
    /// when the data source is dropped.
    pub fn connect(&self) -> impl Stream<Item = RenderedPage<R>> + Send + use<R> {
        let connection = Connection {
            collection: Source::new(self.collection.clone()),
            page: Source::new(self.page.clone()),
            sort: Source::new(self.sort.clone()),
            filter: Source::new(self.filter.subscribe()),
            shutdown: self.shutdown.subscribe(),
            primed: false,
        };

        stream::unfold(connection, |mut connection| async move {
            if *connection.shutdown.borrow() {
                return None;
            }
            if connection.primed && !connection.wait_for_change().await {
                return None;
            }
            connection.primed = true;
            let page = connection.render();
            Some((page, connection))
        })
    }

    /// Stop all connected streams. Safe to call repeatedly.
    pub fn disconnect(&self) {
        if !self.shutdown.send_replace(true) {
            tracing::debug!("Data source disconnected");
        }
    }
}

impl<R: TableRow> std::fmt::Debug for TabularDataSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabularDataSource")
            .field("filter", &*self.filter.borrow())
            .field("sort", &*self.sort.borrow())
            .field("page", &*self.page.borrow())
            .field("rows", &self.collection.borrow().len())
            .field("disconnected", &self.is_disconnected())
            .finish()
    }
}

/// Write access to a data source's filter, detached from the data source
#[derive(Clone)]
pub struct FilterSink {
    filter: Arc<watch::Sender<String>>,
    shutdown: watch::Receiver<bool>,
}

impl FilterSink {
    /// Current filter text
    pub fn current(&self) -> String {
        self.filter.borrow().clone()
    }

    /// Replace the filter text
    pub fn set(&self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(filter = %text, "Filter changed");
        self.filter.send_replace(text);
    }

    /// Receiver observing filter changes
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.filter.subscribe()
    }

    /// Resolves once the data source is disconnected or dropped
    pub async fn closed(&mut self) {
        while !*self.shutdown.borrow_and_update() {
            if self.shutdown.changed().await.is_err() {
                return;
            }
        }
    }
}

/// One change source of a connection
struct Source<T> {
    rx: watch::Receiver<T>,
    open: bool,
}

impl<T> Source<T> {
    fn new(rx: watch::Receiver<T>) -> Self {
        Self { rx, open: true }
    }

    /// Resolves on the next change; never resolves once the sender is gone
    async fn changed(&mut self) {
        if self.open {
            if self.rx.changed().await.is_ok() {
                return;
            }
            self.open = false;
        }
        std::future::pending::<()>().await
    }
}

/// Per-subscriber state of a connected stream
struct Connection<R> {
    collection: Source<Arc<Vec<R>>>,
    page: Source<PageState>,
    sort: Source<SortState>,
    filter: Source<String>,
    shutdown: watch::Receiver<bool>,
    primed: bool,
}

impl<R: TableRow> Connection<R> {
    /// Wait for any source to change; `false` means the stream should end
    async fn wait_for_change(&mut self) -> bool {
        tokio::select! {
            biased;
            _ = self.shutdown.changed() => false,
            _ = self.collection.changed() => true,
            _ = self.page.changed() => true,
            _ = self.filter.changed() => true,
            _ = self.sort.changed() => true,
        }
    }

    /// Render from the latest state of every source, marking all as seen
    fn render(&mut self) -> RenderedPage<R> {
        let rows = self.collection.rx.borrow_and_update().clone();
        let filter = self.filter.rx.borrow_and_update().clone();
        let sort = self.sort.rx.borrow_and_update().clone();
        let page = *self.page.rx.borrow_and_update();
        compute_page(&rows, &filter, &sort, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;
    use crate::services::CollectionService;
    use crate::table::SortDirection;
    use futures::StreamExt;
    use std::time::Duration;

    fn sample() -> Vec<Product> {
        vec![
            Product::new("1", "Jazz Night", 30.0),
            Product::new("2", "Wine Tasting", 10.0),
            Product::new("3", "City Marathon", 20.0),
        ]
    }

    fn ids(page: &RenderedPage<Product>) -> Vec<String> {
        page.rows.iter().map(|r| r.id.clone()).collect()
    }

    struct Fixture {
        collection: CollectionService<Product>,
        paginator: Paginator,
        sorter: Sorter,
        source: TabularDataSource<Product>,
    }

    fn fixture() -> Fixture {
        let collection = CollectionService::new(sample());
        let paginator = Paginator::new(PageState::new(0, 2));
        let sorter = Sorter::new();
        let source = TabularDataSource::new(&collection, &paginator, &sorter);
        Fixture {
            collection,
            paginator,
            sorter,
            source,
        }
    }

    async fn next_page<S>(stream: &mut S) -> RenderedPage<Product>
    where
        S: Stream<Item = RenderedPage<Product>> + Unpin,
    {
        tokio::time::timeout(Duration::from_secs(1), stream.next())
            .await
            .expect("page within timeout")
            .expect("stream still open")
    }

    #[tokio::test]
    async fn emits_current_page_on_connect() {
        let fx = fixture();
        let mut pages = Box::pin(fx.source.connect());
        let page = next_page(&mut pages).await;
        assert_eq!(ids(&page), vec!["1", "2"]);
        assert_eq!(page.filtered_len, 3);
    }

    #[tokio::test]
    async fn recomputes_on_each_source() {
        let mut fx = fixture();
        let mut pages = Box::pin(fx.source.connect());
        next_page(&mut pages).await;

        fx.sorter.set(SortState::new("price", SortDirection::Ascending));
        assert_eq!(ids(&next_page(&mut pages).await), vec!["2", "3"]);

        fx.paginator.set_page_index(1);
        assert_eq!(ids(&next_page(&mut pages).await), vec!["1"]);

        fx.source.set_filter("wine");
        let page = next_page(&mut pages).await;
        assert!(page.is_empty());
        assert_eq!(page.filtered_len, 1);

        fx.paginator.first_page();
        assert_eq!(ids(&next_page(&mut pages).await), vec!["2"]);

        fx.collection.upsert(Product::new("4", "Wine & Cheese", 5.0));
        assert_eq!(ids(&next_page(&mut pages).await), vec!["4", "2"]);
    }

    #[tokio::test]
    async fn shrinking_filter_pulls_observing_paginator_back() {
        let mut fx = fixture();
        let mut pages = Box::pin(fx.source.connect());
        let page = next_page(&mut pages).await;
        assert!(!fx.paginator.observe(&page));
        assert_eq!(fx.paginator.total_pages(), 2);

        fx.paginator.last_page();
        let page = next_page(&mut pages).await;
        assert_eq!(ids(&page), vec!["3"]);

        fx.source.set_filter("jazz");
        let page = next_page(&mut pages).await;
        assert!(page.is_empty());
        assert_eq!(page.page.page_index, 1);

        assert!(fx.paginator.observe(&page));
        assert_eq!(fx.paginator.page_index(), 0);
        let page = next_page(&mut pages).await;
        assert_eq!(ids(&page), vec!["1"]);
        assert!(!fx.paginator.observe(&page));
    }

    #[tokio::test]
    async fn coalesces_pending_changes() {
        let fx = fixture();
        let mut pages = Box::pin(fx.source.connect());
        next_page(&mut pages).await;

        fx.source.set_filter("a");
        fx.source.set_filter("ma");
        fx.source.set_filter("marathon");
        let page = next_page(&mut pages).await;
        assert_eq!(ids(&page), vec!["3"]);

        // Nothing else is pending.
        let idle = tokio::time::timeout(Duration::from_millis(50), pages.next()).await;
        assert!(idle.is_err());
    }

    #[tokio::test]
    async fn disconnect_ends_streams_and_is_idempotent() {
        let fx = fixture();
        let mut first = Box::pin(fx.source.connect());
        let mut second = Box::pin(fx.source.connect());
        next_page(&mut first).await;
        next_page(&mut second).await;

        fx.source.disconnect();
        fx.source.disconnect();
        assert!(fx.source.is_disconnected());

        assert!(first.next().await.is_none());
        assert!(second.next().await.is_none());

        let mut late = Box::pin(fx.source.connect());
        assert!(late.next().await.is_none());
    }

    #[tokio::test]
    async fn dropping_source_ends_stream() {
        let fx = fixture();
        let mut pages = Box::pin(fx.source.connect());
        next_page(&mut pages).await;
        drop(fx.source);
        assert!(pages.next().await.is_none());
    }

    #[tokio::test]
    async fn closed_collaborator_does_not_spin() {
        let fx = fixture();
        let mut pages = Box::pin(fx.source.connect());
        next_page(&mut pages).await;

        drop(fx.collection);
        drop(fx.sorter);
        let idle = tokio::time::timeout(Duration::from_millis(50), pages.next()).await;
        assert!(idle.is_err());

        fx.source.set_filter("jazz");
        assert_eq!(ids(&next_page(&mut pages).await), vec!["1"]);
    }

    #[tokio::test]
    async fn subscribers_are_independent() {
        let fx = fixture();
        let mut first = Box::pin(fx.source.connect());
        next_page(&mut first).await;
        fx.source.set_filter("city");
        assert_eq!(ids(&next_page(&mut first).await), vec!["3"]);

        let mut second = Box::pin(fx.source.connect());
        assert_eq!(ids(&next_page(&mut second).await), vec!["3"]);
    }

    #[test]
    fn render_matches_pipeline() {
        let fx = fixture();
        fx.source.set_filter("i");
        let page = fx.source.render();
        assert_eq!(ids(&page), vec!["1", "2"]);
        assert_eq!(fx.source.filter(), "i");
    }
}
