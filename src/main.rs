//! table-source - render one page of a collection file
//!
//! Loads a JSON collection, applies filter/sort/page arguments through a
//! `TabularDataSource` and prints the rendered page as JSON.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use futures::StreamExt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use table_source::config::TableConfig;
use table_source::domain::{Contact, Product};
use table_source::services::CollectionService;
use table_source::state::Sorter;
use table_source::table::{SortColumn, SortDirection, SortState, TableRow, TabularDataSource};

/// Row type stored in the collection file
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Products,
    Contacts,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file holding an array of rows
    file: PathBuf,

    /// Row type of the file
    #[arg(short, long, value_enum, default_value_t = Kind::Products)]
    kind: Kind,

    /// Free-text filter (case-insensitive)
    #[arg(short, long, default_value = "")]
    filter: String,

    /// Column to sort by
    #[arg(short, long)]
    sort: Option<String>,

    /// Sort direction: asc, desc or none
    #[arg(short, long, default_value = "asc")]
    direction: SortDirection,

    /// 0-based page index
    #[arg(short, long, default_value_t = 0)]
    page: usize,

    /// Rows per page (overrides the config file)
    #[arg(long)]
    page_size: Option<usize>,

    /// Path to configuration file
    #[arg(short, long, env = "TABLE_SOURCE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let config = TableConfig::load_or_default(cli.config.as_deref()).context("loading config")?;

    match cli.kind {
        Kind::Products => render::<Product>(&cli, &config).await,
        Kind::Contacts => render::<Contact>(&cli, &config).await,
    }
}

async fn render<R>(cli: &Cli, config: &TableConfig) -> anyhow::Result<()>
where
    R: TableRow + Serialize + DeserializeOwned,
{
    let collection = CollectionService::<R>::load_json(&cli.file)
        .with_context(|| format!("loading collection {}", cli.file.display()))?;

    let mut paginator = config.paginator();
    if let Some(size) = cli.page_size {
        paginator.set_page_size(size);
    }
    paginator.set_page_index(cli.page);

    let sorter = Sorter::new();
    if let Some(column) = &cli.sort {
        if R::Column::from_id(column).is_none() {
            let known: Vec<&str> = R::Column::all().iter().map(|c| c.id()).collect();
            anyhow::bail!("unknown sort column '{column}', expected one of: {}", known.join(", "));
        }
        sorter.set(SortState::new(column.clone(), cli.direction));
    }

    let source = TabularDataSource::new(&collection, &paginator, &sorter);
    source.set_filter(cli.filter.clone());

    let mut pages = Box::pin(source.connect());
    let mut page = pages.next().await.context("data source closed before rendering")?;
    // An out-of-range --page is pulled back once the filtered length is known.
    if paginator.observe(&page) {
        page = pages.next().await.context("data source closed before rendering")?;
    }
    source.disconnect();

    tracing::info!(
        rendered = page.len(),
        filtered = page.filtered_len,
        total_pages = page.total_pages(),
        "Rendered page"
    );
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}
