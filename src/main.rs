use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use bookseries::config::{CatalogKind, Config};
use bookseries::model::text::{to_long_us_date_or_self, truncated};
use bookseries::model::BookDisplayData;
use bookseries::runtime::{Environment, Store};
use bookseries::telemetry::init_tracing;
use bookseries::ui::book_list::{BookListIntent, BookListViewIntent};
use bookseries::ui::coordinator::CoordinatorIntent;
use bookseries::ui::root::{AppIntent, AppReducer, AppState};
use clap::Parser;

/// Summaries at least this long are folded unless expanded.
const SUMMARY_FOLD_CHARS: usize = 450;

#[derive(Parser, Debug)]
#[command(name = "bookseries", version, about = "Browse a book series from the terminal")]
struct Cli {
    /// Config file (default: ~/.config/bookseries/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Read the catalog from a JSON file instead of the configured source
    #[arg(long, value_name = "PATH", conflicts_with = "mock")]
    catalog: Option<PathBuf>,

    /// Use the sample catalog and in-memory summary flags
    #[arg(long)]
    mock: bool,

    /// Series number to show, starting at 1
    #[arg(long, value_name = "N")]
    select: Option<isize>,

    /// Flip the summary state of the shown book
    #[arg(long)]
    toggle_summary: bool,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(path) = cli.catalog.clone() {
        config.catalog.source = CatalogKind::File;
        config.catalog.path = Some(path);
    }

    let filter = if cli.verbose {
        "debug".to_string()
    } else {
        config.logging.filter.clone()
    };
    init_tracing(&filter);

    let env = if cli.mock {
        Environment::mock()
    } else {
        Environment::from_config(&config).context("Invalid configuration")?
    };
    let timeout = config.idle_timeout();

    let mut store: Store<AppReducer> = Store::new(AppState::default(), env);
    store.send(CoordinatorIntent::OnAppear.into());
    settle(&mut store, timeout).await?;

    if let Some(number) = cli.select {
        store.send(book_list_intent(BookListViewIntent::SeriesSelected {
            index: number.saturating_sub(1),
        }));
    }

    if cli.toggle_summary {
        let key = store
            .state()
            .book_coordinator()
            .and_then(|coordinator| coordinator.book_list.current_summary_key());
        match key {
            Some(key) => {
                store.send(book_list_intent(BookListViewIntent::SummaryToggleTapped { key }));
            }
            None => tracing::warn!("No book selected, nothing to toggle"),
        }
    }
    settle(&mut store, timeout).await?;

    let Some(book_list) = store
        .state()
        .book_coordinator()
        .map(|coordinator| &coordinator.book_list)
    else {
        bail!("Book coordinator is not active");
    };

    if let Some(message) = &book_list.error_message {
        bail!("{message}");
    }

    match book_list.display_data() {
        Some(data) => print_book(&data),
        None => println!("No books in the catalog."),
    }
    Ok(())
}

fn book_list_intent(intent: BookListViewIntent) -> AppIntent {
    CoordinatorIntent::BookList(BookListIntent::View(intent)).into()
}

async fn settle(store: &mut Store<AppReducer>, timeout: Duration) -> anyhow::Result<()> {
    tokio::time::timeout(timeout, store.run_until_idle())
        .await
        .with_context(|| format!("Effects did not finish within {}s", timeout.as_secs()))
}

fn print_book(data: &BookDisplayData) {
    let book = &data.book;

    println!("[{}/{}] {}", data.series_number, data.total_series, book.title);
    println!("Author:     {}", book.author);
    println!("Pages:      {}", book.pages);
    println!("Released:   {}", to_long_us_date_or_self(&book.release_date));
    if let Some(dedication) = &book.dedication {
        println!("Dedication: {dedication}");
    }
    println!();

    let foldable = book.summary.chars().count() >= SUMMARY_FOLD_CHARS;
    if foldable && !data.is_summary_expanded {
        println!("{}", truncated(&book.summary, SUMMARY_FOLD_CHARS, "…"));
        println!("(folded; pass --toggle-summary to expand)");
    } else {
        println!("{}", book.summary);
    }
    println!();

    println!("Chapters:");
    for (index, chapter) in book.chapters.iter().enumerate() {
        println!("  {}. {chapter}", index + 1);
    }
    println!();
    println!("Wiki: {}", book.wiki);
}
