use std::time::Instant;

use clap::Parser;
use pokebox_sdk::config::MIN_LOADING_VISIBLE;
use pokebox_sdk::models::PokemonRef;
use pokebox_sdk::notifier::hold_time;
use pokebox_sdk::{DisplayNotifier, PokeboxSdk};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing_subscriber::EnvFilter;

/// Page through PokeAPI or look up a single Pokemon.
#[derive(Debug, Parser)]
struct Args {
    /// Number of pages to load
    #[arg(short, long, default_value_t = 1)]
    pages: usize,

    /// Exact name to search for instead of paging
    #[arg(short, long)]
    search: Option<String>,

    /// Override the API root
    #[arg(long)]
    base_url: Option<String>,
}

/// Prints progress; finished loads are handed to `main`, which keeps the
/// loading line up for the minimum visible time without blocking the runtime.
struct Terminal {
    finished: UnboundedSender<Instant>,
}

impl DisplayNotifier for Terminal {
    fn on_loading_started(&self) {
        eprintln!("Loading data...");
    }

    fn on_loading_finished(&self, started_at: Instant, success: bool) {
        let _ = self.finished.send(started_at);
        if !success {
            eprintln!("Some entries could not be loaded");
        }
    }

    fn on_search_started(&self) {
        eprintln!("Searching...");
    }

    fn on_search_finished(&self, result: Option<&PokemonRef>) {
        if result.is_none() {
            eprintln!("No match");
        }
    }
}

#[tokio::main]
async fn main() -> pokebox_sdk::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut builder = PokeboxSdk::builder();
    if let Some(url) = args.base_url {
        builder = builder.base_url(url);
    }
    let sdk = builder.build()?;
    let (finished, mut finished_rx) = unbounded_channel();
    let browser = sdk.orchestrator(Terminal { finished });

    match args.search {
        Some(query) => {
            browser.set_query(&query).await;
        }
        None => {
            for _ in 0..args.pages {
                browser.load_more_page().await;
                hold_loading_line(&mut finished_rx).await;
            }
        }
    }

    for pokemon in browser.visible_items() {
        match browser.detail(&pokemon.name) {
            Some(detail) => println!(
                "{:<12} [{}] {}",
                detail.name,
                detail.types.join(", "),
                detail.description.unwrap_or_default()
            ),
            None => println!("{:<12} (details unavailable)", pokemon.name),
        }
    }
    Ok(())
}

async fn hold_loading_line(finished: &mut UnboundedReceiver<Instant>) {
    while let Ok(started_at) = finished.try_recv() {
        tokio::time::sleep(hold_time(started_at, MIN_LOADING_VISIBLE)).await;
    }
}
