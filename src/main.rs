use anyhow::Result;
use clap::Parser;
use joboard::display::{render_card, status_banner};
use joboard::sources::DEFAULT_CATEGORIES;
use joboard::{AppConfig, Choice, FilterMode, JobBoard, JobLoader, Selection};
use std::path::PathBuf;
use tracing::warn;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "joboard")]
#[command(about = "Terminal client for the joboard job-listing aggregator")]
struct Cli {
    /// Free-text search over job title and company
    #[arg(short, long, default_value = "")]
    search: String,

    /// Show only postings with this exact category
    #[arg(long)]
    category: Option<String>,

    /// Location or source filter, interpreted per the configured filter mode
    #[arg(long)]
    place: Option<String>,

    /// Override the job listing endpoint
    #[arg(long)]
    endpoint: Option<String>,

    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)?;
    if let Some(endpoint) = &cli.endpoint {
        config = config.with_api_url(endpoint);
    }

    if let Some(category) = &cli.category {
        if !DEFAULT_CATEGORIES.contains(&category.as_str()) {
            warn!("Category '{}' is not in the known set; expect no matches", category);
        }
    }

    let mut board = JobBoard::new(
        config.filter_mode,
        config.fallback,
        joboard::SourceCatalog::default(),
    );
    if let (FilterMode::Source, Some(place)) = (config.filter_mode, &cli.place) {
        let known = board.sources().names();
        if !known.iter().any(|name| name == place) {
            warn!(
                "Source '{}' is not in the catalog; known sources: {}",
                place,
                known.join(", ")
            );
        }
    }

    board.set_selection(Selection {
        search: cli.search,
        category: Choice::from_opt(cli.category),
        place: Choice::from_opt(cli.place),
    });

    let loader = JobLoader::new(&config.api_url, config.timeout_seconds)?;
    println!("Consulting {} ...", loader.endpoint());
    board.apply_load_result(loader.fetch().await);

    let view = board.view();
    if let Some(banner) = status_banner(&view.status) {
        println!("{}", banner);
    }

    if view.jobs.is_empty() {
        println!("\nNo job postings match right now.");
        return Ok(());
    }

    println!();
    for job in &view.jobs {
        println!("{}\n", render_card(job, board.sources()));
    }
    println!("{} posting(s) shown.", view.jobs.len());

    Ok(())
}
