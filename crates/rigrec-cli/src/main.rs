use clap::{Parser, Subcommand};
use rigrec_core::{BudgetRange, StorageTier, UserPreferences};
use rigrec_pipeline::{recommend, RecommendOptions};
use rigrec_search::{fetch_candidates, SearchClient};

#[derive(Debug, Parser)]
#[command(name = "rigrec-cli")]
#[command(about = "Prebuilt desktop PC recommendations from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch candidates and print ranked recommendations.
    Recommend {
        /// Budget range: under-700, 700-999, 1000-1499, or 1500-plus.
        #[arg(long)]
        budget: Option<String>,
        /// Minimum storage tier: 256-512, 1tb, 2tb, or none.
        #[arg(long)]
        storage: Option<String>,
        /// Maximum number of recommendations.
        #[arg(long)]
        limit: Option<usize>,
        /// Skip the upstream search and use the fallback catalog directly.
        #[arg(long)]
        offline: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Recommend {
            budget,
            storage,
            limit,
            offline,
        } => run_recommend(budget, storage, limit, offline).await,
    }
}

async fn run_recommend(
    budget: Option<String>,
    storage: Option<String>,
    limit: Option<usize>,
    offline: bool,
) -> anyhow::Result<()> {
    let config = rigrec_core::load_app_config()?;
    let catalog = rigrec_core::load_catalog(&config.catalog_path)?;

    let preferences = UserPreferences {
        budget: BudgetRange::parse_or_default(budget.as_deref()),
        storage: StorageTier::parse_or_default(storage.as_deref()),
    };

    let client = if offline {
        None
    } else {
        match &config.search_api_key {
            Some(key) => {
                let client = match &config.search_base_url {
                    Some(base) => {
                        SearchClient::with_base_url(key, config.search_timeout_secs, base)?
                    }
                    None => SearchClient::new(key, config.search_timeout_secs)?,
                };
                Some(client)
            }
            None => None,
        }
    };

    let band = preferences.budget.price_band();
    let candidates = fetch_candidates(
        client.as_ref(),
        &catalog,
        &config.search_phrase,
        band,
        config.search_result_cap,
    )
    .await;

    let options = RecommendOptions {
        limit: limit.unwrap_or(config.result_limit),
        budget_tolerance: config.budget_tolerance,
    };
    let recommendations = recommend(&candidates.listings, &preferences, &options);

    if candidates.from_fallback {
        println!("(live search unavailable — showing curated fallback picks)\n");
    }

    if recommendations.is_empty() {
        println!(
            "No eligible desktops found for budget {} / storage {}.",
            preferences.budget, preferences.storage
        );
        return Ok(());
    }

    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. [{:.1}] {} — ${:.2}",
            rank + 1,
            rec.score,
            rec.listing.title,
            rec.listing.price
        );
        for reason in &rec.reasons {
            println!("     {reason}");
        }
        println!("     {}", rec.listing.url);
        println!();
    }

    Ok(())
}
