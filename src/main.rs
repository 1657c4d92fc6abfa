use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use newsdigest::environment::{self, NewsConfig, DEFAULT_LOG_DIR, MAX_COUNT, MIN_COUNT};
use newsdigest::logging::configure_logging;
use newsdigest::newsdata::fetch_top_n;
use newsdigest::output::{read_items, write_json, write_top_news_json};
use newsdigest::build_digest;

#[derive(Parser)]
#[clap(name = "newsdigest", about = "Summarize the latest headlines into storylines")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the latest headlines from NewsData.io and write the summary JSON
    Fetch {
        /// Language code (overrides NEWS_LANGUAGE)
        #[clap(short, long)]
        language: Option<String>,

        /// Category filter, "(all)" for none (overrides NEWS_CATEGORY)
        #[clap(short, long)]
        category: Option<String>,

        /// Number of headlines to fetch, clamped to 20-100 (overrides NEWS_N)
        #[clap(short = 'n', long)]
        count: Option<String>,

        /// Output file (overrides NEWS_OUTPUT)
        #[clap(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize headlines from a JSON file without touching the network
    Summarize {
        /// JSON array of records, or a NewsData response with a "results" array
        #[clap(short, long, required = true)]
        input: PathBuf,

        /// Write the digest here instead of printing it
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let log_dir = environment::get_env_var_or("NEWS_LOG_DIR", DEFAULT_LOG_DIR);
    configure_logging(Path::new(&log_dir));

    let args = Cli::parse();

    let result = match args.command {
        Commands::Fetch {
            language,
            category,
            count,
            output,
        } => fetch(language, category, count, output).await,
        Commands::Summarize { input, output } => summarize(input, output),
    };

    if let Err(err) = &result {
        error!("{:#}", err);
    }
    result
}

async fn fetch(
    language: Option<String>,
    category: Option<String>,
    count: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut config = NewsConfig::from_env()?;
    if let Some(language) = language {
        config.language = environment::parse_language(Some(&language));
    }
    if let Some(category) = category {
        config.category = environment::parse_category(Some(&category));
    }
    if let Some(count) = count {
        config.count = environment::parse_count(Some(&count));
    }
    if let Some(output) = output {
        config.output_path = output;
    }

    info!(
        "Fetching {} headlines ({}-{} allowed) into {}",
        config.count,
        MIN_COUNT,
        MAX_COUNT,
        config.output_path.display()
    );

    let items = fetch_top_n(&config).await?;
    write_top_news_json(
        &items,
        &config.language,
        config.category.as_deref(),
        &config.output_path,
    )?;
    Ok(())
}

fn summarize(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let items = read_items(&input)?;
    info!("Loaded {} items from {}", items.len(), input.display());

    let digest = build_digest(&items);
    match output {
        Some(path) => {
            write_json(&digest, &path)?;
            info!("Wrote digest to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&digest)?),
    }
    Ok(())
}
