//! ScholarRec command-line recommender
//!
//! Loads the catalog, association rules, author index and topic lexicon,
//! runs one prediction and prints the ranked articles as JSON records.

use anyhow::Context;
use clap::Parser;
use scholarrec_common::{config::AppConfig, metrics, Dataset, VERSION};
use scholarrec_recommender::{ArticleRecommender, LexiconClassifier};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use validator::Validate;

#[derive(Parser, Debug)]
#[command(name = "recommend")]
#[command(about = "Recommend scientific articles by topic, co-authorship and citations")]
#[command(version)]
struct Args {
    /// Free-text query
    #[arg(short, long)]
    text: Option<String>,

    /// Author identity
    #[arg(short, long)]
    author: Option<String>,

    /// Override the configured number of results
    #[arg(short = 'n', long, env = "SCHOLARREC_TOP_N")]
    top_n: Option<usize>,

    /// Configuration file (defaults to config/ + APP__ environment)
    #[arg(short, long)]
    config: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path),
        None => AppConfig::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(top_n) = args.top_n {
        config.recommender.top_n = top_n;
        config.validate().context("Invalid --top-n")?;
    }

    init_tracing(&config);
    info!(service = %config.observability.service_name, "Starting ScholarRec recommender v{}", VERSION);

    metrics::register_metrics();

    let dataset = Dataset::load(&config.data)?;
    let classifier = LexiconClassifier::from_file(&config.data.lexicon_path)?;
    info!(terms = classifier.vocabulary_size(), "Topic lexicon loaded");

    let recommender = ArticleRecommender::from_dataset(Arc::new(classifier), dataset, &config.recommender);

    let output = recommender.predict_json(args.text.as_deref(), args.author.as_deref())?;
    println!("{}", output);

    Ok(())
}

/// Logs go to stderr; stdout carries the JSON result
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if config.observability.json_logging {
        builder.json().init();
    } else {
        builder.init();
    }
}
