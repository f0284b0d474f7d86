//! Configuration management for ScholarRec
//!
//! Supports loading configuration from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config.toml, config.yaml)
//! - Default values

use crate::errors::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AppConfig {
    /// Recommender configuration
    #[serde(default)]
    #[validate(nested)]
    pub recommender: RecommenderConfig,

    /// Dataset locations
    #[serde(default)]
    pub data: DataConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RecommenderConfig {
    /// Maximum articles returned per prediction
    #[serde(default = "default_top_n")]
    #[validate(range(min = 1))]
    pub top_n: usize,

    /// Association rules consulted per author during co-author expansion
    #[serde(default = "default_top_n")]
    #[validate(range(min = 1))]
    pub coauthor_top_n: usize,

    /// Ordering among articles with equal citation counts
    #[serde(default)]
    pub tie_break: TieBreak,

    /// Drop repeated articles when accumulating across co-authors
    #[serde(default)]
    pub dedup_accumulated: bool,
}

/// Tie ordering for the largest-n citation selection
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep the order in which candidates were accumulated
    #[default]
    Stable,
    /// Order equal-citation candidates by ascending article id
    ArticleId,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// JSON array of articles
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// JSON array of association rules
    #[serde(default = "default_rules_path")]
    pub rules_path: String,

    /// JSON object mapping author to article ids
    #[serde(default = "default_authors_path")]
    pub authors_path: String,

    /// JSON topic lexicon for the default classifier
    #[serde(default = "default_lexicon_path")]
    pub lexicon_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default = "default_json_logging")]
    pub json_logging: bool,

    /// Service name for tracing
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

// Default value functions
fn default_top_n() -> usize { 10 }
fn default_catalog_path() -> String { "data/articles.json".to_string() }
fn default_rules_path() -> String { "data/association_rules.json".to_string() }
fn default_authors_path() -> String { "data/authors_articles.json".to_string() }
fn default_lexicon_path() -> String { "data/topic_lexicon.json".to_string() }
fn default_log_level() -> String { "info".to_string() }
fn default_json_logging() -> bool { true }
fn default_service_name() -> String { "scholarrec".to_string() }

impl AppConfig {
    /// Load configuration from environment and files
    pub fn load() -> Result<Self> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with defaults
            .set_default("recommender.top_n", default_top_n() as i64)?

            // Load base config file
            .add_source(File::with_name("config/default").required(false))

            // Load environment-specific config
            .add_source(File::with_name(&format!("config/{}", env)).required(false))

            // Load local overrides
            .add_source(File::with_name("config/local").required(false))

            // Load from environment variables with APP__ prefix
            // e.g., APP__RECOMMENDER__TOP_N=20
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
            )

            .build()?;

        Self::finish(config)
    }

    /// Load from a specific TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
            )
            .build()?;

        Self::finish(config)
    }

    fn finish(config: Config) -> Result<Self> {
        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            coauthor_top_n: default_top_n(),
            tie_break: TieBreak::default(),
            dedup_accumulated: false,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            rules_path: default_rules_path(),
            authors_path: default_authors_path(),
            lexicon_path: default_lexicon_path(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logging: default_json_logging(),
            service_name: default_service_name(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recommender: RecommenderConfig::default(),
            data: DataConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}
