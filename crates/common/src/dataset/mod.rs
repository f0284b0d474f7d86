//! JSON dataset loading
//!
//! Reads the precomputed artifacts the recommender runs on: the article
//! catalog, mined association rules, and the author→articles index.

use crate::config::DataConfig;
use crate::errors::{AppError, Result};
use crate::models::{AssociationRule, AuthorArticleIndex, Catalog, Article};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// All artifacts needed to build a recommender
#[derive(Debug, Clone)]
pub struct Dataset {
    pub catalog: Catalog,
    pub rules: Vec<AssociationRule>,
    pub authors: AuthorArticleIndex,
}

impl Dataset {
    /// Load every artifact named in `config`
    pub fn load(config: &DataConfig) -> Result<Self> {
        let catalog = load_catalog(&config.catalog_path)?;
        let rules = load_rules(&config.rules_path)?;
        let authors = load_author_index(&config.authors_path)?;

        info!(
            articles = catalog.len(),
            rules = rules.len(),
            authors = authors.len(),
            "Dataset loaded"
        );

        Ok(Self { catalog, rules, authors })
    }
}

/// Deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| AppError::DataLoad {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| AppError::DataLoad {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let articles: Vec<Article> = read_json(path)?;
    Catalog::new(articles)
}

pub fn load_rules(path: impl AsRef<Path>) -> Result<Vec<AssociationRule>> {
    read_json(path)
}

pub fn load_author_index(path: impl AsRef<Path>) -> Result<AuthorArticleIndex> {
    read_json(path)
}
