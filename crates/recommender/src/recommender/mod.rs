//! Article recommender
//!
//! Combines three signals to rank articles for a reader:
//! - Topic of a free-text query (text strategy)
//! - Co-authors of a known author (author strategy)
//! - Both at once, backfilled with text-only results on a shortfall
//!
//! Every strategy ranks its candidates by citation count.

mod strategies;

use crate::coauthors::CoAuthorModel;
use crate::topic::TopicClassifier;
use scholarrec_common::config::{RecommenderConfig, TieBreak};
use scholarrec_common::dataset::Dataset;
use scholarrec_common::errors::{AppError, Result};
use scholarrec_common::metrics::{self, RecommendationTimer};
use scholarrec_common::models::{Article, ArticleView, AuthorArticleIndex, AuthorId, Catalog, TopicId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Prediction strategy selected from the supplied inputs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Topic of the text only
    Text,
    /// Co-authors of the author only
    Author,
    /// Co-authors restricted to the text's topic, with text backfill
    TextAuthor,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Text => "text",
            Strategy::Author => "author",
            Strategy::TextAuthor => "text_author",
        }
    }
}

/// Recommendation inputs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendRequest {
    /// Free-text query
    pub text: Option<String>,

    /// Author identity
    pub author: Option<String>,
}

impl RecommendRequest {
    pub fn new(text: Option<&str>, author: Option<&str>) -> Self {
        Self {
            text: text.map(str::to_string),
            author: author.map(str::to_string),
        }
    }

    /// Text, treating blank input as absent
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Author, treating blank input as absent
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.trim().is_empty())
    }

    /// Strategy for these inputs; fails when neither is present
    pub fn strategy(&self) -> Result<Strategy> {
        match (self.text(), self.author()) {
            (Some(_), Some(_)) => Ok(Strategy::TextAuthor),
            (Some(_), None) => Ok(Strategy::Text),
            (None, Some(_)) => Ok(Strategy::Author),
            (None, None) => Err(AppError::MissingInput),
        }
    }
}

/// Ranked articles plus how they were produced
#[derive(Debug, Clone)]
pub struct Recommendation<'a> {
    pub strategy: Strategy,

    /// Topic resolved from the text, if text was given
    pub topic: Option<TopicId>,

    /// Expanded co-authors, if an author was given
    pub coauthors: Vec<AuthorId>,

    /// Primary rows first, then backfill rows
    pub articles: Vec<&'a Article>,

    /// Trailing rows that came from the text-only backfill
    pub backfilled: usize,
}

impl Recommendation<'_> {
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.articles.iter().map(|a| a.id.as_str()).collect()
    }

    /// Project onto the display columns
    pub fn views(&self) -> Vec<ArticleView> {
        self.articles.iter().map(|a| a.view()).collect()
    }
}

/// Ranks catalog articles by topic, co-authorship, and citations
pub struct ArticleRecommender {
    classifier: Arc<dyn TopicClassifier>,
    coauthors: CoAuthorModel,
    catalog: Arc<Catalog>,
    authors: Arc<AuthorArticleIndex>,
    top_n: usize,
    tie_break: TieBreak,
    dedup_accumulated: bool,
}

impl ArticleRecommender {
    /// Create a recommender over shared, read-only data
    pub fn new(
        classifier: Arc<dyn TopicClassifier>,
        coauthors: CoAuthorModel,
        catalog: Arc<Catalog>,
        authors: Arc<AuthorArticleIndex>,
        config: &RecommenderConfig,
    ) -> Self {
        Self {
            classifier,
            coauthors,
            catalog,
            authors,
            top_n: config.top_n,
            tie_break: config.tie_break,
            dedup_accumulated: config.dedup_accumulated,
        }
    }

    /// Create from loaded datasets
    pub fn from_dataset(
        classifier: Arc<dyn TopicClassifier>,
        dataset: Dataset,
        config: &RecommenderConfig,
    ) -> Self {
        let coauthors = CoAuthorModel::new(dataset.rules, config.coauthor_top_n);
        Self::new(
            classifier,
            coauthors,
            Arc::new(dataset.catalog),
            Arc::new(dataset.authors),
            config,
        )
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the strategy selected by `request`
    pub fn recommend(&self, request: &RecommendRequest) -> Result<Recommendation<'_>> {
        let strategy = request.strategy()?;
        let timer = RecommendationTimer::start(strategy.as_str());

        debug!(
            strategy = strategy.as_str(),
            classifier = self.classifier.name(),
            top_n = self.top_n,
            "Selected recommendation strategy"
        );

        let recommendation = match (request.text(), request.author()) {
            (Some(text), Some(author)) => self.recommend_text_author(text, author)?,
            (Some(text), None) => {
                let topic = self.resolve_topic(text)?;
                Recommendation {
                    strategy,
                    topic: Some(topic),
                    coauthors: Vec::new(),
                    articles: self.text_strategy(topic, self.top_n, &HashSet::new()),
                    backfilled: 0,
                }
            }
            (None, Some(author)) => {
                let coauthors = self.coauthors.predict(author);
                let articles = self.author_strategy(&coauthors);
                Recommendation {
                    strategy,
                    topic: None,
                    coauthors,
                    articles,
                    backfilled: 0,
                }
            }
            (None, None) => return Err(AppError::MissingInput),
        };

        if recommendation.is_empty() {
            debug!(strategy = strategy.as_str(), "No articles matched");
        }

        timer.finish(recommendation.len());
        Ok(recommendation)
    }

    /// Ranked display rows for the given inputs
    pub fn predict(&self, text: Option<&str>, author: Option<&str>) -> Result<Vec<ArticleView>> {
        let request = RecommendRequest::new(text, author);
        Ok(self.recommend(&request)?.views())
    }

    /// [`predict`](Self::predict) serialized as a JSON array of records
    pub fn predict_json(&self, text: Option<&str>, author: Option<&str>) -> Result<String> {
        let views = self.predict(text, author)?;
        Ok(serde_json::to_string(&views)?)
    }

    fn recommend_text_author(&self, text: &str, author: &str) -> Result<Recommendation<'_>> {
        let topic = self.resolve_topic(text)?;
        let coauthors = self.coauthors.predict(author);
        let mut articles = self.text_author_strategy(topic, &coauthors);

        let mut backfilled = 0;
        if articles.len() < self.top_n {
            let chosen: HashSet<&str> = articles.iter().map(|a| a.id.as_str()).collect();
            let fill = self.text_strategy(topic, self.top_n - articles.len(), &chosen);

            debug!(
                primary = articles.len(),
                backfill = fill.len(),
                topic = %topic,
                "Backfilling with text-only results"
            );

            backfilled = fill.len();
            metrics::record_backfill(backfilled);
            articles.extend(fill);
        }

        Ok(Recommendation {
            strategy: Strategy::TextAuthor,
            topic: Some(topic),
            coauthors,
            articles,
            backfilled,
        })
    }
}
