//! Article entity and catalog

use crate::errors::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Unique article key
pub type ArticleId = String;

/// Columns emitted for every recommended article
pub const DISPLAY_COLUMNS: [&str; 3] = ["title", "year", "doi"];

/// Opaque topic label assigned by the topic model.
///
/// Only equality is meaningful. Zero is an ordinary topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(pub u32);

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(alias = "_id")]
    pub id: ArticleId,

    pub title: String,

    #[serde(default)]
    pub year: Option<i32>,

    #[serde(default)]
    pub doi: Option<String>,

    /// Topic assigned when the catalog was built
    pub topic: TopicId,

    /// Citation count, used as the ranking key
    #[serde(default)]
    pub n_cited: u64,
}

impl Article {
    /// Project onto the display columns
    pub fn view(&self) -> ArticleView {
        ArticleView {
            title: self.title.clone(),
            year: self.year,
            doi: self.doi.clone(),
        }
    }
}

/// Display projection of an article
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleView {
    pub title: String,
    pub year: Option<i32>,
    pub doi: Option<String>,
}

/// Ordered article collection with unique ids
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    articles: Vec<Article>,
    positions: HashMap<ArticleId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting repeated ids
    pub fn new(articles: Vec<Article>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(articles.len());
        for (position, article) in articles.iter().enumerate() {
            if positions.insert(article.id.clone(), position).is_some() {
                return Err(AppError::DuplicateArticle { id: article.id.clone() });
            }
        }
        Ok(Self { articles, positions })
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Articles in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Article> {
        self.articles.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.positions.get(id).map(|&position| &self.articles[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Articles assigned to `topic`, in catalog order
    pub fn with_topic(&self, topic: TopicId) -> impl Iterator<Item = &Article> + '_ {
        self.articles.iter().filter(move |a| a.topic == topic)
    }

    /// Articles whose id is in `ids`, in catalog order.
    ///
    /// Ids unknown to the catalog are ignored.
    pub fn with_ids(&self, ids: &HashSet<ArticleId>) -> Vec<&Article> {
        let mut positions: Vec<usize> = ids
            .iter()
            .filter_map(|id| self.positions.get(id).copied())
            .collect();
        positions.sort_unstable();
        positions.into_iter().map(|p| &self.articles[p]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, topic: u32, n_cited: u64) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Title {}", id),
            year: Some(2020),
            doi: None,
            topic: TopicId(topic),
            n_cited,
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Catalog::new(vec![article("a", 1, 0), article("a", 2, 5)]).unwrap_err();
        assert!(matches!(err, AppError::DuplicateArticle { ref id } if id == "a"));
    }

    #[test]
    fn test_with_ids_keeps_catalog_order() {
        let catalog = Catalog::new(vec![
            article("c", 1, 0),
            article("a", 1, 0),
            article("b", 2, 0),
        ])
        .unwrap();

        let ids: HashSet<ArticleId> = ["b", "c", "missing"].iter().map(|s| s.to_string()).collect();
        let found: Vec<&str> = catalog.with_ids(&ids).iter().map(|a| a.id.as_str()).collect();

        assert_eq!(found, vec!["c", "b"]);
    }

    #[test]
    fn test_topic_zero_is_filterable() {
        let catalog = Catalog::new(vec![article("a", 0, 1), article("b", 1, 2)]).unwrap();
        let ids: Vec<&str> = catalog.with_topic(TopicId(0)).map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn test_mongo_id_alias() {
        let parsed: Article = serde_json::from_str(
            r#"{"_id": "x1", "title": "T", "year": 2019, "doi": "10.1/x", "topic": 4, "n_cited": 7}"#,
        )
        .unwrap();
        assert_eq!(parsed.id, "x1");
        assert_eq!(parsed.topic, TopicId(4));

        let view = serde_json::to_value(parsed.view()).unwrap();
        let keys: Vec<&str> = view.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys.len(), DISPLAY_COLUMNS.len());
        for column in DISPLAY_COLUMNS {
            assert!(keys.contains(&column));
        }
    }
}
