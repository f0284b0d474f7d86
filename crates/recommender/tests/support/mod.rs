//! Shared fixtures for recommender integration tests

#![allow(dead_code)]

use scholarrec_common::config::RecommenderConfig;
use scholarrec_common::errors::{AppError, Result};
use scholarrec_common::models::{Article, AssociationRule, AuthorArticleIndex, Catalog, TopicId};
use scholarrec_recommender::{ArticleRecommender, CoAuthorModel, TopicClassifier};
use std::sync::Arc;

pub const GRAPHS: TopicId = TopicId(0);
pub const PROTEINS: TopicId = TopicId(1);

/// Resolves "graphs"/"proteins" keywords and `topic-N` labels; "fail" errors
pub struct KeywordClassifier;

impl TopicClassifier for KeywordClassifier {
    fn classify(&self, texts: &[&str]) -> Result<Vec<Vec<(TopicId, f32)>>> {
        texts
            .iter()
            .map(|text| {
                if text.contains("fail") {
                    return Err(AppError::classifier("model unavailable"));
                }
                if let Some(n) = text.strip_prefix("topic-").and_then(|n| n.parse().ok()) {
                    return Ok(vec![(TopicId(n), 1.0)]);
                }
                if text.contains("graphs") {
                    return Ok(vec![(GRAPHS, 0.8), (PROTEINS, 0.2)]);
                }
                if text.contains("proteins") {
                    return Ok(vec![(GRAPHS, 0.1), (PROTEINS, 0.9)]);
                }
                Ok(vec![(GRAPHS, 0.1), (PROTEINS, 0.1), (TopicId(7), 0.8)])
            })
            .collect()
    }

    fn name(&self) -> &str {
        "keyword"
    }
}

pub fn article(id: &str, topic: TopicId, n_cited: u64) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Paper {}", id),
        year: Some(2015),
        doi: Some(format!("10.1000/{}", id)),
        topic,
        n_cited,
    }
}

pub fn rule(antecedent: &str, consequents: &[&str], lift: f64) -> AssociationRule {
    AssociationRule::new(antecedent, consequents.iter().map(|c| c.to_string()).collect(), lift)
}

/// Catalog order: g1..g5 (graphs), p1, p2 (proteins)
pub fn catalog() -> Catalog {
    Catalog::new(vec![
        article("g1", GRAPHS, 50),
        article("g2", GRAPHS, 40),
        article("g3", GRAPHS, 30),
        article("g4", GRAPHS, 20),
        article("g5", GRAPHS, 10),
        article("p1", PROTEINS, 100),
        article("p2", PROTEINS, 5),
    ])
    .expect("fixture ids are unique")
}

pub fn authors() -> AuthorArticleIndex {
    vec![
        ("bob", "g2"),
        ("bob", "g4"),
        ("bob", "p1"),
        ("carol", "g4"),
        ("carol", "g5"),
        ("dan", "p2"),
    ]
    .into_iter()
    .collect()
}

pub fn rules() -> Vec<AssociationRule> {
    vec![
        rule("alice", &["dan"], 1.0),
        rule("alice", &["bob", "carol"], 3.0),
        rule("alice", &["eve"], 2.0),
        rule("carol_fan", &["carol"], 1.0),
        rule("eve_fan", &["eve"], 4.0),
    ]
}

pub fn config(top_n: usize) -> RecommenderConfig {
    RecommenderConfig {
        top_n,
        ..RecommenderConfig::default()
    }
}

pub fn recommender_with(config: RecommenderConfig) -> ArticleRecommender {
    ArticleRecommender::new(
        Arc::new(KeywordClassifier),
        CoAuthorModel::new(rules(), config.coauthor_top_n),
        Arc::new(catalog()),
        Arc::new(authors()),
        &config,
    )
}

pub fn recommender(top_n: usize) -> ArticleRecommender {
    recommender_with(config(top_n))
}
