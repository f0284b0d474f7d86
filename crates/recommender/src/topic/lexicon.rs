//! Lexicon-backed topic classifier
//!
//! Scores topics by summing precomputed term weights over the unigrams and
//! bigrams of a text, then normalises the scores into a distribution.

use super::{TextNormalizer, TopicClassifier};
use scholarrec_common::dataset::read_json;
use scholarrec_common::errors::{AppError, Result};
use scholarrec_common::models::TopicId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::debug;

/// Term → weighted topics, as shipped on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicLexicon {
    pub terms: HashMap<String, Vec<(TopicId, f32)>>,
}

impl TopicLexicon {
    pub fn insert(&mut self, phrase: impl Into<String>, topic: TopicId, weight: f32) {
        self.terms.entry(phrase.into()).or_default().push((topic, weight));
    }
}

pub struct LexiconClassifier {
    normalizer: TextNormalizer,
    /// Normalized gram -> weighted topics
    weights: HashMap<String, Vec<(TopicId, f32)>>,
}

impl LexiconClassifier {
    /// Build from a lexicon, normalizing its phrases the same way as input text
    pub fn new(lexicon: TopicLexicon, normalizer: TextNormalizer) -> Self {
        let mut weights: HashMap<String, Vec<(TopicId, f32)>> = HashMap::new();

        for (phrase, topics) in lexicon.terms {
            match normalizer.phrase_key(&phrase) {
                Some(key) => weights.entry(key).or_default().extend(topics),
                None => debug!(phrase = %phrase, "Lexicon phrase normalizes to nothing"),
            }
        }

        Self { normalizer, weights }
    }

    /// Load a JSON lexicon
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let lexicon: TopicLexicon = read_json(path)?;
        Ok(Self::new(lexicon, TextNormalizer::new()))
    }

    /// Number of distinct normalized terms
    pub fn vocabulary_size(&self) -> usize {
        self.weights.len()
    }

    fn score(&self, text: &str) -> Result<Vec<(TopicId, f32)>> {
        let grams = self.normalizer.grams(text);
        if grams.is_empty() {
            return Err(AppError::classifier("text has no usable tokens"));
        }

        // Ordered by topic id so ties resolve to the lowest id
        let mut scores: BTreeMap<TopicId, f32> = BTreeMap::new();
        for gram in &grams {
            if let Some(topics) = self.weights.get(gram) {
                for &(topic, weight) in topics {
                    *scores.entry(topic).or_insert(0.0) += weight;
                }
            }
        }

        let total: f32 = scores.values().sum();
        if scores.is_empty() || total <= 0.0 {
            return Err(AppError::classifier("text shares no terms with the topic lexicon"));
        }

        Ok(scores.into_iter().map(|(topic, score)| (topic, score / total)).collect())
    }
}

impl TopicClassifier for LexiconClassifier {
    fn classify(&self, texts: &[&str]) -> Result<Vec<Vec<(TopicId, f32)>>> {
        texts.iter().map(|text| self.score(text)).collect()
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}
