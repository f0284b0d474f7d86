//! Topic classification
//!
//! The recommender only needs a classifier that maps text to per-topic
//! scores. A lexicon-backed implementation is provided for deployments
//! that ship precomputed term weights instead of a full topic model.

mod lexicon;
mod normalizer;

pub use lexicon::{LexiconClassifier, TopicLexicon};
pub use normalizer::TextNormalizer;

use scholarrec_common::errors::{AppError, Result};
use scholarrec_common::metrics;
use scholarrec_common::models::TopicId;

/// Maps raw texts to topic scores
pub trait TopicClassifier: Send + Sync {
    /// One `(topic, score)` list per input text
    fn classify(&self, texts: &[&str]) -> Result<Vec<Vec<(TopicId, f32)>>>;

    /// Classifier name for logging
    fn name(&self) -> &str;
}

/// Highest-scoring topic; the first one wins a tie
pub fn best_topic(scores: &[(TopicId, f32)]) -> Option<TopicId> {
    let mut best: Option<(TopicId, f32)> = None;
    for &(topic, score) in scores {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((topic, score)),
        }
    }
    best.map(|(topic, _)| topic)
}

/// Classify a single text and keep its best topic
pub fn classify_one(classifier: &dyn TopicClassifier, text: &str) -> Result<TopicId> {
    let outcome = classifier.classify(&[text]).and_then(|mut scores| {
        if scores.len() != 1 {
            return Err(AppError::classifier(format!(
                "{} returned {} score lists for one text",
                classifier.name(),
                scores.len()
            )));
        }
        let scores = scores.swap_remove(0);
        best_topic(&scores).ok_or_else(|| {
            AppError::classifier(format!("{} returned no topic scores", classifier.name()))
        })
    });

    metrics::record_classification(outcome.is_ok());
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<Vec<(TopicId, f32)>>);

    impl TopicClassifier for Fixed {
        fn classify(&self, _texts: &[&str]) -> Result<Vec<Vec<(TopicId, f32)>>> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_best_topic() {
        let scores = [(TopicId(0), 0.2), (TopicId(3), 0.5), (TopicId(7), 0.3)];
        assert_eq!(best_topic(&scores), Some(TopicId(3)));
        assert_eq!(best_topic(&[]), None);
    }

    #[test]
    fn test_best_topic_tie_keeps_first() {
        let scores = [(TopicId(4), 0.5), (TopicId(2), 0.5)];
        assert_eq!(best_topic(&scores), Some(TopicId(4)));
    }

    #[test]
    fn test_topic_zero_is_a_result() {
        let classifier = Fixed(vec![vec![(TopicId(0), 0.9), (TopicId(1), 0.1)]]);
        assert_eq!(classify_one(&classifier, "anything").unwrap(), TopicId(0));
    }

    #[test]
    fn test_empty_scores_fail() {
        let classifier = Fixed(vec![vec![]]);
        let err = classify_one(&classifier, "anything").unwrap_err();
        assert!(matches!(err, AppError::Classifier { .. }));

        let classifier = Fixed(vec![]);
        assert!(classify_one(&classifier, "anything").is_err());
    }
}
