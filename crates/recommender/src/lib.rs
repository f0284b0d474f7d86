//! ScholarRec Recommender
//!
//! Ranks scientific articles for a reader from:
//! - The topic of a free-text query
//! - Co-authors mined from association rules
//! - Citation counts as the ranking key
//!
//! Also provides offline evaluation metrics for ranked predictions.

pub mod coauthors;
pub mod evaluation;
pub mod ranking;
pub mod recommender;
pub mod topic;

pub use coauthors::CoAuthorModel;
pub use recommender::{ArticleRecommender, RecommendRequest, Recommendation, Strategy};
pub use topic::{LexiconClassifier, TextNormalizer, TopicClassifier};
