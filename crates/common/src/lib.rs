//! ScholarRec Common Library
//!
//! Shared code for the ScholarRec recommender including:
//! - Catalog, author index, and association rule models
//! - JSON dataset loading
//! - Error types and handling
//! - Configuration management
//! - Metrics and observability

pub mod config;
pub mod dataset;
pub mod errors;
pub mod metrics;
pub mod models;

// Re-export commonly used types
pub use crate::errors::{AppError, Result};
pub use crate::config::AppConfig;
pub use crate::dataset::Dataset;
pub use crate::models::{Article, ArticleView, AssociationRule, AuthorArticleIndex, Catalog, TopicId};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
