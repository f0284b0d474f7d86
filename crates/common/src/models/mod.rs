//! In-memory catalog model
//!
//! Articles, the author→articles index, and co-authorship association rules.
//! All of it is built upstream and read-only while recommendations run.

mod article;
mod coauthorship;

pub use article::{Article, ArticleId, ArticleView, Catalog, TopicId, DISPLAY_COLUMNS};
pub use coauthorship::{AssociationRule, AuthorArticleIndex, AuthorId};
