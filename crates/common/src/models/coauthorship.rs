//! Co-authorship data: association rules and the author→articles index

use super::article::ArticleId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Author identity
pub type AuthorId = String;

/// Mined co-authorship rule: antecedents → consequents with a lift score
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssociationRule {
    /// Antecedent author set
    pub antecedents: Vec<AuthorId>,

    /// Consequent authors, in mined order
    pub consequents: Vec<AuthorId>,

    /// Rule strength
    pub lift: f64,
}

impl AssociationRule {
    pub fn new(antecedent: impl Into<AuthorId>, consequents: Vec<AuthorId>, lift: f64) -> Self {
        Self {
            antecedents: vec![antecedent.into()],
            consequents,
            lift,
        }
    }

    /// The author when the antecedent set is exactly one author
    pub fn single_antecedent(&self) -> Option<&str> {
        let (first, rest) = self.antecedents.split_first()?;
        rest.iter().all(|a| a == first).then_some(first.as_str())
    }
}

/// Author → ids of the articles they wrote
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorArticleIndex {
    by_author: HashMap<AuthorId, HashSet<ArticleId>>,
}

impl AuthorArticleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, author: impl Into<AuthorId>, article_id: impl Into<ArticleId>) {
        self.by_author
            .entry(author.into())
            .or_default()
            .insert(article_id.into());
    }

    /// Article ids for `author`, if the author is indexed
    pub fn articles_of(&self, author: &str) -> Option<&HashSet<ArticleId>> {
        self.by_author.get(author)
    }

    pub fn contains(&self, author: &str) -> bool {
        self.by_author.contains_key(author)
    }

    /// Number of indexed authors
    pub fn len(&self) -> usize {
        self.by_author.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_author.is_empty()
    }
}

impl<A: Into<AuthorId>, I: Into<ArticleId>> FromIterator<(A, I)> for AuthorArticleIndex {
    fn from_iter<T: IntoIterator<Item = (A, I)>>(iter: T) -> Self {
        let mut index = Self::new();
        for (author, article_id) in iter {
            index.insert(author, article_id);
        }
        index
    }
}
