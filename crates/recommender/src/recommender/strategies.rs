//! Candidate selection for each strategy

use super::ArticleRecommender;
use crate::ranking::largest_by_citations;
use crate::topic::classify_one;
use scholarrec_common::errors::Result;
use scholarrec_common::models::{Article, AuthorId, TopicId};
use std::collections::HashSet;
use tracing::debug;

impl ArticleRecommender {
    pub(super) fn resolve_topic(&self, text: &str) -> Result<TopicId> {
        let topic = classify_one(self.classifier.as_ref(), text)?;
        debug!(topic = %topic, "Resolved text topic");
        Ok(topic)
    }

    /// Top `n` articles on `topic`, skipping ids in `excluded`
    pub(super) fn text_strategy(
        &self,
        topic: TopicId,
        n: usize,
        excluded: &HashSet<&str>,
    ) -> Vec<&Article> {
        let pool: Vec<&Article> = self
            .catalog
            .with_topic(topic)
            .filter(|a| !excluded.contains(a.id.as_str()))
            .collect();

        largest_by_citations(pool, n, self.tie_break)
    }

    /// Top articles written by any of `coauthors`
    pub(super) fn author_strategy(&self, coauthors: &[AuthorId]) -> Vec<&Article> {
        let pool = self.accumulate(coauthors, None);
        largest_by_citations(pool, self.top_n, self.tie_break)
    }

    /// Top articles on `topic` written by any of `coauthors`
    pub(super) fn text_author_strategy(&self, topic: TopicId, coauthors: &[AuthorId]) -> Vec<&Article> {
        if coauthors.is_empty() {
            return Vec::new();
        }
        let pool = self.accumulate(coauthors, Some(topic));
        largest_by_citations(pool, self.top_n, self.tie_break)
    }

    /// Concatenate each indexed co-author's articles in co-author order.
    ///
    /// An article shared by several co-authors appears once per co-author
    /// unless `dedup_accumulated` is set.
    fn accumulate(&self, coauthors: &[AuthorId], topic: Option<TopicId>) -> Vec<&Article> {
        let mut pool = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for coauthor in coauthors {
            let Some(ids) = self.authors.articles_of(coauthor) else {
                continue;
            };

            for article in self.catalog.with_ids(ids) {
                if topic.is_some_and(|t| article.topic != t) {
                    continue;
                }
                if self.dedup_accumulated && !seen.insert(article.id.as_str()) {
                    continue;
                }
                pool.push(article);
            }
        }

        debug!(
            coauthors = coauthors.len(),
            candidates = pool.len(),
            "Accumulated co-author articles"
        );

        pool
    }
}
