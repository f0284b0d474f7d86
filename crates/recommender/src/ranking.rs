//! Citation-count ranking
//!
//! Largest-n selection over candidate articles. Candidates with equal
//! citation counts keep their accumulation order unless an id tie-break
//! is configured.

use scholarrec_common::config::TieBreak;
use scholarrec_common::models::Article;
use std::cmp::Ordering;

/// Top `n` candidates by `n_cited`, highest first
pub fn largest_by_citations<'a>(
    mut candidates: Vec<&'a Article>,
    n: usize,
    tie_break: TieBreak,
) -> Vec<&'a Article> {
    // Stable sort: equal keys stay in accumulation order
    candidates.sort_by(|a, b| compare(a, b, tie_break));
    candidates.truncate(n);
    candidates
}

fn compare(a: &Article, b: &Article, tie_break: TieBreak) -> Ordering {
    let by_citations = b.n_cited.cmp(&a.n_cited);
    match tie_break {
        TieBreak::Stable => by_citations,
        TieBreak::ArticleId => by_citations.then_with(|| a.id.cmp(&b.id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholarrec_common::models::TopicId;

    fn article(id: &str, n_cited: u64) -> Article {
        Article {
            id: id.to_string(),
            title: id.to_uppercase(),
            year: None,
            doi: None,
            topic: TopicId(1),
            n_cited,
        }
    }

    fn ids(ranked: &[&Article]) -> Vec<String> {
        ranked.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_largest_n() {
        let pool = vec![article("a", 5), article("b", 50), article("c", 10), article("d", 1)];
        let ranked = largest_by_citations(pool.iter().collect(), 2, TieBreak::Stable);
        assert_eq!(ids(&ranked), vec!["b", "c"]);
    }

    #[test]
    fn test_ties_keep_accumulation_order() {
        let pool = vec![article("z", 3), article("a", 3), article("m", 7)];
        let ranked = largest_by_citations(pool.iter().collect(), 3, TieBreak::Stable);
        assert_eq!(ids(&ranked), vec!["m", "z", "a"]);
    }

    #[test]
    fn test_ties_by_article_id() {
        let pool = vec![article("z", 3), article("a", 3), article("m", 7)];
        let ranked = largest_by_citations(pool.iter().collect(), 2, TieBreak::ArticleId);
        assert_eq!(ids(&ranked), vec!["m", "a"]);
    }

    #[test]
    fn test_n_larger_than_pool() {
        let pool = vec![article("a", 1)];
        let ranked = largest_by_citations(pool.iter().collect(), 10, TieBreak::Stable);
        assert_eq!(ranked.len(), 1);

        let ranked = largest_by_citations(Vec::new(), 10, TieBreak::Stable);
        assert!(ranked.is_empty());
    }
}
