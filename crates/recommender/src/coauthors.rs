//! Co-author expansion
//!
//! Maps an author to the co-authors of their strongest association rules.
//! Only rules whose antecedent set is exactly that one author are consulted.

use scholarrec_common::models::{AssociationRule, AuthorId};
use std::collections::HashMap;
use tracing::warn;

/// Association-rule lookup keyed by single-author antecedent
#[derive(Debug, Clone)]
pub struct CoAuthorModel {
    /// author -> rules, sorted by lift descending (table order on ties)
    rules: HashMap<AuthorId, Vec<AssociationRule>>,

    /// Rules consulted per author
    top_n: usize,
}

impl CoAuthorModel {
    /// Index the rule table
    pub fn new(table: Vec<AssociationRule>, top_n: usize) -> Self {
        let mut rules: HashMap<AuthorId, Vec<AssociationRule>> = HashMap::new();
        let mut skipped = 0usize;

        for rule in table {
            if rule.lift.is_nan() {
                skipped += 1;
                continue;
            }
            if let Some(author) = rule.single_antecedent().map(str::to_string) {
                rules.entry(author).or_default().push(rule);
            }
        }

        if skipped > 0 {
            warn!(skipped, "Ignoring association rules without a lift value");
        }

        for author_rules in rules.values_mut() {
            author_rules.sort_by(|a, b| b.lift.total_cmp(&a.lift));
        }

        Self { rules, top_n }
    }

    /// Co-authors from the `top_n` highest-lift rules for `author`.
    ///
    /// Consequents are flattened in rule order, keeping each rule's own
    /// consequent order. Unknown authors yield an empty list.
    pub fn predict(&self, author: &str) -> Vec<AuthorId> {
        self.rules_for(author)
            .iter()
            .take(self.top_n)
            .flat_map(|rule| rule.consequents.iter().cloned())
            .collect()
    }

    /// All rules for `author`, strongest first
    pub fn rules_for(&self, author: &str) -> &[AssociationRule] {
        self.rules.get(author).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Number of authors with at least one rule
    pub fn author_count(&self) -> usize {
        self.rules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(antecedent: &str, consequents: &[&str], lift: f64) -> AssociationRule {
        AssociationRule::new(
            antecedent,
            consequents.iter().map(|c| c.to_string()).collect(),
            lift,
        )
    }

    #[test]
    fn test_orders_by_lift() {
        let model = CoAuthorModel::new(
            vec![
                rule("alice", &["bob"], 1.2),
                rule("alice", &["carol", "dave"], 3.4),
                rule("alice", &["erin"], 2.0),
                rule("frank", &["gina"], 9.0),
            ],
            10,
        );

        assert_eq!(model.predict("alice"), vec!["carol", "dave", "erin", "bob"]);
    }

    #[test]
    fn test_top_n_limits_rules_not_authors() {
        let model = CoAuthorModel::new(
            vec![
                rule("alice", &["bob", "carol", "dave"], 5.0),
                rule("alice", &["erin"], 4.0),
            ],
            1,
        );

        assert_eq!(model.predict("alice"), vec!["bob", "carol", "dave"]);
    }

    #[test]
    fn test_unknown_author_is_empty() {
        let model = CoAuthorModel::new(vec![rule("alice", &["bob"], 1.0)], 5);
        assert!(model.predict("zoe").is_empty());
    }

    #[test]
    fn test_multi_author_antecedents_ignored() {
        let joint = AssociationRule {
            antecedents: vec!["alice".into(), "bob".into()],
            consequents: vec!["carol".into()],
            lift: 10.0,
        };
        let model = CoAuthorModel::new(vec![joint, rule("alice", &["dave"], 1.0)], 5);

        assert_eq!(model.predict("alice"), vec!["dave"]);
        assert!(model.predict("bob").is_empty());
    }

    #[test]
    fn test_equal_lift_keeps_table_order() {
        let model = CoAuthorModel::new(
            vec![
                rule("alice", &["x"], 2.0),
                rule("alice", &["y"], 2.0),
                rule("alice", &["z"], 2.0),
            ],
            2,
        );

        assert_eq!(model.predict("alice"), vec!["x", "y"]);
    }

    #[test]
    fn test_nan_lift_skipped() {
        let model = CoAuthorModel::new(
            vec![rule("alice", &["x"], f64::NAN), rule("alice", &["y"], 0.5)],
            5,
        );

        assert_eq!(model.predict("alice"), vec!["y"]);
        assert_eq!(model.author_count(), 1);
    }
}
