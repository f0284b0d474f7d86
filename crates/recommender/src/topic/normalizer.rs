//! Text normalization for topic lookup
//!
//! Deaccents, lowercases and tokenizes text, drops English stop words,
//! strips common suffixes and emits unigrams plus adjacent bigrams.

use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const MIN_TOKEN_LEN: usize = 2;
const MAX_TOKEN_LEN: usize = 15;

#[derive(Debug, Clone)]
pub struct TextNormalizer {
    token_re: Regex,
    stop_words: HashSet<String>,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self::with_stop_words(default_stop_words())
    }

    pub fn with_stop_words<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            // Alphabetic runs only; digits split tokens
            token_re: Regex::new(r"\p{Alphabetic}+").expect("valid token pattern"),
            stop_words: stop_words.into_iter().map(Into::into).collect(),
        }
    }

    /// Normalized, stemmed tokens with stop words removed
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let folded: String = text
            .nfkd()
            .filter(|c| !is_combining_mark(*c))
            .collect::<String>()
            .to_lowercase();

        self.token_re
            .find_iter(&folded)
            .map(|m| m.as_str())
            .filter(|t| (MIN_TOKEN_LEN..=MAX_TOKEN_LEN).contains(&t.chars().count()))
            .filter(|t| !self.stop_words.contains(*t))
            .map(stem)
            .collect()
    }

    /// Unigrams followed by adjacent bigrams
    pub fn grams(&self, text: &str) -> Vec<String> {
        let tokens = self.tokens(text);
        let bigrams: Vec<String> = tokens.windows(2).map(|w| format!("{} {}", w[0], w[1])).collect();

        let mut grams = tokens;
        grams.extend(bigrams);
        grams
    }

    /// Canonical form of a lexicon phrase, if any token survives
    pub fn phrase_key(&self, phrase: &str) -> Option<String> {
        let tokens = self.tokens(phrase);
        (!tokens.is_empty()).then(|| tokens.join(" "))
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Light English suffix stripping
fn stem(token: &str) -> String {
    let len = token.chars().count();

    if len > 4 && token.ends_with("ies") {
        return format!("{}y", &token[..token.len() - 3]);
    }
    if len > 5 && token.ends_with("ing") {
        return token[..token.len() - 3].to_string();
    }
    if len > 4 && token.ends_with("ed") {
        return token[..token.len() - 2].to_string();
    }
    if len > 3 && token.ends_with('s') && !token.ends_with("ss") {
        return token[..token.len() - 1].to_string();
    }
    token.to_string()
}

fn default_stop_words() -> Vec<&'static str> {
    vec![
        "a", "about", "above", "after", "again", "against", "all", "am", "an", "and",
        "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing",
        "down", "during", "each", "few", "for", "from", "further", "had", "has", "have",
        "having", "he", "her", "here", "hers", "him", "his", "how", "i", "if", "in",
        "into", "is", "it", "its", "itself", "just", "me", "more", "most", "my", "no",
        "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our",
        "ours", "out", "over", "own", "same", "she", "should", "so", "some", "such",
        "than", "that", "the", "their", "them", "then", "there", "these", "they", "this",
        "those", "through", "to", "too", "under", "until", "up", "very", "was", "we",
        "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will",
        "with", "would", "you", "your",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        let normalizer = TextNormalizer::new();
        let tokens = normalizer.tokens("The Neural Networks of 2020 are LEARNING!");
        assert_eq!(tokens, vec!["neural", "network", "learn"]);
    }

    #[test]
    fn test_deaccent() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.tokens("Café résumé"), vec!["cafe", "resume"]);
    }

    #[test]
    fn test_length_bounds() {
        let normalizer = TextNormalizer::new();
        let tokens = normalizer.tokens("x ab pneumonoultramicroscopic");
        assert_eq!(tokens, vec!["ab"]);
    }

    #[test]
    fn test_grams() {
        let normalizer = TextNormalizer::new();
        let grams = normalizer.grams("graph neural models");
        assert_eq!(grams, vec!["graph", "neural", "model", "graph neural", "neural model"]);
    }

    #[test]
    fn test_stem() {
        assert_eq!(stem("studies"), "study");
        assert_eq!(stem("clustering"), "cluster");
        assert_eq!(stem("trained"), "train");
        assert_eq!(stem("class"), "class");
        assert_eq!(stem("bias"), "bia");
        assert_eq!(stem("gas"), "gas");
    }

    #[test]
    fn test_phrase_key() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.phrase_key("Neural Networks").as_deref(), Some("neural network"));
        assert_eq!(normalizer.phrase_key("of the"), None);
    }
}
