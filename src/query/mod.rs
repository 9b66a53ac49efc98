//! Query parsing module
//!
//! Normalizes a free-text vehicle query into:
//! - the trimmed, lower-cased full string (for exact make/model comparison)
//! - every whitespace token (for alias lookup)
//! - filtered scoring terms (2 to 19 characters, order kept)

pub mod alias;

use serde::{Deserialize, Serialize};

/// Shortest term kept by the tokenizer
pub const MIN_TERM_LEN: usize = 2;

/// Longest term kept by the tokenizer
pub const MAX_TERM_LEN: usize = 19;

/// Queries with at most this many terms look like a specific vehicle name
pub const SPECIFIC_QUERY_MAX_TERMS: usize = 2;

/// A single term this short looks like a model code ("nsx", "gtr", "911")
pub const SHORT_TERM_MAX_LEN: usize = 5;

/// Parsed vehicle search query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Original raw query
    pub raw_query: String,
    /// Trimmed, lower-cased query
    pub normalized: String,
    /// All lower-cased whitespace tokens
    pub words: Vec<String>,
    /// Tokens that survive length filtering
    pub terms: Vec<String>,
}

impl ParsedQuery {
    /// Parse a raw query string
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        let words: Vec<String> = normalized.split_whitespace().map(str::to_string).collect();
        let terms = tokenize(&normalized);

        Self {
            raw_query: raw.to_string(),
            normalized,
            words,
            terms,
        }
    }

    /// Whitespace-only or empty query
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// One or two terms: the user is probably naming a vehicle
    pub fn is_specific(&self) -> bool {
        (1..=SPECIFIC_QUERY_MAX_TERMS).contains(&self.terms.len())
    }

    /// Exactly one term of at most five characters
    pub fn is_single_short_term(&self) -> bool {
        match self.terms.as_slice() {
            [term] => term.chars().count() <= SHORT_TERM_MAX_LEN,
            _ => false,
        }
    }

    /// True if any term equals one of the given keywords
    pub fn has_any_term(&self, keywords: &[&str]) -> bool {
        self.terms.iter().any(|t| keywords.contains(&t.as_str()))
    }
}

/// Split a query on whitespace, lower-case it, and drop noise tokens
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|t| (MIN_TERM_LEN..=MAX_TERM_LEN).contains(&t.chars().count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_query() {
        let parsed = ParsedQuery::parse("  Family SUV  under $25,000 ");
        assert_eq!(parsed.normalized, "family suv  under $25,000");
        assert_eq!(parsed.terms, vec!["family", "suv", "under", "$25,000"]);
        assert!(!parsed.is_specific());
    }

    #[test]
    fn test_noise_tokens_dropped() {
        let terms = tokenize("a 4 wd x supercalifragilisticexpialidocious ok");
        assert_eq!(terms, vec!["wd", "ok"]);
    }

    #[test]
    fn test_words_keep_short_tokens() {
        let parsed = ParsedQuery::parse("a nsx");
        assert_eq!(parsed.words, vec!["a", "nsx"]);
        assert_eq!(parsed.terms, vec!["nsx"]);
    }

    #[test]
    fn test_empty_query() {
        assert!(ParsedQuery::parse("").is_empty());
        assert!(ParsedQuery::parse("   \t ").is_empty());
        assert!(!ParsedQuery::parse("x").is_empty());
    }

    #[test]
    fn test_specific_heuristics() {
        let nsx = ParsedQuery::parse("NSX");
        assert!(nsx.is_specific());
        assert!(nsx.is_single_short_term());

        let corvette = ParsedQuery::parse("corvette");
        assert!(corvette.is_specific());
        assert!(!corvette.is_single_short_term());

        let two = ParsedQuery::parse("acura nsx");
        assert!(two.is_specific());
        assert!(!two.is_single_short_term());
    }

    #[test]
    fn test_has_any_term() {
        let parsed = ParsedQuery::parse("cheap car");
        assert!(parsed.has_any_term(&["cheap", "budget"]));
        assert!(!parsed.has_any_term(&["luxury"]));
    }
}
