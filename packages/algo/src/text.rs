//! Text Normalization
//!
//! Whitespace collapsing, word extraction and the small shape predicates the
//! scorer is built on. Everything here is pure.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::types::TERMINAL_PUNCTUATION;

/// A sentence with collapsed whitespace and its extracted words
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedText {
    pub text: String,
    pub tokens: Vec<String>,
}

impl NormalizedText {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

/// Collapse whitespace runs to a single space, trim, and tokenize.
pub fn normalize(raw: &str) -> NormalizedText {
    let text = collapse_whitespace(raw);
    let tokens = tokenize(&text);
    NormalizedText { text, tokens }
}

pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Maximal runs of ASCII letters and apostrophes. Digits and punctuation split words.
pub fn tokenize(text: &str) -> Vec<String> {
    token_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn token_regex() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    TOKEN_RE.get_or_init(|| Regex::new(r"[A-Za-z']+").expect("token pattern is valid"))
}

/// Case-insensitive `\b<target>\b` search. An empty target never matches.
pub fn contains_whole_word(text: &str, target: &str) -> bool {
    let target = target.trim();
    if target.is_empty() {
        return false;
    }

    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(target)))
        .case_insensitive(true)
        .build()
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}

/// First character is an ASCII uppercase letter.
pub fn starts_with_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

pub fn has_terminal_punctuation(text: &str) -> bool {
    text.chars()
        .next_back()
        .is_some_and(|c| TERMINAL_PUNCTUATION.contains(&c))
}

pub fn has_vowel(token: &str) -> bool {
    token
        .chars()
        .any(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_and_trims() {
        let normalized = normalize("  the   quick\tbrown \n fox  ");
        assert_eq!(normalized.text, "the quick brown fox");
        assert_eq!(normalized.tokens, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn test_normalize_whitespace_only_is_empty() {
        let normalized = normalize(" \t\n ");
        assert!(normalized.is_empty());
        assert!(normalized.tokens.is_empty());
    }

    #[test]
    fn test_tokenize_skips_numbers_and_punctuation() {
        let tokens = tokenize("I've got 3 cats, and it's fine!");
        assert_eq!(tokens, vec!["I've", "got", "cats", "and", "it's", "fine"]);
    }

    #[test]
    fn test_tokenize_splits_on_digits() {
        assert_eq!(tokenize("abc123def"), vec!["abc", "def"]);
    }

    #[test]
    fn test_whole_word_case_insensitive() {
        assert!(contains_whole_word("The Fox ran.", "fox"));
        assert!(contains_whole_word("fox", "FOX"));
        assert!(contains_whole_word("a fox, a dog", "fox"));
    }

    #[test]
    fn test_whole_word_rejects_substrings() {
        assert!(!contains_whole_word("The foxes ran.", "fox"));
        assert!(!contains_whole_word("firefox is a browser", "fox"));
        assert!(!contains_whole_word("fox_trot", "fox"));
    }

    #[test]
    fn test_whole_word_multi_word_target() {
        assert!(contains_whole_word("I will give up soon.", "give up"));
        assert!(!contains_whole_word("I will give upward.", "give up"));
    }

    #[test]
    fn test_whole_word_escapes_metacharacters() {
        assert!(!contains_whole_word("the axb case", "a.b"));
        assert!(contains_whole_word("the a.b case", "a.b"));
        assert!(!contains_whole_word("fooo", "fo*"));
    }

    #[test]
    fn test_whole_word_empty_target() {
        assert!(!contains_whole_word("anything", ""));
        assert!(!contains_whole_word("anything", "   "));
    }

    #[test]
    fn test_shape_predicates() {
        assert!(starts_with_uppercase("Hello"));
        assert!(!starts_with_uppercase("hello"));
        assert!(!starts_with_uppercase("\"Hello\""));
        assert!(has_terminal_punctuation("Done."));
        assert!(has_terminal_punctuation("Really?"));
        assert!(has_terminal_punctuation("Wow!"));
        assert!(!has_terminal_punctuation("No end"));
        assert!(!has_terminal_punctuation(""));
    }

    #[test]
    fn test_has_vowel() {
        assert!(has_vowel("Apple"));
        assert!(has_vowel("quick"));
        assert!(!has_vowel("rhythm"));
        assert!(!has_vowel("xkcd"));
    }
}
