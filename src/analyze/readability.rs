//! Readability metrics over normalized text: sentence length, complex words,
//! Fog index, word length, syllables per word and personal pronouns.
//!
//! All ratios fall back to 0 when their denominator is empty.

use super::syllables::count_syllables;
use super::tokenize::{split_sentences, word_tokens};
use serde::{Deserialize, Serialize};

/// Words with more estimated syllables than this are "complex".
pub const COMPLEX_SYLLABLE_THRESHOLD: usize = 2;

const PRONOUNS: &[&str] = &["i", "we", "my", "ours", "us"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Readability {
    pub avg_sentence_length: f64,
    /// Fraction in [0, 1], not a percentage.
    pub pct_complex_words: f64,
    pub fog_index: f64,
    pub avg_word_length: f64,
    pub syllables_per_word: f64,
    pub complex_word_count: usize,
    pub personal_pronoun_count: usize,
}

/// Gunning Fog: `0.4 * (avg_sentence_length + pct_complex_words * 100)`.
pub fn fog_index(avg_sentence_length: f64, pct_complex_words: f64) -> f64 {
    0.4 * (avg_sentence_length + pct_complex_words * 100.0)
}

/// Compute every readability metric for one normalized document.
pub fn readability(text: &str) -> Readability {
    let sentence_count = split_sentences(text).len();
    let words: Vec<String> = word_tokens(text)
        .into_iter()
        .filter(|w| !w.is_empty() && w.chars().all(char::is_alphabetic))
        .collect();

    let n = words.len();
    let syllables: Vec<usize> = words.iter().map(|w| count_syllables(w)).collect();
    let complex_word_count = syllables
        .iter()
        .filter(|&&s| s > COMPLEX_SYLLABLE_THRESHOLD)
        .count();

    let avg_sentence_length = ratio(n, sentence_count);
    let pct_complex_words = ratio(complex_word_count, n);
    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();

    Readability {
        avg_sentence_length,
        pct_complex_words,
        fog_index: fog_index(avg_sentence_length, pct_complex_words),
        avg_word_length: ratio(total_chars, n),
        syllables_per_word: ratio(syllables.iter().sum(), n),
        complex_word_count,
        personal_pronoun_count: personal_pronoun_count(text),
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Count whole-word, case-insensitive matches of I / we / my / ours / us.
///
/// The all-caps surface form `US` (the country) is not counted; any other
/// casing of "us" is.
pub fn personal_pronoun_count(text: &str) -> usize {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
        .filter(|w| PRONOUNS.iter().any(|p| w.eq_ignore_ascii_case(p)))
        .filter(|w| *w != "US")
        .count()
}

/// Word characters for boundary purposes: letters, digits and underscore.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
