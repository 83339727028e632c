// src/analyze/mod.rs
//! Document analysis pipeline:
//! raw text → `normalize` → { filtered tokens → sentiment, normalized text → readability } → record.
//!
//! Every step is a pure function over its input plus read-only lexicons, so
//! documents can be analyzed on any thread in any order.

pub mod normalize;
pub mod readability;
pub mod sentiment;
pub mod syllables;
pub mod tokenize;

use crate::lexicon::Lexicons;
use crate::record::MetricsRecord;

// Re-export convenient entry points.
pub use crate::analyze::normalize::normalize;
pub use crate::analyze::readability::{fog_index, personal_pronoun_count, readability, Readability};
pub use crate::analyze::sentiment::{score_tokens, Sentiment, EPSILON};
pub use crate::analyze::syllables::count_syllables;
pub use crate::analyze::tokenize::{filter_tokens, split_sentences, word_tokens};

/// Analyze one document's raw text into a complete metrics record. Never fails.
pub fn analyze(text: &str, lexicons: &Lexicons) -> MetricsRecord {
    let normalized = normalize(text);
    let tokens = filter_tokens(&normalized, &lexicons.stopwords);

    let sentiment = score_tokens(
        &tokens,
        &lexicons.positive,
        &lexicons.negative,
        &lexicons.technical,
    );
    let readability = readability(&normalized);

    MetricsRecord::from_parts(sentiment, readability, tokens.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    fn lexicons() -> Lexicons {
        Lexicons::new(
            Lexicon::from_lines(["good", "fast"]),
            Lexicon::from_lines(["bad", "slow"]),
            Lexicon::from_lines(["fast", "compiler"]),
            Lexicon::from_lines(["the", "is", "a", "and"]),
        )
    }

    #[test]
    fn empty_text_gives_zero_record() {
        assert_eq!(analyze("", &lexicons()), MetricsRecord::default());
        assert_eq!(analyze("1234 !!! ...", &lexicons()), MetricsRecord::default());
    }

    #[test]
    fn end_to_end_small_document() {
        let rec = analyze("The compiler is FAST, and the linker is slow!", &lexicons());
        // Tokens after filtering: compiler fast linker slow
        assert_eq!(rec.word_count, 4);
        assert_eq!(rec.positive_score, 1);
        assert_eq!(rec.negative_score, 1);
        assert_eq!(rec.neutral_score, 2);
        assert_eq!(rec.tech_score, 2);
        // fast is positive and technical (+2), slow negative (-1).
        assert!((rec.weighted_polarity - 0.25).abs() < 1e-5);
        // Readability counts all 9 alphabetic words in one sentence.
        assert!((rec.avg_sentence_length - 9.0).abs() < 1e-9);
    }

    #[test]
    fn word_count_never_exceeds_raw_words() {
        let text = "a the is and good bad slow";
        let rec = analyze(text, &lexicons());
        assert!(rec.word_count <= word_tokens(&normalize(text)).len());
        assert_eq!(rec.word_count, 3);
    }

    #[test]
    fn cannot_counts_as_two_words() {
        let rec = analyze("We cannot ship a slow compiler.", &lexicons());
        // we can not ship slow compiler
        assert_eq!(rec.word_count, 6);
        assert_eq!(rec.neutral_score, 5);
        // Readability sees the same split: 7 alphabetic words, "a" included.
        assert!((rec.avg_sentence_length - 7.0).abs() < 1e-9);
        assert!((rec.avg_word_length - 25.0 / 7.0).abs() < 1e-9);
    }
}
