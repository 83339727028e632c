//! Output shapes: one flat metrics record per document.

use crate::analyze::readability::Readability;
use crate::analyze::sentiment::Sentiment;
use serde::{Deserialize, Serialize};

/// Every metric computed for one document. All fields are always present;
/// degenerate documents produce zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub positive_score: usize,
    pub negative_score: usize,
    pub neutral_score: usize,
    pub polarity_score: f64,
    pub weighted_polarity: f64,
    pub subjectivity_score: f64,
    pub sentiment_ratio: f64,
    pub tech_score: usize,
    pub avg_sentence_length: f64,
    pub pct_complex_words: f64,
    pub fog_index: f64,
    pub avg_word_length: f64,
    pub syllables_per_word: f64,
    pub complex_word_count: usize,
    pub personal_pronoun_count: usize,
    /// Tokens left after stopword and punctuation removal.
    pub word_count: usize,
}

/// A metric value as it appears in reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Count(usize),
    Ratio(f64),
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{n}"),
            MetricValue::Ratio(x) => write!(f, "{x:?}"),
        }
    }
}

impl MetricsRecord {
    pub fn from_parts(sentiment: Sentiment, readability: Readability, word_count: usize) -> Self {
        Self {
            positive_score: sentiment.positive_score,
            negative_score: sentiment.negative_score,
            neutral_score: sentiment.neutral_score,
            polarity_score: sentiment.polarity_score,
            weighted_polarity: sentiment.weighted_polarity,
            subjectivity_score: sentiment.subjectivity_score,
            sentiment_ratio: sentiment.sentiment_ratio,
            tech_score: sentiment.tech_score,
            avg_sentence_length: readability.avg_sentence_length,
            pct_complex_words: readability.pct_complex_words,
            fog_index: readability.fog_index,
            avg_word_length: readability.avg_word_length,
            syllables_per_word: readability.syllables_per_word,
            complex_word_count: readability.complex_word_count,
            personal_pronoun_count: readability.personal_pronoun_count,
            word_count,
        }
    }

    /// Report labels paired with values, in report order.
    pub fn labeled(&self) -> [(&'static str, MetricValue); 16] {
        use MetricValue::{Count, Ratio};
        [
            ("POSITIVE SCORE", Count(self.positive_score)),
            ("NEGATIVE SCORE", Count(self.negative_score)),
            ("NEUTRAL SCORE", Count(self.neutral_score)),
            ("POLARITY SCORE", Ratio(self.polarity_score)),
            ("WEIGHTED POLARITY", Ratio(self.weighted_polarity)),
            ("SUBJECTIVITY SCORE", Ratio(self.subjectivity_score)),
            ("SENTIMENT RATIO", Ratio(self.sentiment_ratio)),
            ("TECH WORD SCORE", Count(self.tech_score)),
            ("AVG SENTENCE LENGTH", Ratio(self.avg_sentence_length)),
            ("PERCENTAGE OF COMPLEX WORDS", Ratio(self.pct_complex_words)),
            ("FOG INDEX", Ratio(self.fog_index)),
            ("AVG WORD LENGTH", Ratio(self.avg_word_length)),
            ("SYLLABLE PER WORD", Ratio(self.syllables_per_word)),
            ("COMPLEX WORD COUNT", Count(self.complex_word_count)),
            ("PERSONAL PRONOUNS", Count(self.personal_pronoun_count)),
            ("WORD COUNT", Count(self.word_count)),
        ]
    }
}

/// Metrics keyed by the document they were computed for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub id: String,
    #[serde(flatten)]
    pub metrics: MetricsRecord,
}
