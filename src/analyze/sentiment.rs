//! Lexicon-intersection sentiment scoring over a filtered token stream.
//!
//! Raw counts come from set membership; every derived ratio adds `EPSILON` to
//! its denominator so empty inputs resolve to finite values.

use crate::lexicon::Lexicon;
use serde::{Deserialize, Serialize};

/// Guard added to every denominator.
pub const EPSILON: f64 = 1e-6;

/// Sentiment and technical-relevance scores for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub positive_score: usize,
    pub negative_score: usize,
    pub neutral_score: usize,
    pub polarity_score: f64,
    pub weighted_polarity: f64,
    pub subjectivity_score: f64,
    pub sentiment_ratio: f64,
    pub tech_score: usize,
}

/// `(pos - neg) / (pos + neg + ε)`.
pub fn polarity(positive: usize, negative: usize) -> f64 {
    (positive as f64 - negative as f64) / (positive as f64 + negative as f64 + EPSILON)
}

/// `(pos + neg) / (tokens + ε)`.
pub fn subjectivity(positive: usize, negative: usize, token_count: usize) -> f64 {
    (positive + negative) as f64 / (token_count as f64 + EPSILON)
}

/// `pos / (neg + ε)`; unbounded above.
pub fn sentiment_ratio(positive: usize, negative: usize) -> f64 {
    positive as f64 / (negative as f64 + EPSILON)
}

/// Polarity where sentiment words that are also technical count double.
///
/// A token found in both the positive and negative lexicons contributes as positive.
pub fn weighted_polarity(
    tokens: &[String],
    positive: &Lexicon,
    negative: &Lexicon,
    technical: &Lexicon,
) -> f64 {
    let weight = |t: &str| if technical.contains(t) { 2 } else { 1 };
    let score: i64 = tokens
        .iter()
        .map(|t| {
            if positive.contains(t) {
                weight(t)
            } else if negative.contains(t) {
                -weight(t)
            } else {
                0
            }
        })
        .sum();
    score as f64 / (tokens.len() as f64 + EPSILON)
}

/// Score a filtered token stream against the three scoring lexicons.
pub fn score_tokens(
    tokens: &[String],
    positive: &Lexicon,
    negative: &Lexicon,
    technical: &Lexicon,
) -> Sentiment {
    let mut pos = 0usize;
    let mut neg = 0usize;
    let mut neutral = 0usize;
    let mut tech = 0usize;

    for t in tokens {
        let is_pos = positive.contains(t);
        let is_neg = negative.contains(t);
        pos += usize::from(is_pos);
        neg += usize::from(is_neg);
        neutral += usize::from(!is_pos && !is_neg);
        tech += usize::from(technical.contains(t));
    }

    Sentiment {
        positive_score: pos,
        negative_score: neg,
        neutral_score: neutral,
        polarity_score: polarity(pos, neg),
        weighted_polarity: weighted_polarity(tokens, positive, negative, technical),
        subjectivity_score: subjectivity(pos, neg, tokens.len()),
        sentiment_ratio: sentiment_ratio(pos, neg),
        tech_score: tech,
    }
}
