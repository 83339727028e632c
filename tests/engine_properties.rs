// tests/engine_properties.rs
// Behavioral properties of the text analytics engine, exercised through the public API.

use article_metrics::analyze::{
    count_syllables, filter_tokens, fog_index, normalize, personal_pronoun_count, score_tokens,
    word_tokens, EPSILON,
};
use article_metrics::{analyze, Lexicon, Lexicons, MetricsRecord};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn lexicons() -> Lexicons {
    Lexicons::new(
        Lexicon::from_lines(["good", "great", "reliable"]),
        Lexicon::from_lines(["bad", "broken", "slow"]),
        Lexicon::from_lines(["reliable", "slow", "compiler", "api"]),
        Lexicon::from_pipe_lines(["THE", "A|IS", "AND", "OF", "SMITH | Surnames from 1990 census"]),
    )
}

fn toks(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn empty_input_yields_all_zero_record() {
    let rec = analyze("", &lexicons());
    assert_eq!(rec, MetricsRecord::default());
    for (label, value) in rec.labeled() {
        assert_eq!(value.to_string().trim_end_matches(".0"), "0", "{label}");
    }
}

#[test]
fn every_field_is_finite_for_odd_inputs() {
    let lex = lexicons();
    for text in ["", " ", "!!!", "--", "+", "a", "US", "the the the", "good\n\nbad", "x-y+z"] {
        let rec = analyze(text, &lex);
        let v = serde_json::to_value(rec).unwrap();
        for (k, val) in v.as_object().unwrap() {
            let f = val.as_f64().unwrap();
            assert!(f.is_finite(), "{k} not finite for {text:?}");
            assert!(f >= -2.0, "{k} unexpectedly negative for {text:?}");
        }
    }
}

#[test]
fn normalize_is_idempotent_on_random_text() {
    let alphabet: Vec<char> =
        "abcXYZ  \t\n-+.,;:!?'\"0123456789()éß\u{00A0}\u{2014}".chars().collect();
    let mut rng = StdRng::seed_from_u64(0xA871_C1E5);
    for _ in 0..500 {
        let len = rng.random_range(0..80);
        let s: String = (0..len)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect();
        let once = normalize(&s);
        assert_eq!(normalize(&once), once, "input {s:?}");
        assert!(!once.starts_with(' ') && !once.ends_with(' '));
        assert!(!once.contains("  "));
    }
}

#[test]
fn word_count_matches_filtered_tokens_and_never_exceeds_raw() {
    let lex = lexicons();
    let text = "The API is good, and the compiler is slow -- of a kind.";
    let rec = analyze(text, &lex);
    let normalized = normalize(text);
    let filtered = filter_tokens(&normalized, &lex.stopwords);
    assert_eq!(rec.word_count, filtered.len());
    assert!(rec.word_count <= word_tokens(&normalized).len());
    assert_eq!(filtered, toks(&["api", "good", "compiler", "slow", "kind"]));
}

#[test]
fn syllable_counts() {
    assert_eq!(count_syllables("cat"), 1);
    assert_eq!(count_syllables("likes"), count_syllables("lik"));
    assert_eq!(count_syllables("likes"), 1);
    assert_eq!(count_syllables("organization"), 5);
}

#[test]
fn sentiment_counts_and_polarity() {
    let pos = Lexicon::from_lines(["good"]);
    let neg = Lexicon::from_lines(["bad"]);
    let s = score_tokens(&toks(&["good", "bad", "good"]), &pos, &neg, &Lexicon::default());
    assert_eq!(s.positive_score, 2);
    assert_eq!(s.negative_score, 1);
    assert_eq!(s.neutral_score, 0);
    assert!((s.polarity_score - (2.0 - 1.0) / (3.0 + EPSILON)).abs() < 1e-12);
    assert!((s.polarity_score - 0.333).abs() < 1e-3);
}

#[test]
fn weighted_polarity_doubles_technical_hits() {
    let good = Lexicon::from_lines(["good"]);
    let none = Lexicon::default();
    let with_tech = score_tokens(&toks(&["good"]), &good, &none, &good);
    assert!((with_tech.weighted_polarity - 2.0).abs() < 1e-5);
    let without = score_tokens(&toks(&["good"]), &good, &none, &none);
    assert!((without.weighted_polarity - 1.0).abs() < 1e-5);
}

#[test]
fn fog_index_formula() {
    assert!((fog_index(20.0, 0.5) - 28.0).abs() < 1e-9);
}

#[test]
fn pronoun_count_skips_uppercase_us() {
    assert_eq!(personal_pronoun_count("US troops and I agree"), 1);
    assert_eq!(personal_pronoun_count("they told us and me"), 1);
}

#[test]
fn pronouns_in_pipeline_see_normalized_text() {
    // Normalization lowercases before counting, so "US" becomes "us" and counts.
    let rec = analyze("US troops and I agree", &lexicons());
    assert_eq!(rec.personal_pronoun_count, 2);
}

#[test]
fn technical_sentiment_document() {
    let rec = analyze(
        "A reliable compiler. A slow API! Great results, broken builds.",
        &lexicons(),
    );
    // tokens: reliable compiler slow api great results broken builds
    assert_eq!(rec.word_count, 8);
    assert_eq!(rec.positive_score, 2);
    assert_eq!(rec.negative_score, 2);
    assert_eq!(rec.neutral_score, 4);
    assert_eq!(rec.tech_score, 4);
    // reliable +2, slow -2, great +1, broken -1
    assert!(rec.weighted_polarity.abs() < 1e-9);
    assert!(rec.polarity_score.abs() < 1e-9);
    assert!((rec.subjectivity_score - 0.5).abs() < 1e-6);
    assert!((rec.sentiment_ratio - 1.0).abs() < 1e-5);
}

#[test]
fn fused_forms_add_to_word_count() {
    let lex = lexicons();
    let rec = analyze("Smith cannot wait, gonna ship.", &lex);
    // smith can not wait gon na ship
    assert_eq!(rec.word_count, 7);
    assert_eq!(
        filter_tokens(&normalize("Smith cannot wait"), &lex.stopwords),
        toks(&["smith", "can", "not", "wait"])
    );
}
