//! Heuristic syllable estimation used by the readability metrics.
//!
//! Not phonetic: counts vowel-group onsets after trimming a trailing "es"/"ed".
//! Results must stay stable, reference outputs depend on them.

#[inline]
fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Estimate the syllables in one lowercase word. Always at least 1.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 3 {
        return 1;
    }

    let body = if word.ends_with("es") || word.ends_with("ed") {
        &chars[..chars.len() - 2]
    } else {
        &chars[..]
    };

    let onsets = body
        .iter()
        .enumerate()
        .filter(|&(i, &c)| is_vowel(c) && (i == 0 || !is_vowel(body[i - 1])))
        .count();

    onsets.max(1)
}
