//! Word and sentence segmentation over normalized text, plus stopword filtering.

use crate::lexicon::Lexicon;

/// Common abbreviations whose trailing period does not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co", "corp",
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "no",
    "fig", "e.g", "i.e", "u.s", "u.k", "approx", "dept", "est",
];

/// Fused forms split into two word tokens, matched on the whole word.
const FUSED_FORMS: &[(&str, &str, &str)] = &[
    ("cannot", "can", "not"),
    ("gimme", "gim", "me"),
    ("gonna", "gon", "na"),
    ("gotta", "got", "ta"),
    ("lemme", "lem", "me"),
    ("wanna", "wan", "na"),
];

/// Split text into word tokens, lowercased.
///
/// Whitespace separates tokens. Intra-word hyphens and pluses stay attached
/// (`state-of-the-art`, `c++`), while a double hyphen `--` is split out as its
/// own punctuation token. Leading/trailing sentence punctuation (`.,;:!?"()`)
/// is split off the word as separate tokens. Fused forms such as `cannot` and
/// `gonna` become two tokens (`can not`, `gon na`).
pub fn word_tokens(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for chunk in text.split_whitespace() {
        split_chunk(chunk, &mut out);
    }
    out
}

fn split_chunk(chunk: &str, out: &mut Vec<String>) {
    let mut rest = chunk;
    while let Some(pos) = rest.find("--") {
        push_word(&rest[..pos], out);
        let dashes = rest[pos..].chars().take_while(|&c| c == '-').count();
        out.push("-".repeat(dashes));
        rest = &rest[pos + dashes..];
    }
    push_word(rest, out);
}

fn push_word(piece: &str, out: &mut Vec<String>) {
    if piece.is_empty() {
        return;
    }
    let is_edge = |c: char| matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '"' | '(' | ')');
    let core = piece.trim_matches(is_edge);
    let lead = &piece[..piece.len() - piece.trim_start_matches(is_edge).len()];
    let trail = &piece[piece.trim_end_matches(is_edge).len()..];

    out.extend(lead.chars().map(String::from));
    // All-punctuation pieces are fully covered by `lead`.
    if core.is_empty() {
        return;
    }
    let word = core.to_lowercase();
    match FUSED_FORMS.iter().find(|(fused, _, _)| *fused == word) {
        Some(&(_, head, tail)) => {
            out.push(head.to_string());
            out.push(tail.to_string());
        }
        None => out.push(word),
    }
    out.extend(trail.chars().map(String::from));
}

/// True if the token has no letters or digits, only ASCII punctuation.
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_punctuation())
}

/// Tokenize and drop punctuation tokens and stopwords.
pub fn filter_tokens(text: &str, stopwords: &Lexicon) -> Vec<String> {
    word_tokens(text)
        .into_iter()
        .filter(|t| !t.is_empty() && !is_punctuation(t) && !stopwords.contains(t))
        .collect()
}

/// Split text into sentences on `.`, `!` and `?`.
///
/// A period does not close a sentence when it ends a known abbreviation or a
/// single-letter initial, or when the next word starts in lowercase. Text with
/// no terminal punctuation is a single sentence; blank text has none.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let chars: Vec<(usize, char)> = text.char_indices().collect();

    let mut i = 0usize;
    while i < chars.len() {
        let (pos, c) = chars[i];
        if matches!(c, '.' | '!' | '?') {
            // Absorb runs like "?!" or "..." and closing quotes/brackets.
            let mut j = i + 1;
            while j < chars.len() && matches!(chars[j].1, '.' | '!' | '?' | '"' | '\'' | ')') {
                j += 1;
            }
            let at_end = j >= chars.len();
            let followed_by_space = !at_end && chars[j].1.is_whitespace();

            if at_end || (followed_by_space && is_boundary(text, start, pos, c, &chars[j..])) {
                let end = if at_end { text.len() } else { chars[j].0 };
                push_sentence(&text[start..end], &mut sentences);
                start = end;
            }
            i = j;
            continue;
        }
        i += 1;
    }
    push_sentence(&text[start..], &mut sentences);
    sentences
}

fn push_sentence<'a>(s: &'a str, out: &mut Vec<&'a str>) {
    let s = s.trim();
    if !s.is_empty() {
        out.push(s);
    }
}

fn is_boundary(text: &str, start: usize, pos: usize, mark: char, after: &[(usize, char)]) -> bool {
    if mark != '.' {
        return true;
    }

    let prev_word = text[start..pos]
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default()
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();

    if ABBREVIATIONS.contains(&prev_word.as_str()) {
        return false;
    }
    if prev_word.chars().count() == 1 && prev_word.chars().all(char::is_alphabetic) {
        return false;
    }

    // The next word decides: a lowercase start means the period was not terminal.
    let next = after
        .iter()
        .map(|&(_, c)| c)
        .find(|c| !c.is_whitespace() && !matches!(c, '"' | '\'' | '('));
    !matches!(next, Some(c) if c.is_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_split_keeps_hyphen_and_plus_words() {
        let t = word_tokens("state-of-the-art c++ tools");
        assert_eq!(t, vec!["state-of-the-art", "c++", "tools"]);
    }

    #[test]
    fn double_hyphen_is_split_out() {
        let t = word_tokens("fast--cheap -- done");
        assert_eq!(t, vec!["fast", "--", "cheap", "--", "done"]);
    }

    #[test]
    fn edge_punctuation_is_separated() {
        let t = word_tokens("Hello, (world)!");
        assert_eq!(t, vec!["hello", ",", "(", "world", ")", "!"]);
    }

    #[test]
    fn fused_forms_split_in_two() {
        let t = word_tokens("we cannot stop gonna win");
        assert_eq!(t, vec!["we", "can", "not", "stop", "gon", "na", "win"]);
        let t = word_tokens("Gotta go, lemme see. Gimme wanna");
        assert_eq!(
            t,
            vec!["got", "ta", "go", ",", "lem", "me", "see", ".", "gim", "me", "wan", "na"]
        );
    }

    #[test]
    fn fused_forms_match_whole_words_only() {
        let t = word_tokens("cannoting wannabe gonnas");
        assert_eq!(t, vec!["cannoting", "wannabe", "gonnas"]);
    }

    #[test]
    fn punctuation_detection() {
        assert!(is_punctuation("-"));
        assert!(is_punctuation("+"));
        assert!(is_punctuation("--"));
        assert!(!is_punctuation("c++"));
        assert!(!is_punctuation(""));
    }

    #[test]
    fn filter_drops_stopwords_and_punct() {
        let stop = Lexicon::from_lines(["the", "and"]);
        let t = filter_tokens("the cat - and the hat + more", &stop);
        assert_eq!(t, vec!["cat", "hat", "more"]);
    }

    #[test]
    fn stopword_match_is_exact_not_substring() {
        let stop = Lexicon::from_lines(["he"]);
        let t = filter_tokens("he helped them", &stop);
        assert_eq!(t, vec!["helped", "them"]);
    }

    #[test]
    fn sentences_on_terminal_punctuation() {
        let s = split_sentences("The cat sat. The dog ran! Did it? Yes.");
        assert_eq!(s, vec!["The cat sat.", "The dog ran!", "Did it?", "Yes."]);
    }

    #[test]
    fn abbreviations_do_not_split() {
        let s = split_sentences("Dr. Smith met Mr. Jones at 5 p.m. today. Then he left.");
        assert_eq!(s.len(), 2);
        assert!(s[0].starts_with("Dr. Smith"));
        assert_eq!(s[1], "Then he left.");
    }

    #[test]
    fn normalized_text_is_one_sentence() {
        assert_eq!(split_sentences("no punctuation survives here").len(), 1);
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }
}
