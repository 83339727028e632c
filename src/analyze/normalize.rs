//! Text normalization: keep ASCII letters, whitespace, `-` and `+`; lowercase; fold whitespace.

/// Characters that survive normalization.
#[inline]
fn is_kept(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || c == '-' || c == '+'
}

/// Normalize raw article text.
///
/// Every character other than an ASCII letter, whitespace, `-` or `+` is removed,
/// the rest is lowercased, whitespace runs become a single space and the result
/// is trimmed. Total and idempotent.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for c in raw.chars().filter(|&c| is_kept(c)) {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c.to_ascii_lowercase());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_digits_and_punctuation() {
        assert_eq!(normalize("Hello, World! 2024."), "hello world");
    }

    #[test]
    fn keeps_hyphen_and_plus() {
        assert_eq!(normalize("C++ and state-of-the-art"), "c++ and state-of-the-art");
    }

    #[test]
    fn collapses_and_trims_whitespace() {
        assert_eq!(normalize("  a\t\n b \u{00A0} c  "), "a b c");
    }

    #[test]
    fn removal_can_join_letters() {
        // Characters are dropped, not replaced by a space.
        assert_eq!(normalize("don't e-mail 3rd"), "dont e-mail rd");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(normalize("Café naïve"), "caf nave");
    }

    #[test]
    fn empty_and_symbol_only_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("123 !!! ..."), "");
    }

    #[test]
    fn idempotent_on_samples() {
        for s in ["A  b", " --x++ ", "US troops and I agree.", "\n\n"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }
}
