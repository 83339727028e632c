//! # Lexicons
//! Immutable word sets used for scoring: positive, negative, technical, and stopwords.
//!
//! Built once per run (from raw lines or from files) and then shared read-only
//! across every document analysis, typically behind an `Arc<Lexicons>`.
//!
//! File formats:
//! - word lists: one word per line (`positive-words.txt`, ...)
//! - stopword sources: pipe-delimited lines, e.g. `SMITH | Surnames from 1990 census`

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// A set of lowercase words tagged with a single category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// One word per line. Lines are trimmed and lowercased; blank lines are skipped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .map(|l| l.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Pipe-delimited lines (stopword sources). Lines are trimmed and lowercased;
/// every non-empty piece becomes an entry as-is.
    pub fn from_pipe_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lex = Self::default();
        lex.extend_pipe_lines(lines);
        lex
    }

    fn extend_pipe_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            let line = line.as_ref().trim().to_lowercase();
            // Pieces keep their surrounding spaces: "smith | surnames" yields
            // "smith " and " surnames", neither of which matches a bare token.
            for piece in line.split('|').filter(|p| !p.is_empty()) {
                self.words.insert(piece.to_string());
            }
        }
    }

    /// Exact, case-insensitive membership.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The full set of lexicons one run scores against.
#[derive(Debug, Clone, Default)]
pub struct Lexicons {
    pub positive: Lexicon,
    pub negative: Lexicon,
    pub technical: Lexicon,
    pub stopwords: Lexicon,
}

/// Where the lexicon files live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconPaths {
    pub positive: PathBuf,
    pub negative: PathBuf,
    pub technical: PathBuf,
    pub stopwords_dir: PathBuf,
}

impl Lexicons {
    pub fn new(positive: Lexicon, negative: Lexicon, technical: Lexicon, stopwords: Lexicon) -> Self {
        Self {
            positive,
            negative,
            technical,
            stopwords,
        }
    }

    /// Load every lexicon from disk. Any unreadable file fails the whole load.
    pub fn load(paths: &LexiconPaths) -> Result<Self> {
        let lex = Self {
            positive: load_word_list(&paths.positive)?,
            negative: load_word_list(&paths.negative)?,
            technical: load_word_list(&paths.technical)?,
            stopwords: load_stopwords_dir(&paths.stopwords_dir)?,
        };
        tracing::info!(
            positive = lex.positive.len(),
            negative = lex.negative.len(),
            technical = lex.technical.len(),
            stopwords = lex.stopwords.len(),
            "lexicons loaded"
        );
        Ok(lex)
    }
}

/// Read a one-word-per-line list. Undecodable bytes are dropped.
pub fn load_word_list(path: &Path) -> Result<Lexicon> {
    let content = read_lossy(path).with_context(|| format!("reading word list {}", path.display()))?;
    Ok(Lexicon::from_lines(content.lines()))
}

/// Read every regular file in `dir` as a pipe-delimited stopword source.
pub fn load_stopwords_dir(dir: &Path) -> Result<Lexicon> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("reading stopwords directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("listing stopwords directory {}", dir.display()))?
            .path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let mut lex = Lexicon::default();
    for path in files {
        let content =
            read_lossy(&path).with_context(|| format!("reading stopwords {}", path.display()))?;
        lex.extend_pipe_lines(content.lines());
    }
    Ok(lex)
}

fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).replace('\u{FFFD}', ""))
}
