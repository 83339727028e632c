//! Run configuration loaded from TOML.
//!
//! TOML shape (every key optional; defaults follow the classic folder layout):
//! ```toml
//! [paths]
//! input_urls = "Input-urls.txt"
//! articles_dir = "Articles"
//! stopwords_dir = "StopWords"
//! master_dictionary_dir = "MasterDictionary"
//! output = "Final_Analysis.txt"
//!
//! [lexicons]
//! positive = "positive-words.txt"
//! negative = "negative-words.txt"
//! technical = "tech-words.txt"
//!
//! [run]
//! workers = 0   # 0 = available cores
//!
//! [http]
//! timeout_secs = 30
//! user_agent = "article-metrics/0.1"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::lexicon::LexiconPaths;

pub const DEFAULT_CONFIG_PATH: &str = "config/analyzer.toml";
pub const ENV_CONFIG_PATH: &str = "ANALYZER_CONFIG_PATH";
pub const ENV_WORKERS: &str = "ANALYZER_WORKERS";

fn default_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    format!("article-metrics/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input_urls: PathBuf,
    pub articles_dir: PathBuf,
    pub stopwords_dir: PathBuf,
    pub master_dictionary_dir: PathBuf,
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_urls: PathBuf::from("Input-urls.txt"),
            articles_dir: PathBuf::from("Articles"),
            stopwords_dir: PathBuf::from("StopWords"),
            master_dictionary_dir: PathBuf::from("MasterDictionary"),
            output: PathBuf::from("Final_Analysis.txt"),
        }
    }
}

/// Lexicon file names, relative to `paths.master_dictionary_dir`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconFiles {
    pub positive: String,
    pub negative: String,
    pub technical: String,
}

impl Default for LexiconFiles {
    fn default() -> Self {
        Self {
            positive: "positive-words.txt".into(),
            negative: "negative-words.txt".into(),
            technical: "tech-words.txt".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Parallel analysis workers; 0 = available cores.
    pub workers: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub paths: PathsConfig,
    pub lexicons: LexiconFiles,
    pub run: RunConfig,
    pub http: HttpConfig,
}

impl Settings {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing analyzer config")
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading analyzer config at {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("in config file {}", path.display()))
    }

    /// Resolve the config: explicit path, then `$ANALYZER_CONFIG_PATH`, then
    /// `config/analyzer.toml` if present, else built-in defaults. Env overrides
    /// are applied last.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut settings = match explicit {
            Some(p) => Self::load_from_file(p)?,
            None => match std::env::var(ENV_CONFIG_PATH) {
                Ok(p) => Self::load_from_file(Path::new(&p))?,
                Err(_) => {
                    let default = Path::new(DEFAULT_CONFIG_PATH);
                    if default.exists() {
                        Self::load_from_file(default)?
                    } else {
                        tracing::debug!("no config file found; using defaults");
                        Self::default()
                    }
                }
            },
        };
        settings.apply_env_overrides();
        Ok(settings)
    }

    fn apply_env_overrides(&mut self) {
        if let Some(w) = parse_workers_env(std::env::var(ENV_WORKERS).ok()) {
            self.run.workers = w;
        }
    }

    /// Full paths of every lexicon source.
    pub fn lexicon_paths(&self) -> LexiconPaths {
        let dict = &self.paths.master_dictionary_dir;
        LexiconPaths {
            positive: dict.join(&self.lexicons.positive),
            negative: dict.join(&self.lexicons.negative),
            technical: dict.join(&self.lexicons.technical),
            stopwords_dir: self.paths.stopwords_dir.clone(),
        }
    }
}

// unparsable values are ignored
fn parse_workers_env(raw: Option<String>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
}
