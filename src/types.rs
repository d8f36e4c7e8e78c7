// src/types.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_WORDLIST: &str = "words.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub wordlist: PathBuf,
    pub strategies: Vec<String>,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
            strategies: vec![
                "index".to_string(),
                "dash".to_string(),
                "number".to_string(),
                "join".to_string(),
                "expand".to_string(),
            ],
            output: OutputConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A host split into the part that gets permuted and the part that stays fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRecord {
    pub host: String,
    pub subdomain: String,
    pub suffix: String,
}

impl HostRecord {
    /// Re-attach the suffix to a generated candidate.
    pub fn qualify(&self, candidate: &str) -> String {
        if self.suffix.is_empty() {
            candidate.to_string()
        } else {
            format!("{}.{}", candidate, self.suffix)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PermutationRecord<'a> {
    pub host: &'a str,
    pub permutation: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    pub hosts: usize,
    pub candidates: usize,
    pub strategies_used: Vec<String>,
    pub duration: Duration,
}

pub struct StrategyInfo {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Error)]
pub enum RustPermuteError {
    #[error("wordlist {path:?}: {source}")]
    WordlistOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output {path:?}: {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("No hosts specified. Use -h <host>, -l <file>, or pipe hosts to stdin")]
    NoInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(#[from] anyhow::Error),
}
