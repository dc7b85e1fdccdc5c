//! Configuration management

use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pipeline: PipelineConfig,
    pub classifier: ClassifierConfig,
    pub translation: TranslationConfig,
    pub words: WordsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Items per processing chunk. Batching granularity only; results are
    /// identical for any chunk size.
    pub chunk_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Weight of the compound (Model A) score in the final label.
    pub weight_compound: f64,
    /// Weight of the polarity (Model B) score in the final label.
    pub weight_polarity: f64,
    /// Weighted scores inside ±band are Neutral.
    pub neutral_band: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// Translation endpoint (LibreTranslate-compatible). None disables
    /// translation entirely.
    pub endpoint: Option<String>,
    /// API key, if the endpoint requires one.
    pub api_key: Option<String>,
    /// Deadline per translation call. Expiry counts as translation failure.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WordsConfig {
    /// Maximum entries in a word-frequency table.
    pub limit: usize,
    /// Extract emoji characters as standalone tokens.
    pub keep_emojis: bool,
}

impl Config {
    /// Load configuration from file, with `SENTIMENT_`-prefixed environment
    /// variables taking precedence.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("SENTIMENT").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        Ok(config)
    }

    /// Load from default locations, falling back to built-in defaults when
    /// no config file exists.
    pub fn load_default() -> anyhow::Result<Self> {
        let paths = [
            "config.toml",
            "config.yaml",
            "~/.config/social-sentiment/config.toml",
        ];

        for path in paths {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                return Self::load(expanded.as_ref());
            }
        }

        Ok(Config::default())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { chunk_size: 400 }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            weight_compound: 0.6,
            weight_polarity: 0.4,
            neutral_band: 0.06,
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout_secs: 8,
        }
    }
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            limit: 80,
            keep_emojis: false,
        }
    }
}
