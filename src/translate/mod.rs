//! Translation capability
//!
//! Translation is optional: the pipeline works identically whether a
//! provider is configured, misconfigured, or failing. The adapter absorbs
//! every provider error (including deadline expiry) into "no translation"
//! so a network stall on one item can never hang or fail a batch.

pub mod http;

pub use http::HttpTranslator;

use crate::config::TranslationConfig;
use crate::error::Result;
use crate::types::Language;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// A concrete translation provider. Any implementation (remote API,
/// dictionary, test double) plugs in behind this contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target`, with `source_hint` (usually "auto").
    async fn translate(&self, text: &str, source_hint: &str, target: &str) -> Result<String>;

    fn name(&self) -> &'static str;
}

/// Failure-absorbing wrapper around an optional provider.
pub struct TranslationAdapter {
    provider: Option<Arc<dyn Translator>>,
    timeout: Duration,
}

impl TranslationAdapter {
    pub fn new(provider: Option<Arc<dyn Translator>>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// An adapter with no provider: every call yields "no translation".
    pub fn disabled() -> Self {
        Self::new(None, Duration::from_secs(0))
    }

    /// Build from config; no endpoint means translation stays disabled.
    pub fn from_config(config: &TranslationConfig) -> Self {
        let provider: Option<Arc<dyn Translator>> = config.endpoint.as_ref().map(|endpoint| {
            Arc::new(HttpTranslator::new(endpoint.clone(), config.api_key.clone()))
                as Arc<dyn Translator>
        });
        Self::new(provider, Duration::from_secs(config.timeout_secs))
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    /// Attempt an English rendering of non-English text.
    ///
    /// Returns `None` when the text is already English, no provider is
    /// configured, or the provider fails or exceeds the deadline. Failures
    /// are logged and swallowed; they never reach the caller.
    pub async fn maybe_translate(&self, text: &str, language: Language) -> Option<String> {
        if language == Language::En {
            return None;
        }
        let provider = self.provider.as_ref()?;

        match tokio::time::timeout(self.timeout, provider.translate(text, "auto", "en")).await {
            Ok(Ok(translated)) => Some(translated),
            Ok(Err(e)) => {
                tracing::warn!(provider = provider.name(), error = %e, "translation failed");
                None
            }
            Err(_) => {
                tracing::warn!(
                    provider = provider.name(),
                    timeout_secs = self.timeout.as_secs_f64(),
                    "translation timed out"
                );
                None
            }
        }
    }
}
