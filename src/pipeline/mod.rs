//! Batch scoring pipeline
//!
//! Applies normalize → detect language → maybe translate → dual-model
//! score → classify to every item of an ordered batch. Output order always
//! matches input order; either the whole batch succeeds or an error names
//! the offending item. Chunking shapes logging and memory only and never
//! changes results.

use crate::config::Config;
use crate::error::{PipelineError, Result};
use crate::scoring::{ClassifierPolicy, PolarityAnalyzer, PolarityModel, VaderAnalyzer};
use crate::text::{detect_language, normalize};
use crate::translate::TranslationAdapter;
use crate::types::{Item, ScoredItem, DERIVED_FIELDS};
use std::sync::Arc;

pub struct Pipeline {
    vader: Arc<dyn PolarityModel>,
    polarity: Arc<dyn PolarityModel>,
    translator: TranslationAdapter,
    policy: ClassifierPolicy,
    chunk_size: usize,
}

impl Pipeline {
    /// Pipeline with default models, policy, and translation disabled.
    pub fn new() -> Self {
        Self {
            vader: Arc::new(VaderAnalyzer::new()),
            polarity: Arc::new(PolarityAnalyzer::new()),
            translator: TranslationAdapter::disabled(),
            policy: ClassifierPolicy::default(),
            chunk_size: 400,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            vader: Arc::new(VaderAnalyzer::new()),
            polarity: Arc::new(PolarityAnalyzer::new()),
            translator: TranslationAdapter::from_config(&config.translation),
            policy: ClassifierPolicy::from_config(&config.classifier),
            chunk_size: config.pipeline.chunk_size,
        }
    }

    pub fn with_translator(mut self, translator: TranslationAdapter) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_policy(mut self, policy: ClassifierPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Swap the scoring models; used for fault injection in tests.
    pub fn with_models(
        mut self,
        vader: Arc<dyn PolarityModel>,
        polarity: Arc<dyn PolarityModel>,
    ) -> Self {
        self.vader = vader;
        self.polarity = polarity;
        self
    }

    /// Score an ordered batch of items.
    ///
    /// Returns `EmptyBatch` for zero items and `Scoring` (with the item
    /// index and a text snippet) if either model fails; no partial batch
    /// is ever returned. Translation failures never fail an item.
    pub async fn analyze_batch(&self, items: Vec<Item>) -> Result<Vec<ScoredItem>> {
        if items.is_empty() {
            return Err(PipelineError::EmptyBatch);
        }

        let total = items.len();
        let chunk_size = self.chunk_size.max(1);
        let mut scored = Vec::with_capacity(total);

        for (index, item) in items.into_iter().enumerate() {
            if index % chunk_size == 0 {
                tracing::debug!(offset = index, total, "processing chunk");
            }
            scored.push(self.score_item(index, item).await?);
        }

        tracing::info!(total, "batch analyzed");
        Ok(scored)
    }

    async fn score_item(&self, index: usize, mut item: Item) -> Result<ScoredItem> {
        let clean_text = normalize(&item.text);
        let language = detect_language(&clean_text);

        let translated_text = self.translator.maybe_translate(&clean_text, language).await;
        let to_score = translated_text.as_deref().unwrap_or(&clean_text);

        let vader_compound = self
            .vader
            .score(to_score)
            .map_err(|e| self.scoring_error(self.vader.name(), index, e, &item.text))?;
        let textblob_polarity = self
            .polarity
            .score(to_score)
            .map_err(|e| self.scoring_error(self.polarity.name(), index, e, &item.text))?;

        let (sentiment, confidence) = self.policy.classify(vader_compound, textblob_polarity);

        // Derived fields win on name collision with pass-through metadata
        for field in DERIVED_FIELDS {
            item.extra.remove(field);
        }

        Ok(ScoredItem {
            used_translation: translated_text.is_some(),
            item,
            sentiment,
            confidence,
            vader_compound,
            textblob_polarity,
            language,
            clean_text,
            translated_text,
        })
    }

    fn scoring_error(
        &self,
        model: &str,
        index: usize,
        cause: PipelineError,
        text: &str,
    ) -> PipelineError {
        PipelineError::Scoring {
            model: model.to_string(),
            index,
            reason: cause.to_string(),
            snippet: PipelineError::snippet_of(text),
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
