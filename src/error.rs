//! Error types for the sentiment pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// The caller supplied zero items. Recoverable: there is nothing to do.
    #[error("empty batch: no items to analyze")]
    EmptyBatch,

    /// A scoring model failed on one item. Fatal for the whole batch;
    /// partial results are never published.
    #[error("scoring failed in model {model} at item {index}: {reason} (text: {snippet:?})")]
    Scoring {
        model: String,
        index: usize,
        /// The model's own error message.
        reason: String,
        snippet: String,
    },

    /// Translation provider plumbing. Absorbed inside the translation
    /// adapter; never escapes to the pipeline caller.
    #[error("translation error: {0}")]
    Translation(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

impl PipelineError {
    /// Truncate item text for error context without splitting a UTF-8 char.
    pub fn snippet_of(text: &str) -> String {
        const MAX: usize = 80;
        if text.chars().count() <= MAX {
            text.to_string()
        } else {
            let cut: String = text.chars().take(MAX).collect();
            format!("{cut}…")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_error_names_item_and_reason() {
        let err = PipelineError::Scoring {
            model: "vader".to_string(),
            index: 7,
            reason: "non-finite compound score".to_string(),
            snippet: "broken text".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("vader"));
        assert!(msg.contains('7'));
        assert!(msg.contains("non-finite compound score"));
        assert!(msg.contains("broken text"));
    }

    #[test]
    fn test_snippet_truncation() {
        let long = "x".repeat(200);
        let snip = PipelineError::snippet_of(&long);
        assert!(snip.chars().count() <= 81);
        assert!(snip.ends_with('…'));

        let short = "hello";
        assert_eq!(PipelineError::snippet_of(short), "hello");
    }

    #[test]
    fn test_snippet_multibyte_boundary() {
        let hindi = "यह बहुत अच्छा है ".repeat(20);
        let snip = PipelineError::snippet_of(&hindi);
        assert!(snip.ends_with('…'));
    }
}
