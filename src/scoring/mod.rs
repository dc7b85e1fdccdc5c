//! Dual-model sentiment scoring
//!
//! Two independent lexicon models score each text:
//! - `vader` produces a compound score in [-1, 1] (Model A)
//! - `polarity` produces a TextBlob-style mean polarity in [-1, 1] (Model B)
//!
//! `ensemble` combines the two scalars into the final label and confidence.

pub mod ensemble;
pub mod polarity;
pub mod vader;

pub use ensemble::{resolve_models, ClassifierPolicy, ModelScore};
pub use polarity::PolarityAnalyzer;
pub use vader::VaderAnalyzer;

use crate::error::Result;

/// A stateless polarity-scoring model.
///
/// Implementations are pure with respect to the pipeline: all state is
/// built once at construction and only read afterwards.
pub trait PolarityModel: Send + Sync {
    /// Score text; the scalar must be finite and in [-1, 1].
    fn score(&self, text: &str) -> Result<f64>;

    fn name(&self) -> &'static str;
}
