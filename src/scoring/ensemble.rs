//! Combining the two model scores into one decision
//!
//! `resolve_models` is the model-level signal: label agreement, or the more
//! confident scalar on disagreement. `ClassifierPolicy` is the single
//! authoritative classification that determines the user-visible
//! `sentiment` and `confidence`; the raw per-model scalars stay on the
//! scored item as audit fields.

use crate::config::ClassifierConfig;
use crate::types::{round3, Sentiment};

/// One model's output: its label plus the raw scalar behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelScore {
    pub label: Sentiment,
    pub scalar: f64,
}

impl ModelScore {
    /// Model A output: compound scalar labeled with the ±0.05 band.
    pub fn compound(scalar: f64) -> Self {
        Self {
            label: Sentiment::from_compound(scalar),
            scalar,
        }
    }

    /// Model B output: polarity scalar labeled with the ±0.1 band.
    pub fn polarity(scalar: f64) -> Self {
        Self {
            label: Sentiment::from_polarity(scalar),
            scalar,
        }
    }
}

/// Model-level resolution of the two outputs, kept as a diagnostic signal.
///
/// Agreement keeps the shared label. On disagreement the model with the
/// larger absolute scalar wins; an exact tie falls to the first operand
/// (Model A), which is a compatibility artifact, not a design intent.
/// The returned confidence is the mean of the absolute scalars, 3 decimals.
pub fn resolve_models(a: ModelScore, b: ModelScore) -> (Sentiment, f64) {
    let label = if a.label == b.label {
        a.label
    } else if a.scalar.abs() >= b.scalar.abs() {
        a.label
    } else {
        b.label
    };

    let confidence = round3((a.scalar.abs() + b.scalar.abs()) / 2.0);
    (label, confidence)
}

/// The authoritative final classification.
///
/// A weighted sum of the two raw scalars with a neutral band around zero.
/// Defaults reproduce the user-visible output of the reference system:
/// weights 0.6/0.4, band ±0.06, confidence `0.6|a| + 0.4|b|`.
#[derive(Debug, Clone, Copy)]
pub struct ClassifierPolicy {
    pub weight_compound: f64,
    pub weight_polarity: f64,
    pub neutral_band: f64,
}

impl Default for ClassifierPolicy {
    fn default() -> Self {
        Self {
            weight_compound: 0.6,
            weight_polarity: 0.4,
            neutral_band: 0.06,
        }
    }
}

impl ClassifierPolicy {
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self {
            weight_compound: config.weight_compound,
            weight_polarity: config.weight_polarity,
            neutral_band: config.neutral_band,
        }
    }

    /// Classify from the two raw scalars. Returns the final label and the
    /// weighted-absolute confidence rounded to 3 decimals.
    pub fn classify(&self, compound: f64, polarity: f64) -> (Sentiment, f64) {
        let weighted = self.weight_compound * compound + self.weight_polarity * polarity;

        let label = if weighted >= self.neutral_band {
            Sentiment::Positive
        } else if weighted <= -self.neutral_band {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };

        let confidence = round3(
            self.weight_compound * compound.abs() + self.weight_polarity * polarity.abs(),
        );
        (label, confidence)
    }
}
