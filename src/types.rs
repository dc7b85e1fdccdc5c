//! Core data types shared across the pipeline
//!
//! `Item` is the unit of analysis. `ScoredItem` is an item plus the fields
//! derived by the pipeline. `Summary` is the stable interchange shape for
//! export; everything else stays internal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Final sentiment label for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Label rule for a compound-style score (Model A): ±0.05 neutral band.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= 0.05 {
            Sentiment::Positive
        } else if compound <= -0.05 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Label rule for a polarity-style score (Model B): ±0.1 neutral band,
    /// exclusive bounds.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.1 {
            Sentiment::Positive
        } else if polarity < -0.1 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

/// Detected language of the cleaned text. The detector is binary: presence
/// of Devanagari means `Hi`, anything else is `En`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "hi")]
    Hi,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }
}

/// One unit of text to analyze: a caption or a comment plus metadata.
///
/// Only `text` and `timestamp` are required. Any other fields supplied by
/// the sourcing side (`post_id`, `author_username`, `likes_count`, `type`,
/// ...) ride in `extra` and are passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    pub fn new(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            timestamp,
            extra: Map::new(),
        }
    }

    /// Attach a pass-through metadata field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// An item with all derived fields attached.
///
/// On a field-name collision the derived field wins: the pipeline drops the
/// colliding key from `extra` before constructing this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: Item,
    pub sentiment: Sentiment,
    /// Classifier confidence in [0, 1], rounded to 3 decimals.
    pub confidence: f64,
    /// Model A compound score in [-1, 1], kept for audit.
    pub vader_compound: f64,
    /// Model B polarity score in [-1, 1], kept for audit.
    pub textblob_polarity: f64,
    pub language: Language,
    pub clean_text: String,
    pub translated_text: Option<String>,
    pub used_translation: bool,
}

/// Names of the fields `ScoredItem` derives. Used to resolve collisions
/// with pass-through metadata.
pub const DERIVED_FIELDS: [&str; 8] = [
    "sentiment",
    "confidence",
    "vader_compound",
    "textblob_polarity",
    "language",
    "clean_text",
    "translated_text",
    "used_translation",
];

/// Observed time range of a batch. Both ends are `None` for an empty batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Compact aggregate over a scored batch. This is the sole structure meant
/// for external export; its JSON shape is the interchange contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub label: String,
    pub total_items: usize,
    /// Only labels actually present in the batch appear here.
    pub sentiment_counts: BTreeMap<Sentiment, u64>,
    pub language_counts: BTreeMap<Language, u64>,
    /// Mean classifier confidence, rounded to 3 decimals; 0.0 if empty.
    pub average_confidence: f64,
    pub time_window: TimeWindow,
    pub generated_at: DateTime<Utc>,
}

/// Ranked token counts, descending by count, ties in first-encountered
/// order. At most `limit` entries as requested by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordFrequencyTable {
    pub entries: Vec<(String, u64)>,
}

impl WordFrequencyTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, token: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, c)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, u64)> {
        self.entries.iter()
    }
}

/// Round to 3 decimal places, the precision used for all exported floats.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_from_compound_thresholds() {
        assert_eq!(Sentiment::from_compound(0.05), Sentiment::Positive);
        assert_eq!(Sentiment::from_compound(-0.05), Sentiment::Negative);
        assert_eq!(Sentiment::from_compound(0.049), Sentiment::Neutral);
        assert_eq!(Sentiment::from_compound(-0.049), Sentiment::Neutral);
        assert_eq!(Sentiment::from_compound(0.0), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_from_polarity_thresholds() {
        assert_eq!(Sentiment::from_polarity(0.1), Sentiment::Neutral);
        assert_eq!(Sentiment::from_polarity(-0.1), Sentiment::Neutral);
        assert_eq!(Sentiment::from_polarity(0.11), Sentiment::Positive);
        assert_eq!(Sentiment::from_polarity(-0.11), Sentiment::Negative);
    }

    #[test]
    fn test_item_extra_fields_round_trip() {
        let item = Item::new("hello", Utc::now())
            .with_field("post_id", "food_0001")
            .with_field("likes_count", 42);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["post_id"], "food_0001");
        assert_eq!(json["likes_count"], 42);

        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back.extra["post_id"], "food_0001");
    }

    #[test]
    fn test_language_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        assert_eq!(serde_json::to_string(&Language::Hi).unwrap(), "\"hi\"");
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.12345), 0.123);
        assert_eq!(round3(0.9995), 1.0);
        assert_eq!(round3(-0.0004), -0.0);
    }

    #[test]
    fn test_word_table_lookup() {
        let table = WordFrequencyTable {
            entries: vec![("love".to_string(), 4), ("mast".to_string(), 2)],
        };
        assert_eq!(table.count("love"), Some(4));
        assert_eq!(table.count("missing"), None);
        assert_eq!(table.len(), 2);
    }
}
