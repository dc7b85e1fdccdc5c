//! Summary building
//!
//! Reduces a scored batch into the compact aggregate record used for
//! export. Pure aggregation; the only side effect is reading the wall
//! clock for `generated_at`.

use crate::types::{round3, ScoredItem, Summary, TimeWindow};
use chrono::Utc;
use std::collections::BTreeMap;

/// Build a summary over `items` with a caller-supplied label.
///
/// An empty batch yields zero counts, `average_confidence` 0.0, and an
/// open time window (both ends `None`).
pub fn build_summary(items: &[ScoredItem], label: &str) -> Summary {
    let mut sentiment_counts = BTreeMap::new();
    let mut language_counts = BTreeMap::new();

    for item in items {
        *sentiment_counts.entry(item.sentiment).or_insert(0u64) += 1;
        *language_counts.entry(item.language).or_insert(0u64) += 1;
    }

    let average_confidence = if items.is_empty() {
        0.0
    } else {
        round3(items.iter().map(|i| i.confidence).sum::<f64>() / items.len() as f64)
    };

    let time_window = TimeWindow {
        start: items.iter().map(|i| i.item.timestamp).min(),
        end: items.iter().map(|i| i.item.timestamp).max(),
    };

    Summary {
        label: label.to_string(),
        total_items: items.len(),
        sentiment_counts,
        language_counts,
        average_confidence,
        time_window,
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Item, Language, Sentiment};
    use chrono::{Duration, Utc};

    fn scored(text: &str, sentiment: Sentiment, confidence: f64, age_mins: i64) -> ScoredItem {
        let timestamp = Utc::now() - Duration::minutes(age_mins);
        ScoredItem {
            item: Item::new(text, timestamp),
            sentiment,
            confidence,
            vader_compound: 0.0,
            textblob_polarity: 0.0,
            language: Language::En,
            clean_text: text.to_string(),
            translated_text: None,
            used_translation: false,
        }
    }

    #[test]
    fn test_empty_batch_summary() {
        let summary = build_summary(&[], "empty");

        assert_eq!(summary.label, "empty");
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.average_confidence, 0.0);
        assert!(summary.sentiment_counts.is_empty());
        assert!(summary.language_counts.is_empty());
        assert_eq!(summary.time_window.start, None);
        assert_eq!(summary.time_window.end, None);
    }

    #[test]
    fn test_counts_only_present_labels() {
        let items = vec![
            scored("a", Sentiment::Positive, 0.5, 10),
            scored("b", Sentiment::Positive, 0.7, 5),
            scored("c", Sentiment::Neutral, 0.1, 1),
        ];
        let summary = build_summary(&items, "#food");

        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.sentiment_counts[&Sentiment::Positive], 2);
        assert_eq!(summary.sentiment_counts[&Sentiment::Neutral], 1);
        assert!(!summary.sentiment_counts.contains_key(&Sentiment::Negative));
        assert_eq!(summary.language_counts[&Language::En], 3);
    }

    #[test]
    fn test_average_confidence_rounded() {
        let items = vec![
            scored("a", Sentiment::Positive, 0.5, 1),
            scored("b", Sentiment::Negative, 0.6667, 1),
        ];
        let summary = build_summary(&items, "x");
        assert_eq!(summary.average_confidence, 0.583); // (0.5 + 0.6667) / 2
    }

    #[test]
    fn test_time_window_spans_batch() {
        let items = vec![
            scored("old", Sentiment::Neutral, 0.0, 120),
            scored("new", Sentiment::Neutral, 0.0, 1),
            scored("mid", Sentiment::Neutral, 0.0, 60),
        ];
        let summary = build_summary(&items, "x");

        let start = summary.time_window.start.unwrap();
        let end = summary.time_window.end.unwrap();
        assert!(start < end);
        assert_eq!(start, items[0].item.timestamp);
        assert_eq!(end, items[1].item.timestamp);
    }

    #[test]
    fn test_summary_json_round_trip() {
        let items = vec![
            scored("a", Sentiment::Positive, 0.41, 3),
            scored("b", Sentiment::Negative, 0.22, 2),
        ];
        let summary = build_summary(&items, "#travel");

        let json = serde_json::to_string_pretty(&summary).unwrap();
        let back: Summary = serde_json::from_str(&json).unwrap();

        assert_eq!(back.label, summary.label);
        assert_eq!(back.total_items, summary.total_items);
        assert_eq!(back.sentiment_counts, summary.sentiment_counts);
        assert_eq!(back.language_counts, summary.language_counts);
        assert_eq!(back.average_confidence, summary.average_confidence);
        assert_eq!(back.time_window, summary.time_window);
        assert_eq!(back.generated_at, summary.generated_at);
    }

    #[test]
    fn test_interchange_shape() {
        let summary = build_summary(&[scored("a", Sentiment::Positive, 0.9, 1)], "label");
        let json = serde_json::to_value(&summary).unwrap();

        assert!(json["label"].is_string());
        assert!(json["total_items"].is_u64());
        assert_eq!(json["sentiment_counts"]["Positive"], 1);
        assert_eq!(json["language_counts"]["en"], 1);
        assert!(json["average_confidence"].is_number());
        assert!(json["time_window"]["start"].is_string());
        assert!(json["time_window"]["end"].is_string());
        assert!(json["generated_at"].is_string());
    }
}
