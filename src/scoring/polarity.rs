//! Polarity-style sentiment model (Model B)
//!
//! TextBlob-family scorer: the polarity of a text is the mean of the
//! polarities of its recognized words, after intensifier and negation
//! adjustment. Typically narrower than the compound model on mixed text
//! because opposing words average out instead of accumulating.

use crate::error::{PipelineError, Result};
use crate::scoring::PolarityModel;
use std::collections::{HashMap, HashSet};

pub struct PolarityAnalyzer {
    lexicon: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl PolarityAnalyzer {
    pub fn new() -> Self {
        let mut analyzer = Self {
            lexicon: HashMap::new(),
            intensifiers: HashMap::new(),
            negations: HashSet::new(),
        };
        analyzer.init_lexicons();
        analyzer
    }

    fn init_lexicons(&mut self) {
        let words = [
            ("good", 0.7),
            ("great", 0.8),
            ("excellent", 1.0),
            ("amazing", 0.6),
            ("awesome", 1.0),
            ("fantastic", 0.4),
            ("wonderful", 1.0),
            ("incredible", 0.9),
            ("best", 1.0),
            ("love", 0.5),
            ("loved", 0.7),
            ("happy", 0.8),
            ("beautiful", 0.85),
            ("stunning", 0.9),
            ("perfect", 1.0),
            ("nice", 0.6),
            ("fresh", 0.3),
            ("clean", 0.367),
            ("smooth", 0.4),
            ("worth", 0.3),
            ("interesting", 0.5),
            ("decent", 0.13),
            ("fine", 0.417),
            ("fair", 0.7),
            ("cool", 0.35),
            ("bad", -0.7),
            ("terrible", -1.0),
            ("awful", -1.0),
            ("horrible", -1.0),
            ("worst", -1.0),
            ("hate", -0.8),
            ("hated", -0.9),
            ("poor", -0.4),
            ("sad", -0.5),
            ("weak", -0.5),
            ("boring", -1.0),
            ("waste", -0.2),
            ("disappointed", -0.75),
            ("disappointing", -0.6),
            ("dirty", -0.6),
            ("annoying", -0.8),
            ("expensive", -0.25),
            ("predictable", -0.2),
            ("cold", -0.6),
            ("overpriced", -0.5),
        ];

        for (word, polarity) in words {
            self.lexicon.insert(word.to_string(), polarity);
        }

        let intensifiers = [
            ("very", 1.3),
            ("really", 1.3),
            ("extremely", 1.5),
            ("absolutely", 1.4),
            ("so", 1.2),
            ("too", 1.2),
            ("highly", 1.3),
            ("pretty", 1.1),
            ("kinda", 0.8),
            ("somewhat", 0.8),
        ];

        for (word, factor) in intensifiers {
            self.intensifiers.insert(word.to_string(), factor);
        }

        for word in [
            "not", "no", "never", "isn't", "wasn't", "aren't", "don't", "doesn't", "didn't",
            "won't", "can't", "cannot", "couldn't",
        ] {
            self.negations.insert(word.to_string());
        }
    }

    fn clean_word(word: &str) -> String {
        word.chars()
            .filter(|c| c.is_alphanumeric() || *c == '\'')
            .collect::<String>()
            .to_lowercase()
    }

    fn polarity(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let words: Vec<String> = lower.split_whitespace().map(|w| Self::clean_word(w)).collect();

        let mut polarities: Vec<f64> = Vec::new();

        for (i, word) in words.iter().enumerate() {
            let Some(&base) = self.lexicon.get(word) else {
                continue;
            };

            let mut polarity = base;

            // Look back two words for modifiers, nearest first
            for prev in words[i.saturating_sub(2)..i].iter().rev() {
                if let Some(&factor) = self.intensifiers.get(prev) {
                    polarity *= factor;
                } else if self.negations.contains(prev) {
                    polarity *= -0.5;
                }
            }

            polarities.push(polarity.clamp(-1.0, 1.0));
        }

        if polarities.is_empty() {
            return 0.0;
        }

        polarities.iter().sum::<f64>() / polarities.len() as f64
    }
}

impl Default for PolarityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityModel for PolarityAnalyzer {
    fn score(&self, text: &str) -> Result<f64> {
        let polarity = self.polarity(text);
        if !polarity.is_finite() {
            return Err(PipelineError::InvalidInput(
                "non-finite polarity score".to_string(),
            ));
        }
        Ok(polarity)
    }

    fn name(&self) -> &'static str {
        "textblob"
    }
}
