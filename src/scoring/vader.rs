//! Compound-style sentiment model (Model A)
//!
//! Lexicon-based scorer in the VADER family: word valences with booster
//! and negation handling, emoji valences, and an alpha-normalized compound
//! score. The lexicon targets short social-media text in English and
//! romanized Hinglish.

use crate::error::{PipelineError, Result};
use crate::scoring::PolarityModel;
use std::collections::{HashMap, HashSet};

/// Normalization constant; same role as VADER's alpha.
const ALPHA: f64 = 15.0;

pub struct VaderAnalyzer {
    /// Word-level valences
    lexicon: HashMap<String, f64>,
    /// Emoji valences, matched on the raw text
    emoji_lexicon: HashMap<char, f64>,
    /// Intensity modifiers (very, extremely, bahut, ...)
    boosters: HashMap<String, f64>,
    /// Negation words; flip and dampen the following valence
    negations: HashSet<String>,
}

impl VaderAnalyzer {
    pub fn new() -> Self {
        let mut analyzer = Self {
            lexicon: HashMap::new(),
            emoji_lexicon: HashMap::new(),
            boosters: HashMap::new(),
            negations: HashSet::new(),
        };
        analyzer.init_lexicons();
        analyzer
    }

    fn init_lexicons(&mut self) {
        let positive_words = [
            ("good", 0.5),
            ("great", 0.7),
            ("excellent", 0.8),
            ("amazing", 0.8),
            ("awesome", 0.7),
            ("fantastic", 0.8),
            ("wonderful", 0.7),
            ("incredible", 0.8),
            ("best", 0.8),
            ("love", 0.6),
            ("loved", 0.6),
            ("like", 0.3),
            ("happy", 0.6),
            ("beautiful", 0.6),
            ("stunning", 0.7),
            ("breathtaking", 0.8),
            ("perfect", 0.7),
            ("nice", 0.4),
            ("clean", 0.3),
            ("fresh", 0.4),
            ("crisp", 0.4),
            ("smooth", 0.4),
            ("worth", 0.4),
            ("recommended", 0.5),
            ("grateful", 0.5),
            ("win", 0.5),
            ("wins", 0.5),
            ("respect", 0.4),
            ("authentic", 0.4),
            ("classy", 0.5),
            ("premium", 0.3),
            // Hinglish
            ("mast", 0.6),
            ("badhiya", 0.6),
            ("shandaar", 0.7),
            ("lit", 0.6),
            ("fire", 0.6),
        ];

        let negative_words = [
            ("bad", -0.5),
            ("terrible", -0.8),
            ("awful", -0.7),
            ("horrible", -0.8),
            ("poor", -0.5),
            ("worst", -0.8),
            ("hate", -0.7),
            ("hated", -0.7),
            ("dislike", -0.4),
            ("sad", -0.5),
            ("weak", -0.4),
            ("boring", -0.4),
            ("waste", -0.6),
            ("overrated", -0.5),
            ("overpriced", -0.4),
            ("expensive", -0.3),
            ("dirty", -0.5),
            ("delayed", -0.4),
            ("disappointed", -0.6),
            ("disappointing", -0.6),
            ("annoying", -0.5),
            ("predictable", -0.3),
            ("questionable", -0.3),
            ("confusing", -0.3),
            ("lag", -0.4),
            ("burnout", -0.4),
            ("meh", -0.3),
            // Hinglish
            ("bakwaas", -0.7),
            ("bekar", -0.6),
        ];

        for (word, score) in positive_words.iter().chain(negative_words.iter()) {
            self.lexicon.insert(word.to_string(), *score);
        }

        let emojis = [
            ('😍', 0.8),
            ('🥰', 0.8),
            ('😋', 0.6),
            ('🔥', 0.6),
            ('💯', 0.7),
            ('✨', 0.5),
            ('👏', 0.5),
            ('🙌', 0.5),
            ('👌', 0.5),
            ('💪', 0.5),
            ('🏆', 0.5),
            ('🙏', 0.3),
            ('🌅', 0.3),
            ('😞', -0.5),
            ('😒', -0.5),
            ('😡', -0.7),
            ('😤', -0.5),
            ('👎', -0.5),
            ('🤦', -0.4),
            ('🥲', -0.3),
            ('😐', -0.1),
        ];

        for (emoji, score) in emojis {
            self.emoji_lexicon.insert(emoji, score);
        }

        let boosters = [
            ("very", 1.3),
            ("really", 1.3),
            ("truly", 1.3),
            ("seriously", 1.3),
            ("extremely", 1.5),
            ("absolutely", 1.4),
            ("completely", 1.4),
            ("totally", 1.3),
            ("so", 1.2),
            ("super", 1.3),
            ("highly", 1.3),
            ("insanely", 1.5),
            ("pretty", 1.1),
            ("bahut", 1.3),
            ("zyada", 1.2),
            // Dampeners
            ("kinda", 0.8),
            ("sorta", 0.8),
            ("slightly", 0.8),
        ];

        for (word, factor) in boosters {
            self.boosters.insert(word.to_string(), factor);
        }

        for word in [
            "not", "no", "never", "none", "neither", "nothing", "isn't", "aren't", "wasn't",
            "weren't", "don't", "doesn't", "didn't", "won't", "wouldn't", "can't", "cannot",
            "couldn't", "shouldn't", "nahi", "nahin",
        ] {
            self.negations.insert(word.to_string());
        }
    }

    /// Strip punctuation and lowercase, keeping apostrophes and hyphens.
    fn clean_word(word: &str) -> String {
        word.chars()
            .filter(|c| c.is_alphanumeric() || *c == '\'' || *c == '-')
            .collect::<String>()
            .to_lowercase()
    }

    /// Apply boosters and negations from up to 3 preceding words.
    fn apply_modifiers(&self, words: &[&str], index: usize, mut score: f64) -> f64 {
        let start = index.saturating_sub(3);

        for prev in &words[start..index] {
            let prev_word = Self::clean_word(prev);

            if let Some(&factor) = self.boosters.get(&prev_word) {
                score *= factor;
            }

            if self.negations.contains(&prev_word) {
                score *= -0.5; // Flip and dampen
            }
        }

        score.clamp(-1.0, 1.0)
    }

    fn compound(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();

        let mut valences: Vec<f64> = Vec::new();

        for c in text.chars() {
            if let Some(&score) = self.emoji_lexicon.get(&c) {
                valences.push(score);
            }
        }

        for (i, raw) in words.iter().enumerate() {
            let word = Self::clean_word(raw);
            if let Some(&score) = self.lexicon.get(&word) {
                valences.push(self.apply_modifiers(&words, i, score));
            }
        }

        if valences.is_empty() {
            return 0.0;
        }

        let sum: f64 = valences.iter().sum();
        (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}

impl Default for VaderAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityModel for VaderAnalyzer {
    fn score(&self, text: &str) -> Result<f64> {
        let compound = self.compound(text);
        if !compound.is_finite() {
            return Err(PipelineError::InvalidInput(
                "non-finite compound score".to_string(),
            ));
        }
        Ok(compound)
    }

    fn name(&self) -> &'static str {
        "vader"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentiment;

    #[test]
    fn test_positive_text() {
        let analyzer = VaderAnalyzer::new();
        let score = analyzer.score("This food is amazing, highly recommended! 😍").unwrap();
        assert!(score >= 0.05);
        assert_eq!(Sentiment::from_compound(score), Sentiment::Positive);
    }

    #[test]
    fn test_negative_text() {
        let analyzer = VaderAnalyzer::new();
        let score = analyzer
            .score("Terrible service, totally disappointed 😞")
            .unwrap();
        assert!(score <= -0.05);
        assert_eq!(Sentiment::from_compound(score), Sentiment::Negative);
    }

    #[test]
    fn test_neutral_text() {
        let analyzer = VaderAnalyzer::new();
        let score = analyzer.score("The event starts at five.").unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_text() {
        let analyzer = VaderAnalyzer::new();
        assert_eq!(analyzer.score("").unwrap(), 0.0);
    }

    #[test]
    fn test_booster_raises_magnitude() {
        let analyzer = VaderAnalyzer::new();
        let plain = analyzer.score("this is good").unwrap();
        let boosted = analyzer.score("this is extremely good").unwrap();
        assert!(boosted > plain);
    }

    #[test]
    fn test_negation_flips() {
        let analyzer = VaderAnalyzer::new();
        let plain = analyzer.score("this is good").unwrap();
        let negated = analyzer.score("this is not good").unwrap();
        assert!(plain > 0.0);
        assert!(negated < 0.0);
    }

    #[test]
    fn test_hinglish_terms() {
        let analyzer = VaderAnalyzer::new();
        assert!(analyzer.score("bahut mast outfit").unwrap() > 0.0);
        assert!(analyzer.score("pura bakwaas tha").unwrap() < 0.0);
    }

    #[test]
    fn test_emoji_only() {
        let analyzer = VaderAnalyzer::new();
        assert!(analyzer.score("😍🔥🔥").unwrap() > 0.0);
        assert!(analyzer.score("😡👎").unwrap() < 0.0);
    }

    #[test]
    fn test_score_in_range() {
        let analyzer = VaderAnalyzer::new();
        let extreme = "amazing ".repeat(100) + &"😍".repeat(50);
        let score = analyzer.score(&extreme).unwrap();
        assert!((-1.0..=1.0).contains(&score));
        assert!(score > 0.9);
    }
}
