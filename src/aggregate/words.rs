//! Word-frequency aggregation
//!
//! Tokenizes cleaned texts, filters stopwords and web noise, optionally
//! keeps emoji as standalone tokens, and ranks the survivors by count.
//! Deterministic for a deterministic input order: ties rank by first
//! appearance in the combined token stream.

use crate::text::normalize;
use crate::types::WordFrequencyTable;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// English function words plus common social-media shorthand.
static EN_STOPS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "else", "when", "while", "for", "with",
    "without", "to", "from", "is", "am", "are", "was", "were", "be", "been", "being", "has",
    "have", "had", "do", "does", "did", "of", "on", "in", "at", "by", "as", "it", "its", "it's",
    "this", "that", "these", "those", "there", "their", "they", "them", "you", "your", "yours",
    "me", "my", "mine", "we", "our", "ours", "i", "he", "she", "his", "her", "hers", "him", "us",
    "who", "whom", "which", "what", "so", "very", "too", "much", "more", "most", "many", "few",
    "some", "any", "each", "every", "also", "just", "really", "like", "can", "could", "should",
    "would", "will", "won't", "can't", "dont", "didnt", "isnt", "wasnt", "aint", "u", "ur", "im",
    "i'm", "tbh", "btw", "idk", "ngl", "fr", "bro", "pls", "lol", "lmao", "omg", "yh", "ya",
    "yeah", "no", "okay", "ok", "kinda", "sorta",
];

/// Hindi/Hinglish function words.
static HI_STOPS: &[&str] = &[
    "है", "थे", "थी", "हो", "हूँ", "हैं", "में", "के", "को", "का", "की", "से", "पर", "और", "यह",
    "वह", "एक", "बहुत", "था", "तो", "भी", "या", "जो", "क्यों", "कहाँ", "क्या", "आप", "हम", "तुम",
    "मेरे", "मेरा", "मेरी", "आपका", "हमारा", "यहाँ", "वहाँ", "कभी", "सभी", "कुछ", "किसी", "कई",
    "कम", "ज्यादा", "जैसे",
];

/// Web artifacts that survive URL stripping.
static NOISE: &[&str] = &["https", "http", "www", "com", "amp", "rt", "via", "re", "ve"];

static BUILTIN_STOPS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    EN_STOPS
        .iter()
        .chain(HI_STOPS.iter())
        .chain(NOISE.iter())
        .copied()
        .collect()
});

/// Emoji block used for token extraction (U+1F300..=U+1FAFF).
fn is_emoji(c: char) -> bool {
    ('\u{1F300}'..='\u{1FAFF}').contains(&c)
}

/// Token characters after lowercasing: ASCII letters or Devanagari.
fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Build a ranked word-frequency table over `texts`.
///
/// Each text is stripped of URL/mention markup first, so raw and already
/// cleaned text both work. Tokens that are empty, two characters or
/// shorter, or in the combined stopword set are dropped; emoji tokens (if
/// kept) bypass those filters. Returns at most `limit` entries.
pub fn top_words<'a, I>(
    texts: I,
    extra_stops: &[&str],
    limit: usize,
    keep_emojis: bool,
) -> WordFrequencyTable
where
    I: IntoIterator<Item = &'a str>,
{
    let extra: HashSet<&str> = extra_stops.iter().copied().collect();

    // token -> (count, first position in the combined stream)
    let mut counts: HashMap<String, (u64, usize)> = HashMap::new();
    let mut position = 0usize;

    let mut bump = |token: String| {
        let entry = counts.entry(token).or_insert((0, position));
        entry.0 += 1;
        position += 1;
    };

    for text in texts {
        let mut s = normalize(text);

        if keep_emojis {
            for c in s.chars().filter(|c| is_emoji(*c)) {
                bump(c.to_string());
            }
            s = s.chars().filter(|c| !is_emoji(*c)).collect();
        }

        let lower = s.to_lowercase();
        for raw in lower.split(|c| !is_token_char(c)) {
            if raw.is_empty() || raw.chars().count() <= 2 {
                continue;
            }
            if BUILTIN_STOPS.contains(raw) || extra.contains(raw) {
                continue;
            }
            bump(raw.to_string());
        }
    }

    let mut ranked: Vec<(String, u64, usize)> = counts
        .into_iter()
        .map(|(token, (count, first))| (token, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(limit);

    WordFrequencyTable {
        entries: ranked.into_iter().map(|(t, c, _)| (t, c)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_love_example() {
        let texts = ["I love this so much!!", "love love love"];
        let table = top_words(texts, &[], 5, false);

        assert_eq!(table.entries, vec![("love".to_string(), 4)]);
    }

    #[test]
    fn test_short_and_stop_tokens_dropped() {
        let table = top_words(["it is ok to be me", "an ox"], &[], 10, false);
        assert!(table.is_empty());
    }

    #[test]
    fn test_extra_stops() {
        let without = top_words(["pasta pasta pizza"], &[], 10, false);
        assert_eq!(without.count("pasta"), Some(2));

        let with = top_words(["pasta pasta pizza"], &["pasta"], 10, false);
        assert_eq!(with.count("pasta"), None);
        assert_eq!(with.count("pizza"), Some(1));
    }

    #[test]
    fn test_limit_and_ranking() {
        let table = top_words(
            ["beach beach beach sunset sunset waves"],
            &[],
            2,
            false,
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries[0], ("beach".to_string(), 3));
        assert_eq!(table.entries[1], ("sunset".to_string(), 2));
    }

    #[test]
    fn test_tie_broken_by_first_appearance() {
        let table = top_words(["alpha beta", "beta alpha"], &[], 10, false);
        assert_eq!(table.entries[0].0, "alpha");
        assert_eq!(table.entries[1].0, "beta");
    }

    #[test]
    fn test_emoji_retention() {
        let texts = ["mast reel 🔥🔥", "solid drop 🔥"];
        let with = top_words(texts, &[], 10, true);
        assert_eq!(with.count("🔥"), Some(3));

        let without = top_words(texts, &[], 10, false);
        assert_eq!(without.count("🔥"), None);
    }

    #[test]
    fn test_urls_and_mentions_stripped() {
        let table = top_words(
            ["watch https://example.com/clip now @friend watch"],
            &[],
            10,
            false,
        );
        assert_eq!(table.count("watch"), Some(2));
        assert_eq!(table.count("friend"), None);
        assert_eq!(table.count("example"), None);
    }

    #[test]
    fn test_devanagari_tokens_kept() {
        let table = top_words(["खाना बहुत स्वादिष्ट खाना"], &[], 10, false);
        assert_eq!(table.count("खाना"), Some(2));
        assert_eq!(table.count("स्वादिष्ट"), Some(1));
        // "बहुत" is a built-in Hindi stopword
        assert_eq!(table.count("बहुत"), None);
    }

    #[test]
    fn test_mixed_script_words_split() {
        // A digit splits tokens, so "top10" yields only "top" (len 3)
        let table = top_words(["top10 top10 top10"], &[], 10, false);
        assert_eq!(table.count("top"), Some(3));
    }

    #[test]
    fn test_deterministic() {
        let texts = ["sunset beach waves", "beach sunset", "waves waves"];
        let a = top_words(texts, &[], 10, false);
        let b = top_words(texts, &[], 10, false);
        assert_eq!(a.entries, b.entries);
    }
}
