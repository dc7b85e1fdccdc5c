//! Item sourcing
//!
//! Produces `Item` sequences for the pipeline from three inputs: curated
//! hashtag samples (expanded with synthetic comments), post URLs, and
//! pasted comment lines. The pipeline itself has no knowledge of where
//! items came from.
//!
//! URL-sourced captions use a deterministic hash-based placeholder; a real
//! post fetch would replace only `caption_for_shortcode` behind the same
//! `collect_from_urls` contract.

use crate::types::Item;
use chrono::{Duration, Utc};
use once_cell::sync::Lazy;
use rand::prelude::*;
use regex::Regex;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Accepts www., m., or no subdomain; /p/, /reel/ or /tv/ paths; a
/// shortcode of 5+ chars; optional extra path or query.
static SHORTCODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:https?://)?(?:www\.|m\.)?instagram\.com/(?:p|reel|tv)/([A-Za-z0-9_-]{5,})(?:[/?].*)?$")
        .unwrap()
});

const MIN_COMMENTS_PER_POST: usize = 40;
const MAX_COMMENTS_PER_POST: usize = 120;

const POS_PHRASES: &[&str] = &[
    "love this", "amazing", "awesome", "so good", "fantastic", "beautiful", "lit", "fire",
    "mast", "bahut badhiya",
];
const NEG_PHRASES: &[&str] = &[
    "not good", "terrible", "bad", "disappointing", "overrated", "waste", "boring", "meh",
    "pasand nahi aaya", "bakwaas",
];
const NEU_PHRASES: &[&str] = &[
    "okay", "fine", "decent", "interesting", "nice", "theek hai", "cool", "hm", "fair", "works",
];

const EMOJIS_POS: &[&str] = &["😍", "🔥", "✨", "🥰", "👏", "💯", "🙌"];
const EMOJIS_NEG: &[&str] = &["😞", "😒", "😡", "👎", "🤦", "🥲"];
const EMOJIS_NEU: &[&str] = &["🙂", "🤔", "😐", "🫡"];

const FILLERS: &[&str] = &["yrr", "btw", "lol", "fr", "tbh", "ik", "bro", "pls", "na", "ngl"];
const INTENSIFIERS: &[&str] = &[
    "really", "truly", "seriously", "kinda", "pretty", "very", "bahut", "zyada",
];

/// Per-hashtag caption samples (English/Hindi/Hinglish mix).
static SAMPLE: &[(&str, &[&str])] = &[
    (
        "food",
        &[
            "यह restaurant का खाना बहुत स्वादिष्ट है! 😋 Highly recommended!",
            "Amazing pasta at this Italian place! Worth every penny 🍝",
            "Disappointed with the service. Food was cold when served 😞",
            "मुझे यह pizza बिल्कुल पसंद नहीं आया। Very expensive for the quality.",
            "Best biryani in the city! आज तक का सबसे अच्छा खाना! 🍛",
            "Fresh ingredients, authentic taste. Loved the experience! 👌",
        ],
    ),
    (
        "travel",
        &[
            "Incredible sunset at Marina Bay! 🌅",
            "गोवा के beaches पर amazing time बिताया! 🏖️",
            "Flight delayed by 3 hours. Terrible start 😤",
            "Manali का weather बहुत सुंदर है! 🏔️",
            "Hotel was dirty and overpriced. Worst travel experience.",
            "Kerala backwaters are breathtaking! Must visit 🛶",
        ],
    ),
    (
        "movie",
        &[
            "Just watched the new film — absolutely fantastic! 🎬",
            "यह movie बहुत अच्छी थी, acting कमाल की!",
            "Predictable plot and weak dialogues, disappointed.",
            "Soundtrack was amazing and elevated the film 🎵",
            "Lengthy but worth it for the climax.",
        ],
    ),
    (
        "technology",
        &[
            "Battery life is insane — easily 2 days! 🔋",
            "Heating issue after long gaming sessions.",
            "Camera is crisp even in low light.",
            "UI feels smooth and responsive.",
            "Price is a bit too high for specs.",
        ],
    ),
    (
        "sports",
        &[
            "What a clutch performance! 🏆",
            "Defense was asleep today fr.",
            "Captain leading from the front — respect.",
            "Ref decisions were questionable ngl.",
            "Team chemistry looking better each game.",
        ],
    ),
    (
        "fitness",
        &[
            "PR day — felt unstoppable today! 💪",
            "Recovery matters more than people think.",
            "Knees felt weird on squats, deload time.",
            "Great pump with simple movements.",
            "Form > ego lifting always.",
        ],
    ),
];

/// Sourcing collaborator: hashtag samples, post URLs, pasted comments.
pub struct SampleCollector;

impl SampleCollector {
    pub fn new() -> Self {
        Self
    }

    pub fn available_hashtags(&self) -> Vec<&'static str> {
        SAMPLE.iter().map(|(tag, _)| *tag).collect()
    }

    /// Up to `max_posts` captions for a hashtag (samples looped as needed)
    /// plus synthetic comments per caption.
    pub fn collect_hashtag(
        &self,
        hashtag: &str,
        max_posts: usize,
        include_comments: bool,
    ) -> (Vec<Item>, Vec<Item>) {
        let lower = hashtag.to_lowercase();
        let texts: &[&str] = SAMPLE
            .iter()
            .find(|(tag, _)| *tag == lower)
            .map(|(_, texts)| *texts)
            .unwrap_or(&["No sample text available."]);

        let mut rng = rand::rng();
        let now = Utc::now();

        let mut posts = Vec::with_capacity(max_posts);
        for i in 0..max_posts {
            let text = texts[i % texts.len()];
            let post_id = format!("{}_{:04}", lower, i + 1);
            posts.push(
                Item::new(text, now - Duration::hours(rng.random_range(1..=72)))
                    .with_field("post_id", post_id)
                    .with_field("hashtag", lower.clone())
                    .with_field("author_username", format!("user_{}", rng.random_range(1000..10000)))
                    .with_field("likes_count", rng.random_range(0..=1000))
                    .with_field("type", "caption"),
            );
        }

        let comments = if include_comments {
            posts
                .iter()
                .flat_map(|p| {
                    let post_id = p.extra["post_id"].as_str().unwrap_or_default().to_string();
                    self.synthetic_comments(&post_id, &lower)
                })
                .collect()
        } else {
            Vec::new()
        };

        (posts, comments)
    }

    /// Posts (and comments) for a list of post URLs. URLs without a valid
    /// shortcode are skipped.
    pub fn collect_from_urls(
        &self,
        urls: &[String],
        include_comments: bool,
    ) -> (Vec<Item>, Vec<Item>) {
        let mut rng = rand::rng();
        let now = Utc::now();
        let mut posts = Vec::new();
        let mut comments = Vec::new();

        for url in urls {
            let Some(code) = extract_shortcode(url) else {
                continue;
            };
            let post_id = format!("url_{code}");
            posts.push(
                Item::new(
                    caption_for_shortcode(&code),
                    now - Duration::hours(rng.random_range(1..=72)),
                )
                .with_field("post_id", post_id.clone())
                .with_field("hashtag", "url_mode")
                .with_field("author_username", format!("user_{}", rng.random_range(1000..10000)))
                .with_field("likes_count", rng.random_range(0..=5000))
                .with_field("type", "caption")
                .with_field("source_url", url.trim()),
            );

            if include_comments {
                comments.extend(self.synthetic_comments(&post_id, "url_mode"));
            }
        }

        (posts, comments)
    }

    /// One comment item per non-blank pasted line.
    pub fn from_pasted_lines(&self, lines: &[String]) -> Vec<Item> {
        let mut rng = rand::rng();
        let now = Utc::now();

        lines
            .iter()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(i, line)| {
                Item::new(
                    line.trim(),
                    now - Duration::minutes(rng.random_range(1..=60 * 24)),
                )
                .with_field("post_id", format!("pasted_{}", i / 200))
                .with_field("comment_id", format!("p_{:05}", i + 1))
                .with_field("hashtag", "pasted")
                .with_field("author_username", format!("u_{}", 1000 + i))
                .with_field("likes_count", rng.random_range(0..=30))
                .with_field("type", "comment")
            })
            .collect()
    }

    fn synthetic_comments(&self, post_id: &str, hashtag: &str) -> Vec<Item> {
        let mut rng = rand::rng();
        let now = Utc::now();
        let count = rng.random_range(MIN_COMMENTS_PER_POST..=MAX_COMMENTS_PER_POST);

        (0..count)
            .map(|i| {
                Item::new(
                    random_comment_text(&mut rng),
                    now - Duration::minutes(rng.random_range(1..=60 * 24)),
                )
                .with_field("post_id", post_id)
                .with_field("comment_id", format!("{}_c{:04}", post_id, i + 1))
                .with_field("hashtag", hashtag)
                .with_field("author_username", format!("cuser_{}", rng.random_range(100..1000)))
                .with_field("likes_count", rng.random_range(0..=60))
                .with_field("type", "comment")
            })
            .collect()
    }
}

impl Default for SampleCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the post shortcode from a URL, unwrapping `l.instagram.com`
/// redirect links first. Returns `None` for anything unrecognized.
pub fn extract_shortcode(url: &str) -> Option<String> {
    let mut u = url.trim().to_string();

    if u.contains("l.instagram.com") && u.contains("u=") {
        if let Ok(parsed) = reqwest::Url::parse(&u) {
            if let Some((_, real)) = parsed.query_pairs().find(|(k, _)| k == "u") {
                if !real.is_empty() {
                    u = real.into_owned();
                }
            }
        }
    }

    SHORTCODE_RE
        .captures(&u)
        .map(|caps| caps[1].to_string())
}

/// Deterministic placeholder caption. Swap for a real fetch when post
/// access is available.
fn caption_for_shortcode(shortcode: &str) -> &'static str {
    const CAPTIONS: &[&str] = &[
        "Beautiful day at the beach! 🌊☀️",
        "यह dish लाजवाब है — must try! 😋",
        "Long day but grateful for these small wins 🙏",
        "New setup is clean and minimal. Thoughts?",
        "Mixed feelings about this update, क्या सोचते हो?",
        "Sunset view never disappoints 🌅",
    ];

    let mut hasher = DefaultHasher::new();
    shortcode.hash(&mut hasher);
    CAPTIONS[(hasher.finish() % CAPTIONS.len() as u64) as usize]
}

fn random_comment_text(rng: &mut impl Rng) -> String {
    let r: f64 = rng.random();
    let (phrases, emojis, emoji_p) = if r < 0.4 {
        (POS_PHRASES, EMOJIS_POS, 0.9)
    } else if r < 0.7 {
        (NEU_PHRASES, EMOJIS_NEU, 0.7)
    } else {
        (NEG_PHRASES, EMOJIS_NEG, 0.9)
    };

    let base = *phrases.choose(rng).unwrap();

    let mut parts: Vec<&str> = Vec::new();
    if rng.random_bool(0.3) {
        parts.push(*FILLERS.choose(rng).unwrap());
    }
    if rng.random_bool(0.35) {
        parts.push(*INTENSIFIERS.choose(rng).unwrap());
    }
    parts.push(base);
    if rng.random_bool(0.6) && rng.random_bool(emoji_p) {
        parts.push(*emojis.choose(rng).unwrap());
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcode_plain_forms() {
        assert_eq!(
            extract_shortcode("https://www.instagram.com/p/Cabc123_-x/"),
            Some("Cabc123_-x".to_string())
        );
        assert_eq!(
            extract_shortcode("https://m.instagram.com/reel/XYZ98765/?utm_source=share"),
            Some("XYZ98765".to_string())
        );
        assert_eq!(
            extract_shortcode("instagram.com/tv/AbCdE"),
            Some("AbCdE".to_string())
        );
    }

    #[test]
    fn test_shortcode_rejects_garbage() {
        assert_eq!(extract_shortcode("https://example.com/p/AbCdE/"), None);
        assert_eq!(extract_shortcode("https://www.instagram.com/p/abc/"), None); // too short
        assert_eq!(extract_shortcode("not a url"), None);
    }

    #[test]
    fn test_shortcode_unwraps_redirect() {
        let wrapped =
            "https://l.instagram.com/?u=https%3A%2F%2Fwww.instagram.com%2Fp%2FCxyz9876%2F";
        assert_eq!(extract_shortcode(wrapped), Some("Cxyz9876".to_string()));
    }

    #[test]
    fn test_hashtag_expansion_loops_samples() {
        let collector = SampleCollector::new();
        let (posts, _) = collector.collect_hashtag("food", 20, false);
        assert_eq!(posts.len(), 20);
        assert_eq!(posts[0].extra["type"], "caption");
        assert_eq!(posts[0].extra["hashtag"], "food");
        // Samples loop: post 0 and post 6 share a caption (6 samples)
        assert_eq!(posts[0].text, posts[6].text);
    }

    #[test]
    fn test_unknown_hashtag_falls_back() {
        let collector = SampleCollector::new();
        let (posts, _) = collector.collect_hashtag("nosuchtag", 3, false);
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].text, "No sample text available.");
    }

    #[test]
    fn test_comments_generated_per_post() {
        let collector = SampleCollector::new();
        let (posts, comments) = collector.collect_hashtag("travel", 2, true);
        assert_eq!(posts.len(), 2);
        assert!(comments.len() >= 2 * MIN_COMMENTS_PER_POST);
        assert!(comments.len() <= 2 * MAX_COMMENTS_PER_POST);
        assert_eq!(comments[0].extra["type"], "comment");
        assert!(!comments[0].text.is_empty());
    }

    #[test]
    fn test_collect_from_urls_skips_invalid() {
        let collector = SampleCollector::new();
        let urls = vec![
            "https://www.instagram.com/p/Cabc123_-x/".to_string(),
            "https://example.com/nothing".to_string(),
        ];
        let (posts, _) = collector.collect_from_urls(&urls, false);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].extra["post_id"], "url_Cabc123_-x");
        assert_eq!(posts[0].extra["source_url"], urls[0].as_str());
    }

    #[test]
    fn test_url_caption_is_deterministic() {
        assert_eq!(caption_for_shortcode("AbCdE"), caption_for_shortcode("AbCdE"));
    }

    #[test]
    fn test_pasted_lines_skip_blanks() {
        let collector = SampleCollector::new();
        let lines = vec![
            "Kya mast reel hai yrr! 🔥".to_string(),
            "   ".to_string(),
            "Not impressed tbh".to_string(),
        ];
        let comments = collector.from_pasted_lines(&lines);
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text, "Kya mast reel hai yrr! 🔥");
        assert_eq!(comments[1].extra["type"], "comment");
    }

    #[test]
    fn test_available_hashtags() {
        let collector = SampleCollector::new();
        let tags = collector.available_hashtags();
        assert!(tags.contains(&"food"));
        assert!(tags.contains(&"travel"));
    }
}
