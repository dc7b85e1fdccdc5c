//! Text preparation: normalization and language detection

pub mod language;
pub mod normalize;

pub use language::detect_language;
pub use normalize::normalize;
