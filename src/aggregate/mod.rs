//! Aggregation over scored batches: word-frequency tables and summaries

pub mod summary;
pub mod words;

pub use summary::build_summary;
pub use words::top_words;
