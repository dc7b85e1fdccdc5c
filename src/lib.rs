//! Social-Media Sentiment Pipeline
//!
//! Scores short social-media text items (captions/comments) for sentiment
//! and language, and aggregates results for visualization: normalization,
//! script-based language detection, optional translation, dual-model
//! ensemble scoring, word-frequency tables, and batch summaries.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod scoring;
pub mod source;
pub mod text;
pub mod translate;
pub mod types;
