//! Job-profile matching: scoring engine and supporting heuristics

pub mod analyzer;
pub mod engine;
pub mod extract;
pub mod scorers;
pub mod tables;
pub mod text;
pub mod tfidf;

pub use analyzer::analyze_job;
pub use engine::MatchEngine;
