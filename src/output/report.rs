//! Report envelopes wrapping engine output for rendering

use crate::models::{JobAnalysis, JobMatch};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ranked matching run, ready for rendering.
///
/// The envelope (timestamp, counts) is assembled by the caller; the engine
/// output inside stays untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub generated_at: DateTime<Utc>,
    pub total_postings: usize,
    pub min_match_score: f64,
    pub matches: Vec<JobMatch>,
}

impl MatchReport {
    pub fn new(matches: Vec<JobMatch>, total_postings: usize, min_match_score: f64) -> Self {
        Self {
            generated_at: Utc::now(),
            total_postings,
            min_match_score,
            matches,
        }
    }

    /// True when any match came from the degraded fallback path.
    pub fn is_degraded(&self) -> bool {
        self.matches.iter().any(|m| m.degraded)
    }
}

/// A single-posting analysis, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub analysis: JobAnalysis,
}

impl AnalysisReport {
    pub fn new(analysis: JobAnalysis) -> Self {
        Self {
            generated_at: Utc::now(),
            analysis,
        }
    }
}
