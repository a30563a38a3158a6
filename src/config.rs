//! Configuration management for the job matcher

use crate::error::{JobMatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub vectorizer: VectorizerConfig,
    pub output: OutputConfig,
}

/// Weights and thresholds for the match score aggregation.
///
/// The four component weights must sum to 1.0. `text_similarity_weight` is
/// applied additively on top of the weighted components, so the nominal
/// maximum score before penalties is 1.0 + `text_similarity_weight` (1.2 by
/// default). This matches the behavior callers filter against and is kept
/// deliberately; do not renormalize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub skill_weight: f64,
    pub experience_weight: f64,
    pub education_weight: f64,
    pub title_weight: f64,
    pub text_similarity_weight: f64,
    pub min_match_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Maximum vocabulary size, kept by corpus frequency
    pub max_features: usize,
    /// Smallest n-gram length (1 = unigrams)
    pub ngram_min: usize,
    /// Largest n-gram length (2 = bigrams)
    pub ngram_max: usize,
    /// Drop English stop words before building the vocabulary
    pub remove_stop_words: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                skill_weight: 0.5,
                experience_weight: 0.3,
                education_weight: 0.1,
                title_weight: 0.1,
                text_similarity_weight: 0.2,
                min_match_score: 0.6,
            },
            vectorizer: VectorizerConfig {
                max_features: 10_000,
                ngram_min: 1,
                ngram_max: 2,
                remove_stop_words: true,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &PathBuf) -> Result<Self> {
        let config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            toml::from_str(&content).map_err(|e| {
                JobMatcherError::Configuration(format!("Failed to parse config: {}", e))
            })?
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            config
        };

        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &PathBuf) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            JobMatcherError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("job-matcher")
            .join("config.toml")
    }

    /// Reject invalid weight configurations before any batch is processed.
    pub fn validate(&self) -> Result<()> {
        let s = &self.scoring;
        let weights = [
            ("skill_weight", s.skill_weight),
            ("experience_weight", s.experience_weight),
            ("education_weight", s.education_weight),
            ("title_weight", s.title_weight),
            ("text_similarity_weight", s.text_similarity_weight),
        ];

        for (name, value) in weights {
            if value < 0.0 {
                return Err(JobMatcherError::Configuration(format!(
                    "{} must not be negative (got {})",
                    name, value
                )));
            }
        }

        let component_sum =
            s.skill_weight + s.experience_weight + s.education_weight + s.title_weight;
        if (component_sum - 1.0).abs() > 1e-6 {
            return Err(JobMatcherError::Configuration(format!(
                "component weights must sum to 1.0 (got {})",
                component_sum
            )));
        }

        if s.min_match_score < 0.0 {
            return Err(JobMatcherError::Configuration(format!(
                "min_match_score must not be negative (got {})",
                s.min_match_score
            )));
        }

        if self.vectorizer.ngram_min == 0 || self.vectorizer.ngram_min > self.vectorizer.ngram_max {
            return Err(JobMatcherError::Configuration(format!(
                "invalid ngram range ({}, {})",
                self.vectorizer.ngram_min, self.vectorizer.ngram_max
            )));
        }

        if self.vectorizer.max_features == 0 {
            return Err(JobMatcherError::Configuration(
                "max_features must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scoring.min_match_score, 0.6);
        assert_eq!(config.scoring.text_similarity_weight, 0.2);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut config = Config::default();
        config.scoring.skill_weight = -0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_component_weights_must_sum_to_one() {
        let mut config = Config::default();
        config.scoring.skill_weight = 0.9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_ngram_range_rejected() {
        let mut config = Config::default();
        config.vectorizer.ngram_min = 3;
        config.vectorizer.ngram_max = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.scoring.min_match_score = 0.4;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.scoring.min_match_score, 0.4);
        assert_eq!(loaded.vectorizer.max_features, 10_000);
    }

    #[test]
    fn test_load_writes_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.scoring.skill_weight, 0.5);
    }
}
