//! The match engine: batch scoring of postings against one profile

use crate::config::Config;
use crate::error::Result;
use crate::matching::extract::{
    extract_skills, highest_degree, total_experience_years,
};
use crate::matching::scorers::{
    education_analysis, education_match, experience_analysis, experience_match, skill_match,
    title_match, title_relevance,
};
use crate::matching::text::{posting_text, profile_text};
use crate::matching::tfidf::{cosine_similarity, TfidfVectorizer};
use crate::models::{JobMatch, JobPosting, MatchDetails, Profile};
use log::{debug, info, warn};
use std::collections::BTreeSet;

const FALLBACK_ANALYSIS: &str = "Fallback matching used";

/// Scores a user profile against a batch of job postings and returns a
/// ranked, threshold-filtered list of matches with explainable sub-scores.
///
/// The engine is stateless per call: it never mutates its inputs, performs no
/// I/O, and holds nothing across calls beyond the validated configuration.
pub struct MatchEngine {
    config: Config,
}

impl MatchEngine {
    /// Create an engine with an eagerly validated configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Match a profile against a batch of postings.
    ///
    /// Returns matches sorted by `match_score` descending, filtered to scores
    /// at or above `min_match_score`. Ties keep input order via stable sort;
    /// that order is not meaningful and not a contract. Empty input and
    /// nothing-above-threshold both yield an empty vec, never an error. When
    /// joint vectorization fails (degenerate corpus) the whole batch is
    /// scored by the degraded fallback path instead.
    pub fn match_jobs(&self, profile: &Profile, postings: &[JobPosting]) -> Vec<JobMatch> {
        if postings.is_empty() {
            warn!("no job postings provided for matching");
            return Vec::new();
        }

        let mut texts = Vec::with_capacity(postings.len() + 1);
        texts.push(profile_text(profile));
        texts.extend(postings.iter().map(posting_text));

        let vectorizer = TfidfVectorizer::new(&self.config.vectorizer);
        let vectors = match vectorizer.fit_transform(&texts) {
            Ok(vectors) => vectors,
            Err(e) => {
                warn!("vectorization failed, using fallback matching: {}", e);
                return self.fallback_matches(profile, postings);
            }
        };

        let user_skills = extract_skills(&profile.skills, "");
        let user_years = total_experience_years(profile);
        let user_degree = highest_degree(profile);
        let scoring = &self.config.scoring;

        let mut matches: Vec<JobMatch> = postings
            .iter()
            .enumerate()
            .map(|(index, posting)| {
                let text_similarity = cosine_similarity(&vectors[0], &vectors[index + 1]);
                let job_skills = extract_skills(&posting.skills, &posting.description);

                let skill = skill_match(&user_skills, &job_skills);
                let experience = experience_match(user_years, &posting.experience_required);
                let education =
                    education_match(user_degree.as_deref(), &posting.education_required);
                let title = title_match(&profile.current_title, &posting.title);

                // Weighted components plus the additive text-similarity term;
                // the nominal pre-penalty ceiling is 1.0 + text weight
                let mut match_score = scoring.skill_weight * skill
                    + scoring.experience_weight * experience
                    + scoring.education_weight * education
                    + scoring.title_weight * title
                    + scoring.text_similarity_weight * text_similarity;

                if profile.requires_h1b_sponsorship && !posting.offers_visa_sponsorship {
                    match_score *= 0.5;
                }
                if profile.prefers_full_time && !posting.job_type.eq_ignore_ascii_case("full-time")
                {
                    match_score *= 0.7;
                }

                debug!(
                    "job {}: skill={:.2} experience={:.2} education={:.2} title={:.2} text={:.2} -> {:.2}",
                    posting.id, skill, experience, education, title, text_similarity, match_score
                );

                JobMatch {
                    job_id: posting.id.clone(),
                    match_score: round2(match_score),
                    skill_match: round2(skill),
                    experience_match: round2(experience),
                    education_match: round2(education),
                    title_match: round2(title),
                    text_similarity: round2(text_similarity),
                    degraded: false,
                    details: MatchDetails {
                        matching_skills: intersection(&user_skills, &job_skills),
                        missing_skills: difference(&job_skills, &user_skills),
                        experience_analysis: experience_analysis(
                            user_years,
                            &posting.experience_required,
                        ),
                        education_analysis: education_analysis(
                            user_degree.as_deref(),
                            &posting.education_required,
                        ),
                        title_relevance: title_relevance(&profile.current_title, &posting.title),
                    },
                }
            })
            .collect();

        self.filter_and_rank(&mut matches);
        info!(
            "matched {} of {} jobs with scores at or above {}",
            matches.len(),
            postings.len(),
            self.config.scoring.min_match_score
        );
        matches
    }

    /// Degraded matching used when vectorization cannot be computed.
    ///
    /// Only the skill score is computed and used directly as `match_score`;
    /// the remaining sub-scores are fixed at 0.5 and text similarity at 0.0,
    /// with the `degraded` flag set so callers can detect the lower fidelity.
    fn fallback_matches(&self, profile: &Profile, postings: &[JobPosting]) -> Vec<JobMatch> {
        let user_skills = extract_skills(&profile.skills, "");

        let mut matches: Vec<JobMatch> = postings
            .iter()
            .map(|posting| {
                let job_skills = extract_skills(&posting.skills, &posting.description);
                let skill = skill_match(&user_skills, &job_skills);

                JobMatch {
                    job_id: posting.id.clone(),
                    match_score: round2(skill),
                    skill_match: round2(skill),
                    experience_match: 0.5,
                    education_match: 0.5,
                    title_match: 0.5,
                    text_similarity: 0.0,
                    degraded: true,
                    details: MatchDetails {
                        matching_skills: intersection(&user_skills, &job_skills),
                        missing_skills: difference(&job_skills, &user_skills),
                        experience_analysis: FALLBACK_ANALYSIS.to_string(),
                        education_analysis: FALLBACK_ANALYSIS.to_string(),
                        title_relevance: FALLBACK_ANALYSIS.to_string(),
                    },
                }
            })
            .collect();

        self.filter_and_rank(&mut matches);
        info!("fallback matching used: matched {} jobs", matches.len());
        matches
    }

    fn filter_and_rank(&self, matches: &mut Vec<JobMatch>) {
        matches.retain(|m| m.match_score >= self.config.scoring.min_match_score);
        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
}

fn intersection(user: &BTreeSet<String>, job: &BTreeSet<String>) -> Vec<String> {
    user.intersection(job).cloned().collect()
}

fn difference(job: &BTreeSet<String>, user: &BTreeSet<String>) -> Vec<String> {
    job.difference(user).cloned().collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
