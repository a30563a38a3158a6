//! Heuristic sub-scorers
//!
//! Pure functions over (profile feature, posting requirement) returning
//! values from a fixed small set of constants. The step breakpoints are part
//! of the engine's contract and are enumerated exhaustively in the tests.

use crate::matching::extract::required_years;
use crate::matching::tables::{categories_related, degree_level, role_category};
use std::collections::BTreeSet;

/// Recall of the job's skill list against the user's skills.
///
/// An empty job skill set means no requirement and scores 1.0. The measure is
/// deliberately asymmetric: extra user skills never penalize, missing
/// required skills do.
pub fn skill_match(user_skills: &BTreeSet<String>, job_skills: &BTreeSet<String>) -> f64 {
    if job_skills.is_empty() {
        return 1.0;
    }

    let matching = user_skills.intersection(job_skills).count();
    matching as f64 / job_skills.len() as f64
}

/// Step function over user years vs the first "<N> year(s)" number in the
/// requirement text. Breakpoints are inclusive on the >= side.
pub fn experience_match(user_years: f64, requirement: &str) -> f64 {
    if requirement.is_empty() {
        return 1.0;
    }

    let required = match required_years(requirement) {
        Some(0) | None => return 1.0,
        Some(years) => years as f64,
    };

    if user_years >= required {
        1.0
    } else if user_years >= required * 0.7 {
        0.8
    } else if user_years >= required * 0.5 {
        0.6
    } else {
        0.4
    }
}

/// Ordinal comparison of degree levels found by substring lookup.
///
/// A requirement with no recognizable degree word scores 1.0. An unknown user
/// level (no degree word in the profile) scores 0.4 once a requirement
/// parses.
pub fn education_match(user_highest_degree: Option<&str>, requirement: &str) -> f64 {
    if requirement.is_empty() {
        return 1.0;
    }

    let required_level = degree_level(requirement);
    if required_level == 0 {
        return 1.0;
    }

    let user_level = user_highest_degree.map(degree_level).unwrap_or(0);
    if user_level == 0 {
        return 0.4;
    }

    match required_level.saturating_sub(user_level) {
        0 => 1.0,
        1 => 0.8,
        2 => 0.6,
        _ => 0.4,
    }
}

/// Role-category comparison between the user's current title and the job
/// title, with a token-overlap fallback when either title defies
/// categorization.
pub fn title_match(user_title: &str, job_title: &str) -> f64 {
    if user_title.is_empty() || job_title.is_empty() {
        return 0.7;
    }

    let user_title = user_title.to_lowercase();
    let job_title = job_title.to_lowercase();

    let user_category = role_category(&user_title);
    let job_category = role_category(&job_title);

    match (user_category, job_category) {
        (Some(user), Some(job)) if user == job => 1.0,
        (Some(user), Some(job)) => {
            if categories_related(user, job) {
                0.8
            } else {
                0.6
            }
        }
        _ => {
            let user_words: BTreeSet<&str> = user_title.split_whitespace().collect();
            let job_words: BTreeSet<&str> = job_title.split_whitespace().collect();
            if user_words.intersection(&job_words).next().is_some() {
                0.7
            } else {
                0.5
            }
        }
    }
}

/// Human-readable explanation of the experience comparison.
pub fn experience_analysis(user_years: f64, requirement: &str) -> String {
    if requirement.is_empty() {
        return "No specific experience requirement mentioned.".to_string();
    }

    let required = match required_years(requirement) {
        Some(0) | None => return "No specific years of experience required.".to_string(),
        Some(years) => years,
    };

    let user = format_years(user_years);
    if user_years >= required as f64 {
        format!(
            "You meet the experience requirement of {} years with your {} years of experience.",
            required, user
        )
    } else {
        let gap = format_years(required as f64 - user_years);
        format!(
            "You have {} years of experience, which is {} years less than the required {} years.",
            user, gap, required
        )
    }
}

/// Human-readable explanation of the education comparison.
pub fn education_analysis(user_highest_degree: Option<&str>, requirement: &str) -> String {
    if requirement.is_empty() {
        return "No specific education requirement mentioned.".to_string();
    }

    let degree = match user_highest_degree {
        Some(degree) if !degree.is_empty() => degree,
        _ => return "Your education information is not available for comparison.".to_string(),
    };

    if requirement.to_lowercase().contains(&degree.to_lowercase()) {
        format!("Your {} degree matches the job requirement.", degree)
    } else {
        format!(
            "The job requires {}, and your highest degree is {}.",
            requirement, degree
        )
    }
}

/// Human-readable explanation of the title comparison.
pub fn title_relevance(user_title: &str, job_title: &str) -> String {
    if user_title.is_empty() {
        return "Your current title is not available for comparison.".to_string();
    }
    if job_title.is_empty() {
        return "Job title is not available for comparison.".to_string();
    }

    let user = user_title.to_lowercase();
    let job = job_title.to_lowercase();

    if user == job {
        return format!("Your current title '{}' exactly matches the job title.", user);
    }

    let user_words: BTreeSet<&str> = user.split_whitespace().collect();
    let job_words: BTreeSet<&str> = job.split_whitespace().collect();

    if user_words.intersection(&job_words).next().is_some() {
        format!(
            "Your current title '{}' shares some keywords with the job title '{}'.",
            user, job
        )
    } else {
        format!(
            "Your current title '{}' is different from the job title '{}'.",
            user, job
        )
    }
}

fn format_years(years: f64) -> String {
    if (years - years.round()).abs() < 1e-9 {
        format!("{}", years as i64)
    } else {
        format!("{:.1}", years)
    }
}
