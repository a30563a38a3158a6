//! Lenient feature extractors for profiles and postings
//!
//! Missing or malformed fields always mean "no information" and produce a
//! neutral result; nothing in here can fail a matching batch.

use crate::matching::tables::{degree_level, SKILL_KEYWORDS};
use crate::models::{DurationField, EducationField, ExperienceField, Profile};
use aho_corasick::AhoCorasick;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Case-insensitive dictionary matcher over the fixed skill keywords.
fn skill_matcher() -> &'static AhoCorasick {
    static MATCHER: OnceLock<AhoCorasick> = OnceLock::new();
    MATCHER.get_or_init(|| {
        AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(SKILL_KEYWORDS)
            .expect("skill keyword matcher must build")
    })
}

/// Pattern for "<N> year(s)" style requirement text.
fn years_regex() -> &'static Regex {
    static YEARS: OnceLock<Regex> = OnceLock::new();
    YEARS.get_or_init(|| Regex::new(r"(\d+)[\s-]*year").expect("years regex must compile"))
}

fn number_regex() -> &'static Regex {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    NUMBER.get_or_init(|| Regex::new(r"(\d+(?:\.\d+)?)").expect("number regex must compile"))
}

/// Skills from a declared list plus dictionary hits in free text.
///
/// Declared entries are taken as-is (lowercased, trimmed); the description is
/// scanned for dictionary keywords by substring, matching the original
/// pipeline's extraction. The result is a sorted set so downstream output is
/// deterministic.
pub fn extract_skills(declared: &[String], description: &str) -> BTreeSet<String> {
    let mut skills: BTreeSet<String> = declared
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .collect();

    if !description.is_empty() {
        for mat in skill_matcher().find_iter(description) {
            skills.insert(SKILL_KEYWORDS[mat.pattern()].to_string());
        }
    }

    skills
}

/// Total years of experience from the profile's experience field plus the
/// work history.
///
/// Numeric durations are summed directly; free-text durations contribute the
/// first number they contain.
pub fn total_experience_years(profile: &Profile) -> f64 {
    let mut years = match &profile.experience {
        Some(ExperienceField::Years(value)) => *value,
        Some(ExperienceField::Text(text)) => required_years(text).unwrap_or(0) as f64,
        None => 0.0,
    };

    for entry in &profile.work_history {
        match &entry.duration {
            Some(DurationField::Years(value)) => years += value,
            Some(DurationField::Text(text)) => {
                if let Some(caps) = number_regex().captures(text) {
                    years += caps[1].parse::<f64>().unwrap_or(0.0);
                }
            }
            None => {}
        }
    }

    years
}

/// Required years from a free-text requirement, from the first
/// "<N> year(s)" pattern. None when the text carries no such number.
pub fn required_years(requirement: &str) -> Option<u32> {
    years_regex()
        .captures(&requirement.to_lowercase())
        .and_then(|caps| caps[1].parse().ok())
}

/// The profile's highest degree as free text, if any.
///
/// A free-text education field is returned verbatim. For entry lists the
/// entry with the highest known degree level wins; when no entry mentions a
/// known degree word, the first non-empty degree is used.
pub fn highest_degree(profile: &Profile) -> Option<String> {
    match &profile.education {
        Some(EducationField::Text(text)) if !text.is_empty() => Some(text.clone()),
        Some(EducationField::Entries(entries)) => {
            let mut best: Option<&str> = None;
            let mut best_level = 0;

            for entry in entries {
                let level = degree_level(&entry.degree);
                if level > best_level {
                    best_level = level;
                    best = Some(&entry.degree);
                }
            }

            best.map(str::to_string).or_else(|| {
                entries
                    .iter()
                    .map(|entry| entry.degree.as_str())
                    .find(|degree| !degree.is_empty())
                    .map(str::to_string)
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationEntry, WorkEntry};

    #[test]
    fn test_extract_skills_from_declared_list() {
        let skills = extract_skills(&["Python".to_string(), " React ".to_string()], "");
        assert!(skills.contains("python"));
        assert!(skills.contains("react"));
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn test_extract_skills_mines_description() {
        let skills = extract_skills(
            &[],
            "We use Docker and Kubernetes on AWS for machine learning workloads",
        );
        assert!(skills.contains("docker"));
        assert!(skills.contains("kubernetes"));
        assert!(skills.contains("aws"));
        assert!(skills.contains("machine learning"));
    }

    #[test]
    fn test_extract_skills_deduplicates() {
        let skills = extract_skills(&["python".to_string()], "Python, python, PYTHON");
        assert_eq!(skills.iter().filter(|s| *s == "python").count(), 1);
    }

    #[test]
    fn test_total_years_from_numeric_field() {
        let profile = Profile {
            experience: Some(ExperienceField::Years(5.0)),
            ..Default::default()
        };
        assert_eq!(total_experience_years(&profile), 5.0);
    }

    #[test]
    fn test_total_years_from_text_field() {
        let profile = Profile {
            experience: Some(ExperienceField::Text("7 years in backend work".to_string())),
            ..Default::default()
        };
        assert_eq!(total_experience_years(&profile), 7.0);
    }

    #[test]
    fn test_total_years_sums_work_history() {
        let profile = Profile {
            work_history: vec![
                WorkEntry {
                    duration: Some(DurationField::Years(2.0)),
                    ..Default::default()
                },
                WorkEntry {
                    duration: Some(DurationField::Text("1.5 years".to_string())),
                    ..Default::default()
                },
                WorkEntry::default(),
            ],
            ..Default::default()
        };
        assert_eq!(total_experience_years(&profile), 3.5);
    }

    #[test]
    fn test_required_years_parses_variants() {
        assert_eq!(required_years("5 years of experience"), Some(5));
        assert_eq!(required_years("3-year minimum"), Some(3));
        // A "+" between the number and "year" defeats the pattern
        assert_eq!(required_years("10+ years"), None);
        assert_eq!(required_years("senior role"), None);
        assert_eq!(required_years(""), None);
    }

    #[test]
    fn test_highest_degree_from_text() {
        let profile = Profile {
            education: Some(EducationField::Text("Master of Science".to_string())),
            ..Default::default()
        };
        assert_eq!(
            highest_degree(&profile),
            Some("Master of Science".to_string())
        );
    }

    #[test]
    fn test_highest_degree_picks_highest_entry() {
        let profile = Profile {
            education: Some(EducationField::Entries(vec![
                EducationEntry {
                    degree: "Bachelor of Arts".to_string(),
                    ..Default::default()
                },
                EducationEntry {
                    degree: "PhD in Physics".to_string(),
                    ..Default::default()
                },
            ])),
            ..Default::default()
        };
        assert_eq!(highest_degree(&profile), Some("PhD in Physics".to_string()));
    }

    #[test]
    fn test_highest_degree_falls_back_to_first_entry() {
        let profile = Profile {
            education: Some(EducationField::Entries(vec![EducationEntry {
                degree: "Bootcamp Certificate".to_string(),
                ..Default::default()
            }])),
            ..Default::default()
        };
        assert_eq!(
            highest_degree(&profile),
            Some("Bootcamp Certificate".to_string())
        );
    }

    #[test]
    fn test_missing_fields_are_neutral() {
        let profile = Profile::default();
        assert_eq!(total_experience_years(&profile), 0.0);
        assert_eq!(highest_degree(&profile), None);
        assert!(extract_skills(&profile.skills, "").is_empty());
    }
}
