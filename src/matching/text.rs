//! Text assembly, tokenization, and keyword extraction

use crate::models::{
    EducationField, ExperienceField, JobPosting, Profile,
};
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

/// Common English stop words, shared by the vectorizer and keyword extraction.
pub fn stop_words() -> &'static HashSet<&'static str> {
    static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    STOP_WORDS.get_or_init(|| {
        [
            "a", "an", "the", "and", "or", "but", "if", "because", "as", "what",
            "when", "where", "how", "who", "which", "this", "that", "these",
            "those", "to", "of", "in", "for", "with", "on", "at", "from", "by",
            "about", "into", "through", "during", "before", "after", "above",
            "below", "between", "out", "off", "over", "under", "again", "then",
            "once", "here", "there", "all", "any", "both", "each", "few",
            "more", "most", "other", "some", "such", "no", "nor", "not",
            "only", "own", "same", "so", "than", "too", "very", "will", "be",
            "is", "are", "was", "were", "been", "being", "have", "has", "had",
            "having", "do", "does", "did", "doing", "can", "could", "should",
            "would", "may", "might", "must", "shall", "it", "its", "itself",
            "they", "them", "their", "theirs", "we", "us", "our", "ours",
            "you", "your", "yours", "he", "him", "his", "she", "her", "hers",
            "i", "me", "my", "mine", "am",
        ]
        .into_iter()
        .collect()
    })
}

/// Tokenize into lowercased word tokens, dropping stop words when asked.
///
/// Uses Unicode word segmentation; single-character and purely numeric
/// tokens are dropped.
pub fn tokenize(text: &str, remove_stop_words: bool) -> Vec<String> {
    text.unicode_words()
        .map(|word| word.to_lowercase())
        .filter(|word| word.len() > 1 && word.chars().any(|c| c.is_alphabetic()))
        .filter(|word| !remove_stop_words || !stop_words().contains(word.as_str()))
        .collect()
}

/// Lowercased text representation of a profile for vectorization.
///
/// Concatenates the fields the profile actually carries (skills, experience,
/// education); the title/description/responsibilities/requirements slots of
/// the shared layout are empty for profiles.
pub fn profile_text(profile: &Profile) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !profile.skills.is_empty() {
        parts.push(profile.skills.join(" "));
    }

    match &profile.experience {
        Some(ExperienceField::Years(years)) => parts.push(format_years(*years)),
        Some(ExperienceField::Text(text)) if !text.is_empty() => parts.push(text.clone()),
        _ => {}
    }

    match &profile.education {
        Some(EducationField::Text(text)) if !text.is_empty() => parts.push(text.clone()),
        Some(EducationField::Entries(entries)) => {
            for entry in entries {
                parts.push(format!(
                    "{} {} {}",
                    entry.degree, entry.institution, entry.year
                ));
            }
        }
        _ => {}
    }

    parts.join(" ").to_lowercase()
}

/// Lowercased text representation of a posting for vectorization.
///
/// Concatenates title, description, skills, experience, education,
/// responsibilities, and requirements; missing fields contribute nothing.
pub fn posting_text(posting: &JobPosting) -> String {
    let skills = posting.skills.join(" ");
    let parts = [
        posting.title.as_str(),
        posting.description.as_str(),
        skills.as_str(),
        posting.experience_required.as_str(),
        posting.education_required.as_str(),
        posting.responsibilities.as_str(),
        posting.requirements.as_str(),
    ];

    parts
        .iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Top keywords by frequency over stopword-filtered tokens.
///
/// Ties break alphabetically so the output is deterministic.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokenize(text, true) {
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut keywords: Vec<(String, usize)> = counts.into_iter().collect();
    keywords.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    keywords
        .into_iter()
        .take(max_keywords)
        .map(|(word, _)| word)
        .collect()
}

fn format_years(years: f64) -> String {
    if (years - years.round()).abs() < f64::EPSILON {
        format!("{} years", years as i64)
    } else {
        format!("{} years", years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationEntry, WorkEntry};

    #[test]
    fn test_tokenize_filters_stop_words() {
        let tokens = tokenize("Looking for a Python developer with React experience", true);
        assert!(tokens.contains(&"python".to_string()));
        assert!(tokens.contains(&"developer".to_string()));
        assert!(tokens.contains(&"react".to_string()));
        assert!(!tokens.contains(&"for".to_string()));
        assert!(!tokens.contains(&"with".to_string()));
    }

    #[test]
    fn test_tokenize_keeps_stop_words_when_disabled() {
        let tokens = tokenize("for the win", false);
        assert!(tokens.contains(&"for".to_string()));
        assert!(tokens.contains(&"the".to_string()));
    }

    #[test]
    fn test_profile_text_concatenates_available_fields() {
        let profile = Profile {
            skills: vec!["Python".to_string(), "React".to_string()],
            experience: Some(ExperienceField::Text("5 years".to_string())),
            education: Some(EducationField::Text("Bachelor of Science".to_string())),
            current_title: "Software Developer".to_string(),
            work_history: vec![WorkEntry::default()],
            ..Default::default()
        };

        let text = profile_text(&profile);
        assert!(text.contains("python react"));
        assert!(text.contains("5 years"));
        assert!(text.contains("bachelor of science"));
    }

    #[test]
    fn test_profile_text_with_education_entries() {
        let profile = Profile {
            education: Some(EducationField::Entries(vec![EducationEntry {
                degree: "Master of Science".to_string(),
                institution: "MIT".to_string(),
                year: "2020".to_string(),
            }])),
            ..Default::default()
        };

        let text = profile_text(&profile);
        assert!(text.contains("master of science mit 2020"));
    }

    #[test]
    fn test_posting_text_skips_missing_fields() {
        let posting = JobPosting {
            id: "j1".to_string(),
            title: "Senior Developer".to_string(),
            description: "Build things".to_string(),
            ..Default::default()
        };

        let text = posting_text(&posting);
        assert_eq!(text, "senior developer build things");
    }

    #[test]
    fn test_extract_keywords_top_by_frequency() {
        let text = "rust rust rust python python matching";
        let keywords = extract_keywords(text, 2);
        assert_eq!(keywords, vec!["rust".to_string(), "python".to_string()]);
    }

    #[test]
    fn test_extract_keywords_empty_text() {
        assert!(extract_keywords("", 10).is_empty());
        assert!(extract_keywords("the a an of", 10).is_empty());
    }
}
