//! Single-posting analysis for document generation support
//!
//! This is presentation logic, separate from the ranking contract: it mines a
//! posting for skills, level, keywords, and culture signals, and (when a
//! profile is supplied) a qualitative fit assessment used to bias generated
//! resumes and cover letters.

use crate::matching::extract::{
    extract_skills, highest_degree, total_experience_years,
};
use crate::matching::scorers::{
    education_analysis, education_match, experience_analysis, experience_match, skill_match,
};
use crate::matching::tables::CULTURE_INDICATORS;
use crate::matching::text::extract_keywords;
use crate::models::{JobAnalysis, JobLevel, JobPosting, PersonalizedFit, Profile};
use std::collections::BTreeSet;

const MAX_KEYWORDS: usize = 10;

/// Analyze one posting, optionally personalized against a profile.
pub fn analyze_job(posting: &JobPosting, profile: Option<&Profile>) -> JobAnalysis {
    let job_skills = extract_skills(&posting.skills, &posting.description);
    let job_level = determine_job_level(&posting.title, &posting.description);
    let company_culture = company_culture(posting);

    let personalized = profile.map(|profile| {
        let user_skills = extract_skills(&profile.skills, "");
        let user_years = total_experience_years(profile);
        let user_degree = highest_degree(profile);

        PersonalizedFit {
            matching_skills: user_skills.intersection(&job_skills).cloned().collect(),
            missing_skills: job_skills.difference(&user_skills).cloned().collect(),
            experience_analysis: experience_analysis(user_years, &posting.experience_required),
            education_analysis: education_analysis(
                user_degree.as_deref(),
                &posting.education_required,
            ),
            overall_fit: overall_fit(&user_skills, user_years, user_degree.as_deref(), posting),
        }
    });

    JobAnalysis {
        job_id: posting.id.clone(),
        key_skills: job_skills.into_iter().collect(),
        experience_required: posting.experience_required.clone(),
        education_required: posting.education_required.clone(),
        job_level,
        job_type: if posting.job_type.is_empty() {
            "Unknown".to_string()
        } else {
            posting.job_type.clone()
        },
        keywords: extract_keywords(&posting.description, MAX_KEYWORDS),
        company_culture,
        suggested_resume_focus: suggest_resume_focus(posting, job_level),
        suggested_cover_letter_points: suggest_cover_letter_points(posting),
        personalized,
    }
}

/// Seniority bucket from title and description keywords; title keywords are
/// checked before description keywords.
pub fn determine_job_level(title: &str, description: &str) -> JobLevel {
    let title = title.to_lowercase();
    let description = description.to_lowercase();

    let title_has = |words: &[&str]| words.iter().any(|w| title.contains(w));
    if title_has(&["senior", "sr", "lead", "principal", "staff"]) {
        return JobLevel::Senior;
    }
    if title_has(&["junior", "jr", "associate", "entry"]) {
        return JobLevel::Junior;
    }
    if title_has(&["manager", "director", "head"]) {
        return JobLevel::Management;
    }
    if title_has(&["intern", "internship"]) {
        return JobLevel::Intern;
    }

    let description_has = |words: &[&str]| words.iter().any(|w| description.contains(w));
    if description_has(&["senior", "experienced", "expert", "lead"]) {
        return JobLevel::Senior;
    }
    if description_has(&["junior", "entry", "entry-level", "entry level"]) {
        return JobLevel::Junior;
    }

    JobLevel::MidLevel
}

/// Culture tag derived from the fixed indicator table.
fn company_culture(posting: &JobPosting) -> String {
    if posting.description.is_empty() {
        return "No information available about company culture.".to_string();
    }

    let description = posting.description.to_lowercase();
    let found: Vec<&str> = CULTURE_INDICATORS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| description.contains(k)))
        .map(|(culture, _)| *culture)
        .collect();

    if found.is_empty() {
        format!("No specific culture indicators found for {}.", posting.company)
    } else {
        format!(
            "{} appears to have a {} culture based on the job description.",
            posting.company,
            found.join(", ")
        )
    }
}

fn suggest_resume_focus(posting: &JobPosting, job_level: JobLevel) -> Vec<String> {
    let mut suggestions = Vec::new();

    let job_skills: Vec<String> = extract_skills(&posting.skills, &posting.description)
        .into_iter()
        .take(5)
        .collect();
    if !job_skills.is_empty() {
        suggestions.push(format!(
            "Highlight your experience with {}.",
            job_skills.join(", ")
        ));
    }

    match job_level {
        JobLevel::Senior => suggestions
            .push("Emphasize leadership experience and strategic contributions.".to_string()),
        JobLevel::Junior => suggestions
            .push("Focus on relevant education, internships, and eagerness to learn.".to_string()),
        JobLevel::Management => suggestions
            .push("Highlight team management experience and business impact.".to_string()),
        _ => {}
    }

    suggestions.push("Quantify achievements with specific metrics and outcomes.".to_string());
    suggestions.push("Include keywords from the job description in your resume.".to_string());
    suggestions
}

fn suggest_cover_letter_points(posting: &JobPosting) -> Vec<String> {
    let company = if posting.company.is_empty() {
        "the company"
    } else {
        posting.company.as_str()
    };
    let title = if posting.title.is_empty() {
        "the position"
    } else {
        posting.title.as_str()
    };

    let mut suggestions = vec![
        format!("Express your interest in {} at {}.", title, company),
        "Connect your past experience directly to the job requirements.".to_string(),
    ];

    let job_skills: Vec<String> = extract_skills(&posting.skills, &posting.description)
        .into_iter()
        .take(3)
        .collect();
    if !job_skills.is_empty() {
        suggestions.push(format!(
            "Address how you've used {} in previous roles.",
            job_skills.join(", ")
        ));
    }

    suggestions.push(
        "Express enthusiasm for the opportunity to interview and discuss your qualifications further."
            .to_string(),
    );
    suggestions
}

/// Qualitative fit bucket from skill/experience/education sub-scores weighted
/// 0.5/0.3/0.2 against thresholds 0.8/0.6/0.4.
fn overall_fit(
    user_skills: &BTreeSet<String>,
    user_years: f64,
    user_degree: Option<&str>,
    posting: &JobPosting,
) -> String {
    let job_skills = extract_skills(&posting.skills, &posting.description);
    let skill = skill_match(user_skills, &job_skills);
    let experience = experience_match(user_years, &posting.experience_required);
    let education = education_match(user_degree, &posting.education_required);

    let score = 0.5 * skill + 0.3 * experience + 0.2 * education;

    if score >= 0.8 {
        "Strong fit - You meet or exceed most requirements for this position.".to_string()
    } else if score >= 0.6 {
        "Good fit - You meet many requirements but may need to highlight transferable skills."
            .to_string()
    } else if score >= 0.4 {
        "Moderate fit - You meet some requirements but have gaps in key areas.".to_string()
    } else {
        "Limited fit - This position may require skills or experience you haven't demonstrated."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting() -> JobPosting {
        JobPosting {
            id: "j1".to_string(),
            title: "Senior Backend Engineer".to_string(),
            company: "Initech".to_string(),
            description: "Fast-paced team building Python services on AWS. \
                          Collaborative environment with growth opportunity."
                .to_string(),
            skills: vec!["Python".to_string(), "Docker".to_string()],
            experience_required: "5 years of experience".to_string(),
            education_required: "Bachelor's degree".to_string(),
            job_type: "Full-time".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_job_level_title_keywords_win_over_description() {
        assert_eq!(
            determine_job_level("Junior Developer", "looking for senior talent"),
            JobLevel::Junior
        );
        assert_eq!(
            determine_job_level("Senior Developer", ""),
            JobLevel::Senior
        );
        assert_eq!(
            determine_job_level("Engineering Manager", ""),
            JobLevel::Management
        );
        assert_eq!(
            determine_job_level("Software Intern", ""),
            JobLevel::Intern
        );
    }

    #[test]
    fn test_job_level_falls_back_to_description() {
        assert_eq!(
            determine_job_level("Developer", "we want an experienced engineer"),
            JobLevel::Senior
        );
        assert_eq!(
            determine_job_level("Developer", "entry-level position"),
            JobLevel::Junior
        );
        assert_eq!(determine_job_level("Developer", ""), JobLevel::MidLevel);
    }

    #[test]
    fn test_analysis_extracts_skills_and_keywords() {
        let analysis = analyze_job(&posting(), None);

        assert_eq!(analysis.job_id, "j1");
        assert!(analysis.key_skills.contains(&"python".to_string()));
        assert!(analysis.key_skills.contains(&"docker".to_string()));
        assert!(analysis.key_skills.contains(&"aws".to_string()));
        assert!(analysis.keywords.len() <= 10);
        assert!(analysis.keywords.contains(&"python".to_string()));
        assert!(analysis.personalized.is_none());
    }

    #[test]
    fn test_culture_indicators() {
        let analysis = analyze_job(&posting(), None);
        assert!(analysis.company_culture.contains("fast-paced"));
        assert!(analysis.company_culture.contains("collaborative"));
        assert!(analysis.company_culture.contains("growth-oriented"));

        let bland = JobPosting {
            id: "j2".to_string(),
            company: "Acme".to_string(),
            description: "Write code.".to_string(),
            ..Default::default()
        };
        assert_eq!(
            analyze_job(&bland, None).company_culture,
            "No specific culture indicators found for Acme."
        );

        let empty = JobPosting {
            id: "j3".to_string(),
            ..Default::default()
        };
        assert_eq!(
            analyze_job(&empty, None).company_culture,
            "No information available about company culture."
        );
    }

    #[test]
    fn test_personalized_fit_buckets() {
        let strong = Profile {
            skills: vec!["Python".to_string(), "Docker".to_string(), "AWS".to_string()],
            experience: Some(crate::models::ExperienceField::Years(6.0)),
            education: Some(crate::models::EducationField::Text(
                "Bachelor of Science".to_string(),
            )),
            ..Default::default()
        };
        let analysis = analyze_job(&posting(), Some(&strong));
        let fit = analysis.personalized.unwrap();
        assert!(fit.overall_fit.starts_with("Strong fit"));
        assert!(fit.matching_skills.contains(&"python".to_string()));

        let weak = Profile::default();
        let analysis = analyze_job(&posting(), Some(&weak));
        let fit = analysis.personalized.unwrap();
        assert!(fit.overall_fit.starts_with("Limited fit"));
        assert!(fit.missing_skills.contains(&"docker".to_string()));
    }

    #[test]
    fn test_resume_focus_matches_level() {
        let analysis = analyze_job(&posting(), None);
        assert!(analysis
            .suggested_resume_focus
            .iter()
            .any(|s| s.contains("leadership")));

        let mut junior = posting();
        junior.title = "Junior Backend Engineer".to_string();
        let analysis = analyze_job(&junior, None);
        assert!(analysis
            .suggested_resume_focus
            .iter()
            .any(|s| s.contains("eagerness to learn")));
    }

    #[test]
    fn test_cover_letter_points_name_company_and_title() {
        let analysis = analyze_job(&posting(), None);
        assert!(analysis.suggested_cover_letter_points[0]
            .contains("Senior Backend Engineer at Initech"));
    }
}
