//! Data model for profiles, job postings, and engine output
//!
//! Input records mirror the JSON the scraper pipeline stores. Fields that the
//! original feeds may omit or type loosely carry serde defaults and untagged
//! enums so partial records deserialize without errors; the extractors treat
//! anything missing as "no information".

use serde::{Deserialize, Serialize};

/// A user profile, read-only input to matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub skills: Vec<String>,

    /// Total experience, either a number of years or free text like "5 years"
    #[serde(default)]
    pub experience: Option<ExperienceField>,

    #[serde(default)]
    pub work_history: Vec<WorkEntry>,

    /// Highest degree as free text, or a list of degree entries
    #[serde(default)]
    pub education: Option<EducationField>,

    #[serde(default)]
    pub current_title: String,

    #[serde(default)]
    pub requires_h1b_sponsorship: bool,

    #[serde(default = "default_true")]
    pub prefers_full_time: bool,
}

// A derived Default would set `prefers_full_time` to false; the field
// defaults to true whether the profile comes from JSON or is built in code.
impl Default for Profile {
    fn default() -> Self {
        Self {
            skills: Vec::new(),
            experience: None,
            work_history: Vec::new(),
            education: None,
            current_title: String::new(),
            requires_h1b_sponsorship: false,
            prefers_full_time: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExperienceField {
    Years(f64),
    Text(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    /// Either a number of years or free text containing one
    #[serde(default)]
    pub duration: Option<DurationField>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationField {
    Years(f64),
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EducationField {
    Entries(Vec<EducationEntry>),
    Text(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: String,
}

/// A scraped job posting, read-only input to matching.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,

    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,

    /// Declared skill list; skills are also mined from `description`
    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub experience_required: String,
    #[serde(default)]
    pub education_required: String,

    #[serde(default)]
    pub responsibilities: String,
    #[serde(default)]
    pub requirements: String,

    /// Compared case-insensitively against "full-time"
    #[serde(default)]
    pub job_type: String,

    #[serde(default)]
    pub offers_visa_sponsorship: bool,
}

/// A scored association between one profile and one job posting.
///
/// Computed fresh per matching call and never persisted by the engine.
/// All scores are rounded to 2 decimal places. `match_score` is the weighted
/// component sum plus the additive text-similarity term, after penalty
/// multipliers; it can nominally reach 1.2 before penalties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub job_id: String,
    pub match_score: f64,
    pub skill_match: f64,
    pub experience_match: f64,
    pub education_match: f64,
    pub title_match: f64,
    pub text_similarity: f64,
    /// True when the degraded fallback path produced this match
    pub degraded: bool,
    pub details: MatchDetails,
}

/// Explainable breakdown attached to every match.
///
/// Skill lists are lowercased and sorted so repeated calls produce identical
/// output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub experience_analysis: String,
    pub education_analysis: String,
    pub title_relevance: String,
}

/// Seniority bucket derived from title and description keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobLevel {
    Senior,
    Junior,
    Management,
    Intern,
    MidLevel,
}

impl std::fmt::Display for JobLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            JobLevel::Senior => "Senior",
            JobLevel::Junior => "Junior",
            JobLevel::Management => "Management",
            JobLevel::Intern => "Intern",
            JobLevel::MidLevel => "Mid-level",
        };
        write!(f, "{}", label)
    }
}

/// Read-only analysis of a single posting, used to bias generated documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobAnalysis {
    pub job_id: String,
    pub key_skills: Vec<String>,
    pub experience_required: String,
    pub education_required: String,
    pub job_level: JobLevel,
    pub job_type: String,
    pub keywords: Vec<String>,
    pub company_culture: String,
    pub suggested_resume_focus: Vec<String>,
    pub suggested_cover_letter_points: Vec<String>,
    pub personalized: Option<PersonalizedFit>,
}

/// Profile-specific section of a job analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalizedFit {
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub experience_analysis: String,
    pub education_analysis: String,
    pub overall_fit: String,
}

fn default_true() -> bool {
    true
}
