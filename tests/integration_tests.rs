//! Integration tests driving the public matching API with fixture data

use job_matcher::config::{Config, OutputFormat};
use job_matcher::matching::{analyze_job, MatchEngine};
use job_matcher::models::{JobLevel, JobPosting, Profile};
use job_matcher::output::{AnalysisReport, MatchReport, ReportGenerator};

fn load_profile() -> Profile {
    let content = std::fs::read_to_string("tests/fixtures/profile.json").unwrap();
    serde_json::from_str(&content).unwrap()
}

fn load_jobs() -> Vec<JobPosting> {
    let content = std::fs::read_to_string("tests/fixtures/jobs.json").unwrap();
    serde_json::from_str(&content).unwrap()
}

fn default_engine() -> MatchEngine {
    MatchEngine::new(Config::default()).unwrap()
}

#[test]
fn test_fixture_batch_ranks_and_filters() {
    let matches = default_engine().match_jobs(&load_profile(), &load_jobs());

    // The marketing posting shares no skills and falls below the threshold
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].job_id, "strong-match");
    assert_eq!(matches[1].job_id, "contract-match");
    assert!(matches[0].match_score > matches[1].match_score);
}

#[test]
fn test_strong_match_subscores() {
    let matches = default_engine().match_jobs(&load_profile(), &load_jobs());
    let strong = matches.iter().find(|m| m.job_id == "strong-match").unwrap();

    assert_eq!(strong.skill_match, 1.0);
    assert_eq!(strong.experience_match, 1.0);
    assert_eq!(strong.education_match, 1.0);
    assert_eq!(strong.title_match, 1.0);
    assert!(strong.text_similarity > 0.0);
    // All components maxed plus the additive text term
    assert!(strong.match_score >= 1.0);
    assert!(!strong.degraded);

    assert!(strong
        .details
        .matching_skills
        .contains(&"python".to_string()));
    assert!(strong.details.matching_skills.contains(&"aws".to_string()));
    assert!(strong.details.missing_skills.is_empty());
    assert!(strong
        .details
        .experience_analysis
        .contains("meet the experience requirement"));
}

#[test]
fn test_contract_posting_takes_full_time_penalty() {
    let matches = default_engine().match_jobs(&load_profile(), &load_jobs());
    let strong = matches.iter().find(|m| m.job_id == "strong-match").unwrap();
    let contract = matches
        .iter()
        .find(|m| m.job_id == "contract-match")
        .unwrap();

    // Identical posting text, so only the 0.7 multiplier separates them
    assert!((contract.match_score - strong.match_score * 0.7).abs() <= 0.02);
}

#[test]
fn test_min_score_zero_keeps_every_posting() {
    let mut config = Config::default();
    config.scoring.min_match_score = 0.0;
    let engine = MatchEngine::new(config).unwrap();

    let matches = engine.match_jobs(&load_profile(), &load_jobs());
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[2].job_id, "weak-match");
    assert!(matches[2].match_score < 0.6);
}

#[test]
fn test_repeated_fixture_runs_are_identical() {
    let profile = load_profile();
    let jobs = load_jobs();
    let first = default_engine().match_jobs(&profile, &jobs);
    let second = default_engine().match_jobs(&profile, &jobs);
    assert_eq!(first, second);
}

#[test]
fn test_analyze_fixture_posting_with_profile() {
    let jobs = load_jobs();
    let strong = jobs.iter().find(|j| j.id == "strong-match").unwrap();
    let analysis = analyze_job(strong, Some(&load_profile()));

    assert_eq!(analysis.job_level, JobLevel::Senior);
    assert_eq!(analysis.job_type, "Full-time");
    assert!(analysis.key_skills.contains(&"aws".to_string()));
    assert!(analysis.company_culture.contains("collaborative"));

    let fit = analysis.personalized.unwrap();
    assert!(fit.overall_fit.starts_with("Strong fit"));
    assert!(fit.missing_skills.is_empty());
}

#[test]
fn test_match_report_renders_in_every_format() {
    let matches = default_engine().match_jobs(&load_profile(), &load_jobs());
    let report = MatchReport::new(matches, 3, 0.6);
    let generator = ReportGenerator::new(false, true);

    let console = generator
        .render_matches(&report, &OutputFormat::Console)
        .unwrap();
    assert!(console.contains("strong-match"));
    assert!(console.contains("2 of 3 postings"));

    let json = generator
        .render_matches(&report, &OutputFormat::Json)
        .unwrap();
    let parsed: MatchReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.matches.len(), 2);

    let markdown = generator
        .render_matches(&report, &OutputFormat::Markdown)
        .unwrap();
    assert!(markdown.contains("# Job Match Results"));
    assert!(markdown.contains("contract-match"));
}

#[test]
fn test_analysis_report_renders_as_json() {
    let jobs = load_jobs();
    let analysis = analyze_job(&jobs[0], None);
    let report = AnalysisReport::new(analysis);

    let generator = ReportGenerator::new(false, true);
    let json = generator
        .render_analysis(&report, &OutputFormat::Json)
        .unwrap();
    let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.analysis.job_id, "strong-match");
}
