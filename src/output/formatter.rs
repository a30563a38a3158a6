//! Output formatters for match and analysis reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::models::JobMatch;
use crate::output::report::{AnalysisReport, MatchReport};
use colored::Colorize;
use std::fmt::Write as _;

/// Trait for rendering reports in one output format.
pub trait OutputFormatter {
    fn format_matches(&self, report: &MatchReport) -> Result<String>;
    fn format_analysis(&self, report: &AnalysisReport) -> Result<String>;
}

/// Console formatter with optional colors.
pub struct ConsoleFormatter {
    pub use_colors: bool,
    pub detailed: bool,
}

/// JSON formatter for piping into other tools.
pub struct JsonFormatter {
    pub pretty: bool,
}

/// Markdown formatter for saved reports.
pub struct MarkdownFormatter;

/// Coordinates the per-format formatters.
pub struct ReportGenerator {
    console: ConsoleFormatter,
    json: JsonFormatter,
    markdown: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console: ConsoleFormatter {
                use_colors,
                detailed,
            },
            json: JsonFormatter { pretty: true },
            markdown: MarkdownFormatter,
        }
    }

    pub fn render_matches(&self, report: &MatchReport, format: &OutputFormat) -> Result<String> {
        self.formatter(format).format_matches(report)
    }

    pub fn render_analysis(
        &self,
        report: &AnalysisReport,
        format: &OutputFormat,
    ) -> Result<String> {
        self.formatter(format).format_analysis(report)
    }

    fn formatter(&self, format: &OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console,
            OutputFormat::Json => &self.json,
            OutputFormat::Markdown => &self.markdown,
        }
    }
}

impl ConsoleFormatter {
    fn score_label(&self, score: f64) -> String {
        let text = format!("{:.2}", score);
        if !self.use_colors {
            return text;
        }
        if score >= 0.8 {
            text.green().bold().to_string()
        } else if score >= 0.6 {
            text.yellow().to_string()
        } else {
            text.red().to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_matches(&self, report: &MatchReport) -> Result<String> {
        let mut out = String::new();

        let _ = writeln!(out, "{}", self.heading("Job Match Results"));
        let _ = writeln!(
            out,
            "{} of {} postings at or above {:.2}",
            report.matches.len(),
            report.total_postings,
            report.min_match_score
        );
        if report.is_degraded() {
            let _ = writeln!(
                out,
                "note: fallback matching was used; sub-scores are low fidelity"
            );
        }
        let _ = writeln!(out);

        for (rank, m) in report.matches.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>2}. {} {}",
                rank + 1,
                m.job_id,
                self.score_label(m.match_score)
            );
            let _ = writeln!(
                out,
                "    skills {:.2} | experience {:.2} | education {:.2} | title {:.2} | text {:.2}",
                m.skill_match, m.experience_match, m.education_match, m.title_match,
                m.text_similarity
            );

            if self.detailed {
                if !m.details.matching_skills.is_empty() {
                    let _ = writeln!(
                        out,
                        "    matching: {}",
                        m.details.matching_skills.join(", ")
                    );
                }
                if !m.details.missing_skills.is_empty() {
                    let _ =
                        writeln!(out, "    missing:  {}", m.details.missing_skills.join(", "));
                }
                let _ = writeln!(out, "    {}", m.details.experience_analysis);
                let _ = writeln!(out, "    {}", m.details.education_analysis);
                let _ = writeln!(out, "    {}", m.details.title_relevance);
            }
        }

        if report.matches.is_empty() {
            let _ = writeln!(out, "No postings scored above the threshold.");
        }

        Ok(out)
    }

    fn format_analysis(&self, report: &AnalysisReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut out = String::new();

        let _ = writeln!(
            out,
            "{}",
            self.heading(&format!("Job Analysis: {}", analysis.job_id))
        );
        let _ = writeln!(out, "Level: {}", analysis.job_level);
        let _ = writeln!(out, "Type: {}", analysis.job_type);
        if !analysis.key_skills.is_empty() {
            let _ = writeln!(out, "Key skills: {}", analysis.key_skills.join(", "));
        }
        if !analysis.keywords.is_empty() {
            let _ = writeln!(out, "Keywords: {}", analysis.keywords.join(", "));
        }
        let _ = writeln!(out, "Culture: {}", analysis.company_culture);

        let _ = writeln!(out, "\n{}", self.heading("Resume focus"));
        for suggestion in &analysis.suggested_resume_focus {
            let _ = writeln!(out, "  - {}", suggestion);
        }

        let _ = writeln!(out, "\n{}", self.heading("Cover letter points"));
        for suggestion in &analysis.suggested_cover_letter_points {
            let _ = writeln!(out, "  - {}", suggestion);
        }

        if let Some(fit) = &analysis.personalized {
            let _ = writeln!(out, "\n{}", self.heading("Personalized fit"));
            let _ = writeln!(out, "  {}", fit.overall_fit);
            if !fit.matching_skills.is_empty() {
                let _ = writeln!(out, "  matching: {}", fit.matching_skills.join(", "));
            }
            if !fit.missing_skills.is_empty() {
                let _ = writeln!(out, "  missing:  {}", fit.missing_skills.join(", "));
            }
            let _ = writeln!(out, "  {}", fit.experience_analysis);
            let _ = writeln!(out, "  {}", fit.education_analysis);
        }

        Ok(out)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_matches(&self, report: &MatchReport) -> Result<String> {
        Ok(if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        })
    }

    fn format_analysis(&self, report: &AnalysisReport) -> Result<String> {
        Ok(if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        })
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_matches(&self, report: &MatchReport) -> Result<String> {
        let mut out = String::new();

        let _ = writeln!(out, "# Job Match Results");
        let _ = writeln!(
            out,
            "\nGenerated: {}  ",
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        );
        let _ = writeln!(
            out,
            "Matches: {} of {} postings at or above {:.2}\n",
            report.matches.len(),
            report.total_postings,
            report.min_match_score
        );

        let _ = writeln!(
            out,
            "| # | Job | Score | Skills | Experience | Education | Title | Text |"
        );
        let _ = writeln!(out, "|---|-----|-------|--------|------------|-----------|-------|------|");
        for (rank, m) in report.matches.iter().enumerate() {
            let _ = writeln!(
                out,
                "| {} | {} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} |",
                rank + 1,
                m.job_id,
                m.match_score,
                m.skill_match,
                m.experience_match,
                m.education_match,
                m.title_match,
                m.text_similarity
            );
        }

        for m in &report.matches {
            let _ = writeln!(out, "\n## {}", m.job_id);
            write_match_details(&mut out, m);
        }

        Ok(out)
    }

    fn format_analysis(&self, report: &AnalysisReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut out = String::new();

        let _ = writeln!(out, "# Job Analysis: {}", analysis.job_id);
        let _ = writeln!(out, "\n- Level: {}", analysis.job_level);
        let _ = writeln!(out, "- Type: {}", analysis.job_type);
        let _ = writeln!(out, "- Key skills: {}", analysis.key_skills.join(", "));
        let _ = writeln!(out, "- Keywords: {}", analysis.keywords.join(", "));
        let _ = writeln!(out, "- Culture: {}", analysis.company_culture);

        let _ = writeln!(out, "\n## Resume focus\n");
        for suggestion in &analysis.suggested_resume_focus {
            let _ = writeln!(out, "- {}", suggestion);
        }

        let _ = writeln!(out, "\n## Cover letter points\n");
        for suggestion in &analysis.suggested_cover_letter_points {
            let _ = writeln!(out, "- {}", suggestion);
        }

        if let Some(fit) = &analysis.personalized {
            let _ = writeln!(out, "\n## Personalized fit\n");
            let _ = writeln!(out, "{}\n", fit.overall_fit);
            let _ = writeln!(out, "- Matching skills: {}", fit.matching_skills.join(", "));
            let _ = writeln!(out, "- Missing skills: {}", fit.missing_skills.join(", "));
            let _ = writeln!(out, "- {}", fit.experience_analysis);
            let _ = writeln!(out, "- {}", fit.education_analysis);
        }

        Ok(out)
    }
}

fn write_match_details(out: &mut String, m: &JobMatch) {
    if !m.details.matching_skills.is_empty() {
        let _ = writeln!(
            out,
            "- Matching skills: {}",
            m.details.matching_skills.join(", ")
        );
    }
    if !m.details.missing_skills.is_empty() {
        let _ = writeln!(
            out,
            "- Missing skills: {}",
            m.details.missing_skills.join(", ")
        );
    }
    let _ = writeln!(out, "- {}", m.details.experience_analysis);
    let _ = writeln!(out, "- {}", m.details.education_analysis);
    let _ = writeln!(out, "- {}", m.details.title_relevance);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchDetails;

    fn sample_report() -> MatchReport {
        MatchReport::new(
            vec![JobMatch {
                job_id: "j1".to_string(),
                match_score: 0.87,
                skill_match: 1.0,
                experience_match: 0.8,
                education_match: 1.0,
                title_match: 0.7,
                text_similarity: 0.35,
                degraded: false,
                details: MatchDetails {
                    matching_skills: vec!["python".to_string()],
                    missing_skills: vec!["docker".to_string()],
                    experience_analysis: "ok".to_string(),
                    education_analysis: "ok".to_string(),
                    title_relevance: "ok".to_string(),
                },
            }],
            3,
            0.6,
        )
    }

    #[test]
    fn test_console_output_lists_matches() {
        let formatter = ConsoleFormatter {
            use_colors: false,
            detailed: true,
        };
        let output = formatter.format_matches(&sample_report()).unwrap();
        assert!(output.contains("j1"));
        assert!(output.contains("0.87"));
        assert!(output.contains("matching: python"));
        assert!(output.contains("missing:  docker"));
    }

    #[test]
    fn test_console_notes_degraded_mode() {
        let mut report = sample_report();
        report.matches[0].degraded = true;
        let formatter = ConsoleFormatter {
            use_colors: false,
            detailed: false,
        };
        let output = formatter.format_matches(&report).unwrap();
        assert!(output.contains("fallback matching"));
    }

    #[test]
    fn test_json_output_round_trips() {
        let formatter = JsonFormatter { pretty: false };
        let output = formatter.format_matches(&sample_report()).unwrap();
        let parsed: MatchReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.matches.len(), 1);
        assert_eq!(parsed.matches[0].job_id, "j1");
    }

    #[test]
    fn test_markdown_output_has_table() {
        let output = MarkdownFormatter.format_matches(&sample_report()).unwrap();
        assert!(output.contains("# Job Match Results"));
        assert!(output.contains("| 1 | j1 | 0.87 |"));
    }
}
