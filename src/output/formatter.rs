//! Output formatters for match results and gap suggestions

use crate::config::OutputFormat;
use crate::error::Result;
use crate::history::HistoryEntry;
use crate::matching::{MatchResult, RankedOutcome};
use colored::{Color, Colorize};
use serde::Serialize;

/// Trait for formatting match output
pub trait OutputFormatter {
    fn format_outcome(&self, outcome: &RankedOutcome) -> Result<String>;
    fn format_gaps(&self, gaps: &[String], limit: usize) -> Result<String>;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting
pub struct JsonFormatter {
    pretty: bool,
}

/// Coordinates the formatters for each output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

#[derive(Serialize)]
struct GapReport<'a> {
    full_coverage: bool,
    total: usize,
    gaps: &'a [String],
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        let underline = "=".repeat(title.chars().count());
        if self.use_colors {
            format!("{}\n{}\n", title.bold().bright_blue(), underline.bright_blue())
        } else {
            format!("{}\n{}\n", title, underline)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (label, color) = match score {
            80..=100 => ("Excellent", Color::Green),
            60..=79 => ("Good", Color::Cyan),
            40..=59 => ("Fair", Color::Yellow),
            _ => ("Poor", Color::Red),
        };
        self.colorize(&format!("{}% ({})", score, label), color)
    }

    fn format_result(&self, index: usize, result: &MatchResult) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}. {} {}\n", index + 1, result.title, self.format_score_badge(result.score)));
        output.push_str(&format!("   Skills: {}\n", result.skills.join(", ")));
        output.push_str(&format!(
            "   Matched: {}\n",
            self.colorize(&join_or(&result.matched, "—"), Color::Green)
        ));
        output.push_str(&format!(
            "   Missing: {}\n",
            self.colorize(&join_or(&result.missing, "None"), Color::Yellow)
        ));

        if self.detailed && !result.fuzzy_matches.is_empty() {
            for fuzzy in &result.fuzzy_matches {
                output.push_str(&format!(
                    "   ~ {} matched '{}' ({:.1}% similarity)\n",
                    fuzzy.skill,
                    fuzzy.keyword,
                    fuzzy.similarity * 100.0
                ));
            }
        }

        output
    }

    /// One-line summary of a saved run
    pub fn format_history_entry(&self, entry: &HistoryEntry) -> String {
        format!(
            "{} — {}%  [{}]  {}\n    {}...\n",
            self.colorize(&entry.best_title, Color::White),
            entry.best_score,
            entry.id,
            self.colorize(&entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(), Color::BrightBlack),
            entry.job_snippet.replace('\n', " ")
        )
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_outcome(&self, outcome: &RankedOutcome) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("Portfolio Match Report"));
        output.push_str(&format!(
            "Best Project Match: {} {}\n",
            self.colorize(&outcome.best.title, Color::White),
            self.format_score_badge(outcome.best.score)
        ));
        output.push_str(&match &outcome.best.description {
            Some(description) => format!("Description: {}\n", description),
            None => "No description provided\n".to_string(),
        });
        output.push('\n');

        output.push_str(&self.format_header("Detailed Scores"));
        for (i, result) in outcome.results.iter().enumerate() {
            output.push_str(&self.format_result(i, result));
            output.push('\n');
        }

        if self.detailed {
            output.push_str(&format!(
                "Job keywords ({}): {}\n",
                outcome.job_keywords.len(),
                outcome.job_keywords.join(", ")
            ));
        }

        Ok(output)
    }

    fn format_gaps(&self, gaps: &[String], limit: usize) -> Result<String> {
        let mut output = self.format_header("Suggestions");

        if gaps.is_empty() {
            output.push_str(&self.colorize(
                "Nice! Your portfolio covers most keywords from the job.\n",
                Color::Green,
            ));
            return Ok(output);
        }

        for gap in gaps.iter().take(limit) {
            output.push_str(&format!(
                "  • Consider adding projects or learning: {}\n",
                self.colorize(gap, Color::Yellow)
            ));
        }

        if gaps.len() > limit {
            output.push_str(&format!("  ... and {} more\n", gaps.len() - limit));
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_outcome(&self, outcome: &RankedOutcome) -> Result<String> {
        self.to_json(outcome)
    }

    /// The full gap list; truncation is left to the consumer
    fn format_gaps(&self, gaps: &[String], _limit: usize) -> Result<String> {
        self.to_json(&GapReport {
            full_coverage: gaps.is_empty(),
            total: gaps.len(),
            gaps,
        })
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
        }
    }

    pub fn generate_report(&self, outcome: &RankedOutcome, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_outcome(outcome)
    }

    pub fn generate_gaps(&self, gaps: &[String], limit: usize, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_gaps(gaps, limit)
    }

    pub fn console(&self) -> &ConsoleFormatter {
        &self.console_formatter
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn join_or(items: &[String], empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{rank_projects, Project};

    fn outcome() -> RankedOutcome {
        let projects = vec![
            Project::new("1", "Infra", vec!["KUBERNETES".into(), "TERRAFORM".into()], None),
            Project::new("2", "Analytics", vec!["PYTHON".into(), "SQL".into()], Some("Reports".into())),
        ];
        rank_projects(&projects, "python sql kubernets").unwrap()
    }

    #[test]
    fn test_console_report() {
        let formatter = ConsoleFormatter::new(false, true);
        let report = formatter.format_outcome(&outcome()).unwrap();

        assert!(report.contains("Best Project Match: Analytics 100% (Excellent)"));
        assert!(report.contains("Description: Reports"));
        assert!(report.contains("Missing: TERRAFORM"));
        assert!(report.contains("~ KUBERNETES matched 'KUBERNETS'"));
        assert!(report.contains("Job keywords (3)"));
    }

    #[test]
    fn test_console_gaps_capped() {
        let formatter = ConsoleFormatter::new(false, false);
        let gaps: Vec<String> = (0..15).map(|i| format!("SKILL{}", i)).collect();

        let output = formatter.format_gaps(&gaps, 12).unwrap();

        assert_eq!(output.matches("Consider adding projects or learning").count(), 12);
        assert!(output.contains("... and 3 more"));
    }

    #[test]
    fn test_console_full_coverage() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_gaps(&[], 12).unwrap();
        assert!(output.contains("covers most keywords"));
    }

    #[test]
    fn test_json_report() {
        let generator = ReportGenerator::with_options(false, false, false);
        let json = generator.generate_report(&outcome(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["best"]["title"], "Analytics");
        assert_eq!(value["results"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_json_gaps_are_not_truncated() {
        let generator = ReportGenerator::default();
        let gaps: Vec<String> = (0..15).map(|i| format!("SKILL{}", i)).collect();

        let json = generator.generate_gaps(&gaps, 12, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total"], 15);
        assert_eq!(value["full_coverage"], false);
    }
}
