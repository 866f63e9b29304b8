//! Output formatters for console and JSON presentation

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{AnalysisReport, RankingReport};
use crate::processing::advice::{ImprovementSuggestions, ScoreLevel};
use colored::{Color, Colorize};
use std::path::Path;

/// Keywords listed per line in console output
const KEYWORDS_PER_LINE: usize = 8;

/// Trait for formatting reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn format_ranking(&self, report: &RankingReport) -> Result<String>;
    fn format_suggestions(&self, score: u8, suggestions: &ImprovementSuggestions) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
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

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn level_color(level: ScoreLevel) -> Color {
        match level {
            ScoreLevel::Excellent => Color::Green,
            ScoreLevel::Good => Color::Yellow,
            ScoreLevel::NeedsImprovement => Color::Red,
        }
    }

    fn format_score_badge(&self, level: ScoreLevel) -> String {
        if self.use_colors {
            format!("[{}]", level.label().color(Self::level_color(level)).bold())
        } else {
            format!("[{}]", level.label())
        }
    }

    fn format_keyword_block(&self, keywords: &[String], color: Color) -> String {
        if keywords.is_empty() {
            return "  (none)\n".to_string();
        }

        keywords
            .chunks(KEYWORDS_PER_LINE)
            .map(|chunk| format!("  {}\n", self.colorize(&chunk.join(", "), color)))
            .collect()
    }

    fn format_advice(&self, suggestions: &ImprovementSuggestions) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("Recommended Actions", 2));
        output.push_str("Priority Actions:\n");
        for (i, action) in suggestions.priority_actions.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, action));
        }

        output.push_str("\nQuick Wins:\n");
        for (i, win) in suggestions.quick_wins.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, win));
        }

        output
    }

    fn format_interpretation(&self) -> String {
        let mut output = String::from("Score Interpretation:\n");
        output.push_str("  • 80-100%:   EXCELLENT MATCH - Strong candidate, high priority application\n");
        output.push_str("  • 60-79%:    GOOD MATCH - Competitive candidate, consider targeted updates\n");
        output.push_str("  • Below 60%: NEEDS IMPROVEMENT - Critical gaps to address\n");
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("ATS COMPATIBILITY ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));
        output.push_str(&format!("Resume: {}\n", report.resume_file));
        output.push_str(&format!("Job Description: {}\n", report.job_file));

        output.push_str(&self.format_header("ATS Match Score", 2));
        output.push_str(&format!(
            "Score: {}% {}\n",
            report.score.match_percentage,
            self.format_score_badge(report.score_level)
        ));
        output.push_str(&format!(
            "Matched {} of {} job keywords\n\n",
            report.score.matched_keywords.len(),
            report.score.job_keyword_count()
        ));
        output.push_str(&self.format_interpretation());
        output.push_str(&format!(
            "\nCurrent Status: {}\n",
            self.colorize(&report.suggestions.main_message, Color::Cyan)
        ));

        output.push_str(&self.format_header("✅ Matched Keywords", 3));
        output.push_str(&self.format_keyword_block(&report.score.matched_keywords, Color::Green));

        output.push_str(&self.format_header("⚠️  Missing Keywords", 3));
        output.push_str(&self.format_keyword_block(&report.score.missing_keywords, Color::Red));

        output.push_str(&self.format_advice(&report.suggestions));

        if self.detailed {
            if let Some(details) = &report.keyword_details {
                output.push_str(&self.format_header("🔤 Top Job Keywords", 3));
                for (i, entry) in details.job_keywords.iter().take(15).enumerate() {
                    output.push_str(&format!("  {}. {} ({})\n", i + 1, entry.keyword, entry.count));
                }

                output.push_str(&self.format_header("🔤 Top Resume Keywords", 3));
                for (i, entry) in details.resume_keywords.iter().take(15).enumerate() {
                    output.push_str(&format!("  {}. {} ({})\n", i + 1, entry.keyword, entry.count));
                }
            }
        }

        Ok(output)
    }

    fn format_ranking(&self, report: &RankingReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("ATS RANKING", 1));
        output.push_str(&format!("Resume: {}\n", report.resume_file));
        output.push_str(&format!(
            "Job descriptions analyzed: {} | Processing time: {}ms\n",
            report.entries.len(),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Results", 2));
        for (i, entry) in report.entries.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {:>3}% {} {} ({} matched, {} missing)\n",
                i + 1,
                entry.match_percentage,
                self.format_score_badge(entry.score_level),
                entry.job_file,
                entry.matched_count,
                entry.missing_count
            ));
        }

        Ok(output)
    }

    fn format_suggestions(&self, score: u8, suggestions: &ImprovementSuggestions) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("ATS IMPROVEMENT SUGGESTIONS", 1));
        output.push_str(&format!(
            "Score: {}% {}\n",
            score,
            self.format_score_badge(suggestions.score_level)
        ));
        output.push_str(&format!(
            "{}\n",
            self.colorize(&suggestions.main_message, Color::Cyan)
        ));
        output.push_str(&self.format_advice(suggestions));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_ranking(&self, report: &RankingReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_suggestions(&self, score: u8, suggestions: &ImprovementSuggestions) -> Result<String> {
        self.to_json(&serde_json::json!({
            "score": score,
            "suggestions": suggestions,
        }))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
        }
    }

    pub fn formatter(&self, format: &OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        self.formatter(format).format_report(report)
    }

    pub fn generate_ranking(&self, report: &RankingReport, format: &OutputFormat) -> Result<String> {
        self.formatter(format).format_ranking(report)
    }

    pub fn generate_suggestions(
        &self,
        score: u8,
        suggestions: &ImprovementSuggestions,
        format: &OutputFormat,
    ) -> Result<String> {
        self.formatter(format).format_suggestions(score, suggestions)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_ats{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_ats{}.json", base_name, timestamp_suffix),
    }
}
