//! Report structures produced by the CLI

use crate::processing::advice::{ImprovementSuggestions, ScoreLevel};
use crate::processing::keywords::KeywordFrequency;
use crate::processing::scoring::AtsScore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of scoring one resume against one job description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub resume_file: String,
    pub job_file: String,
    pub score: AtsScore,
    pub score_level: ScoreLevel,
    pub suggestions: ImprovementSuggestions,
    /// Keyword rankings, only filled in for detailed reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword_details: Option<KeywordDetails>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordDetails {
    pub resume_keywords: Vec<KeywordFrequency>,
    pub job_keywords: Vec<KeywordFrequency>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
    pub processing_time_ms: u64,
}

impl ReportMetadata {
    pub fn new(processing_time_ms: u64) -> Self {
        Self {
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            processing_time_ms,
        }
    }
}

impl AnalysisReport {
    pub fn new(
        resume_file: impl Into<String>,
        job_file: impl Into<String>,
        score: AtsScore,
        processing_time_ms: u64,
    ) -> Self {
        let suggestions = ImprovementSuggestions::from_score(&score);

        Self {
            resume_file: resume_file.into(),
            job_file: job_file.into(),
            score_level: suggestions.score_level,
            score,
            suggestions,
            keyword_details: None,
            metadata: ReportMetadata::new(processing_time_ms),
        }
    }

    pub fn with_keyword_details(mut self, details: KeywordDetails) -> Self {
        self.keyword_details = Some(details);
        self
    }
}

/// One row of a multi-job ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedJob {
    pub job_file: String,
    pub match_percentage: u8,
    pub score_level: ScoreLevel,
    pub matched_count: usize,
    pub missing_count: usize,
}

/// A resume scored against several job descriptions, best match first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub resume_file: String,
    pub entries: Vec<RankedJob>,
    pub metadata: ReportMetadata,
}

impl RankingReport {
    /// Sort scored jobs by descending percentage; equal scores keep their
    /// input order.
    pub fn new(
        resume_file: impl Into<String>,
        scored_jobs: Vec<(String, AtsScore)>,
        processing_time_ms: u64,
    ) -> Self {
        let mut entries: Vec<RankedJob> = scored_jobs
            .into_iter()
            .map(|(job_file, score)| RankedJob {
                job_file,
                match_percentage: score.match_percentage,
                score_level: ScoreLevel::from_score(score.match_percentage),
                matched_count: score.matched_keywords.len(),
                missing_count: score.missing_count(),
            })
            .collect();
        entries.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

        Self {
            resume_file: resume_file.into(),
            entries,
            metadata: ReportMetadata::new(processing_time_ms),
        }
    }

    pub fn best_match(&self) -> Option<&RankedJob> {
        self.entries.first()
    }
}
