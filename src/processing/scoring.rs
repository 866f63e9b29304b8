//! ATS (Applicant Tracking System) keyword overlap scoring
//!
//! The score answers "how much of what the job posting asks for does the
//! resume mention": the denominator is always the job's keyword set, so the
//! same resume scores differently against different postings.

use crate::processing::keywords::KeywordExtractor;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsScore {
    /// Integer percentage in `0..=100`, truncated rather than rounded
    pub match_percentage: u8,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

impl AtsScore {
    /// The "nothing to analyze" result
    pub fn zero() -> Self {
        Self {
            match_percentage: 0,
            matched_keywords: Vec::new(),
            missing_keywords: Vec::new(),
        }
    }

    pub fn missing_count(&self) -> usize {
        self.missing_keywords.len()
    }

    /// Number of distinct job keywords the score was computed against
    pub fn job_keyword_count(&self) -> usize {
        self.matched_keywords.len() + self.missing_keywords.len()
    }

    pub fn into_parts(self) -> (u8, Vec<String>, Vec<String>) {
        (self.match_percentage, self.matched_keywords, self.missing_keywords)
    }
}

/// Scores a resume against a job description using keyword set overlap
#[derive(Debug, Clone, Default)]
pub struct AtsScorer {
    extractor: KeywordExtractor,
}

impl AtsScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extractor(extractor: KeywordExtractor) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    pub fn score(&self, resume_text: &str, job_text: &str) -> AtsScore {
        if resume_text.is_empty() || job_text.is_empty() {
            return AtsScore::zero();
        }

        let job_keywords: HashSet<String> = self.extractor.extract(job_text).into_iter().collect();
        let resume_keywords: HashSet<String> =
            self.extractor.extract(resume_text).into_iter().collect();

        let mut matched: Vec<String> = job_keywords
            .intersection(&resume_keywords)
            .cloned()
            .collect();
        let mut missing: Vec<String> = job_keywords
            .difference(&resume_keywords)
            .cloned()
            .collect();

        let match_percentage = match_percentage(matched.len(), job_keywords.len());

        matched.sort();
        missing.sort();

        debug!(
            "ATS score {}%: {} matched, {} missing of {} job keywords",
            match_percentage,
            matched.len(),
            missing.len(),
            job_keywords.len()
        );

        AtsScore {
            match_percentage,
            matched_keywords: matched,
            missing_keywords: missing,
        }
    }
}

/// `floor(100 * matched / total)`, or 0 when there is nothing to match against
fn match_percentage(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // matched <= total, so the quotient never exceeds 100
    ((matched * 100) / total) as u8
}

/// Score with the default keyword extractor
pub fn calculate_ats_score(resume_text: &str, job_text: &str) -> AtsScore {
    AtsScorer::new().score(resume_text, job_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_return_zero() {
        assert_eq!(calculate_ats_score("", "Rust developer"), AtsScore::zero());
        assert_eq!(calculate_ats_score("Rust developer", ""), AtsScore::zero());
        assert_eq!(calculate_ats_score("", ""), AtsScore::zero());
    }

    #[test]
    fn test_percentage_truncates() {
        assert_eq!(match_percentage(2, 3), 66);
        assert_eq!(match_percentage(1, 3), 33);
        assert_eq!(match_percentage(29, 50), 58);
        assert_eq!(match_percentage(0, 7), 0);
        assert_eq!(match_percentage(7, 7), 100);
        assert_eq!(match_percentage(0, 0), 0);
    }

    #[test]
    fn test_two_of_three_keywords() {
        let score = calculate_ats_score("rust tokio", "rust tokio serde");

        assert_eq!(score.match_percentage, 66);
        assert_eq!(score.matched_keywords, vec!["rust", "tokio"]);
        assert_eq!(score.missing_keywords, vec!["serde"]);
    }

    #[test]
    fn test_scoring_is_asymmetric() {
        let resume = "rust tokio serde axum";
        let job = "rust tokio";

        assert_eq!(calculate_ats_score(resume, job).match_percentage, 100);
        assert_eq!(calculate_ats_score(job, resume).match_percentage, 50);
    }

    #[test]
    fn test_results_are_sorted() {
        let score = calculate_ats_score("zig python", "python zig kotlin ada elixir");

        assert_eq!(score.matched_keywords, vec!["python", "zig"]);
        assert_eq!(score.missing_keywords, vec!["ada", "elixir", "kotlin"]);
        assert_eq!(score.job_keyword_count(), 5);
    }

    #[test]
    fn test_whitespace_resume_is_scored_against_job() {
        let score = calculate_ats_score("   ", "python docker");

        assert_eq!(score.match_percentage, 0);
        assert!(score.matched_keywords.is_empty());
        assert_eq!(score.missing_keywords, vec!["docker", "python"]);
    }

    #[test]
    fn test_custom_extractor() {
        let scorer = AtsScorer::with_extractor(KeywordExtractor::with_options(3, ["docker"]));
        let score = scorer.score("python", "python docker");

        assert_eq!(score.match_percentage, 100);
        assert!(score.missing_keywords.is_empty());
    }

    #[test]
    fn test_into_parts() {
        let (percentage, matched, missing) = calculate_ats_score("rust", "rust go").into_parts();
        // "go" is shorter than three characters
        assert_eq!(percentage, 100);
        assert_eq!(matched, vec!["rust"]);
        assert!(missing.is_empty());
    }
}
