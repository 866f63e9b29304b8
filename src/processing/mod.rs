//! Keyword extraction, ATS scoring and improvement advice

pub mod keywords;
pub mod scoring;
pub mod advice;

pub use advice::{suggest_improvements, ImprovementSuggestions, ScoreLevel};
pub use keywords::{extract_keywords, KeywordExtractor, KeywordFrequency};
pub use scoring::{calculate_ats_score, AtsScore, AtsScorer};
