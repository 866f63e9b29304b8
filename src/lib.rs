//! Keyword-overlap ATS scoring for resumes and job descriptions
//!
//! The core pipeline lives in [`processing`]: keywords are extracted from
//! each document, the resume is scored by how many of the job's keywords it
//! shares, and the score is turned into tiered improvement advice.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{Result, ResumeAtsError};
pub use processing::{
    calculate_ats_score, extract_keywords, suggest_improvements, AtsScore, AtsScorer,
    ImprovementSuggestions, KeywordExtractor, ScoreLevel,
};
