//! Integration tests for the resume ATS tool

use resume_ats::error::ResumeAtsError;
use resume_ats::input::manager::InputManager;
use resume_ats::output::report::{AnalysisReport, RankingReport};
use resume_ats::processing::{calculate_ats_score, AtsScorer, ScoreLevel};
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    // First extraction
    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    // Second extraction should use cache
    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_can_be_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    let path = Path::new("tests/fixtures/sample_resume.txt");

    manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeAtsError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeAtsError::InvalidInput(_))));
}

#[tokio::test]
async fn test_blank_document_rejected() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/blank.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeAtsError::EmptyDocument(_))));
}

#[tokio::test]
async fn test_size_limit() {
    let mut manager = InputManager::new().with_max_file_bytes(16);
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(
        result,
        Err(ResumeAtsError::InputTooLarge { limit: 16, .. })
    ));
}

#[tokio::test]
async fn test_score_fixture_files() {
    let mut manager = InputManager::new();
    let resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let score = calculate_ats_score(&resume, &job);

    assert_eq!(score.job_keyword_count(), 27);
    assert_eq!(score.matched_keywords.len(), 10);
    assert_eq!(score.match_percentage, 37);
    assert!(score.matched_keywords.contains(&"node.js".to_string()));
    assert!(score.matched_keywords.contains(&"typescript".to_string()));
    assert!(score.missing_keywords.contains(&"kubernetes".to_string()));
    assert!(score.missing_keywords.contains(&"graphql".to_string()));

    let report = AnalysisReport::new("sample_resume.txt", "sample_job.txt", score, 0);
    assert_eq!(report.score_level, ScoreLevel::NeedsImprovement);
    assert!(report.suggestions.quick_wins[0]
        .starts_with("Start by adding these top keywords: applications, backend, build, closely, cypress"));
}

#[tokio::test]
async fn test_rank_against_multiple_jobs() {
    let mut manager = InputManager::new();
    let resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    let scorer = AtsScorer::new();
    let mut scored = Vec::new();
    for job in ["tests/fixtures/sample_job_backend.md", "tests/fixtures/sample_job.txt"] {
        let text = manager.extract_text(Path::new(job)).await.unwrap();
        scored.push((job.to_string(), scorer.score(&resume, &text)));
    }

    let ranking = RankingReport::new("sample_resume.md", scored, 0);
    assert_eq!(
        ranking.best_match().map(|entry| entry.job_file.as_str()),
        Some("tests/fixtures/sample_job.txt")
    );
    assert!(ranking.entries[0].match_percentage > ranking.entries[1].match_percentage);
}
