//! Tiered improvement suggestions derived from an ATS score

use crate::processing::scoring::AtsScore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of missing keywords named in the low-score quick win
pub const TOP_MISSING_PREVIEW: usize = 5;

const MISSING_FALLBACK: &str = "industry skills";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLevel {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreLevel {
    pub fn from_score(score: u8) -> Self {
        template_for(score).level
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLevel::Excellent => "excellent",
            ScoreLevel::Good => "good",
            ScoreLevel::NeedsImprovement => "needs_improvement",
        }
    }

    /// Human readable band, e.g. for report headers
    pub fn label(&self) -> &'static str {
        match self {
            ScoreLevel::Excellent => "EXCELLENT MATCH",
            ScoreLevel::Good => "GOOD MATCH",
            ScoreLevel::NeedsImprovement => "NEEDS IMPROVEMENT",
        }
    }
}

impl fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advice for one score tier. Templates may reference `{missing_count}` and
/// `{top_keywords}`.
#[derive(Debug)]
pub struct TierTemplate {
    pub level: ScoreLevel,
    pub min_score: u8,
    pub main_message: &'static str,
    pub priority_actions: &'static [&'static str],
    pub quick_wins: &'static [&'static str],
}

/// Ordered from the highest threshold down; the last entry matches every score.
pub static TIER_TEMPLATES: [TierTemplate; 3] = [
    TierTemplate {
        level: ScoreLevel::Excellent,
        min_score: 80,
        main_message: "Your resume is a strong match for this position!",
        priority_actions: &[
            "Your resume covers most key requirements—apply with confidence",
            "Consider highlighting achievements that align with job requirements",
        ],
        quick_wins: &[
            "Quantify your accomplishments where possible",
            "Ensure your skills section is visible and up-to-date",
        ],
    },
    TierTemplate {
        level: ScoreLevel::Good,
        min_score: 60,
        main_message: "Your resume is a good match with room for improvement.",
        priority_actions: &[
            "Add the {missing_count} missing keywords to your resume",
            "Update your experience descriptions to include industry-specific terms",
            "Create a dedicated skills section highlighting technical abilities",
        ],
        quick_wins: &[
            "Use keywords from the job description in your resume",
            "Tailor your professional summary for this specific role",
            "Add quantifiable results to your job descriptions",
        ],
    },
    TierTemplate {
        level: ScoreLevel::NeedsImprovement,
        min_score: 0,
        main_message: "Your resume needs updates to better match this position.",
        priority_actions: &[
            "Add {missing_count} missing keywords to your resume",
            "Reorganize your resume to highlight relevant experience first",
            "Expand your skills section with technical and soft skills",
            "Consider this role may not be the best fit with your current background",
        ],
        quick_wins: &[
            "Start by adding these top keywords: {top_keywords}",
            "Reorder your experience to lead with most relevant roles",
            "Add metrics and achievements to your job descriptions",
            "Use the same terminology as the job posting",
        ],
    },
];

fn template_for(score: u8) -> &'static TierTemplate {
    let lowest = &TIER_TEMPLATES[TIER_TEMPLATES.len() - 1];
    TIER_TEMPLATES
        .iter()
        .find(|tier| score >= tier.min_score)
        .unwrap_or(lowest)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementSuggestions {
    pub score_level: ScoreLevel,
    pub main_message: String,
    pub priority_actions: Vec<String>,
    pub quick_wins: Vec<String>,
}

impl ImprovementSuggestions {
    pub fn from_score(score: &AtsScore) -> Self {
        suggest_improvements(
            score.match_percentage,
            score.missing_count(),
            &score.missing_keywords,
        )
    }
}

/// Build the advice payload for a score. Only the supplied count and keyword
/// list are used; nothing is recomputed from text.
pub fn suggest_improvements(
    score: u8,
    missing_count: usize,
    missing_keywords: &[String],
) -> ImprovementSuggestions {
    let template = template_for(score);

    let top_keywords = if missing_keywords.is_empty() {
        MISSING_FALLBACK.to_string()
    } else {
        missing_keywords
            .iter()
            .take(TOP_MISSING_PREVIEW)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let missing_count = missing_count.to_string();

    let render = |lines: &[&str]| -> Vec<String> {
        lines
            .iter()
            .map(|line| {
                line.replace("{missing_count}", &missing_count)
                    .replace("{top_keywords}", &top_keywords)
            })
            .collect()
    };

    ImprovementSuggestions {
        score_level: template.level,
        main_message: template.main_message.to_string(),
        priority_actions: render(template.priority_actions),
        quick_wins: render(template.quick_wins),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(suggest_improvements(100, 0, &[]).score_level, ScoreLevel::Excellent);
        assert_eq!(suggest_improvements(80, 0, &[]).score_level, ScoreLevel::Excellent);
        assert_eq!(suggest_improvements(79, 0, &[]).score_level, ScoreLevel::Good);
        assert_eq!(suggest_improvements(60, 0, &[]).score_level, ScoreLevel::Good);
        assert_eq!(suggest_improvements(59, 0, &[]).score_level, ScoreLevel::NeedsImprovement);
        assert_eq!(suggest_improvements(0, 0, &[]).score_level, ScoreLevel::NeedsImprovement);
    }

    #[test]
    fn test_excellent_is_not_interpolated() {
        let advice = suggest_improvements(92, 7, &keywords(&["kubernetes"]));

        assert_eq!(advice.main_message, "Your resume is a strong match for this position!");
        assert_eq!(advice.priority_actions.len(), 2);
        assert_eq!(advice.quick_wins.len(), 2);
        assert!(advice
            .priority_actions
            .iter()
            .chain(advice.quick_wins.iter())
            .all(|line| !line.contains('7') && !line.contains("kubernetes")));
    }

    #[test]
    fn test_good_references_missing_count() {
        let advice = suggest_improvements(75, 1, &keywords(&["kubernetes"]));

        assert_eq!(advice.priority_actions[0], "Add the 1 missing keywords to your resume");
        assert_eq!(advice.priority_actions.len(), 3);
        assert_eq!(advice.quick_wins[0], "Use keywords from the job description in your resume");
    }

    #[test]
    fn test_needs_improvement_names_top_five() {
        let missing = keywords(&["ansible", "aws", "docker", "helm", "kafka", "terraform"]);
        let advice = suggest_improvements(40, missing.len(), &missing);

        assert_eq!(advice.priority_actions[0], "Add 6 missing keywords to your resume");
        assert_eq!(advice.priority_actions.len(), 4);
        assert_eq!(
            advice.quick_wins[0],
            "Start by adding these top keywords: ansible, aws, docker, helm, kafka"
        );
    }

    #[test]
    fn test_needs_improvement_fallback_phrase() {
        let advice = suggest_improvements(10, 0, &[]);
        assert_eq!(
            advice.quick_wins[0],
            "Start by adding these top keywords: industry skills"
        );
    }

    #[test]
    fn test_count_is_taken_verbatim() {
        // The count is not derived from the list
        let advice = suggest_improvements(65, 12, &keywords(&["rust"]));
        assert_eq!(advice.priority_actions[0], "Add the 12 missing keywords to your resume");
    }

    #[test]
    fn test_score_level_serialization() {
        assert_eq!(ScoreLevel::NeedsImprovement.as_str(), "needs_improvement");
        assert_eq!(
            serde_json::to_string(&ScoreLevel::NeedsImprovement).unwrap(),
            "\"needs_improvement\""
        );
        assert_eq!(ScoreLevel::from_score(80).to_string(), "excellent");
    }

    #[test]
    fn test_templates_ordered_by_threshold() {
        assert!(TIER_TEMPLATES
            .windows(2)
            .all(|pair| pair[0].min_score > pair[1].min_score));
        assert_eq!(TIER_TEMPLATES[TIER_TEMPLATES.len() - 1].min_score, 0);
    }
}
