//! Archetype detection: classifies a CV as technical, creative, business or general.
//!
//! Keyword hits are summed per category with source weights
//! (title ×3, skills ×2, everything else ×1). Each keyword counts once per source.
//! Highest total wins; ties resolve Technical → Creative → Business; all-zero is General.

use serde::{Deserialize, Serialize};

use crate::adapter::extract::collect_text;
use crate::models::cv::{CvData, SectionKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Technical,
    Creative,
    Business,
    #[default]
    General,
}

impl Archetype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Technical => "technical",
            Archetype::Creative => "creative",
            Archetype::Business => "business",
            Archetype::General => "general",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeScores {
    pub technical: u32,
    pub creative: u32,
    pub business: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeProfile {
    pub archetype: Archetype,
    pub scores: ArchetypeScores,
    /// Winning score over the sum of all scores; 0.0 when nothing matched.
    pub confidence: f64,
}

const TECHNICAL_KEYWORDS: &[&str] = &[
    "software", "engineer", "engineering", "developer", "programming", "rust", "python",
    "javascript", "typescript", "java", "golang", "kubernetes", "docker", "aws", "cloud",
    "backend", "frontend", "full stack", "fullstack", "devops", "machine learning", "data",
    "api", "database", "sql", "linux", "algorithms", "react", "node", "infrastructure",
];

const CREATIVE_KEYWORDS: &[&str] = &[
    "design", "designer", "ux", "ui", "art", "artist", "illustration", "photography",
    "video", "animation", "creative", "brand", "branding", "figma", "adobe", "photoshop",
    "illustrator", "writer", "writing", "content", "music", "film", "visual", "typography",
    "motion",
];

const BUSINESS_KEYWORDS: &[&str] = &[
    "manager", "management", "marketing", "sales", "strategy", "finance", "consulting",
    "consultant", "business", "operations", "product manager", "stakeholder", "revenue",
    "growth", "leadership", "mba", "analyst", "accounting", "budget", "negotiation",
    "partnerships", "executive",
];

const TITLE_WEIGHT: u32 = 3;
const SKILLS_WEIGHT: u32 = 2;
const BODY_WEIGHT: u32 = 1;

pub fn detect_archetype(cv: &CvData) -> ArchetypeProfile {
    let mut sources: Vec<(String, u32)> = Vec::new();

    if let Some(title) = cv.headline() {
        sources.push((title.to_lowercase(), TITLE_WEIGHT));
    }
    if let Some(about) = cv.about_text() {
        sources.push((about.to_lowercase(), BODY_WEIGHT));
    }
    for (section, weight) in [
        (SectionKind::Skills, SKILLS_WEIGHT),
        (SectionKind::Experience, BODY_WEIGHT),
        (SectionKind::Projects, BODY_WEIGHT),
    ] {
        if let Some(items) = cv.section_items(section) {
            let text = items.iter().map(collect_text).collect::<Vec<_>>().join(" ");
            sources.push((text, weight));
        }
    }

    let mut scores = ArchetypeScores::default();
    for (text, weight) in &sources {
        let normalized = normalize(text);
        scores.technical += count_hits(&normalized, TECHNICAL_KEYWORDS) * weight;
        scores.creative += count_hits(&normalized, CREATIVE_KEYWORDS) * weight;
        scores.business += count_hits(&normalized, BUSINESS_KEYWORDS) * weight;
    }

    profile_from_scores(scores)
}

fn profile_from_scores(scores: ArchetypeScores) -> ArchetypeProfile {
    let ranked = [
        (Archetype::Technical, scores.technical),
        (Archetype::Creative, scores.creative),
        (Archetype::Business, scores.business),
    ];
    let total: u32 = ranked.iter().map(|(_, s)| s).sum();

    // strict `>` keeps the earlier category on ties
    let (archetype, best) = ranked
        .iter()
        .fold((Archetype::General, 0u32), |(best_kind, best), &(kind, score)| {
            if score > best {
                (kind, score)
            } else {
                (best_kind, best)
            }
        });

    let confidence = if total == 0 {
        0.0
    } else {
        best as f64 / total as f64
    };

    ArchetypeProfile {
        archetype,
        scores,
        confidence,
    }
}

/// Lowercase words separated by single spaces, padded so `" kw "` matches whole words.
fn normalize(text: &str) -> String {
    let words: Vec<String> = text
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect();
    format!(" {} ", words.join(" "))
}

fn count_hits(normalized: &str, keywords: &[&str]) -> u32 {
    keywords
        .iter()
        .filter(|kw| normalized.contains(&format!(" {kw} ")))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cv(value: serde_json::Value) -> CvData {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_technical_profile() {
        let profile = detect_archetype(&cv(json!({
            "hero": { "name": "Linus", "title": "Senior Software Engineer" },
            "skills": ["Rust", "Kubernetes", "Linux"],
            "experience": [{ "title": "Backend developer", "description": "Built APIs on AWS" }]
        })));
        assert_eq!(profile.archetype, Archetype::Technical);
        assert!(profile.scores.technical > profile.scores.creative);
        assert!(profile.confidence > 0.5);
    }

    #[test]
    fn test_creative_profile() {
        let profile = detect_archetype(&cv(json!({
            "hero": { "name": "Frida", "title": "Visual Designer" },
            "skills": ["Figma", "Illustration", "Typography"],
            "projects": [{ "name": "Brand refresh", "description": "Motion and branding work" }]
        })));
        assert_eq!(profile.archetype, Archetype::Creative);
    }

    #[test]
    fn test_business_profile() {
        let profile = detect_archetype(&cv(json!({
            "hero": { "name": "Warren", "title": "Marketing Manager" },
            "skills": ["Negotiation", "Budget planning", "Strategy"],
        })));
        assert_eq!(profile.archetype, Archetype::Business);
    }

    #[test]
    fn test_no_keywords_is_general() {
        let profile = detect_archetype(&cv(json!({
            "hero": { "name": "Sam", "title": "Gardener" },
            "interests": ["Hiking"]
        })));
        assert_eq!(profile.archetype, Archetype::General);
        assert_eq!(profile.confidence, 0.0);
    }

    #[test]
    fn test_empty_cv_is_general() {
        let profile = detect_archetype(&CvData::default());
        assert_eq!(profile.archetype, Archetype::General);
        assert_eq!(profile.scores, ArchetypeScores::default());
    }

    #[test]
    fn test_tie_prefers_technical_then_creative() {
        let tie = profile_from_scores(ArchetypeScores {
            technical: 3,
            creative: 3,
            business: 1,
        });
        assert_eq!(tie.archetype, Archetype::Technical);

        let tie = profile_from_scores(ArchetypeScores {
            technical: 0,
            creative: 2,
            business: 2,
        });
        assert_eq!(tie.archetype, Archetype::Creative);
    }

    #[test]
    fn test_whole_word_matching() {
        // "ui" must not match inside "build", "art" not inside "start"
        let normalized = normalize("Build a startup");
        assert_eq!(count_hits(&normalized, &["ui", "art"]), 0);
        assert_eq!(count_hits(&normalize("Machine Learning, C#"), &["machine learning"]), 1);
    }

    #[test]
    fn test_title_weight_dominates_single_body_mention() {
        let profile = detect_archetype(&cv(json!({
            "hero": { "name": "Pat", "title": "Designer" },
            "summary": "Worked alongside software teams"
        })));
        assert_eq!(profile.scores.creative, 3);
        assert_eq!(profile.scores.technical, 1);
        assert_eq!(profile.archetype, Archetype::Creative);
    }
}
