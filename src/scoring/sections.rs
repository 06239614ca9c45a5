//! Section presence and quality scoring against per-type point tables

use crate::config::{section_configs, CandidateType, ContentMinimum, SectionConfig};
use crate::resume::{ResumeSections, SectionId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome for one section. Sections that are optional and absent never get
/// an entry; required-absent sections get `present: false` with zero score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionAssessment {
    pub present: bool,
    pub score: u32,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScoreResult {
    /// Overall section quality, scaled to 0-100.
    pub score: u32,
    pub breakdown: BTreeMap<SectionId, SectionAssessment>,
}

fn missing_message(section: SectionId) -> String {
    match section {
        SectionId::Summary => "No professional summary section".to_string(),
        SectionId::Skills => "No skills section".to_string(),
        SectionId::Experience => "No work experience section".to_string(),
        SectionId::Education => "No education section".to_string(),
        SectionId::Projects => "No projects section".to_string(),
        SectionId::Certifications => "No certifications section".to_string(),
    }
}

fn below_minimum_message(section: SectionId, minimum: ContentMinimum) -> String {
    match minimum {
        ContentMinimum::Length(n) => format!(
            "{} is shorter than the recommended {} characters",
            section.canonical_heading(),
            n
        ),
        ContentMinimum::Items(n) => format!(
            "{} section lists fewer than {} entries",
            section.canonical_heading(),
            n
        ),
        ContentMinimum::Bullets(n) => format!(
            "{} section has fewer than {} bullet points",
            section.canonical_heading(),
            n
        ),
    }
}

/// True when a required-but-absent section is excused because its fallback
/// section meets that fallback's own minimum.
fn requirement_waived(
    config: &SectionConfig,
    sections: &ResumeSections,
    candidate_type: CandidateType,
) -> bool {
    let Some(fallback) = config.fallback else {
        return false;
    };
    let fallback_config = crate::config::section_config(candidate_type, fallback);
    match sections.body(fallback) {
        Some(body) => body.measure() >= fallback_config.minimum.threshold(),
        None => false,
    }
}

/// Score each configured section for the candidate type.
///
/// `jd_keywords` is advisory only: when the skills section mentions none of
/// the supplied job-description keywords an issue is recorded, without
/// affecting points.
pub fn calculate_section_score(
    sections: &ResumeSections,
    candidate_type: CandidateType,
    jd_keywords: &[String],
) -> SectionScoreResult {
    let mut breakdown = BTreeMap::new();
    let mut earned: f64 = 0.0;
    let mut attainable: u32 = 0;

    for config in section_configs(candidate_type) {
        match sections.body(config.section) {
            None => {
                if !config.required || requirement_waived(config, sections, candidate_type) {
                    // No entry, no penalty.
                    continue;
                }
                attainable += config.max_points;
                breakdown.insert(
                    config.section,
                    SectionAssessment {
                        present: false,
                        score: 0,
                        issues: vec![missing_message(config.section)],
                    },
                );
            }
            Some(body) => {
                attainable += config.max_points;
                let threshold = config.minimum.threshold().max(1);
                let ratio = (body.measure() as f64 / threshold as f64).min(1.0);
                let points = (config.max_points as f64 * ratio).round() as u32;

                let mut issues = Vec::new();
                if body.measure() < config.minimum.threshold() {
                    issues.push(below_minimum_message(config.section, config.minimum));
                }
                if config.section == SectionId::Skills && !jd_keywords.is_empty() {
                    if let Some(skills) = sections.skills.as_deref() {
                        let mentions_any = jd_keywords.iter().any(|keyword| {
                            let keyword = keyword.to_lowercase();
                            skills
                                .iter()
                                .any(|skill| skill.to_lowercase().contains(&keyword))
                        });
                        if !mentions_any {
                            issues.push(
                                "Skills section does not mention key job description terms"
                                    .to_string(),
                            );
                        }
                    }
                }

                earned += config.max_points as f64 * ratio;
                breakdown.insert(
                    config.section,
                    SectionAssessment {
                        present: true,
                        score: points,
                        issues,
                    },
                );
            }
        }
    }

    // Scale earned points against what this resume was actually scored on,
    // so omitted optional sections carry no implicit penalty.
    let score = if attainable == 0 {
        0
    } else {
        ((earned / attainable as f64) * 100.0).round().min(100.0) as u32
    };

    SectionScoreResult { score, breakdown }
}
