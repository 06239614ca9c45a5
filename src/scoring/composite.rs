//! Weighted composite score combining keyword, qualification-fit, and
//! section components

use crate::config::{weight_profile, CandidateType, ScoreTier};
use crate::resume::{ResumeSections, SectionId};
use crate::scoring::sections::{calculate_section_score, SectionScoreResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordImportance {
    Required,
    Preferred,
}

/// One job-description keyword with the match evidence supplied by the
/// external keyword-extraction step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEvidence {
    pub keyword: String,
    pub importance: KeywordImportance,
    pub matched: bool,
    /// Where in the resume the keyword was found, when matched.
    pub placement: Option<SectionId>,
}

/// Degree/years/certification comparison supplied by the external
/// qualification-extraction step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualificationComparison {
    pub degree_match: bool,
    pub required_years: f64,
    pub resume_years: f64,
    pub required_certifications: Vec<String>,
    pub held_certifications: Vec<String>,
}

/// Input to the composite calculator. Keyword and qualification evidence
/// come from collaborators; sections are scored internally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreInput {
    pub candidate_type: CandidateType,
    pub sections: ResumeSections,
    pub keywords: Vec<KeywordEvidence>,
    pub qualifications: QualificationComparison,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub score: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keywords: ComponentScore,
    pub qualification_fit: ComponentScore,
    pub sections: ComponentScore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeScore {
    pub overall: u32,
    pub tier: ScoreTier,
    pub breakdown: ScoreBreakdown,
    pub section_detail: SectionScoreResult,
}

const REQUIRED_WEIGHT: f64 = 2.0;
const PREFERRED_WEIGHT: f64 = 1.0;
// Required keywords found in skills or experience earn a small placement
// bonus.
const PLACEMENT_BONUS: f64 = 2.0;

/// Keyword-match component, 0-100. Required keywords count double, and a
/// matched required keyword placed in the skills or experience section
/// earns a bonus, capped at 100.
pub(crate) fn keyword_component(keywords: &[KeywordEvidence]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }

    let weight_of = |k: &KeywordEvidence| match k.importance {
        KeywordImportance::Required => REQUIRED_WEIGHT,
        KeywordImportance::Preferred => PREFERRED_WEIGHT,
    };

    let total: f64 = keywords.iter().map(weight_of).sum();
    let matched: f64 = keywords
        .iter()
        .filter(|k| k.matched)
        .map(weight_of)
        .sum();

    let bonus: f64 = keywords
        .iter()
        .filter(|k| {
            k.matched
                && k.importance == KeywordImportance::Required
                && matches!(
                    k.placement,
                    Some(SectionId::Skills) | Some(SectionId::Experience)
                )
        })
        .count() as f64
        * PLACEMENT_BONUS;

    ((matched / total) * 100.0 + bonus).min(100.0)
}

/// Qualification-fit component, 0-100: degree match 40 points, years of
/// experience up to 40 points pro-rated against the requirement, and
/// certification coverage 20 points.
pub(crate) fn qualification_component(qualifications: &QualificationComparison) -> f64 {
    let degree = if qualifications.degree_match { 40.0 } else { 0.0 };

    let years = if qualifications.required_years <= 0.0 {
        40.0
    } else {
        40.0 * (qualifications.resume_years / qualifications.required_years).min(1.0)
    };

    let certifications = if qualifications.required_certifications.is_empty() {
        20.0
    } else {
        let held = qualifications
            .required_certifications
            .iter()
            .filter(|required| {
                qualifications
                    .held_certifications
                    .iter()
                    .any(|held| held.eq_ignore_ascii_case(required))
            })
            .count() as f64;
        20.0 * held / qualifications.required_certifications.len() as f64
    };

    degree + years + certifications
}

/// Combine the three component scores under the candidate type's weight
/// profile.
pub fn calculate_ats_score(input: &ScoreInput) -> CompositeScore {
    let profile = weight_profile(input.candidate_type);

    let jd_keyword_names: Vec<String> = input
        .keywords
        .iter()
        .map(|k| k.keyword.clone())
        .collect();
    let section_detail =
        calculate_section_score(&input.sections, input.candidate_type, &jd_keyword_names);

    let keywords_score = keyword_component(&input.keywords);
    let qualification_score = qualification_component(&input.qualifications);
    let sections_score = section_detail.score as f64;

    let weighted = keywords_score * profile.keywords
        + qualification_score * profile.qualification_fit
        + sections_score * profile.sections;
    let overall = weighted.round().clamp(0.0, 100.0) as u32;

    CompositeScore {
        overall,
        tier: ScoreTier::from_overall(overall),
        breakdown: ScoreBreakdown {
            keywords: ComponentScore {
                score: keywords_score,
                weight: profile.keywords,
            },
            qualification_fit: ComponentScore {
                score: qualification_score,
                weight: profile.qualification_fit,
            },
            sections: ComponentScore {
                score: sections_score,
                weight: profile.sections,
            },
        },
        section_detail,
    }
}
