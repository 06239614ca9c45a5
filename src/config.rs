//! Per-candidate-type configuration tables for scoring and ordering
//!
//! All tables are process-wide constants keyed by the `CandidateType`
//! variant. Adding a candidate type means adding one row per table; no
//! scoring function branches on type beyond these lookups. The numeric
//! values are defaults reconstructed from observed scoring behavior and can
//! be revised here without touching any algorithm.

use crate::resume::SectionId;
use serde::{Deserialize, Serialize};

/// Career-stage classification driving every configuration lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateType {
    Coop,
    Fulltime,
    CareerChanger,
}

impl CandidateType {
    pub const ALL: [CandidateType; 3] = [
        CandidateType::Coop,
        CandidateType::Fulltime,
        CandidateType::CareerChanger,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CandidateType::Coop => "coop",
            CandidateType::Fulltime => "fulltime",
            CandidateType::CareerChanger => "career_changer",
        }
    }
}

impl std::fmt::Display for CandidateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Minimum content threshold for a section, in the unit that section is
/// measured in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMinimum {
    /// Minimum character count for free-text sections.
    Length(usize),
    /// Minimum entry count for list sections (skills, certifications).
    Items(usize),
    /// Minimum bullet count for achievement sections (experience, projects).
    Bullets(usize),
}

impl ContentMinimum {
    pub fn threshold(&self) -> usize {
        match self {
            ContentMinimum::Length(n) | ContentMinimum::Items(n) | ContentMinimum::Bullets(n) => {
                *n
            }
        }
    }
}

/// Scoring configuration for one section under one candidate type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub section: SectionId,
    pub required: bool,
    pub minimum: ContentMinimum,
    pub max_points: u32,
    /// When set, a missing required section is waived provided this other
    /// section meets its own minimum (co-op: projects can stand in for
    /// experience).
    pub fallback: Option<SectionId>,
}

const fn cfg(
    section: SectionId,
    required: bool,
    minimum: ContentMinimum,
    max_points: u32,
) -> SectionConfig {
    SectionConfig {
        section,
        required,
        minimum,
        max_points,
        fallback: None,
    }
}

// Per-type section tables. max_points sums: coop 115, fulltime 105,
// career_changer 110.
const COOP_SECTIONS: [SectionConfig; 6] = [
    cfg(SectionId::Summary, false, ContentMinimum::Length(120), 10),
    cfg(SectionId::Skills, true, ContentMinimum::Items(6), 25),
    SectionConfig {
        section: SectionId::Experience,
        required: true,
        minimum: ContentMinimum::Bullets(2),
        max_points: 25,
        fallback: Some(SectionId::Projects),
    },
    cfg(SectionId::Education, true, ContentMinimum::Length(80), 25),
    cfg(SectionId::Projects, true, ContentMinimum::Bullets(2), 25),
    cfg(
        SectionId::Certifications,
        false,
        ContentMinimum::Items(1),
        5,
    ),
];

const FULLTIME_SECTIONS: [SectionConfig; 6] = [
    cfg(SectionId::Summary, true, ContentMinimum::Length(200), 15),
    cfg(SectionId::Skills, true, ContentMinimum::Items(8), 20),
    cfg(SectionId::Experience, true, ContentMinimum::Bullets(3), 35),
    cfg(SectionId::Education, true, ContentMinimum::Length(60), 15),
    cfg(SectionId::Projects, false, ContentMinimum::Bullets(2), 15),
    cfg(
        SectionId::Certifications,
        false,
        ContentMinimum::Items(1),
        5,
    ),
];

const CAREER_CHANGER_SECTIONS: [SectionConfig; 6] = [
    cfg(SectionId::Summary, true, ContentMinimum::Length(250), 20),
    cfg(SectionId::Skills, true, ContentMinimum::Items(8), 25),
    cfg(SectionId::Experience, true, ContentMinimum::Bullets(2), 25),
    cfg(SectionId::Education, true, ContentMinimum::Length(60), 15),
    cfg(SectionId::Projects, true, ContentMinimum::Bullets(2), 20),
    cfg(
        SectionId::Certifications,
        false,
        ContentMinimum::Items(1),
        5,
    ),
];

/// Section configuration table for a candidate type, in canonical section
/// order.
pub fn section_configs(candidate_type: CandidateType) -> &'static [SectionConfig; 6] {
    match candidate_type {
        CandidateType::Coop => &COOP_SECTIONS,
        CandidateType::Fulltime => &FULLTIME_SECTIONS,
        CandidateType::CareerChanger => &CAREER_CHANGER_SECTIONS,
    }
}

/// Configuration for one section under a candidate type.
pub fn section_config(
    candidate_type: CandidateType,
    section: SectionId,
) -> &'static SectionConfig {
    section_configs(candidate_type)
        .iter()
        .find(|config| config.section == section)
        .expect("every section has a config row")
}

/// Component weights used by the composite score. Each profile sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightProfile {
    pub keywords: f64,
    pub qualification_fit: f64,
    pub sections: f64,
}

const COOP_WEIGHTS: WeightProfile = WeightProfile {
    keywords: 0.40,
    qualification_fit: 0.25,
    sections: 0.35,
};

const FULLTIME_WEIGHTS: WeightProfile = WeightProfile {
    keywords: 0.40,
    qualification_fit: 0.35,
    sections: 0.25,
};

// Career changers are judged less on prior qualifications and more on how
// the resume itself is built.
const CAREER_CHANGER_WEIGHTS: WeightProfile = WeightProfile {
    keywords: 0.40,
    qualification_fit: 0.20,
    sections: 0.40,
};

pub fn weight_profile(candidate_type: CandidateType) -> &'static WeightProfile {
    match candidate_type {
        CandidateType::Coop => &COOP_WEIGHTS,
        CandidateType::Fulltime => &FULLTIME_WEIGHTS,
        CandidateType::CareerChanger => &CAREER_CHANGER_WEIGHTS,
    }
}

// Expected relative section ordering per type. Co-op resumes lead with
// education; career changers foreground projects over prior-field
// experience.
const COOP_ORDER: [SectionId; 6] = [
    SectionId::Summary,
    SectionId::Education,
    SectionId::Skills,
    SectionId::Projects,
    SectionId::Experience,
    SectionId::Certifications,
];

const FULLTIME_ORDER: [SectionId; 6] = [
    SectionId::Summary,
    SectionId::Skills,
    SectionId::Experience,
    SectionId::Projects,
    SectionId::Education,
    SectionId::Certifications,
];

const CAREER_CHANGER_ORDER: [SectionId; 6] = [
    SectionId::Summary,
    SectionId::Skills,
    SectionId::Projects,
    SectionId::Experience,
    SectionId::Education,
    SectionId::Certifications,
];

pub fn expected_section_order(candidate_type: CandidateType) -> &'static [SectionId; 6] {
    match candidate_type {
        CandidateType::Coop => &COOP_ORDER,
        CandidateType::Fulltime => &FULLTIME_ORDER,
        CandidateType::CareerChanger => &CAREER_CHANGER_ORDER,
    }
}

/// Rank of a section in the expected order for a type (0 = first).
pub fn expected_rank(candidate_type: CandidateType, section: SectionId) -> usize {
    expected_section_order(candidate_type)
        .iter()
        .position(|s| *s == section)
        .expect("every section has an expected position")
}

/// Quality tier derived from the overall composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreTier {
    Excellent,
    Strong,
    Competitive,
    NeedsWork,
}

impl ScoreTier {
    pub fn from_overall(overall: u32) -> Self {
        match overall {
            85.. => ScoreTier::Excellent,
            70..=84 => ScoreTier::Strong,
            55..=69 => ScoreTier::Competitive,
            _ => ScoreTier::NeedsWork,
        }
    }
}

impl std::fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreTier::Excellent => write!(f, "Excellent"),
            ScoreTier::Strong => write!(f, "Strong"),
            ScoreTier::Competitive => write!(f, "Competitive"),
            ScoreTier::NeedsWork => write!(f, "Needs Work"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_points_sums_are_fixed_per_type() {
        let sums: Vec<(CandidateType, u32)> = CandidateType::ALL
            .iter()
            .map(|t| {
                (
                    *t,
                    section_configs(*t).iter().map(|c| c.max_points).sum::<u32>(),
                )
            })
            .collect();

        assert_eq!(sums[0], (CandidateType::Coop, 115));
        assert_eq!(sums[1], (CandidateType::Fulltime, 105));
        assert_eq!(sums[2], (CandidateType::CareerChanger, 110));
    }

    #[test]
    fn test_weight_profiles_sum_to_one() {
        for candidate_type in CandidateType::ALL {
            let profile = weight_profile(candidate_type);
            let total = profile.keywords + profile.qualification_fit + profile.sections;
            assert!((total - 1.0).abs() < 1e-9, "{} sums to {}", candidate_type, total);
        }
    }

    #[test]
    fn test_career_changer_weight_relationships() {
        let changer = weight_profile(CandidateType::CareerChanger);
        let fulltime = weight_profile(CandidateType::Fulltime);

        assert!(changer.sections > fulltime.sections);
        assert!(changer.qualification_fit < fulltime.qualification_fit);
    }

    #[test]
    fn test_coop_summary_is_optional_and_experience_has_fallback() {
        let summary = section_config(CandidateType::Coop, SectionId::Summary);
        assert!(!summary.required);

        let experience = section_config(CandidateType::Coop, SectionId::Experience);
        assert!(experience.required);
        assert_eq!(experience.fallback, Some(SectionId::Projects));
    }

    #[test]
    fn test_experience_precedes_education_for_fulltime() {
        assert!(
            expected_rank(CandidateType::Fulltime, SectionId::Experience)
                < expected_rank(CandidateType::Fulltime, SectionId::Education)
        );
        // and the reverse for co-op
        assert!(
            expected_rank(CandidateType::Coop, SectionId::Education)
                < expected_rank(CandidateType::Coop, SectionId::Experience)
        );
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(ScoreTier::from_overall(85), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_overall(84), ScoreTier::Strong);
        assert_eq!(ScoreTier::from_overall(70), ScoreTier::Strong);
        assert_eq!(ScoreTier::from_overall(69), ScoreTier::Competitive);
        assert_eq!(ScoreTier::from_overall(55), ScoreTier::Competitive);
        assert_eq!(ScoreTier::from_overall(54), ScoreTier::NeedsWork);
    }
}
