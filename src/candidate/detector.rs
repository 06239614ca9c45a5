//! Candidate type detection from explicit preferences and resume signals

use crate::config::CandidateType;
use serde::{Deserialize, Serialize};

/// Inputs to detection. The optional fields carry user-declared intent;
/// the remaining fields come from the feature extractor and default to
/// zero/false when the resume text was unavailable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateSignals {
    pub user_job_type: Option<CandidateType>,
    pub career_goal: Option<String>,
    #[serde(default)]
    pub resume_role_count: u32,
    #[serde(default)]
    pub has_active_education: bool,
    #[serde(default)]
    pub total_experience_years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedFrom {
    Explicit,
    Signals,
    Default,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub candidate_type: CandidateType,
    pub confidence: f64,
    pub detected_from: DetectedFrom,
}

/// User account preferences, as persisted by the application layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub job_type: Option<String>,
    pub career_goal: Option<String>,
}

const CAREER_CHANGE_MARKERS: &[&str] = &[
    "career change",
    "career switch",
    "changing careers",
    "switching",
    "transition",
    "bootcamp",
    "new field",
];

const COOP_MARKERS: &[&str] = &["co-op", "coop", "internship", "intern"];

fn goal_mentions(goal: &str, markers: &[&str]) -> bool {
    let goal = goal.to_lowercase();
    markers.iter().any(|marker| goal.contains(marker))
}

/// Resolve the candidate type: explicit declaration first, then signal
/// inference, then the full-time default.
pub fn detect_candidate_type(signals: &CandidateSignals) -> DetectionResult {
    if let Some(declared) = signals.user_job_type {
        return DetectionResult {
            candidate_type: declared,
            confidence: 1.0,
            detected_from: DetectedFrom::Explicit,
        };
    }

    if let Some(goal) = signals.career_goal.as_deref() {
        if goal_mentions(goal, COOP_MARKERS) {
            return DetectionResult {
                candidate_type: CandidateType::Coop,
                confidence: 0.95,
                detected_from: DetectedFrom::Explicit,
            };
        }
        if goal_mentions(goal, CAREER_CHANGE_MARKERS) {
            return DetectionResult {
                candidate_type: CandidateType::CareerChanger,
                confidence: 0.9,
                detected_from: DetectedFrom::Explicit,
            };
        }
    }

    if !has_any_signal(signals) {
        return DetectionResult {
            candidate_type: CandidateType::Fulltime,
            confidence: 0.5,
            detected_from: DetectedFrom::Default,
        };
    }

    // Signal inference: students read as few roles, active education, short
    // experience span.
    let mut coop_score = 0u32;
    if signals.resume_role_count <= 2 {
        coop_score += 1;
    }
    if signals.has_active_education {
        coop_score += 2;
    }
    if signals.total_experience_years <= 2 {
        coop_score += 1;
    }

    if coop_score >= 3 {
        let confidence = if coop_score == 4 { 0.9 } else { 0.75 };
        return DetectionResult {
            candidate_type: CandidateType::Coop,
            confidence,
            detected_from: DetectedFrom::Signals,
        };
    }

    DetectionResult {
        candidate_type: CandidateType::Fulltime,
        confidence: 0.6,
        detected_from: DetectedFrom::Signals,
    }
}

fn has_any_signal(signals: &CandidateSignals) -> bool {
    signals.resume_role_count > 0
        || signals.has_active_education
        || signals.total_experience_years > 0
}

/// Effective type for a scoring request: an explicit type always wins, then
/// the persisted job-type preference ("coop" maps to co-op, anything else
/// to full-time), then full-time.
pub fn derive_effective_candidate_type(
    explicit: Option<CandidateType>,
    preferences: Option<&UserPreferences>,
) -> CandidateType {
    if let Some(candidate_type) = explicit {
        return candidate_type;
    }

    match preferences.and_then(|p| p.job_type.as_deref()) {
        Some(job_type) if job_type.eq_ignore_ascii_case("coop") => CandidateType::Coop,
        Some(_) => CandidateType::Fulltime,
        None => CandidateType::Fulltime,
    }
}
