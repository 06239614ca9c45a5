//! Signal-to-policy mapping for the downstream content-suggestion generator
//!
//! The calibrator never rewrites anything itself. It reads the composite
//! score and gap signals and tells the external LLM step how much rewriting
//! to request and where to aim it.

use crate::config::CandidateType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationSignals {
    /// Overall composite score, 0-100.
    pub ats_score: u32,
    pub experience_level: CandidateType,
    pub missing_keywords_count: u32,
    /// Quantification density, 0-100.
    pub quantification_density: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalibrationMode {
    /// Broad rewriting: the resume needs restructuring, not polish.
    Transformation,
    /// Targeted rewrites of weak bullets and gaps.
    Improvement,
    /// Light-touch wording and keyword placement.
    Optimization,
    /// Near-maximal signals; confirm rather than rewrite.
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    Keywords,
    Quantification,
    Structure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationDirective {
    pub mode: CalibrationMode,
    pub target_suggestion_count: u32,
    pub focus_areas: Vec<FocusArea>,
}

struct CalibrationRule {
    applies: fn(&CalibrationSignals) -> bool,
    mode: CalibrationMode,
    base_count: u32,
}

fn needs_transformation(signals: &CalibrationSignals) -> bool {
    signals.ats_score < 55
        || (signals.quantification_density < 50 && signals.missing_keywords_count >= 5)
}

fn needs_improvement(signals: &CalibrationSignals) -> bool {
    signals.ats_score < 70
}

fn needs_optimization(signals: &CalibrationSignals) -> bool {
    signals.ats_score < 85
        || signals.quantification_density < 80
        || signals.missing_keywords_count > 2
}

fn always(_signals: &CalibrationSignals) -> bool {
    true
}

// First matching row wins; rows are ordered from weakest to healthiest
// signal combinations.
const DECISION_TABLE: &[CalibrationRule] = &[
    CalibrationRule {
        applies: needs_transformation,
        mode: CalibrationMode::Transformation,
        base_count: 12,
    },
    CalibrationRule {
        applies: needs_improvement,
        mode: CalibrationMode::Improvement,
        base_count: 8,
    },
    CalibrationRule {
        applies: needs_optimization,
        mode: CalibrationMode::Optimization,
        base_count: 5,
    },
    CalibrationRule {
        applies: always,
        mode: CalibrationMode::Validation,
        base_count: 2,
    },
];

fn focus_areas(signals: &CalibrationSignals) -> Vec<FocusArea> {
    let mut areas = Vec::new();
    if signals.missing_keywords_count >= 3 {
        areas.push(FocusArea::Keywords);
    }
    if signals.quantification_density < 50 {
        areas.push(FocusArea::Quantification);
    }
    if signals.ats_score < 55 {
        areas.push(FocusArea::Structure);
    }
    areas
}

/// Map the four signals to a suggestion-generation policy.
pub fn calibrate(signals: &CalibrationSignals) -> CalibrationDirective {
    let row = DECISION_TABLE
        .iter()
        .find(|rule| (rule.applies)(signals))
        .expect("decision table has a catch-all row");

    // Co-op resumes are a page or less; ask for fewer rewrites.
    let target_suggestion_count = match signals.experience_level {
        CandidateType::Coop => row.base_count.saturating_sub(2).max(2),
        _ => row.base_count,
    };

    CalibrationDirective {
        mode: row.mode,
        target_suggestion_count,
        focus_areas: focus_areas(signals),
    }
}
