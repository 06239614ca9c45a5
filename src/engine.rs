//! Evaluation facade coordinating all scoring components

use crate::candidate::{
    derive_effective_candidate_type, detect_candidate_type, CandidateSignals, DetectedFrom,
    DetectionResult, FeatureExtractor, UserPreferences,
};
use crate::config::CandidateType;
use crate::error::Result;
use crate::resume::{HeadingResolver, ObservedSection, ResumeSections, SectionId};
use crate::scoring::{
    calculate_ats_score, validate_section_order, CompositeScore, KeywordEvidence, OrderValidation,
    QualificationComparison, QuantificationAnalyzer, ScoreInput,
};
use crate::suggest::{
    calibrate, generate_structural_suggestions, CalibrationDirective, CalibrationSignals,
    StructuralSuggestion,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// One scoring request: the extracted resume plus the externally supplied
/// job-description evidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub raw_text: String,
    pub sections: ResumeSections,
    pub observed_sections: Vec<ObservedSection>,
    pub keywords: Vec<KeywordEvidence>,
    pub qualifications: QualificationComparison,
    pub explicit_type: Option<CandidateType>,
    pub preferences: Option<UserPreferences>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub detection: DetectionResult,
    pub composite: CompositeScore,
    pub order: OrderValidation,
    pub quantification: crate::scoring::DensityResult,
    pub structural_suggestions: Vec<StructuralSuggestion>,
    pub calibration: CalibrationDirective,
    pub processing_time_ms: u64,
}

/// Coordinates feature extraction, type detection, scoring, structural
/// rules, and calibration for one resume/job-description pair.
pub struct ScoringEngine {
    feature_extractor: FeatureExtractor,
    quantification: QuantificationAnalyzer,
    heading_resolver: HeadingResolver,
}

impl ScoringEngine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            feature_extractor: FeatureExtractor::new(),
            quantification: QuantificationAnalyzer::new(),
            heading_resolver: HeadingResolver::new()?,
        })
    }

    /// Classify a raw heading line, for callers assembling
    /// `ObservedSection` records from extracted text.
    pub fn resolve_heading(&self, heading: &str) -> Option<SectionId> {
        self.heading_resolver.resolve(heading)
    }

    /// Run the full pipeline. Pure and synchronous; the same request always
    /// produces the same evaluation (modulo `processing_time_ms`).
    pub fn evaluate(&self, request: &EvaluationRequest) -> Result<Evaluation> {
        let start_time = Instant::now();

        // 1. Coarse signals from the raw text, then candidate type.
        let features = self.feature_extractor.extract(&request.raw_text);
        let detection = self.resolve_candidate_type(request, &features);
        let candidate_type = detection.candidate_type;
        log::debug!(
            "candidate type {} ({:?}, confidence {:.2})",
            candidate_type,
            detection.detected_from,
            detection.confidence
        );

        // 2. Weighted composite score.
        let composite = calculate_ats_score(&ScoreInput {
            candidate_type,
            sections: request.sections.clone(),
            keywords: request.keywords.clone(),
            qualifications: request.qualifications.clone(),
        });

        // 3. Ordering and structural rules.
        let observed_order: Vec<SectionId> = request
            .observed_sections
            .iter()
            .map(|o| o.section)
            .collect();
        let order = validate_section_order(&observed_order, candidate_type);
        let structural_suggestions = generate_structural_suggestions(
            candidate_type,
            &request.sections,
            &request.observed_sections,
        );

        // 4. Quantification density over achievement bullets.
        let bullets = achievement_bullets(&request.sections);
        let quantification = self.quantification.calculate_density(&bullets);

        // 5. Calibration for the downstream suggestion generator.
        let missing_keywords_count =
            request.keywords.iter().filter(|k| !k.matched).count() as u32;
        let calibration = calibrate(&CalibrationSignals {
            ats_score: composite.overall,
            experience_level: candidate_type,
            missing_keywords_count,
            quantification_density: quantification.density,
        });

        log::info!(
            "evaluation complete: overall {} ({}), {} structural suggestions, {:?} mode",
            composite.overall,
            composite.tier,
            structural_suggestions.len(),
            calibration.mode
        );

        Ok(Evaluation {
            detection,
            composite,
            order,
            quantification,
            structural_suggestions,
            calibration,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    fn resolve_candidate_type(
        &self,
        request: &EvaluationRequest,
        features: &crate::candidate::ResumeFeatures,
    ) -> DetectionResult {
        // A declared type or persisted job-type preference decides outright.
        if request.explicit_type.is_some()
            || request
                .preferences
                .as_ref()
                .is_some_and(|p| p.job_type.is_some())
        {
            let candidate_type = derive_effective_candidate_type(
                request.explicit_type,
                request.preferences.as_ref(),
            );
            return DetectionResult {
                candidate_type,
                confidence: 1.0,
                detected_from: DetectedFrom::Explicit,
            };
        }

        detect_candidate_type(&CandidateSignals {
            user_job_type: None,
            career_goal: request
                .preferences
                .as_ref()
                .and_then(|p| p.career_goal.clone()),
            resume_role_count: features.resume_role_count,
            has_active_education: features.has_active_education,
            total_experience_years: features.total_experience_years,
        })
    }
}

/// Bullets from the achievement-bearing sections (experience and projects).
fn achievement_bullets(sections: &ResumeSections) -> Vec<String> {
    let mut bullets = Vec::new();
    if let Some(experience) = sections.experience.as_deref() {
        bullets.extend(experience.iter().cloned());
    }
    if let Some(projects) = sections.projects.as_deref() {
        bullets.extend(projects.iter().cloned());
    }
    bullets.retain(|bullet| !bullet.trim().is_empty());
    bullets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achievement_bullets_merge_experience_and_projects() {
        let sections = ResumeSections {
            experience: Some(vec!["a".to_string(), " ".to_string()]),
            projects: Some(vec!["b".to_string()]),
            ..Default::default()
        };

        assert_eq!(achievement_bullets(&sections), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_request_evaluates_without_error() {
        let engine = ScoringEngine::new().unwrap();
        let evaluation = engine.evaluate(&EvaluationRequest::default()).unwrap();

        assert_eq!(
            evaluation.detection.candidate_type,
            CandidateType::Fulltime
        );
        assert_eq!(evaluation.detection.detected_from, DetectedFrom::Default);
        assert_eq!(evaluation.composite.breakdown.sections.score, 0.0);
        assert_eq!(evaluation.composite.breakdown.keywords.score, 0.0);
        assert_eq!(
            evaluation.composite.tier,
            crate::config::ScoreTier::NeedsWork
        );
        assert_eq!(evaluation.quantification.total_bullets, 0);
    }
}
