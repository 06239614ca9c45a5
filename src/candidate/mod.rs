//! Candidate career-stage signals and detection

pub mod detector;
pub mod features;

pub use detector::{
    derive_effective_candidate_type, detect_candidate_type, CandidateSignals, DetectedFrom,
    DetectionResult, UserPreferences,
};
pub use features::{FeatureExtractor, ResumeFeatures};
