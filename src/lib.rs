//! Resume scoring and suggestion-calibration engine
//!
//! Pure, synchronous scoring core: weighted composite scoring with
//! per-candidate-type configuration tables, a declarative rule engine for
//! structural checks, pattern-based metric extraction, and signal-to-policy
//! calibration for a downstream content-suggestion generator. Document
//! parsing, keyword extraction, rendering, and persistence live with the
//! callers.

pub mod candidate;
pub mod config;
pub mod engine;
pub mod error;
pub mod resume;
pub mod scoring;
pub mod suggest;

pub use config::{CandidateType, ScoreTier, WeightProfile};
pub use engine::{Evaluation, EvaluationRequest, ScoringEngine};
pub use error::{Result, ResumeScorerError};
pub use resume::{ObservedSection, ResumeSections, SectionId};
