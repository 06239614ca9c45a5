//! Scoring components: section quality, ordering, quantification, and the
//! weighted composite

pub mod composite;
pub mod order;
pub mod quantification;
pub mod sections;

pub use composite::{
    calculate_ats_score, ComponentScore, CompositeScore, KeywordEvidence, KeywordImportance,
    QualificationComparison, ScoreBreakdown, ScoreInput,
};
pub use order::{validate_section_order, OrderValidation, OrderViolation};
pub use quantification::{
    CategoryCounts, DensityCategory, DensityResult, MetricMatches, MetricsFound,
    QuantificationAnalyzer,
};
pub use sections::{calculate_section_score, SectionAssessment, SectionScoreResult};
