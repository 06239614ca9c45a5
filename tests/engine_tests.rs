//! Integration tests for the resume scoring engine

use resume_scorer::candidate::UserPreferences;
use resume_scorer::config::{CandidateType, ScoreTier};
use resume_scorer::scoring::{KeywordEvidence, KeywordImportance, QualificationComparison};
use resume_scorer::suggest::{CalibrationMode, SuggestionCategory};
use resume_scorer::{EvaluationRequest, ObservedSection, ResumeSections, ScoringEngine, SectionId};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn keyword(name: &str, required: bool, matched: bool) -> KeywordEvidence {
    KeywordEvidence {
        keyword: name.to_string(),
        importance: if required {
            KeywordImportance::Required
        } else {
            KeywordImportance::Preferred
        },
        matched,
        placement: if matched { Some(SectionId::Skills) } else { None },
    }
}

fn strong_fulltime_request() -> EvaluationRequest {
    let sections = ResumeSections {
        summary: Some(
            "Backend engineer with eight years of experience designing and operating \
             high-throughput data services. Led the replatforming of a payments pipeline \
             onto Rust microservices, cutting infrastructure spend while improving \
             reliability and on-call health for three teams."
                .to_string(),
        ),
        skills: Some(
            ["Rust", "Python", "PostgreSQL", "Kafka", "Docker", "Kubernetes", "AWS", "Terraform"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ),
        experience: Some(vec![
            "Cut p99 latency by 40% by rewriting the ingestion path in Rust".to_string(),
            "Scaled stream processing to 2M events per minute across 3 regions".to_string(),
            "Reduced infrastructure spend by $400k annually through capacity planning".to_string(),
            "Mentored 6 engineers over 2 years of production on-call rotations".to_string(),
        ]),
        education: Some(
            "B.S. Computer Science, State University, 2014. Graduated with honors.".to_string(),
        ),
        projects: Some(vec![
            "Built an open-source metrics exporter with 500+ GitHub stars".to_string(),
            "Maintains a Rust parsing crate downloaded 20k times per month".to_string(),
        ]),
        certifications: None,
    };

    let observed_sections = vec![
        ObservedSection::new("Summary", SectionId::Summary),
        ObservedSection::new("Skills", SectionId::Skills),
        ObservedSection::new("Experience", SectionId::Experience),
        ObservedSection::new("Projects", SectionId::Projects),
        ObservedSection::new("Education", SectionId::Education),
    ];

    EvaluationRequest {
        raw_text: "Jan 2016 - Dec 2019 ... Jan 2020 to Present ... 2014".to_string(),
        sections,
        observed_sections,
        keywords: vec![
            keyword("rust", true, true),
            keyword("kafka", true, true),
            keyword("kubernetes", true, true),
            keyword("postgresql", false, true),
            keyword("terraform", false, true),
        ],
        qualifications: QualificationComparison {
            degree_match: true,
            required_years: 5.0,
            resume_years: 8.0,
            required_certifications: vec![],
            held_certifications: vec![],
        },
        explicit_type: None,
        preferences: None,
    }
}

fn weak_request() -> EvaluationRequest {
    EvaluationRequest {
        raw_text: "Jane Doe. Looking for work.".to_string(),
        sections: ResumeSections {
            experience: Some(vec![
                "Responsible for various tasks".to_string(),
                "Worked on team projects".to_string(),
            ]),
            ..Default::default()
        },
        observed_sections: vec![ObservedSection::new("Experience", SectionId::Experience)],
        keywords: vec![
            keyword("python", true, false),
            keyword("sql", true, false),
            keyword("airflow", true, false),
            keyword("spark", false, false),
            keyword("dbt", false, false),
            keyword("snowflake", false, false),
        ],
        qualifications: QualificationComparison {
            degree_match: false,
            required_years: 4.0,
            resume_years: 0.0,
            required_certifications: vec!["AWS Certified Developer".to_string()],
            held_certifications: vec![],
        },
        explicit_type: None,
        preferences: None,
    }
}

#[test]
fn test_strong_resume_scores_high_and_validates() {
    init_logging();
    let engine = ScoringEngine::new().unwrap();

    let evaluation = engine.evaluate(&strong_fulltime_request()).unwrap();

    assert_eq!(evaluation.detection.candidate_type, CandidateType::Fulltime);
    assert!(evaluation.composite.overall >= 85);
    assert_eq!(evaluation.composite.tier, ScoreTier::Excellent);
    assert!(evaluation.order.is_correct_order);
    assert!(evaluation.structural_suggestions.is_empty());
    assert_eq!(evaluation.quantification.density, 100);
    assert_eq!(evaluation.calibration.mode, CalibrationMode::Validation);
    assert!(evaluation.calibration.focus_areas.is_empty());
}

#[test]
fn test_weak_resume_triggers_transformation() {
    init_logging();
    let engine = ScoringEngine::new().unwrap();

    let evaluation = engine.evaluate(&weak_request()).unwrap();

    assert_eq!(evaluation.composite.tier, ScoreTier::NeedsWork);
    assert_eq!(evaluation.calibration.mode, CalibrationMode::Transformation);
    assert_eq!(evaluation.calibration.focus_areas.len(), 3);
    assert!(evaluation
        .structural_suggestions
        .iter()
        .any(|s| s.category == SuggestionCategory::SectionPresence));
    assert_eq!(evaluation.quantification.density, 0);
}

#[test]
fn test_coop_waiver_flows_through_composite() {
    let engine = ScoringEngine::new().unwrap();

    let mut request = strong_fulltime_request();
    request.explicit_type = Some(CandidateType::Coop);
    request.sections.experience = None;
    request
        .observed_sections
        .retain(|o| o.section != SectionId::Experience);
    request.observed_sections = vec![
        ObservedSection::new("Summary", SectionId::Summary),
        ObservedSection::new("Education", SectionId::Education),
        ObservedSection::new("Skills", SectionId::Skills),
        ObservedSection::new("Projects", SectionId::Projects),
    ];

    let evaluation = engine.evaluate(&request).unwrap();

    assert!(!evaluation
        .composite
        .section_detail
        .breakdown
        .contains_key(&SectionId::Experience));
    assert!(evaluation.composite.breakdown.sections.score > 70.0);
    assert!(evaluation
        .structural_suggestions
        .iter()
        .all(|s| s.category != SuggestionCategory::SectionPresence));
}

#[test]
fn test_candidate_types_score_distinctly() {
    let engine = ScoringEngine::new().unwrap();
    let base = weak_request();

    let mut overalls = Vec::new();
    for candidate_type in CandidateType::ALL {
        let mut request = base.clone();
        request.explicit_type = Some(candidate_type);
        overalls.push(engine.evaluate(&request).unwrap().composite.overall);
    }

    assert_ne!(overalls[0], overalls[1]);
    assert_ne!(overalls[1], overalls[2]);
    assert_ne!(overalls[0], overalls[2]);
}

#[test]
fn test_preference_decides_candidate_type() {
    let engine = ScoringEngine::new().unwrap();

    let mut request = strong_fulltime_request();
    request.preferences = Some(UserPreferences {
        job_type: Some("coop".to_string()),
        career_goal: None,
    });

    let evaluation = engine.evaluate(&request).unwrap();
    assert_eq!(evaluation.detection.candidate_type, CandidateType::Coop);
    assert_eq!(evaluation.detection.confidence, 1.0);
}

#[test]
fn test_evaluation_serializes_round_trip() {
    let engine = ScoringEngine::new().unwrap();
    let evaluation = engine.evaluate(&strong_fulltime_request()).unwrap();

    let json = serde_json::to_string(&evaluation).unwrap();
    let restored: resume_scorer::Evaluation = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.composite.overall, evaluation.composite.overall);
    assert_eq!(restored.calibration, evaluation.calibration);
}

#[test]
fn test_heading_resolution_exposed_for_callers() {
    let engine = ScoringEngine::new().unwrap();

    assert_eq!(
        engine.resolve_heading("WORK HISTORY"),
        Some(SectionId::Experience)
    );
    assert_eq!(engine.resolve_heading("Hobbies"), None);
}
