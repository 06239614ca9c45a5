//! Section order validation against per-type expected sequences

use crate::config::{expected_rank, CandidateType};
use crate::resume::SectionId;
use serde::{Deserialize, Serialize};

/// A pair of sections observed in the wrong relative order: `before` was
/// seen earlier in the document but the expected order puts `after` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderViolation {
    pub before: SectionId,
    pub after: SectionId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderValidation {
    pub is_correct_order: bool,
    pub violations: Vec<OrderViolation>,
}

/// Walk the observed section sequence and record every pair that inverts
/// the expected partial order for the candidate type.
pub fn validate_section_order(
    observed: &[SectionId],
    candidate_type: CandidateType,
) -> OrderValidation {
    let mut violations = Vec::new();

    for (i, &earlier) in observed.iter().enumerate() {
        for &later in &observed[i + 1..] {
            if expected_rank(candidate_type, earlier) > expected_rank(candidate_type, later) {
                violations.push(OrderViolation {
                    before: earlier,
                    after: later,
                });
            }
        }
    }

    OrderValidation {
        is_correct_order: violations.is_empty(),
        violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_order_is_valid() {
        let observed = [
            SectionId::Summary,
            SectionId::Skills,
            SectionId::Experience,
            SectionId::Projects,
            SectionId::Education,
        ];
        let result = validate_section_order(&observed, CandidateType::Fulltime);

        assert!(result.is_correct_order);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_education_before_experience_flags_fulltime() {
        let observed = [
            SectionId::Summary,
            SectionId::Skills,
            SectionId::Education,
            SectionId::Experience,
        ];
        let result = validate_section_order(&observed, CandidateType::Fulltime);

        assert!(!result.is_correct_order);
        assert_eq!(
            result.violations,
            vec![OrderViolation {
                before: SectionId::Education,
                after: SectionId::Experience,
            }]
        );
    }

    #[test]
    fn test_same_sequence_is_fine_for_coop() {
        // Co-op expects education early, so the order that fails full-time
        // passes here.
        let observed = [
            SectionId::Summary,
            SectionId::Education,
            SectionId::Skills,
            SectionId::Projects,
            SectionId::Experience,
        ];
        let result = validate_section_order(&observed, CandidateType::Coop);

        assert!(result.is_correct_order);
    }

    #[test]
    fn test_multiple_violations_are_all_recorded() {
        let observed = [
            SectionId::Certifications,
            SectionId::Education,
            SectionId::Experience,
            SectionId::Summary,
        ];
        let result = validate_section_order(&observed, CandidateType::Fulltime);

        assert!(!result.is_correct_order);
        // certifications precedes all three, education precedes experience
        // and summary, experience precedes summary
        assert_eq!(result.violations.len(), 6);
    }

    #[test]
    fn test_partial_sequences_validate() {
        let observed = [SectionId::Skills, SectionId::Experience];
        let result = validate_section_order(&observed, CandidateType::Fulltime);

        assert!(result.is_correct_order);
    }

    #[test]
    fn test_empty_sequence_is_correct() {
        let result = validate_section_order(&[], CandidateType::CareerChanger);
        assert!(result.is_correct_order);
    }
}
