//! Rule-derived structural suggestions and suggestion calibration

pub mod calibration;
pub mod rules;

pub use calibration::{
    calibrate, CalibrationDirective, CalibrationMode, CalibrationSignals, FocusArea,
};
pub use rules::{
    generate_structural_suggestions, Priority, StructuralSuggestion, SuggestionCategory,
};

use serde::{Deserialize, Serialize};

/// A suggestion record as consumed downstream. Whether a record carries
/// calibration context is decided once, at construction, and carried as an
/// explicit variant instead of being probed for at every consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuggestionRecord {
    Legacy {
        suggestion: StructuralSuggestion,
    },
    Calibrated {
        suggestion: StructuralSuggestion,
        directive: CalibrationDirective,
    },
}

impl SuggestionRecord {
    pub fn from_parts(
        suggestion: StructuralSuggestion,
        directive: Option<CalibrationDirective>,
    ) -> Self {
        match directive {
            Some(directive) => SuggestionRecord::Calibrated {
                suggestion,
                directive,
            },
            None => SuggestionRecord::Legacy { suggestion },
        }
    }

    pub fn suggestion(&self) -> &StructuralSuggestion {
        match self {
            SuggestionRecord::Legacy { suggestion }
            | SuggestionRecord::Calibrated { suggestion, .. } => suggestion,
        }
    }

    pub fn directive(&self) -> Option<&CalibrationDirective> {
        match self {
            SuggestionRecord::Legacy { .. } => None,
            SuggestionRecord::Calibrated { directive, .. } => Some(directive),
        }
    }
}
