//! Declarative rule engine for structural (non-AI) recommendations
//!
//! Each rule is a `{predicate, priority, category, message builder}` record
//! evaluated in fixed table order over the same context, so suggestion ids
//! stay stable and output is deterministic. Rules consult the per-type
//! configuration tables rather than branching on candidate type themselves.

use crate::config::{expected_section_order, section_config, CandidateType};
use crate::resume::{ObservedSection, ResumeSections, SectionId};
use crate::scoring::order::{validate_section_order, OrderValidation};
use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Moderate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    SectionOrder,
    SectionHeading,
    SectionPresence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralSuggestion {
    /// Stable, type-scoped id, e.g. "fulltime-rule-5".
    pub id: String,
    pub priority: Priority,
    pub category: SuggestionCategory,
    pub message: String,
    pub current_state: String,
    pub recommended_action: String,
}

/// Evaluation state shared by every rule.
struct RuleContext<'a> {
    candidate_type: CandidateType,
    sections: &'a ResumeSections,
    observed: &'a [ObservedSection],
    order: OrderValidation,
}

struct RuleText {
    message: String,
    current_state: String,
    recommended_action: String,
}

struct Rule {
    category: SuggestionCategory,
    priority: Priority,
    predicate: fn(&RuleContext) -> bool,
    build: fn(&RuleContext) -> RuleText,
}

fn section_missing(ctx: &RuleContext, section: SectionId) -> bool {
    let config = section_config(ctx.candidate_type, section);
    if !config.required || ctx.sections.is_present(section) {
        return false;
    }
    // A fallback section meeting its own minimum waives the requirement.
    if let Some(fallback) = config.fallback {
        let fallback_config = section_config(ctx.candidate_type, fallback);
        if let Some(body) = ctx.sections.body(fallback) {
            if body.measure() >= fallback_config.minimum.threshold() {
                return false;
            }
        }
    }
    true
}

fn missing_text(section: SectionId, action: &str) -> RuleText {
    RuleText {
        message: format!("Add a {} section", section.key()),
        current_state: format!("Resume has no {} section", section.key()),
        recommended_action: action.to_string(),
    }
}

// Heading alternates that screen fine in ATS parsers; anything else gets a
// rename suggestion toward the canonical heading.
const SAFE_HEADINGS: &[(&str, SectionId)] = &[
    ("summary", SectionId::Summary),
    ("professional summary", SectionId::Summary),
    ("skills", SectionId::Skills),
    ("technical skills", SectionId::Skills),
    ("experience", SectionId::Experience),
    ("work experience", SectionId::Experience),
    ("professional experience", SectionId::Experience),
    ("education", SectionId::Education),
    ("projects", SectionId::Projects),
    ("certifications", SectionId::Certifications),
];

fn normalize_heading(heading: &str) -> String {
    heading.trim().trim_end_matches(':').trim().to_lowercase()
}

fn heading_is_safe(observed: &ObservedSection) -> bool {
    let normalized = normalize_heading(&observed.heading);
    SAFE_HEADINGS
        .iter()
        .any(|(safe, section)| *safe == normalized && *section == observed.section)
}

fn nonstandard_headings<'a>(ctx: &'a RuleContext) -> Vec<&'a ObservedSection> {
    ctx.observed
        .iter()
        .filter(|observed| !heading_is_safe(observed))
        .collect()
}

/// Canonical heading closest to the raw text, used to phrase the rename.
fn closest_canonical(heading: &str) -> &'static str {
    let normalized = normalize_heading(heading);
    SectionId::ALL
        .iter()
        .map(|section| {
            let canonical = section.canonical_heading();
            (jaro_winkler(&normalized, &canonical.to_lowercase()), canonical)
        })
        .max_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(_, canonical)| canonical)
        .unwrap_or("Summary")
}

fn first_violation_text(ctx: &RuleContext) -> RuleText {
    let violation = ctx.order.violations[0];
    let expected = expected_section_order(ctx.candidate_type)
        .iter()
        .map(|s| s.canonical_heading())
        .collect::<Vec<_>>()
        .join(", ");

    RuleText {
        message: format!(
            "Move the {} section after {}",
            violation.before.key(),
            violation.after.key()
        ),
        current_state: format!(
            "{} appears before {}",
            violation.before.key(),
            violation.after.key()
        ),
        recommended_action: format!("Reorder sections to: {}", expected),
    }
}

fn heading_text(ctx: &RuleContext) -> RuleText {
    let nonstandard = nonstandard_headings(ctx);
    let listed = nonstandard
        .iter()
        .map(|observed| observed.heading.trim())
        .collect::<Vec<_>>()
        .join(", ");
    let renames = nonstandard
        .iter()
        .map(|observed| {
            format!(
                "\"{}\" to \"{}\"",
                observed.heading.trim(),
                closest_canonical(&observed.heading)
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    RuleText {
        message: "Use standard section headings".to_string(),
        current_state: format!("Nonstandard headings: {}", listed),
        recommended_action: format!("Rename {}", renames),
    }
}

fn summary_missing(ctx: &RuleContext) -> bool {
    section_missing(ctx, SectionId::Summary)
}
fn skills_missing(ctx: &RuleContext) -> bool {
    section_missing(ctx, SectionId::Skills)
}
fn experience_missing(ctx: &RuleContext) -> bool {
    section_missing(ctx, SectionId::Experience)
}
fn education_missing(ctx: &RuleContext) -> bool {
    section_missing(ctx, SectionId::Education)
}
fn projects_missing(ctx: &RuleContext) -> bool {
    section_missing(ctx, SectionId::Projects)
}
fn order_violated(ctx: &RuleContext) -> bool {
    !ctx.order.is_correct_order
}
fn has_nonstandard_heading(ctx: &RuleContext) -> bool {
    !nonstandard_headings(ctx).is_empty()
}

fn summary_missing_text(_ctx: &RuleContext) -> RuleText {
    missing_text(
        SectionId::Summary,
        "Open with a 2-3 sentence summary targeting the role",
    )
}
fn skills_missing_text(_ctx: &RuleContext) -> RuleText {
    missing_text(
        SectionId::Skills,
        "List the tools and technologies the job description asks for",
    )
}
fn experience_missing_text(_ctx: &RuleContext) -> RuleText {
    missing_text(
        SectionId::Experience,
        "Add work history with achievement-oriented bullet points",
    )
}
fn education_missing_text(_ctx: &RuleContext) -> RuleText {
    missing_text(
        SectionId::Education,
        "List your degree, school, and graduation date",
    )
}
fn projects_missing_text(_ctx: &RuleContext) -> RuleText {
    missing_text(SectionId::Projects, "Show 2-3 projects with concrete outcomes")
}

// Table order defines suggestion ids; append new rules at the end.
const RULES: &[Rule] = &[
    Rule {
        category: SuggestionCategory::SectionPresence,
        priority: Priority::High,
        predicate: summary_missing,
        build: summary_missing_text,
    },
    Rule {
        category: SuggestionCategory::SectionPresence,
        priority: Priority::Critical,
        predicate: skills_missing,
        build: skills_missing_text,
    },
    Rule {
        category: SuggestionCategory::SectionPresence,
        priority: Priority::Critical,
        predicate: experience_missing,
        build: experience_missing_text,
    },
    Rule {
        category: SuggestionCategory::SectionPresence,
        priority: Priority::High,
        predicate: education_missing,
        build: education_missing_text,
    },
    Rule {
        category: SuggestionCategory::SectionPresence,
        priority: Priority::High,
        predicate: projects_missing,
        build: projects_missing_text,
    },
    Rule {
        category: SuggestionCategory::SectionOrder,
        priority: Priority::High,
        predicate: order_violated,
        build: first_violation_text,
    },
    Rule {
        category: SuggestionCategory::SectionHeading,
        priority: Priority::Moderate,
        predicate: has_nonstandard_heading,
        build: heading_text,
    },
];

/// Evaluate the rule table against section presence, ordering, and heading
/// state. Output order follows the table; callers sort or truncate for
/// presentation.
pub fn generate_structural_suggestions(
    candidate_type: CandidateType,
    sections: &ResumeSections,
    observed: &[ObservedSection],
) -> Vec<StructuralSuggestion> {
    let observed_order: Vec<SectionId> = observed.iter().map(|o| o.section).collect();
    let ctx = RuleContext {
        candidate_type,
        sections,
        observed,
        order: validate_section_order(&observed_order, candidate_type),
    };

    RULES
        .iter()
        .enumerate()
        .filter(|(_, rule)| (rule.predicate)(&ctx))
        .map(|(index, rule)| {
            let text = (rule.build)(&ctx);
            StructuralSuggestion {
                id: format!("{}-rule-{}", candidate_type, index + 1),
                priority: rule.priority,
                category: rule.category,
                message: text.message,
                current_state: text.current_state,
                recommended_action: text.recommended_action,
            }
        })
        .collect()
}
