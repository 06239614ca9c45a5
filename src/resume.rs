//! Structured resume input model and section heading resolution

use crate::error::{Result, ResumeScorerError};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};

/// The six resume sections the scoring engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Summary,
    Skills,
    Experience,
    Education,
    Projects,
    Certifications,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Summary,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Projects,
        SectionId::Certifications,
    ];

    /// Canonical ATS-safe heading for the section.
    pub fn canonical_heading(&self) -> &'static str {
        match self {
            SectionId::Summary => "Summary",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Education => "Education",
            SectionId::Projects => "Projects",
            SectionId::Certifications => "Certifications",
        }
    }

    /// Key used in serialized breakdowns and suggestion text.
    pub fn key(&self) -> &'static str {
        match self {
            SectionId::Summary => "summary",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Projects => "projects",
            SectionId::Certifications => "certifications",
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Structured section content as supplied by the extraction layer.
///
/// Free-text sections (summary, education) arrive as strings; list-shaped
/// sections arrive as item or bullet arrays. `None` means the section was
/// not found in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeSections {
    pub summary: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<Vec<String>>,
    pub education: Option<String>,
    pub projects: Option<Vec<String>>,
    pub certifications: Option<Vec<String>>,
}

/// A view of one section's content, normalized for measurement.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody<'a> {
    Text(&'a str),
    Items(&'a [String]),
}

impl SectionBody<'_> {
    /// Size of the content in the unit its section is configured in
    /// (characters for text, entries for item/bullet lists).
    pub fn measure(&self) -> usize {
        match self {
            SectionBody::Text(text) => text.trim().chars().count(),
            SectionBody::Items(items) => {
                items.iter().filter(|item| !item.trim().is_empty()).count()
            }
        }
    }
}

impl ResumeSections {
    /// Content of a section, or `None` when absent or effectively empty.
    pub fn body(&self, section: SectionId) -> Option<SectionBody<'_>> {
        let body = match section {
            SectionId::Summary => SectionBody::Text(self.summary.as_deref()?),
            SectionId::Skills => SectionBody::Items(self.skills.as_deref()?),
            SectionId::Experience => SectionBody::Items(self.experience.as_deref()?),
            SectionId::Education => SectionBody::Text(self.education.as_deref()?),
            SectionId::Projects => SectionBody::Items(self.projects.as_deref()?),
            SectionId::Certifications => SectionBody::Items(self.certifications.as_deref()?),
        };

        if body.measure() == 0 {
            None
        } else {
            Some(body)
        }
    }

    pub fn is_present(&self, section: SectionId) -> bool {
        self.body(section).is_some()
    }

    /// Bullet count of a list-shaped section (0 for absent or text sections).
    pub fn bullet_count(&self, section: SectionId) -> usize {
        match self.body(section) {
            Some(SectionBody::Items(items)) => {
                items.iter().filter(|item| !item.trim().is_empty()).count()
            }
            _ => 0,
        }
    }
}

/// A section as it appeared in the document: its raw heading text plus the
/// section it resolved to. Order of these records is the observed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedSection {
    pub heading: String,
    pub section: SectionId,
}

impl ObservedSection {
    pub fn new(heading: impl Into<String>, section: SectionId) -> Self {
        Self {
            heading: heading.into(),
            section,
        }
    }
}

/// Maps raw heading text to a known section using an alias table.
pub struct HeadingResolver {
    matcher: AhoCorasick,
    targets: Vec<SectionId>,
}

// Alias lists ordered so that more specific phrases sit before the bare
// section words they contain (LeftmostLongest handles overlap within one
// heading).
const HEADING_ALIASES: &[(&str, SectionId)] = &[
    ("professional summary", SectionId::Summary),
    ("career summary", SectionId::Summary),
    ("summary of qualifications", SectionId::Summary),
    ("summary", SectionId::Summary),
    ("profile", SectionId::Summary),
    ("objective", SectionId::Summary),
    ("about me", SectionId::Summary),
    ("technical skills", SectionId::Skills),
    ("core competencies", SectionId::Skills),
    ("areas of expertise", SectionId::Skills),
    ("skills", SectionId::Skills),
    ("professional experience", SectionId::Experience),
    ("work experience", SectionId::Experience),
    ("employment history", SectionId::Experience),
    ("work history", SectionId::Experience),
    ("experience", SectionId::Experience),
    ("education", SectionId::Education),
    ("academic background", SectionId::Education),
    ("academics", SectionId::Education),
    ("notable projects", SectionId::Projects),
    ("personal projects", SectionId::Projects),
    ("projects", SectionId::Projects),
    ("portfolio", SectionId::Projects),
    ("certifications", SectionId::Certifications),
    ("certificates", SectionId::Certifications),
    ("licenses", SectionId::Certifications),
];

impl HeadingResolver {
    pub fn new() -> Result<Self> {
        let patterns: Vec<&str> = HEADING_ALIASES.iter().map(|(alias, _)| *alias).collect();
        let targets: Vec<SectionId> = HEADING_ALIASES.iter().map(|(_, id)| *id).collect();

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| {
                ResumeScorerError::MatcherConstruction(format!(
                    "Failed to build heading matcher: {}",
                    e
                ))
            })?;

        Ok(Self { matcher, targets })
    }

    /// Resolve a raw heading line to a known section, if any alias occurs
    /// within it.
    pub fn resolve(&self, heading: &str) -> Option<SectionId> {
        self.matcher
            .find(heading)
            .map(|mat| self.targets[mat.pattern().as_usize()])
    }
}
