//! Coarse signal extraction from raw resume text
//!
//! The three signals feed candidate-type detection: distinct role
//! date-ranges, in-progress education markers, and total span of years
//! mentioned anywhere in the document. Extraction is best-effort; text with
//! no recognizable patterns simply yields zeros.

use chrono::{Datelike, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeFeatures {
    pub resume_role_count: u32,
    pub has_active_education: bool,
    pub total_experience_years: u32,
}

pub struct FeatureExtractor {
    date_range_regex: Regex,
    year_regex: Regex,
    expected_graduation_regex: Regex,
    degree_candidate_regex: Regex,
    graduating_year_regex: Regex,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractor {
    pub fn new() -> Self {
        // "Jan 2021 - Mar 2023", "January 2021 to Present", "05/2021 – 2023"
        let date_range_regex = Regex::new(
            r"(?ix)
            (?: (?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+ | (?:0?[1-9]|1[0-2])/ )?
            (?:19|20)\d{2}
            \s* (?:[-\u{2013}\u{2014}] | \bto\b) \s*
            (?:
                (?: (?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+ | (?:0?[1-9]|1[0-2])/ )?
                (?:19|20)\d{2}
                | present | current | now
            )",
        )
        .expect("Invalid date range regex");

        let year_regex = Regex::new(r"\b(?:19|20)\d{2}\b").expect("Invalid year regex");

        let expected_graduation_regex =
            Regex::new(r"(?i)\b(?:expected|anticipated)\b.{0,30}?\bgraduat")
                .expect("Invalid expected graduation regex");

        let degree_candidate_regex = Regex::new(
            r"(?i)\bcandidate\s+for\b.{0,40}?\b(?:b\.?\s?s\.?|b\.?\s?a\.?|m\.?\s?s\.?|m\.?\s?a\.?|bachelor|master|ph\.?\s?d|degree|diploma)",
        )
        .expect("Invalid degree candidate regex");

        let graduating_year_regex = Regex::new(r"(?i)\bgraduating\b.{0,30}?\b((?:20)\d{2})\b")
            .expect("Invalid graduating year regex");

        Self {
            date_range_regex,
            year_regex,
            expected_graduation_regex,
            degree_candidate_regex,
            graduating_year_regex,
        }
    }

    pub fn extract(&self, text: &str) -> ResumeFeatures {
        ResumeFeatures {
            resume_role_count: self.count_roles(text),
            has_active_education: self.detect_active_education(text),
            total_experience_years: self.total_experience_years(text),
        }
    }

    /// Count distinct role date-range patterns in the document.
    pub fn count_roles(&self, text: &str) -> u32 {
        let distinct: HashSet<String> = self
            .date_range_regex
            .find_iter(text)
            .map(|mat| {
                mat.as_str()
                    .to_lowercase()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();

        distinct.len() as u32
    }

    /// True when the text signals in-progress education: an expected or
    /// anticipated graduation, "Candidate for <degree>", or "graduating"
    /// followed by a future year.
    pub fn detect_active_education(&self, text: &str) -> bool {
        if self.expected_graduation_regex.is_match(text)
            || self.degree_candidate_regex.is_match(text)
        {
            return true;
        }

        let current_year = Utc::now().year();
        self.graduating_year_regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1))
            .filter_map(|year| year.as_str().parse::<i32>().ok())
            .any(|year| year > current_year)
    }

    /// Span between the earliest and latest bare 4-digit year mentioned
    /// anywhere in the text; 0 with fewer than two distinct years.
    pub fn total_experience_years(&self, text: &str) -> u32 {
        let years: HashSet<u32> = self
            .year_regex
            .find_iter(text)
            .filter_map(|mat| mat.as_str().parse().ok())
            .collect();

        if years.len() < 2 {
            return 0;
        }

        let min = years.iter().min().copied().unwrap_or(0);
        let max = years.iter().max().copied().unwrap_or(0);
        max - min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_count_from_date_ranges() {
        let extractor = FeatureExtractor::new();
        let text = "Software Intern\nJan 2022 - Aug 2022\n\nResearch Assistant\nSep 2022 to Present\n";

        assert_eq!(extractor.count_roles(text), 2);
    }

    #[test]
    fn test_role_count_accepts_numeric_dates() {
        let extractor = FeatureExtractor::new();
        let text = "Analyst 05/2019 - 09/2021";

        assert_eq!(extractor.count_roles(text), 1);
    }

    #[test]
    fn test_duplicate_ranges_counted_once() {
        let extractor = FeatureExtractor::new();
        let text = "Jan 2022 - Aug 2022 ... Jan 2022 - Aug 2022";

        assert_eq!(extractor.count_roles(text), 1);
    }

    #[test]
    fn test_active_education_phrases() {
        let extractor = FeatureExtractor::new();

        assert!(extractor.detect_active_education("Expected Graduation: May 2027"));
        assert!(extractor.detect_active_education("Candidate for B.S. in Computer Science"));
        assert!(extractor.detect_active_education("Graduating in 2099"));
        assert!(!extractor.detect_active_education("Graduated in 2015 with honors"));
    }

    #[test]
    fn test_experience_span_from_years() {
        let extractor = FeatureExtractor::new();

        assert_eq!(
            extractor.total_experience_years("Worked from 2015 through 2023."),
            8
        );
        assert_eq!(extractor.total_experience_years("Class of 2020"), 0);
        assert_eq!(extractor.total_experience_years("no years here"), 0);
    }

    #[test]
    fn test_unparseable_text_yields_defaults() {
        let extractor = FeatureExtractor::new();
        let features = extractor.extract("plain text with nothing useful");

        assert_eq!(features, ResumeFeatures::default());
    }
}
