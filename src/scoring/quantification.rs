//! Measurable-metric detection in achievement bullets
//!
//! Four metric categories are matched independently per bullet: plain
//! numbers, percentages, currency amounts, and time spans. Density is the
//! share of bullets carrying at least one metric of any category.

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricMatches {
    pub numbers: Vec<String>,
    pub percentages: Vec<String>,
    pub currency: Vec<String>,
    pub time_units: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsFound {
    pub has_metrics: bool,
    pub metrics: MetricMatches,
    /// All matched fragments, grouped by category.
    pub metrics_found: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub currency: u32,
    pub percentages: u32,
    pub numbers: u32,
    pub time_units: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityResult {
    pub total_bullets: u32,
    pub bullets_with_metrics: u32,
    /// Percentage of bullets with at least one metric, 0-100.
    pub density: u32,
    /// How many bullets contributed at least one match of each category.
    pub by_category: CategoryCounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DensityCategory {
    Low,
    Moderate,
    Strong,
}

impl DensityCategory {
    pub fn from_density(density: u32) -> Self {
        match density {
            80.. => DensityCategory::Strong,
            50..=79 => DensityCategory::Moderate,
            _ => DensityCategory::Low,
        }
    }
}

pub struct QuantificationAnalyzer {
    number_regex: Regex,
    percentage_regex: Regex,
    currency_regex: Regex,
    time_regex: Regex,
}

impl Default for QuantificationAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantificationAnalyzer {
    pub fn new() -> Self {
        // "150", "1,200", "10k", "3.5M", "40+"
        let number_regex = Regex::new(r"\b\d[\d,]*(?:\.\d+)?\s?[kKmMbB]?\+?")
            .expect("Invalid number regex");

        let percentage_regex =
            Regex::new(r"\b\d[\d,]*(?:\.\d+)?\s?%").expect("Invalid percentage regex");

        // "$500", "£1,200", "€3.5M", "$10k+"
        let currency_regex = Regex::new(r"[$\u{00A3}\u{20AC}]\s?\d[\d,]*(?:\.\d+)?\s?[kKmM]?\+?")
            .expect("Invalid currency regex");

        // "6 months", "3-5 years", "24 hours", "90 days"
        let time_regex = Regex::new(
            r"(?i)\b\d+(?:\s?[-\u{2013}]\s?\d+)?\+?\s?(?:years?|months?|weeks?|days?|hours?)\b",
        )
        .expect("Invalid time regex");

        Self {
            number_regex,
            percentage_regex,
            currency_regex,
            time_regex,
        }
    }

    /// Match all four metric categories in one bullet.
    pub fn analyze_bullet(&self, bullet: &str) -> MetricsFound {
        let collect = |regex: &Regex| -> Vec<String> {
            regex
                .find_iter(bullet)
                .map(|mat| mat.as_str().trim().to_string())
                .collect()
        };

        let metrics = MetricMatches {
            numbers: collect(&self.number_regex),
            percentages: collect(&self.percentage_regex),
            currency: collect(&self.currency_regex),
            time_units: collect(&self.time_regex),
        };

        let mut metrics_found = Vec::new();
        metrics_found.extend(metrics.currency.iter().cloned());
        metrics_found.extend(metrics.percentages.iter().cloned());
        metrics_found.extend(metrics.time_units.iter().cloned());
        metrics_found.extend(metrics.numbers.iter().cloned());

        let has_metrics = !metrics.numbers.is_empty()
            || !metrics.percentages.is_empty()
            || !metrics.currency.is_empty()
            || !metrics.time_units.is_empty();

        MetricsFound {
            has_metrics,
            metrics,
            metrics_found,
        }
    }

    /// Analyze each bullet independently.
    pub fn analyze_bullets(&self, bullets: &[String]) -> Vec<MetricsFound> {
        bullets
            .iter()
            .map(|bullet| self.analyze_bullet(bullet))
            .collect()
    }

    /// Share of bullets with measurable metrics, plus per-category bullet
    /// counts.
    pub fn calculate_density(&self, bullets: &[String]) -> DensityResult {
        let analyses = self.analyze_bullets(bullets);

        let total_bullets = analyses.len() as u32;
        let bullets_with_metrics = analyses.iter().filter(|a| a.has_metrics).count() as u32;

        let mut by_category = CategoryCounts::default();
        for analysis in &analyses {
            if !analysis.metrics.currency.is_empty() {
                by_category.currency += 1;
            }
            if !analysis.metrics.percentages.is_empty() {
                by_category.percentages += 1;
            }
            if !analysis.metrics.numbers.is_empty() {
                by_category.numbers += 1;
            }
            if !analysis.metrics.time_units.is_empty() {
                by_category.time_units += 1;
            }
        }

        let density = if total_bullets == 0 {
            0
        } else {
            ((bullets_with_metrics as f64 / total_bullets as f64) * 100.0).round() as u32
        };

        DensityResult {
            total_bullets,
            bullets_with_metrics,
            density,
            by_category,
        }
    }
}
