#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Storm damage summary types.
//!
//! [`CategorySummary`] is the terminal artifact of the analysis: one row
//! per event category, consumed by the chart and table renderers.

use serde::{Deserialize, Serialize};

/// Aggregated impact of every storm event mapped to one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    /// Canonical label or passthrough text.
    pub category: String,
    /// Number of events in this category.
    pub observation_count: u64,
    /// Total deaths.
    pub fatalities: u64,
    /// Total injuries.
    pub injuries: u64,
    /// Total property plus crop damage in dollars.
    pub total_damage: f64,
}

impl CategorySummary {
    /// Creates an empty summary for `category`.
    #[must_use]
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            observation_count: 0,
            fatalities: 0,
            injuries: 0,
            total_damage: 0.0,
        }
    }

    /// Fatalities plus injuries.
    #[must_use]
    pub const fn casualties(&self) -> u64 {
        self.fatalities + self.injuries
    }
}

/// Grand totals over a set of records or summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryTotals {
    pub observation_count: u64,
    pub fatalities: u64,
    pub injuries: u64,
    pub total_damage: f64,
}

impl SummaryTotals {
    /// Fatalities plus injuries.
    #[must_use]
    pub const fn casualties(&self) -> u64 {
        self.fatalities + self.injuries
    }

    /// Returns `true` if both totals carry the same counts and their damage
    /// sums agree within floating point rounding.
    #[must_use]
    pub fn conserves(&self, other: &Self) -> bool {
        let scale = self.total_damage.abs().max(other.total_damage.abs()).max(1.0);
        self.observation_count == other.observation_count
            && self.fatalities == other.fatalities
            && self.injuries == other.injuries
            && (self.total_damage - other.total_damage).abs() <= scale * 1e-9
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn casualties_add_fatalities_and_injuries() {
        let mut summary = CategorySummary::new("TORNADO");
        summary.fatalities = 3;
        summary.injuries = 40;
        assert_eq!(summary.casualties(), 43);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(CategorySummary::new("FOG")).unwrap();
        assert_eq!(json["category"], "FOG");
        assert_eq!(json["observationCount"], 0);
        assert!(json.get("totalDamage").is_some());
    }

    #[test]
    fn conserves_tolerates_rounding() {
        let a = SummaryTotals {
            observation_count: 2,
            fatalities: 1,
            injuries: 5,
            total_damage: 0.1 + 0.2,
        };
        let b = SummaryTotals {
            total_damage: 0.3,
            ..a
        };
        assert!(a.conserves(&b));

        let c = SummaryTotals {
            fatalities: 2,
            ..a
        };
        assert!(!a.conserves(&c));
    }
}
