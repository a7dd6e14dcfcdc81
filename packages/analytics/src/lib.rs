#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation of normalized storm events by category.
//!
//! Groups [`NormalizedRecord`]s on their event type, sums casualties and
//! damage per group, and ranks the resulting [`CategorySummary`] rows.
//! Aggregation never drops mass: the grand totals of the summaries equal
//! the grand totals of the records.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use storm_damage_analytics_models::{CategorySummary, SummaryTotals};
use storm_damage_event_models::NormalizedRecord;

/// Groups records by category and returns every group, most damaging
/// first.
///
/// Ordering: total damage descending, then fatalities descending, then
/// injuries descending, then category name ascending.
#[must_use]
pub fn aggregate(records: &[NormalizedRecord]) -> Vec<CategorySummary> {
    let mut groups: BTreeMap<&str, CategorySummary> = BTreeMap::new();

    for record in records {
        let key = record.event_type.as_str();
        let summary = groups
            .entry(key)
            .or_insert_with(|| CategorySummary::new(key));
        summary.observation_count += 1;
        summary.fatalities += record.fatalities;
        summary.injuries += record.injuries;
        summary.total_damage += record.total_damage;
    }

    let mut summaries: Vec<CategorySummary> = groups.into_values().collect();
    summaries.sort_by(damage_order);

    log::info!(
        "Aggregated {} records into {} categories",
        records.len(),
        summaries.len()
    );

    summaries
}

/// Report ordering of summaries: most damaging first, with fatalities and
/// injuries as tie-breakers.
#[must_use]
pub fn damage_order(a: &CategorySummary, b: &CategorySummary) -> Ordering {
    b.total_damage
        .total_cmp(&a.total_damage)
        .then_with(|| b.fatalities.cmp(&a.fatalities))
        .then_with(|| b.injuries.cmp(&a.injuries))
        .then_with(|| a.category.cmp(&b.category))
}

/// Returns the first `n` summaries.
#[must_use]
pub fn top_n(summaries: &[CategorySummary], n: usize) -> &[CategorySummary] {
    &summaries[..n.min(summaries.len())]
}

/// Returns a copy of `summaries` ordered by fatalities plus injuries,
/// highest first, ties broken by category name.
#[must_use]
pub fn rank_by_casualties(summaries: &[CategorySummary]) -> Vec<CategorySummary> {
    let mut ranked = summaries.to_vec();
    ranked.sort_by(|a, b| {
        b.casualties()
            .cmp(&a.casualties())
            .then_with(|| a.category.cmp(&b.category))
    });
    ranked
}

/// Grand totals over normalized records.
#[must_use]
pub fn totals(records: &[NormalizedRecord]) -> SummaryTotals {
    records
        .iter()
        .fold(SummaryTotals::default(), |mut acc, record| {
            acc.observation_count += 1;
            acc.fatalities += record.fatalities;
            acc.injuries += record.injuries;
            acc.total_damage += record.total_damage;
            acc
        })
}

/// Grand totals over category summaries.
#[must_use]
pub fn totals_of(summaries: &[CategorySummary]) -> SummaryTotals {
    summaries
        .iter()
        .fold(SummaryTotals::default(), |mut acc, summary| {
            acc.observation_count += summary.observation_count;
            acc.fatalities += summary.fatalities;
            acc.injuries += summary.injuries;
            acc.total_damage += summary.total_damage;
            acc
        })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use storm_damage_event_models::{EventCategory, EventType};

    use super::*;

    fn record(event_type: EventType, fatalities: u64, injuries: u64, damage: f64) -> NormalizedRecord {
        NormalizedRecord {
            event_type,
            fatalities,
            injuries,
            total_damage: damage,
        }
    }

    fn summary(category: &str, count: u64, fatalities: u64, injuries: u64, damage: f64) -> CategorySummary {
        CategorySummary {
            category: category.to_string(),
            observation_count: count,
            fatalities,
            injuries,
            total_damage: damage,
        }
    }

    #[test]
    fn aggregates_scenario() {
        let records = vec![
            record(EventCategory::Wind.into(), 0, 0, 10_000.0),
            record(EventCategory::Tornado.into(), 1, 5, 2_000_000.0),
        ];

        assert_eq!(
            aggregate(&records),
            vec![
                summary("TORNADO", 1, 1, 5, 2_000_000.0),
                summary("WIND", 1, 0, 0, 10_000.0),
            ]
        );
    }

    #[test]
    fn sums_within_groups() {
        let records = vec![
            record(EventCategory::Flood.into(), 1, 2, 100.0),
            record(EventCategory::Hail.into(), 0, 0, 50.0),
            record(EventCategory::Flood.into(), 3, 4, 200.0),
        ];

        let summaries = aggregate(&records);
        assert_eq!(summaries[0], summary("FLOOD", 2, 4, 6, 300.0));
        assert_eq!(summaries[1], summary("HAIL", 1, 0, 0, 50.0));
    }

    #[test]
    fn passthrough_forms_singleton_group() {
        let records = vec![
            record(EventType::Unclassified("SPACE DEBRIS".to_string()), 0, 0, 0.0),
            record(EventCategory::Fog.into(), 0, 1, 0.0),
        ];

        let summaries = aggregate(&records);
        let debris = summaries
            .iter()
            .find(|s| s.category == "SPACE DEBRIS")
            .unwrap();
        assert_eq!(debris.observation_count, 1);
    }

    #[test]
    fn ties_break_on_fatalities_then_injuries() {
        let records = vec![
            record(EventCategory::Fog.into(), 0, 9, 0.0),
            record(EventCategory::Heat.into(), 5, 0, 0.0),
            record(EventCategory::Cold.into(), 0, 10, 0.0),
            record(EventCategory::Surf.into(), 0, 10, 0.0),
        ];

        let order: Vec<String> = aggregate(&records)
            .into_iter()
            .map(|s| s.category)
            .collect();
        assert_eq!(order, ["HEAT", "COLD", "SURF", "FOG"]);
    }

    #[test]
    fn empty_input_yields_empty_summaries() {
        let summaries = aggregate(&[]);
        assert!(summaries.is_empty());
        assert_eq!(totals_of(&summaries), SummaryTotals::default());
        assert_eq!(totals(&[]), SummaryTotals::default());
    }

    #[test]
    fn top_n_truncates_without_overflowing() {
        let summaries = vec![
            summary("A", 1, 0, 0, 3.0),
            summary("B", 1, 0, 0, 2.0),
            summary("C", 1, 0, 0, 1.0),
        ];
        assert_eq!(top_n(&summaries, 2).len(), 2);
        assert_eq!(top_n(&summaries, 20).len(), 3);
        assert!(top_n(&summaries, 0).is_empty());
    }

    #[test]
    fn ranks_by_casualties() {
        let summaries = vec![
            summary("FLOOD", 1, 1, 1, 9.0),
            summary("TORNADO", 1, 10, 100, 1.0),
            summary("HEAT", 1, 50, 0, 0.0),
        ];
        let ranked: Vec<String> = rank_by_casualties(&summaries)
            .into_iter()
            .map(|s| s.category)
            .collect();
        assert_eq!(ranked, ["TORNADO", "HEAT", "FLOOD"]);
    }

    fn arb_record() -> impl Strategy<Value = NormalizedRecord> {
        let event_type = prop_oneof![
            prop::sample::select(EventCategory::all().to_vec()).prop_map(EventType::from),
            "[A-Z ]{1,8}".prop_map(EventType::Unclassified),
        ];
        (event_type, 0u64..1_000, 0u64..1_000, 0.0f64..1e10)
            .prop_map(|(event_type, f, i, d)| record(event_type, f, i, d))
    }

    proptest! {
        #[test]
        fn aggregation_conserves_mass(records in prop::collection::vec(arb_record(), 0..200)) {
            let summaries = aggregate(&records);
            prop_assert!(totals_of(&summaries).conserves(&totals(&records)));
        }

        #[test]
        fn output_is_sorted(records in prop::collection::vec(arb_record(), 0..100)) {
            let summaries = aggregate(&records);
            for pair in summaries.windows(2) {
                prop_assert_ne!(damage_order(&pair[0], &pair[1]), Ordering::Greater);
            }
        }
    }
}
