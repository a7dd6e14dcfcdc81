//! Event type mapping utilities.
//!
//! Maps free-text storm event type strings to the canonical
//! [`EventCategory`] taxonomy. The source vocabulary is uncontrolled
//! ("TSTM WIND", "Hurricane Opal/High Winds", "FLASH FLOODING"), so we use
//! ordered keyword detection: the first rule whose keywords appear in the
//! text decides the category.

use storm_damage_event_models::{EventCategory, EventType};

/// Lower-case fragments that must all be contained in the event text.
///
/// Most patterns are a single keyword. Compound patterns such as
/// `["wind", "ch"]` require every fragment to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern(pub &'static [&'static str]);

impl Pattern {
    /// Returns `true` if every fragment occurs in `lower`, which must
    /// already be lower-cased.
    #[must_use]
    pub fn matches(&self, lower: &str) -> bool {
        self.0.iter().all(|fragment| lower.contains(fragment))
    }
}

/// A classification rule: any matching pattern assigns `category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub patterns: &'static [Pattern],
    pub category: EventCategory,
}

impl CategoryRule {
    /// Returns `true` if any of the rule's patterns matches `lower`.
    #[must_use]
    pub fn matches(&self, lower: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(lower))
    }
}

/// The classification rules in evaluation order. First match wins.
///
/// Order is load-bearing: narrower phenomena ("hurricane wind", "wind
/// chill") must claim their records before the generic `wind` rule, which
/// would otherwise swallow everything containing that word.
pub const RULES: &[CategoryRule] = &[
    // ── Named storm systems ─────────────────────────────────────────
    CategoryRule {
        patterns: &[Pattern(&["tornado"])],
        category: EventCategory::Tornado,
    },
    CategoryRule {
        patterns: &[
            Pattern(&["hurricane"]),
            Pattern(&["surge"]),
            Pattern(&["typhoon"]),
        ],
        category: EventCategory::Hurricane,
    },
    CategoryRule {
        patterns: &[Pattern(&["lightning"])],
        category: EventCategory::Lightning,
    },
    CategoryRule {
        patterns: &[Pattern(&["thunderstorm"])],
        category: EventCategory::Thunderstorm,
    },
    // ── Water and temperature ───────────────────────────────────────
    CategoryRule {
        patterns: &[Pattern(&["flood"]), Pattern(&["fld"])],
        category: EventCategory::Flood,
    },
    CategoryRule {
        patterns: &[Pattern(&["heat"]), Pattern(&["warm"])],
        category: EventCategory::Heat,
    },
    CategoryRule {
        patterns: &[Pattern(&["cold"]), Pattern(&["wind", "ch"])],
        category: EventCategory::Cold,
    },
    CategoryRule {
        patterns: &[Pattern(&["rain"])],
        category: EventCategory::Rain,
    },
    CategoryRule {
        patterns: &[
            Pattern(&["snow"]),
            Pattern(&["blizzard"]),
            Pattern(&["winter"]),
            Pattern(&["ice"]),
            Pattern(&["icy"]),
        ],
        category: EventCategory::SnowIceWinterStorm,
    },
    CategoryRule {
        patterns: &[Pattern(&["hail"])],
        category: EventCategory::Hail,
    },
    CategoryRule {
        patterns: &[Pattern(&["fire"])],
        category: EventCategory::WildFire,
    },
    // ── Generic wind (after every wind-bearing narrower rule) ───────
    CategoryRule {
        patterns: &[Pattern(&["wind"])],
        category: EventCategory::Wind,
    },
    // ── Remaining ───────────────────────────────────────────────────
    CategoryRule {
        patterns: &[Pattern(&["freeze"]), Pattern(&["frost"]), Pattern(&["glaze"])],
        category: EventCategory::FrostFreeze,
    },
    CategoryRule {
        patterns: &[Pattern(&["tropical"])],
        category: EventCategory::TropicalStorm,
    },
    CategoryRule {
        patterns: &[Pattern(&["fog"])],
        category: EventCategory::Fog,
    },
    CategoryRule {
        patterns: &[Pattern(&["rip", "current"])],
        category: EventCategory::RipCurrents,
    },
    CategoryRule {
        patterns: &[Pattern(&["surf"])],
        category: EventCategory::Surf,
    },
];

/// Classifies a raw event type string.
///
/// Matching is ASCII case-insensitive substring containment. Returns
/// [`EventType::Unclassified`] holding the input with ASCII letters
/// uppercased when no rule matches. Whitespace and non-ASCII characters are
/// kept as they are, so the passthrough text classifies the same way again.
#[must_use]
pub fn canonicalize(raw: &str) -> EventType {
    let lower = raw.to_ascii_lowercase();

    RULES
        .iter()
        .find(|rule| rule.matches(&lower))
        .map_or_else(
            || EventType::Unclassified(raw.to_ascii_uppercase()),
            |rule| EventType::Canonical(rule.category),
        )
}

/// String form of [`canonicalize`]: the canonical label, or the uppercased
/// input when nothing matched.
#[must_use]
pub fn canonical_label(raw: &str) -> String {
    canonicalize(raw).as_str().to_owned()
}
