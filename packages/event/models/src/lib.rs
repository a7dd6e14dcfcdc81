#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Storm event category taxonomy and record types.
//!
//! This crate defines the canonical event categories that free-text storm
//! event types are normalized into, plus the raw and normalized record
//! shapes that flow through the report pipeline.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Canonical storm event categories.
///
/// The display form of each variant is the label used as the group key in
/// the damage report (e.g. `SNOW/ICE/WINTER STORM`). Each label is declared
/// once, in its `strum` attribute; serde goes through the same strings.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(into = "&'static str", try_from = "String")]
pub enum EventCategory {
    /// Tornadoes, funnel clouds reported as tornadoes, waterspout tornadoes
    #[strum(serialize = "TORNADO")]
    Tornado,
    /// Hurricanes, typhoons and storm surge
    #[strum(serialize = "HURRICANE")]
    Hurricane,
    #[strum(serialize = "LIGHTNING")]
    Lightning,
    #[strum(serialize = "THUNDERSTORM")]
    Thunderstorm,
    /// River, flash, coastal and urban flooding
    #[strum(serialize = "FLOOD")]
    Flood,
    /// Excessive heat and unseasonable warmth
    #[strum(serialize = "HEAT")]
    Heat,
    /// Cold spells and wind chill
    #[strum(serialize = "COLD")]
    Cold,
    #[strum(serialize = "RAIN")]
    Rain,
    /// Snow, blizzards, ice storms and other winter weather
    #[strum(serialize = "SNOW/ICE/WINTER STORM")]
    SnowIceWinterStorm,
    #[strum(serialize = "HAIL")]
    Hail,
    #[strum(serialize = "WILD FIRE")]
    WildFire,
    /// Any wind event not claimed by a narrower category
    #[strum(serialize = "WIND")]
    Wind,
    /// Frost, freeze and glaze
    #[strum(serialize = "FROST/FREEZE")]
    FrostFreeze,
    #[strum(serialize = "TROPICAL STORM")]
    TropicalStorm,
    #[strum(serialize = "FOG")]
    Fog,
    #[strum(serialize = "RIP CURRENTS")]
    RipCurrents,
    /// High, heavy and rough surf
    #[strum(serialize = "SURF")]
    Surf,
}

impl EventCategory {
    /// Returns the report label for this category.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Returns all variants of this enum, in classification rule order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Tornado,
            Self::Hurricane,
            Self::Lightning,
            Self::Thunderstorm,
            Self::Flood,
            Self::Heat,
            Self::Cold,
            Self::Rain,
            Self::SnowIceWinterStorm,
            Self::Hail,
            Self::WildFire,
            Self::Wind,
            Self::FrostFreeze,
            Self::TropicalStorm,
            Self::Fog,
            Self::RipCurrents,
            Self::Surf,
        ]
    }
}

impl TryFrom<String> for EventCategory {
    type Error = strum::ParseError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

/// The result of classifying a free-text event type.
///
/// Text that no classification rule recognizes is kept (uppercased) as its
/// own one-off category.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventType {
    /// One of the fixed canonical categories.
    Canonical(EventCategory),
    /// Uppercased source text with no matching rule.
    Unclassified(String),
}

impl EventType {
    /// Returns the group key for this event type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Canonical(category) => category.label(),
            Self::Unclassified(text) => text,
        }
    }

    /// Returns the canonical category, if this event type has one.
    #[must_use]
    pub const fn category(&self) -> Option<EventCategory> {
        match self {
            Self::Canonical(category) => Some(*category),
            Self::Unclassified(_) => None,
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EventCategory> for EventType {
    fn from(category: EventCategory) -> Self {
        Self::Canonical(category)
    }
}

/// Order-of-magnitude multiplier attached to a damage figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DamageScale {
    /// `K`: thousands of dollars
    Thousands,
    /// `M`: millions of dollars
    Millions,
    /// `B`: billions of dollars
    Billions,
    /// Empty, `?`, `H`, digits or any other code
    Unrecognized,
}

impl DamageScale {
    /// Parses a scale code. Case-insensitive; anything other than `K`, `M`
    /// or `B` is [`Self::Unrecognized`].
    #[must_use]
    pub fn parse(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "K" => Self::Thousands,
            "M" => Self::Millions,
            "B" => Self::Billions,
            _ => Self::Unrecognized,
        }
    }

    /// Returns the dollar multiplier for this scale. Unrecognized codes
    /// multiply by zero.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Thousands => 1_000.0,
            Self::Millions => 1_000_000.0,
            Self::Billions => 1_000_000_000.0,
            Self::Unrecognized => 0.0,
        }
    }
}

/// One storm event observation as read from the source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Free-text event type (uncontrolled vocabulary).
    pub event_type: String,
    /// Deaths directly attributed to the event.
    pub fatalities: u64,
    /// Injuries directly attributed to the event.
    pub injuries: u64,
    /// Property damage magnitude, to be multiplied by `property_scale`.
    pub property_damage: f64,
    /// Scale code for `property_damage`.
    pub property_scale: String,
    /// Crop damage magnitude, to be multiplied by `crop_scale`.
    pub crop_damage: f64,
    /// Scale code for `crop_damage`.
    pub crop_scale: String,
}

/// A storm event after category and damage normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    /// Canonical category or passthrough text.
    pub event_type: EventType,
    pub fatalities: u64,
    pub injuries: u64,
    /// Property plus crop damage in dollars.
    pub total_damage: f64,
}
