//! Damage amount scaling.
//!
//! Storm data records damage as a magnitude plus a scale code (`K`, `M`,
//! `B`). Garbage codes are common in the older records; those amounts
//! count as zero dollars rather than being guessed at.

use storm_damage_event_models::{DamageScale, RawRecord};

/// Converts an `(amount, code)` pair into dollars.
///
/// `K`, `M` and `B` (any case) multiply by a thousand, a million and a
/// billion. Every other code yields `0.0`.
#[must_use]
pub fn scaled(amount: f64, code: &str) -> f64 {
    match DamageScale::parse(code) {
        DamageScale::Unrecognized => 0.0,
        scale => amount * scale.multiplier(),
    }
}

/// Property plus crop damage for a record, in dollars.
#[must_use]
pub fn total_damage(record: &RawRecord) -> f64 {
    scaled(record.property_damage, &record.property_scale)
        + scaled(record.crop_damage, &record.crop_scale)
}
