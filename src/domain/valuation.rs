//! Rules that turn a picked item plus the active modifier into the value
//! stored on its slot.

use super::entities::{Modifier, Rarity};

const LEGENDARY_HAMMER_SHARE: f64 = 0.7;
const LEGENDARY_GEM_SHARE: f64 = 0.3;
const SPLIT_SHARE: f64 = 0.5;
const EXCEPTION_GEM_SHARE: f64 = 0.8;
const EXCEPTION_HAMMER_SHARE: f64 = 0.2;

/// Scaled values below this keep one decimal; everything else is whole.
const FINE_ROUNDING_LIMIT: f64 = 5.0;

/// Exception-set membership for a single item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExceptionFlags {
    pub full_value: bool,
    pub eighty_twenty: bool,
}

/// Value assigned to a slot at selection time.
///
/// Unscaled returns (full exception, no modifier, unranked rarity) hand the
/// base value back untouched; only scaled results go through
/// [`round_scaled`].
pub fn compute_displayed_value(
    base_value: f64,
    rarity: Rarity,
    modifier: Modifier,
    exceptions: ExceptionFlags,
) -> f64 {
    if exceptions.full_value {
        return base_value;
    }

    let share = match (rarity, modifier) {
        (_, Modifier::None) | (Rarity::Unranked, _) => return base_value,
        (Rarity::Legendary, Modifier::Hammer) => LEGENDARY_HAMMER_SHARE,
        (Rarity::Legendary, Modifier::Gem) => LEGENDARY_GEM_SHARE,
        (_, Modifier::Gem) if exceptions.eighty_twenty => EXCEPTION_GEM_SHARE,
        (_, Modifier::Hammer) if exceptions.eighty_twenty => EXCEPTION_HAMMER_SHARE,
        // Hammer and gem split evenly; only the slot tag tells them apart.
        _ => SPLIT_SHARE,
    };

    round_scaled(base_value * share)
}

/// `< 5` rounds to the nearest tenth, anything larger to the nearest integer.
pub fn round_scaled(raw: f64) -> f64 {
    if raw < FINE_ROUNDING_LIMIT {
        (raw * 10.0).round() / 10.0
    } else {
        raw.round()
    }
}

/// Catalog values are not validated upstream; anything unusable counts as 0.
pub fn sanitize_base_value(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
