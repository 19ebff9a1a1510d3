//! Class helpers shared by the trade components. Colours live in `main.css`.

use crate::domain::{DisplayMode, Modifier, Rarity, Verdict};

// ============================================
// OUTCOME
// ============================================

pub fn verdict_class(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Empty | Verdict::Fair => "wfl-result wfl-result-fair",
        Verdict::Win => "wfl-result wfl-result-win",
        Verdict::Loss => "wfl-result wfl-result-lose",
    }
}

pub fn bar_fill_class(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Empty => "wfl-bar-fill",
        _ => "wfl-bar-fill active",
    }
}

// ============================================
// SLOTS & CONTROLS
// ============================================

pub fn slot_class(filled: bool) -> &'static str {
    if filled {
        "item-slot filled"
    } else {
        "item-slot"
    }
}

pub fn modifier_tag_class(modifier: Modifier) -> &'static str {
    match modifier {
        Modifier::Hammer => "shg-tag hammer",
        Modifier::Gem => "shg-tag gem",
        Modifier::None => "shg-tag",
    }
}

pub fn modifier_button_class(modifier: Modifier, active: bool) -> &'static str {
    match (modifier, active) {
        (Modifier::Hammer, true) => "shg-btn active hammer",
        (Modifier::Gem, true) => "shg-btn active gem",
        _ => "shg-btn",
    }
}

pub fn mode_option_class(option: DisplayMode, current: DisplayMode) -> &'static str {
    if option == current {
        "option active"
    } else {
        "option"
    }
}

pub fn rarity_filter_class(active: bool) -> &'static str {
    if active {
        "btn rarity-filter-btn active"
    } else {
        "btn rarity-filter-btn"
    }
}

pub fn rarity_color(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Common => "#9ca3af",
        Rarity::Rare => "#60a5fa",
        Rarity::Epic => "#c084fc",
        Rarity::Legendary => "#fbbf24",
        Rarity::Unranked => "#64748b",
    }
}

pub fn nav_class(active: bool) -> &'static str {
    if active {
        "nav-btn active"
    } else {
        "nav-btn"
    }
}
