use std::fmt;

use serde::{Deserialize, Serialize};

/// Rarity tier of a catalog item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    /// Missing or unrecognised rarity. Never receives modifier math.
    Unranked,
}

impl Rarity {
    /// Tiers offered by the picker's rarity filter, in display order.
    pub const FILTERABLE: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "common" => Rarity::Common,
            "rare" => Rarity::Rare,
            "epic" => Rarity::Epic,
            "legendary" => Rarity::Legendary,
            _ => Rarity::Unranked,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Unranked => "Unranked",
        }
    }
}

/// A catalog entry. Read-only once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub value: f64,
    pub rarity: Rarity,
}

impl Item {
    pub fn new(name: impl Into<String>, value: f64, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            value,
            rarity,
        }
    }
}

/// Valuation context active when an item is picked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    #[default]
    None,
    Hammer,
    Gem,
}

impl Modifier {
    pub fn label(&self) -> &'static str {
        match self {
            Modifier::None => "None",
            Modifier::Hammer => "Hammer",
            Modifier::Gem => "Gem",
        }
    }

    /// Single-letter tag shown on filled slots and the sidebar buttons.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Modifier::None => None,
            Modifier::Hammer => Some("H"),
            Modifier::Gem => Some("G"),
        }
    }
}

/// Unit in which totals and verdict magnitudes are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    #[default]
    #[serde(rename = "fv")]
    Fv,
    #[serde(rename = "hv")]
    Hv,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Fv => DisplayMode::Hv,
            DisplayMode::Hv => DisplayMode::Fv,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Fv => "fv",
            DisplayMode::Hv => "hv",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which half of the trade a grid belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    YourOffer,
    TheirOffer,
}

impl Side {
    pub fn title(&self) -> &'static str {
        match self {
            Side::YourOffer => "Your Offer",
            Side::TheirOffer => "Their Offer",
        }
    }
}
