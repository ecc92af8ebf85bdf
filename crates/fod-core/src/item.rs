//! Item records and the effects they have when used.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An item on Yaztromo's slate or in the player's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, also used to pick the item's effect.
    pub name: String,
    /// Price in gold; only meaningful for slate entries.
    #[serde(default)]
    pub price: Option<u32>,
    /// Flavour text shown when the item is viewed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Item {
    /// Create an item without a price.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: None,
            description: None,
        }
    }

    /// Create an item with a price.
    pub fn priced(name: impl Into<String>, price: u32) -> Self {
        Self {
            price: Some(price),
            ..Self::new(name)
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The effect this item has when used.
    pub fn effect(&self) -> Effect {
        Effect::for_name(&self.name)
    }
}

/// What using an item does to the player's attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Raises STAMINA by the given amount.
    Stamina(u32),
    /// Raises SKILL by the given amount.
    Skill(u32),
    /// Raises LUCK by the given amount.
    Luck(u32),
    /// Consumed without any numeric effect.
    None,
}

impl Effect {
    /// Pick the effect for an item name by substring.
    ///
    /// Checked in order: "Healing", "Skill", then "Fortune" or "Luck".
    pub fn for_name(name: &str) -> Self {
        if name.contains("Healing") {
            Self::Stamina(2)
        } else if name.contains("Skill") {
            Self::Skill(1)
        } else if name.contains("Fortune") || name.contains("Luck") {
            Self::Luck(1)
        } else {
            Self::None
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stamina(n) => write!(f, "STAMINA +{n}"),
            Self::Skill(n) => write!(f, "SKILL +{n}"),
            Self::Luck(n) => write!(f, "LUCK +{n}"),
            Self::None => f.write_str("no noticeable effect"),
        }
    }
}
