//! The player record: attributes, backpack, potion, slate, and inventory.

use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Base added to one d6 roll for SKILL.
pub const SKILL_BASE: u32 = 6;
/// Base added to two d6 rolls for STAMINA.
pub const STAMINA_BASE: u32 = 12;
/// Base added to one d6 roll for LUCK.
pub const LUCK_BASE: u32 = 6;

/// Gold a new adventurer starts with.
pub const STARTING_GOLD: u32 = 10;

/// Backpack key holding the player's gold.
pub const GOLD: &str = "gold";
/// Backpack key marking that the player carries Bigleg's map.
pub const MAP: &str = "map";

/// A bottle chosen during character setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Potion {
    /// Restores SKILL points.
    Skill,
    /// Restores STAMINA.
    Strength,
    /// Restores LUCK and adds 1 initial LUCK.
    Fortune,
}

impl Potion {
    /// Every potion, in the order they are offered.
    pub const ALL: [Potion; 3] = [Potion::Skill, Potion::Strength, Potion::Fortune];

    /// Parse a potion from its lowercase keyword.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "skill" => Some(Self::Skill),
            "strength" => Some(Self::Strength),
            "fortune" => Some(Self::Fortune),
            _ => None,
        }
    }

    /// The keyword the player types to choose this potion.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Skill => "skill",
            Self::Strength => "strength",
            Self::Fortune => "fortune",
        }
    }
}

impl fmt::Display for Potion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Skill => "Skill",
            Self::Strength => "Strength",
            Self::Fortune => "Fortune",
        };
        f.write_str(label)
    }
}

/// Named resources carried by the player, keyed by resource name.
///
/// Quantities are unsigned, so gold can never go negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Backpack(BTreeMap<String, u32>);

impl Backpack {
    /// Create an empty backpack.
    pub fn new() -> Self {
        Self::default()
    }

    /// The backpack a new adventurer receives from Bigleg's pouch.
    pub fn starting() -> Self {
        let mut pack = Self::new();
        pack.set(GOLD, STARTING_GOLD);
        pack.set(MAP, 1);
        pack
    }

    /// Quantity of a resource, 0 when absent.
    pub fn get(&self, name: &str) -> u32 {
        self.0.get(name).copied().unwrap_or(0)
    }

    /// Set the quantity of a resource.
    pub fn set(&mut self, name: impl Into<String>, quantity: u32) {
        self.0.insert(name.into(), quantity);
    }

    /// Whether the resource has an entry at all.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Current gold.
    pub fn gold(&self) -> u32 {
        self.get(GOLD)
    }

    /// Overwrite the gold amount.
    pub fn set_gold(&mut self, gold: u32) {
        self.set(GOLD, gold);
    }

    /// Iterate over `(name, quantity)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of distinct resources.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the backpack holds nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for Backpack {
    fn from_iter<T: IntoIterator<Item = (K, u32)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// The adventurer's state for one play session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// SKILL attribute.
    #[serde(default)]
    pub skill: u32,
    /// STAMINA attribute.
    #[serde(default)]
    pub stamina: u32,
    /// LUCK attribute.
    #[serde(default)]
    pub luck: u32,
    /// Carried resources; always has gold in a fresh record.
    #[serde(default)]
    pub backpack: Backpack,
    /// Potion chosen during setup.
    #[serde(default)]
    pub potion: Option<Potion>,
    /// Items Yaztromo offers, filled when the shop opens.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slate: Vec<Item>,
    /// Items the player owns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inventory: Vec<Item>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            skill: 0,
            stamina: 0,
            luck: 0,
            backpack: Backpack::starting(),
            potion: None,
            slate: Vec::new(),
            inventory: Vec::new(),
        }
    }
}

impl Player {
    /// Create a player with zeroed attributes and the starting backpack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current gold.
    pub fn gold(&self) -> u32 {
        self.backpack.gold()
    }

    /// Take the chosen potion. A Fortune potion adds 1 initial LUCK.
    ///
    /// Returns `false` and changes nothing if a potion was already chosen.
    pub fn choose_potion(&mut self, potion: Potion) -> bool {
        if self.potion.is_some() {
            return false;
        }
        self.potion = Some(potion);
        if potion == Potion::Fortune {
            self.luck = self.luck.saturating_add(1);
        }
        true
    }

    /// Replace this record with one restored from storage.
    ///
    /// The current slate is kept when the restored record carries none, since
    /// older save files do not store it.
    pub fn restore(&mut self, mut restored: Player) {
        if restored.slate.is_empty() {
            restored.slate = std::mem::take(&mut self.slate);
        }
        *self = restored;
    }

    /// Render the status block shown between narrative beats.
    pub fn status(&self) -> String {
        let mut out = format!(
            "Status: Skill: {}, Stamina: {}, Luck: {}\n",
            self.skill, self.stamina, self.luck
        );
        let items: Vec<String> = self
            .backpack
            .iter()
            .map(|(name, qty)| format!("{name}: {qty}"))
            .collect();
        out.push_str(&format!("Backpack: {}", items.join(", ")));
        if let Some(potion) = self.potion {
            out.push_str(&format!("\nPotion: {potion}"));
        }
        out
    }
}

/// Roll SKILL (1d6+6), STAMINA (2d6+12), and LUCK (1d6+6) into the player.
pub fn generate_stats<R: Rng>(player: &mut Player, rng: &mut R) {
    player.skill = roll_d6(rng) + SKILL_BASE;
    player.stamina = roll_d6(rng) + roll_d6(rng) + STAMINA_BASE;
    player.luck = roll_d6(rng) + LUCK_BASE;
    log::debug!(
        "generated stats: skill {}, stamina {}, luck {}",
        player.skill,
        player.stamina,
        player.luck
    );
}

fn roll_d6<R: Rng>(rng: &mut R) -> u32 {
    rng.random_range(1..=6)
}
