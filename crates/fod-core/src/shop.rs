//! Shop engine: list, view, buy, and use over a player's slate and inventory.
//!
//! Every operation checks all of its preconditions before touching the
//! player, so a failed call leaves gold, slate, inventory, and attributes
//! exactly as they were.

use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::item::{Effect, Item};
use crate::player::Player;

/// A completed purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    /// Name of the item bought.
    pub name: String,
    /// Gold paid.
    pub price: u32,
    /// Gold left afterwards.
    pub gold_left: u32,
}

impl fmt::Display for Purchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Purchased {} for {} gold. You have {} gold left.",
            self.name, self.price, self.gold_left
        )
    }
}

/// The result of using an inventory item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usage {
    /// The item that was consumed.
    pub item: Item,
    /// The effect that was applied.
    pub effect: Effect,
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.effect {
            Effect::None => write!(f, "You use the {}. It has no noticeable effect.", self.item.name),
            effect => write!(f, "You use the {}. {effect}.", self.item.name),
        }
    }
}

/// Render the slate, the inventory, and current gold.
pub fn list(player: &Player) -> String {
    let mut out = String::from("Yaztromo's slate:\n");
    if player.slate.is_empty() {
        out.push_str("  (nothing for sale)\n");
    }
    for (i, item) in player.slate.iter().enumerate() {
        out.push_str(&format!("  {i}. {} - {}\n", item.name, price_label(item)));
    }

    out.push_str("Inventory:\n");
    if player.inventory.is_empty() {
        out.push_str("  (empty)\n");
    }
    for (i, item) in player.inventory.iter().enumerate() {
        out.push_str(&format!("  {i}. {}\n", item.name));
    }

    out.push_str(&format!("Gold: {}", player.gold()));
    out
}

/// Render full detail of one slate entry.
pub fn view(player: &Player, index: usize) -> CoreResult<String> {
    let item = slate_entry(player, index)?;
    let mut out = format!("{}\n  Price: {}", item.name, price_label(item));
    if let Some(description) = &item.description {
        out.push_str(&format!("\n  {description}"));
    }
    let effect = item.effect();
    if effect != Effect::None {
        out.push_str(&format!("\n  Effect when used: {effect}"));
    }
    Ok(out)
}

/// Buy the slate entry at `index`, paying its price in gold.
///
/// The slate entry stays where it is, so the same item can be bought again.
pub fn buy(player: &mut Player, index: usize) -> CoreResult<Purchase> {
    let item = slate_entry(player, index)?;
    let price = item
        .price
        .ok_or_else(|| CoreError::PriceUnset(item.name.clone()))?;
    let gold = player.gold();
    if gold < price {
        return Err(CoreError::InsufficientFunds { price, gold });
    }

    let bought = item.clone();
    let gold_left = gold - price;
    player.backpack.set_gold(gold_left);
    log::info!("purchased {} for {price} gold", bought.name);
    let purchase = Purchase {
        name: bought.name.clone(),
        price,
        gold_left,
    };
    player.inventory.push(bought);
    Ok(purchase)
}

/// Use the inventory item at `index`, removing it and applying its effect.
///
/// Items after `index` shift down by one.
pub fn use_item(player: &mut Player, index: usize) -> CoreResult<Usage> {
    if index >= player.inventory.len() {
        return Err(CoreError::IndexOutOfRange {
            index,
            len: player.inventory.len(),
        });
    }

    let item = player.inventory.remove(index);
    let effect = item.effect();
    match effect {
        Effect::Stamina(n) => player.stamina = player.stamina.saturating_add(n),
        Effect::Skill(n) => player.skill = player.skill.saturating_add(n),
        Effect::Luck(n) => player.luck = player.luck.saturating_add(n),
        Effect::None => {}
    }
    log::info!("used {} ({effect})", item.name);
    Ok(Usage { item, effect })
}

fn slate_entry(player: &Player, index: usize) -> CoreResult<&Item> {
    player.slate.get(index).ok_or(CoreError::IndexOutOfRange {
        index,
        len: player.slate.len(),
    })
}

fn price_label(item: &Item) -> String {
    match item.price {
        Some(price) => format!("{price} gold"),
        None => "unset".to_string(),
    }
}
