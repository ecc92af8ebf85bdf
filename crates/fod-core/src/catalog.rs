//! Yaztromo's fixed catalog of magical merchandise.

use crate::item::Item;
use crate::player::Player;

/// `(name, price in gold, description)` for every item Yaztromo sells.
pub const YAZTROMO_CATALOG: &[(&str, u32, &str)] = &[
    ("Potion of Healing", 3, "Restores lost STAMINA when drunk."),
    ("Potion of Plant Control", 2, "Makes plants and trees obey you for a short while."),
    ("Potion of Stillness", 3, "Freezes a creature in its tracks."),
    ("Potion of Insect Control", 2, "Turns swarms of insects away."),
    ("Potion of Anti-Poison", 2, "Cures the effects of poison."),
    ("Holy Water", 3, "Burns the undead like acid."),
    ("Ring of Light", 3, "Glows brightly on command."),
    ("Boots of Leaping", 2, "Let the wearer clear great gaps."),
    ("Rope of Climbing", 3, "Climbs by itself and ties its own knots."),
    ("Net of Entanglement", 3, "Ensnares whatever it is thrown over."),
    ("Armband of Strength", 3, "Lends its wearer great strength."),
    ("Glove of Missile Dexterity", 2, "Lets you catch thrown weapons."),
    ("Headband of Concentration", 3, "Sharpens the mind for feats of will."),
    ("Rod of Water-finding", 2, "Twitches when water is near."),
    ("Garlic Buds", 2, "Keeps vampires at bay."),
    ("Nose Filters", 3, "Protect against poisonous gases."),
    ("Blue Candle", 3, "Its flame reveals hidden things."),
    ("Fire Capsules", 3, "Burst into flames when thrown."),
];

/// Build the slate Yaztromo hands over.
pub fn yaztromo_slate() -> Vec<Item> {
    YAZTROMO_CATALOG
        .iter()
        .map(|&(name, price, description)| Item::priced(name, price).with_description(description))
        .collect()
}

/// Fill the player's slate with Yaztromo's catalog if it is still empty.
///
/// Returns `true` when the slate was populated by this call.
pub fn stock_slate(player: &mut Player) -> bool {
    if !player.slate.is_empty() {
        return false;
    }
    player.slate = yaztromo_slate();
    log::debug!("slate stocked with {} items", player.slate.len());
    true
}
