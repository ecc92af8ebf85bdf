use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use fod_core::{Item, Player, persist};

pub fn run(path: &Path) -> Result<(), String> {
    let player = persist::load_from(path)
        .map_err(|e| format!("failed to load player from {}: {e}", path.display()))?;
    println!("{}", render(&player));
    Ok(())
}

fn render(player: &Player) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec!["Skill".to_string(), player.skill.to_string()]);
    table.add_row(vec!["Stamina".to_string(), player.stamina.to_string()]);
    table.add_row(vec!["Luck".to_string(), player.luck.to_string()]);
    for (name, quantity) in player.backpack.iter() {
        table.add_row(vec![format!("Backpack: {name}"), quantity.to_string()]);
    }
    let potion = player
        .potion
        .map_or_else(|| "—".to_string(), |p| p.to_string());
    table.add_row(vec!["Potion".to_string(), potion]);
    table.add_row(vec!["Slate".to_string(), names(&player.slate)]);
    table.add_row(vec!["Inventory".to_string(), names(&player.inventory)]);
    table
}

fn names(items: &[Item]) -> String {
    if items.is_empty() {
        "—".to_string()
    } else {
        items
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fod_core::Potion;

    #[test]
    fn table_lists_every_field() {
        let mut player = Player::new();
        player.skill = 10;
        player.potion = Some(Potion::Fortune);
        player.inventory.push(Item::priced("Garlic Buds", 2));

        let out = render(&player).to_string();
        assert!(out.contains("Skill"));
        assert!(out.contains("Backpack: gold"));
        assert!(out.contains("Fortune"));
        assert!(out.contains("Garlic Buds"));
    }
}
