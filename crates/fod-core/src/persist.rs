//! JSON persistence for the player record.

use std::fs;
use std::path::Path;

use crate::error::CoreResult;
use crate::player::Player;

/// Encode a player as pretty-printed JSON.
pub fn to_json(player: &Player) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(player)?)
}

/// Decode a player from JSON.
///
/// Missing attributes default to 0, a missing backpack to empty, and a
/// missing or `null` potion to none.
pub fn from_json(json: &str) -> CoreResult<Player> {
    Ok(serde_json::from_str(json)?)
}

/// Write a player to `path`, replacing any existing file.
pub fn save_to(player: &Player, path: &Path) -> CoreResult<()> {
    fs::write(path, to_json(player)?)?;
    log::info!("saved player to {}", path.display());
    Ok(())
}

/// Read a player from `path`.
pub fn load_from(path: &Path) -> CoreResult<Player> {
    let json = fs::read_to_string(path)?;
    let player = from_json(&json)?;
    log::info!("loaded player from {}", path.display());
    Ok(player)
}
