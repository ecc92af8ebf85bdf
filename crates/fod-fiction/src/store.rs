//! Save/load collaborators and the handlers that expose them at prompts.

use std::collections::HashMap;

use fod_core::Player;

use crate::error::FictionResult;
use crate::prompt::SpecialHandler;

/// Where saved games go. Implemented by the program that owns the files.
pub trait SaveStore {
    /// Save `player` to the default slot or to `slot`.
    ///
    /// Returns a message describing what happened.
    fn save(&mut self, player: &Player, slot: Option<&str>) -> FictionResult<String>;

    /// Load a player from the default slot or from `slot`, if there is one.
    fn load(&mut self, slot: Option<&str>) -> FictionResult<Option<Player>>;
}

/// Store that keeps saves in memory, keyed by slot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<Option<String>, Player>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The player saved in `slot`, if any.
    pub fn get(&self, slot: Option<&str>) -> Option<&Player> {
        self.slots.get(&slot.map(str::to_string))
    }

    /// Put a player into `slot` directly.
    pub fn insert(&mut self, slot: Option<&str>, player: Player) {
        self.slots.insert(slot.map(str::to_string), player);
    }
}

impl SaveStore for MemoryStore {
    fn save(&mut self, player: &Player, slot: Option<&str>) -> FictionResult<String> {
        self.insert(slot, player.clone());
        Ok(match slot {
            Some(slot) => format!("Game saved to slot '{slot}'."),
            None => "Game saved.".to_string(),
        })
    }

    fn load(&mut self, slot: Option<&str>) -> FictionResult<Option<Player>> {
        Ok(self.get(slot).cloned())
    }
}

/// The state a prompt's save/load handlers work on.
#[derive(Debug)]
pub struct Session<S> {
    /// The player being played.
    pub player: Player,
    /// Where saves go.
    pub store: S,
}

impl<S: SaveStore> Session<S> {
    /// Create a session for `player` backed by `store`.
    pub fn new(player: Player, store: S) -> Self {
        Self { player, store }
    }

    /// Save the current player.
    pub fn save(&mut self, slot: Option<&str>) -> FictionResult<String> {
        log::info!("saving to slot {slot:?}");
        self.store.save(&self.player, slot)
    }

    /// Replace the current player with a saved one, if the store has one.
    pub fn load(&mut self, slot: Option<&str>) -> FictionResult<String> {
        match self.store.load(slot)? {
            Some(loaded) => {
                log::info!("loaded slot {slot:?}");
                self.player.restore(loaded);
                Ok("Saved game loaded.".to_string())
            }
            None => Ok("No saved game to load.".to_string()),
        }
    }
}

/// Handlers for `save`, `save <slot>`, `load`, and `load <slot>`.
pub fn save_load_handlers<S: SaveStore + 'static>() -> Vec<SpecialHandler<Session<S>>> {
    vec![
        SpecialHandler::exact("save", |s: &mut Session<S>, _| s.save(None)),
        SpecialHandler::prefix("save ", |s: &mut Session<S>, input| {
            s.save(slot_argument(input, "save"))
        }),
        SpecialHandler::exact("load", |s: &mut Session<S>, _| s.load(None)),
        SpecialHandler::prefix("load ", |s: &mut Session<S>, input| {
            s.load(slot_argument(input, "load"))
        }),
    ]
}

/// The slot named after `verb`, or `None` when only the verb was given.
pub fn slot_argument<'a>(input: &'a str, verb: &str) -> Option<&'a str> {
    let rest = input.get(verb.len()..)?.trim();
    (!rest.is_empty()).then_some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::prompt::prompt;

    #[test]
    fn slot_argument_parsing() {
        assert_eq!(slot_argument("save slota", "save"), Some("slota"));
        assert_eq!(slot_argument("save   ", "save"), None);
        assert_eq!(slot_argument("save", "save"), None);
    }

    #[test]
    fn save_then_load_slot() {
        let mut player = Player::new();
        player.skill = 11;
        let mut session = Session::new(player, MemoryStore::new());

        assert_eq!(session.save(Some("a")).unwrap(), "Game saved to slot 'a'.");
        session.player.skill = 3;
        assert_eq!(session.load(Some("a")).unwrap(), "Saved game loaded.");
        assert_eq!(session.player.skill, 11);
    }

    #[test]
    fn load_of_empty_slot_changes_nothing() {
        let mut session = Session::new(Player::new(), MemoryStore::new());
        session.player.skill = 9;
        assert_eq!(session.load(None).unwrap(), "No saved game to load.");
        assert_eq!(session.player.skill, 9);
    }

    #[test]
    fn handlers_at_a_prompt() {
        let mut console = ScriptedConsole::new(["save slotA", "load", "yes"]);
        let mut store = MemoryStore::new();
        let mut saved = Player::new();
        saved.luck = 42;
        store.insert(None, saved);

        let mut session = Session::new(Player::new(), store);
        let mut handlers = save_load_handlers::<MemoryStore>();
        let choice = prompt(
            &mut console,
            "? ",
            &["yes", "no"],
            &mut handlers,
            &mut session,
        )
        .unwrap();

        assert_eq!(choice, "yes");
        assert!(session.store.get(Some("slota")).is_some());
        assert_eq!(session.player.luck, 42);
        assert_eq!(
            console.output(),
            ["Game saved to slot 'slota'.", "Saved game loaded."]
        );
    }
}
