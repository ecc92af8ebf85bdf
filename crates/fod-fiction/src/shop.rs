//! Shop command parsing and the interactive shop loop.

use fod_core::{CoreError, shop};
use strsim::jaro_winkler;

use crate::console::Console;
use crate::error::{FictionError, FictionResult};
use crate::prompt::choose;
use crate::store::{SaveStore, Session, slot_argument};

/// Minimum similarity for suggesting a verb the player may have meant.
const SUGGEST_THRESHOLD: f64 = 0.8;

/// Prompt shown while shopping.
pub const SHOP_PROMPT: &str = "shop> ";

/// Usage hint listing every shop verb.
pub const SHOP_USAGE: &str =
    "Commands: list, buy <n>, view <n>, use <n>, save [slot], load [slot], exit";

const VERBS: &[&str] = &["list", "buy", "view", "use", "save", "load", "exit"];

/// A parsed shop command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopCommand {
    /// Show the slate, inventory, and gold.
    List,
    /// Show one slate entry in detail.
    View(usize),
    /// Buy a slate entry.
    Buy(usize),
    /// Use an inventory item.
    Use(usize),
    /// Save to the default slot or a named one.
    Save(Option<String>),
    /// Load from the default slot or a named one.
    Load(Option<String>),
    /// Leave the shop.
    Exit,
}

/// Parse one line of shop input. Matching is case-insensitive.
pub fn parse_shop_command(input: &str) -> FictionResult<ShopCommand> {
    let input = input.trim().to_lowercase();
    let mut words = input.split_whitespace();
    let verb = words.next().unwrap_or("");
    let rest: Vec<&str> = words.collect();

    match verb {
        "list" if rest.is_empty() => Ok(ShopCommand::List),
        "exit" if rest.is_empty() => Ok(ShopCommand::Exit),
        "view" => parse_index(verb, &rest).map(ShopCommand::View),
        "buy" => parse_index(verb, &rest).map(ShopCommand::Buy),
        "use" => parse_index(verb, &rest).map(ShopCommand::Use),
        "save" => Ok(ShopCommand::Save(
            slot_argument(&input, "save").map(str::to_string),
        )),
        "load" => Ok(ShopCommand::Load(
            slot_argument(&input, "load").map(str::to_string),
        )),
        _ => Err(FictionError::UnknownCommand(input.clone())),
    }
}

fn parse_index(verb: &str, rest: &[&str]) -> FictionResult<usize> {
    let invalid = || FictionError::InvalidIndexFormat {
        verb: verb.to_string(),
        arg: rest.join(" "),
    };
    match rest {
        [arg] => arg.parse().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Usage hint for unrecognised input, with a suggestion when the verb looks
/// like a typo of a known one.
pub fn usage_hint(input: &str) -> String {
    let verb = input.split_whitespace().next().unwrap_or("").to_lowercase();
    let best = VERBS
        .iter()
        .map(|v| (*v, jaro_winkler(&verb, v)))
        .filter(|(_, score)| *score >= SUGGEST_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    match best {
        Some((suggestion, _)) if suggestion != verb => {
            format!("Did you mean '{suggestion}'?\n{SHOP_USAGE}")
        }
        _ => SHOP_USAGE.to_string(),
    }
}

/// Whether the shop loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Ask for the next command.
    Continue,
    /// Leave the shop.
    Exit,
}

/// Run one shop command against the session.
///
/// `Buy` asks the player to confirm once the entry exists and has a price;
/// declining changes nothing.
pub fn execute<S: SaveStore>(
    console: &mut dyn Console,
    session: &mut Session<S>,
    command: ShopCommand,
) -> FictionResult<Flow> {
    match command {
        ShopCommand::List => console.say(&shop::list(&session.player)),
        ShopCommand::View(index) => console.say(&shop::view(&session.player, index)?),
        ShopCommand::Buy(index) => {
            let slate = &session.player.slate;
            let item = slate.get(index).ok_or(CoreError::IndexOutOfRange {
                index,
                len: slate.len(),
            })?;
            let price = item
                .price
                .ok_or_else(|| CoreError::PriceUnset(item.name.clone()))?;
            let question = format!("Buy {} for {price} gold? (yes/no): ", item.name);
            if choose(console, &question, &["yes", "no"])? == "yes" {
                let purchase = shop::buy(&mut session.player, index)?;
                console.say(&purchase.to_string());
            } else {
                console.say("Purchase cancelled.");
            }
        }
        ShopCommand::Use(index) => {
            let usage = shop::use_item(&mut session.player, index)?;
            console.say(&usage.to_string());
        }
        ShopCommand::Save(slot) => console.say(&session.save(slot.as_deref())?),
        ShopCommand::Load(slot) => console.say(&session.load(slot.as_deref())?),
        ShopCommand::Exit => {
            console.say("You thank Yaztromo and take your leave.");
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

/// Read and run shop commands until the player types `exit`.
///
/// Command errors are reported and the loop continues; end of input and
/// interrupts are returned.
pub fn run_shop<S: SaveStore>(
    console: &mut dyn Console,
    session: &mut Session<S>,
) -> FictionResult<()> {
    console.say(SHOP_USAGE);
    loop {
        let line = console.read_line(SHOP_PROMPT)?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let command = match parse_shop_command(input) {
            Ok(command) => command,
            Err(e @ FictionError::UnknownCommand(_)) => {
                console.warn(&e.to_string());
                console.say(&usage_hint(input));
                continue;
            }
            Err(e) => {
                console.warn(&e.to_string());
                continue;
            }
        };

        log::debug!("shop command {command:?}");
        match execute(console, session, command) {
            Ok(Flow::Exit) => return Ok(()),
            Ok(Flow::Continue) => {}
            Err(e) if e.is_shutdown() => return Err(e),
            Err(e) => console.warn(&e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::store::MemoryStore;
    use fod_core::{Item, Player};

    fn session() -> Session<MemoryStore> {
        let mut player = Player::new();
        player.slate = vec![
            Item::priced("Cheap Trinket", 2),
            Item::priced("Expensive Amulet", 5),
        ];
        player.backpack.set_gold(5);
        Session::new(player, MemoryStore::new())
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_shop_command("list").unwrap(), ShopCommand::List);
        assert_eq!(parse_shop_command("BUY 1").unwrap(), ShopCommand::Buy(1));
        assert_eq!(parse_shop_command("view 0").unwrap(), ShopCommand::View(0));
        assert_eq!(parse_shop_command("  use 3 ").unwrap(), ShopCommand::Use(3));
        assert_eq!(parse_shop_command("Exit").unwrap(), ShopCommand::Exit);
        assert_eq!(parse_shop_command("save").unwrap(), ShopCommand::Save(None));
        assert_eq!(
            parse_shop_command("load SlotB").unwrap(),
            ShopCommand::Load(Some("slotb".into()))
        );
    }

    #[test]
    fn malformed_index_is_usage_error() {
        for input in ["buy", "buy two", "view -1", "use 1 2"] {
            assert!(
                matches!(
                    parse_shop_command(input),
                    Err(FictionError::InvalidIndexFormat { .. })
                ),
                "{input}"
            );
        }
    }

    #[test]
    fn unknown_command() {
        assert!(matches!(
            parse_shop_command("dance"),
            Err(FictionError::UnknownCommand(_))
        ));
        assert!(matches!(
            parse_shop_command("list everything"),
            Err(FictionError::UnknownCommand(_))
        ));
    }

    #[test]
    fn usage_hint_suggests_close_verbs() {
        assert!(usage_hint("lst").starts_with("Did you mean 'list'?"));
        assert_eq!(usage_hint("dance"), SHOP_USAGE);
    }

    #[test]
    fn confirmed_purchase() {
        let mut s = session();
        let mut console = ScriptedConsole::new(["yes"]);
        let flow = execute(&mut console, &mut s, ShopCommand::Buy(1)).unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(s.player.gold(), 0);
        assert_eq!(s.player.inventory[0].name, "Expensive Amulet");
        assert!(console.transcript().contains("Purchased Expensive Amulet"));
    }

    #[test]
    fn declined_purchase_changes_nothing() {
        let mut s = session();
        let before = s.player.clone();
        let mut console = ScriptedConsole::new(["no"]);
        execute(&mut console, &mut s, ShopCommand::Buy(0)).unwrap();
        assert_eq!(s.player, before);
        assert_eq!(console.output(), ["Purchase cancelled."]);
    }

    #[test]
    fn out_of_range_purchase_does_not_ask() {
        let mut s = session();
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let err = execute(&mut console, &mut s, ShopCommand::Buy(99)).unwrap_err();
        assert!(matches!(
            err,
            FictionError::Core(CoreError::IndexOutOfRange { index: 99, len: 2 })
        ));
        assert!(console.prompts().is_empty());
    }

    #[test]
    fn unpriced_purchase_does_not_ask() {
        let mut s = session();
        s.player.slate.push(Item::new("Mystery Box"));
        let before = s.player.clone();
        let mut console = ScriptedConsole::new(["yes"]);
        let err = execute(&mut console, &mut s, ShopCommand::Buy(2)).unwrap_err();
        assert!(matches!(
            err,
            FictionError::Core(CoreError::PriceUnset(ref name)) if name == "Mystery Box"
        ));
        assert!(console.prompts().is_empty());
        assert_eq!(console.remaining(), 1);
        assert_eq!(s.player, before);
    }

    #[test]
    fn shop_session_scenario() {
        let mut s = session();
        let mut console = ScriptedConsole::new([
            "buy 99", "buy 1", "yes", "buy 0", "yes", "buy x", "haggle", "list", "exit",
        ]);
        run_shop(&mut console, &mut s).unwrap();

        assert_eq!(s.player.gold(), 0);
        assert_eq!(s.player.inventory, vec![Item::priced("Expensive Amulet", 5)]);

        let out = console.transcript();
        assert!(out.contains("out of range"));
        assert!(out.contains("Insufficient funds"));
        assert!(out.contains("usage: buy <index> (got 'x')"));
        assert!(out.contains("unknown command: haggle"));
        assert!(out.contains("Gold: 0"));
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn use_in_shop() {
        let mut s = session();
        s.player.stamina = 10;
        s.player.inventory.push(Item::new("Potion of Healing"));
        let mut console = ScriptedConsole::new(["use 0", "use 0", "exit"]);
        run_shop(&mut console, &mut s).unwrap();
        assert_eq!(s.player.stamina, 12);
        assert!(s.player.inventory.is_empty());
        assert!(console.transcript().contains("out of range"));
    }

    #[test]
    fn save_and_load_in_shop() {
        let mut s = session();
        let mut console = ScriptedConsole::new(["save mine", "buy 0", "yes", "load mine", "exit"]);
        run_shop(&mut console, &mut s).unwrap();
        assert_eq!(s.player.gold(), 5);
        assert!(s.player.inventory.is_empty());
        assert!(s.store.get(Some("mine")).is_some());
    }

    #[test]
    fn end_of_input_leaves_the_loop() {
        let mut s = session();
        let mut console = ScriptedConsole::new(["list"]);
        let err = run_shop(&mut console, &mut s).unwrap_err();
        assert!(err.is_shutdown());
    }

    #[test]
    fn end_of_input_during_confirmation() {
        let mut s = session();
        let before = s.player.clone();
        let mut console = ScriptedConsole::new(["buy 0"]);
        let err = run_shop(&mut console, &mut s).unwrap_err();
        assert!(matches!(err, FictionError::EndOfInput));
        assert_eq!(s.player, before);
    }
}
