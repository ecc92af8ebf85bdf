use std::path::Path;
use std::process;

use fod_core::{Player, persist};
use fod_fiction::{Game, GameConfig, StdConsole};

use crate::saves::FileStore;

const FAREWELL: &str = "\nExiting... Goodbye!";

pub fn run(
    fast: bool,
    seed: Option<u64>,
    delay_ms: u64,
    load: Option<&Path>,
    save: Option<&Path>,
) -> Result<(), String> {
    let config = GameConfig::default()
        .with_fast(fast)
        .with_seed(seed)
        .with_delay_ms(delay_ms);

    let player = match load {
        Some(path) => persist::load_from(path)
            .map_err(|e| format!("failed to load player from {}: {e}", path.display()))?,
        None => Player::new(),
    };

    // Blocking stdin reads retry on EINTR, so Ctrl-C is answered here.
    ctrlc::set_handler(|| {
        println!("{FAREWELL}");
        process::exit(0);
    })
    .map_err(|e| format!("failed to install Ctrl-C handler: {e}"))?;

    let store = FileStore::new(save.map(Path::to_path_buf), load.map(Path::to_path_buf));
    let mut game = Game::new(StdConsole::new(&config), player, store, &config);

    match game.run() {
        Ok(stage) => log::info!("story ended at {stage}"),
        Err(e) if e.is_shutdown() => {
            println!("{FAREWELL}");
            return Ok(());
        }
        Err(e) => return Err(e.to_string()),
    }

    if let Some(path) = save {
        let (player, _, _) = game.into_parts();
        persist::save_to(&player, path)
            .map_err(|e| format!("failed to save player to {}: {e}", path.display()))?;
        println!("Saved player to {}", path.display());
    }
    Ok(())
}
