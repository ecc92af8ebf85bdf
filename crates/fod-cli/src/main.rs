//! CLI frontend for the Forest of Doom adventure.

mod commands;
mod saves;

use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;

#[derive(Parser)]
#[command(
    name = "fod",
    about = "The Forest of Doom: a text adventure in Darkwood Forest",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the adventure
    Play {
        /// Print passages at once and skip "Press Enter" pauses
        #[arg(long)]
        fast: bool,

        /// RNG seed for reproducible attribute rolls
        #[arg(long)]
        seed: Option<u64>,

        /// Delay between narrated characters, in milliseconds
        #[arg(long, default_value = "30")]
        delay_ms: u64,

        /// Saved game to start from; in-game loads read it (or its slots)
        #[arg(long)]
        load: Option<PathBuf>,

        /// File for in-game saves and the final record
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Show a saved game as a table
    Inspect {
        /// Path to the save file
        path: PathBuf,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .format(|fmt, record| writeln!(fmt, "[{}] {}", record.level(), record.args()))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            fast,
            seed,
            delay_ms,
            load,
            save,
        } => commands::play::run(fast, seed, delay_ms, load.as_deref(), save.as_deref()),
        Commands::Inspect { path } => commands::inspect::run(&path),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}
