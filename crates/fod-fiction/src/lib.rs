//! Interactive fiction driver for the Forest of Doom adventure.
//!
//! Walks the player through the opening of the book: the intro, rolling
//! attributes, picking a potion, meeting Yaztromo, and shopping from his
//! slate. All input goes through [`prompt::prompt`], which also answers
//! `save`/`load` commands at any question through a [`store::SaveStore`].

pub mod config;
pub mod console;
pub mod error;
pub mod prompt;
pub mod shop;
pub mod store;
pub mod story;

mod text;

pub use config::GameConfig;
pub use console::{Console, ScriptedConsole, StdConsole};
pub use error::{FictionError, FictionResult};
pub use prompt::{SpecialHandler, choose, prompt};
pub use store::{MemoryStore, SaveStore, Session};
pub use story::{Game, Stage};
