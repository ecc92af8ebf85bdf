//! Core model for the Forest of Doom adventure.
//!
//! Holds the player record (attributes, backpack, potion, slate, inventory),
//! the shop engine that buys and uses items against it, Yaztromo's catalog,
//! and JSON persistence for save files.

pub mod catalog;
pub mod error;
pub mod item;
pub mod persist;
pub mod player;
pub mod shop;

pub use error::{CoreError, CoreResult};
pub use item::{Effect, Item};
pub use player::{Backpack, Player, Potion, generate_stats};
pub use shop::{Purchase, Usage};
