pub mod action;
pub mod application;
pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod game;
pub mod game_state_snapshot;
pub mod mana;
pub mod player;

pub mod prelude;
