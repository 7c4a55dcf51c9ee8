pub use crate::engine::{
    action::*,
    application::*,
    card::*,
    config::*,
    deck::*,
    error::*,
    game::*,
    game_state_snapshot::*,
    mana::*,
    player::*,
};
