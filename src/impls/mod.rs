//! One strategy per game phase. Each takes the snapshot and picks an
//! action, leaving validation to the caller.

pub mod card_phases;
pub mod move_phase;
pub mod release_phase;
