use log::{debug, info};

use super::prelude::*;

use crate::impls::{card_phases, move_phase, release_phase};

/// The decision engine. Holds only configuration: everything it knows
/// about the game arrives in the snapshot handed to `decide`, and
/// nothing is remembered from one turn to the next.
pub struct Game {
    pub config: StrategyConfig,
}

impl Game {
    pub fn new(config: StrategyConfig) -> Self {
        Self { config }
    }

    /// Picks this turn's action. The phase selects exactly one strategy,
    /// and whatever it picks must be among the snapshot's legal actions.
    pub fn decide(&self, snapshot: &GameStateSnapshot) -> Result<Action, DecisionError> {
        use Phase::*;
        debug!(
            "decide: phase {} with {} applications and {} legal actions",
            snapshot.phase,
            snapshot.applications.len(),
            snapshot.legal_actions.commands().len()
        );

        let action = match snapshot.phase {
            Move => move_phase::choose_move(snapshot, &self.config),
            Release => release_phase::choose_release(snapshot),
            PlayCard => card_phases::choose_play(snapshot, &self.config),
            GiveCard => card_phases::choose_give(snapshot, &self.config),
            ThrowCard => card_phases::choose_throw(snapshot),
        };

        let action = snapshot.legal_actions.assert_legal(action)?;
        info!("decide: {} phase -> {}", snapshot.phase, action);
        Ok(action)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(StrategyConfig::default())
    }
}
