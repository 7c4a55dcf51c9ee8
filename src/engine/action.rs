use std::fmt;

use log::error;

use crate::engine::prelude::*;

/// Something we can tell the referee. The `Display` form is the exact
/// command text the referee expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Walk to the given desk.
    Move(Desk),

    /// Release the application with the given id.
    Release(u32),

    /// Play a card of the given desk from the hand.
    Play(Desk),

    /// Hand a card over to the opponent.
    Give(Card),

    /// Play nothing this phase.
    Wait,

    /// Let the referee pick. Used whenever no strategy applies.
    Random,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(desk) => write!(f, "MOVE {}", desk.index()),
            Action::Release(id) => write!(f, "RELEASE {id}"),
            Action::Play(desk) => write!(f, "{desk}"),
            Action::Give(card) => write!(f, "GIVE {}", card.index()),
            Action::Wait => f.write_str("WAIT"),
            Action::Random => f.write_str("RANDOM"),
        }
    }
}

/// The literal commands the referee accepts this turn, in the order given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegalActions {
    commands: Vec<String>,
}

impl LegalActions {
    pub fn new(commands: Vec<String>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn contains(&self, action: &Action) -> bool {
        let text = action.to_string();
        self.commands.iter().any(|command| *command == text)
    }

    /// Passes the action through only if its exact text was offered.
    pub fn assert_legal(&self, action: Action) -> Result<Action, DecisionError> {
        if self.contains(&action) {
            return Ok(action);
        }
        error!("validator: rejected '{}', legal actions are {:?}", action, self.commands);
        Err(DecisionError::IllegalAction {
            attempted: action.to_string(),
            legal: self.commands.clone(),
        })
    }
}

impl FromIterator<String> for LegalActions {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
