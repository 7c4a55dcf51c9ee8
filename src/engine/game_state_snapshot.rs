use std::{fmt, str::FromStr};

use super::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Move,
    GiveCard,
    ThrowCard,
    PlayCard,
    Release,
}

impl FromStr for Phase {
    type Err = DecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Phase::*;
        match s.trim() {
            "MOVE" => Ok(Move),
            "GIVE_CARD" => Ok(GiveCard),
            "THROW_CARD" => Ok(ThrowCard),
            "PLAY_CARD" => Ok(PlayCard),
            "RELEASE" => Ok(Release),
            other => Err(DecisionError::UnknownPhase(other.into())),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Phase::*;
        f.write_str(match self {
            Move => "MOVE",
            GiveCard => "GIVE_CARD",
            ThrowCard => "THROW_CARD",
            PlayCard => "PLAY_CARD",
            Release => "RELEASE",
        })
    }
}

/// Everything the referee told us this turn. Built from scratch every
/// turn and only ever read afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStateSnapshot {
    pub phase: Phase,
    pub applications: Vec<Application>,
    pub legal_actions: LegalActions,
    pub player: Player,
    pub opponent: Opponent,
}

impl GameStateSnapshot {
    pub fn new(phase: Phase, player: Player, opponent: Opponent) -> Self {
        Self {
            phase,
            applications: vec![],
            legal_actions: LegalActions::default(),
            player,
            opponent,
        }
    }

    /// A desk is free when nobody currently stands on it.
    pub fn is_desk_free(&self, desk: Desk) -> bool {
        self.player.desk() != Some(desk) && self.opponent.desk() != Some(desk)
    }

    pub fn free_desks(&self) -> Vec<Desk> {
        ALL_DESKS.into_iter().filter(|desk| self.is_desk_free(*desk)).collect()
    }

    /// Desks on or next to the anchors picked by `scope`.
    pub fn unsafe_desks(&self, scope: AdjacencyScope) -> Vec<Desk> {
        let opponent = match scope {
            AdjacencyScope::OwnDesk => None,
            AdjacencyScope::BothDesks => self.opponent.desk(),
        };
        let mut desks: Vec<Desk> = self
            .player
            .desk()
            .into_iter()
            .chain(opponent)
            .flat_map(Desk::neighbourhood)
            .collect();
        desks.sort();
        desks.dedup();
        desks
    }

    pub fn releasable_applications(&self) -> impl Iterator<Item = &Application> + '_ {
        self.applications
            .iter()
            .filter(|app| app.can_release_now(&self.legal_actions))
    }
}
