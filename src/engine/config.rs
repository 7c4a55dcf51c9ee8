use std::{env, str::FromStr};

use color_eyre::{eyre::WrapErr, Result};

use crate::engine::prelude::*;

pub const ADJACENCY_VAR: &str = "DESK_BOT_ADJACENCY";
pub const SAFETY_THRESHOLD_VAR: &str = "DESK_BOT_SAFETY_THRESHOLD";

/// Whose desks make their neighbours unsafe to move towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AdjacencyScope {
    #[default]
    OwnDesk,
    BothDesks,
}

impl FromStr for AdjacencyScope {
    type Err = DecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "own" => Ok(AdjacencyScope::OwnDesk),
            "both" => Ok(AdjacencyScope::BothDesks),
            _ => Err(DecisionError::Malformed { what: "adjacency scope", token: s.into() }),
        }
    }
}

/// Tunables shared by every phase strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrategyConfig {
    /// A release needing at most this much shoddy mana is worth waiting for.
    pub release_safety_threshold: u32,
    pub adjacency: AdjacencyScope,
    /// Most wanted first.
    pub play_priority: Vec<Desk>,
    /// First offered first.
    pub give_priority: Vec<Desk>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        use Desk::*;
        let play_priority = vec![Coding, Training, ArchitectureStudy, DailyRoutine, CodeReview];
        let give_priority = play_priority.iter().rev().copied().collect();
        Self {
            release_safety_threshold: 2,
            adjacency: AdjacencyScope::default(),
            play_priority,
            give_priority,
        }
    }
}

impl StrategyConfig {
    pub fn with_adjacency(mut self, adjacency: AdjacencyScope) -> Self {
        self.adjacency = adjacency;
        self
    }

    pub fn with_safety_threshold(mut self, threshold: u32) -> Self {
        self.release_safety_threshold = threshold;
        self
    }

    /// Also resets the give order to the reverse of the new play order.
    pub fn with_play_priority(mut self, priority: Vec<Desk>) -> Self {
        self.give_priority = priority.iter().rev().copied().collect();
        self.play_priority = priority;
        self
    }

    pub fn with_give_priority(mut self, priority: Vec<Desk>) -> Self {
        self.give_priority = priority;
        self
    }

    /// Defaults, overridden by whichever variables are set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ADJACENCY_VAR) {
            let scope = raw
                .parse::<AdjacencyScope>()
                .wrap_err_with(|| format!("reading {ADJACENCY_VAR}"))?;
            config = config.with_adjacency(scope);
        }

        if let Some(raw) = lookup(SAFETY_THRESHOLD_VAR) {
            let threshold = raw
                .trim()
                .parse::<u32>()
                .wrap_err_with(|| format!("reading {SAFETY_THRESHOLD_VAR}"))?;
            config = config.with_safety_threshold(threshold);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = StrategyConfig::default();
        assert_eq!(config.release_safety_threshold, 2);
        assert_eq!(config.adjacency, AdjacencyScope::OwnDesk);
        let reversed: Vec<_> = config.play_priority.iter().rev().copied().collect();
        assert_eq!(config.give_priority, reversed);
        assert_eq!(config.play_priority[0], Desk::Coding);
    }

    #[test]
    fn lookup_overrides_defaults() {
        let config = StrategyConfig::from_lookup(|name| match name {
            ADJACENCY_VAR => Some("both".into()),
            SAFETY_THRESHOLD_VAR => Some(" 4 ".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.adjacency, AdjacencyScope::BothDesks);
        assert_eq!(config.release_safety_threshold, 4);
    }

    #[test]
    fn malformed_values_are_reported() {
        let err = StrategyConfig::from_lookup(|name| {
            (name == SAFETY_THRESHOLD_VAR).then(|| "lots".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains(SAFETY_THRESHOLD_VAR));

        assert!(StrategyConfig::from_lookup(|name| {
            (name == ADJACENCY_VAR).then(|| "everyone".to_string())
        })
        .is_err());
    }

    #[test]
    fn play_priority_resets_give_priority() {
        let config = StrategyConfig::default().with_play_priority(vec![Desk::Refactoring, Desk::Training]);
        assert_eq!(config.give_priority, vec![Desk::Training, Desk::Refactoring]);
    }
}
