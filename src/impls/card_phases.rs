use log::debug;

use crate::engine::prelude::*;

/// Hold on to our cards if an application is cheap enough to release
/// with what we have, otherwise play the most wanted card in hand.
pub fn choose_play(snapshot: &GameStateSnapshot, config: &StrategyConfig) -> Action {
    if let Some(app) = safe_release(snapshot, config.release_safety_threshold) {
        debug!("play: application {} is within reach, keeping cards", app.id);
        return Action::Wait;
    }

    first_in_hand(snapshot, &config.play_priority)
        .map(Action::Play)
        .unwrap_or(Action::Random)
}

/// Give away the least wanted card in hand.
pub fn choose_give(snapshot: &GameStateSnapshot, config: &StrategyConfig) -> Action {
    first_in_hand(snapshot, &config.give_priority)
        .map(|desk| Action::Give(Card::Generic(desk)))
        .unwrap_or(Action::Random)
}

/// Nothing clever to do when throwing cards, let the referee choose.
pub fn choose_throw(_snapshot: &GameStateSnapshot) -> Action {
    Action::Random
}

fn safe_release(snapshot: &GameStateSnapshot, threshold: u32) -> Option<&Application> {
    let pool = snapshot.player.available_mana();
    snapshot
        .releasable_applications()
        .find(|app| app.required_shoddy_mana(&pool) <= threshold)
}

fn first_in_hand(snapshot: &GameStateSnapshot, priority: &[Desk]) -> Option<Desk> {
    priority
        .iter()
        .copied()
        .find(|desk| snapshot.player.hand.contains(Card::Generic(*desk)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(phase: Phase, hand: Vec<Card>, apps: Vec<Application>) -> GameStateSnapshot {
        let mut snapshot = GameStateSnapshot::new(phase, Player::default(), Opponent::default());
        snapshot.player.hand = hand.into();
        snapshot.applications = apps;
        snapshot
    }

    fn offer(snapshot: &mut GameStateSnapshot, legal: &[&str]) {
        snapshot.legal_actions = legal.iter().map(|s| s.to_string()).collect();
    }

    #[test]
    fn plays_highest_priority_card() {
        let snapshot = snapshot(
            Phase::PlayCard,
            vec![Card::Generic(Desk::CodeReview), Card::Generic(Desk::Training), Card::Bonus],
            vec![],
        );
        assert_eq!(choose_play(&snapshot, &StrategyConfig::default()), Action::Play(Desk::Training));
    }

    #[test]
    fn waits_when_offered_release_is_safe() {
        // coding 3: 2 from the card, 1 more from shoddy
        let mut snapshot = snapshot(
            Phase::PlayCard,
            vec![Card::Generic(Desk::Coding)],
            vec![Application::new("APPLICATION", 1, ManaCost::new([(Desk::Coding, 3)]))],
        );
        offer(&mut snapshot, &["RANDOM", "WAIT", "CODING", "RELEASE 1"]);
        assert_eq!(choose_play(&snapshot, &StrategyConfig::default()), Action::Wait);

        let strict = StrategyConfig::default().with_safety_threshold(0);
        assert_eq!(choose_play(&snapshot, &strict), Action::Play(Desk::Coding));
    }

    #[test]
    fn affordable_but_unoffered_release_does_not_hold_cards_back() {
        let mut snapshot = snapshot(
            Phase::PlayCard,
            vec![Card::Generic(Desk::Coding)],
            vec![Application::new("APPLICATION", 1, ManaCost::new([(Desk::Coding, 2)]))],
        );
        offer(&mut snapshot, &["RANDOM", "WAIT", "CODING"]);
        assert!(snapshot.applications[0].is_affordable(&snapshot.player.available_mana()));
        assert_eq!(choose_play(&snapshot, &StrategyConfig::default()), Action::Play(Desk::Coding));
    }

    #[test]
    fn expensive_offered_release_does_not_hold_cards_back() {
        let mut snapshot = snapshot(
            Phase::PlayCard,
            vec![Card::Generic(Desk::Coding)],
            vec![Application::new("APPLICATION", 1, ManaCost::new([(Desk::Training, 8)]))],
        );
        offer(&mut snapshot, &["RANDOM", "WAIT", "CODING", "RELEASE 1"]);
        assert_eq!(choose_play(&snapshot, &StrategyConfig::default()), Action::Play(Desk::Coding));
    }

    #[test]
    fn no_playable_card_means_random() {
        let snapshot = snapshot(
            Phase::PlayCard,
            vec![Card::Generic(Desk::TaskPrioritization), Card::TechDebt],
            vec![],
        );
        assert_eq!(choose_play(&snapshot, &StrategyConfig::default()), Action::Random);
    }

    #[test]
    fn gives_least_wanted_card() {
        let snapshot = snapshot(
            Phase::GiveCard,
            vec![Card::Generic(Desk::Coding), Card::Generic(Desk::DailyRoutine)],
            vec![Application::new("APPLICATION", 1, ManaCost::new([(Desk::Coding, 1)]))],
        );
        assert_eq!(
            choose_give(&snapshot, &StrategyConfig::default()),
            Action::Give(Card::Generic(Desk::DailyRoutine))
        );
        assert_eq!(choose_give(&snapshot_with_empty_hand(), &StrategyConfig::default()), Action::Random);
    }

    fn snapshot_with_empty_hand() -> GameStateSnapshot {
        snapshot(Phase::GiveCard, vec![], vec![])
    }

    #[test]
    fn throwing_is_left_to_the_referee() {
        assert_eq!(choose_throw(&snapshot_with_empty_hand()), Action::Random);
    }
}
