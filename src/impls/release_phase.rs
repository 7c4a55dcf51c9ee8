use log::{debug, warn};

use crate::engine::prelude::*;

/// Release whichever offered application leans least on shoddy mana.
pub fn choose_release(snapshot: &GameStateSnapshot) -> Action {
    let pool = snapshot.player.available_mana();

    let best = snapshot
        .releasable_applications()
        .min_by_key(|app| app.required_shoddy_mana(&pool));

    match best {
        Some(app) => {
            debug!("release: picked application {} ({})", app.id, app.kind);
            app.release_action()
        }
        None => {
            // legality trails affordability by a tick
            for app in snapshot.applications.iter().filter(|app| app.is_affordable(&pool)) {
                warn!("release: application {} is paid for but not offered yet", app.id);
            }
            Action::Random
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(apps: Vec<Application>, legal: &[&str]) -> GameStateSnapshot {
        let mut snapshot = GameStateSnapshot::new(Phase::Release, Player::default(), Opponent::default());
        snapshot.applications = apps;
        snapshot.legal_actions = legal.iter().map(|s| s.to_string()).collect();
        snapshot
    }

    fn app(id: u32, desk: Desk, amount: u32) -> Application {
        Application::new("APPLICATION", id, ManaCost::new([(desk, amount)]))
    }

    #[test]
    fn least_shoddy_release_wins() {
        let mut snapshot = snapshot(
            vec![app(1, Desk::Training, 4), app(2, Desk::Coding, 4), app(3, Desk::Coding, 1)],
            &["RANDOM", "RELEASE 1", "RELEASE 2"],
        );
        snapshot.player.hand = vec![Card::Generic(Desk::Coding), Card::Generic(Desk::Training)].into();
        snapshot.player.hand.add(Card::Generic(Desk::Coding));
        assert_eq!(choose_release(&snapshot), Action::Release(2));
    }

    #[test]
    fn ties_go_to_list_order() {
        let snapshot = snapshot(
            vec![app(4, Desk::Training, 2), app(9, Desk::Coding, 2)],
            &["RELEASE 9", "RELEASE 4", "RANDOM"],
        );
        assert_eq!(choose_release(&snapshot), Action::Release(4));
    }

    #[test]
    fn nothing_offered_means_random() {
        let snapshot = snapshot(vec![app(1, Desk::Coding, 1)], &["RANDOM", "WAIT"]);
        assert_eq!(choose_release(&snapshot), Action::Random);
    }
}
