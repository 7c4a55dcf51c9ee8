use log::debug;

use crate::engine::prelude::*;

/// An application we could walk towards, with what it takes to get there.
#[derive(Debug)]
struct Candidate<'a> {
    app: &'a Application,
    target: Desk,
    shoddy: u32,
    safe_desks: usize,
}

/// Walk to a desk that pays towards the cheapest application we can't
/// release yet. Falls back to `Action::Random` when no desk helps.
pub fn choose_move(snapshot: &GameStateSnapshot, config: &StrategyConfig) -> Action {
    let pool = snapshot.player.available_mana();
    let unsafe_desks = snapshot.unsafe_desks(config.adjacency);

    let mut candidates: Vec<Candidate> = snapshot
        .applications
        .iter()
        .filter(|app| !app.can_release_now(&snapshot.legal_actions))
        .filter_map(|app| {
            let remaining = app.cost_excluding_pool(&pool);
            let target = remaining.desks().find(|desk| snapshot.is_desk_free(*desk))?;
            let safe_desks = remaining
                .desks()
                .filter(|desk| !unsafe_desks.contains(desk))
                .count();
            Some(Candidate {
                app,
                target,
                shoddy: app.required_shoddy_mana(&pool),
                safe_desks,
            })
        })
        .collect();

    // stable, so list order breaks the remaining ties
    candidates.sort_by(|a, b| {
        a.shoddy
            .cmp(&b.shoddy)
            .then_with(|| b.safe_desks.cmp(&a.safe_desks))
    });

    for candidate in &candidates {
        debug!(
            "move: application {} needs {} shoddy, {} safe desks, target {}",
            candidate.app.id, candidate.shoddy, candidate.safe_desks, candidate.target
        );
    }

    match candidates.first() {
        Some(best) => Action::Move(best.target),
        None => {
            debug!("move: no application can be helped by a free desk");
            Action::Random
        }
    }
}
