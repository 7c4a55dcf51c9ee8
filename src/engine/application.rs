use crate::engine::prelude::*;

/// An application the players race to release. Its cost is fixed
/// for the application's lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Application {
    pub kind: String,
    pub id: u32,
    pub cost: ManaCost,
}

impl Application {
    pub fn new(kind: impl Into<String>, id: u32, cost: ManaCost) -> Self {
        Self {
            kind: kind.into(),
            id,
            cost,
        }
    }

    pub fn release_action(&self) -> Action {
        Action::Release(self.id)
    }

    /// Whether the referee offers to release this application right now.
    /// Local affordability is not consulted.
    pub fn can_release_now(&self, legal: &LegalActions) -> bool {
        legal.contains(&self.release_action())
    }

    pub fn cost_excluding_pool(&self, pool: &ManaPool) -> ManaCost {
        self.cost.remaining_after(pool)
    }

    pub fn is_affordable(&self, pool: &ManaPool) -> bool {
        self.cost.is_affordable(pool)
    }

    pub fn required_shoddy_mana(&self, pool: &ManaPool) -> u32 {
        self.cost.required_shoddy_mana(pool)
    }
}
