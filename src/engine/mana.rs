use std::{collections::BTreeMap, fmt, str::FromStr};

use log::trace;

use super::error::DecisionError;

/// A board desk. Desks double as the resource categories that
/// application costs are expressed in, so a position and a cost
/// share this one identifier space.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Desk {
    Training,
    Coding,
    DailyRoutine,
    TaskPrioritization,
    ArchitectureStudy,
    ContinuousDelivery,
    CodeReview,
    Refactoring,
}

pub const DESK_COUNT: usize = 8;

pub const ALL_DESKS: [Desk; DESK_COUNT] = [
    Desk::Training,
    Desk::Coding,
    Desk::DailyRoutine,
    Desk::TaskPrioritization,
    Desk::ArchitectureStudy,
    Desk::ContinuousDelivery,
    Desk::CodeReview,
    Desk::Refactoring,
];

impl Desk {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Desk> {
        ALL_DESKS.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        use Desk::*;
        match self {
            Training => "TRAINING",
            Coding => "CODING",
            DailyRoutine => "DAILY_ROUTINE",
            TaskPrioritization => "TASK_PRIORITIZATION",
            ArchitectureStudy => "ARCHITECTURE_STUDY",
            ContinuousDelivery => "CONTINUOUS_DELIVERY",
            CodeReview => "CODE_REVIEW",
            Refactoring => "REFACTORING",
        }
    }

    /// Desks whose index is within one of this desk, itself included.
    /// The board does not wrap around.
    pub fn neighbourhood(self) -> impl Iterator<Item = Desk> {
        let index = self.index();
        (index.saturating_sub(1)..=index + 1).filter_map(Desk::from_index)
    }
}

impl fmt::Display for Desk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Desk {
    type Err = DecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_DESKS
            .iter()
            .copied()
            .find(|desk| desk.name() == s)
            .ok_or_else(|| DecisionError::Malformed { what: "desk", token: s.into() })
    }
}

/// A single unit of supply. Specific mana only pays for its own desk,
/// wildcard pays for anything, and shoddy pays for anything as a last resort.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ManaType {
    Specific(Desk),
    Wildcard,
    Shoddy,
}

impl From<Desk> for ManaType {
    fn from(desk: Desk) -> Self {
        ManaType::Specific(desk)
    }
}

/// Counts of available mana per type. Never stores a zero count.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ManaPool {
    mana: BTreeMap<ManaType, u32>,
}

impl ManaPool {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn add(&mut self, mana_type: ManaType, amount: u32) {
        if amount == 0 {
            return;
        }
        *self.mana.entry(mana_type).or_insert(0) += amount;
    }

    pub fn get(&self, mana_type: ManaType) -> u32 {
        self.mana.get(&mana_type).copied().unwrap_or(0)
    }

    /// Removes up to `amount` of the given type and returns how much was taken.
    pub fn take(&mut self, mana_type: ManaType, amount: u32) -> u32 {
        let available = self.get(mana_type);
        let taken = available.min(amount);
        if taken == available {
            self.mana.remove(&mana_type);
        } else {
            self.mana.insert(mana_type, available - taken);
        }
        taken
    }

    pub fn without(&self, mana_type: ManaType) -> Self {
        let mut ret = self.clone();
        ret.mana.remove(&mana_type);
        ret
    }

    pub fn is_empty(&self) -> bool {
        self.mana.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (ManaType, u32)> + '_ {
        self.mana.iter().map(|(mana_type, amount)| (*mana_type, *amount))
    }
}

impl FromIterator<ManaType> for ManaPool {
    fn from_iter<T: IntoIterator<Item = ManaType>>(iter: T) -> Self {
        let mut pool = Self::empty();
        iter.into_iter().for_each(|mana_type| pool.add(mana_type, 1));
        pool
    }
}

impl FromIterator<(ManaType, u32)> for ManaPool {
    fn from_iter<T: IntoIterator<Item = (ManaType, u32)>>(iter: T) -> Self {
        let mut pool = Self::empty();
        iter.into_iter().for_each(|(mana_type, amount)| pool.add(mana_type, amount));
        pool
    }
}

/// An ordered cost vector. Only desks with a positive amount are listed.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ManaCost {
    entries: Vec<(Desk, u32)>,
}

impl ManaCost {
    pub fn new(entries: impl IntoIterator<Item = (Desk, u32)>) -> Self {
        Self {
            entries: entries.into_iter().filter(|(_, amount)| *amount > 0).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a cost from one amount per desk, in desk index order.
    pub fn from_amounts(amounts: [u32; DESK_COUNT]) -> Self {
        Self::new(ALL_DESKS.into_iter().zip(amounts))
    }

    pub fn entries(&self) -> &[(Desk, u32)] {
        &self.entries
    }

    pub fn desks(&self) -> impl Iterator<Item = Desk> + '_ {
        self.entries.iter().map(|(desk, _)| *desk)
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, amount)| amount).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// What is left to pay after spending the pool. Specific mana is matched
    /// first, then wildcard, then shoddy, each tier walking the entries in order.
    pub fn remaining_after(&self, pool: &ManaPool) -> ManaCost {
        let mut pool = pool.clone();
        let mut remaining: Vec<(Desk, u32)> = self.entries.clone();

        for (desk, amount) in remaining.iter_mut() {
            *amount -= pool.take(ManaType::Specific(*desk), *amount);
        }
        trace!("deduction: after specific mana {:?}", remaining);

        for fallback in [ManaType::Wildcard, ManaType::Shoddy] {
            let mut supply = pool.get(fallback);
            for (_, amount) in remaining.iter_mut() {
                let paid = supply.min(*amount);
                supply -= paid;
                *amount -= paid;
            }
            trace!("deduction: after {:?} mana {:?}", fallback, remaining);
        }

        ManaCost::new(remaining)
    }

    pub fn is_affordable(&self, pool: &ManaPool) -> bool {
        self.remaining_after(pool).is_empty()
    }

    /// How much of this cost is left for shoddy mana to cover.
    pub fn required_shoddy_mana(&self, pool: &ManaPool) -> u32 {
        self.remaining_after(&pool.without(ManaType::Shoddy)).total()
    }
}
