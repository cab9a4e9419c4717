//! Classification of a resolved step.

use crate::stats::Debuffs;

/// What a resolved step amounted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutcomeKind {
    /// Nothing decisive happened.
    Safe,
    /// A monster was defeated.
    Win,
    /// The hero gained a level.
    #[strum(serialize = "Level up")]
    LevelUp,
    /// The hero died.
    Death,
    /// The hero was killed by a petrifying gaze.
    Petrified,
    /// The step's preconditions did not hold; the state is unchanged.
    #[strum(serialize = "Not possible")]
    NotPossible,
}

impl OutcomeKind {
    /// Hero died, one way or another.
    pub const fn is_defeat(self) -> bool {
        matches!(self, OutcomeKind::Death | OutcomeKind::Petrified)
    }

    pub const fn is_victory(self) -> bool {
        matches!(self, OutcomeKind::Win | OutcomeKind::LevelUp)
    }
}

/// Result of one resolved step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    pub kind: OutcomeKind,
    /// Debuffs newly incurred during the step.
    pub debuffs: Debuffs,
    /// Net change to the followed god's piety.
    pub piety: i32,
}

impl Outcome {
    pub const fn new(kind: OutcomeKind) -> Self {
        Self {
            kind,
            debuffs: Debuffs::empty(),
            piety: 0,
        }
    }

    pub const fn safe() -> Self {
        Self::new(OutcomeKind::Safe)
    }

    pub const fn not_possible() -> Self {
        Self::new(OutcomeKind::NotPossible)
    }
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.debuffs.is_empty() {
            write!(f, " [{}]", self.debuffs)?;
        }
        if self.piety != 0 {
            write!(f, " (piety {:+})", self.piety)?;
        }
        Ok(())
    }
}
