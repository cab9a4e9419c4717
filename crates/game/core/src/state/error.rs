//! Encounter construction errors.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::MonsterKind;

/// Errors raised while building the initial [`super::GameState`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitializationError {
    /// Archetype lookup failed.
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// An encounter needs at least one monster.
    #[error("encounter has no monsters")]
    NoMonsters,

    /// Hero level outside `1..=MAX_LEVEL`.
    #[error("hero level {level} is out of range (1..={max})")]
    HeroLevelOutOfRange {
        /// Requested level.
        level: u8,
        /// Highest allowed level.
        max: u8,
    },

    /// Monster level outside `1..=MAX_LEVEL`.
    #[error("{kind} level {level} is out of range (1..={max})")]
    MonsterLevelOutOfRange {
        kind: MonsterKind,
        level: u8,
        max: u8,
    },

    /// More starting spells than the class has slots for.
    #[error("{count} starting spells exceed {slots} spell slots")]
    TooManySpells { count: usize, slots: u8 },

    /// More starting items than the inventory holds.
    #[error("{count} starting items exceed {max} inventory slots")]
    TooManyItems { count: usize, max: usize },
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(inner) => inner.error_code(),
            Self::NoMonsters => "INIT_NO_MONSTERS",
            Self::HeroLevelOutOfRange { .. } => "INIT_HERO_LEVEL_OUT_OF_RANGE",
            Self::MonsterLevelOutOfRange { .. } => "INIT_MONSTER_LEVEL_OUT_OF_RANGE",
            Self::TooManySpells { .. } => "INIT_TOO_MANY_SPELLS",
            Self::TooManyItems { .. } => "INIT_TOO_MANY_ITEMS",
        }
    }
}
