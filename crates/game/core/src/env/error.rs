//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::MonsterKind;
use crate::stats::HeroClass;

/// Errors that occur when looking up archetype data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// No class profile is registered for the class.
    #[error("class profile for {0} not found")]
    ClassNotFound(HeroClass),

    /// No monster template is registered for the kind.
    #[error("monster template for {0} not found")]
    MonsterNotFound(MonsterKind),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::ClassNotFound(_) => "ORACLE_CLASS_NOT_FOUND",
            OracleError::MonsterNotFound(_) => "ORACLE_MONSTER_NOT_FOUND",
        }
    }
}
