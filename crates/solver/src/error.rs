use game_core::{ErrorSeverity, GameError};

/// Rejected solver configurations.
///
/// Search exhaustion is not an error: [`crate::run`] reports it as `None`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SolverError {
    #[error("population must hold at least one candidate")]
    EmptyPopulation,

    #[error("budget allows no generations")]
    ZeroBudget,

    #[error("candidates must be allowed at least one step")]
    ZeroGenomeLength,

    #[error("tournament size {size} must be between 1 and the population ({population})")]
    TournamentSize { size: usize, population: usize },

    #[error("elitism {elitism} must be below the population ({population})")]
    ElitismTooLarge { elitism: usize, population: usize },

    #[error("{name} must lie in [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    #[error("annealing temperature must be positive, got {0}")]
    NonPositiveTemperature(f64),

    #[error("cooling factor must lie in (0, 1), got {0}")]
    CoolingOutOfRange(f64),
}

impl GameError for SolverError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyPopulation => "SOLVER_EMPTY_POPULATION",
            Self::ZeroBudget => "SOLVER_ZERO_BUDGET",
            Self::ZeroGenomeLength => "SOLVER_ZERO_GENOME_LENGTH",
            Self::TournamentSize { .. } => "SOLVER_TOURNAMENT_SIZE",
            Self::ElitismTooLarge { .. } => "SOLVER_ELITISM_TOO_LARGE",
            Self::RateOutOfRange { .. } => "SOLVER_RATE_OUT_OF_RANGE",
            Self::NonPositiveTemperature(_) => "SOLVER_NON_POSITIVE_TEMPERATURE",
            Self::CoolingOutOfRange(_) => "SOLVER_COOLING_OUT_OF_RANGE",
        }
    }
}
