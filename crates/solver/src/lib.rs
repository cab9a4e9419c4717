//! Search drivers that look for a winning step sequence.
//!
//! Both drivers treat the resolver as a black box: a candidate is a step
//! sequence, replayed from the initial state with an explicitly seeded
//! generator and scored by [`fitness::score`]. Population evaluation is the
//! only parallel phase; selection and reproduction run on the calling
//! thread between evaluations.

pub mod config;
pub mod evaluate;
pub mod fitness;
pub mod genome;
pub mod replay;
pub mod report;

mod annealing;
mod error;
mod genetic;

pub use config::{AnnealingConfig, Budget, SolverConfig};
pub use error::SolverError;
pub use replay::{Trace, TraceEntry, replay};
pub use report::{render_solution, render_steps, render_trace};

use game_core::{GameEnv, GameState, Step};
use tracing::info;

const SAMPLER_LINEAGE_GENETIC: u64 = 1;
const SAMPLER_LINEAGE_ANNEALING: u64 = 2;

/// Search strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SolverKind {
    #[default]
    #[strum(to_string = "genetic", serialize = "ga")]
    Genetic,
    #[strum(to_string = "annealing", serialize = "sa")]
    Annealing,
}

/// A winning step sequence and the replay seed it wins under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub steps: Vec<Step>,
    pub seed: u64,
}

impl Solution {
    pub fn replay(&self, initial: &GameState, env: &GameEnv<'_>) -> Trace {
        replay(initial, &self.steps, env, self.seed)
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_solution(Some(self)))
    }
}

/// Searches for a winning sequence from `initial`.
///
/// `Ok(None)` means the budget ran out without a win. Errors are reserved
/// for configurations that cannot drive a search.
pub fn run(
    kind: SolverKind,
    initial: &GameState,
    env: &GameEnv<'_>,
    config: &SolverConfig,
) -> Result<Option<Solution>, SolverError> {
    config.validate()?;
    info!(
        %kind,
        population = config.population,
        generations = config.generations,
        max_steps = config.max_steps,
        workers = config.worker_count(),
        seed = config.seed,
        "solver started"
    );

    let solution = match kind {
        SolverKind::Genetic => genetic::solve(initial, env, config),
        SolverKind::Annealing => annealing::solve(initial, env, config),
    };
    Ok(solution)
}
