//! Solver configuration and search budget.

use std::env;
use std::time::{Duration, Instant};

use crate::SolverError;

/// Tunables shared by the genetic and annealing drivers.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Candidates per generation. Annealing proposes this many neighbours
    /// per temperature step.
    pub population: usize,
    pub generations: u32,
    /// Upper bound on steps per candidate.
    pub max_steps: usize,
    pub tournament: usize,
    pub crossover_rate: f64,
    /// Per-gene probability of resubstitution.
    pub mutation_rate: f64,
    /// Best candidates copied unchanged into the next generation.
    pub elitism: usize,
    /// Evaluation threads. 0 means one per available core.
    pub workers: usize,
    /// Seeds both the search operators and candidate replay.
    pub seed: u64,
    pub deadline: Option<Duration>,
    pub annealing: AnnealingConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnnealingConfig {
    /// Starting temperature, in fitness units.
    pub initial_temperature: f64,
    /// Multiplier applied after every temperature step.
    pub cooling: f64,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 50_000.0,
            cooling: 0.95,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            population: 64,
            generations: 200,
            max_steps: 60,
            tournament: 3,
            crossover_rate: 0.7,
            mutation_rate: 0.05,
            elitism: 2,
            workers: 0,
            seed: 0,
            deadline: None,
            annealing: AnnealingConfig::default(),
        }
    }
}

impl SolverConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SOLVER_POPULATION` (default: 64)
    /// - `SOLVER_GENERATIONS` (default: 200)
    /// - `SOLVER_MAX_STEPS` (default: 60)
    /// - `SOLVER_TOURNAMENT` (default: 3)
    /// - `SOLVER_CROSSOVER_RATE` (default: 0.7)
    /// - `SOLVER_MUTATION_RATE` (default: 0.05)
    /// - `SOLVER_ELITISM` (default: 2)
    /// - `SOLVER_WORKERS` (default: 0, one per core)
    /// - `SOLVER_SEED` (default: 0)
    /// - `SOLVER_DEADLINE_MS` (default: unset)
    /// - `SOLVER_TEMPERATURE` (default: 50000)
    /// - `SOLVER_COOLING` (default: 0.95)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(population) = read_env::<usize>("SOLVER_POPULATION") {
            config.population = population;
        }
        if let Some(generations) = read_env::<u32>("SOLVER_GENERATIONS") {
            config.generations = generations;
        }
        if let Some(max_steps) = read_env::<usize>("SOLVER_MAX_STEPS") {
            config.max_steps = max_steps;
        }
        if let Some(tournament) = read_env::<usize>("SOLVER_TOURNAMENT") {
            config.tournament = tournament;
        }
        if let Some(rate) = read_env::<f64>("SOLVER_CROSSOVER_RATE") {
            config.crossover_rate = rate;
        }
        if let Some(rate) = read_env::<f64>("SOLVER_MUTATION_RATE") {
            config.mutation_rate = rate;
        }
        if let Some(elitism) = read_env::<usize>("SOLVER_ELITISM") {
            config.elitism = elitism;
        }
        if let Some(workers) = read_env::<usize>("SOLVER_WORKERS") {
            config.workers = workers;
        }
        if let Some(seed) = read_env::<u64>("SOLVER_SEED") {
            config.seed = seed;
        }
        if let Some(millis) = read_env::<u64>("SOLVER_DEADLINE_MS") {
            config.deadline = Some(Duration::from_millis(millis));
        }
        if let Some(temperature) = read_env::<f64>("SOLVER_TEMPERATURE") {
            config.annealing.initial_temperature = temperature;
        }
        if let Some(cooling) = read_env::<f64>("SOLVER_COOLING") {
            config.annealing.cooling = cooling;
        }

        config
    }

    pub fn validate(&self) -> Result<(), SolverError> {
        if self.population == 0 {
            return Err(SolverError::EmptyPopulation);
        }
        if self.generations == 0 {
            return Err(SolverError::ZeroBudget);
        }
        if self.max_steps == 0 {
            return Err(SolverError::ZeroGenomeLength);
        }
        if self.tournament == 0 || self.tournament > self.population {
            return Err(SolverError::TournamentSize {
                size: self.tournament,
                population: self.population,
            });
        }
        if self.elitism >= self.population {
            return Err(SolverError::ElitismTooLarge {
                elitism: self.elitism,
                population: self.population,
            });
        }
        for (name, value) in [
            ("crossover rate", self.crossover_rate),
            ("mutation rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SolverError::RateOutOfRange { name, value });
            }
        }
        if self.annealing.initial_temperature.is_nan() || self.annealing.initial_temperature <= 0.0
        {
            return Err(SolverError::NonPositiveTemperature(
                self.annealing.initial_temperature,
            ));
        }
        if !(self.annealing.cooling > 0.0 && self.annealing.cooling < 1.0) {
            return Err(SolverError::CoolingOutOfRange(self.annealing.cooling));
        }
        Ok(())
    }

    /// Threads used for population evaluation.
    pub fn worker_count(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }

    /// Starts the clock on this configuration's budget.
    pub fn budget(&self) -> Budget {
        Budget {
            generations: self.generations,
            deadline: self.deadline.map(|limit| Instant::now() + limit),
        }
    }
}

/// Generation count and optional wall-clock deadline, checked at generation
/// boundaries only.
#[derive(Clone, Copy, Debug)]
pub struct Budget {
    pub generations: u32,
    pub deadline: Option<Instant>,
}

impl Budget {
    pub fn exhausted(&self, generation: u32) -> bool {
        generation >= self.generations
            || self
                .deadline
                .is_some_and(|deadline| Instant::now() >= deadline)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
