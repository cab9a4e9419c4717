//! Simulated annealing over a single current candidate.
//!
//! Every temperature step proposes `population` neighbours, each differing
//! from the current genome in one resampled gene (plus whatever replay
//! repair that change forces), and evaluates them in parallel. The best
//! neighbour replaces the current genome if it is fitter, or otherwise with
//! probability `exp(delta / temperature)`.

use game_core::{GameEnv, GameState, PcgRng, compute_seed};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::SolverConfig;
use crate::evaluate::{BestSlot, Evaluator};
use crate::genetic::winner;
use crate::genome::{Genome, Operators};
use crate::{SAMPLER_LINEAGE_ANNEALING, Solution};

pub(crate) fn solve(
    initial: &GameState,
    env: &GameEnv<'_>,
    config: &SolverConfig,
) -> Option<Solution> {
    let budget = config.budget();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut sampler = PcgRng::new(compute_seed(config.seed, SAMPLER_LINEAGE_ANNEALING, 0));
    let ops = Operators {
        initial,
        env: *env,
        seed: config.seed,
        max_steps: config.max_steps,
    };
    let evaluator = Evaluator {
        initial,
        env: *env,
        seed: config.seed,
        workers: config.worker_count(),
    };
    let best = BestSlot::new();

    let mut current = ops.random_genome(&mut sampler);
    let mut current_eval = evaluator.evaluate_one(&current);
    best.offer(current_eval.fitness);
    if let Some(solution) = winner(std::slice::from_ref(&current), &[current_eval], config.seed) {
        info!(steps = solution.steps.len(), "initial candidate already wins");
        return Some(solution);
    }

    let mut temperature = config.annealing.initial_temperature;
    let mut generation = 0;
    while !budget.exhausted(generation) {
        let neighbours: Vec<Genome> = (0..config.population)
            .map(|_| {
                let mut neighbour = current.clone();
                let position = rng.gen_range(0..neighbour.len().max(1));
                ops.rebuild(&mut neighbour, |index| index == position, &mut sampler);
                neighbour
            })
            .collect();
        let evaluations = evaluator.evaluate(&neighbours, &best);

        if let Some(solution) = winner(&neighbours, &evaluations, config.seed) {
            info!(
                generation,
                steps = solution.steps.len(),
                fitness = best.best(),
                "winning sequence found"
            );
            return Some(solution);
        }

        let proposal = evaluations
            .iter()
            .enumerate()
            .max_by_key(|(_, evaluation)| evaluation.fitness)
            .map(|(index, evaluation)| (index, *evaluation));
        if let Some((index, candidate)) = proposal {
            let delta = candidate.fitness as f64 - current_eval.fitness as f64;
            let accept = delta >= 0.0 || rng.r#gen::<f64>() < (delta / temperature).exp();
            if accept {
                current = neighbours[index].clone();
                current_eval = candidate;
            }
        }

        debug!(
            generation,
            temperature,
            current = current_eval.fitness,
            best = best.best(),
            "temperature step"
        );
        temperature *= config.annealing.cooling;
        generation += 1;
    }

    info!(
        generations = generation,
        best = best.best(),
        "budget exhausted without a win"
    );
    None
}
