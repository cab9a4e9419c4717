//! Generational genetic algorithm.

use game_core::{GameEnv, GameState, PcgRng, compute_seed};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::SolverConfig;
use crate::evaluate::{BestSlot, Evaluation, Evaluator};
use crate::genome::{self, Genome, Operators};
use crate::{SAMPLER_LINEAGE_GENETIC, Solution};

pub(crate) fn solve(
    initial: &GameState,
    env: &GameEnv<'_>,
    config: &SolverConfig,
) -> Option<Solution> {
    let budget = config.budget();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut sampler = PcgRng::new(compute_seed(config.seed, SAMPLER_LINEAGE_GENETIC, 0));
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

    let mut population: Vec<Genome> = (0..config.population)
        .map(|_| ops.random_genome(&mut sampler))
        .collect();

    let mut generation = 0;
    while !budget.exhausted(generation) {
        let evaluations = evaluator.evaluate(&population, &best);

        if let Some(solution) = winner(&population, &evaluations, config.seed) {
            info!(
                generation,
                steps = solution.steps.len(),
                fitness = best.best(),
                "winning sequence found"
            );
            return Some(solution);
        }
        debug!(generation, best = best.best(), "generation evaluated");

        population = next_generation(&population, &evaluations, config, &ops, &mut rng, &mut sampler);
        generation += 1;
    }

    info!(
        generations = generation,
        best = best.best(),
        "budget exhausted without a win"
    );
    None
}

/// The first winning genome in population order, cut to the steps its
/// replay resolved.
pub(crate) fn winner(
    genomes: &[Genome],
    evaluations: &[Evaluation],
    seed: u64,
) -> Option<Solution> {
    genomes
        .iter()
        .zip(evaluations)
        .find(|(_, evaluation)| evaluation.is_win())
        .map(|(genome, evaluation)| Solution {
            steps: genome[..evaluation.resolved].to_vec(),
            seed,
        })
}

fn next_generation(
    population: &[Genome],
    evaluations: &[Evaluation],
    config: &SolverConfig,
    ops: &Operators<'_>,
    rng: &mut StdRng,
    sampler: &mut PcgRng,
) -> Vec<Genome> {
    let mut ranked: Vec<usize> = (0..population.len()).collect();
    ranked.sort_by(|a, b| evaluations[*b].fitness.cmp(&evaluations[*a].fitness));

    let mut next: Vec<Genome> = ranked
        .iter()
        .take(config.elitism)
        .map(|index| population[*index].clone())
        .collect();

    while next.len() < config.population {
        let first = genome::tournament(evaluations, config.tournament, rng);
        let mut child = if rng.gen_bool(config.crossover_rate) {
            let second = genome::tournament(evaluations, config.tournament, rng);
            genome::crossover(&population[first], &population[second], rng)
        } else {
            population[first].clone()
        };
        ops.rebuild(&mut child, |_| rng.gen_bool(config.mutation_rate), sampler);
        next.push(child);
    }
    next
}
