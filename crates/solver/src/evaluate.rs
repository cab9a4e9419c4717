//! Parallel population evaluation.
//!
//! Each candidate replays against its own copy of the initial state, so
//! workers share nothing but the read-only inputs and the [`BestSlot`].

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::thread;

use game_core::{GameEnv, GameState, Step};

use crate::fitness::{self, Fitness};
use crate::replay::replay;

/// Best fitness seen so far across all workers.
#[derive(Debug, Default)]
pub struct BestSlot {
    fitness: AtomicU64,
    solved: AtomicBool,
}

impl BestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `fitness`, keeping the maximum. Returns true if it raised the
    /// best value.
    pub fn offer(&self, fitness: Fitness) -> bool {
        if fitness::is_winning(fitness) {
            self.solved.store(true, Ordering::Release);
        }
        let mut current = self.fitness.load(Ordering::Relaxed);
        while fitness > current {
            match self.fitness.compare_exchange_weak(
                current,
                fitness,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return true,
                Err(actual) => current = actual,
            }
        }
        false
    }

    pub fn best(&self) -> Fitness {
        self.fitness.load(Ordering::Relaxed)
    }

    pub fn is_solved(&self) -> bool {
        self.solved.load(Ordering::Acquire)
    }
}

/// Result of evaluating one candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub fitness: Fitness,
    /// Steps that were actually resolved.
    pub resolved: usize,
    /// Skipped because a genome earlier in the population already wins.
    pub skipped: bool,
}

impl Evaluation {
    pub fn is_win(&self) -> bool {
        fitness::is_winning(self.fitness)
    }
}

/// Shared inputs of an evaluation pass.
#[derive(Clone, Copy)]
pub struct Evaluator<'a> {
    pub initial: &'a GameState,
    pub env: GameEnv<'a>,
    pub seed: u64,
    pub workers: usize,
}

impl Evaluator<'_> {
    pub fn evaluate_one(&self, steps: &[Step]) -> Evaluation {
        let trace = replay(self.initial, steps, &self.env, self.seed);
        Evaluation {
            fitness: fitness::score(self.initial, &trace),
            resolved: trace.entries.len(),
            skipped: false,
        }
    }

    /// Scores every genome, in order.
    ///
    /// Genomes are split into contiguous chunks, one per worker. Workers
    /// share the lowest winning index found so far and skip any genome
    /// after it, scoring it [`fitness::INVALID`]. Every genome before the
    /// first win is always evaluated, so the first winning index does not
    /// depend on worker count or thread timing.
    pub fn evaluate(&self, genomes: &[Vec<Step>], best: &BestSlot) -> Vec<Evaluation> {
        if genomes.is_empty() {
            return Vec::new();
        }
        let first_win = AtomicUsize::new(usize::MAX);
        let workers = self.workers.clamp(1, genomes.len());
        if workers == 1 {
            return self.evaluate_chunk(genomes, 0, best, &first_win);
        }

        let chunk_size = genomes.len().div_ceil(workers);
        let first_win = &first_win;
        thread::scope(|scope| {
            let handles: Vec<_> = genomes
                .chunks(chunk_size)
                .enumerate()
                .map(|(n, chunk)| {
                    scope.spawn(move || self.evaluate_chunk(chunk, n * chunk_size, best, first_win))
                })
                .collect();

            let mut evaluations = Vec::with_capacity(genomes.len());
            for (handle, chunk) in handles.into_iter().zip(genomes.chunks(chunk_size)) {
                match handle.join() {
                    Ok(part) => evaluations.extend(part),
                    Err(_) => {
                        tracing::warn!(candidates = chunk.len(), "evaluation worker panicked");
                        evaluations.extend(chunk.iter().map(|_| Evaluation {
                            fitness: fitness::INVALID,
                            resolved: 0,
                            skipped: true,
                        }));
                    }
                }
            }
            evaluations
        })
    }

    fn evaluate_chunk(
        &self,
        chunk: &[Vec<Step>],
        offset: usize,
        best: &BestSlot,
        first_win: &AtomicUsize,
    ) -> Vec<Evaluation> {
        chunk
            .iter()
            .enumerate()
            .map(|(i, genome)| {
                let index = offset + i;
                if index > first_win.load(Ordering::Acquire) {
                    return Evaluation {
                        fitness: fitness::INVALID,
                        resolved: 0,
                        skipped: true,
                    };
                }
                let evaluation = self.evaluate_one(genome);
                best.offer(evaluation.fitness);
                if evaluation.is_win() {
                    first_win.fetch_min(index, Ordering::AcqRel);
                }
                evaluation
            })
            .collect()
    }
}
