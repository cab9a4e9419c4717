//! Replaying step sequences through the resolver.

use game_core::{GameEnv, GameState, Outcome, OutcomeKind, PcgRng, Step, resolve};

/// One resolved step of a replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    pub step: Step,
    pub outcome: Outcome,
}

/// Per-step outcomes of a replay and the state it ended in.
#[derive(Clone, Debug)]
pub struct Trace {
    pub entries: Vec<TraceEntry>,
    pub final_state: GameState,
    /// Index of the first step that was not possible, if any.
    pub rejected_at: Option<usize>,
}

impl Trace {
    /// Every monster fell and the hero survived.
    pub fn is_win(&self) -> bool {
        self.rejected_at.is_none() && self.final_state.is_cleared() && !self.final_state.is_lost()
    }

    pub fn is_valid(&self) -> bool {
        self.rejected_at.is_none()
    }

    pub fn last_outcome(&self) -> Option<OutcomeKind> {
        self.entries.last().map(|entry| entry.outcome.kind)
    }
}

/// Replays `steps` from `initial` with a fresh generator seeded by `seed`.
///
/// Replay stops at the first step that is not possible or once the
/// encounter is over; steps after that point are never resolved.
pub fn replay(initial: &GameState, steps: &[Step], env: &GameEnv<'_>, seed: u64) -> Trace {
    let mut rng = PcgRng::new(seed);
    let mut state = initial.clone();
    let mut entries = Vec::with_capacity(steps.len());
    let mut rejected_at = None;

    for (index, step) in steps.iter().enumerate() {
        if state.is_terminal() {
            break;
        }
        let (next, outcome) = resolve(&state, step, env, &mut rng);
        entries.push(TraceEntry {
            step: *step,
            outcome,
        });
        if outcome.kind == OutcomeKind::NotPossible {
            tracing::trace!(index, %step, "replay rejected step");
            rejected_at = Some(index);
            break;
        }
        state = next;
    }

    Trace {
        entries,
        final_state: state,
        rejected_at,
    }
}
