//! Step resolution, validation and generation.
//!
//! [`resolve`] is the authoritative reducer for [`GameState`]: it checks a
//! step with the same [`check`] the validator exposes, applies it to a copy
//! of the state, commits the step's piety and classifies the result.

mod errors;
mod generator;
mod handlers;
mod outcome;
mod piety;
mod validation;

pub use errors::StepError;
pub use generator::{generate_all_valid_steps, generate_valid_step};
pub use outcome::{Outcome, OutcomeKind};
pub use piety::PietyAccumulator;
pub use validation::{check, is_valid};

use tracing::trace;

use crate::action::Step;
use crate::env::{GameEnv, RandomSource};
use crate::state::GameState;

use handlers::StepContext;

/// Applies `step` to a copy of `state`.
///
/// The input is never mutated. A step whose preconditions fail yields an
/// unchanged copy and [`OutcomeKind::NotPossible`]; `NoOp` yields an
/// unchanged copy and [`OutcomeKind::Safe`]. Randomness is drawn only from
/// `rng`.
pub fn resolve(
    state: &GameState,
    step: &Step,
    env: &GameEnv<'_>,
    rng: &mut dyn RandomSource,
) -> (GameState, Outcome) {
    if let Err(error) = check(step, state, env) {
        trace!(%step, %error, "step rejected");
        return (state.clone(), Outcome::not_possible());
    }
    if matches!(step, Step::NoOp) {
        return (state.clone(), Outcome::safe());
    }

    let mut next = state.clone();
    let level_before = next.hero.level;

    let mut ctx = StepContext::new(&mut next, env, rng);
    handlers::apply(step, &mut ctx);
    let StepContext {
        piety,
        debuffs,
        killed,
        petrified,
        ..
    } = ctx;

    let piety = piety.commit(&mut next.hero.faith);
    next.turn += 1;

    let kind = if next.hero.is_defeated() {
        if petrified {
            OutcomeKind::Petrified
        } else {
            OutcomeKind::Death
        }
    } else if next.hero.level > level_before {
        OutcomeKind::LevelUp
    } else if killed {
        OutcomeKind::Win
    } else {
        OutcomeKind::Safe
    };

    debug_assert!(
        next.hero.hp.current() <= next.hero.hp.overheal_cap(),
        "hero HP above overheal cap"
    );
    debug_assert!(
        next.hero.mp.current() <= next.hero.mp.maximum(),
        "hero mana above maximum"
    );

    (
        next,
        Outcome {
            kind,
            debuffs,
            piety,
        },
    )
}
