//! Step validity.
//!
//! [`check`] is the only place preconditions are decided. The resolver calls
//! it before applying anything, so `is_valid` and `resolve` cannot disagree.

use crate::action::Step;
use crate::env::GameEnv;
use crate::state::GameState;

use super::StepError;
use super::handlers::{combat, explore, faith, items, magic};

/// Explains why `step` cannot be applied to `state`, if it cannot.
///
/// `NoOp` is always valid. Every other step is rejected once the encounter
/// is over.
pub fn check(step: &Step, state: &GameState, env: &GameEnv<'_>) -> Result<(), StepError> {
    if matches!(step, Step::NoOp) {
        return Ok(());
    }
    if state.is_terminal() {
        return Err(StepError::EncounterOver);
    }

    match *step {
        Step::Attack => combat::pre_validate_attack(state),
        Step::CastSpell(spell) => magic::pre_validate_cast(spell, state),
        Step::UncoverTiles(n) => explore::pre_validate_uncover(n, state),
        Step::Collect(pickup) => explore::pre_validate_collect(pickup, state),
        Step::BuyItem(item) => items::pre_validate_buy(item, state, env),
        Step::UseItem(item) => items::pre_validate_use(item, state),
        Step::ConvertItem(what) => items::pre_validate_convert(what, state),
        Step::FollowDeity(god) => faith::pre_validate_follow(god, state),
        Step::RequestBoon(boon) => faith::pre_validate_boon(boon, state),
        Step::DesecrateAltar(god) => faith::pre_validate_desecrate(god, state),
        Step::ChangeTarget(index) => pre_validate_target(index, state),
        Step::NoOp => Ok(()),
    }
}

/// Returns true if `step` can be applied to `state`.
pub fn is_valid(step: &Step, state: &GameState, env: &GameEnv<'_>) -> bool {
    check(step, state, env).is_ok()
}

fn pre_validate_target(index: usize, state: &GameState) -> Result<(), StepError> {
    let count = state.monsters.len();
    let monster = state
        .monsters
        .get(index)
        .ok_or(StepError::TargetOutOfRange { index, count })?;
    if monster.is_defeated() {
        return Err(StepError::TargetDefeated(index));
    }
    if index == state.target {
        return Err(StepError::AlreadyTargeted(index));
    }
    Ok(())
}
