//! Per-step precondition checks and state mutations.
//!
//! Every step kind has a `pre_validate` function, used verbatim by both the
//! validator and the resolver, and an `apply` function that assumes the
//! preconditions hold and never fails.

pub(super) mod combat;
pub(super) mod explore;
pub(super) mod faith;
pub(super) mod items;
pub(super) mod magic;

use crate::action::Step;
use crate::env::{GameEnv, RandomSource};
use crate::state::{GameState, PietyEvent};
use crate::stats::Debuffs;

use super::PietyAccumulator;

/// Mutable scratch space for one resolved step.
pub(crate) struct StepContext<'s, 'e> {
    pub state: &'s mut GameState,
    pub env: &'s GameEnv<'e>,
    pub rng: &'s mut dyn RandomSource,
    pub piety: PietyAccumulator,
    /// Debuffs newly incurred by the hero.
    pub debuffs: Debuffs,
    /// A monster was removed from play.
    pub killed: bool,
    /// The hero died to a petrifying gaze.
    pub petrified: bool,
}

impl<'s, 'e> StepContext<'s, 'e> {
    pub fn new(
        state: &'s mut GameState,
        env: &'s GameEnv<'e>,
        rng: &'s mut dyn RandomSource,
    ) -> Self {
        Self {
            state,
            env,
            rng,
            piety: PietyAccumulator::new(),
            debuffs: Debuffs::empty(),
            killed: false,
            petrified: false,
        }
    }

    /// Records a death-protection save, if one happened.
    pub fn note_saved(&mut self, saved: bool) {
        if saved {
            self.debuffs |= Debuffs::LOST_DEATH_PROTECTION;
        }
    }

    /// Bookkeeping after monster `index` dropped to 0 HP.
    ///
    /// Experience for a kill is the monster's level plus `d * (d + 1)` for a
    /// monster `d` levels above the hero, shaped by the class model.
    pub fn monster_defeated(&mut self, index: usize, award: bool) {
        self.killed = true;
        if award {
            let (level, undead) = {
                let monster = &self.state.monsters[index];
                (monster.level, monster.is_undead())
            };
            let hero = &mut self.state.hero;
            let gap = level.saturating_sub(hero.level) as u32;
            let base = level as u32 + gap * (gap + 1);
            let xp = hero.profile.experience.apply(base);
            self.piety.record(PietyEvent::MonsterKilled {
                higher_level: level > hero.level,
                undead,
            });
            hero.gain_experience(xp);
        }
        self.state.retarget();
    }
}

/// Mutates the context's state according to `step`.
///
/// Callers must have run [`super::check`] first.
pub(super) fn apply(step: &Step, ctx: &mut StepContext<'_, '_>) {
    match *step {
        Step::Attack => combat::apply_attack(ctx),
        Step::CastSpell(spell) => magic::apply_cast(spell, ctx),
        Step::UncoverTiles(n) => explore::apply_uncover(n, ctx),
        Step::Collect(pickup) => explore::apply_collect(pickup, ctx),
        Step::BuyItem(item) => items::apply_buy(item, ctx),
        Step::UseItem(item) => items::apply_use(item, ctx),
        Step::ConvertItem(what) => items::apply_convert(what, ctx),
        Step::FollowDeity(god) => faith::apply_follow(god, ctx),
        Step::RequestBoon(boon) => faith::apply_boon(boon, ctx),
        Step::DesecrateAltar(god) => faith::apply_desecrate(god, ctx),
        Step::ChangeTarget(index) => ctx.state.target = index,
        Step::NoOp => {}
    }
}
