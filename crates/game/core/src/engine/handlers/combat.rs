//! Melee: the `Attack` step.

use crate::combat::{DamageType, hero_has_initiative, predict_damage_taken};
use crate::engine::StepError;
use crate::state::{GameState, Hero, Monster, MonsterTraits};
use crate::stats::{Debuffs, HeroTraits, Status};

use super::StepContext;

pub(crate) fn pre_validate_attack(state: &GameState) -> Result<(), StepError> {
    state.target_monster().map(|_| ()).ok_or(StepError::NoTarget)
}

/// Resolves one melee exchange against the current target.
///
/// Order: swift hand, petrifying gaze, the exchange itself, reflexes,
/// mana shield, curse on kill, then debuffs from the monster's hit.
pub(crate) fn apply_attack(ctx: &mut StepContext<'_, '_>) {
    let index = ctx.state.target;

    {
        let GameState { hero, monsters, .. } = &mut *ctx.state;
        let monster = &monsters[index];
        if hero.has_trait(HeroTraits::SWIFT_HAND) && hero.level > monster.level {
            monsters[index].hp.set_current(0);
            consume_attack_buffs(hero);
            ctx.monster_defeated(index, true);
            return;
        }
    }

    if !survives_gaze(ctx, index) {
        return;
    }

    let hero_struck = exchange(ctx, index);
    let GameState { hero, monsters, .. } = &mut *ctx.state;
    let monster = &mut monsters[index];

    if !hero.is_defeated() && !monster.is_defeated() && hero.statuses.consume(Status::Reflexes) {
        strike_monster(hero, monster);
    }

    if hero_struck && !monster.is_defeated() {
        let shield = hero.statuses.intensity(Status::ManaShield) as u32;
        if shield > 0 {
            let damage = predict_damage_taken(&monster.defence, shield, DamageType::Magical, 0);
            monster.take_damage(damage);
        }
    }

    let mut incurred = Debuffs::empty();
    if monster.is_defeated() && monster.traits.contains(MonsterTraits::CURSED) {
        hero.curse();
        incurred |= Debuffs::CURSED;
    }

    if hero_struck {
        incurred |= debuffs_from_hit(hero, monster.traits);
    }
    ctx.debuffs |= incurred;

    if monster.is_defeated() {
        ctx.monster_defeated(index, true);
    }
}

/// Returns false if the gaze killed the hero.
fn survives_gaze(ctx: &mut StepContext<'_, '_>, index: usize) -> bool {
    let gaze = ctx.state.monsters[index].death_gaze_percent as u32;
    let hero = &mut ctx.state.hero;
    // Petrify when gaze% of max HP exceeds current HP, compared unrounded.
    if gaze == 0 || gaze * hero.hp.maximum() <= 100 * hero.hp.current() {
        return true;
    }
    let saved = hero.lose_all_hp();
    let alive = !hero.is_defeated();
    ctx.note_saved(saved);
    ctx.petrified = !alive;
    alive
}

/// The main exchange of blows. Returns true if the monster struck the hero.
///
/// Both outputs are read at the moment each side strikes, so a fury or
/// berserk bonus switched on by the first blow counts for the second.
fn exchange(ctx: &mut StepContext<'_, '_>, index: usize) -> bool {
    let GameState { hero, monsters, .. } = &mut *ctx.state;
    let monster = &mut monsters[index];

    let mut struck = false;
    let mut saved = false;
    if hero_has_initiative(hero, monster) {
        strike_monster(hero, monster);
        if !monster.is_defeated() {
            saved = strike_hero(hero, monster);
            struck = true;
        }
    } else {
        saved = strike_hero(hero, monster);
        struck = true;
        if !hero.is_defeated() {
            strike_monster(hero, monster);
        }
    }
    consume_attack_buffs(hero);
    ctx.note_saved(saved);
    struck
}

fn strike_monster(hero: &mut Hero, monster: &mut Monster) {
    if hero.statuses.consume(Status::CrushingBlow) {
        let blow = monster.hp.maximum().div_ceil(4);
        monster.take_damage(blow);
    } else {
        let output = hero.attack_output(monster);
        let burn = monster.statuses.intensity(Status::Burning);
        let damage = predict_damage_taken(&monster.defence, output, hero.damage_type(), burn);
        monster.take_damage(damage);
        monster.statuses.clear(Status::Burning);
    }
    if hero.has_trait(HeroTraits::POISONED_BLADE) && !monster.is_undead() && !monster.is_defeated()
    {
        monster.statuses.add(Status::Poisoned, 1);
    }
}

fn strike_hero(hero: &mut Hero, monster: &Monster) -> bool {
    let output = monster.attack_output();
    let damage = predict_damage_taken(&hero.defence, output, monster.damage_type(), 0);
    hero.take_damage(damage)
}

fn consume_attack_buffs(hero: &mut Hero) {
    hero.statuses.clear(Status::Might);
    hero.statuses.consume(Status::QuickStrike);
}

/// Boolean debuffs only count when newly applied; stacking ones always add
/// a layer.
fn debuffs_from_hit(hero: &mut Hero, traits: MonsterTraits) -> Debuffs {
    let mut incurred = Debuffs::empty();
    if traits.contains(MonsterTraits::POISONOUS) && hero.poison() {
        incurred |= Debuffs::POISONED;
    }
    if traits.contains(MonsterTraits::MANA_BURN) && hero.mana_burn() {
        incurred |= Debuffs::MANA_BURNED;
    }
    if traits.contains(MonsterTraits::CORROSIVE) {
        hero.corrode();
        incurred |= Debuffs::CORRODED;
    }
    if traits.contains(MonsterTraits::WEAKENING) {
        hero.weaken();
        incurred |= Debuffs::WEAKENED;
    }
    incurred
}
