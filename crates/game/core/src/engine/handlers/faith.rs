//! Altars: worship, boons and desecration.

use crate::engine::StepError;
use crate::state::{Boon, GameState, God, Hero};
use crate::stats::{Debuffs, Defence, Status};

use super::StepContext;

/// Piety granted by the followed god when a rival altar is desecrated.
const DESECRATION_PIETY: i32 = 10;

fn altar_visible(god: God, state: &GameState) -> Result<(), StepError> {
    if state.resources.visible.altars.contains(&god) {
        Ok(())
    } else {
        Err(StepError::AltarNotVisible(god))
    }
}

pub(crate) fn pre_validate_follow(god: God, state: &GameState) -> Result<(), StepError> {
    altar_visible(god, state)?;
    if state.hero.faith.follows(god) {
        return Err(StepError::AlreadyFollowing(god));
    }
    Ok(())
}

pub(crate) fn apply_follow(god: God, ctx: &mut StepContext<'_, '_>) {
    ctx.state.hero.faith.follow(god);
}

fn boon_has_effect(boon: Boon, hero: &Hero) -> bool {
    match boon {
        Boon::Sanguine => hero.hp.current() < hero.hp.overheal_cap(),
        Boon::Refreshment => hero.poisoned || hero.weakness > 0,
        Boon::Stoneskin => hero.defence.stoneskin_effective(),
        Boon::Absolution => hero.defence.is_cursed() || hero.defence.corrosion() > 0,
        Boon::Spellward => hero.defence.magical_resist() < Defence::HERO_CAP,
        Boon::Reflexes => !hero.statuses.has(Status::Reflexes),
        Boon::Swiftness => !hero.statuses.has(Status::FirstStrike),
        Boon::Protection
        | Boon::Petition
        | Boon::MagicAffinity
        | Boon::Strength
        | Boon::Warpath => true,
    }
}

pub(crate) fn pre_validate_boon(boon: Boon, state: &GameState) -> Result<(), StepError> {
    let faith = &state.hero.faith;
    let god = boon.god();
    if !faith.follows(god) {
        return Err(StepError::NotFollowing(god));
    }
    if faith.piety < boon.cost() {
        return Err(StepError::InsufficientPiety {
            needed: boon.cost(),
            available: faith.piety,
        });
    }
    if !boon_has_effect(boon, &state.hero) {
        return Err(StepError::BoonHasNoEffect(boon));
    }
    Ok(())
}

pub(crate) fn apply_boon(boon: Boon, ctx: &mut StepContext<'_, '_>) {
    let hero = &mut ctx.state.hero;
    let piety = hero.faith.piety;
    ctx.piety.adjust(-(boon.cost() as i32));

    match boon {
        Boon::Sanguine => {
            hero.hp.overheal(hero.hp.maximum() / 2);
        }
        Boon::Refreshment => {
            hero.poisoned = false;
            hero.weakness = 0;
        }
        Boon::Stoneskin => hero.defence.add_stoneskin(),
        Boon::Absolution => {
            hero.defence.clear_curse();
            hero.defence.clear_corrosion();
        }
        Boon::Protection => hero.statuses.add(Status::DeathProtection, 1),
        Boon::Petition => {
            // Jehora answers when a d100 roll does not exceed current piety.
            if ctx.rng.roll_d100() <= piety as u32 {
                hero.hp.refill();
                hero.poisoned = false;
                hero.mana_burned = false;
            }
        }
        Boon::MagicAffinity => hero.mp.raise_maximum(1),
        Boon::Spellward => hero.defence.add_magical_resist(15),
        Boon::Strength => hero.damage_bonus += 10,
        Boon::Warpath => hero.statuses.add(Status::Might, 1),
        Boon::Reflexes => hero.statuses.add(Status::Reflexes, 1),
        Boon::Swiftness => hero.statuses.add(Status::FirstStrike, 1),
    }
}

pub(crate) fn pre_validate_desecrate(god: God, state: &GameState) -> Result<(), StepError> {
    altar_visible(god, state)?;
    if state.hero.faith.follows(god) {
        return Err(StepError::AlreadyFollowing(god));
    }
    Ok(())
}

/// Destroys an altar and suffers its god's punishment.
pub(crate) fn apply_desecrate(god: God, ctx: &mut StepContext<'_, '_>) {
    let altars = &mut ctx.state.resources.visible.altars;
    if let Some(index) = altars.iter().position(|g| *g == god) {
        altars.remove(index);
    }

    let hero = &mut ctx.state.hero;
    let mut incurred = Debuffs::empty();
    let mut saved = false;
    match god {
        God::Dracul => hero.hp.lower_maximum(hero.hp.maximum() / 4),
        God::JehoraJeheyu => {
            let damage = ctx.rng.range(1, (hero.hp.maximum() / 2).max(1));
            saved = hero.take_damage(damage);
        }
        God::Earthmother => {
            if hero.poison() {
                incurred |= Debuffs::POISONED;
            }
        }
        God::GlowingGuardian => {
            hero.curse();
            incurred |= Debuffs::CURSED;
        }
        God::MysteraAnnur => {
            if hero.mana_burn() {
                incurred |= Debuffs::MANA_BURNED;
            }
        }
        God::Taurog => {
            hero.weaken();
            hero.weaken();
            incurred |= Debuffs::WEAKENED;
        }
        God::TikkiTooki => {
            hero.statuses.clear(Status::FirstStrike);
            hero.statuses.clear(Status::QuickStrike);
            hero.corrode();
            incurred |= Debuffs::CORRODED;
        }
    }
    ctx.debuffs |= incurred;
    ctx.note_saved(saved);
    ctx.piety.adjust(DESECRATION_PIETY);
}
