//! Spellcasting: the `CastSpell` step.

use crate::action::Spell;
use crate::combat::{DamageType, predict_damage_taken};
use crate::config::GameConfig;
use crate::engine::StepError;
use crate::state::{GameState, PietyEvent};
use crate::stats::Status;

use super::StepContext;
use super::explore::reveal;

pub(crate) fn pre_validate_cast(spell: Spell, state: &GameState) -> Result<(), StepError> {
    let hero = &state.hero;
    if !hero.spells.knows(spell) {
        return Err(StepError::SpellNotKnown(spell));
    }
    let cost = spell.mana_cost();
    if hero.mp.current() < cost {
        return Err(StepError::InsufficientMana {
            needed: cost,
            available: hero.mp.current(),
        });
    }

    let target = if spell.needs_target() {
        Some(state.target_monster().ok_or(StepError::NoTarget)?)
    } else {
        None
    };

    let effective = match spell {
        Spell::Apheelsik => {
            if target.is_some_and(|m| m.is_undead()) {
                return Err(StepError::TargetImmune(spell));
            }
            target.is_some_and(|m| !m.statuses.has(Status::Poisoned))
        }
        Spell::Cydstepp => !hero.statuses.has(Status::DeathProtection),
        Spell::Endiswal => hero.defence.stoneskin_effective(),
        Spell::Getindare => !hero.statuses.has(Status::QuickStrike),
        Spell::Halpmeh => !hero.hp.is_full() || hero.poisoned,
        Spell::Lemmisi => state.resources.hidden_tiles() > 0,
        Spell::Weytwut => target.is_some_and(|m| !m.statuses.has(Status::Slowed)),
        Spell::Burndayraz | Spell::Bysseps | Spell::Imawal => true,
    };
    if !effective {
        return Err(StepError::SpellHasNoEffect(spell));
    }
    Ok(())
}

pub(crate) fn apply_cast(spell: Spell, ctx: &mut StepContext<'_, '_>) {
    let index = ctx.state.target;
    let hero = &mut ctx.state.hero;
    hero.mp.deplete(spell.mana_cost());
    ctx.piety.record(PietyEvent::SpellCast);

    match spell {
        Spell::Burndayraz => {
            let level = ctx.state.hero.level as u32;
            let monster = &mut ctx.state.monsters[index];
            let damage = predict_damage_taken(&monster.defence, 4 * level, DamageType::Magical, 0);
            monster.take_damage(damage);
            if monster.is_defeated() {
                ctx.monster_defeated(index, true);
            } else {
                monster.statuses.add(Status::Burning, 1);
            }
        }
        Spell::Apheelsik => ctx.state.monsters[index].statuses.add(Status::Poisoned, 1),
        Spell::Bysseps => ctx.state.hero.statuses.add(Status::Might, 1),
        Spell::Cydstepp => ctx.state.hero.statuses.add(Status::DeathProtection, 1),
        Spell::Endiswal => ctx.state.hero.defence.add_stoneskin(),
        Spell::Getindare => ctx.state.hero.statuses.add(Status::QuickStrike, 1),
        Spell::Halpmeh => {
            let hero = &mut ctx.state.hero;
            hero.heal(4 * hero.level as u32);
            hero.poisoned = false;
        }
        Spell::Imawal => {
            ctx.state.monsters[index].hp.set_current(0);
            ctx.state.resources.visible.walls += 1;
            ctx.monster_defeated(index, false);
        }
        Spell::Lemmisi => {
            let tiles = ctx
                .state
                .resources
                .hidden_tiles()
                .min(GameConfig::LEMMISI_TILES);
            reveal(ctx, tiles, false);
        }
        Spell::Weytwut => ctx.state.monsters[index].statuses.add(Status::Slowed, 1),
    }
}
