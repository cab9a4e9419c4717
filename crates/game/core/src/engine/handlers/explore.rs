//! Exploration: uncovering tiles and collecting what lies on them.

use crate::action::{Item, Pickup};
use crate::engine::StepError;
use crate::state::{GameState, PietyEvent, ResourceKind};

use super::StepContext;

pub(crate) fn pre_validate_uncover(tiles: u32, state: &GameState) -> Result<(), StepError> {
    let hidden = state.resources.hidden_tiles();
    if tiles == 0 || tiles > hidden {
        return Err(StepError::InvalidTileCount {
            requested: tiles,
            hidden,
        });
    }
    Ok(())
}

pub(crate) fn apply_uncover(tiles: u32, ctx: &mut StepContext<'_, '_>) {
    reveal(ctx, tiles, true);
}

/// Reveals `tiles` hidden tiles. With `regenerate`, every tile heals the hero
/// and the living monsters.
pub(super) fn reveal(ctx: &mut StepContext<'_, '_>, tiles: u32, regenerate: bool) {
    let mut revealed = 0;
    for _ in 0..tiles {
        if ctx.state.resources.uncover(&mut *ctx.rng).is_none() {
            break;
        }
        revealed += 1;
        if regenerate {
            ctx.state.hero.regenerate();
            for monster in ctx.state.monsters.iter_mut().filter(|m| !m.is_defeated()) {
                monster.regenerate();
            }
        }
    }
    if revealed > 0 {
        ctx.piety.record(PietyEvent::TilesUncovered(revealed));
    }
}

fn pickup_kind(pickup: Pickup) -> ResourceKind {
    match pickup {
        Pickup::GoldPile => ResourceKind::GoldPile,
        Pickup::HealthPotion => ResourceKind::HealthPotion,
        Pickup::ManaPotion => ResourceKind::ManaPotion,
        Pickup::AttackBooster => ResourceKind::AttackBooster,
        Pickup::ManaBooster => ResourceKind::ManaBooster,
        Pickup::HealthBooster => ResourceKind::HealthBooster,
        Pickup::Spell(_) => ResourceKind::Spell,
    }
}

pub(crate) fn pre_validate_collect(pickup: Pickup, state: &GameState) -> Result<(), StepError> {
    let visible = &state.resources.visible;
    let hero = &state.hero;
    match pickup {
        Pickup::Spell(spell) => {
            if !visible.spells.contains(&spell) {
                return Err(StepError::PickupNotVisible(pickup));
            }
            if hero.spells.knows(spell) {
                return Err(StepError::SpellAlreadyKnown(spell));
            }
            if hero.spells.is_full() {
                return Err(StepError::SpellBookFull);
            }
        }
        _ => {
            if visible.count(pickup_kind(pickup)) == 0 {
                return Err(StepError::PickupNotVisible(pickup));
            }
            if matches!(pickup, Pickup::HealthPotion | Pickup::ManaPotion)
                && hero.inventory.is_full()
            {
                return Err(StepError::InventoryFull);
            }
        }
    }
    Ok(())
}

pub(crate) fn apply_collect(pickup: Pickup, ctx: &mut StepContext<'_, '_>) {
    let gold_per_pile = ctx.env.config().gold_per_pile;
    let GameState {
        hero, resources, ..
    } = &mut *ctx.state;

    if let Pickup::Spell(spell) = pickup {
        if let Some(index) = resources.visible.spells.iter().position(|s| *s == spell) {
            resources.visible.spells.remove(index);
        }
        hero.spells.learn(spell);
        return;
    }

    resources.visible.take(pickup_kind(pickup));
    match pickup {
        Pickup::GoldPile => hero.gold += gold_per_pile,
        Pickup::HealthPotion => {
            let _ = hero.inventory.add(Item::HealthPotion);
        }
        Pickup::ManaPotion => {
            let _ = hero.inventory.add(Item::ManaPotion);
        }
        Pickup::AttackBooster => hero.damage_bonus += 10,
        Pickup::ManaBooster => hero.mp.raise_maximum(1),
        Pickup::HealthBooster => {
            let bonus = (hero.hp.maximum() / 10).max(1);
            hero.hp.raise_maximum(bonus);
        }
        Pickup::Spell(_) => {}
    }
}
