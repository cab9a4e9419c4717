//! Shopping, consumables and conversion.

use crate::action::{Convertible, Item, ItemEffect};
use crate::engine::StepError;
use crate::env::GameEnv;
use crate::state::{GameState, Hero, PietyEvent};
use crate::stats::Status;

use super::StepContext;

pub(crate) fn pre_validate_buy(
    item: Item,
    state: &GameState,
    env: &GameEnv<'_>,
) -> Result<(), StepError> {
    if !state.resources.visible.shops.contains(&item) {
        return Err(StepError::NotForSale(item));
    }
    let price = env.tables().item(item).price;
    let hero = &state.hero;
    if hero.gold < price {
        return Err(StepError::InsufficientGold {
            price,
            available: hero.gold,
        });
    }
    if hero.inventory.is_full() {
        return Err(StepError::InventoryFull);
    }
    Ok(())
}

pub(crate) fn apply_buy(item: Item, ctx: &mut StepContext<'_, '_>) {
    let price = ctx.env.tables().item(item).price;
    let GameState {
        hero, resources, ..
    } = &mut *ctx.state;
    if let Some(index) = resources.visible.shops.iter().position(|i| *i == item) {
        resources.visible.shops.remove(index);
    }
    hero.gold -= price;
    if hero.inventory.add(item).is_ok()
        && let ItemEffect::Passive(passive) = item.effect()
    {
        hero.apply_passive(passive);
    }
}

/// Whether drinking `item` would change anything.
fn consumable_has_effect(item: Item, hero: &Hero) -> bool {
    match item {
        Item::HealthPotion => !hero.hp.is_full() || hero.poisoned,
        Item::ManaPotion => !hero.mp.is_full() || hero.mana_burned,
        Item::FortitudeTonic => hero.poisoned || hero.weakness > 0,
        Item::BurnSalve => hero.mana_burned || hero.poisoned,
        Item::ReflexPotion => !hero.statuses.has(Status::Reflexes),
        Item::QuicksilverPotion => !hero.statuses.has(Status::QuickStrike),
        Item::CanOfWhupaz => !hero.statuses.has(Status::CrushingBlow),
        _ => false,
    }
}

pub(crate) fn pre_validate_use(item: Item, state: &GameState) -> Result<(), StepError> {
    let hero = &state.hero;
    if !hero.inventory.contains(item) {
        return Err(StepError::ItemNotHeld(item));
    }
    if !item.is_consumable() {
        return Err(StepError::NotConsumable(item));
    }
    if !consumable_has_effect(item, hero) {
        return Err(StepError::ItemHasNoEffect(item));
    }
    Ok(())
}

pub(crate) fn apply_use(item: Item, ctx: &mut StepContext<'_, '_>) {
    let hero = &mut ctx.state.hero;
    hero.inventory.remove(item);
    match item {
        Item::HealthPotion => {
            hero.heal((hero.hp.maximum() * 2 / 5).max(1));
            hero.poisoned = false;
            ctx.piety.record(PietyEvent::HealthPotionUsed);
        }
        Item::ManaPotion => {
            hero.mana_burned = false;
            hero.mp.restore((hero.mp.maximum() * 2 / 5).max(1));
            ctx.piety.record(PietyEvent::ManaPotionUsed);
        }
        Item::FortitudeTonic => {
            hero.poisoned = false;
            hero.weakness = 0;
        }
        Item::BurnSalve => {
            hero.mana_burned = false;
            hero.poisoned = false;
        }
        Item::ReflexPotion => hero.statuses.add(Status::Reflexes, 1),
        Item::QuicksilverPotion => hero.statuses.add(Status::QuickStrike, 1),
        Item::CanOfWhupaz => hero.statuses.add(Status::CrushingBlow, 1),
        _ => {}
    }
}

pub(crate) fn pre_validate_convert(what: Convertible, state: &GameState) -> Result<(), StepError> {
    let hero = &state.hero;
    match what {
        Convertible::Item(item) if !hero.inventory.contains(item) => {
            Err(StepError::ItemNotHeld(item))
        }
        Convertible::Spell(spell) if !hero.spells.knows(spell) => {
            Err(StepError::SpellNotKnown(spell))
        }
        _ => Ok(()),
    }
}

/// Converts an item or spell into points; each full threshold grants the
/// race reward.
pub(crate) fn apply_convert(what: Convertible, ctx: &mut StepContext<'_, '_>) {
    let tables = ctx.env.tables();
    let hero = &mut ctx.state.hero;
    let points = match what {
        Convertible::Item(item) => {
            hero.inventory.remove(item);
            if let ItemEffect::Passive(passive) = item.effect() {
                hero.revert_passive(passive);
            }
            tables.item(item).conversion_points
        }
        Convertible::Spell(spell) => {
            hero.spells.forget(spell);
            tables.spell_conversion_points(spell)
        }
    };

    hero.conversion_points += points;
    let threshold = hero.profile.conversion_threshold.max(1);
    while hero.conversion_points >= threshold {
        hero.conversion_points -= threshold;
        hero.apply_race_bonus();
    }
    ctx.piety.record(PietyEvent::ItemConverted);
}
