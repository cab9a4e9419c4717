//! Enumerating and sampling legal steps.

use strum::IntoEnumIterator;
use tracing::trace;

use crate::action::{Convertible, Item, Pickup, Step};
use crate::config::GameConfig;
use crate::env::{GameEnv, RandomSource};
use crate::state::{GameState, ResourceKind};

use super::is_valid;

/// Every step that is currently legal.
///
/// `NoOp` is offered only when nothing else is, so a caller always receives
/// at least one step. Tile batches are capped at
/// [`GameConfig::MAX_UNCOVER_BATCH`].
pub fn generate_all_valid_steps(state: &GameState, env: &GameEnv<'_>) -> Vec<Step> {
    let mut steps: Vec<Step> = candidates(state)
        .into_iter()
        .filter(|step| is_valid(step, state, env))
        .collect();
    if steps.is_empty() {
        steps.push(Step::NoOp);
    }
    trace!(count = steps.len(), "generated valid steps");
    steps
}

/// Samples one legal step.
///
/// Weighted towards progress: `Attack` counts three times, tile uncovering
/// twice, everything else once.
pub fn generate_valid_step(
    state: &GameState,
    env: &GameEnv<'_>,
    rng: &mut dyn RandomSource,
) -> Step {
    let steps = generate_all_valid_steps(state, env);
    let total: u32 = steps.iter().map(weight).sum();
    let mut roll = rng.below(total);
    for step in &steps {
        let w = weight(step);
        if roll < w {
            return *step;
        }
        roll -= w;
    }
    steps.last().copied().unwrap_or(Step::NoOp)
}

fn weight(step: &Step) -> u32 {
    match step {
        Step::Attack => 3,
        Step::UncoverTiles(_) => 2,
        _ => 1,
    }
}

/// Steps worth checking in `state`, before validation.
fn candidates(state: &GameState) -> Vec<Step> {
    let hero = &state.hero;
    let visible = &state.resources.visible;
    let mut steps = vec![Step::Attack];

    steps.extend(hero.spells.spells().iter().map(|&s| Step::CastSpell(s)));

    let batch = state
        .resources
        .hidden_tiles()
        .min(GameConfig::MAX_UNCOVER_BATCH);
    steps.extend((1..=batch).map(Step::UncoverTiles));

    let mut for_sale: Vec<Item> = visible.shops.clone();
    for_sale.sort();
    for_sale.dedup();
    steps.extend(for_sale.into_iter().map(Step::BuyItem));

    let mut held: Vec<Item> = hero.inventory.items().to_vec();
    held.sort();
    held.dedup();
    for &item in &held {
        steps.push(Step::UseItem(item));
        steps.push(Step::ConvertItem(Convertible::Item(item)));
    }
    steps.extend(
        hero.spells
            .spells()
            .iter()
            .map(|&s| Step::ConvertItem(Convertible::Spell(s))),
    );

    let mut altars = visible.altars.clone();
    altars.sort();
    altars.dedup();
    for &god in &altars {
        steps.push(Step::FollowDeity(god));
        steps.push(Step::DesecrateAltar(god));
    }
    if let Some(god) = hero.faith.god {
        steps.extend(god.boons().iter().map(|&b| Step::RequestBoon(b)));
    }

    steps.extend((0..state.monsters.len()).map(Step::ChangeTarget));

    for kind in ResourceKind::iter() {
        let pickup = match kind {
            ResourceKind::GoldPile => Pickup::GoldPile,
            ResourceKind::HealthPotion => Pickup::HealthPotion,
            ResourceKind::ManaPotion => Pickup::ManaPotion,
            ResourceKind::AttackBooster => Pickup::AttackBooster,
            ResourceKind::ManaBooster => Pickup::ManaBooster,
            ResourceKind::HealthBooster => Pickup::HealthBooster,
            _ => continue,
        };
        if visible.count(kind) > 0 {
            steps.push(Step::Collect(pickup));
        }
    }
    let mut glyphs = visible.spells.clone();
    glyphs.sort();
    glyphs.dedup();
    steps.extend(glyphs.into_iter().map(|s| Step::Collect(Pickup::Spell(s))));

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ItemDefinition, PcgRng, TablesOracle};
    use crate::state::{Hero, Monster, MonsterKind, ResourcePool};
    use crate::stats::{ClassProfile, HeroClass, Race};
    use crate::action::Spell;

    struct FlatTables;

    impl TablesOracle for FlatTables {
        fn item(&self, _item: Item) -> ItemDefinition {
            ItemDefinition::new(5, 10)
        }

        fn spell_conversion_points(&self, _spell: Spell) -> u32 {
            10
        }
    }

    fn duel() -> GameState {
        let hero = Hero::new(HeroClass::Fighter, Race::Human, ClassProfile::standard(), 1);
        let monster = Monster::new(MonsterKind::Goblin, 1, 5, 1);
        GameState::new(hero, vec![monster], ResourcePool::default())
    }

    #[test]
    fn bare_duel_offers_only_attack() {
        let config = GameConfig::default();
        let env = GameEnv::new(&FlatTables, &config);
        assert_eq!(generate_all_valid_steps(&duel(), &env), vec![Step::Attack]);
    }

    #[test]
    fn finished_encounter_offers_noop() {
        let config = GameConfig::default();
        let env = GameEnv::new(&FlatTables, &config);
        let mut state = duel();
        state.monsters[0].hp.set_current(0);
        assert_eq!(generate_all_valid_steps(&state, &env), vec![Step::NoOp]);
        let mut rng = PcgRng::new(1);
        assert_eq!(generate_valid_step(&state, &env, &mut rng), Step::NoOp);
    }

    #[test]
    fn uncover_batches_are_capped() {
        let config = GameConfig::default();
        let env = GameEnv::new(&FlatTables, &config);
        let mut state = duel();
        state.resources.hidden.free_tiles = 20;
        let steps = generate_all_valid_steps(&state, &env);
        let batches: Vec<_> = steps
            .iter()
            .filter(|s| matches!(s, Step::UncoverTiles(_)))
            .collect();
        assert_eq!(batches.len(), GameConfig::MAX_UNCOVER_BATCH as usize);
    }
}
