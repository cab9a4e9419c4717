//! Candidate scoring.
//!
//! Scores are plain integers so the best-so-far value can live in a single
//! atomic slot. The bands never overlap: any win beats any unfinished
//! replay, which beats any death, which beats an invalid genome.

use game_core::GameState;

use crate::replay::Trace;

pub type Fitness = u64;

/// Score of a genome that asked for an impossible step.
pub const INVALID: Fitness = 0;
const DEFEAT_BASE: Fitness = 1;
const ALIVE_BASE: Fitness = 10_000;
const WIN_BASE: Fitness = 10_000_000;
const MAX_TURN_CREDIT: u64 = 999;

/// Scores a replay of a candidate started from `initial`.
///
/// Wins rank by remaining hero HP, then by brevity. Everything else ranks by
/// how much monster HP was taken; surviving runs add remaining hero HP.
pub fn score(initial: &GameState, trace: &Trace) -> Fitness {
    if !trace.is_valid() {
        return INVALID;
    }
    let state = &trace.final_state;
    let health = hero_health_permille(state);

    if trace.is_win() {
        let turns = (trace.entries.len() as u64).min(MAX_TURN_CREDIT);
        return WIN_BASE + health * 1_000 + (MAX_TURN_CREDIT - turns);
    }

    let progress = progress_permille(initial, state);
    if state.is_lost() {
        DEFEAT_BASE + progress
    } else {
        ALIVE_BASE + progress * 1_000 + health
    }
}

/// Whether `fitness` lies in the winning band.
pub fn is_winning(fitness: Fitness) -> bool {
    fitness >= WIN_BASE
}

fn hero_health_permille(state: &GameState) -> u64 {
    let hp = &state.hero.hp;
    if hp.maximum() == 0 {
        return 0;
    }
    (hp.current().min(hp.maximum()) as u64 * 1_000) / hp.maximum() as u64
}

/// Mean share of monster HP removed, in permille. Kills count in full.
fn progress_permille(initial: &GameState, state: &GameState) -> u64 {
    let total = initial.monsters.len() as u64;
    if total == 0 {
        return 1_000;
    }
    let removed: u64 = state
        .monsters
        .iter()
        .map(|monster| {
            let max = monster.hp.maximum().max(1) as u64;
            let left = (monster.hp.current() as u64).min(max);
            (max - left) * 1_000 / max
        })
        .sum();
    removed / total
}

#[cfg(test)]
mod tests {
    use game_core::{
        ClassProfile, GameConfig, GameEnv, Hero, HeroClass, Item, ItemDefinition, Monster,
        MonsterKind, Race, ResourcePool, Spell, Step, TablesOracle,
    };

    use super::*;
    use crate::replay::replay;

    struct Tables;

    impl TablesOracle for Tables {
        fn item(&self, _item: Item) -> ItemDefinition {
            ItemDefinition::new(1, 1)
        }

        fn spell_conversion_points(&self, _spell: Spell) -> u32 {
            1
        }
    }

    fn duel(monster_hp: u32, monster_damage: u32) -> GameState {
        let hero = Hero::new(HeroClass::Fighter, Race::Human, ClassProfile::standard(), 1);
        let monster = Monster::new(MonsterKind::Goblin, 1, monster_hp, monster_damage);
        GameState::new(hero, vec![monster], ResourcePool::default())
    }

    fn scored(state: &GameState, steps: &[Step]) -> Fitness {
        let config = GameConfig::default();
        let env = GameEnv::new(&Tables, &config);
        score(state, &replay(state, steps, &env, 1))
    }

    #[test]
    fn bands_are_ordered() {
        let winnable = duel(5, 1);
        let win = scored(&winnable, &[Step::Attack]);
        assert!(is_winning(win));

        let tough = duel(12, 1);
        let partial = scored(&tough, &[Step::Attack]);
        let untouched = scored(&tough, &[Step::NoOp]);
        assert!(partial > untouched);
        assert!(win > partial);

        let deadly = duel(40, 40);
        let death = scored(&deadly, &[Step::Attack]);
        assert!(death < untouched);

        let invalid = scored(&tough, &[Step::BuyItem(Item::FineSword)]);
        assert_eq!(invalid, INVALID);
    }

    #[test]
    fn shorter_wins_score_higher() {
        let state = duel(5, 0);
        let direct = scored(&state, &[Step::Attack]);
        let detour = scored(&state, &[Step::NoOp, Step::Attack]);
        assert!(direct > detour);
    }
}
