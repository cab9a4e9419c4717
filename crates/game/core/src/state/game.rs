//! Encounter state and its construction.

use crate::action::{Item, ItemEffect, Spell};
use crate::config::GameConfig;
use crate::env::ArchetypeOracle;
use crate::stats::{HeroClass, Race};

use super::{
    God, Hero, InitializationError, Monster, MonsterKind, ResourceConfig, ResourcePool,
};

/// Canonical snapshot of one encounter.
///
/// The resolver never mutates a state it was handed; every step produces a
/// fresh value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub hero: Hero,
    pub monsters: Vec<Monster>,
    /// Index of the monster that `Attack` and targeted spells act on.
    pub target: usize,
    pub resources: ResourcePool,
    /// Number of resolved steps.
    pub turn: u32,
}

impl GameState {
    pub fn new(hero: Hero, monsters: Vec<Monster>, resources: ResourcePool) -> Self {
        let mut state = Self {
            hero,
            monsters,
            target: 0,
            resources,
            turn: 0,
        };
        state.retarget();
        state
    }

    /// All monsters are defeated.
    pub fn is_cleared(&self) -> bool {
        self.monsters.iter().all(Monster::is_defeated)
    }

    /// The hero is dead.
    pub fn is_lost(&self) -> bool {
        self.hero.is_defeated()
    }

    pub fn is_terminal(&self) -> bool {
        self.is_cleared() || self.is_lost()
    }

    pub fn target_monster(&self) -> Option<&Monster> {
        self.monsters.get(self.target).filter(|m| !m.is_defeated())
    }

    pub fn target_monster_mut(&mut self) -> Option<&mut Monster> {
        self.monsters.get_mut(self.target).filter(|m| !m.is_defeated())
    }

    pub fn living_monsters(&self) -> impl Iterator<Item = (usize, &Monster)> {
        self.monsters
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.is_defeated())
    }

    /// Points the target at the first living monster if the current one is
    /// gone.
    pub fn retarget(&mut self) {
        if self.target_monster().is_some() {
            return;
        }
        let first = self.living_monsters().next().map(|(index, _)| index);
        if let Some(index) = first {
            self.target = index;
        }
    }
}

/// Hero setup supplied by a scenario.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroConfig {
    pub class: HeroClass,
    #[cfg_attr(feature = "serde", serde(default))]
    pub race: Race,
    #[cfg_attr(feature = "serde", serde(default = "default_level"))]
    pub level: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spells: Vec<Spell>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<Item>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gold: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub god: Option<God>,
}

#[cfg(feature = "serde")]
fn default_level() -> u8 {
    1
}

impl HeroConfig {
    pub fn new(class: HeroClass) -> Self {
        Self {
            class,
            race: Race::default(),
            level: 1,
            spells: Vec::new(),
            items: Vec::new(),
            gold: 0,
            god: None,
        }
    }

    pub fn with_race(mut self, race: Race) -> Self {
        self.race = race;
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_spells(mut self, spells: impl IntoIterator<Item = Spell>) -> Self {
        self.spells.extend(spells);
        self
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn with_gold(mut self, gold: u32) -> Self {
        self.gold = gold;
        self
    }
}

/// One monster of the encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterSpec {
    pub kind: MonsterKind,
    pub level: u8,
}

impl MonsterSpec {
    pub const fn new(kind: MonsterKind, level: u8) -> Self {
        Self { kind, level }
    }
}

/// Builds the starting state of an encounter from archetype tables.
pub fn initial_state(
    hero_config: &HeroConfig,
    monsters: &[MonsterSpec],
    resource_config: &ResourceConfig,
    archetypes: &dyn ArchetypeOracle,
) -> Result<GameState, InitializationError> {
    if monsters.is_empty() {
        return Err(InitializationError::NoMonsters);
    }
    if !(1..=GameConfig::MAX_LEVEL).contains(&hero_config.level) {
        return Err(InitializationError::HeroLevelOutOfRange {
            level: hero_config.level,
            max: GameConfig::MAX_LEVEL,
        });
    }

    let profile = archetypes.class_profile(hero_config.class)?;
    let mut hero = Hero::new(hero_config.class, hero_config.race, profile, hero_config.level);
    hero.gold = hero_config.gold;
    if let Some(god) = hero_config.god {
        hero.faith.follow(god);
    }

    if hero_config.spells.len() > hero.spells.slots() as usize {
        return Err(InitializationError::TooManySpells {
            count: hero_config.spells.len(),
            slots: hero.spells.slots(),
        });
    }
    for &spell in &hero_config.spells {
        hero.spells.learn(spell);
    }

    if hero_config.items.len() > GameConfig::MAX_INVENTORY_SLOTS {
        return Err(InitializationError::TooManyItems {
            count: hero_config.items.len(),
            max: GameConfig::MAX_INVENTORY_SLOTS,
        });
    }
    for &item in &hero_config.items {
        if hero.inventory.add(item).is_err() {
            continue;
        }
        if let ItemEffect::Passive(passive) = item.effect() {
            hero.apply_passive(passive);
        }
    }

    let mut built = Vec::with_capacity(monsters.len());
    for spec in monsters {
        if !(1..=GameConfig::MAX_LEVEL).contains(&spec.level) {
            return Err(InitializationError::MonsterLevelOutOfRange {
                kind: spec.kind,
                level: spec.level,
                max: GameConfig::MAX_LEVEL,
            });
        }
        let template = archetypes.monster_template(spec.kind)?;
        built.push(Monster::from_template(spec.kind, spec.level, &template));
    }

    Ok(GameState::new(hero, built, ResourcePool::new(resource_config)))
}
