#![allow(dead_code)]

use game_core::{
    ArchetypeOracle, ClassProfile, GameState, God, Hero, HeroClass, HeroConfig, HeroTraits, Item,
    ItemDefinition, Monster, MonsterKind, MonsterSpec, MonsterTemplate, MonsterTraits,
    OracleError, Race, ResourceConfig, ResourcePool, Resources, Spell, TablesOracle,
    initial_state,
};

/// Every item costs 3 gold and converts for 40 points.
pub struct FlatTables;

impl TablesOracle for FlatTables {
    fn item(&self, _item: Item) -> ItemDefinition {
        ItemDefinition::new(3, 40)
    }

    fn spell_conversion_points(&self, _spell: Spell) -> u32 {
        40
    }
}

pub struct TestArchetypes;

impl ArchetypeOracle for TestArchetypes {
    fn class_profile(&self, class: HeroClass) -> Result<ClassProfile, OracleError> {
        let profile = ClassProfile {
            spell_slots: 5,
            ..ClassProfile::standard()
        };
        match class {
            HeroClass::Assassin => Ok(profile.with_traits(HeroTraits::SWIFT_HAND)),
            HeroClass::Transmuter => Err(OracleError::ClassNotFound(class)),
            _ => Ok(profile),
        }
    }

    fn monster_template(&self, kind: MonsterKind) -> Result<MonsterTemplate, OracleError> {
        let template = MonsterTemplate::default();
        Ok(match kind {
            MonsterKind::Serpent => template.with_traits(MonsterTraits::POISONOUS),
            MonsterKind::Wraith => {
                template.with_traits(MonsterTraits::UNDEAD | MonsterTraits::MANA_BURN)
            }
            MonsterKind::Goat => template.with_traits(MonsterTraits::FIRST_STRIKE),
            MonsterKind::Gorgon => template.with_death_gaze(50),
            MonsterKind::Golem => template.with_resists(50, 0),
            _ => template,
        })
    }
}

pub fn fighter(level: u8) -> Hero {
    Hero::new(HeroClass::Fighter, Race::Human, ClassProfile::standard(), level)
}

pub fn duel(hero: Hero, monster: Monster) -> GameState {
    GameState::new(hero, vec![monster], ResourcePool::default())
}

/// An encounter that exercises most step kinds.
pub fn rich_state() -> GameState {
    let hero = HeroConfig::new(HeroClass::Fighter)
        .with_level(2)
        .with_spells([
            Spell::Burndayraz,
            Spell::Halpmeh,
            Spell::Bysseps,
            Spell::Lemmisi,
        ])
        .with_items([
            Item::HealthPotion,
            Item::ManaPotion,
            Item::CanOfWhupaz,
            Item::FineSword,
        ])
        .with_gold(20);
    let monsters = [
        MonsterSpec::new(MonsterKind::Goblin, 1),
        MonsterSpec::new(MonsterKind::Serpent, 2),
        MonsterSpec::new(MonsterKind::Wraith, 2),
        MonsterSpec::new(MonsterKind::Golem, 3),
    ];
    let resources = ResourceConfig {
        visible: Resources {
            gold_piles: 2,
            health_potions: 1,
            shops: vec![Item::TrollHeart, Item::ReflexPotion],
            spells: vec![Spell::Apheelsik],
            altars: vec![God::Taurog, God::Earthmother],
            ..Resources::default()
        },
        hidden: Resources {
            free_tiles: 15,
            walls: 5,
            gold_piles: 3,
            mana_potions: 2,
            attack_boosters: 1,
            health_boosters: 1,
            mana_boosters: 1,
            shops: vec![Item::StoneSigil, Item::QuicksilverPotion],
            spells: vec![Spell::Endiswal],
            altars: vec![God::GlowingGuardian, God::JehoraJeheyu],
            ..Resources::default()
        },
    };
    match initial_state(&hero, &monsters, &resources, &TestArchetypes) {
        Ok(state) => state,
        Err(error) => panic!("rich state must build: {error}"),
    }
}
