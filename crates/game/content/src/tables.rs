//! Built-in content tables.
//!
//! Numbers here are data, not mechanism: the core reads them through
//! [`TablesOracle`] and [`ArchetypeOracle`] and never embeds them.

use game_core::{
    ArchetypeOracle, AttackModel, ClassProfile, ExperienceModel, HeroClass, HeroTraits, Item,
    ItemDefinition, MonsterKind, MonsterTemplate, MonsterTraits, OracleError, Spell,
    TablesOracle,
};

/// The stock catalogue: every class, monster and item has an entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardTables;

impl StandardTables {
    pub const fn new() -> Self {
        Self
    }

    pub const fn profile(class: HeroClass) -> ClassProfile {
        let base = ClassProfile::standard();
        match class {
            HeroClass::Fighter => {
                base.with_experience(ExperienceModel::Accelerated { percent: 20 })
            }
            HeroClass::Berserker => base
                .with_attack(AttackModel::Fury {
                    threshold_percent: 50,
                    bonus_percent: 50,
                })
                .with_resists(0, 50),
            HeroClass::Warlord => base.with_attack(AttackModel::Challenger { bonus_percent: 30 }),
            HeroClass::Assassin => {
                base.with_traits(HeroTraits::SWIFT_HAND.union(HeroTraits::FIRST_STRIKE))
            }
            HeroClass::Priest => base.with_traits(HeroTraits::HEALTHY),
            HeroClass::Monk => base
                .with_traits(HeroTraits::PIERCING_STRIKES)
                .with_resists(50, 0),
            HeroClass::Paladin => {
                base.with_experience(ExperienceModel::Bounty { per_kill: 1 })
            }
            HeroClass::Wizard => ClassProfile {
                spell_slots: 4,
                base_mana: 12,
                ..base
            },
            HeroClass::Sorcerer => base.with_traits(HeroTraits::MAGICAL_STRIKES),
            HeroClass::Transmuter => ClassProfile {
                conversion_threshold: 70,
                ..base
            },
        }
    }

    pub const fn template(kind: MonsterKind) -> MonsterTemplate {
        match kind {
            MonsterKind::Bandit => MonsterTemplate::new(100, 100).with_traits(MonsterTraits::BERSERK),
            MonsterKind::Goat => {
                MonsterTemplate::new(100, 100).with_traits(MonsterTraits::FIRST_STRIKE)
            }
            MonsterKind::Goblin => MonsterTemplate::new(100, 100),
            MonsterKind::Golem => MonsterTemplate::new(100, 100).with_resists(50, 0),
            MonsterKind::Gorgon => MonsterTemplate::new(100, 100).with_death_gaze(50),
            MonsterKind::MeatMan => MonsterTemplate::new(200, 65),
            MonsterKind::Serpent => {
                MonsterTemplate::new(100, 100).with_traits(MonsterTraits::POISONOUS)
            }
            MonsterKind::Vampire => MonsterTemplate::new(100, 100)
                .with_traits(MonsterTraits::UNDEAD.union(MonsterTraits::WEAKENING)),
            MonsterKind::Warlock => MonsterTemplate::new(100, 135)
                .with_traits(MonsterTraits::MAGICAL_ATTACK)
                .with_resists(0, 25),
            MonsterKind::Wraith => MonsterTemplate::new(75, 100)
                .with_traits(
                    MonsterTraits::UNDEAD
                        .union(MonsterTraits::MANA_BURN)
                        .union(MonsterTraits::CURSED),
                )
                .with_resists(0, 30),
            MonsterKind::Zombie => MonsterTemplate::new(150, 80)
                .with_traits(MonsterTraits::UNDEAD.union(MonsterTraits::CORROSIVE)),
            MonsterKind::Dragon => MonsterTemplate::new(125, 125)
                .with_traits(
                    MonsterTraits::FIRST_STRIKE
                        .union(MonsterTraits::MAGICAL_ATTACK)
                        .union(MonsterTraits::PIERCING_ATTACK),
                )
                .with_resists(25, 25)
                .with_death_protection(1),
        }
    }

    pub const fn item_definition(item: Item) -> ItemDefinition {
        let (price, points) = match item {
            Item::HealthPotion => (4, 20),
            Item::ManaPotion => (4, 20),
            Item::FortitudeTonic => (5, 20),
            Item::BurnSalve => (5, 20),
            Item::ReflexPotion => (8, 25),
            Item::QuicksilverPotion => (8, 25),
            Item::CanOfWhupaz => (10, 30),
            Item::FineSword => (12, 35),
            Item::TrollHeart => (14, 40),
            Item::BlueBead => (10, 30),
            Item::StoneSigil => (15, 40),
            Item::SpikedFlail => (16, 40),
            Item::PrismaticCharm => (14, 35),
        };
        ItemDefinition::new(price, points)
    }

    pub const fn spell_points(spell: Spell) -> u32 {
        match spell {
            Spell::Imawal => 50,
            Spell::Cydstepp => 40,
            _ => 30,
        }
    }
}

impl TablesOracle for StandardTables {
    fn item(&self, item: Item) -> ItemDefinition {
        Self::item_definition(item)
    }

    fn spell_conversion_points(&self, spell: Spell) -> u32 {
        Self::spell_points(spell)
    }
}

impl ArchetypeOracle for StandardTables {
    fn class_profile(&self, class: HeroClass) -> Result<ClassProfile, OracleError> {
        Ok(Self::profile(class))
    }

    fn monster_template(&self, kind: MonsterKind) -> Result<MonsterTemplate, OracleError> {
        Ok(Self::template(kind))
    }
}
