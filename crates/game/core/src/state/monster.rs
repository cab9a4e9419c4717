//! Monster actors.

use crate::combat::DamageType;
use crate::env::MonsterTemplate;
use crate::stats::{Defence, ResourceMeter, Status, StatusSet};

/// Monster archetypes known to the content tables.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum MonsterKind {
    Bandit,
    Goat,
    Goblin,
    Golem,
    Gorgon,
    #[strum(to_string = "Meat Man", serialize = "MeatMan")]
    MeatMan,
    Serpent,
    Vampire,
    Warlock,
    Wraith,
    Zombie,
    Dragon,
}

bitflags::bitflags! {
    /// Innate monster abilities.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MonsterTraits: u16 {
        const FIRST_STRIKE = 1 << 0;
        /// Poisons the hero on a hit.
        const POISONOUS = 1 << 1;
        /// Burns the hero's mana on a hit.
        const MANA_BURN = 1 << 2;
        /// Adds a corrosion layer to the hero on a hit.
        const CORROSIVE = 1 << 3;
        /// Adds a weakness layer to the hero on a hit.
        const WEAKENING = 1 << 4;
        /// Curses the hero that kills it.
        const CURSED = 1 << 5;
        /// Immune to poison.
        const UNDEAD = 1 << 6;
        const MAGICAL_ATTACK = 1 << 7;
        const PIERCING_ATTACK = 1 << 8;
        /// +50% damage below half health.
        const BERSERK = 1 << 9;
    }
}

/// A monster in the encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub kind: MonsterKind,
    pub level: u8,
    pub hp: ResourceMeter,
    pub damage: u32,
    pub defence: Defence,
    pub traits: MonsterTraits,
    /// Petrifying gaze strength as a percentage of hero max HP.
    pub death_gaze_percent: u8,
    pub statuses: StatusSet,
}

impl Monster {
    pub fn new(kind: MonsterKind, level: u8, hp: u32, damage: u32) -> Self {
        Self {
            kind,
            level,
            hp: ResourceMeter::full(hp.max(1)),
            damage,
            defence: Defence::monster(0, 0),
            traits: MonsterTraits::empty(),
            death_gaze_percent: 0,
            statuses: StatusSet::empty(),
        }
    }

    /// Builds a monster from a template, scaling the level baseline.
    ///
    /// ```text
    /// hp     = round(level * (level + 6) - 1) * hp% / 100
    /// damage = round(level * (level + 5) / 2) * damage% / 100
    /// ```
    ///
    /// Both round half up and never drop below 1.
    pub fn from_template(kind: MonsterKind, level: u8, template: &MonsterTemplate) -> Self {
        let level_u = level as u32;
        let base_hp = level_u * (level_u + 6) - 1;
        let base_damage = level_u * (level_u + 5) / 2;

        let mut monster = Self::new(
            kind,
            level,
            scale_percent(base_hp, template.hp_percent),
            scale_percent(base_damage, template.damage_percent),
        )
        .with_traits(template.traits)
        .with_resists(template.physical_resist, template.magical_resist)
        .with_death_gaze(template.death_gaze_percent);
        monster
            .statuses
            .add(Status::DeathProtection, template.death_protection);
        monster
    }

    pub fn with_traits(mut self, traits: MonsterTraits) -> Self {
        self.traits = traits;
        self
    }

    pub fn with_resists(mut self, physical: u8, magical: u8) -> Self {
        self.defence = Defence::monster(physical, magical);
        self
    }

    pub fn with_death_gaze(mut self, percent: u8) -> Self {
        self.death_gaze_percent = percent;
        self
    }

    pub fn is_defeated(&self) -> bool {
        self.hp.is_empty()
    }

    pub fn is_undead(&self) -> bool {
        self.traits.contains(MonsterTraits::UNDEAD)
    }

    pub fn damage_type(&self) -> DamageType {
        if self.traits.contains(MonsterTraits::MAGICAL_ATTACK) {
            DamageType::Magical
        } else if self.traits.contains(MonsterTraits::PIERCING_ATTACK) {
            DamageType::Piercing
        } else {
            DamageType::Physical
        }
    }

    /// Damage output before the hero's defence is applied.
    pub fn attack_output(&self) -> u32 {
        if self.traits.contains(MonsterTraits::BERSERK) && self.hp.percent() < 50 {
            self.damage * 3 / 2
        } else {
            self.damage
        }
    }

    /// Applies damage, letting death protection convert a fatal loss into
    /// 1 HP. Returns how much HP was lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        if amount >= self.hp.current() && self.statuses.consume(Status::DeathProtection) {
            let lost = self.hp.current().saturating_sub(1);
            self.hp.set_current(1);
            return lost;
        }
        self.hp.deplete(amount)
    }

    /// Regeneration on an uncovered tile. Poison blocks it; any burn stack
    /// fades regardless.
    pub fn regenerate(&mut self) {
        self.statuses.clear(Status::Burning);
        if !self.statuses.has(Status::Poisoned) && !self.is_defeated() {
            self.hp.restore(self.level as u32);
        }
    }
}

fn scale_percent(base: u32, percent: u16) -> u32 {
    ((base * percent as u32 + 50) / 100).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_scales_level_baseline() {
        let plain = MonsterTemplate::new(100, 100);
        let m = Monster::from_template(MonsterKind::Goblin, 1, &plain);
        assert_eq!(m.hp.maximum(), 6);
        assert_eq!(m.damage, 3);

        let tough = MonsterTemplate::new(125, 70);
        let m = Monster::from_template(MonsterKind::Golem, 3, &tough);
        // 26 * 1.25 = 32.5 -> 33, 12 * 0.7 = 8.4 -> 8
        assert_eq!(m.hp.maximum(), 33);
        assert_eq!(m.damage, 8);
    }

    #[test]
    fn berserk_raises_output_below_half_health() {
        let mut m = Monster::new(MonsterKind::Goat, 2, 10, 4).with_traits(MonsterTraits::BERSERK);
        assert_eq!(m.attack_output(), 4);
        m.take_damage(6);
        assert_eq!(m.attack_output(), 6);
    }

    #[test]
    fn death_protection_saves_monster_once() {
        let template = MonsterTemplate::new(100, 100).with_death_protection(1);
        let mut m = Monster::from_template(MonsterKind::Vampire, 1, &template);
        m.take_damage(100);
        assert_eq!(m.hp.current(), 1);
        m.take_damage(100);
        assert!(m.is_defeated());
    }

    #[test]
    fn poisoned_monster_does_not_regenerate() {
        let mut m = Monster::new(MonsterKind::Serpent, 3, 20, 1);
        m.take_damage(10);
        m.statuses.add(Status::Poisoned, 1);
        m.statuses.add(Status::Burning, 2);
        m.regenerate();
        assert_eq!(m.hp.current(), 10);
        assert!(!m.statuses.has(Status::Burning));
    }
}
