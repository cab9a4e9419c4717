//! Hero class and race coefficients.
//!
//! Per-class behaviour is a closed set of variants resolved once when a hero
//! is built: plain numbers, an [`AttackModel`], an [`ExperienceModel`] and a
//! handful of [`HeroTraits`] flags. Nothing on the hot simulation path
//! dispatches dynamically on the class.

/// Playable hero classes.
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
pub enum HeroClass {
    Fighter,
    Berserker,
    Warlord,
    Assassin,
    Priest,
    Monk,
    Paladin,
    Wizard,
    Sorcerer,
    Transmuter,
}

/// Hero races. A race decides the reward granted each time conversion points
/// reach the class threshold.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Race {
    /// +10% damage bonus.
    #[default]
    Human,
    /// +2 max mana.
    Elf,
    /// +10 max HP.
    Dwarf,
    /// +2 base damage.
    Orc,
    /// +5 experience.
    Goblin,
}

bitflags::bitflags! {
    /// Innate class abilities.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct HeroTraits: u16 {
        /// Instantly slays monsters of strictly lower level.
        const SWIFT_HAND = 1 << 0;
        /// Innate first strike.
        const FIRST_STRIKE = 1 << 1;
        /// Melee damage is piercing.
        const PIERCING_STRIKES = 1 << 2;
        /// Melee damage is magical.
        const MAGICAL_STRIKES = 1 << 3;
        /// Melee hits poison living monsters.
        const POISONED_BLADE = 1 << 4;
        /// Double HP regeneration while exploring.
        const HEALTHY = 1 << 5;
    }
}

/// How a class modifies its melee damage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackModel {
    #[default]
    Standard,
    /// Bonus while hero HP is strictly below `threshold_percent` of maximum.
    /// Re-evaluated mid-fight.
    Fury {
        threshold_percent: u8,
        bonus_percent: u16,
    },
    /// Bonus against monsters of higher level than the hero.
    Challenger { bonus_percent: u16 },
}

/// How a class modifies experience earned from kills.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExperienceModel {
    #[default]
    Standard,
    /// Percentage bonus, rounded down.
    Accelerated { percent: u16 },
    /// Flat bonus per kill.
    Bounty { per_kill: u16 },
}

impl ExperienceModel {
    pub fn apply(&self, base: u32) -> u32 {
        match *self {
            ExperienceModel::Standard => base,
            ExperienceModel::Accelerated { percent } => base * (100 + percent as u32) / 100,
            ExperienceModel::Bounty { per_kill } => base + per_kill as u32,
        }
    }
}

/// Class coefficients resolved into plain data at hero construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassProfile {
    pub hp_per_level: u32,
    pub damage_per_level: u32,
    pub base_mana: u32,
    pub spell_slots: u8,
    pub physical_resist: u8,
    pub magical_resist: u8,
    pub conversion_threshold: u32,
    pub attack: AttackModel,
    pub experience: ExperienceModel,
    pub traits: HeroTraits,
}

impl ClassProfile {
    pub const fn standard() -> Self {
        Self {
            hp_per_level: 10,
            damage_per_level: 5,
            base_mana: 10,
            spell_slots: 3,
            physical_resist: 0,
            magical_resist: 0,
            conversion_threshold: 100,
            attack: AttackModel::Standard,
            experience: ExperienceModel::Standard,
            traits: HeroTraits::empty(),
        }
    }

    pub const fn with_attack(mut self, attack: AttackModel) -> Self {
        self.attack = attack;
        self
    }

    pub const fn with_experience(mut self, experience: ExperienceModel) -> Self {
        self.experience = experience;
        self
    }

    pub const fn with_traits(mut self, traits: HeroTraits) -> Self {
        self.traits = traits;
        self
    }

    pub const fn with_resists(mut self, physical: u8, magical: u8) -> Self {
        self.physical_resist = physical;
        self.magical_resist = magical;
        self
    }
}

impl Default for ClassProfile {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_models_modify_base() {
        assert_eq!(ExperienceModel::Standard.apply(7), 7);
        assert_eq!(ExperienceModel::Accelerated { percent: 50 }.apply(7), 10);
        assert_eq!(ExperienceModel::Bounty { per_kill: 2 }.apply(7), 9);
    }

    #[test]
    fn class_names_parse_case_insensitively() {
        assert_eq!("berserker".parse::<HeroClass>().ok(), Some(HeroClass::Berserker));
        assert_eq!("ELF".parse::<Race>().ok(), Some(Race::Elf));
    }
}
