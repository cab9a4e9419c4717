//! Archetype oracle: per-class and per-monster base data.

use crate::state::{MonsterKind, MonsterTraits};
use crate::stats::{ClassProfile, HeroClass};

use super::OracleError;

/// Read-only archetype tables consumed by [`crate::state::initial_state`].
///
/// Class coefficients and monster base stats are data, not mechanism; the
/// core only defines their shape.
pub trait ArchetypeOracle: Send + Sync {
    fn class_profile(&self, class: HeroClass) -> Result<ClassProfile, OracleError>;
    fn monster_template(&self, kind: MonsterKind) -> Result<MonsterTemplate, OracleError>;
}

/// Base data for one monster kind.
///
/// HP and damage are expressed as percentages of the level-derived baseline
/// so one template scales across all monster levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    pub hp_percent: u16,
    pub damage_percent: u16,
    pub physical_resist: u8,
    pub magical_resist: u8,
    pub traits: MonsterTraits,
    /// Petrifying gaze strength as a percentage of hero max HP (0 = none).
    pub death_gaze_percent: u8,
    /// Layers of death protection the monster starts with.
    pub death_protection: u8,
}

impl MonsterTemplate {
    pub const fn new(hp_percent: u16, damage_percent: u16) -> Self {
        Self {
            hp_percent,
            damage_percent,
            physical_resist: 0,
            magical_resist: 0,
            traits: MonsterTraits::empty(),
            death_gaze_percent: 0,
            death_protection: 0,
        }
    }

    pub const fn with_traits(mut self, traits: MonsterTraits) -> Self {
        self.traits = traits;
        self
    }

    pub const fn with_resists(mut self, physical: u8, magical: u8) -> Self {
        self.physical_resist = physical;
        self.magical_resist = magical;
        self
    }

    pub const fn with_death_gaze(mut self, percent: u8) -> Self {
        self.death_gaze_percent = percent;
        self
    }

    pub const fn with_death_protection(mut self, layers: u8) -> Self {
        self.death_protection = layers;
        self
    }
}

impl Default for MonsterTemplate {
    fn default() -> Self {
        Self::new(100, 100)
    }
}
