//! Damage mitigation state shared by heroes and monsters.

use crate::combat::DamageType;

/// Resistances and flat modifiers applied to incoming damage.
///
/// Raw resist values are stored uncapped so that equipment can be removed
/// again exactly; caps are applied when the effective value is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Defence {
    physical_resist: u16,
    physical_cap: u8,
    magical_resist: u16,
    magical_cap: u8,
    stoneskin: u8,
    corrosion: u8,
    curse: u8,
}

impl Defence {
    /// Physical resist granted per stoneskin layer.
    pub const STONESKIN_RESIST: u16 = 20;
    /// Physical resist ignored by piercing damage.
    pub const PIERCE_POINTS: u16 = 35;
    pub const HERO_CAP: u8 = 65;
    pub const MONSTER_CAP: u8 = 100;

    pub const fn new(physical_resist: u8, magical_resist: u8, cap: u8) -> Self {
        Self {
            physical_resist: physical_resist as u16,
            physical_cap: cap,
            magical_resist: magical_resist as u16,
            magical_cap: cap,
            stoneskin: 0,
            corrosion: 0,
            curse: 0,
        }
    }

    pub const fn hero(physical_resist: u8, magical_resist: u8) -> Self {
        Self::new(physical_resist, magical_resist, Self::HERO_CAP)
    }

    pub const fn monster(physical_resist: u8, magical_resist: u8) -> Self {
        Self::new(physical_resist, magical_resist, Self::MONSTER_CAP)
    }

    /// Physical resist including stoneskin, capped.
    pub fn physical_resist(&self) -> u8 {
        let raw = self.physical_resist + self.stoneskin as u16 * Self::STONESKIN_RESIST;
        raw.min(self.physical_cap as u16) as u8
    }

    pub fn magical_resist(&self) -> u8 {
        self.magical_resist.min(self.magical_cap as u16) as u8
    }

    pub fn physical_cap(&self) -> u8 {
        self.physical_cap
    }

    /// Resist percentage actually applied to damage of the given type.
    pub fn effective_resist(&self, damage_type: DamageType) -> u8 {
        if self.is_cursed() {
            return 0;
        }
        match damage_type {
            DamageType::Physical => self.physical_resist(),
            DamageType::Piercing => {
                (self.physical_resist() as u16).saturating_sub(Self::PIERCE_POINTS) as u8
            }
            DamageType::Magical => self.magical_resist(),
            DamageType::Typeless => 0,
        }
    }

    pub fn stoneskin(&self) -> u8 {
        self.stoneskin
    }

    pub fn corrosion(&self) -> u8 {
        self.corrosion
    }

    pub fn curse(&self) -> u8 {
        self.curse
    }

    pub fn is_cursed(&self) -> bool {
        self.curse > 0
    }

    /// True while another stoneskin layer would still raise physical resist.
    pub fn stoneskin_effective(&self) -> bool {
        let raw = self.physical_resist + self.stoneskin as u16 * Self::STONESKIN_RESIST;
        raw < self.physical_cap as u16
    }

    pub fn add_physical_resist(&mut self, amount: u8) {
        self.physical_resist = self.physical_resist.saturating_add(amount as u16);
    }

    pub fn remove_physical_resist(&mut self, amount: u8) {
        self.physical_resist = self.physical_resist.saturating_sub(amount as u16);
    }

    pub fn add_magical_resist(&mut self, amount: u8) {
        self.magical_resist = self.magical_resist.saturating_add(amount as u16);
    }

    pub fn remove_magical_resist(&mut self, amount: u8) {
        self.magical_resist = self.magical_resist.saturating_sub(amount as u16);
    }

    pub fn add_stoneskin(&mut self) {
        self.stoneskin = self.stoneskin.saturating_add(1);
    }

    pub fn corrode(&mut self) {
        self.corrosion = self.corrosion.saturating_add(1);
    }

    pub fn curse_once(&mut self) {
        self.curse = self.curse.saturating_add(1);
    }

    pub fn clear_corrosion(&mut self) {
        self.corrosion = 0;
    }

    pub fn clear_curse(&mut self) {
        self.curse = 0;
    }
}

impl Default for Defence {
    fn default() -> Self {
        Self::hero(0, 0)
    }
}
