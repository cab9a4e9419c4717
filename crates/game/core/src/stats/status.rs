//! Status effect system for actors.
//!
//! Statuses are named modifiers with an integer intensity. Some are boolean
//! (intensity clamps to 1), others stack one layer per application.

use strum::EnumCount;

/// Types of status effects.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumCount, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Status {
    // ========================================================================
    // Hero buffs
    // ========================================================================
    /// Converts a fatal loss into 1 HP, consuming one layer. Stacking.
    DeathProtection,

    /// Permanent first strike.
    FirstStrike,

    /// First strike for the next attack only (Getindare).
    QuickStrike,

    /// +30% damage per layer on the next attack (Bysseps). Stacking.
    Might,

    /// Strike a second time after the exchange, once.
    Reflexes,

    /// Next attack applies a crushing blow instead of normal damage.
    CrushingBlow,

    /// Magical retaliation damage whenever the hero is struck. Intensity is
    /// the damage dealt.
    ManaShield,

    // ========================================================================
    // Hero handicaps
    // ========================================================================
    /// Always strikes second.
    SlowStrike,

    // ========================================================================
    // Monster conditions
    // ========================================================================
    /// Burn stack left by fireballs; bonus damage on the next hit. Stacking.
    Burning,

    /// No regeneration.
    Poisoned,

    /// First strike is suppressed.
    Slowed,
}

impl Status {
    /// Whether repeated applications add layers instead of clamping to 1.
    pub const fn is_stacking(self) -> bool {
        matches!(
            self,
            Status::DeathProtection | Status::Might | Status::ManaShield | Status::Burning
        )
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// Multiset of active statuses keyed by [`Status`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusSet {
    intensity: [u8; Status::COUNT],
}

impl StatusSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has(&self, status: Status) -> bool {
        self.intensity[status.index()] > 0
    }

    pub fn intensity(&self, status: Status) -> u8 {
        self.intensity[status.index()]
    }

    /// Adds `layers` of a status. Boolean statuses stay at intensity 1.
    pub fn add(&mut self, status: Status, layers: u8) {
        let slot = &mut self.intensity[status.index()];
        *slot = if status.is_stacking() {
            slot.saturating_add(layers)
        } else if layers > 0 {
            1
        } else {
            *slot
        };
    }

    /// Removes one layer; returns true if a layer was present.
    pub fn consume(&mut self, status: Status) -> bool {
        let slot = &mut self.intensity[status.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Removes every layer of a status.
    pub fn clear(&mut self, status: Status) {
        self.intensity[status.index()] = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.intensity.iter().all(|&n| n == 0)
    }
}

bitflags::bitflags! {
    /// Debuffs incurred by (or currently afflicting) the hero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Debuffs: u8 {
        const POISONED = 1 << 0;
        const MANA_BURNED = 1 << 1;
        const CORRODED = 1 << 2;
        const WEAKENED = 1 << 3;
        const CURSED = 1 << 4;
        /// Not an affliction: a death-protection layer was spent.
        const LOST_DEATH_PROTECTION = 1 << 5;
    }
}

impl core::fmt::Display for Debuffs {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        const NAMES: [(Debuffs, &str); 6] = [
            (Debuffs::POISONED, "poisoned"),
            (Debuffs::MANA_BURNED, "mana burned"),
            (Debuffs::CORRODED, "corroded"),
            (Debuffs::WEAKENED, "weakened"),
            (Debuffs::CURSED, "cursed"),
            (Debuffs::LOST_DEATH_PROTECTION, "lost death protection"),
        ];
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
