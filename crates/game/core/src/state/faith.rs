//! Gods, boons and piety.

use crate::config::GameConfig;

/// Gods whose altars can appear in the dungeon.
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
pub enum God {
    Dracul,
    Earthmother,
    #[strum(to_string = "Glowing Guardian", serialize = "GlowingGuardian")]
    GlowingGuardian,
    #[strum(to_string = "Jehora Jeheyu", serialize = "JehoraJeheyu")]
    JehoraJeheyu,
    #[strum(to_string = "Mystera Annur", serialize = "MysteraAnnur")]
    MysteraAnnur,
    Taurog,
    #[strum(to_string = "Tikki Tooki", serialize = "TikkiTooki")]
    TikkiTooki,
}

/// Something the hero did that a god may like or dislike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PietyEvent {
    MonsterKilled { higher_level: bool, undead: bool },
    SpellCast,
    HealthPotionUsed,
    ManaPotionUsed,
    TilesUncovered(u32),
    ItemConverted,
}

impl God {
    /// Piety change caused by an event while following this god.
    pub fn piety_for(self, event: PietyEvent) -> i32 {
        match (self, event) {
            (God::Dracul, PietyEvent::MonsterKilled { undead: false, .. }) => 2,
            (God::Dracul, PietyEvent::HealthPotionUsed) => -5,
            (God::Earthmother, PietyEvent::TilesUncovered(n)) => n as i32,
            (God::GlowingGuardian, PietyEvent::ItemConverted) => 3,
            (God::JehoraJeheyu, PietyEvent::MonsterKilled { .. }) => 1,
            (God::MysteraAnnur, PietyEvent::SpellCast) => 1,
            (God::Taurog, PietyEvent::MonsterKilled { .. }) => 3,
            (God::Taurog, PietyEvent::SpellCast) => -2,
            (God::TikkiTooki, PietyEvent::MonsterKilled { higher_level: true, .. }) => 5,
            (God::TikkiTooki, PietyEvent::MonsterKilled { higher_level: false, .. }) => -1,
            _ => 0,
        }
    }

    pub fn boons(self) -> &'static [Boon] {
        match self {
            God::Dracul => &[Boon::Sanguine],
            God::Earthmother => &[Boon::Refreshment, Boon::Stoneskin],
            God::GlowingGuardian => &[Boon::Absolution, Boon::Protection],
            God::JehoraJeheyu => &[Boon::Petition],
            God::MysteraAnnur => &[Boon::MagicAffinity, Boon::Spellward],
            God::Taurog => &[Boon::Strength, Boon::Warpath],
            God::TikkiTooki => &[Boon::Reflexes, Boon::Swiftness],
        }
    }
}

/// Favours a followed god grants in exchange for piety.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Boon {
    /// Heal half of max HP, overhealing up to the cap.
    Sanguine,
    /// Cure poison and weakness.
    Refreshment,
    /// One stoneskin layer.
    Stoneskin,
    /// Lift curse and corrosion.
    Absolution,
    /// One death protection layer.
    Protection,
    /// Roll d100 against piety for a full heal and cure.
    Petition,
    /// +1 max mana.
    #[strum(to_string = "Magic Affinity", serialize = "MagicAffinity")]
    MagicAffinity,
    /// +15 magical resist.
    Spellward,
    /// +10% damage.
    Strength,
    /// Might for the next attack.
    Warpath,
    /// Reflexes for the next attack.
    Reflexes,
    /// Permanent first strike.
    Swiftness,
}

impl Boon {
    pub const fn god(self) -> God {
        match self {
            Boon::Sanguine => God::Dracul,
            Boon::Refreshment | Boon::Stoneskin => God::Earthmother,
            Boon::Absolution | Boon::Protection => God::GlowingGuardian,
            Boon::Petition => God::JehoraJeheyu,
            Boon::MagicAffinity | Boon::Spellward => God::MysteraAnnur,
            Boon::Strength | Boon::Warpath => God::Taurog,
            Boon::Reflexes | Boon::Swiftness => God::TikkiTooki,
        }
    }

    pub const fn cost(self) -> u8 {
        match self {
            Boon::Sanguine => 35,
            Boon::Refreshment => 20,
            Boon::Stoneskin => 30,
            Boon::Absolution => 20,
            Boon::Protection => 50,
            Boon::Petition => 15,
            Boon::MagicAffinity => 15,
            Boon::Spellward => 30,
            Boon::Strength => 20,
            Boon::Warpath => 10,
            Boon::Reflexes => 30,
            Boon::Swiftness => 20,
        }
    }
}

/// The hero's current allegiance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Faith {
    pub god: Option<God>,
    pub piety: u8,
}

impl Faith {
    pub fn follows(&self, god: God) -> bool {
        self.god == Some(god)
    }

    /// Switches allegiance. Piety starts over.
    pub fn follow(&mut self, god: God) {
        self.god = Some(god);
        self.piety = 0;
    }

    /// Adds `delta` piety clamped to `[0, MAX_PIETY]`; returns the applied
    /// change.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        let before = self.piety as i32;
        let after = (before + delta).clamp(0, GameConfig::MAX_PIETY as i32);
        self.piety = after as u8;
        after - before
    }

    /// Spends piety if enough is available.
    pub fn spend(&mut self, cost: u8) -> bool {
        if self.piety < cost {
            return false;
        }
        self.piety -= cost;
        true
    }
}
