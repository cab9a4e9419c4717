//! Spell glyphs: identity, mana cost and targeting.

/// Spells the hero can learn from glyphs.
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
pub enum Spell {
    /// Fireball: 4 magical damage per hero level, adds a burn stack.
    Burndayraz,
    /// Poisons the target; undead are immune.
    Apheelsik,
    /// Might for the next attack.
    Bysseps,
    /// Death protection.
    Cydstepp,
    /// Stoneskin layer.
    Endiswal,
    /// First strike for the next attack.
    Getindare,
    /// Heals 4 HP per hero level and cures poison.
    Halpmeh,
    /// Petrifies the target into a wall. No experience.
    Imawal,
    /// Reveals tiles without regeneration.
    Lemmisi,
    /// Slows the target, suppressing its first strike.
    Weytwut,
}

impl Spell {
    pub const fn mana_cost(self) -> u32 {
        match self {
            Spell::Burndayraz => 6,
            Spell::Apheelsik => 5,
            Spell::Bysseps => 2,
            Spell::Cydstepp => 10,
            Spell::Endiswal => 6,
            Spell::Getindare => 3,
            Spell::Halpmeh => 5,
            Spell::Imawal => 15,
            Spell::Lemmisi => 3,
            Spell::Weytwut => 4,
        }
    }

    /// Whether the spell acts on the current target monster.
    pub const fn needs_target(self) -> bool {
        matches!(
            self,
            Spell::Burndayraz | Spell::Apheelsik | Spell::Imawal | Spell::Weytwut
        )
    }
}
