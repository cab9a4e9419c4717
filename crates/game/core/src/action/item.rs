//! Shop items: consumables and passive equipment.

/// Items that can be bought, picked up, used or converted.
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
pub enum Item {
    // Consumables
    #[strum(to_string = "Health Potion", serialize = "HealthPotion")]
    HealthPotion,
    #[strum(to_string = "Mana Potion", serialize = "ManaPotion")]
    ManaPotion,
    #[strum(to_string = "Fortitude Tonic", serialize = "FortitudeTonic")]
    FortitudeTonic,
    #[strum(to_string = "Burn Salve", serialize = "BurnSalve")]
    BurnSalve,
    #[strum(to_string = "Reflex Potion", serialize = "ReflexPotion")]
    ReflexPotion,
    #[strum(to_string = "Quicksilver Potion", serialize = "QuicksilverPotion")]
    QuicksilverPotion,
    #[strum(to_string = "Can of Whupaz", serialize = "CanOfWhupaz")]
    CanOfWhupaz,

    // Equipment
    #[strum(to_string = "Fine Sword", serialize = "FineSword")]
    FineSword,
    #[strum(to_string = "Troll Heart", serialize = "TrollHeart")]
    TrollHeart,
    #[strum(to_string = "Blue Bead", serialize = "BlueBead")]
    BlueBead,
    #[strum(to_string = "Stone Sigil", serialize = "StoneSigil")]
    StoneSigil,
    #[strum(to_string = "Spiked Flail", serialize = "SpikedFlail")]
    SpikedFlail,
    #[strum(to_string = "Prismatic Charm", serialize = "PrismaticCharm")]
    PrismaticCharm,
}

/// What owning or using an item does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemEffect {
    /// Consumed by `UseItem`.
    Consumable,
    /// Applied while held; reverted when converted.
    Passive(Passive),
}

/// Passive modifiers granted by equipment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Passive {
    BaseDamage(u32),
    MaxHp(u32),
    MaxMana(u32),
    PhysicalResist(u8),
    MagicalResist(u8),
    PiercingStrikes,
    ManaShield(u8),
}

impl Item {
    pub const fn effect(self) -> ItemEffect {
        match self {
            Item::HealthPotion
            | Item::ManaPotion
            | Item::FortitudeTonic
            | Item::BurnSalve
            | Item::ReflexPotion
            | Item::QuicksilverPotion
            | Item::CanOfWhupaz => ItemEffect::Consumable,
            Item::FineSword => ItemEffect::Passive(Passive::BaseDamage(2)),
            Item::TrollHeart => ItemEffect::Passive(Passive::MaxHp(10)),
            Item::BlueBead => ItemEffect::Passive(Passive::MaxMana(2)),
            Item::StoneSigil => ItemEffect::Passive(Passive::PhysicalResist(15)),
            Item::SpikedFlail => ItemEffect::Passive(Passive::PiercingStrikes),
            Item::PrismaticCharm => ItemEffect::Passive(Passive::ManaShield(2)),
        }
    }

    pub const fn is_consumable(self) -> bool {
        matches!(self.effect(), ItemEffect::Consumable)
    }
}
