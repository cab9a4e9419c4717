use crate::action::{Item, Spell};

/// Oracle providing shop prices and conversion values.
///
/// The core never embeds per-item numbers; they are injected by content
/// crates and read through this trait during `BuyItem` and `ConvertItem`.
pub trait TablesOracle: Send + Sync {
    fn item(&self, item: Item) -> ItemDefinition;
    fn spell_conversion_points(&self, spell: Spell) -> u32;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub price: u32,
    pub conversion_points: u32,
}

impl ItemDefinition {
    pub const fn new(price: u32, conversion_points: u32) -> Self {
        Self {
            price,
            conversion_points,
        }
    }
}
