/// Rule constants and tunable parameters for encounter simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Gold granted by collecting a single gold pile.
    pub gold_per_pile: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_INVENTORY_SLOTS: usize = 6;
    /// Hard upper bound for spell slots; classes start with fewer.
    pub const MAX_SPELL_SLOTS: usize = 6;

    // ===== rule constants =====
    pub const MAX_LEVEL: u8 = 10;
    pub const MAX_PIETY: u8 = 100;
    /// Experience needed per hero level to reach the next one.
    pub const XP_PER_LEVEL: u32 = 5;
    /// Healing beyond maximum is capped at this percentage of the maximum.
    pub const OVERHEAL_PERCENT: u32 = 150;
    /// Largest batch offered by the step generator for `UncoverTiles`.
    pub const MAX_UNCOVER_BATCH: u32 = 5;
    /// Tiles revealed by a single Lemmisi cast.
    pub const LEMMISI_TILES: u32 = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GOLD_PER_PILE: u32 = 1;

    pub fn new() -> Self {
        Self {
            gold_per_pile: Self::DEFAULT_GOLD_PER_PILE,
        }
    }

    pub fn with_gold_per_pile(gold_per_pile: u32) -> Self {
        Self { gold_per_pile }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
