//! Step precondition failures.

use crate::action::{Item, Pickup, Spell};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Boon, God};

/// Why a step cannot be applied to a state.
///
/// The resolver reports every one of these as `NotPossible`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepError {
    #[error("the encounter is already over")]
    EncounterOver,

    #[error("no living monster is targeted")]
    NoTarget,

    #[error("monster {index} does not exist ({count} monsters)")]
    TargetOutOfRange { index: usize, count: usize },

    #[error("monster {0} is already defeated")]
    TargetDefeated(usize),

    #[error("monster {0} is already the target")]
    AlreadyTargeted(usize),

    #[error("{0} is not in the spell book")]
    SpellNotKnown(Spell),

    #[error("not enough mana (needed {needed}, available {available})")]
    InsufficientMana { needed: u32, available: u32 },

    #[error("the target is immune to {0}")]
    TargetImmune(Spell),

    #[error("{0} would have no effect")]
    SpellHasNoEffect(Spell),

    #[error("cannot uncover {requested} tile(s), {hidden} hidden")]
    InvalidTileCount { requested: u32, hidden: u32 },

    #[error("{0} is not for sale")]
    NotForSale(Item),

    #[error("not enough gold (price {price}, available {available})")]
    InsufficientGold { price: u32, available: u32 },

    #[error("inventory is full")]
    InventoryFull,

    #[error("{0} is not in the inventory")]
    ItemNotHeld(Item),

    #[error("{0} cannot be used")]
    NotConsumable(Item),

    #[error("{0} would have no effect")]
    ItemHasNoEffect(Item),

    #[error("no altar to {0} has been found")]
    AltarNotVisible(God),

    #[error("already following {0}")]
    AlreadyFollowing(God),

    #[error("not following {0}")]
    NotFollowing(God),

    #[error("not enough piety (needed {needed}, available {available})")]
    InsufficientPiety { needed: u8, available: u8 },

    #[error("{0} would have no effect")]
    BoonHasNoEffect(Boon),

    #[error("no {0} is in sight")]
    PickupNotVisible(Pickup),

    #[error("no free spell slot")]
    SpellBookFull,

    #[error("{0} is already known")]
    SpellAlreadyKnown(Spell),
}

impl GameError for StepError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StepError::EncounterOver
            | StepError::TargetOutOfRange { .. }
            | StepError::NotConsumable(_) => ErrorSeverity::Validation,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StepError::EncounterOver => "STEP_ENCOUNTER_OVER",
            StepError::NoTarget => "STEP_NO_TARGET",
            StepError::TargetOutOfRange { .. } => "STEP_TARGET_OUT_OF_RANGE",
            StepError::TargetDefeated(_) => "STEP_TARGET_DEFEATED",
            StepError::AlreadyTargeted(_) => "STEP_ALREADY_TARGETED",
            StepError::SpellNotKnown(_) => "STEP_SPELL_NOT_KNOWN",
            StepError::InsufficientMana { .. } => "STEP_INSUFFICIENT_MANA",
            StepError::TargetImmune(_) => "STEP_TARGET_IMMUNE",
            StepError::SpellHasNoEffect(_) => "STEP_SPELL_NO_EFFECT",
            StepError::InvalidTileCount { .. } => "STEP_INVALID_TILE_COUNT",
            StepError::NotForSale(_) => "STEP_NOT_FOR_SALE",
            StepError::InsufficientGold { .. } => "STEP_INSUFFICIENT_GOLD",
            StepError::InventoryFull => "STEP_INVENTORY_FULL",
            StepError::ItemNotHeld(_) => "STEP_ITEM_NOT_HELD",
            StepError::NotConsumable(_) => "STEP_NOT_CONSUMABLE",
            StepError::ItemHasNoEffect(_) => "STEP_ITEM_NO_EFFECT",
            StepError::AltarNotVisible(_) => "STEP_ALTAR_NOT_VISIBLE",
            StepError::AlreadyFollowing(_) => "STEP_ALREADY_FOLLOWING",
            StepError::NotFollowing(_) => "STEP_NOT_FOLLOWING",
            StepError::InsufficientPiety { .. } => "STEP_INSUFFICIENT_PIETY",
            StepError::BoonHasNoEffect(_) => "STEP_BOON_NO_EFFECT",
            StepError::PickupNotVisible(_) => "STEP_PICKUP_NOT_VISIBLE",
            StepError::SpellBookFull => "STEP_SPELL_BOOK_FULL",
            StepError::SpellAlreadyKnown(_) => "STEP_SPELL_ALREADY_KNOWN",
        }
    }
}
