//! The closed set of hero steps replayed by the resolver.

use core::fmt;

use super::{Item, Spell};
use crate::state::{Boon, God};

/// Something the hero can convert into conversion points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Convertible {
    Item(Item),
    Spell(Spell),
}

impl fmt::Display for Convertible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convertible::Item(item) => fmt::Display::fmt(item, f),
            Convertible::Spell(spell) => fmt::Display::fmt(spell, f),
        }
    }
}

/// A visible map resource the hero can walk over and pick up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pickup {
    GoldPile,
    HealthPotion,
    ManaPotion,
    AttackBooster,
    ManaBooster,
    HealthBooster,
    Spell(Spell),
}

impl fmt::Display for Pickup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pickup::GoldPile => f.write_str("gold pile"),
            Pickup::HealthPotion => f.write_str("health potion"),
            Pickup::ManaPotion => f.write_str("mana potion"),
            Pickup::AttackBooster => f.write_str("attack booster"),
            Pickup::ManaBooster => f.write_str("mana booster"),
            Pickup::HealthBooster => f.write_str("health booster"),
            Pickup::Spell(spell) => write!(f, "{spell} glyph"),
        }
    }
}

/// One hero step.
///
/// Each variant carries only what is needed to replay it; outcomes live in
/// [`crate::engine::Outcome`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    Attack,
    CastSpell(Spell),
    UncoverTiles(u32),
    BuyItem(Item),
    UseItem(Item),
    ConvertItem(Convertible),
    FollowDeity(God),
    RequestBoon(Boon),
    DesecrateAltar(God),
    ChangeTarget(usize),
    Collect(Pickup),
    NoOp,
}

impl Step {
    /// Steps that can kill a monster (and therefore end an encounter).
    pub fn is_offensive(&self) -> bool {
        matches!(self, Step::Attack | Step::CastSpell(_))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Attack => f.write_str("Attack"),
            Step::CastSpell(spell) => write!(f, "Cast {spell}"),
            Step::UncoverTiles(n) => write!(f, "Uncover {n} tile(s)"),
            Step::BuyItem(item) => write!(f, "Buy {item}"),
            Step::UseItem(item) => write!(f, "Use {item}"),
            Step::ConvertItem(what) => write!(f, "Convert {what}"),
            Step::FollowDeity(god) => write!(f, "Follow {god}"),
            Step::RequestBoon(boon) => write!(f, "Request {boon}"),
            Step::DesecrateAltar(god) => write!(f, "Desecrate {god}"),
            Step::ChangeTarget(index) => write!(f, "Target monster {index}"),
            Step::Collect(pickup) => write!(f, "Collect {pickup}"),
            Step::NoOp => f.write_str("No-op"),
        }
    }
}
