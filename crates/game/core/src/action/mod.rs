//! Hero steps and the content identities they refer to.
//!
//! - `step`: the [`Step`] union replayed by the resolver
//! - `spell`: spell glyphs and their mana costs
//! - `item`: shop items, consumable or passive

mod item;
mod spell;
mod step;

pub use item::{Item, ItemEffect, Passive};
pub use spell::Spell;
pub use step::{Convertible, Pickup, Step};
