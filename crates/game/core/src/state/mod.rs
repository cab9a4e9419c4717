//! Encounter state: the hero, the monsters and the map's resources.
//!
//! Everything here is plain data with invariant-preserving mutators. Game
//! rules live in [`crate::engine`].

mod error;
mod faith;
mod game;
mod hero;
mod inventory;
mod monster;
mod resources;

pub use error::InitializationError;
pub use faith::{Boon, Faith, God, PietyEvent};
pub use game::{GameState, HeroConfig, MonsterSpec, initial_state};
pub use hero::Hero;
pub use inventory::{Inventory, SpellBook};
pub use monster::{Monster, MonsterKind, MonsterTraits};
pub use resources::{ResourceConfig, ResourceKind, ResourcePool, Resources};
