//! Combat arithmetic shared by the resolver and the step generator.

mod damage;
mod initiative;

pub use damage::{DamageType, predict_damage_taken};
pub use initiative::hero_has_initiative;
