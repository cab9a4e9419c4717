//! Actor statistics: meters, mitigation, statuses and class coefficients.

mod defence;
mod meter;
mod profile;
mod status;

pub use defence::Defence;
pub use meter::ResourceMeter;
pub use profile::{AttackModel, ClassProfile, ExperienceModel, HeroClass, HeroTraits, Race};
pub use status::{Debuffs, Status, StatusSet};
