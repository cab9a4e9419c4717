//! Encounter content: archetype tables, shop catalogue and scenario loaders.
//!
//! Content is consumed through the core oracles and never appears in game
//! state. [`StandardTables`] is always available; the TOML loaders sit
//! behind the `loaders` feature.

pub mod tables;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use tables::StandardTables;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, CatalogTables, ConfigLoader, Scenario, ScenarioLoader};
