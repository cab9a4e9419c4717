//! Traits describing read-only content data.
//!
//! Oracles expose item prices, conversion values, class coefficients and
//! monster templates. The [`GameEnv`] aggregate bundles what the resolver
//! needs without hard coupling to concrete implementations.
mod archetypes;
mod error;
mod rng;
mod tables;

pub use archetypes::{ArchetypeOracle, MonsterTemplate};
pub use error::OracleError;
pub use rng::{PcgRng, RandomSource, compute_seed};
pub use tables::{ItemDefinition, TablesOracle};

use crate::config::GameConfig;

/// Read-only environment handed to the resolver, validator and generator.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    tables: &'a dyn TablesOracle,
    config: &'a GameConfig,
}

impl<'a> GameEnv<'a> {
    pub fn new(tables: &'a dyn TablesOracle, config: &'a GameConfig) -> Self {
        Self { tables, config }
    }

    pub fn tables(&self) -> &'a dyn TablesOracle {
        self.tables
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
