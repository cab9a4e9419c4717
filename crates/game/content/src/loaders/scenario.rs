//! Encounter scenario loader.
//!
//! A scenario fixes everything the solver needs besides the rule tables:
//! the hero build, the monster line-up, the map resources and optionally the
//! seed that drives tile uncovering.
//!
//! ```toml
//! seed = 7
//!
//! [hero]
//! class = "Fighter"
//! level = 1
//!
//! [[monsters]]
//! kind = "Goblin"
//! level = 1
//!
//! [resources.hidden]
//! free_tiles = 4
//! ```

use std::path::Path;

use anyhow::Context;
use game_core::{
    ArchetypeOracle, GameState, HeroConfig, MonsterSpec, ResourceConfig, initial_state,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub seed: Option<u64>,
    pub hero: HeroConfig,
    pub monsters: Vec<MonsterSpec>,
    #[serde(default)]
    pub resources: ResourceConfig,
}

impl Scenario {
    /// Builds the starting encounter state.
    pub fn build(&self, archetypes: &dyn ArchetypeOracle) -> LoadResult<GameState> {
        let state = initial_state(&self.hero, &self.monsters, &self.resources, archetypes)
            .context("Failed to build initial state from scenario")?;
        tracing::debug!(
            class = %self.hero.class,
            monsters = self.monsters.len(),
            hidden = state.resources.hidden_tiles(),
            "scenario built"
        );
        Ok(state)
    }
}

/// Loader for [`Scenario`] files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in scenario {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario TOML: {}", e))?;

        Ok(scenario)
    }
}
