//! Deterministic encounter rules and data types shared by the solver and tools.
//!
//! `game-core` defines the canonical rules (steps, resolver, encounter state)
//! and exposes pure APIs that can be reused by search drivers and offline
//! tools. Every state transition flows through [`engine::resolve`], which
//! never mutates its input and draws randomness only from the explicitly
//! passed [`RandomSource`].
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use action::{Convertible, Item, ItemEffect, Passive, Pickup, Spell, Step};
pub use combat::{DamageType, hero_has_initiative, predict_damage_taken};
pub use config::GameConfig;
pub use engine::{
    Outcome, OutcomeKind, PietyAccumulator, StepError, check, generate_all_valid_steps,
    generate_valid_step, is_valid, resolve,
};
pub use env::{
    ArchetypeOracle, GameEnv, ItemDefinition, MonsterTemplate, OracleError, PcgRng, RandomSource,
    TablesOracle, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Boon, Faith, GameState, God, Hero, HeroConfig, InitializationError, Inventory, Monster,
    MonsterKind, MonsterSpec, MonsterTraits, PietyEvent, ResourceConfig, ResourceKind,
    ResourcePool, Resources, SpellBook, initial_state,
};
pub use stats::{
    AttackModel, ClassProfile, Debuffs, Defence, ExperienceModel, HeroClass, HeroTraits, Race,
    ResourceMeter, Status, StatusSet,
};
