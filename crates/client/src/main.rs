//! Encounter solver driver.
//!
//! Loads a scenario, searches for a winning step sequence and prints it.
//!
//! ```bash
//! encounter crates/game/content/data/scenarios/duel.toml --solver annealing --trace
//! ```
//!
//! Solver tunables come from `SOLVER_*` environment variables (a `.env`
//! file is honoured); command-line flags override the seed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_content::{CatalogLoader, ConfigLoader, ScenarioLoader, StandardTables};
use game_core::{GameConfig, GameEnv, TablesOracle};
use solver::{SolverConfig, SolverKind, render_solution, render_trace};

/// Search for a winning sequence of steps in an encounter.
#[derive(Parser)]
#[command(name = "encounter")]
#[command(version)]
struct Cli {
    /// Scenario TOML file.
    scenario: PathBuf,

    /// Search strategy: genetic (ga) or annealing (sa).
    #[arg(long, default_value = "genetic", value_parser = parse_solver_kind)]
    solver: SolverKind,

    /// Catalogue TOML overriding item prices and conversion values.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Rule configuration TOML.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for search and replay; defaults to the scenario's seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the replay of the solution step by step.
    #[arg(long)]
    trace: bool,
}

fn parse_solver_kind(value: &str) -> Result<SolverKind, String> {
    value
        .parse()
        .map_err(|_| format!("unknown solver '{value}', expected genetic or annealing"))
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let scenario = ScenarioLoader::load(&cli.scenario)?;
    let initial = scenario.build(&StandardTables)?;

    let game_config = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => GameConfig::default(),
    };
    let catalog = cli.catalog.as_deref().map(CatalogLoader::load).transpose()?;
    let tables: &dyn TablesOracle = match &catalog {
        Some(catalog) => catalog,
        None => &StandardTables,
    };
    let env = GameEnv::new(tables, &game_config);

    let mut config = SolverConfig::from_env();
    if let Some(seed) = cli.seed.or(scenario.seed) {
        config.seed = seed;
    }

    let solution = solver::run(cli.solver, &initial, &env, &config)
        .context("Invalid solver configuration")?;

    println!("{}", render_solution(solution.as_ref()));
    if cli.trace
        && let Some(solution) = &solution
    {
        println!("{}", render_trace(&solution.replay(&initial, &env)));
    }

    Ok(())
}
