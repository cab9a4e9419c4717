use game_content::StandardTables;
use game_core::{
    ClassProfile, GameConfig, GameEnv, GameState, Hero, HeroClass, HeroConfig, Monster,
    MonsterKind, MonsterSpec, Race, ResourceConfig, ResourcePool, Resources, initial_state,
};
use solver::{SolverConfig, SolverError, SolverKind, render_solution, render_trace, run};

fn small_config(seed: u64) -> SolverConfig {
    SolverConfig {
        population: 8,
        generations: 20,
        max_steps: 12,
        workers: 2,
        seed,
        ..SolverConfig::default()
    }
}

/// Level-1 hero against a single 1 HP monster: any attack wins.
fn pushover() -> GameState {
    let hero = Hero::new(HeroClass::Fighter, Race::Human, ClassProfile::standard(), 1);
    let monster = Monster::new(MonsterKind::Goblin, 1, 1, 1);
    GameState::new(hero, vec![monster], ResourcePool::default())
}

/// A monster the hero can never outlast.
fn hopeless() -> GameState {
    let hero = Hero::new(HeroClass::Fighter, Race::Human, ClassProfile::standard(), 1);
    let monster = Monster::new(MonsterKind::Dragon, 10, 10_000, 1_000);
    GameState::new(hero, vec![monster], ResourcePool::default())
}

fn assert_wins(kind: SolverKind) {
    let initial = pushover();
    let game_config = GameConfig::default();
    let env = GameEnv::new(&StandardTables, &game_config);

    let solution = run(kind, &initial, &env, &small_config(42))
        .unwrap()
        .expect("a winning sequence exists");
    assert!(!solution.steps.is_empty());

    let trace = solution.replay(&initial, &env);
    assert!(trace.is_win(), "{}", render_trace(&trace));
    assert!(trace.last_outcome().is_some_and(|kind| kind.is_victory()));
    assert!(render_solution(Some(&solution)).starts_with("Solution: "));
}

#[test]
fn genetic_solves_trivial_encounter() {
    assert_wins(SolverKind::Genetic);
}

#[test]
fn annealing_solves_trivial_encounter() {
    assert_wins(SolverKind::Annealing);
}

#[test]
fn hopeless_encounter_yields_no_solution() {
    let initial = hopeless();
    let game_config = GameConfig::default();
    let env = GameEnv::new(&StandardTables, &game_config);
    let config = SolverConfig {
        generations: 3,
        ..small_config(1)
    };

    for kind in [SolverKind::Genetic, SolverKind::Annealing] {
        let solution = run(kind, &initial, &env, &config).unwrap();
        assert_eq!(solution, None);
        assert_eq!(render_solution(solution.as_ref()), "Empty solution");
    }
}

#[test]
fn same_seed_finds_same_solution() {
    let hero = HeroConfig::new(HeroClass::Warlord).with_level(2);
    let monsters = [
        MonsterSpec::new(MonsterKind::Goblin, 1),
        MonsterSpec::new(MonsterKind::Serpent, 1),
    ];
    let resources = ResourceConfig {
        visible: Resources::default(),
        hidden: Resources {
            free_tiles: 6,
            health_potions: 1,
            ..Resources::default()
        },
    };
    let initial = initial_state(&hero, &monsters, &resources, &StandardTables).unwrap();
    let game_config = GameConfig::default();
    let env = GameEnv::new(&StandardTables, &game_config);
    let config = SolverConfig {
        population: 16,
        generations: 40,
        workers: 1,
        ..small_config(7)
    };

    let first = run(SolverKind::Genetic, &initial, &env, &config).unwrap();
    let second = run(SolverKind::Genetic, &initial, &env, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn invalid_configuration_is_rejected_before_searching() {
    let initial = pushover();
    let game_config = GameConfig::default();
    let env = GameEnv::new(&StandardTables, &game_config);
    let config = SolverConfig {
        population: 0,
        ..SolverConfig::default()
    };
    assert_eq!(
        run(SolverKind::Genetic, &initial, &env, &config),
        Err(SolverError::EmptyPopulation)
    );
}
