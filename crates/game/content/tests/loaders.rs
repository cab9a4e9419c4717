use std::path::PathBuf;

use game_content::{CatalogLoader, ScenarioLoader, StandardTables};
use game_core::{
    GameConfig, GameEnv, God, HeroClass, Item, MonsterKind, OutcomeKind, PcgRng, ResourceKind,
    Spell, Step, TablesOracle, resolve,
};

fn data(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(path)
}

#[test]
fn duel_scenario_builds_and_can_be_won() {
    let scenario = ScenarioLoader::load(&data("scenarios/duel.toml")).unwrap();
    assert_eq!(scenario.seed, Some(7));
    assert_eq!(scenario.hero.class, HeroClass::Fighter);
    assert_eq!(scenario.monsters.len(), 1);

    let state = scenario.build(&StandardTables).unwrap();
    assert_eq!(state.resources.hidden_tiles(), 8);
    assert_eq!(state.monsters[0].hp.current(), 6);

    let config = GameConfig::default();
    let env = GameEnv::new(&StandardTables, &config);
    let mut rng = PcgRng::new(7);

    let (state, first) = resolve(&state, &Step::Attack, &env, &mut rng);
    assert_eq!(first.kind, OutcomeKind::Safe);
    let (state, second) = resolve(&state, &Step::Attack, &env, &mut rng);
    assert!(second.kind.is_victory());
    assert!(state.is_cleared());
}

#[test]
fn gauntlet_scenario_reads_every_section() {
    let scenario = ScenarioLoader::load(&data("scenarios/gauntlet.toml")).unwrap();
    assert_eq!(scenario.hero.spells, vec![Spell::Burndayraz, Spell::Bysseps]);
    assert_eq!(scenario.hero.items, vec![Item::HealthPotion, Item::FineSword]);
    assert_eq!(scenario.monsters[2].kind, MonsterKind::Wraith);
    assert_eq!(scenario.resources.visible.altars, vec![God::Taurog]);

    let state = scenario.build(&StandardTables).unwrap();
    assert_eq!(state.resources.visible.count(ResourceKind::Shop), 2);
    assert_eq!(state.resources.hidden.count(ResourceKind::Altar), 1);
    assert_eq!(state.hero.inventory.len(), 2);
}

#[test]
fn scenario_without_monsters_fails_to_build() {
    let scenario = ScenarioLoader::parse(
        r#"
        monsters = []

        [hero]
        class = "Monk"
        "#,
    )
    .unwrap();
    assert_eq!(scenario.hero.level, 1);
    assert!(scenario.build(&StandardTables).is_err());
}

#[test]
fn malformed_scenario_is_an_error() {
    assert!(ScenarioLoader::parse("[hero]\nclass = \"Bard\"\nmonsters = []").is_err());
    assert!(ScenarioLoader::load(&data("scenarios/missing.toml")).is_err());
}

#[test]
fn catalogue_file_overrides_prices() {
    let tables = CatalogLoader::load(&data("catalog.toml")).unwrap();
    assert_eq!(tables.item(Item::HealthPotion).price, 3);
    assert_eq!(tables.spell_conversion_points(Spell::Imawal), 60);
    assert_eq!(
        tables.item(Item::StoneSigil),
        StandardTables.item(Item::StoneSigil)
    );
}
