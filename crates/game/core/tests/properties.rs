//! Property checks over the resolver, the generator and the damage formula.

mod common;

use common::{FlatTables, rich_state};
use game_core::{
    DamageType, Defence, GameConfig, GameEnv, GameState, God, Item, OutcomeKind, PcgRng,
    RandomSource, ResourceConfig, ResourceKind, ResourcePool, Resources, Spell, Step,
    generate_all_valid_steps, generate_valid_step, is_valid, predict_damage_taken, resolve,
};
use proptest::prelude::*;
use proptest::sample::select;
use strum::IntoEnumIterator;

const WALK_LENGTH: usize = 60;

fn assert_conserved(state: &GameState) -> Result<(), TestCaseError> {
    let hero = &state.hero;
    prop_assert!(hero.hp.current() <= hero.hp.overheal_cap());
    prop_assert!(hero.mp.current() <= hero.mp.maximum());
    prop_assert!(hero.faith.piety <= GameConfig::MAX_PIETY);
    for monster in &state.monsters {
        prop_assert!(monster.hp.current() <= monster.hp.maximum());
    }
    Ok(())
}

fn damage_type() -> impl Strategy<Value = DamageType> {
    select(vec![
        DamageType::Physical,
        DamageType::Piercing,
        DamageType::Magical,
        DamageType::Typeless,
    ])
}

fn resources() -> impl Strategy<Value = Resources> {
    (
        prop::array::uniform8(0u32..8),
        prop::collection::vec(select(Item::iter().collect::<Vec<_>>()), 0..4),
        prop::collection::vec(select(Spell::iter().collect::<Vec<_>>()), 0..3),
        prop::collection::vec(select(God::iter().collect::<Vec<_>>()), 0..3),
    )
        .prop_map(|(counts, shops, spells, altars)| Resources {
            free_tiles: counts[0],
            walls: counts[1],
            gold_piles: counts[2],
            health_potions: counts[3],
            mana_potions: counts[4],
            attack_boosters: counts[5],
            mana_boosters: counts[6],
            health_boosters: counts[7],
            shops,
            spells,
            altars,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_steps_always_resolve(seed in any::<u64>()) {
        let config = GameConfig::default();
        let env = GameEnv::new(&FlatTables, &config);
        let mut rng = PcgRng::new(seed);
        let mut state = rich_state();

        for _ in 0..WALK_LENGTH {
            let step = generate_valid_step(&state, &env, &mut rng);
            prop_assert!(is_valid(&step, &state, &env), "{} invalid", step);
            let (next, outcome) = resolve(&state, &step, &env, &mut rng);
            prop_assert_ne!(outcome.kind, OutcomeKind::NotPossible, "{} rejected", step);
            assert_conserved(&next)?;
            state = next;
            if state.is_terminal() {
                break;
            }
        }
    }

    #[test]
    fn every_enumerated_step_resolves(seed in any::<u64>()) {
        let config = GameConfig::default();
        let env = GameEnv::new(&FlatTables, &config);
        let mut rng = PcgRng::new(seed);
        let mut state = rich_state();

        for _ in 0..WALK_LENGTH {
            for step in generate_all_valid_steps(&state, &env) {
                let mut scratch = PcgRng::new(seed ^ 7);
                let (_, outcome) = resolve(&state, &step, &env, &mut scratch);
                prop_assert_ne!(outcome.kind, OutcomeKind::NotPossible, "{} rejected", step);
            }
            let step = generate_valid_step(&state, &env, &mut rng);
            state = resolve(&state, &step, &env, &mut rng).0;
            if state.is_terminal() {
                break;
            }
        }
    }

    #[test]
    fn replay_is_deterministic(seed in any::<u64>()) {
        let config = GameConfig::default();
        let env = GameEnv::new(&FlatTables, &config);

        let mut chooser = PcgRng::new(seed);
        let mut sim = PcgRng::new(seed ^ 0xdead_beef);
        let mut state = rich_state();
        let mut steps = Vec::new();
        for _ in 0..WALK_LENGTH {
            let step = generate_valid_step(&state, &env, &mut chooser);
            steps.push(step);
            state = resolve(&state, &step, &env, &mut sim).0;
        }

        let run = |steps: &[Step]| {
            let mut rng = PcgRng::new(seed ^ 0xdead_beef);
            let mut state = rich_state();
            let mut trace = Vec::new();
            for step in steps {
                let (next, outcome) = resolve(&state, step, &env, &mut rng);
                trace.push((next.clone(), outcome));
                state = next;
            }
            trace
        };
        prop_assert_eq!(run(&steps), run(&steps));
    }

    #[test]
    fn noop_never_changes_state(seed in any::<u64>()) {
        let config = GameConfig::default();
        let env = GameEnv::new(&FlatTables, &config);
        let mut rng = PcgRng::new(seed);
        let mut state = rich_state();

        for _ in 0..WALK_LENGTH {
            let (same, outcome) = resolve(&state, &Step::NoOp, &env, &mut rng);
            prop_assert_eq!(&same, &state);
            prop_assert_eq!(outcome.kind, OutcomeKind::Safe);
            let step = generate_valid_step(&state, &env, &mut rng);
            state = resolve(&state, &step, &env, &mut rng).0;
        }
    }

    #[test]
    fn uncovering_everything_conserves_each_category(
        visible in resources(),
        hidden in resources(),
        seed in any::<u64>(),
    ) {
        let config = ResourceConfig { visible, hidden };
        let mut pool = ResourcePool::new(&config);
        let mut rng = PcgRng::new(seed);
        while pool.uncover(&mut rng).is_some() {}

        prop_assert_eq!(pool.hidden_tiles(), 0);
        for kind in ResourceKind::iter() {
            prop_assert_eq!(
                pool.visible.count(kind) + pool.hidden.count(kind),
                config.visible.count(kind) + config.hidden.count(kind),
                "{} not conserved",
                kind
            );
        }
    }

    #[test]
    fn damage_is_monotone_in_output(
        damage_type in damage_type(),
        output in 0u32..200,
        resist in 0u8..=100,
        burn in 0u8..6,
        corrosion in 0usize..4,
    ) {
        let mut defence = Defence::monster(resist, resist);
        for _ in 0..corrosion {
            defence.corrode();
        }
        let lower = predict_damage_taken(&defence, output, damage_type, burn);
        let higher = predict_damage_taken(&defence, output + 1, damage_type, burn);
        prop_assert!(higher >= lower);
    }

    #[test]
    fn damage_is_antitone_in_resist(
        damage_type in damage_type(),
        output in 0u32..200,
        resist in 0u8..100,
        burn in 0u8..6,
        corrosion in 0usize..4,
    ) {
        let mut weaker = Defence::monster(resist, resist);
        let mut stronger = Defence::monster(resist + 1, resist + 1);
        for _ in 0..corrosion {
            weaker.corrode();
            stronger.corrode();
        }
        let through_weaker = predict_damage_taken(&weaker, output, damage_type, burn);
        let through_stronger = predict_damage_taken(&stronger, output, damage_type, burn);
        prop_assert!(through_stronger <= through_weaker);
    }

    #[test]
    fn rng_roll_stays_in_range(seed in any::<u64>()) {
        let mut rng = PcgRng::new(seed);
        for _ in 0..100 {
            let roll = rng.roll_d100();
            prop_assert!((1..=100).contains(&roll));
        }
    }
}

#[test]
fn rejected_steps_leave_state_untouched() {
    let config = GameConfig::default();
    let env = GameEnv::new(&FlatTables, &config);
    let mut rng = PcgRng::new(1);
    let state = rich_state();

    for step in [
        Step::CastSpell(Spell::Imawal),
        Step::UseItem(Item::FineSword),
        Step::BuyItem(Item::StoneSigil),
        Step::FollowDeity(God::GlowingGuardian),
        Step::ChangeTarget(42),
        Step::UncoverTiles(1000),
    ] {
        assert!(!is_valid(&step, &state, &env));
        let (next, outcome) = resolve(&state, &step, &env, &mut rng);
        assert_eq!(outcome.kind, OutcomeKind::NotPossible);
        assert_eq!(next, state);
    }
}
