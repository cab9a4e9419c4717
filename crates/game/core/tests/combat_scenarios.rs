mod common;

use common::{FlatTables, duel, fighter};
use game_core::{
    AttackModel, ClassProfile, Debuffs, GameConfig, GameEnv, Hero, HeroClass, HeroTraits, Monster,
    MonsterKind, MonsterTraits, OutcomeKind, PcgRng, Race, Status, Step, resolve,
};

fn attack(state: &game_core::GameState) -> (game_core::GameState, game_core::Outcome) {
    let config = GameConfig::default();
    let env = GameEnv::new(&FlatTables, &config);
    let mut rng = PcgRng::new(0);
    resolve(state, &Step::Attack, &env, &mut rng)
}

#[test]
fn one_hit_kill_leaves_hero_untouched() {
    let mut hero = fighter(1);
    hero.base_damage = 10;
    let state = duel(hero, Monster::new(MonsterKind::Goblin, 1, 10, 1));

    let (next, outcome) = attack(&state);

    assert_eq!(outcome.kind, OutcomeKind::Win);
    assert_eq!(next.hero.hp.current(), 10);
    assert_eq!(next.monsters[0].hp.current(), 0);
    assert!(next.is_cleared());
    assert_eq!(next.hero.xp, 1);
}

#[test]
fn death_protection_absorbs_a_fatal_first_strike() {
    let mut hero = fighter(1);
    hero.statuses.add(Status::DeathProtection, 1);
    hero.hp.set_current(1);
    let monster =
        Monster::new(MonsterKind::Goat, 1, 100, 5).with_traits(MonsterTraits::FIRST_STRIKE);
    let state = duel(hero, monster);

    let (next, outcome) = attack(&state);

    assert_eq!(next.hero.hp.current(), 1);
    assert!(!next.hero.statuses.has(Status::DeathProtection));
    assert!(outcome.debuffs.contains(Debuffs::LOST_DEATH_PROTECTION));
    assert_eq!(outcome.kind, OutcomeKind::Safe);
    // hero still got its blow in
    assert_eq!(next.monsters[0].hp.current(), 95);
}

#[test]
fn poisonous_monster_killed_first_does_not_poison() {
    let monster = Monster::new(MonsterKind::Serpent, 1, 5, 3).with_traits(MonsterTraits::POISONOUS);
    let state = duel(fighter(1), monster);

    let (next, outcome) = attack(&state);

    assert_eq!(outcome.kind, OutcomeKind::Win);
    assert!(!outcome.debuffs.contains(Debuffs::POISONED));
    assert!(!next.hero.poisoned);
}

#[test]
fn poisonous_monster_that_strikes_back_poisons_once() {
    let monster =
        Monster::new(MonsterKind::Serpent, 1, 50, 1).with_traits(MonsterTraits::POISONOUS);
    let state = duel(fighter(1), monster);

    let (next, outcome) = attack(&state);
    assert!(outcome.debuffs.contains(Debuffs::POISONED));
    assert!(next.hero.poisoned);

    let (_, again) = attack(&next);
    assert!(!again.debuffs.contains(Debuffs::POISONED));
}

#[test]
fn death_protection_fails_without_layers() {
    let mut hero = fighter(1);
    hero.hp.set_current(3);
    let monster =
        Monster::new(MonsterKind::Goat, 1, 100, 5).with_traits(MonsterTraits::FIRST_STRIKE);

    let (next, outcome) = attack(&duel(hero, monster));

    assert_eq!(outcome.kind, OutcomeKind::Death);
    assert!(next.is_lost());
    // no retaliation from a dead hero
    assert_eq!(next.monsters[0].hp.current(), 100);
}

#[test]
fn gaze_petrifies_a_weakened_hero() {
    let mut hero = fighter(1);
    hero.hp.set_current(4);
    let monster = Monster::new(MonsterKind::Gorgon, 1, 20, 1).with_death_gaze(50);

    let (next, outcome) = attack(&duel(hero, monster));

    assert_eq!(outcome.kind, OutcomeKind::Petrified);
    assert!(next.is_lost());
    assert_eq!(next.monsters[0].hp.current(), 20);
}

#[test]
fn gaze_threshold_is_compared_unrounded() {
    // 45% of 10 HP is 4.5, which beats 4 HP
    let mut hero = fighter(1);
    hero.hp.set_current(4);
    let monster = Monster::new(MonsterKind::Gorgon, 1, 20, 1).with_death_gaze(45);

    let (next, outcome) = attack(&duel(hero.clone(), monster));

    assert_eq!(outcome.kind, OutcomeKind::Petrified);
    assert!(next.is_lost());
    assert_eq!(next.monsters[0].hp.current(), 20);

    // exactly 40% of 10 HP is 4, which does not beat 4 HP
    let monster = Monster::new(MonsterKind::Gorgon, 1, 20, 1).with_death_gaze(40);
    let (next, outcome) = attack(&duel(hero, monster));
    assert_eq!(outcome.kind, OutcomeKind::Safe);
    assert_eq!(next.hero.hp.current(), 3);
}

#[test]
fn berserk_retaliation_counts_the_first_blow() {
    // 9 - 5 leaves the monster at 44%, so it hits for 4 * 1.5
    let monster = Monster::new(MonsterKind::Bandit, 1, 9, 4).with_traits(MonsterTraits::BERSERK);

    let (next, outcome) = attack(&duel(fighter(1), monster));

    assert_eq!(outcome.kind, OutcomeKind::Safe);
    assert_eq!(next.monsters[0].hp.current(), 4);
    assert_eq!(next.hero.hp.current(), 4);
}

#[test]
fn fury_retaliation_counts_the_first_blow() {
    let profile = ClassProfile::standard().with_attack(AttackModel::Fury {
        threshold_percent: 50,
        bonus_percent: 50,
    });
    let hero = Hero::new(HeroClass::Berserker, Race::Human, profile, 2);
    let monster =
        Monster::new(MonsterKind::Goat, 1, 50, 11).with_traits(MonsterTraits::FIRST_STRIKE);

    let (next, outcome) = attack(&duel(hero, monster));

    // 20 - 11 leaves the hero at 45%, so it strikes back for 10 * 1.5
    assert_eq!(outcome.kind, OutcomeKind::Safe);
    assert_eq!(next.hero.hp.current(), 9);
    assert_eq!(next.monsters[0].hp.current(), 35);
}

#[test]
fn gaze_is_harmless_to_a_healthy_hero() {
    let monster = Monster::new(MonsterKind::Gorgon, 1, 20, 1).with_death_gaze(50);
    let (next, outcome) = attack(&duel(fighter(1), monster));
    assert_eq!(outcome.kind, OutcomeKind::Safe);
    assert_eq!(next.hero.hp.current(), 9);
}

#[test]
fn swift_hand_slays_lower_level_monsters() {
    let profile = ClassProfile::standard().with_traits(HeroTraits::SWIFT_HAND);
    let hero = Hero::new(HeroClass::Assassin, Race::Human, profile, 2);
    let monster = Monster::new(MonsterKind::Bandit, 1, 500, 50);

    let (next, outcome) = attack(&duel(hero, monster));

    assert!(outcome.kind.is_victory());
    assert_eq!(next.hero.hp.current(), 20);
}

#[test]
fn crushing_blow_takes_a_quarter_of_max_hp() {
    let mut hero = fighter(1);
    hero.statuses.add(Status::CrushingBlow, 1);
    let monster = Monster::new(MonsterKind::Golem, 1, 21, 1).with_resists(100, 100);

    let (next, _) = attack(&duel(hero, monster));

    assert_eq!(next.monsters[0].hp.current(), 15);
    assert!(!next.hero.statuses.has(Status::CrushingBlow));
}

#[test]
fn killing_a_cursed_monster_curses_the_hero() {
    let monster = Monster::new(MonsterKind::Warlock, 1, 3, 1).with_traits(MonsterTraits::CURSED);
    let (next, outcome) = attack(&duel(fighter(1), monster));
    assert!(outcome.debuffs.contains(Debuffs::CURSED));
    assert!(next.hero.defence.is_cursed());
}

#[test]
fn mana_shield_retaliates_when_struck() {
    let mut hero = fighter(1);
    hero.statuses.add(Status::ManaShield, 2);
    let monster =
        Monster::new(MonsterKind::Goat, 1, 20, 1).with_traits(MonsterTraits::FIRST_STRIKE);

    let (next, _) = attack(&duel(hero, monster));

    // 5 from the blow, 2 from the shield
    assert_eq!(next.monsters[0].hp.current(), 13);
}

#[test]
fn reflexes_grant_a_second_strike() {
    let mut hero = fighter(1);
    hero.statuses.add(Status::Reflexes, 1);
    let (next, _) = attack(&duel(hero, Monster::new(MonsterKind::Bandit, 1, 20, 1)));
    assert_eq!(next.monsters[0].hp.current(), 10);
    assert!(!next.hero.statuses.has(Status::Reflexes));
}

#[test]
fn kill_levels_up_and_retargets() {
    let mut hero = fighter(1);
    hero.xp = 4;
    let state = game_core::GameState::new(
        hero,
        vec![
            Monster::new(MonsterKind::Goblin, 1, 5, 1),
            Monster::new(MonsterKind::Goblin, 1, 5, 1),
        ],
        game_core::ResourcePool::default(),
    );

    let (next, outcome) = attack(&state);

    assert_eq!(outcome.kind, OutcomeKind::LevelUp);
    assert_eq!(next.hero.level, 2);
    assert_eq!(next.target, 1);
    assert!(!next.is_cleared());
}

#[test]
fn first_strikers_are_ordered_by_level() {
    let mut hero = fighter(2);
    hero.statuses.add(Status::FirstStrike, 1);
    let monster =
        Monster::new(MonsterKind::Goat, 1, 5, 3).with_traits(MonsterTraits::FIRST_STRIKE);
    assert!(game_core::hero_has_initiative(&hero, &monster));

    let equal = Monster::new(MonsterKind::Goat, 2, 5, 3).with_traits(MonsterTraits::FIRST_STRIKE);
    assert!(!game_core::hero_has_initiative(&hero, &equal));

    let mut slowed = equal.clone();
    slowed.statuses.add(Status::Slowed, 1);
    assert!(game_core::hero_has_initiative(&hero, &slowed));
}
