//! Who strikes first in a melee exchange.

use crate::state::{Hero, Monster, MonsterTraits};
use crate::stats::{HeroTraits, Status};

/// Returns true if the hero strikes before the monster.
///
/// The monster goes first only when it has an unslowed first strike and the
/// hero cannot outpace it, or when the hero is slow-struck. Two first
/// strikers are ordered by level, the hero winning strictly higher levels.
pub fn hero_has_initiative(hero: &Hero, monster: &Monster) -> bool {
    let monster_fast =
        monster.traits.contains(MonsterTraits::FIRST_STRIKE) && !monster.statuses.has(Status::Slowed);
    let hero_slow = hero.statuses.has(Status::SlowStrike);
    let hero_fast = !hero_slow
        && (hero.profile.traits.contains(HeroTraits::FIRST_STRIKE)
            || hero.statuses.has(Status::FirstStrike)
            || hero.statuses.has(Status::QuickStrike));

    match (hero_fast, monster_fast) {
        (true, true) => hero.level > monster.level,
        (true, false) => true,
        (false, true) => false,
        (false, false) => !hero_slow,
    }
}
