//! The hero actor.

use crate::action::{Item, Passive};
use crate::combat::DamageType;
use crate::config::GameConfig;
use crate::stats::{
    AttackModel, ClassProfile, Debuffs, Defence, HeroClass, HeroTraits, Race, ResourceMeter,
    Status, StatusSet,
};

use super::{Faith, Inventory, Monster, SpellBook};

/// Hero state.
///
/// Class behaviour is carried as plain data in [`ClassProfile`]; nothing here
/// dispatches on [`HeroClass`] after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    pub class: HeroClass,
    pub race: Race,
    pub profile: ClassProfile,
    pub level: u8,
    pub xp: u32,
    pub hp: ResourceMeter,
    pub mp: ResourceMeter,
    pub base_damage: u32,
    /// Percentage bonus applied to melee output.
    pub damage_bonus: i32,
    pub defence: Defence,
    pub statuses: StatusSet,
    pub poisoned: bool,
    pub mana_burned: bool,
    /// Weakness layers; each one removes a point of base damage.
    pub weakness: u8,
    pub gold: u32,
    pub conversion_points: u32,
    pub inventory: Inventory,
    pub spells: SpellBook,
    pub faith: Faith,
}

impl Hero {
    pub fn new(class: HeroClass, race: Race, profile: ClassProfile, level: u8) -> Self {
        let level = level.clamp(1, GameConfig::MAX_LEVEL);
        Self {
            class,
            race,
            profile,
            level,
            xp: 0,
            hp: ResourceMeter::full(profile.hp_per_level * level as u32),
            mp: ResourceMeter::full(profile.base_mana),
            base_damage: profile.damage_per_level * level as u32,
            damage_bonus: 0,
            defence: Defence::hero(profile.physical_resist, profile.magical_resist),
            statuses: StatusSet::empty(),
            poisoned: false,
            mana_burned: false,
            weakness: 0,
            gold: 0,
            conversion_points: 0,
            inventory: Inventory::new(),
            spells: SpellBook::with_slots(profile.spell_slots),
            faith: Faith::default(),
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.hp.is_empty()
    }

    pub fn has_trait(&self, flag: HeroTraits) -> bool {
        self.profile.traits.contains(flag)
    }

    pub fn xp_to_next_level(&self) -> u32 {
        GameConfig::XP_PER_LEVEL * self.level as u32
    }

    pub fn damage_type(&self) -> DamageType {
        if self.has_trait(HeroTraits::MAGICAL_STRIKES) {
            DamageType::Magical
        } else if self.has_trait(HeroTraits::PIERCING_STRIKES)
            || self.inventory.contains(Item::SpikedFlail)
        {
            DamageType::Piercing
        } else {
            DamageType::Physical
        }
    }

    /// Melee output against `monster` before its defence is applied.
    ///
    /// Reads the hero's current HP, so a fury bonus switches on as soon as
    /// the hero drops below its threshold.
    pub fn attack_output(&self, monster: &Monster) -> u32 {
        let base = self.base_damage.saturating_sub(self.weakness as u32);
        let mut bonus = self.damage_bonus + 30 * self.statuses.intensity(Status::Might) as i32;
        bonus += match self.profile.attack {
            AttackModel::Standard => 0,
            AttackModel::Fury {
                threshold_percent,
                bonus_percent,
            } => {
                if self.hp.percent() < threshold_percent as u32 {
                    bonus_percent as i32
                } else {
                    0
                }
            }
            AttackModel::Challenger { bonus_percent } => {
                if monster.level > self.level {
                    bonus_percent as i32
                } else {
                    0
                }
            }
        };
        let scale = (100 + bonus).max(0) as u32;
        base * scale / 100
    }

    /// Applies damage. Death protection turns a fatal loss into 1 HP and
    /// consumes one layer; returns true when that happened.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        if amount == 0 {
            return false;
        }
        if amount >= self.hp.current() && self.statuses.consume(Status::DeathProtection) {
            self.hp.set_current(1);
            return true;
        }
        self.hp.deplete(amount);
        false
    }

    /// Loses every hit point, subject to death protection.
    pub fn lose_all_hp(&mut self) -> bool {
        let current = self.hp.current().max(1);
        self.take_damage(current)
    }

    pub fn heal(&mut self, amount: u32) -> u32 {
        self.hp.restore(amount)
    }

    /// Awards experience. Returns true if at least one level was gained.
    pub fn gain_experience(&mut self, amount: u32) -> bool {
        self.xp += amount;
        let mut levelled = false;
        while self.level < GameConfig::MAX_LEVEL && self.xp >= self.xp_to_next_level() {
            self.xp -= self.xp_to_next_level();
            self.level_up();
            levelled = true;
        }
        levelled
    }

    fn level_up(&mut self) {
        self.level += 1;
        self.hp.raise_maximum(self.profile.hp_per_level);
        self.base_damage += self.profile.damage_per_level;
        self.hp.refill();
        self.mp.refill();
        self.poisoned = false;
        self.mana_burned = false;
    }

    /// Debuffs currently afflicting the hero.
    pub fn debuffs(&self) -> Debuffs {
        let mut debuffs = Debuffs::empty();
        debuffs.set(Debuffs::POISONED, self.poisoned);
        debuffs.set(Debuffs::MANA_BURNED, self.mana_burned);
        debuffs.set(Debuffs::CORRODED, self.defence.corrosion() > 0);
        debuffs.set(Debuffs::WEAKENED, self.weakness > 0);
        debuffs.set(Debuffs::CURSED, self.defence.is_cursed());
        debuffs
    }

    /// Returns true if the poison is new.
    pub fn poison(&mut self) -> bool {
        !std::mem::replace(&mut self.poisoned, true)
    }

    /// Burns all mana. Returns true if the burn is new.
    pub fn mana_burn(&mut self) -> bool {
        self.mp.set_current(0);
        !std::mem::replace(&mut self.mana_burned, true)
    }

    pub fn corrode(&mut self) {
        self.defence.corrode();
    }

    pub fn weaken(&mut self) {
        self.weakness = self.weakness.saturating_add(1);
    }

    pub fn curse(&mut self) {
        self.defence.curse_once();
    }

    /// Regeneration for one uncovered tile.
    pub fn regenerate(&mut self) {
        if !self.poisoned {
            let mut amount = self.level as u32;
            if self.has_trait(HeroTraits::HEALTHY) {
                amount *= 2;
            }
            self.hp.restore(amount);
        }
        if !self.mana_burned {
            self.mp.restore(1);
        }
    }

    pub fn apply_passive(&mut self, passive: Passive) {
        match passive {
            Passive::BaseDamage(n) => self.base_damage += n,
            Passive::MaxHp(n) => self.hp.raise_maximum(n),
            Passive::MaxMana(n) => self.mp.raise_maximum(n),
            Passive::PhysicalResist(n) => self.defence.add_physical_resist(n),
            Passive::MagicalResist(n) => self.defence.add_magical_resist(n),
            Passive::PiercingStrikes => {}
            Passive::ManaShield(n) => self.statuses.add(Status::ManaShield, n),
        }
    }

    pub fn revert_passive(&mut self, passive: Passive) {
        match passive {
            Passive::BaseDamage(n) => self.base_damage = self.base_damage.saturating_sub(n),
            Passive::MaxHp(n) => self.hp.lower_maximum(n),
            Passive::MaxMana(n) => self.mp.lower_maximum(n),
            Passive::PhysicalResist(n) => self.defence.remove_physical_resist(n),
            Passive::MagicalResist(n) => self.defence.remove_magical_resist(n),
            Passive::PiercingStrikes => {}
            Passive::ManaShield(n) => {
                for _ in 0..n {
                    self.statuses.consume(Status::ManaShield);
                }
            }
        }
    }

    /// Grants the race reward for a completed conversion threshold. Returns
    /// true if it levelled the hero up.
    pub fn apply_race_bonus(&mut self) -> bool {
        match self.race {
            Race::Human => {
                self.damage_bonus += 10;
                false
            }
            Race::Elf => {
                self.mp.raise_maximum(2);
                false
            }
            Race::Dwarf => {
                self.hp.raise_maximum(10);
                false
            }
            Race::Orc => {
                self.base_damage += 2;
                false
            }
            Race::Goblin => self.gain_experience(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MonsterKind;

    fn fighter(level: u8) -> Hero {
        Hero::new(HeroClass::Fighter, Race::Human, ClassProfile::standard(), level)
    }

    #[test]
    fn level_scales_hp_and_damage() {
        let hero = fighter(3);
        assert_eq!(hero.hp.maximum(), 30);
        assert_eq!(hero.base_damage, 15);
        assert_eq!(hero.mp.maximum(), 10);
    }

    #[test]
    fn death_protection_leaves_one_hp() {
        let mut hero = fighter(1);
        hero.statuses.add(Status::DeathProtection, 1);
        hero.hp.set_current(1);
        assert!(hero.take_damage(5));
        assert_eq!(hero.hp.current(), 1);
        assert!(!hero.statuses.has(Status::DeathProtection));
        assert!(!hero.take_damage(5));
        assert!(hero.is_defeated());
    }

    #[test]
    fn level_up_heals_and_cures() {
        let mut hero = fighter(1);
        hero.take_damage(7);
        hero.poison();
        assert!(hero.gain_experience(5));
        assert_eq!(hero.level, 2);
        assert_eq!(hero.hp.current(), 20);
        assert!(!hero.poisoned);
        assert_eq!(hero.xp, 0);
    }

    #[test]
    fn fury_switches_on_below_threshold() {
        let profile = ClassProfile::standard().with_attack(AttackModel::Fury {
            threshold_percent: 50,
            bonus_percent: 50,
        });
        let mut hero = Hero::new(HeroClass::Berserker, Race::Human, profile, 2);
        let monster = Monster::new(MonsterKind::Goblin, 1, 5, 1);
        assert_eq!(hero.attack_output(&monster), 10);
        hero.take_damage(11);
        assert_eq!(hero.attack_output(&monster), 15);
    }

    #[test]
    fn weakness_and_might_shape_output() {
        let mut hero = fighter(2);
        let monster = Monster::new(MonsterKind::Goblin, 1, 5, 1);
        hero.weaken();
        hero.weaken();
        assert_eq!(hero.attack_output(&monster), 8);
        hero.statuses.add(Status::Might, 1);
        assert_eq!(hero.attack_output(&monster), 10);
    }

    #[test]
    fn passives_revert_exactly() {
        let mut hero = fighter(1);
        let before = hero.clone();
        hero.apply_passive(Passive::MaxHp(10));
        hero.apply_passive(Passive::PhysicalResist(15));
        assert_eq!(hero.hp.maximum(), 20);
        hero.revert_passive(Passive::PhysicalResist(15));
        hero.revert_passive(Passive::MaxHp(10));
        assert_eq!(hero, before);
    }
}
