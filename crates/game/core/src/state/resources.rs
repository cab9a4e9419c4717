//! Map resources split into visible and hidden pools.

use crate::action::{Item, Spell};
use crate::env::RandomSource;

use super::God;

/// Resource categories that occupy map tiles.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    FreeTile,
    Wall,
    GoldPile,
    HealthPotion,
    ManaPotion,
    AttackBooster,
    ManaBooster,
    HealthBooster,
    Shop,
    Spell,
    Altar,
}

/// Counts of map resources of every category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Resources {
    pub free_tiles: u32,
    pub walls: u32,
    pub gold_piles: u32,
    pub health_potions: u32,
    pub mana_potions: u32,
    pub attack_boosters: u32,
    pub mana_boosters: u32,
    pub health_boosters: u32,
    pub shops: Vec<Item>,
    pub spells: Vec<Spell>,
    pub altars: Vec<God>,
}

impl Resources {
    pub fn count(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::FreeTile => self.free_tiles,
            ResourceKind::Wall => self.walls,
            ResourceKind::GoldPile => self.gold_piles,
            ResourceKind::HealthPotion => self.health_potions,
            ResourceKind::ManaPotion => self.mana_potions,
            ResourceKind::AttackBooster => self.attack_boosters,
            ResourceKind::ManaBooster => self.mana_boosters,
            ResourceKind::HealthBooster => self.health_boosters,
            ResourceKind::Shop => self.shops.len() as u32,
            ResourceKind::Spell => self.spells.len() as u32,
            ResourceKind::Altar => self.altars.len() as u32,
        }
    }

    /// Total number of tiles these resources occupy.
    pub fn tiles(&self) -> u32 {
        use strum::IntoEnumIterator;
        ResourceKind::iter().map(|kind| self.count(kind)).sum()
    }

    fn counter_mut(&mut self, kind: ResourceKind) -> Option<&mut u32> {
        match kind {
            ResourceKind::FreeTile => Some(&mut self.free_tiles),
            ResourceKind::Wall => Some(&mut self.walls),
            ResourceKind::GoldPile => Some(&mut self.gold_piles),
            ResourceKind::HealthPotion => Some(&mut self.health_potions),
            ResourceKind::ManaPotion => Some(&mut self.mana_potions),
            ResourceKind::AttackBooster => Some(&mut self.attack_boosters),
            ResourceKind::ManaBooster => Some(&mut self.mana_boosters),
            ResourceKind::HealthBooster => Some(&mut self.health_boosters),
            ResourceKind::Shop | ResourceKind::Spell | ResourceKind::Altar => None,
        }
    }

    /// Removes one counted unit. Returns false on underflow.
    pub fn take(&mut self, kind: ResourceKind) -> bool {
        match self.counter_mut(kind) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Adds one counted unit. List categories are ignored.
    pub fn put(&mut self, kind: ResourceKind) {
        if let Some(count) = self.counter_mut(kind) {
            *count += 1;
        }
    }
}

/// Initial resource layout of an encounter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResourceConfig {
    pub visible: Resources,
    pub hidden: Resources,
}

/// Visible/hidden split of the map's resources.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourcePool {
    pub visible: Resources,
    pub hidden: Resources,
}

impl ResourcePool {
    pub fn new(config: &ResourceConfig) -> Self {
        Self {
            visible: config.visible.clone(),
            hidden: config.hidden.clone(),
        }
    }

    pub fn hidden_tiles(&self) -> u32 {
        self.hidden.tiles()
    }

    /// Reveals one hidden tile, chosen uniformly among hidden units so that
    /// each category is weighted by how many units it still has.
    ///
    /// Returns `None` once nothing is hidden.
    pub fn uncover(&mut self, rng: &mut dyn RandomSource) -> Option<ResourceKind> {
        use strum::IntoEnumIterator;

        let total = self.hidden.tiles();
        if total == 0 {
            return None;
        }
        let mut roll = rng.below(total);
        for kind in ResourceKind::iter() {
            let count = self.hidden.count(kind);
            if roll >= count {
                roll -= count;
                continue;
            }
            let index = roll as usize;
            match kind {
                ResourceKind::Shop => {
                    let item = self.hidden.shops.remove(index);
                    self.visible.shops.push(item);
                }
                ResourceKind::Spell => {
                    let spell = self.hidden.spells.remove(index);
                    self.visible.spells.push(spell);
                }
                ResourceKind::Altar => {
                    let god = self.hidden.altars.remove(index);
                    self.visible.altars.push(god);
                }
                _ => {
                    self.hidden.take(kind);
                    self.visible.put(kind);
                }
            }
            return Some(kind);
        }
        debug_assert!(false, "weighted roll fell outside hidden resources");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn uncover_moves_exactly_one_unit() {
        let mut pool = ResourcePool::new(&ResourceConfig {
            visible: Resources::default(),
            hidden: Resources {
                walls: 2,
                shops: vec![Item::FineSword],
                ..Resources::default()
            },
        });
        let mut rng = PcgRng::new(3);
        let kind = pool.uncover(&mut rng);
        assert!(kind.is_some());
        assert_eq!(pool.hidden_tiles(), 2);
        assert_eq!(pool.visible.tiles(), 1);
    }

    #[test]
    fn uncover_on_empty_pool_is_none() {
        let mut pool = ResourcePool::default();
        let mut rng = PcgRng::new(0);
        assert_eq!(pool.uncover(&mut rng), None);
    }
}
