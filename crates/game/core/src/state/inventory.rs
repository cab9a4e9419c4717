//! Bounded item and spell containers carried by the hero.

use arrayvec::ArrayVec;

use crate::action::{Item, Spell};
use crate::config::GameConfig;

/// Item slots. Duplicates are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: ArrayVec<Item, { GameConfig::MAX_INVENTORY_SLOTS }>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn contains(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    /// Stores an item, handing it back if every slot is taken.
    pub fn add(&mut self, item: Item) -> Result<(), Item> {
        self.items.try_push(item).map_err(|err| err.element())
    }

    /// Removes one copy of `item`. Returns false if none was held.
    pub fn remove(&mut self, item: Item) -> bool {
        match self.items.iter().position(|held| *held == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Learned spells, limited by the class's slot count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellBook {
    spells: ArrayVec<Spell, { GameConfig::MAX_SPELL_SLOTS }>,
    slots: u8,
}

impl SpellBook {
    pub fn with_slots(slots: u8) -> Self {
        Self {
            spells: ArrayVec::new(),
            slots: slots.min(GameConfig::MAX_SPELL_SLOTS as u8),
        }
    }

    pub fn spells(&self) -> &[Spell] {
        &self.spells
    }

    pub fn slots(&self) -> u8 {
        self.slots
    }

    pub fn knows(&self, spell: Spell) -> bool {
        self.spells.contains(&spell)
    }

    pub fn is_full(&self) -> bool {
        self.spells.len() >= self.slots as usize
    }

    /// Learns a spell into a free slot. Already-known spells and a full book
    /// are rejected.
    pub fn learn(&mut self, spell: Spell) -> bool {
        if self.knows(spell) || self.is_full() {
            return false;
        }
        self.spells.try_push(spell).is_ok()
    }

    pub fn forget(&mut self, spell: Spell) -> bool {
        match self.spells.iter().position(|known| *known == spell) {
            Some(index) => {
                self.spells.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_rejects_seventh_item() {
        let mut inventory = Inventory::new();
        for _ in 0..GameConfig::MAX_INVENTORY_SLOTS {
            assert!(inventory.add(Item::HealthPotion).is_ok());
        }
        assert_eq!(inventory.add(Item::ManaPotion), Err(Item::ManaPotion));
        assert!(inventory.remove(Item::HealthPotion));
        assert!(!inventory.is_full());
    }

    #[test]
    fn spell_book_respects_class_slots() {
        let mut book = SpellBook::with_slots(2);
        assert!(book.learn(Spell::Burndayraz));
        assert!(!book.learn(Spell::Burndayraz));
        assert!(book.learn(Spell::Halpmeh));
        assert!(!book.learn(Spell::Lemmisi));
        assert!(book.forget(Spell::Burndayraz));
        assert!(book.learn(Spell::Lemmisi));
    }
}
