//! Price and conversion catalogue loader.
//!
//! A catalogue only lists the entries it changes; everything else falls back
//! to [`StandardTables`].

use std::collections::BTreeMap;
use std::path::Path;

use game_core::{Item, ItemDefinition, Spell, TablesOracle};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::tables::StandardTables;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItemEntry {
    pub item: Item,
    pub price: u32,
    pub conversion_points: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpellEntry {
    pub spell: Spell,
    pub conversion_points: u32,
}

/// Catalogue file layout: `[[item]]` and `[[spell]]` arrays.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, rename = "item")]
    pub items: Vec<ItemEntry>,
    #[serde(default, rename = "spell")]
    pub spells: Vec<SpellEntry>,
}

/// [`TablesOracle`] backed by a loaded catalogue.
#[derive(Clone, Debug, Default)]
pub struct CatalogTables {
    items: BTreeMap<Item, ItemDefinition>,
    spells: BTreeMap<Spell, u32>,
}

impl CatalogTables {
    pub fn from_catalog(catalog: Catalog) -> LoadResult<Self> {
        let mut tables = Self::default();
        for entry in catalog.items {
            let definition = ItemDefinition::new(entry.price, entry.conversion_points);
            if tables.items.insert(entry.item, definition).is_some() {
                anyhow::bail!("Duplicate catalogue entry for item {}", entry.item);
            }
        }
        for entry in catalog.spells {
            if tables
                .spells
                .insert(entry.spell, entry.conversion_points)
                .is_some()
            {
                anyhow::bail!("Duplicate catalogue entry for spell {}", entry.spell);
            }
        }
        Ok(tables)
    }

    pub fn overrides(&self) -> usize {
        self.items.len() + self.spells.len()
    }
}

impl TablesOracle for CatalogTables {
    fn item(&self, item: Item) -> ItemDefinition {
        self.items
            .get(&item)
            .copied()
            .unwrap_or_else(|| StandardTables::item_definition(item))
    }

    fn spell_conversion_points(&self, spell: Spell) -> u32 {
        self.spells
            .get(&spell)
            .copied()
            .unwrap_or_else(|| StandardTables::spell_points(spell))
    }
}

/// Loader for catalogue TOML files.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load(path: &Path) -> LoadResult<CatalogTables> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CatalogTables> {
        let catalog: Catalog = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalogue TOML: {}", e))?;
        let tables = CatalogTables::from_catalog(catalog)?;
        tracing::debug!(overrides = tables.overrides(), "catalogue loaded");
        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_entries_override_and_rest_fall_back() {
        let tables = CatalogLoader::parse(
            r#"
            [[item]]
            item = "FineSword"
            price = 1
            conversion_points = 99

            [[spell]]
            spell = "Burndayraz"
            conversion_points = 7
            "#,
        )
        .unwrap();

        assert_eq!(tables.item(Item::FineSword), ItemDefinition::new(1, 99));
        assert_eq!(
            tables.item(Item::TrollHeart),
            StandardTables::item_definition(Item::TrollHeart)
        );
        assert_eq!(tables.spell_conversion_points(Spell::Burndayraz), 7);
        assert_eq!(tables.spell_conversion_points(Spell::Imawal), 50);
    }

    #[test]
    fn duplicate_entries_are_rejected() {
        let result = CatalogLoader::parse(
            r#"
            [[spell]]
            spell = "Lemmisi"
            conversion_points = 1

            [[spell]]
            spell = "Lemmisi"
            conversion_points = 2
            "#,
        );
        assert!(result.is_err());
    }
}
