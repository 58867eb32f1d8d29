use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::models::{MenuEntry, UNKNOWN_CATEGORY};

/// Holds the deduplicated menu records and the ingredient→category index.
pub struct MenuCatalog {
    entries: Vec<MenuEntry>,
    /// Category per ingredient, keyed by lowercase name.
    categories: HashMap<String, String>,
}

impl MenuCatalog {
    /// Build a catalog from raw records.
    ///
    /// Duplicate (cocktail, ingredient) pairs collapse, last occurrence
    /// wins. The category index also keeps the last category seen for an
    /// ingredient, so one tagged row is enough to classify it everywhere.
    pub fn new(raw: Vec<MenuEntry>) -> Self {
        let mut seen: BTreeMap<(String, String), MenuEntry> = BTreeMap::new();
        let mut categories: HashMap<String, String> = HashMap::new();

        for entry in raw {
            if !entry.is_valid() {
                continue;
            }
            if let Some(category) = &entry.category {
                categories.insert(entry.ingredient_key(), category.clone());
            }
            seen.insert(entry.pair_key(), entry);
        }

        Self {
            entries: seen.into_values().collect(),
            categories,
        }
    }

    /// The deduplicated records.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Category of an ingredient (case-insensitive), "Unknown" if untagged.
    pub fn category_of(&self, ingredient: &str) -> &str {
        self.categories
            .get(&ingredient.to_lowercase())
            .map(String::as_str)
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Categories on the menu with their distinct-ingredient counts.
    pub fn categories(&self) -> BTreeMap<String, usize> {
        let mut ingredients_by_category: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for entry in &self.entries {
            ingredients_by_category
                .entry(self.category_of(&entry.ingredient).to_string())
                .or_default()
                .insert(entry.ingredient_key());
        }

        ingredients_by_category
            .into_iter()
            .map(|(category, ingredients)| (category, ingredients.len()))
            .collect()
    }

    /// Whether any ingredient carries this category (case-insensitive).
    pub fn has_category(&self, name: &str) -> bool {
        self.categories
            .values()
            .any(|c| c.eq_ignore_ascii_case(name))
    }

    /// Number of distinct cocktails on the menu.
    pub fn cocktail_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.cocktail.to_lowercase())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Number of distinct ingredients on the menu.
    pub fn ingredient_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.ingredient_key())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Count of records in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
