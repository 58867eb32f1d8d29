use std::collections::{BTreeMap, BTreeSet};

use crate::models::MenuEntry;

/// The cocktail→required-ingredients mapping plus the ingredient universe.
///
/// Built once from raw menu records and never mutated afterwards. BTree
/// collections keep iteration order deterministic for a given menu.
#[derive(Debug, Clone, Default)]
pub struct Relation {
    universe: BTreeSet<String>,
    requirements: BTreeMap<String, BTreeSet<String>>,
}

impl Relation {
    /// Normalize raw (cocktail, ingredient) records into a relation.
    ///
    /// Repeated pairs collapse under set semantics. A cocktail only enters
    /// the relation through its pairs, so one with no ingredients on record
    /// simply does not appear.
    pub fn build(entries: &[MenuEntry]) -> Self {
        let mut universe = BTreeSet::new();
        let mut requirements: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for entry in entries {
            if !entry.is_valid() {
                continue;
            }
            universe.insert(entry.ingredient.clone());
            requirements
                .entry(entry.cocktail.clone())
                .or_default()
                .insert(entry.ingredient.clone());
        }

        Self {
            universe,
            requirements,
        }
    }

    /// Build a relation directly from a requirements mapping.
    ///
    /// The universe is the union of all requirement sets. Unlike `build`,
    /// this admits a cocktail with an empty requirement set, which is
    /// mixable from any shelf including the empty one.
    pub fn from_requirements(requirements: BTreeMap<String, BTreeSet<String>>) -> Self {
        let universe = requirements.values().flatten().cloned().collect();
        Self {
            universe,
            requirements,
        }
    }

    /// Restrict the relation to ingredients accepted by `predicate`.
    ///
    /// Each requirement set is intersected with the filtered universe. A
    /// cocktail left with no qualifying ingredients is dropped entirely:
    /// it is vacuously coverable and carries no signal for the restricted
    /// search. The receiver is left untouched so the unfiltered relation
    /// stays available for rest-of-ingredients extraction.
    pub fn restrict<F>(&self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        let universe: BTreeSet<String> = self
            .universe
            .iter()
            .filter(|ing| predicate(ing))
            .cloned()
            .collect();

        let requirements: BTreeMap<String, BTreeSet<String>> = self
            .requirements
            .iter()
            .filter_map(|(cocktail, required)| {
                let kept: BTreeSet<String> = required
                    .iter()
                    .filter(|ing| universe.contains(*ing))
                    .cloned()
                    .collect();
                if kept.is_empty() {
                    None
                } else {
                    Some((cocktail.clone(), kept))
                }
            })
            .collect();

        Self {
            universe,
            requirements,
        }
    }

    /// All ingredients required by at least one cocktail.
    pub fn universe(&self) -> &BTreeSet<String> {
        &self.universe
    }

    /// Cocktail → required-ingredient-set mapping.
    pub fn requirements(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.requirements
    }

    /// Required ingredients of one cocktail, if it is on the menu.
    pub fn requirements_of(&self, cocktail: &str) -> Option<&BTreeSet<String>> {
        self.requirements.get(cocktail)
    }

    /// Number of cocktails in the relation.
    pub fn cocktail_count(&self) -> usize {
        self.requirements.len()
    }

    /// Number of distinct ingredients in the universe.
    pub fn ingredient_count(&self) -> usize {
        self.universe.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universe.is_empty()
    }
}
