use std::collections::BTreeMap;

/// Final output of one planning call.
///
/// Immutable once built; the renderer only reads it.
#[derive(Debug, Clone)]
pub struct StockReport {
    /// Shelf ingredients, most-used first (ties broken by name).
    pub selected: Vec<String>,

    /// Cocktails fully mixable from the shelf, in lexicographic order.
    pub covered: Vec<String>,

    /// For each shelf ingredient, the number of covered cocktails using it.
    pub usage: BTreeMap<String, usize>,

    /// Restricted plans only: ingredients outside the chosen category that
    /// the covered cocktails still call for.
    pub rest_of_ingredients: Option<Vec<String>>,

    /// False when the search hit its resource ceiling before proving optimality.
    pub certified_optimal: bool,

    /// Branch nodes explored by the search.
    pub nodes_explored: u64,
}

impl StockReport {
    /// Number of cocktails mixable from the shelf.
    pub fn covered_count(&self) -> usize {
        self.covered.len()
    }

    /// Usage count for one shelf ingredient (0 if absent).
    pub fn usage_of(&self, ingredient: &str) -> usize {
        self.usage.get(ingredient).copied().unwrap_or(0)
    }
}
