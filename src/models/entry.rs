use serde::{Deserialize, Serialize};

/// Category reported for ingredients with no category on record.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// One raw menu record: a cocktail requiring one ingredient.
///
/// The category is the only ingredient attribute the planner looks at,
/// and only when a restricted plan is requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuEntry {
    #[serde(rename = "Cocktail")]
    pub cocktail: String,

    #[serde(rename = "Ingredient")]
    pub ingredient: String,

    #[serde(rename = "Category", default)]
    pub category: Option<String>,
}

impl MenuEntry {
    pub fn new(cocktail: &str, ingredient: &str, category: Option<&str>) -> Self {
        Self {
            cocktail: cocktail.to_string(),
            ingredient: ingredient.to_string(),
            category: category.map(str::to_string),
        }
    }

    /// Category of this entry's ingredient, falling back to "Unknown".
    pub fn category_or_unknown(&self) -> &str {
        self.category.as_deref().unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Canonical key for ingredient lookups (lowercase name).
    pub fn ingredient_key(&self) -> String {
        self.ingredient.to_lowercase()
    }

    /// Canonical key for the (cocktail, ingredient) pair, used for dedup.
    pub fn pair_key(&self) -> (String, String) {
        (self.cocktail.to_lowercase(), self.ingredient_key())
    }

    /// Basic validation: both identifiers non-empty.
    pub fn is_valid(&self) -> bool {
        !self.cocktail.trim().is_empty() && !self.ingredient.trim().is_empty()
    }
}
