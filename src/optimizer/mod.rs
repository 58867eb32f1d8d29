pub mod extract;
pub mod relation;
pub mod search;

pub use extract::{covered_cocktails, ingredient_usage, plan_shelf, rest_of_ingredients};
pub use relation::Relation;
pub use search::{find_best_shelf, SearchLimits, Selection};
