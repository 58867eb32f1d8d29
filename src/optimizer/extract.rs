use std::collections::{BTreeMap, BTreeSet};

use crate::error::Result;
use crate::menu::MenuCatalog;
use crate::models::StockReport;
use crate::optimizer::relation::Relation;
use crate::optimizer::search::{find_best_shelf, SearchLimits, Selection};

/// Cocktails fully mixable from the shelf, in lexicographic order.
///
/// A cocktail with an empty requirement set is mixable from any shelf.
pub fn covered_cocktails(relation: &Relation, shelf: &[String]) -> Vec<String> {
    let on_shelf: BTreeSet<&str> = shelf.iter().map(String::as_str).collect();

    relation
        .requirements()
        .iter()
        .filter(|(_, required)| required.iter().all(|ing| on_shelf.contains(ing.as_str())))
        .map(|(cocktail, _)| cocktail.clone())
        .collect()
}

/// Per-ingredient usage across the covered cocktails only.
///
/// Every shelf ingredient gets an entry, so one that no covered cocktail
/// calls for shows up with usage 0.
pub fn ingredient_usage(
    relation: &Relation,
    shelf: &[String],
    covered: &[String],
) -> BTreeMap<String, usize> {
    let mut usage: BTreeMap<String, usize> =
        shelf.iter().map(|ing| (ing.clone(), 0)).collect();

    for cocktail in covered {
        let Some(required) = relation.requirements_of(cocktail) else {
            continue;
        };
        for ingredient in required {
            if let Some(count) = usage.get_mut(ingredient) {
                *count += 1;
            }
        }
    }

    usage
}

/// Ingredients the covered cocktails still call for beyond the restricted
/// shelf: the union, over covered cocktails, of full-requirement
/// ingredients failing the predicate. Deduplicated and sorted.
pub fn rest_of_ingredients<F>(unfiltered: &Relation, covered: &[String], predicate: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut rest = BTreeSet::new();

    for cocktail in covered {
        let Some(required) = unfiltered.requirements_of(cocktail) else {
            continue;
        };
        for ingredient in required {
            if !predicate(ingredient) {
                rest.insert(ingredient.clone());
            }
        }
    }

    rest.into_iter().collect()
}

fn assemble_report(
    selection: Selection,
    covered: Vec<String>,
    usage: BTreeMap<String, usize>,
    rest: Option<Vec<String>>,
) -> StockReport {
    let mut selected = selection.ingredients;
    selected.sort_by(|a, b| usage[b].cmp(&usage[a]).then_with(|| a.cmp(b)));

    StockReport {
        selected,
        covered,
        usage,
        rest_of_ingredients: rest,
        certified_optimal: selection.certified_optimal,
        nodes_explored: selection.nodes_explored,
    }
}

/// Plan the shelf: the one call the CLI marshals.
///
/// Builds the relation from the menu, optionally restricts it to one
/// ingredient category, runs the exact search, and extracts the report.
/// For a restricted plan the coverage and usage come from the restricted
/// relation, while the rest-of-ingredients list re-queries the unfiltered
/// one, which therefore stays alive through extraction.
pub fn plan_shelf(
    catalog: &MenuCatalog,
    budget: usize,
    category: Option<&str>,
    limits: &SearchLimits,
) -> Result<StockReport> {
    let relation = Relation::build(catalog.entries());

    match category {
        Some(cat) => {
            let qualifies = |ing: &str| catalog.category_of(ing).eq_ignore_ascii_case(cat);
            let restricted = relation.restrict(qualifies);

            let selection = find_best_shelf(&restricted, budget, limits)?;
            let covered = covered_cocktails(&restricted, &selection.ingredients);
            let usage = ingredient_usage(&restricted, &selection.ingredients, &covered);
            let rest = rest_of_ingredients(&relation, &covered, qualifies);

            Ok(assemble_report(selection, covered, usage, Some(rest)))
        }
        None => {
            let selection = find_best_shelf(&relation, budget, limits)?;
            let covered = covered_cocktails(&relation, &selection.ingredients);
            let usage = ingredient_usage(&relation, &selection.ingredients, &covered);

            Ok(assemble_report(selection, covered, usage, None))
        }
    }
}
