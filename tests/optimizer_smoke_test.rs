use bar_stock_planner_rs::models::MenuEntry;
use bar_stock_planner_rs::optimizer::{covered_cocktails, find_best_shelf, Relation, SearchLimits};

fn entry(cocktail: &str, ingredient: &str) -> MenuEntry {
    MenuEntry::new(cocktail, ingredient, None)
}

/// A 10-ingredient, 12-cocktail menu with overlapping requirements.
fn bar_menu() -> Relation {
    Relation::build(&[
        entry("Americano", "Campari"),
        entry("Americano", "Sweet Vermouth"),
        entry("Americano", "Soda"),
        entry("Boulevardier", "Bourbon"),
        entry("Boulevardier", "Campari"),
        entry("Boulevardier", "Sweet Vermouth"),
        entry("Daiquiri", "Rum"),
        entry("Daiquiri", "Lime Juice"),
        entry("Daiquiri", "Sugar Syrup"),
        entry("Gimlet", "Gin"),
        entry("Gimlet", "Lime Juice"),
        entry("Gin Tonic", "Gin"),
        entry("Gin Tonic", "Tonic"),
        entry("Manhattan", "Bourbon"),
        entry("Manhattan", "Sweet Vermouth"),
        entry("Martini", "Gin"),
        entry("Martini", "Dry Vermouth"),
        entry("Negroni", "Gin"),
        entry("Negroni", "Campari"),
        entry("Negroni", "Sweet Vermouth"),
        entry("Old Fashioned", "Bourbon"),
        entry("Old Fashioned", "Sugar Syrup"),
        entry("Rum Sour", "Rum"),
        entry("Rum Sour", "Lime Juice"),
        entry("Rum Sour", "Sugar Syrup"),
        entry("Soda Lime", "Soda"),
        entry("Soda Lime", "Lime Juice"),
        entry("Whiskey Highball", "Bourbon"),
        entry("Whiskey Highball", "Soda"),
    ])
}

fn combinations(items: &[String], k: usize) -> Vec<Vec<String>> {
    fn recurse(items: &[String], k: usize, start: usize, current: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..items.len() {
            current.push(items[i].clone());
            recurse(items, k, i + 1, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    recurse(items, k, 0, &mut Vec::new(), &mut out);
    out
}

/// Exhaustive optimum: try every exactly-k shelf.
fn brute_force_optimum(relation: &Relation, k: usize) -> usize {
    let items: Vec<String> = relation.universe().iter().cloned().collect();
    combinations(&items, k)
        .iter()
        .map(|shelf| covered_cocktails(relation, shelf).len())
        .max()
        .expect("at least one combination exists when k <= |universe|")
}

#[test]
fn test_search_matches_brute_force_across_budgets() {
    let relation = bar_menu();
    let limits = SearchLimits::default();

    for budget in 0..=relation.ingredient_count() {
        let selection = find_best_shelf(&relation, budget, &limits).unwrap();
        let optimum = brute_force_optimum(&relation, budget);

        assert!(selection.certified_optimal, "budget {} not certified", budget);
        assert_eq!(
            selection.covered_count, optimum,
            "budget {}: search found {}, brute force found {}",
            budget, selection.covered_count, optimum
        );

        // The reported count must match the shelf actually returned.
        let recount = covered_cocktails(&relation, &selection.ingredients).len();
        assert_eq!(selection.covered_count, recount);
    }
}

#[test]
fn test_coverage_is_monotone_in_budget() {
    let relation = bar_menu();
    let limits = SearchLimits::default();

    let mut previous = 0;
    for budget in 0..=relation.ingredient_count() {
        let selection = find_best_shelf(&relation, budget, &limits).unwrap();
        assert!(selection.covered_count >= previous);
        previous = selection.covered_count;
    }
}

#[test]
fn test_full_universe_mixes_the_whole_menu() {
    let relation = bar_menu();
    let budget = relation.ingredient_count();
    let selection = find_best_shelf(&relation, budget, &SearchLimits::default()).unwrap();

    assert_eq!(selection.covered_count, relation.cocktail_count());
}

#[test]
fn test_zero_budget_mixes_nothing_here() {
    let relation = bar_menu();
    let selection = find_best_shelf(&relation, 0, &SearchLimits::default()).unwrap();

    // Every cocktail on this menu needs at least one ingredient.
    assert_eq!(selection.covered_count, 0);
}

#[test]
fn test_triangle_scenario_budget_two() {
    let relation = Relation::build(&[
        entry("R1", "A"),
        entry("R1", "B"),
        entry("R2", "A"),
        entry("R2", "C"),
        entry("R3", "B"),
        entry("R3", "C"),
        entry("R4", "A"),
    ]);

    let selection = find_best_shelf(&relation, 2, &SearchLimits::default()).unwrap();
    assert_eq!(selection.covered_count, 2);

    let selection = find_best_shelf(&relation, 1, &SearchLimits::default()).unwrap();
    assert_eq!(selection.covered_count, 1);
}

#[test]
fn test_node_ceiling_degrades_gracefully() {
    let relation = bar_menu();
    let limits = SearchLimits {
        max_nodes: 3,
        time_budget: None,
    };

    let selection = find_best_shelf(&relation, 4, &limits).unwrap();

    assert!(!selection.certified_optimal);
    assert_eq!(selection.ingredients.len(), 4);
    // Best-found is still a real shelf with a consistent count.
    let recount = covered_cocktails(&relation, &selection.ingredients).len();
    assert_eq!(selection.covered_count, recount);
}

#[test]
fn test_time_ceiling_zero_degrades_gracefully() {
    let relation = bar_menu();
    let limits = SearchLimits {
        max_nodes: u64::MAX,
        time_budget: Some(std::time::Duration::from_millis(0)),
    };

    let selection = find_best_shelf(&relation, 5, &limits).unwrap();

    // A zero time budget may or may not trip before the tiny search ends,
    // but the selection must stay feasible either way.
    assert_eq!(selection.ingredients.len(), 5);
}
