use std::collections::BTreeMap;

use crate::models::StockReport;

/// Display a shelf plan in a formatted listing.
pub fn display_stock_report(report: &StockReport) {
    if report.selected.is_empty() && report.covered.is_empty() {
        println!("Empty shelf: nothing to mix.");
        return;
    }

    println!();
    println!("=== Shelf Plan ===");
    println!();
    println!(
        "With {} ingredients you can mix {} cocktails.",
        report.selected.len(),
        report.covered_count()
    );

    if !report.certified_optimal {
        println!(
            "(search stopped at its resource ceiling after {} nodes; this is the best shelf found, not a certified optimum)",
            report.nodes_explored
        );
    }

    println!();
    println!("Selected ingredients and their usage:");

    let max_name_len = report
        .selected
        .iter()
        .map(|ing| ing.len())
        .max()
        .unwrap_or(10);

    for (i, ingredient) in report.selected.iter().enumerate() {
        let uses = report.usage_of(ingredient);
        println!(
            "{:>3}. {:<width$} (used in {} cocktails)",
            i + 1,
            ingredient,
            uses,
            width = max_name_len
        );
    }

    if let Some(rest) = &report.rest_of_ingredients {
        if !rest.is_empty() {
            println!();
            println!("Rest of needed ingredients:");
            for ingredient in rest {
                println!("  {}", ingredient);
            }
        }
    }

    println!();
    println!("Cocktails you can mix:");
    for cocktail in &report.covered {
        println!("- {}", cocktail);
    }
    println!();
}

/// Display the menu's categories with their ingredient counts.
pub fn display_categories(categories: &BTreeMap<String, usize>) {
    if categories.is_empty() {
        println!("Categories: (none)");
        return;
    }

    println!();
    println!("=== Categories ({}) ===", categories.len());
    println!();

    let max_name_len = categories.keys().map(|c| c.len()).max().unwrap_or(10);

    for (category, count) in categories {
        println!(
            "  {:<width$} {} ingredients",
            category,
            count,
            width = max_name_len
        );
    }

    println!();
}
