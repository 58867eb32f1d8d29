use clap::Parser;
use std::path::Path;
use std::time::Duration;

use bar_stock_planner_rs::cli::{Cli, Command};
use bar_stock_planner_rs::error::Result;
use bar_stock_planner_rs::interface::{
    display_categories, display_stock_report, prompt_budget, resolve_category,
};
use bar_stock_planner_rs::menu::{load_menu, MenuCatalog};
use bar_stock_planner_rs::optimizer::{plan_shelf, SearchLimits};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            budget,
            category,
            max_nodes,
            timeout_ms,
        } => cmd_plan(&cli.file, budget, category, max_nodes, timeout_ms),
        Command::Categories => cmd_categories(&cli.file),
    }
}

/// Plan the shelf from the menu and the user's budget.
fn cmd_plan(
    file_path: &str,
    budget: Option<usize>,
    category: Option<String>,
    max_nodes: u64,
    timeout_ms: Option<u64>,
) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Menu file not found: {}", file_path);
        eprintln!("Point --file at a JSON or CSV menu.");
        return Ok(());
    }

    let entries = load_menu(path)?;
    let catalog = MenuCatalog::new(entries);

    println!(
        "Loaded {} menu records ({} cocktails, {} ingredients)",
        catalog.len(),
        catalog.cocktail_count(),
        catalog.ingredient_count()
    );

    if catalog.is_empty() {
        println!("The menu is empty. Nothing to plan.");
        return Ok(());
    }

    // Resolve the category up front so the prompt can show the right pool size.
    let category = match category {
        Some(requested) => Some(resolve_category(&catalog, &requested)?),
        None => None,
    };

    let selectable = match &category {
        Some(cat) => catalog.categories().get(cat.as_str()).copied().unwrap_or(0),
        None => catalog.ingredient_count(),
    };

    let budget = match budget {
        Some(b) => b,
        None => prompt_budget(selectable)?,
    };

    let limits = SearchLimits {
        max_nodes,
        time_budget: timeout_ms.map(Duration::from_millis),
    };

    println!();
    if let Some(cat) = &category {
        println!(
            "Planning a shelf of {} ingredients from the {} selectable in '{}'...",
            budget, selectable, cat
        );
    } else {
        println!("Planning a shelf of {} ingredients...", budget);
    }

    let report = plan_shelf(&catalog, budget, category.as_deref(), &limits)?;
    display_stock_report(&report);

    Ok(())
}

/// List the menu's ingredient categories.
fn cmd_categories(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Menu file not found: {}", file_path);
        return Ok(());
    }

    let entries = load_menu(path)?;
    let catalog = MenuCatalog::new(entries);

    display_categories(&catalog.categories());

    Ok(())
}
