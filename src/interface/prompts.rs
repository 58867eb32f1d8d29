use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{BarError, Result};
use crate::menu::MenuCatalog;

/// Prompt for the shelf size when none was given on the command line.
pub fn prompt_budget(selectable: usize) -> Result<usize> {
    let suggested = selectable.min(10);
    let input: String = Input::new()
        .with_prompt("How many ingredients can you stock?")
        .default(suggested.to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| BarError::InvalidInput("Invalid number".to_string()))
}

/// Resolve a requested category against the menu, with fuzzy fallback.
///
/// Exact case-insensitive matches win. Otherwise close names are offered
/// for confirmation, so `--category alcholic` still lands on "Alcoholic".
pub fn resolve_category(catalog: &MenuCatalog, requested: &str) -> Result<String> {
    let known: Vec<String> = catalog.categories().into_keys().collect();

    if let Some(exact) = known
        .iter()
        .find(|c| c.eq_ignore_ascii_case(requested))
    {
        return Ok(exact.clone());
    }

    let mut candidates: Vec<(&String, f64)> = known
        .iter()
        .map(|c| (c, jaro_winkler(&c.to_lowercase(), &requested.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Err(BarError::UnknownCategory(requested.to_string()));
    }

    if candidates.len() == 1 {
        let category = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", category))
            .default(true)
            .interact()?;

        if confirm {
            return Ok(category.clone());
        }
        return Err(BarError::UnknownCategory(requested.to_string()));
    }

    // Multiple near-misses - let the user pick
    let options: Vec<String> = candidates.iter().take(5).map(|(c, _)| (*c).clone()).collect();
    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which category did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(options[selection].clone())
    } else {
        Err(BarError::UnknownCategory(requested.to_string()))
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
