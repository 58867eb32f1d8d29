use std::fs;
use std::path::Path;

use crate::error::{BarError, Result};
use crate::models::MenuEntry;

/// Load menu records from a JSON or CSV file, dispatching on extension.
///
/// JSON is an array of records; CSV is headered with Cocktail, Ingredient
/// and an optional Category column.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<Vec<MenuEntry>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("json") => load_menu_json(path),
        Some("csv") => load_menu_csv(path),
        _ => Err(BarError::InvalidInput(format!(
            "Unsupported menu format: {}",
            path.display()
        ))),
    }
}

fn load_menu_json(path: &Path) -> Result<Vec<MenuEntry>> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<MenuEntry> = serde_json::from_str(&content)?;
    Ok(entries)
}

fn load_menu_csv(path: &Path) -> Result<Vec<MenuEntry>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut entries = Vec::new();
    for record in reader.deserialize() {
        let entry: MenuEntry = record?;
        entries.push(entry);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_with_suffix(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json_menu() {
        let json = r#"[
            {"Cocktail": "Negroni", "Ingredient": "Gin", "Category": "Alcoholic"},
            {"Cocktail": "Negroni", "Ingredient": "Campari"}
        ]"#;
        let file = temp_with_suffix(".json", json);

        let entries = load_menu(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].cocktail, "Negroni");
        assert_eq!(entries[0].category.as_deref(), Some("Alcoholic"));
        assert!(entries[1].category.is_none());
    }

    #[test]
    fn test_load_csv_menu() {
        let csv = "Cocktail,Ingredient,Category\n\
                   Martini,Gin,Alcoholic\n\
                   Martini,Dry Vermouth,Alcoholic\n";
        let file = temp_with_suffix(".csv", csv);

        let entries = load_menu(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].ingredient, "Dry Vermouth");
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let file = temp_with_suffix(".txt", "not a menu");

        let result = load_menu(file.path());
        assert!(matches!(result, Err(BarError::InvalidInput(_))));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let file = temp_with_suffix(".json", "{ not json ]");

        assert!(matches!(load_menu(file.path()), Err(BarError::Json(_))));
    }
}
