//! Accounts command - list registered identifiers.
//!
//! Secrets are never printed.

use crate::cli::output;
use crate::core::config::Settings;
use crate::error::Result;

/// List identifiers in directory order.
pub fn execute(settings: &Settings, json: bool) -> Result<()> {
    let directory = &settings.directory;
    let source = settings
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());

    if json {
        let result = serde_json::json!({
            "source": source,
            "count": directory.len(),
            "accounts": directory.identifiers().collect::<Vec<_>>(),
        });
        output::data(&serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    output::section("Accounts");
    output::kv("source", &source);
    output::blank();

    if directory.is_empty() {
        output::dimmed("no accounts registered");
        return Ok(());
    }

    for id in directory.identifiers() {
        output::list_item(&output::identifier(id));
    }

    let duplicates = directory.duplicates();
    if !duplicates.is_empty() {
        output::blank();
        output::warn(&format!(
            "duplicate identifiers (first entry wins): {}",
            duplicates.join(", ")
        ));
    }

    Ok(())
}
