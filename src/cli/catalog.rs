use std::path::Path;

use tabled::Table;

use crate::{
    catalog, error,
    types::{WorkEntry, WorkTableRow},
    warning,
};

/// Shows the deduplicated works catalog as a table.
///
/// Reads the built-in works table or, with `--input`, any catalog-format
/// file, deduplicates it, and optionally filters rows by a case-insensitive
/// substring match on composer or work title.
pub async fn catalog(input: Option<String>, search: Option<String>) {
    let mut entries: Vec<WorkEntry> = match input {
        Some(path) => match catalog::load_catalog(Path::new(&path)).await {
            Ok(entries) => entries,
            Err(e) => error!("Failed to load works resource {}: {:?}", path, e),
        },
        None => match catalog::default_works() {
            Ok(entries) => entries,
            Err(e) => error!("Built-in works table is invalid: {:?}", e),
        },
    };

    catalog::dedup_works(&mut entries);

    if let Some(term) = search {
        let term = term.to_lowercase();
        entries.retain(|entry| {
            entry.composer.to_lowercase().contains(&term)
                || entry.work.to_lowercase().contains(&term)
        });
    }

    if entries.is_empty() {
        warning!("No works match.");
        return;
    }

    let rows: Vec<WorkTableRow> = entries
        .into_iter()
        .map(|entry| WorkTableRow {
            composer: entry.composer,
            work: entry.work,
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}
