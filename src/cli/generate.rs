use std::path::Path;

use tabled::Table;

use crate::{
    catalog, emit, error, info, success,
    types::{WorkEntry, WorkTableRow},
};

/// Builds the catalog and emits all three artifacts into `output_dir`.
///
/// Stage order: load the works resource, deduplicate, write `works.csv`,
/// then emit `create_playlist.sh` and `README.txt` verbatim. A preview of
/// the first catalog rows is printed at the end. Any filesystem failure is
/// fatal; there is no partial-success handling to get wrong.
pub async fn generate(input: Option<String>, output_dir: String) {
    let dir = Path::new(&output_dir);

    let mut entries = load_works(input).await;
    let raw_count = entries.len();
    catalog::dedup_works(&mut entries);
    info!(
        "Catalog holds {} works ({} raw rows)",
        entries.len(),
        raw_count
    );

    let catalog_path = dir.join("works.csv");
    if let Err(e) = catalog::write_catalog(&catalog_path, &entries).await {
        error!(
            "Failed to write catalog to {}: {:?}",
            catalog_path.display(),
            e
        );
    }
    success!("Catalog written to {}", catalog_path.display());

    match emit::emit_script(dir).await {
        Ok(path) => success!("Runner script written to {}", path.display()),
        Err(e) => error!("Failed to write runner script: {}", e),
    }

    match emit::emit_guide(dir).await {
        Ok(path) => success!("Operator guide written to {}", path.display()),
        Err(e) => error!("Failed to write operator guide: {}", e),
    }

    let preview: Vec<WorkTableRow> = entries
        .iter()
        .take(12)
        .map(|entry| WorkTableRow {
            composer: entry.composer.clone(),
            work: entry.work.clone(),
        })
        .collect();
    println!("{}", Table::new(preview));
}

async fn load_works(input: Option<String>) -> Vec<WorkEntry> {
    match input {
        Some(path) => match catalog::load_catalog(Path::new(&path)).await {
            Ok(entries) => entries,
            Err(e) => error!("Failed to load works resource {}: {:?}", path, e),
        },
        None => match catalog::default_works() {
            Ok(entries) => entries,
            Err(e) => error!("Built-in works table is invalid: {:?}", e),
        },
    }
}
