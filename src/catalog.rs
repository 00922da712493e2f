//! Works catalog: parsing, deduplication, and persistence.
//!
//! The catalog is a two-column delimited table with a `composer,work` header.
//! Work titles routinely contain commas and double quotes, so fields follow
//! the usual quoting convention: a field containing the delimiter or a quote
//! is wrapped in double quotes, with embedded quotes doubled. Rendering and
//! parsing round-trip.
//!
//! A default works table ships embedded in the binary; any other file in the
//! same format can be loaded in its place.

use std::{collections::HashSet, io::Error, path::Path};

use crate::{types::WorkEntry, utils};

/// The built-in works table, as curated: raw rows, duplicates intact.
/// `dedup_works` reduces it to the catalog that is actually written.
pub const DEFAULT_WORKS: &str = include_str!("../assets/works.csv");

/// Header row of every catalog file.
pub const CATALOG_HEADER: &str = "composer,work";

#[derive(Debug)]
pub enum CatalogError {
    IoError(Error),
    ParseError(String),
}

impl From<Error> for CatalogError {
    fn from(err: Error) -> Self {
        CatalogError::IoError(err)
    }
}

/// Parses a catalog resource into its ordered entries.
///
/// The first non-empty line must be the `composer,work` header; every
/// following non-empty line must hold exactly two fields. Line numbers in
/// parse errors refer to the resource as given.
pub fn parse_works(input: &str) -> Result<Vec<WorkEntry>, CatalogError> {
    let mut lines = input
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty());

    match lines.next() {
        Some((_, header)) if header.trim() == CATALOG_HEADER => {}
        Some((n, header)) => {
            return Err(CatalogError::ParseError(format!(
                "line {}: expected header '{}', found '{}'",
                n + 1,
                CATALOG_HEADER,
                header
            )));
        }
        None => return Err(CatalogError::ParseError("empty catalog".to_string())),
    }

    let mut entries = Vec::new();
    for (n, line) in lines {
        let fields = split_record(line)
            .map_err(|e| CatalogError::ParseError(format!("line {}: {}", n + 1, e)))?;
        if fields.len() != 2 {
            return Err(CatalogError::ParseError(format!(
                "line {}: expected 2 fields, found {}",
                n + 1,
                fields.len()
            )));
        }
        let mut fields = fields.into_iter();
        entries.push(WorkEntry {
            composer: fields.next().unwrap_or_default(),
            work: fields.next().unwrap_or_default(),
        });
    }

    Ok(entries)
}

/// Renders entries back into catalog text, header first.
pub fn render_works(entries: &[WorkEntry]) -> String {
    let mut out = String::from(CATALOG_HEADER);
    out.push('\n');
    for entry in entries {
        out.push_str(&escape_field(&entry.composer));
        out.push(',');
        out.push_str(&escape_field(&entry.work));
        out.push('\n');
    }
    out
}

/// Removes duplicate works, keeping the first occurrence of each pair.
///
/// Identity is the normalized (composer, work) tuple, so case, quote style,
/// and whitespace variants of the same pair collapse into one entry. The
/// surviving entries keep their original spelling and order.
pub fn dedup_works(entries: &mut Vec<WorkEntry>) {
    let mut seen = HashSet::new();
    entries.retain(|entry| {
        seen.insert((
            utils::normalize(&entry.composer),
            utils::normalize(&entry.work),
        ))
    });
}

/// Loads the embedded default works table.
pub fn default_works() -> Result<Vec<WorkEntry>, CatalogError> {
    parse_works(DEFAULT_WORKS)
}

/// Reads a catalog file from disk.
pub async fn load_catalog(path: &Path) -> Result<Vec<WorkEntry>, CatalogError> {
    let content = async_fs::read_to_string(path).await?;
    parse_works(&content)
}

/// Writes entries to a catalog file, creating parent directories as needed.
pub async fn write_catalog(path: &Path, entries: &[WorkEntry]) -> Result<(), CatalogError> {
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }
    async_fs::write(path, render_works(entries)).await?;
    Ok(())
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn split_record(line: &str) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();
    let mut quoted = false;

    while let Some(c) = chars.next() {
        if quoted {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    current.push('"');
                }
                '"' => quoted = false,
                _ => current.push(c),
            }
        } else {
            match c {
                '"' if current.is_empty() => quoted = true,
                ',' => fields.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
    }

    if quoted {
        return Err("unterminated quoted field".to_string());
    }

    fields.push(current);
    Ok(fields)
}
