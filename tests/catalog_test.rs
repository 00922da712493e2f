use opuscli::catalog::{
    CatalogError, default_works, dedup_works, load_catalog, parse_works, render_works,
    write_catalog,
};
use opuscli::types::WorkEntry;
use opuscli::utils::normalize;

// Helper function to create a catalog entry
fn entry(composer: &str, work: &str) -> WorkEntry {
    WorkEntry {
        composer: composer.to_string(),
        work: work.to_string(),
    }
}

#[test]
fn test_normalize_folds_case_and_whitespace() {
    // Case folds, inner whitespace collapses, outer whitespace disappears
    assert_eq!(normalize("  Symphony   No. 2 "), "symphony no. 2");
    assert_eq!(normalize("HAYDN"), "haydn");

    // Idempotent on already-normalized input
    assert_eq!(normalize("symphony no. 2"), "symphony no. 2");
}

#[test]
fn test_normalize_straightens_curly_quotes() {
    assert_eq!(normalize("l’après-midi"), "l'après-midi");
    assert_eq!(normalize("“London”"), "\"London\"");
    assert_eq!(normalize("‘quoted’"), "'quoted'");
}

#[test]
fn test_dedup_keeps_one_entry_in_first_seen_order() {
    let mut entries = vec![
        entry("Haydn", "Symphony No. 2"),
        entry("haydn", "symphony no. 2"), // case variant of the first
        entry("Mozart", "Symphony No. 40 in G minor, K. 550"),
    ];

    dedup_works(&mut entries);

    // The first spelling survives, the variant is gone, order is stable
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], entry("Haydn", "Symphony No. 2"));
    assert_eq!(entries[1], entry("Mozart", "Symphony No. 40 in G minor, K. 550"));
}

#[test]
fn test_dedup_collapses_quote_style_variants() {
    let mut entries = vec![
        entry("Haydn", "Symphony No. 104 in D major, \"London\""),
        entry("Haydn", "Symphony No. 104 in D major, “London”"), // curly quotes
    ];

    dedup_works(&mut entries);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].work, "Symphony No. 104 in D major, \"London\"");
}

#[test]
fn test_render_quotes_fields_that_need_it() {
    let entries = vec![
        entry("Haydn", "Symphony No. 2"),
        entry("Haydn", "Symphony No. 104 in D major, \"London\""),
    ];

    let rendered = render_works(&entries);
    let mut lines = rendered.lines();

    assert_eq!(lines.next(), Some("composer,work"));
    // No delimiter or quote in either field: written bare
    assert_eq!(lines.next(), Some("Haydn,Symphony No. 2"));
    // Comma and quotes force quoting, with embedded quotes doubled
    assert_eq!(
        lines.next(),
        Some("Haydn,\"Symphony No. 104 in D major, \"\"London\"\"\"")
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn test_render_parse_round_trip() {
    let entries = vec![
        entry("Dvořák", "Symphony No. 9 in E minor, Op. 95 \"From the New World\""),
        entry("Debussy", "Prélude à l'après-midi d'un faune"),
        entry("J. C. Bach", "Symphony in E-flat major, Op. 18 No. 4"),
    ];

    let parsed = parse_works(&render_works(&entries)).unwrap();
    assert_eq!(parsed, entries);
}

#[test]
fn test_parse_rejects_missing_header() {
    let result = parse_works("Haydn,Symphony No. 2\n");
    assert!(matches!(result, Err(CatalogError::ParseError(_))));

    let result = parse_works("");
    assert!(matches!(result, Err(CatalogError::ParseError(_))));
}

#[test]
fn test_parse_rejects_wrong_field_count() {
    // An unquoted comma in the title splits the row into three fields
    let result = parse_works("composer,work\nPoulenc,Trio for Oboe, Bassoon and Piano\n");
    assert!(matches!(result, Err(CatalogError::ParseError(_))));
}

#[test]
fn test_parse_rejects_unterminated_quote() {
    let result = parse_works("composer,work\nHaydn,\"Symphony No. 2\n");
    assert!(matches!(result, Err(CatalogError::ParseError(_))));
}

#[test]
fn test_parse_skips_blank_lines() {
    let parsed = parse_works("composer,work\n\nHaydn,Symphony No. 2\n\n").unwrap();
    assert_eq!(parsed, vec![entry("Haydn", "Symphony No. 2")]);
}

#[test]
fn test_default_works_table() {
    let mut entries = default_works().unwrap();

    // The shipped table keeps its raw rows, duplicates intact
    assert_eq!(entries.len(), 67);
    assert_eq!(
        entries[0],
        entry("Haydn", "Symphony No. 104 in D major, \"London\"")
    );

    // The London symphony appears twice raw and once deduplicated
    let london = "Symphony No. 104 in D major, \"London\"";
    assert_eq!(entries.iter().filter(|e| e.work == london).count(), 2);

    dedup_works(&mut entries);
    assert_eq!(entries.len(), 66);
    assert_eq!(entries.iter().filter(|e| e.work == london).count(), 1);
}

#[tokio::test]
async fn test_catalog_file_round_trip() {
    let dir = std::env::temp_dir().join(format!("opuscli-catalog-test-{}", std::process::id()));
    let path = dir.join("works.csv");

    let mut entries = default_works().unwrap();
    dedup_works(&mut entries);

    write_catalog(&path, &entries).await.unwrap();
    let loaded = load_catalog(&path).await.unwrap();

    // Writing then reading back yields the same ordered sequence
    assert_eq!(loaded, entries);

    let _ = std::fs::remove_dir_all(&dir);
}
