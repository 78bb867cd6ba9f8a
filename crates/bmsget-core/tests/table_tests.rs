//! Difficulty table loading tests against on-disk fixtures.

use std::fs;
use std::io::Write;
use std::path::Path;

use bmsget_core::error::Error;
use bmsget_core::table::TableLoader;
use flate2::Compression;
use flate2::write::GzEncoder;
use serde_json::json;

fn write_bmt(root: &Path, file_name: &str, value: serde_json::Value) {
    let table_dir = root.join("table");
    fs::create_dir_all(&table_dir).unwrap();
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&serde_json::to_vec(&value).unwrap())
        .unwrap();
    fs::write(table_dir.join(file_name), encoder.finish().unwrap()).unwrap();
}

#[test]
fn test_load_table_from_gzip_json() {
    let root = tempfile::tempdir().unwrap();
    write_bmt(
        root.path(),
        "insane.bmt",
        json!({
            "name": "Insane",
            "folder": [
                { "name": "★1", "songs": [
                    { "title": "First Song", "md5": "aaaa", "url": "http://x/a.zip" },
                    { "title": "Second Song", "md5": "bbbb" },
                ] },
                { "name": "★2", "songs": [
                    { "title": "Third Song", "md5": "cccc", "url": null },
                ] },
            ],
        }),
    );

    let tables: Vec<_> = TableLoader::new(root.path())
        .unwrap()
        .map(|t| t.unwrap())
        .collect();
    assert_eq!(tables.len(), 1);

    let table = &tables[0];
    assert_eq!(table.name, "Insane");
    let titles: Vec<&str> = table.search("").map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["First Song", "Second Song", "Third Song"]);
    let first = table.search("First").next().unwrap();
    assert_eq!(first.url.as_deref(), Some("http://x/a.zip"));
}

#[test]
fn test_loader_skips_non_bmt_files() {
    let root = tempfile::tempdir().unwrap();
    write_bmt(root.path(), "real.bmt", json!({ "name": "Real" }));
    let table_dir = root.path().join("table");
    fs::write(table_dir.join("notes.txt"), b"ignore me").unwrap();
    fs::write(table_dir.join("cache.json"), b"{}").unwrap();

    let tables: Vec<_> = TableLoader::new(root.path())
        .unwrap()
        .map(|t| t.unwrap())
        .collect();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].name, "Real");
}

#[test]
fn test_missing_table_directory_is_a_load_failure() {
    let root = tempfile::tempdir().unwrap();
    match TableLoader::new(root.path()) {
        Err(Error::TableLoad { path, .. }) => {
            assert_eq!(path, root.path().join("table"));
        }
        Err(other) => panic!("expected TableLoad, got {:?}", other),
        Ok(_) => panic!("expected TableLoad error"),
    }
}

#[test]
fn test_corrupt_resource_yields_error_item() {
    let root = tempfile::tempdir().unwrap();
    let table_dir = root.path().join("table");
    fs::create_dir_all(&table_dir).unwrap();
    fs::write(table_dir.join("broken.bmt"), b"\x1f\x8b garbage").unwrap();

    let mut loader = TableLoader::new(root.path()).unwrap();
    assert!(loader.next().unwrap().is_err());
}

#[test]
fn test_ungzipped_json_is_rejected() {
    // The resource must be gzip-compressed; raw JSON is malformed
    let root = tempfile::tempdir().unwrap();
    let table_dir = root.path().join("table");
    fs::create_dir_all(&table_dir).unwrap();
    fs::write(table_dir.join("plain.bmt"), br#"{ "name": "Plain" }"#).unwrap();

    let mut loader = TableLoader::new(root.path()).unwrap();
    assert!(loader.next().unwrap().is_err());
}
