//! Difficulty tables.
//!
//! A difficulty table is an externally published catalog of charts,
//! grouped into folders. beatoraja stores each table it follows as a
//! gzip-compressed JSON resource under `<root>/table/*.bmt`.
//!
//! - `DifficultyTable`, `TableFolder`, `CatalogEntry` - the table shape
//! - `TableLoader` - lazy per-file loading

mod loader;

pub use loader::*;

use serde::Deserialize;

/// One song entry inside a difficulty table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub title: String,
    /// Identity hash published by the table. Join key against local
    /// chart identities. An empty hash can never match a local chart,
    /// so such entries always register as missing (known limitation).
    #[serde(default)]
    pub md5: String,
    /// Where the chart can be obtained, when the publisher knows.
    #[serde(default)]
    pub url: Option<String>,
}

/// One folder (level/category) of a difficulty table.
#[derive(Debug, Clone, Deserialize)]
pub struct TableFolder {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub songs: Vec<CatalogEntry>,
}

/// One externally published difficulty table.
#[derive(Debug, Clone, Deserialize)]
pub struct DifficultyTable {
    pub name: String,
    #[serde(default)]
    pub folder: Vec<TableFolder>,
}

impl DifficultyTable {
    /// Entries whose title starts with `head`, flattened across folders.
    ///
    /// Comparison is exact and case-sensitive; result order follows the
    /// table's folder-then-song declaration order.
    pub fn search<'a>(&'a self, head: &'a str) -> impl Iterator<Item = &'a CatalogEntry> {
        self.folder
            .iter()
            .flat_map(|folder| folder.songs.iter())
            .filter(move |entry| entry.title.starts_with(head))
    }
}
