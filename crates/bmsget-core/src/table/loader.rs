//! Lazy loading of difficulty table resources.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tracing::debug;

use crate::error::{Error, Result};
use crate::table::DifficultyTable;

/// Lazy iterator over the `.bmt` resources of a beatoraja installation.
///
/// Each item gunzips and parses one table on demand. A malformed or
/// unreadable resource yields an error item; the caller decides whether
/// that aborts the run (amplify treats it as fatal — there is no
/// per-table isolation).
pub struct TableLoader {
    paths: std::vec::IntoIter<PathBuf>,
}

impl TableLoader {
    /// Find every `table/*.bmt` under the installation root.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let table_dir = root.as_ref().join("table");
        let mut paths = Vec::new();
        for entry in fs::read_dir(&table_dir).map_err(|e| Error::TableLoad {
            path: table_dir.clone(),
            message: e.to_string(),
        })? {
            let entry = entry.map_err(|e| Error::TableLoad {
                path: table_dir.clone(),
                message: e.to_string(),
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("bmt") {
                paths.push(path);
            }
        }
        Ok(Self {
            paths: paths.into_iter(),
        })
    }

    fn load_one(path: &Path) -> Result<DifficultyTable> {
        debug!("loading difficulty table {:?}", path);
        let file = File::open(path).map_err(|e| Error::TableLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let decoder = GzDecoder::new(file);
        let table: DifficultyTable =
            serde_json::from_reader(decoder).map_err(|e| Error::TableLoad {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        debug!(
            "loaded table \"{}\" ({} folders)",
            table.name,
            table.folder.len()
        );
        Ok(table)
    }
}

impl Iterator for TableLoader {
    type Item = Result<DifficultyTable>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.paths.next()?;
        Some(Self::load_one(&path))
    }
}
