//! Lazy directory scan for chart files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::chart::ChartRecord;
use crate::error::{Error, Result};

/// Extensions that identify a chart file.
const CHART_EXTENSIONS: [&str; 3] = ["bms", "bme", "bml"];

/// Single-pass iterator over the chart files of one directory.
///
/// Yields one `ChartRecord` per chart file, in filesystem enumeration
/// order (callers must not depend on ordering). The first unreadable
/// file terminates the scan with an error; there is no silent skipping.
pub struct ChartScanner {
    dir: PathBuf,
    entries: fs::ReadDir,
}

impl ChartScanner {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        let entries = fs::read_dir(&dir).map_err(|e| Error::Scan {
            path: dir.clone(),
            message: e.to_string(),
        })?;
        Ok(Self { dir, entries })
    }

    fn read_chart(&self, path: &Path) -> Result<ChartRecord> {
        let bytes = fs::read(path).map_err(|e| Error::ChartParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let record = ChartRecord::parse(&bytes);
        debug!("parsed {:?}: \"{}\" ({})", path, record.title, record.identity);
        Ok(record)
    }
}

impl Iterator for ChartScanner {
    type Item = Result<ChartRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    return Some(Err(Error::Scan {
                        path: self.dir.clone(),
                        message: e.to_string(),
                    }));
                }
            };
            let path = entry.path();
            if !is_chart_file(&path) {
                continue;
            }
            return Some(self.read_chart(&path));
        }
    }
}

fn is_chart_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            CHART_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scan_picks_up_chart_extensions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.bms"), b"#TITLE a\n").unwrap();
        fs::write(dir.path().join("b.BME"), b"#TITLE b\n").unwrap();
        fs::write(dir.path().join("c.bml"), b"#TITLE c\n").unwrap();
        fs::write(dir.path().join("readme.txt"), b"not a chart").unwrap();
        fs::write(dir.path().join("song.wav"), b"\0\0").unwrap();

        let mut titles: Vec<String> = ChartScanner::new(dir.path())
            .unwrap()
            .map(|r| r.unwrap().title)
            .collect();
        titles.sort();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let charts: Vec<_> = ChartScanner::new(dir.path()).unwrap().collect();
        assert!(charts.is_empty());
    }

    #[test]
    fn test_scan_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");
        assert!(ChartScanner::new(&missing).is_err());
    }

    #[test]
    fn test_scan_ignores_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested.bms")).unwrap();
        fs::write(dir.path().join("a.bms"), b"#TITLE a\n").unwrap();

        let charts: Vec<_> = ChartScanner::new(dir.path())
            .unwrap()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].title, "a");
    }
}
