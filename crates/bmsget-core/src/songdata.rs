//! Read-only lookups against the beatoraja song database.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::error::Result;

/// Identity-hash lookup against an already-installed chart collection.
///
/// The amplify engine only ever asks one question of the local
/// collection, so the seam is a single method; tests substitute a
/// set-backed implementation.
pub trait LocalIndex {
    fn contains(&self, identity: &str) -> Result<bool>;
}

/// beatoraja's `songdata.db`, opened read-only.
pub struct SongData {
    conn: Connection,
}

impl SongData {
    /// Open `<root>/songdata.db` without taking any write locks.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let path = root.as_ref().join("songdata.db");
        debug!("opening song database {:?}", path);
        let conn = Connection::open_with_flags(&path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(Self { conn })
    }
}

impl LocalIndex for SongData {
    fn contains(&self, identity: &str) -> Result<bool> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT 1 FROM song WHERE md5 = ?1 LIMIT 1")?;
        Ok(stmt.exists([identity])?)
    }
}
