//! CLI command implementations.

pub mod amplify;
pub mod download;
pub mod install;
pub mod search;

use std::path::PathBuf;

use bmsget_core::Config;

/// Songs destination, with the optional per-invocation subdirectory.
pub(crate) fn dest_path(config: &Config, destdir: Option<&str>) -> PathBuf {
    let mut dest = config.songs_path();
    if let Some(sub) = destdir {
        dest = dest.join(sub);
    }
    dest
}
