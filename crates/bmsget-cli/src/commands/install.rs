//! Install command: install a local archive or file.

use std::path::Path;

use anyhow::{Context, Result};
use bmsget_core::{Config, install_payload, read_local_payload};

pub fn run(config: &Config, path: &Path, destdir: Option<&str>) -> Result<()> {
    let payload =
        read_local_payload(path).with_context(|| format!("Failed to read {:?}", path))?;

    let name_hint = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .context("path has no file name")?;

    let dest = super::dest_path(config, destdir);
    let installed = install_payload(&payload, &dest, &name_hint)?;
    println!("Installed to {}", installed.display());
    Ok(())
}
