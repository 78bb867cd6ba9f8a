//! Amplify command: reconcile a song directory against the followed
//! difficulty tables.

use std::path::Path;

use anyhow::{Context, Result};
use bmsget_core::{Amplifier, Config, HttpAcquirer, SongData};

use crate::prompter::StdioPrompter;

pub fn run(config: &Config, dir: &Path) -> Result<()> {
    let root = config.root_path();
    let prompter = StdioPrompter;

    let songdata = SongData::open(&root)
        .with_context(|| format!("Failed to open song database under {:?}", root))?;
    let acquirer = HttpAcquirer::new(config.songs_path(), &prompter);

    Amplifier::new(&root, &prompter, &songdata, &acquirer)
        .run(dir)
        .with_context(|| format!("Reconciliation failed for {:?}", dir))
}
