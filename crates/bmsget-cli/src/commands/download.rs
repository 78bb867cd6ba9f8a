//! Download command: search, pick, fetch and install.

use anyhow::{Context, Result};
use bmsget_core::{
    Config, MochaSearchEngine, Prompter, SearchEngine, fetch_payload, install_payload,
};
use tracing::debug;

use crate::prompter::StdioPrompter;

pub fn run(config: &Config, word: &str, destdir: Option<&str>) -> Result<()> {
    let engine = MochaSearchEngine::new(&config.mocha.url);
    let results = engine.search(word)?;

    if results.is_empty() {
        println!("No results for \"{}\".", word);
        return Ok(());
    }

    let prompter = StdioPrompter;
    let index = if results.len() == 1 {
        println!("\"{}\"", results[0].title());
        0
    } else {
        for (i, result) in results.iter().enumerate() {
            println!("\"{}\" [{}]", result.title(), i);
        }
        let answer = prompter.prompt_line("choose index", "0");
        answer
            .parse::<usize>()
            .context("index must be a number")?
    };
    let result = results.get(index).context("index out of range")?;
    debug!("selected \"{}\" ({})", result.title(), result.detail_url());

    let url = result.resolve_download_url()?;
    debug!("song URL: {}", url);

    let Some(payload) = fetch_payload(&url, &prompter)? else {
        // Song page handled via browser, nothing to install
        return Ok(());
    };

    let dest = super::dest_path(config, destdir);
    let name_hint = file_name_from_url(&url).unwrap_or_else(|| result.title().to_string());
    let installed = install_payload(&payload, &dest, &name_hint)?;
    println!("Installed to {}", installed.display());
    Ok(())
}

/// Last path segment of a URL, without any query string.
fn file_name_from_url(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next()?;
    let without_scheme = path.split_once("://").map_or(path, |(_, rest)| rest);
    let (_, name) = without_scheme.rsplit_once('/')?;
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
