//! Search command: list ranking hits for a word.

use anyhow::Result;
use bmsget_core::{Config, MochaSearchEngine, SearchEngine};
use tracing::debug;

pub fn run(config: &Config, word: &str) -> Result<()> {
    debug!("searching with word \"{}\"", word);
    let engine = MochaSearchEngine::new(&config.mocha.url);
    let results = engine.search(word)?;

    if results.is_empty() {
        println!("No results for \"{}\".", word);
        return Ok(());
    }
    for (i, result) in results.iter().enumerate() {
        println!("\"{}\" [{}]", result.title(), i);
    }
    Ok(())
}
