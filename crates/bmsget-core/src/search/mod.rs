//! Chart search providers.
//!
//! - `SearchEngine` / `SearchResult` - provider seam
//! - `MochaSearchEngine` - the Mocha ranking site provider
//! - `html` - just enough tag slicing to read the site's tables

pub mod html;
mod mocha;

pub use mocha::*;

use crate::error::Result;

/// One hit from a search provider.
pub trait SearchResult {
    /// Song title as listed by the provider.
    fn title(&self) -> &str;

    /// URL of the provider's detail page for this hit.
    fn detail_url(&self) -> &str;

    /// Resolve the actual download URL from the detail page.
    fn resolve_download_url(&self) -> Result<String>;
}

/// A queryable chart search provider.
///
/// Only one provider exists today, but the seam stays swappable.
pub trait SearchEngine {
    fn search(&self, word: &str) -> Result<Vec<Box<dyn SearchResult>>>;
}
