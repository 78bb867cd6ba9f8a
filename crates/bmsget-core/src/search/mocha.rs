//! Search provider for the Mocha ranking site.

use std::time::Duration;

use tracing::debug;

use crate::error::{Error, Result};
use crate::search::html::{
    first_anchor_href, next_tag_block_ci, resolve_url, slice_between_ci, text_content,
};
use crate::search::{SearchEngine, SearchResult};

// Fixed ranking query: 7-key charts, sorted by player count descending,
// limited to entries that publish a download URL.
const MODE_BEAT_7K: &str = "beat-7k";
const SORT_USER_COUNT: &str = "2";
const ORDER_DESCEND: &str = "0";
const URL_EXISTS: &str = "1";

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

pub struct MochaSearchEngine {
    agent: ureq::Agent,
    base_url: String,
}

impl MochaSearchEngine {
    /// Build a provider for the ranking page at `base_url`.
    pub fn new(base_url: &str) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(HTTP_TIMEOUT))
            .build();
        Self {
            agent: config.into(),
            base_url: base_url.to_string(),
        }
    }

    fn parse_ranking(&self, page: &str) -> Result<Vec<Box<dyn SearchResult>>> {
        let table = slice_between_ci(page, r#"<table class="ranking""#, "</table>")
            .ok_or_else(|| Error::SearchParse("ranking table not found".to_string()))?;

        let mut results: Vec<Box<dyn SearchResult>> = Vec::new();
        let mut pos = 0;
        while let Some((row_start, row_end)) = next_tag_block_ci(table, "<tr", "</tr>", pos) {
            let row = &table[row_start..row_end];
            pos = row_end;

            // Header rows carry <th> cells; data rows never do
            if row.to_ascii_lowercase().contains("<th") {
                continue;
            }

            // Title lives in the second cell as an anchor to the detail page
            let (_, first_end) = match next_tag_block_ci(row, "<td", "</td>", 0) {
                Some(range) => range,
                None => continue,
            };
            let Some((cell_start, cell_end)) = next_tag_block_ci(row, "<td", "</td>", first_end)
            else {
                continue;
            };
            let cell = &row[cell_start..cell_end];
            let Some(href) = first_anchor_href(cell) else {
                continue;
            };
            results.push(Box::new(MochaSearchResult {
                agent: self.agent.clone(),
                title: text_content(cell),
                detail_url: resolve_url(&self.base_url, &href),
            }));
        }
        Ok(results)
    }
}

impl SearchEngine for MochaSearchEngine {
    fn search(&self, word: &str) -> Result<Vec<Box<dyn SearchResult>>> {
        debug!("searching Mocha for \"{}\"", word);
        let mut response = self
            .agent
            .get(&self.base_url)
            .query("title", word)
            .query("artist", "")
            .query("mode", MODE_BEAT_7K)
            .query("sort", SORT_USER_COUNT)
            .query("order", ORDER_DESCEND)
            .query("url", URL_EXISTS)
            .call()?;
        let page = response.body_mut().read_to_string()?;
        self.parse_ranking(&page)
    }
}

struct MochaSearchResult {
    agent: ureq::Agent,
    title: String,
    detail_url: String,
}

impl SearchResult for MochaSearchResult {
    fn title(&self) -> &str {
        &self.title
    }

    fn detail_url(&self) -> &str {
        &self.detail_url
    }

    fn resolve_download_url(&self) -> Result<String> {
        debug!("fetching detail page {}", self.detail_url);
        let mut response = self.agent.get(&self.detail_url).call()?;
        let page = response.body_mut().read_to_string()?;
        extract_song_url(&page)
            .map(|href| resolve_url(&self.detail_url, &href))
            .ok_or_else(|| Error::SearchParse("URL row not found in song info".to_string()))
    }
}

/// Find the `URL` row of the detail page's `songinfo` table and return
/// the second cell's link.
fn extract_song_url(page: &str) -> Option<String> {
    let table = slice_between_ci(page, r#"<table class="songinfo""#, "</table>")?;
    let mut pos = 0;
    while let Some((row_start, row_end)) = next_tag_block_ci(table, "<tr", "</tr>", pos) {
        let row = &table[row_start..row_end];
        pos = row_end;

        let Some((_, first_end)) = next_tag_block_ci(row, "<td", "</td>", 0) else {
            continue;
        };
        let header = text_content(&row[..first_end]);
        if !header.eq_ignore_ascii_case("url") {
            continue;
        }
        let (cell_start, cell_end) = next_tag_block_ci(row, "<td", "</td>", first_end)?;
        return first_anchor_href(&row[cell_start..cell_end]);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANKING_PAGE: &str = r#"
        <html><body>
        <table class="ranking">
          <tr><th>#</th><th>Title</th><th>Players</th></tr>
          <tr><td>1</td><td><a href="song.php?id=10">Wonder [Wonder Mix]</a></td><td>321</td></tr>
          <tr><td>2</td><td><a href="song.php?id=11">Wonder Another</a></td><td>100</td></tr>
        </table>
        </body></html>"#;

    #[test]
    fn test_parse_ranking_rows() {
        let engine = MochaSearchEngine::new("https://example.com/song.php");
        let results = engine.parse_ranking(RANKING_PAGE).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title(), "Wonder [Wonder Mix]");
        assert_eq!(results[0].detail_url(), "https://example.com/song.php?id=10");
        assert_eq!(results[1].title(), "Wonder Another");
    }

    #[test]
    fn test_parse_ranking_missing_table_fails() {
        let engine = MochaSearchEngine::new("https://example.com/song.php");
        let err = engine.parse_ranking("<html><body>maintenance</body></html>");
        assert!(err.is_err());
    }

    #[test]
    fn test_extract_song_url() {
        let page = r#"
            <table class="songinfo">
              <tr><td>Artist</td><td>someone</td></tr>
              <tr><td>URL</td><td><a href="http://dl.example.net/wonder.zip">site</a></td></tr>
            </table>"#;
        assert_eq!(
            extract_song_url(page).as_deref(),
            Some("http://dl.example.net/wonder.zip")
        );
    }

    #[test]
    fn test_extract_song_url_no_url_row() {
        let page = r#"
            <table class="songinfo">
              <tr><td>Artist</td><td>someone</td></tr>
            </table>"#;
        assert_eq!(extract_song_url(page), None);
    }
}
