//! Catalog reconciliation ("amplify").
//!
//! Given a directory holding the charts of one song, work out what the
//! followed difficulty tables list under the same title that is not in
//! the local collection, and offer to acquire each missing entry.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::chart::{ChartRecord, ChartScanner, common_title_prefix};
use crate::error::Result;
use crate::fetch::fetch_payload;
use crate::install::install_payload;
use crate::prompter::Prompter;
use crate::songdata::LocalIndex;
use crate::table::TableLoader;

/// Acquisition collaborator: obtain and install one missing chart.
pub trait Acquire {
    fn acquire(&self, url: &str, title: &str) -> Result<()>;
}

/// Download-and-install acquisition against the configured songs
/// directory.
pub struct HttpAcquirer<'a> {
    dest: PathBuf,
    prompter: &'a dyn Prompter,
}

impl<'a> HttpAcquirer<'a> {
    pub fn new<P: AsRef<Path>>(dest: P, prompter: &'a dyn Prompter) -> Self {
        Self {
            dest: dest.as_ref().to_path_buf(),
            prompter,
        }
    }
}

impl Acquire for HttpAcquirer<'_> {
    fn acquire(&self, url: &str, title: &str) -> Result<()> {
        match fetch_payload(url, self.prompter)? {
            Some(payload) => {
                let installed = install_payload(&payload, &self.dest, title)?;
                info!("installed \"{}\" to {:?}", title, installed);
                Ok(())
            }
            // Song page: handled via browser, nothing to install
            None => Ok(()),
        }
    }
}

/// The reconciliation engine.
pub struct Amplifier<'a, I: LocalIndex, A: Acquire> {
    root: PathBuf,
    prompter: &'a dyn Prompter,
    index: &'a I,
    acquirer: &'a A,
}

impl<'a, I: LocalIndex, A: Acquire> Amplifier<'a, I, A> {
    pub fn new<P: AsRef<Path>>(
        root: P,
        prompter: &'a dyn Prompter,
        index: &'a I,
        acquirer: &'a A,
    ) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            prompter,
            index,
            acquirer,
        }
    }

    /// Reconcile the charts of `chart_dir` against every followed table.
    ///
    /// Scan and table-load failures abort the whole run. Acquisition
    /// failures do not: each entry is attempted independently and a
    /// failed one only logs before the loop moves on.
    pub fn run(&self, chart_dir: &Path) -> Result<()> {
        let charts: Vec<ChartRecord> = ChartScanner::new(chart_dir)?.collect::<Result<_>>()?;
        debug!("scanned {} charts from {:?}", charts.len(), chart_dir);

        let identities: HashSet<&str> = charts
            .iter()
            .filter(|c| !c.identity.is_empty())
            .map(|c| c.identity.as_str())
            .collect();

        let head = self.confirm_title(&charts);
        if head.is_empty() {
            self.prompter.notice("No title given, nothing to do.");
            return Ok(());
        }

        for table in TableLoader::new(&self.root)? {
            let table = table?;
            debug!("reconciling against \"{}\"", table.name);

            for entry in table.search(&head) {
                // An entry with no published hash can never match a
                // local chart and always registers as missing.
                if !entry.md5.is_empty()
                    && (identities.contains(entry.md5.as_str())
                        || self.index.contains(&entry.md5)?)
                {
                    self.prompter.notice(&format!(
                        "[{}] \"{}\" is already installed",
                        table.name, entry.title
                    ));
                    continue;
                }

                let Some(url) = entry.url.as_deref().filter(|u| !u.is_empty()) else {
                    debug!(
                        "[{}] \"{}\" is missing but has no source",
                        table.name, entry.title
                    );
                    continue;
                };

                let question = format!("[{}] acquire \"{}\"?", table.name, entry.title);
                if !self.prompter.confirm(&question, true) {
                    continue;
                }
                if let Err(e) = self.acquirer.acquire(url, &entry.title) {
                    warn!("failed to acquire \"{}\": {}", entry.title, e);
                    self.prompter
                        .notice(&format!("Failed to acquire \"{}\": {}", entry.title, e));
                }
            }
        }
        Ok(())
    }

    /// Infer a canonical title from the scanned charts and let the
    /// operator confirm or override it.
    fn confirm_title(&self, charts: &[ChartRecord]) -> String {
        let titles: Vec<&str> = charts.iter().map(|c| c.title.as_str()).collect();
        let inferred = common_title_prefix(&titles);

        if inferred.is_empty() {
            self.prompter
                .notice("Could not infer a canonical title. Scanned titles:");
            for title in &titles {
                self.prompter.notice(&format!("  \"{}\"", title));
            }
            self.prompter.prompt_line("Enter song title", "")
        } else {
            self.prompter.prompt_line("Song title", &inferred)
        }
    }
}
