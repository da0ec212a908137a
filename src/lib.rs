//! Card catalog and price history harvester for the One Piece Card Game.
//!
//! Scrapes the official card list pages into a merged, stably numbered
//! catalog (`cards.json`), and the buylist price page into a per-listing
//! dated price history (`C.json`) with a derived latest-price view
//! (`latestprice.json`). All three artifacts live in one data directory and
//! only ever grow: re-runs union into what previous runs recorded.
//!
//! # Quick start
//!
//! ```no_run
//! use optcg_data::Harvester;
//!
//! let harvester = Harvester::builder().build().unwrap();
//!
//! // Record today's prices, then refresh the card catalog.
//! harvester.update_prices().unwrap();
//! harvester.update_cards().unwrap();
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod history;
pub mod models;
pub mod store;

pub use error::{HarvestError, Result};
pub use fetch::Fetcher;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// HarvesterBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Harvester`].
///
/// Use [`Harvester::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](HarvesterBuilder::build) to create the
/// harvester.
pub struct HarvesterBuilder {
    data_dir: Option<PathBuf>,
    timeout: Duration,
}

impl Default for HarvesterBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl HarvesterBuilder {
    /// Set a custom data directory.
    ///
    /// If not set, `Card_Data/Onepeace_Cards` under the working directory
    /// is used.
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the harvester, creating the data directory if it does not
    /// exist yet. No pages are fetched until a pipeline runs.
    pub fn build(self) -> Result<Harvester> {
        let data_dir = self.data_dir.unwrap_or_else(config::default_data_dir);
        std::fs::create_dir_all(&data_dir)?;
        let fetcher = Fetcher::new(self.timeout)?;
        Ok(Harvester { data_dir, fetcher })
    }
}

// ---------------------------------------------------------------------------
// Harvester
// ---------------------------------------------------------------------------

/// The main entry point: runs the two update pipelines against one data
/// directory.
///
/// Created via [`Harvester::builder()`].
pub struct Harvester {
    data_dir: PathBuf,
    fetcher: Fetcher,
}

impl Harvester {
    /// Create a new builder for configuring the harvester.
    pub fn builder() -> HarvesterBuilder {
        HarvesterBuilder::default()
    }

    /// Record today's price snapshot into the history and rewrite the
    /// latest-price view.
    ///
    /// A failed or malformed snapshot is reported and leaves both price
    /// files untouched; only file write failures surface as errors.
    pub fn update_prices(&self) -> Result<()> {
        history::update_prices(&self.fetcher, &self.data_dir)
    }

    /// Scrape every series page and fold the results into the card catalog.
    ///
    /// Individual series fetch failures are reported and skipped; only
    /// file write failures surface as errors.
    pub fn update_cards(&self) -> Result<()> {
        catalog::update_cards(&self.fetcher, &self.data_dir)
    }

    // -- Paths ---------------------------------------------------------------

    /// The resolved data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the merged card catalog.
    pub fn cards_path(&self) -> PathBuf {
        self.data_dir.join(config::CARDS_FILE)
    }

    /// Path of the dated price history.
    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(config::HISTORY_FILE)
    }

    /// Path of the derived latest-price view.
    pub fn latest_path(&self) -> PathBuf {
        self.data_dir.join(config::LATEST_FILE)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Harvester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Harvester(data_dir={})", self.data_dir.display())
    }
}
