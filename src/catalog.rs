//! Card catalog accumulation and the card pipeline.
//!
//! The catalog is append-only across runs: every run folds the freshly
//! scraped series pages into whatever `cards.json` already holds, so a
//! record that once existed is never dropped and its `id0` never changes.

use std::path::Path;

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::config;
use crate::error::Result;
use crate::extract::extract_cards;
use crate::fetch::Fetcher;
use crate::models::Card;
use crate::store;

// ---------------------------------------------------------------------------
// CatalogMerger
// ---------------------------------------------------------------------------

/// Accumulates card rows keyed by identity.
///
/// Insertion order is kept: seeded records first in their stored order,
/// newly discovered printings appended in scrape order. Id assignment walks
/// that order, which is what makes new ids deterministic.
#[derive(Debug, Default)]
pub struct CatalogMerger {
    entries: IndexMap<String, Card>,
}

impl CatalogMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a previous run's records so this run unions into them instead
    /// of starting over.
    pub fn seed(&mut self, existing: Vec<Card>) {
        for card in existing {
            match self.entries.entry(card.identity_key()) {
                Entry::Occupied(mut slot) => {
                    let merged = slot.get_mut();
                    merged.series.extend(card.series);
                    if merged.id0.is_none() {
                        merged.id0 = card.id0;
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(card);
                }
            }
        }
    }

    /// Merge one series page worth of rows under its official series code.
    ///
    /// A row whose identity is already known only contributes its series
    /// membership; the stored record's fields win.
    pub fn add_series(&mut self, official_code: &str, rows: Vec<Card>) {
        for mut card in rows {
            match self.entries.entry(card.identity_key()) {
                Entry::Occupied(mut slot) => {
                    slot.get_mut().series.insert(official_code.to_string());
                }
                Entry::Vacant(slot) => {
                    card.series.insert(official_code.to_string());
                    slot.insert(card);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All records, insertion order.
    pub fn into_cards(self) -> Vec<Card> {
        self.entries.into_values().collect()
    }
}

// ---------------------------------------------------------------------------
// Id assignment
// ---------------------------------------------------------------------------

/// Fill in missing `id0` values and return how many were assigned.
///
/// New ids start above the highest already present and go out in list
/// order, so re-running over an already numbered catalog changes nothing.
pub fn assign_ids(cards: &mut [Card]) -> usize {
    let mut next = cards.iter().filter_map(|c| c.id0).max().unwrap_or(0);
    let mut assigned = 0;
    for card in cards.iter_mut() {
        if card.id0.is_none() {
            next += 1;
            card.id0 = Some(next);
            assigned += 1;
        }
    }
    assigned
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Scrape every series page and rewrite `cards.json`.
///
/// Per-series fetch failures are reported and skipped; the series they
/// would have contributed simply keeps its stored records for this run.
/// Progress is reported after each series either way.
pub fn update_cards(fetcher: &Fetcher, data_dir: &Path) -> Result<()> {
    let path = data_dir.join(config::CARDS_FILE);

    let mut merger = CatalogMerger::new();
    match store::load_json::<Vec<Card>>(&path) {
        Ok(Some(existing)) => merger.seed(existing),
        Ok(None) => {}
        Err(e) => {
            eprintln!(
                "Could not read existing {}: {} -- starting from empty",
                path.display(),
                e
            );
        }
    }

    let total = config::SERIES_CODES.len();
    for (done, (series_id, official_code)) in config::SERIES_CODES.iter().enumerate() {
        match fetcher.get_html(&config::card_list_url(series_id)) {
            Ok(html) => merger.add_series(official_code, extract_cards(&html)),
            Err(e) => {
                eprintln!("Series {} fetch failed: {} -- skipping", official_code, e);
            }
        }
        let done = done + 1;
        eprintln!("[progress] {}/{} ({}%)", done, total, done * 100 / total);
    }

    let cards = merger.into_cards();
    store::save_json(&path, &cards)?;

    assign_missing_ids(&path)?;

    eprintln!("Saved {} cards to {}", cards.len(), path.display());
    Ok(())
}

/// Number any stored records that lack an `id0`, rewriting the file when
/// something changed. An unreadable file skips the pass; the ids it holds
/// must not be guessed at.
fn assign_missing_ids(path: &Path) -> Result<()> {
    let mut cards = match store::load_json::<Vec<Card>>(path) {
        Ok(Some(cards)) => cards,
        Ok(None) => return Ok(()),
        Err(e) => {
            eprintln!(
                "Could not re-read {} for id assignment: {} -- skipping",
                path.display(),
                e
            );
            return Ok(());
        }
    };

    let assigned = assign_ids(&mut cards);
    if assigned > 0 {
        store::save_json(path, &cards)?;
        eprintln!("Assigned {} new card ids", assigned);
    }
    Ok(())
}
