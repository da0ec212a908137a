//! Price history accumulation and the price pipeline.
//!
//! Each run folds the current snapshot into `C.json` as one dated point per
//! listing, then derives `latestprice.json` from the merged history. Dates
//! already recorded are never rewritten, except for the current date, which
//! is overwritten on same-day re-runs.

use std::path::Path;

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::config;
use crate::error::Result;
use crate::extract::extract_observations;
use crate::fetch::Fetcher;
use crate::models::{
    HistoryEntry, LatestPrice, PriceObservation, PricePoint, StoredEntry, StoredPrice,
};
use crate::store;

// ---------------------------------------------------------------------------
// History merge
// ---------------------------------------------------------------------------

/// Expand stored entries into the working map, upgrading legacy
/// bare-integer prices to a single point dated `today`.
pub fn normalize_history(
    stored: Vec<StoredEntry>,
    today: NaiveDate,
) -> IndexMap<String, Vec<PricePoint>> {
    let mut history = IndexMap::new();
    for entry in stored {
        let points = match entry.price {
            StoredPrice::Points(points) => points,
            StoredPrice::Legacy(value) => vec![PricePoint { date: today, value }],
        };
        history.insert(entry.priceid, points);
    }
    history
}

/// Merge a snapshot into the history.
///
/// First-seen listings are appended after the existing ones, in snapshot
/// order. A listing that already has a point for `today` gets that point's
/// value overwritten; otherwise a point dated `today` is appended. Earlier
/// dates are never touched.
pub fn merge_snapshot(
    history: &mut IndexMap<String, Vec<PricePoint>>,
    snapshot: &[PriceObservation],
    today: NaiveDate,
) {
    for obs in snapshot {
        let points = history.entry(obs.priceid.clone()).or_default();
        match points.iter_mut().find(|p| p.date == today) {
            Some(point) => point.value = obs.price,
            None => points.push(PricePoint {
                date: today,
                value: obs.price,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Latest-price derivation
// ---------------------------------------------------------------------------

/// Derive the latest-price view: the newest value per listing plus the
/// signed movement since its oldest point (`+0` for no movement). Listings
/// with no points are skipped.
pub fn derive_latest(entries: &[HistoryEntry]) -> Vec<LatestPrice> {
    let mut latest = Vec::new();
    for entry in entries {
        if entry.price.is_empty() {
            continue;
        }
        let mut points = entry.price.clone();
        points.sort_by_key(|p| p.date);
        let oldest = points[0].value;
        let newest = points[points.len() - 1].value;
        latest.push(LatestPrice {
            priceid: entry.priceid.clone(),
            price: newest,
            stats: format!("{:+}", newest - oldest),
        });
    }
    latest
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Fetch the price page and rewrite `C.json` and `latestprice.json`.
///
/// A failed or malformed snapshot ends the run without touching either
/// file: yesterday's data stays valid, today's point is simply missing.
pub fn update_prices(fetcher: &Fetcher, data_dir: &Path) -> Result<()> {
    let snapshot = fetcher
        .get_html(config::PRICE_URL)
        .and_then(|html| extract_observations(&html));
    let snapshot = match snapshot {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Price snapshot failed: {} -- keeping existing files", e);
            return Ok(());
        }
    };

    let history_path = data_dir.join(config::HISTORY_FILE);
    let stored = match store::load_json::<Vec<StoredEntry>>(&history_path) {
        Ok(Some(stored)) => stored,
        Ok(None) => Vec::new(),
        Err(e) => {
            eprintln!(
                "Could not read {}: {} -- skipping price merge",
                history_path.display(),
                e
            );
            return Ok(());
        }
    };

    let today = chrono::Local::now().date_naive();
    let mut history = normalize_history(stored, today);
    merge_snapshot(&mut history, &snapshot, today);

    let entries: Vec<HistoryEntry> = history
        .into_iter()
        .map(|(priceid, price)| HistoryEntry { priceid, price })
        .collect();
    store::save_json(&history_path, &entries)?;
    eprintln!(
        "Merged {} observations into {} ({} listings tracked)",
        snapshot.len(),
        history_path.display(),
        entries.len()
    );

    let latest = derive_latest(&entries);
    let latest_path = data_dir.join(config::LATEST_FILE);
    store::save_json(&latest_path, &latest)?;
    eprintln!("Wrote {} latest prices to {}", latest.len(), latest_path.display());

    Ok(())
}
