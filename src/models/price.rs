use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PriceObservation — one listing scraped from the price page
// ---------------------------------------------------------------------------

/// A single listing as seen on the price page right now: the composed
/// listing key and its current buylist price in yen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub priceid: String,
    pub price: i64,
}

// ---------------------------------------------------------------------------
// PricePoint — one dated value in a listing's history
// ---------------------------------------------------------------------------

/// One point of a listing's price history. `date` serializes as
/// `YYYY-MM-DD`; at most one point exists per listing per date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub value: i64,
}

// ---------------------------------------------------------------------------
// HistoryEntry — persisted history for one listing
// ---------------------------------------------------------------------------

/// Full dated history for one listing, as written to the history file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub priceid: String,
    pub price: Vec<PricePoint>,
}

// ---------------------------------------------------------------------------
// StoredEntry — history entry as read back, tolerating the legacy shape
// ---------------------------------------------------------------------------

/// History entry as found on disk. Early snapshots stored `price` as a bare
/// integer instead of a list of dated points; the untagged union accepts
/// both so old files upgrade in place on the next write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub priceid: String,
    pub price: StoredPrice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredPrice {
    Points(Vec<PricePoint>),
    Legacy(i64),
}

// ---------------------------------------------------------------------------
// LatestPrice — most recent value plus an all-time movement figure
// ---------------------------------------------------------------------------

/// Derived snapshot row: the newest recorded value for a listing and the
/// signed difference between its newest and oldest points, e.g. `"+140"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestPrice {
    pub priceid: String,
    pub price: i64,
    pub stats: String,
}
