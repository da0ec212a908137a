use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Parallel — printing variant of a card
// ---------------------------------------------------------------------------

/// Whether a printing is the normal art or an alternate-art parallel.
///
/// Detected from the image file name: a `_p` suffix before the query string
/// marks a parallel. Serialized lowercase so the dataset reads
/// `"parallel": "normal"` / `"parallel": "parallel"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parallel {
    #[default]
    Normal,
    Parallel,
}

impl Parallel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Parallel::Normal => "normal",
            Parallel::Parallel => "parallel",
        }
    }
}

impl std::fmt::Display for Parallel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Card — one printing as listed on the official card list pages
// ---------------------------------------------------------------------------

/// A single card printing.
///
/// Stat fields keep the page's printed text verbatim, so non-values stay as
/// `"-"` rather than becoming options. `series` is a sorted set because the
/// same printing can be listed under several series pages. `id0` is the
/// stable dataset id: once assigned it never changes, and cards scraped in
/// the current run but not yet numbered simply omit the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub code: String,
    pub rarity: String,
    pub role: String,
    pub name: String,
    pub cost: String,
    pub life: String,
    pub attribute: String,
    pub power: String,
    pub counter: String,
    pub block: String,
    #[serde(default)]
    pub color: Vec<String>,
    #[serde(default)]
    pub feature: Vec<String>,
    pub image_url: String,
    #[serde(default)]
    pub parallel: Parallel,
    #[serde(default)]
    pub series: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id0: Option<u64>,
}

impl Card {
    /// Identity key used to recognize the same printing across runs and
    /// across series pages: set code, image URL with reprint markers
    /// stripped, and the parallel flag.
    pub fn identity_key(&self) -> String {
        format!(
            "{}_{}_{}",
            self.code,
            normalize_image_url(&self.image_url),
            self.parallel
        )
    }
}

/// Strips the `_r1` reprint marker so a reprint resolves to the same
/// identity as the original printing.
pub fn normalize_image_url(url: &str) -> String {
    url.replace("_r1", "")
}
