//! Price page extraction.
//!
//! The buylist price page is a client-rendered app; the listings are not in
//! the visible markup but in the JSON state blob embedded in the
//! `__NEXT_DATA__` script tag. Unlike card extraction, any shape problem
//! here fails the whole snapshot: a partially read price table would write
//! silent gaps into the history.

use scraper::{Html, Selector};
use serde::Deserialize;

use crate::error::{HarvestError, Result};
use crate::models::PriceObservation;

/// Markers recognized inside the free-text variant description, in the
/// order their tags are appended to the listing id.
const EXTRA_TAGS: &[&str] = &["未開封", "チャンピオンシップ", "プロモ", "パラレル"];

/// One listing as it appears in the embedded state blob. Unknown keys are
/// ignored; `extra_difference` is absent for plain listings.
#[derive(Debug, Deserialize)]
struct PriceRecord {
    name: String,
    rarity: String,
    color: String,
    model_number: String,
    #[serde(default)]
    extra_difference: String,
    amount: i64,
}

/// Parse the price page into the current snapshot of listings.
pub fn extract_observations(html: &str) -> Result<Vec<PriceObservation>> {
    let document = Html::parse_document(html);
    let script_sel = Selector::parse("script#__NEXT_DATA__").expect("selector is valid");

    let script = document.select(&script_sel).next().ok_or_else(|| {
        HarvestError::Payload("price page has no embedded data script".to_string())
    })?;
    let raw = script.text().collect::<String>();

    let data: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|e| HarvestError::Payload(format!("embedded data is not valid JSON: {}", e)))?;

    let items = data
        .get("props")
        .and_then(|v| v.get("pageProps"))
        .and_then(|v| v.get("items"))
        .and_then(|v| v.as_array())
        .ok_or_else(|| {
            HarvestError::Payload("embedded data has no props.pageProps.items list".to_string())
        })?;

    let mut observations = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let record: PriceRecord = serde_json::from_value(item.clone()).map_err(|e| {
            HarvestError::Payload(format!("price item {} has unexpected shape: {}", idx, e))
        })?;
        observations.push(PriceObservation {
            priceid: build_priceid(&record),
            price: record.amount,
        });
    }

    Ok(observations)
}

/// Compose the stable listing id: name and rarity first, then one bracketed
/// tag per recognized variant marker, then color and model number when the
/// page provides them.
fn build_priceid(record: &PriceRecord) -> String {
    let mut id = format!("{} 【{}】", record.name, record.rarity);
    for tag in EXTRA_TAGS.iter().copied() {
        if record.extra_difference.contains(tag) {
            id.push_str(&format!("【{}】", tag));
        }
    }
    if !record.color.is_empty() {
        id.push_str(&format!("【{}】", record.color));
    }
    if !record.model_number.is_empty() {
        id.push_str(&format!("【{}】", record.model_number));
    }
    id
}
