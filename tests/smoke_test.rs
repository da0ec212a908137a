//! End-to-end smoke test against the live card list and buylist sites.
//!
//! Fetches one price snapshot and every series page, then checks the three
//! written artifacts against each other.
//!
//! Run with:
//! ```sh
//! cargo test -- --ignored --nocapture
//! ```

use optcg_data::models::{Card, HistoryEntry, LatestPrice};
use optcg_data::store;
use optcg_data::Harvester;
use tempfile::tempdir;

/// Print a section header to stderr.
fn section(name: &str) {
    eprintln!("\n{}", "=".repeat(60));
    eprintln!("  {}", name);
    eprintln!("{}", "=".repeat(60));
}

#[test]
#[ignore]
fn live_harvest_writes_all_three_artifacts() {
    let tmp = tempdir().unwrap();
    let harvester = Harvester::builder().data_dir(tmp.path()).build().unwrap();

    section("price snapshot");
    harvester.update_prices().unwrap();

    let history: Vec<HistoryEntry> = store::load_json(&harvester.history_path())
        .unwrap()
        .expect("C.json written");
    assert!(!history.is_empty());
    assert!(history.iter().all(|e| !e.price.is_empty()));
    eprintln!("  {} listings tracked", history.len());

    let latest: Vec<LatestPrice> = store::load_json(&harvester.latest_path())
        .unwrap()
        .expect("latestprice.json written");
    assert_eq!(latest.len(), history.len());
    assert!(latest
        .iter()
        .all(|l| l.stats.starts_with('+') || l.stats.starts_with('-')));
    eprintln!("  {} latest prices", latest.len());

    section("same-day rerun");
    harvester.update_prices().unwrap();
    let rerun: Vec<HistoryEntry> = store::load_json(&harvester.history_path())
        .unwrap()
        .unwrap();
    // Today's point is overwritten, not appended, so listings seen in both
    // snapshots keep their point count.
    for after in &rerun {
        if let Some(before) = history.iter().find(|e| e.priceid == after.priceid) {
            assert_eq!(before.price.len(), after.price.len(), "{}", after.priceid);
        }
    }

    section("card catalog");
    harvester.update_cards().unwrap();

    let cards: Vec<Card> = store::load_json(&harvester.cards_path())
        .unwrap()
        .expect("cards.json written");
    assert!(cards.len() > 1000, "only {} cards extracted", cards.len());
    assert!(cards.iter().all(|c| !c.code.is_empty()));
    assert!(cards.iter().all(|c| !c.series.is_empty()));
    assert!(cards.iter().all(|c| c.id0.is_some()));
    eprintln!("  {} cards in catalog", cards.len());

    section("catalog rerun");
    harvester.update_cards().unwrap();
    let recount: Vec<Card> = store::load_json(&harvester.cards_path())
        .unwrap()
        .unwrap();
    // Same pages, same catalog: the merge is idempotent and ids are stable.
    assert_eq!(recount.len(), cards.len());
    for (before, after) in cards.iter().zip(&recount) {
        assert_eq!(before.id0, after.id0);
        assert_eq!(before.identity_key(), after.identity_key());
    }
}
