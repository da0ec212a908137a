//! Data directory persistence tests.

mod common;

use optcg_data::models::Card;
use optcg_data::store::{load_json, save_json};
use tempfile::tempdir;

// ---------------------------------------------------------------------------
// load_json
// ---------------------------------------------------------------------------

#[test]
fn missing_file_loads_as_none() {
    let tmp = tempdir().unwrap();
    let loaded: Option<Vec<Card>> = load_json(&tmp.path().join("cards.json")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn corrupt_file_is_an_error_and_is_left_in_place() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("cards.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result: optcg_data::Result<Option<Vec<Card>>> = load_json(&path);
    assert!(result.is_err());
    assert!(path.exists());
}

// ---------------------------------------------------------------------------
// save_json
// ---------------------------------------------------------------------------

#[test]
fn saved_cards_load_back_unchanged() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("cards.json");
    let cards = vec![common::sample_card("OP01-025"), common::sample_card("OP01-016")];

    save_json(&path, &cards).unwrap();
    let loaded: Vec<Card> = load_json(&path).unwrap().unwrap();
    assert_eq!(loaded, cards);
}

#[test]
fn save_creates_missing_parent_directories() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("Card_Data").join("Onepeace_Cards").join("cards.json");

    save_json(&path, &vec![common::sample_card("OP01-025")]).unwrap();
    assert!(path.exists());
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("cards.json");

    save_json(&path, &vec![common::sample_card("OP01-025")]).unwrap();
    assert!(!tmp.path().join("cards.json.tmp").exists());
}

#[test]
fn output_is_pretty_printed_with_readable_japanese() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("cards.json");
    let mut card = common::sample_card("OP01-025");
    card.name = "ロロノア・ゾロ".to_string();

    save_json(&path, &vec![card]).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("ロロノア・ゾロ"));
    assert!(contents.contains("\n  "));
}

#[test]
fn unnumbered_cards_serialize_without_an_id_field() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("cards.json");

    let mut card = common::sample_card("OP01-025");
    save_json(&path, &vec![card.clone()]).unwrap();
    assert!(!std::fs::read_to_string(&path).unwrap().contains("id0"));

    card.id0 = Some(7);
    save_json(&path, &vec![card]).unwrap();
    assert!(std::fs::read_to_string(&path).unwrap().contains("\"id0\": 7"));
}
