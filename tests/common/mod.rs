//! Shared fixtures for the harvester integration tests.
//!
//! Provides ready-made card records, date literals, and builders for the
//! two page shapes the extractors consume.
#![allow(dead_code)]

use chrono::NaiveDate;
use optcg_data::models::Card;

/// A plain CHARACTER card with the given code and a site-style image URL.
/// `series` and `id0` are left empty for the merge logic under test.
pub fn sample_card(code: &str) -> Card {
    sample_card_with_image(
        code,
        &format!(
            "https://www.onepiece-cardgame.com/images/cardlist/card/{}.png",
            code
        ),
    )
}

/// Same as [`sample_card`] but with an explicit image URL.
pub fn sample_card_with_image(code: &str, image_url: &str) -> Card {
    Card {
        code: code.to_string(),
        rarity: "R".to_string(),
        role: "CHARACTER".to_string(),
        name: format!("Card {}", code),
        cost: "3".to_string(),
        life: "-".to_string(),
        attribute: "斬".to_string(),
        power: "5000".to_string(),
        counter: "1000".to_string(),
        block: "1".to_string(),
        color: vec!["Red".to_string()],
        feature: vec!["麦わらの一味".to_string()],
        image_url: image_url.to_string(),
        ..Card::default()
    }
}

/// `YYYY-MM-DD` date literal.
pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// Wrap card entries in the surrounding card list page markup.
pub fn card_list_page(entries: &str) -> String {
    format!(
        "<html><body><div class=\"resultCol\">{}</div></body></html>",
        entries
    )
}

/// Wrap a `props.pageProps.items` value in a minimal price page document.
pub fn price_page(items: serde_json::Value) -> String {
    let state = serde_json::json!({
        "props": { "pageProps": { "items": items } }
    });
    format!(
        "<html><body><div id=\"__next\"></div>\
         <script id=\"__NEXT_DATA__\" type=\"application/json\">{}</script>\
         </body></html>",
        state
    )
}
