//! Card list page extraction.
//!
//! The official card list renders one `<dt>`/`<dd>` pair per printing: the
//! `<dt>` header carries code, rarity and role spans, and the following
//! `<dd>` holds the labeled stat sub-sections. Extraction is total over
//! whatever the page serves: malformed entries are skipped and missing
//! sub-sections become defaults, never errors.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::config;
use crate::models::{Card, Parallel};

/// Parse one card list page into card rows, in page order.
pub fn extract_cards(html: &str) -> Vec<Card> {
    let document = Html::parse_document(html);

    let dt_sel = sel("dt");
    let span_sel = sel("span");
    let name_sel = sel("div.cardName");
    let cost_sel = sel("div.cost");
    let attr_sel = sel("div.attribute img");
    let power_sel = sel("div.power");
    let counter_sel = sel("div.counter");
    let block_sel = sel("div.block");
    let color_sel = sel("div.color");
    let feature_sel = sel("div.feature");
    let image_sel = sel("div.frontCol img.lazy");

    let base = Url::parse(config::BASE_URL).expect("base URL is valid");
    let color_names = config::color_names();

    let mut cards = Vec::new();

    for dt in document.select(&dt_sel) {
        // Header spans: code, rarity, role. Anything without all three is
        // not a card entry.
        let mut spans = dt.select(&span_sel).map(text_of);
        let (Some(code), Some(rarity_raw), Some(role)) =
            (spans.next(), spans.next(), spans.next())
        else {
            continue;
        };
        let rarity = if rarity_raw == "SPカード" {
            "SP".to_string()
        } else {
            rarity_raw
        };

        // Card name sits next to the header spans, under the shared parent.
        let name = dt
            .parent()
            .and_then(ElementRef::wrap)
            .and_then(|parent| parent.select(&name_sel).next())
            .map(text_of)
            .unwrap_or_default();

        // Stats live in the following <dd>; a <dt> without one is a page
        // artifact, not a card.
        let Some(dd) = following_dd(dt) else {
            continue;
        };

        // The cost box is labeled either コスト (cost) or ライフ (life).
        // Leaders always have life 4 and no cost, whatever the box says.
        let cost_text = dd.select(&cost_sel).next().map(text_of).unwrap_or_default();
        let (cost, life) = if role == "LEADER" {
            ("-".to_string(), "4".to_string())
        } else if cost_text.contains("コスト") {
            (cost_text.replace("コスト", "").trim().to_string(), "-".to_string())
        } else {
            ("-".to_string(), cost_text.replace("ライフ", "").trim().to_string())
        };

        // Attribute comes from the icon's alt text; events have none.
        let attribute = if role == "EVENT" {
            "-".to_string()
        } else {
            dd.select(&attr_sel)
                .next()
                .and_then(|img| img.value().attr("alt"))
                .unwrap_or_default()
                .to_string()
        };

        let power = dd
            .select(&power_sel)
            .next()
            .map(|div| text_without(div, "h3"))
            .unwrap_or_default();

        let counter = dd
            .select(&counter_sel)
            .next()
            .map(|div| text_of(div).replace("カウンター", "").trim().to_string())
            .unwrap_or_default();

        let block: String = dd
            .select(&block_sel)
            .next()
            .map(|div| text_of(div).chars().filter(char::is_ascii_digit).collect())
            .unwrap_or_default();

        let color: Vec<String> = dd
            .select(&color_sel)
            .next()
            .map(|div| {
                text_of(div)
                    .replace('色', "")
                    .split('/')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(|c| color_names.get(c).copied().unwrap_or(c).to_string())
                    .collect()
            })
            .unwrap_or_default();

        let feature: Vec<String> = dd
            .select(&feature_sel)
            .next()
            .map(|div| {
                text_of(div)
                    .replace("特徴", "")
                    .replace('・', "/")
                    .split('/')
                    .map(str::trim)
                    .filter(|f| !f.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let (image_url, parallel) = dd
            .select(&image_sel)
            .next()
            .and_then(|img| img.value().attr("data-src"))
            .and_then(|src| resolve_image(&base, src))
            .unwrap_or_else(|| (String::new(), Parallel::Normal));

        cards.push(Card {
            code,
            rarity,
            role,
            name,
            cost,
            life,
            attribute,
            power,
            counter,
            block,
            color,
            feature,
            image_url,
            parallel,
            ..Card::default()
        });
    }

    cards
}

/// Resolve a lazy-loaded image path to an absolute URL.
///
/// The page uses relative `../` paths; those segments are dropped before
/// joining onto the site base. The `_p` parallel marker is checked on the
/// resolved URL while the cache-busting query string is still attached,
/// then the query is stripped from the stored URL.
fn resolve_image(base: &Url, data_src: &str) -> Option<(String, Parallel)> {
    let resolved = base.join(&data_src.replace("../", "")).ok()?;
    let parallel = if resolved.as_str().to_lowercase().contains("_p") {
        Parallel::Parallel
    } else {
        Parallel::Normal
    };
    let mut stored = resolved;
    stored.set_query(None);
    Some((stored.to_string(), parallel))
}

/// First following sibling that is a `<dd>` element.
fn following_dd(dt: ElementRef<'_>) -> Option<ElementRef<'_>> {
    dt.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "dd")
}

/// All descendant text, trimmed.
fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Descendant text, skipping direct children with the given tag name. Used
/// to drop the `<h3>` label baked into each stat box.
fn text_without(el: ElementRef<'_>, skip_tag: &str) -> String {
    let mut out = String::new();
    for child in el.children() {
        match ElementRef::wrap(child) {
            Some(child_el) if child_el.value().name() == skip_tag => {}
            Some(child_el) => out.push_str(&child_el.text().collect::<String>()),
            None => {
                if let Some(text) = child.value().as_text() {
                    out.push_str(text);
                }
            }
        }
    }
    out.trim().to_string()
}

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("selector is valid")
}
