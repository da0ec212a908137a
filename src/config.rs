use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

pub const BASE_URL: &str = "https://www.onepiece-cardgame.com/";
pub const PRICE_URL: &str = "https://www.cardrush-op.jp/price";

pub const CARDS_FILE: &str = "cards.json";
pub const HISTORY_FILE: &str = "C.json";
pub const LATEST_FILE: &str = "latestprice.json";

pub const USER_AGENT: &str = concat!("optcg-data/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Series table: (site-internal series number, official series code).
///
/// Order matters twice over: it is the order the card list pages are
/// fetched in, and through first-discovery it decides which new cards get
/// the lower `id0` values. Kept in the dataset's historical order.
pub const SERIES_CODES: &[(&str, &str)] = &[
    ("550101", "OP-01"),
    ("550102", "OP-02"),
    ("550103", "OP-03"),
    ("550104", "OP-04"),
    ("550105", "OP-05"),
    ("550106", "OP-06"),
    ("550107", "OP-07"),
    ("550108", "OP-08"),
    ("550109", "OP-09"),
    ("550110", "OP-10"),
    ("550111", "OP-11"),
    ("550112", "OP-12"),
    ("550113", "OP-13"),
    ("550001", "ST-01"),
    ("550002", "ST-02"),
    ("550003", "ST-03"),
    ("550004", "ST-04"),
    ("550005", "ST-05"),
    ("550006", "ST-06"),
    ("550007", "ST-07"),
    ("550008", "ST-08"),
    ("550009", "ST-09"),
    ("550010", "ST-10"),
    ("550011", "ST-11"),
    ("550012", "ST-12"),
    ("550013", "ST-13"),
    ("550014", "ST-14"),
    ("550015", "ST-15"),
    ("550016", "ST-16"),
    ("550017", "ST-17"),
    ("550018", "ST-18"),
    ("550019", "ST-19"),
    ("550020", "ST-20"),
    ("550021", "ST-21"),
    ("550022", "ST-22"),
    ("550023", "ST-23"),
    ("550024", "ST-24"),
    ("550701", "FAMILY"),
    ("550901", "PR"),
    ("550801", "LIMITED"),
    ("550302", "PRB-02"),
    ("550301", "PRB-01"),
    ("550202", "EB-02"),
    ("550201", "EB-01"),
];

/// Japanese color tokens as printed on the card list pages, mapped to the
/// English names used in the dataset. Unknown tokens pass through unchanged
/// at the point of use.
pub fn color_names() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("赤", "Red"),
        ("緑", "Green"),
        ("青", "Blue"),
        ("黄", "Yellow"),
        ("紫", "Purple"),
        ("黒", "Black"),
    ])
}

/// Card list page for one series.
pub fn card_list_url(series_id: &str) -> String {
    format!("{}cardlist/?series={}", BASE_URL, series_id)
}

pub fn default_data_dir() -> PathBuf {
    PathBuf::from("Card_Data").join("Onepeace_Cards")
}
