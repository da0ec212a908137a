//! Page extraction: raw HTML in, typed rows out.
//!
//! Both extractors are pure functions over a fetched page body; fetching and
//! persistence live elsewhere.

pub mod cards;
pub mod prices;

pub use cards::extract_cards;
pub use prices::extract_observations;
