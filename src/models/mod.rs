pub mod card;
pub mod price;

pub use card::*;
pub use price::*;
