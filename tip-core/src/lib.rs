pub mod calculations;
pub mod currency;
pub mod models;
pub mod parse;

pub use calculations::tip::{calculate_tip, calculate_tip_amount};
pub use currency::{CurrencyError, CurrencyFormat, CurrencyLocale};
pub use models::*;
pub use parse::{ParseAmountError, parse_amount, try_parse_amount};
