//! Tip arithmetic.
//!
//! All math is done in exact decimal arithmetic so that a 15% tip on
//! 33.33 is exactly 4.9995 before any rounding is applied.

pub mod common;
pub mod tip;

pub use tip::{calculate_tip, calculate_tip_amount};
