//! Helpers for display formatting and token unit conversion.

pub mod formatting;
pub mod units;

pub use formatting::{truncate_id, without_0x_prefix};
pub use units::{bps_to_percent, format_token_amount, format_units, parse_units, UnitsError};
