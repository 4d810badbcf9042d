//! Currency conversion through a USD base rate table
//!
//! Unlike the lookups, an unknown code is reported back as an error record so
//! the model can retry with a supported code.

use std::sync::LazyLock;

use serde::Serialize;

use super::lookup::LookupTable;
use super::normalize::normalize_code;

/// Units of each currency per one USD
static RATES: LazyLock<LookupTable<f64>> = LazyLock::new(|| {
    LookupTable::from_entries(
        normalize_code,
        [
            ("USD", 1.0),
            ("EUR", 0.92),
            ("GBP", 0.79),
            ("NGN", 1580.0),
            ("KES", 129.0),
            ("JPY", 149.0),
            ("CAD", 1.36),
            ("AUD", 1.52),
        ],
    )
});

/// A successful conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub original_amount: f64,
    pub from_currency: String,
    pub converted_amount: f64,
    pub to_currency: String,
    pub exchange_rate: f64,
}

/// Error record for a code outside the rate table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnsupportedCurrency {
    pub error: String,
    pub original_amount: f64,
    pub from_currency: String,
    pub to_currency: String,
}

/// Supported codes in table order
pub fn supported_currencies() -> Vec<&'static str> {
    RATES.keys().collect()
}

/// Round half up to `places` decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor + 0.5).floor() / factor
}

/// Convert `amount` between two currency codes.
///
/// A NaN amount is carried through and serializes as `null`.
pub fn convert_currency(amount: f64, from: &str, to: &str) -> Result<Conversion, UnsupportedCurrency> {
    let from_currency = normalize_code(from);
    let to_currency = normalize_code(to);

    let (Some(from_rate), Some(to_rate)) = (RATES.get(&[from]), RATES.get(&[to])) else {
        log::warn!("Unsupported currency pair {} -> {}", from_currency, to_currency);
        return Err(UnsupportedCurrency {
            error: format!("Currency not supported. Supported: {}", supported_currencies().join(", ")),
            original_amount: amount,
            from_currency,
            to_currency,
        });
    };

    let amount_in_usd = amount / from_rate;
    let converted = amount_in_usd * to_rate;

    Ok(Conversion {
        original_amount: amount,
        from_currency,
        converted_amount: round_to(converted, 2),
        to_currency,
        exchange_rate: round_to(to_rate / from_rate, 4),
    })
}
