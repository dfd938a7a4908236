use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Format cash amount with currency symbol, correct number of decimal places,
/// and proper thousands separators. Rounds at the smallest currency unit.
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale or currency. Could be generalized in the future.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let sign = if amount < 0.0 { "-" } else { "" };
    if decimal_places == 0 {
        let rounded = (amount.abs().round() as i64).to_formatted_string(&Locale::en);
        format!("{}{} {}", sign, rounded, currency.symbol())
    } else {
        let scale = 10i64.pow(decimal_places as u32);
        let minor_units = (amount.abs() * scale as f64).round() as i64;
        let integer_part = (minor_units / scale).to_formatted_string(&Locale::en);
        format!(
            "{}{}.{:0decimal_places$} {}",
            sign,
            integer_part,
            minor_units % scale,
            currency.symbol(),
        )
    }
}
