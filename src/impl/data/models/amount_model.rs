use std::str::FromStr;

use crate::errors::LedgerError;

// Accepts plain numbers, thousands separators, and accounting-style
// parenthesized negatives: "1,234.50", "(300)".
#[derive(Debug)]
pub(crate) struct AmountModel(pub f64);

impl FromStr for AmountModel {
    type Err = LedgerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(",", "");
        let is_negative = raw.trim().starts_with("(") && raw.trim().ends_with(")");
        let numeric_part = raw.trim().trim_matches(|c| c == '(' || c == ')');
        let amount = numeric_part
            .parse::<f64>()
            .map_err(|_| LedgerError::InvalidAmount {
                value: s.to_string(),
            })?;
        Ok(AmountModel(if is_negative { -amount } else { amount }))
    }
}

impl Into<f64> for AmountModel {
    fn into(self) -> f64 {
        self.0
    }
}
