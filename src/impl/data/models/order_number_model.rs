use std::str::FromStr;

use regex::Regex;

use crate::errors::LedgerError;

// Sequence-assigned human-readable numbers: alphanumeric tokens joined by
// '-', '/' or '.', e.g. "2024-017" or "OC/24/102".
#[derive(Debug)]
pub(crate) struct OrderNumberModel(pub String);

impl FromStr for OrderNumberModel {
    type Err = LedgerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pattern = Regex::new(r"^[A-Za-z0-9]+([-/.][A-Za-z0-9]+)*$")
            .expect("hardcoded regex should be valid");
        if !pattern.is_match(s) {
            return Err(LedgerError::InvalidOrderNumber {
                value: s.to_string(),
            });
        }
        Ok(OrderNumberModel(s.to_string()))
    }
}

impl Into<String> for OrderNumberModel {
    fn into(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_shapes() {
        assert!(OrderNumberModel::from_str("2024-017").is_ok());
        assert!(OrderNumberModel::from_str("OC/24/102").is_ok());
        assert!(OrderNumberModel::from_str("A1.B2").is_ok());
    }

    #[test]
    fn rejects_empty_and_malformed_numbers() {
        assert!(OrderNumberModel::from_str("").is_err());
        assert!(OrderNumberModel::from_str("2024-").is_err());
        assert!(OrderNumberModel::from_str("20 24").is_err());
    }
}
