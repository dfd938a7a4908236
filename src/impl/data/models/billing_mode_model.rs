use std::str::FromStr;

use crate::{entities::BillingMode, errors::LedgerError};

// Stored form of the billing mode, as the document store spells it.
#[derive(Debug)]
pub(crate) struct BillingModeModel(BillingMode);

impl FromStr for BillingModeModel {
    type Err = LedgerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perTask" => Ok(BillingModeModel(BillingMode::PerTask)),
            "global" => Ok(BillingModeModel(BillingMode::Global)),
            other => Err(LedgerError::InvalidBillingMode {
                value: other.to_string(),
            }),
        }
    }
}

impl Into<BillingMode> for BillingModeModel {
    fn into(self) -> BillingMode {
        self.0
    }
}
