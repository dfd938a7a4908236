use iso_currency::Currency;

use crate::{entities::EngineConfig, errors::LedgerError};

// RON form of the engine configuration. Every field is optional and falls
// back to the built-in defaults.
#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default)]
pub(crate) struct EngineConfigModel {
    pub currency: Option<String>,
    pub residual_warn_threshold: Option<f64>,
}

impl TryFrom<EngineConfigModel> for EngineConfig {
    type Error = LedgerError;
    fn try_from(model: EngineConfigModel) -> Result<Self, Self::Error> {
        let defaults = EngineConfig::default();
        let currency = match model.currency {
            Some(code) => Currency::from_code(&code)
                .ok_or(LedgerError::InvalidIsoCurrencyCode { code })?,
            None => defaults.currency,
        };
        Ok(EngineConfig {
            currency,
            residual_warn_threshold: model
                .residual_warn_threshold
                .unwrap_or(defaults.residual_warn_threshold),
        })
    }
}
