use iso_currency::Currency;

// Reporting knobs. Config never alters derivation semantics, only how
// results are rendered and which residuals get flagged.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub currency: Currency,
    // Undistributed payment residual above this absolute amount is
    // surfaced as a warning.
    pub residual_warn_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            currency: Currency::EUR,
            residual_warn_threshold: 0.01,
        }
    }
}
