use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    // IO-related.
    #[error("Error reading file: {0}.")]
    Read(#[from] std::io::Error),

    // Parsing-related.
    #[error("Invalid CSV format: {0}.")]
    InvalidCsv(#[from] csv::Error),
    #[error("Invalid CSV content: {details}.")]
    InvalidCsvContent { details: String },
    #[error("Invalid JSON snapshot: {0}.")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Invalid engine config (invalid RON format): {0}.")]
    InvalidRon(#[from] ron::error::SpannedError),
    #[error("Invalid ISO date: {date}.")]
    InvalidIsoDate { date: String },
    #[error("Invalid ISO currency code: {code}.")]
    InvalidIsoCurrencyCode { code: String },
    #[error("Invalid accounting amount: '{value}'.")]
    InvalidAmount { value: String },
    #[error("Invalid order number: '{value}'.")]
    InvalidOrderNumber { value: String },
    #[error("Invalid billing mode: '{value}'.")]
    InvalidBillingMode { value: String },
    #[error("Invalid task status: '{value}'.")]
    InvalidTaskStatus { value: String },
    #[error(
        "Movement '{movement_id}' references both a sub-order and an order. \
         A movement must be tied to exactly one of the two."
    )]
    MovementScopeConflict { movement_id: String },
    #[error(
        "Movement '{movement_id}' references neither a sub-order nor an order. \
         A movement must be tied to exactly one of the two."
    )]
    MovementScopeMissing { movement_id: String },

    // Mutation-planning rejections.
    #[error("Unknown order: '{order_id}'.")]
    UnknownOrder { order_id: String },
    #[error(
        "Billing mode of order '{order_number}' is locked: the mode is \
         permanent once set, or once any movement is recorded."
    )]
    BillingModeLocked { order_number: String },
    #[error(
        "Sub-order budgets ({allocated}) do not add up to the quoted amount \
         ({quoted}); difference is {difference}."
    )]
    BudgetOutOfTolerance {
        quoted: f64,
        allocated: f64,
        difference: f64,
    },
}

pub type Result<T> = std::result::Result<T, LedgerError>;
