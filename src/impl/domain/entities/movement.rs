use chrono::NaiveDate;

use super::{order::OrderId, sub_order::SubOrderId};

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct MovementId(pub(crate) String);

// A movement is tied to exactly one of the two, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovementScope {
    SubOrder(SubOrderId),
    Order(OrderId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinancialMovement {
    pub id: MovementId,
    pub scope: MovementScope,
    // All value fields are independently optional: an invoice can be
    // recorded before payment, or a payment without invoice metadata.
    pub invoice_number: Option<String>,
    pub invoice_date: Option<NaiveDate>,
    pub invoice_amount: Option<f64>,
    pub payment_date: Option<NaiveDate>,
    pub paid_amount: Option<f64>,
}

// Shorthand constructors.

pub fn movement_id(id: impl Into<String>) -> MovementId {
    MovementId(id.into())
}

// --

impl MovementScope {
    pub fn sub_order_id(&self) -> Option<&SubOrderId> {
        match self {
            MovementScope::SubOrder(id) => Some(id),
            MovementScope::Order(_) => None,
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, MovementScope::Order(_))
    }
}

impl FinancialMovement {
    pub fn has_invoice_data(&self) -> bool {
        self.invoice_number.is_some()
            || self.invoice_date.is_some()
            || self.invoice_amount.is_some()
    }

    pub fn has_payment_data(&self) -> bool {
        self.payment_date.is_some() || self.paid_amount.is_some()
    }
}

impl std::fmt::Display for MovementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
