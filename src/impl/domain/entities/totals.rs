use chrono::NaiveDate;

use super::movement::MovementId;

// Display-level snapshot of the most recent invoice recorded for an order.
// Movements without an invoice date never qualify.
#[derive(Debug, Clone, PartialEq)]
pub struct LatestInvoice {
    pub movement_id: MovementId,
    pub number: Option<String>,
    pub date: NaiveDate,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LatestPayment {
    pub movement_id: MovementId,
    pub date: NaiveDate,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderTotals {
    pub total_invoiced: f64,
    pub total_paid: f64,
    pub latest_invoice: Option<LatestInvoice>,
    pub latest_payment: Option<LatestPayment>,
}
