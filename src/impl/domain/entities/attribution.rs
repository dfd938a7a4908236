use std::collections::HashMap;

use super::sub_order::SubOrderId;

// Computed share of an order's movements assigned to each of its sub-orders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderAttribution {
    pub invoiced: HashMap<SubOrderId, f64>,
    pub paid: HashMap<SubOrderId, f64>,
    // Parts of global movements that could not be distributed (zero total
    // working amount, or a payment exceeding every outstanding balance).
    // Never rolled over into later movements.
    pub residual_invoiced: f64,
    pub residual_paid: f64,
}

impl OrderAttribution {
    pub fn invoiced_for(&self, id: &SubOrderId) -> f64 {
        self.invoiced.get(id).copied().unwrap_or(0.0)
    }

    pub fn paid_for(&self, id: &SubOrderId) -> f64 {
        self.paid.get(id).copied().unwrap_or(0.0)
    }

    pub fn total_invoiced(&self) -> f64 {
        self.invoiced.values().sum()
    }

    pub fn total_paid(&self) -> f64 {
        self.paid.values().sum()
    }
}
