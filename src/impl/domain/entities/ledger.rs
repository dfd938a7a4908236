use std::collections::HashMap;

use super::{
    attribution::OrderAttribution, movement::FinancialMovement, order::Order, order::OrderId,
    sub_order::SubOrder, sub_order::SubOrderId, sub_order::TaskStatus, totals::OrderTotals,
    warning::LedgerWarning,
};

// Before derivation.
// ---

// One atomic read of the three collections. Never a torn mix of pre- and
// post-update state.
#[derive(Debug, Clone, Default)]
pub struct LedgerSnapshot {
    pub orders: Vec<Order>,
    pub sub_orders: Vec<SubOrder>,
    pub movements: Vec<FinancialMovement>,
}

// After derivation.
// ---

#[derive(Debug, Clone, Default)]
pub struct DerivedLedger {
    pub attributions: HashMap<OrderId, OrderAttribution>,
    pub totals: HashMap<OrderId, OrderTotals>,
    pub statuses: HashMap<SubOrderId, TaskStatus>,
    pub warnings: Vec<LedgerWarning>,
}

impl DerivedLedger {
    pub fn status_of(&self, id: &SubOrderId) -> Option<TaskStatus> {
        self.statuses.get(id).copied()
    }
}
