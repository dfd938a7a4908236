use crate::entities::{BudgetCheck, Order, SubOrder};

// Absolute tolerance for the budget gate.
pub const BUDGET_TOLERANCE: f64 = 0.01;

/// Checks that a candidate set of sub-order budgets adds up to the quoted
/// amount. Used purely as a gate at edit time; nothing is rebalanced
/// automatically, the caller re-prompts on a failed check.
pub fn reconcile(quoted_amount: f64, budgets: &[f64]) -> BudgetCheck {
    let allocated: f64 = budgets.iter().sum();
    let difference = quoted_amount - allocated;
    BudgetCheck {
        reconciles: difference.abs() <= BUDGET_TOLERANCE,
        difference,
    }
}

/// The budget to reckon with for one sub-order. Legacy records predate
/// per-sub-order budgets; when such an order has exactly one sub-order, the
/// order's quoted amount stands in for the missing budget. Nothing is
/// inferred for legacy orders with several sub-orders.
pub fn effective_budget(
    order: &Order,
    order_sub_count: usize,
    sub_order: &SubOrder,
) -> Option<f64> {
    match sub_order.budgeted_amount {
        Some(amount) => Some(amount),
        None if order_sub_count == 1 => Some(order.quoted_amount),
        None => None,
    }
}
