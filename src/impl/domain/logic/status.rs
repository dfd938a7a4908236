use crate::entities::{BillingMode, OrderAttribution, OrderTotals, SubOrder, TaskStatus};

// Guards full-payment comparisons against float dust from proration.
const EPSILON: f64 = 1e-9;

/// Derives one sub-order's lifecycle status from the attributed amounts and
/// the order-level aggregates. Status is computed fresh on every snapshot;
/// the stored field is only a cache.
///
/// The billing mode decides which scope counts as evidence that invoicing
/// has started: the sub-order itself under per-task billing, the whole
/// order under global billing. An unset mode falls back to per-task
/// evidence, which only matters for snapshots where money moved before the
/// mode was fixed.
pub fn derive_status(
    sub_order: &SubOrder,
    attribution: &OrderAttribution,
    order_working_total: f64,
    order_totals: &OrderTotals,
    billing_mode: Option<BillingMode>,
) -> TaskStatus {
    let attributed_invoiced = attribution.invoiced_for(&sub_order.id);
    let attributed_paid = attribution.paid_for(&sub_order.id);

    let collected_by_task =
        sub_order.working_amount > 0.0 && attributed_paid + EPSILON >= sub_order.working_amount;
    // A fully-paid order marks every task collected even if per-task
    // attribution is imperfect.
    let collected_by_order =
        order_working_total > 0.0 && order_totals.total_paid + EPSILON >= order_working_total;
    if collected_by_task || collected_by_order {
        return TaskStatus::Collected;
    }

    let invoicing_started = match billing_mode {
        Some(BillingMode::Global) => {
            order_totals.total_invoiced > 0.0 || order_totals.total_paid > 0.0
        }
        Some(BillingMode::PerTask) | None => attributed_invoiced > 0.0 || attributed_paid > 0.0,
    };
    if invoicing_started {
        TaskStatus::Invoiced
    } else {
        TaskStatus::Pending
    }
}
