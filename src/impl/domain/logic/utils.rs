use std::collections::HashMap;

use crate::entities::{
    FinancialMovement, LedgerSnapshot, LedgerWarning, MovementScope, Order, OrderId, SubOrder,
    SubOrderId,
};

// Snapshot regrouped per order. Dangling references are reported, never
// silently dropped, and the computation keeps going without them.
pub(crate) struct SnapshotIndex<'a> {
    pub orders: Vec<&'a Order>,
    pub sub_orders_by_order: HashMap<&'a OrderId, Vec<&'a SubOrder>>,
    pub movements_by_order: HashMap<&'a OrderId, Vec<&'a FinancialMovement>>,
    pub warnings: Vec<LedgerWarning>,
}

impl<'a> SnapshotIndex<'a> {
    pub fn sub_orders_of(&self, id: &OrderId) -> &[&'a SubOrder] {
        self.sub_orders_by_order
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn movements_of(&self, id: &OrderId) -> &[&'a FinancialMovement] {
        self.movements_by_order
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

pub(crate) fn index_snapshot(snapshot: &LedgerSnapshot) -> SnapshotIndex<'_> {
    let known: HashMap<&OrderId, &Order> =
        snapshot.orders.iter().map(|o| (&o.id, o)).collect();

    let mut sub_orders_by_order: HashMap<&OrderId, Vec<&SubOrder>> =
        snapshot.orders.iter().map(|o| (&o.id, Vec::new())).collect();
    let mut movements_by_order: HashMap<&OrderId, Vec<&FinancialMovement>> =
        snapshot.orders.iter().map(|o| (&o.id, Vec::new())).collect();
    let mut parent_of: HashMap<&SubOrderId, &OrderId> = HashMap::new();
    let mut warnings = Vec::new();

    for sub in &snapshot.sub_orders {
        match sub_orders_by_order.get_mut(&sub.order_id) {
            Some(bucket) => {
                bucket.push(sub);
                parent_of.insert(&sub.id, &sub.order_id);
            }
            None => warnings.push(LedgerWarning::OrphanSubOrder {
                sub_order_id: sub.id.clone(),
                order_id: sub.order_id.clone(),
            }),
        }
    }

    for movement in &snapshot.movements {
        let order_id = match &movement.scope {
            // A movement under an orphaned sub-order has no resolvable
            // order either; it cascades into the same skip.
            MovementScope::SubOrder(sub_order_id) => parent_of.get(sub_order_id).copied(),
            MovementScope::Order(order_id) => known.contains_key(order_id).then_some(order_id),
        };
        match order_id.and_then(|id| movements_by_order.get_mut(id)) {
            Some(bucket) => bucket.push(movement),
            None => warnings.push(LedgerWarning::OrphanMovement {
                movement_id: movement.id.clone(),
            }),
        }
    }

    SnapshotIndex {
        orders: snapshot.orders.iter().collect(),
        sub_orders_by_order,
        movements_by_order,
        warnings,
    }
}

pub(crate) fn working_total(sub_orders: &[&SubOrder]) -> f64 {
    sub_orders.iter().map(|s| s.working_amount).sum()
}
