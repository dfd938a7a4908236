use crate::{
    entities::{order_id, sub_order_id, MovementScope},
    errors::LedgerError,
};

// Resolves the mutually-exclusive reference pair into a scope. Empty
// strings count as absent, matching how the store serializes unset fields.
pub(crate) fn movement_scope(
    movement_id: &str,
    sub_order_ref: Option<String>,
    order_ref: Option<String>,
) -> Result<MovementScope, LedgerError> {
    let sub_order_ref = sub_order_ref.filter(|s| !s.is_empty());
    let order_ref = order_ref.filter(|s| !s.is_empty());
    match (sub_order_ref, order_ref) {
        (Some(sub), None) => Ok(MovementScope::SubOrder(sub_order_id(sub))),
        (None, Some(order)) => Ok(MovementScope::Order(order_id(order))),
        (Some(_), Some(_)) => Err(LedgerError::MovementScopeConflict {
            movement_id: movement_id.to_string(),
        }),
        (None, None) => Err(LedgerError::MovementScopeMissing {
            movement_id: movement_id.to_string(),
        }),
    }
}
