use super::{movement::MovementId, order::OrderId, sub_order::SubOrderId};

// Soft findings surfaced alongside derivation output. An inconsistent ledger
// still produces a (degraded) result, never an abort.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerWarning {
    OrphanSubOrder {
        sub_order_id: SubOrderId,
        order_id: OrderId,
    },
    OrphanMovement {
        movement_id: MovementId,
    },
    UnmatchedDirectMovement {
        movement_id: MovementId,
        sub_order_id: SubOrderId,
    },
    ZeroWorkingTotal {
        order_id: OrderId,
    },
    UndistributedResidual {
        order_id: OrderId,
        amount: f64,
    },
    UnknownDesiredMovement {
        movement_id: MovementId,
    },
    UnknownBudgetTarget {
        sub_order_id: SubOrderId,
    },
}

impl std::fmt::Display for LedgerWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerWarning::OrphanSubOrder { sub_order_id, order_id } => write!(
                f,
                "Sub-order '{}' references order '{}', which is not present in the snapshot. Skipped.",
                sub_order_id, order_id
            ),
            LedgerWarning::OrphanMovement { movement_id } => write!(
                f,
                "Movement '{}' references a sub-order or order that is not present in the snapshot. Skipped.",
                movement_id
            ),
            LedgerWarning::UnmatchedDirectMovement { movement_id, sub_order_id } => write!(
                f,
                "Movement '{}' is recorded against sub-order '{}', which does not belong to the order being attributed. Skipped.",
                movement_id, sub_order_id
            ),
            LedgerWarning::ZeroWorkingTotal { order_id } => write!(
                f,
                "Order '{}' has a zero total working amount: global movements cannot be prorated and were left unattributed.",
                order_id
            ),
            LedgerWarning::UndistributedResidual { order_id, amount } => write!(
                f,
                "Order '{}' has {:.2} of payments that could not be attributed to any sub-order.",
                order_id, amount
            ),
            LedgerWarning::UnknownDesiredMovement { movement_id } => write!(
                f,
                "Desired movement '{}' is not marked as new but does not match any persisted movement. Skipped.",
                movement_id
            ),
            LedgerWarning::UnknownBudgetTarget { sub_order_id } => write!(
                f,
                "Budget assigned to sub-order '{}', which does not belong to the order being edited. Skipped.",
                sub_order_id
            ),
        }
    }
}
