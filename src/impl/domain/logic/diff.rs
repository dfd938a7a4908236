use std::collections::{HashMap, HashSet};

use crate::entities::{
    FinancialMovement, LedgerWarning, MovementDraft, MovementId, MovementPlan,
};

pub struct PlanOutcome {
    pub plan: MovementPlan,
    pub warnings: Vec<LedgerWarning>,
}

/// Partitions an edited movement set against the persisted one into the
/// create/update/delete operations the store needs to apply.
///
/// Every persisted id lands in exactly one of update or delete, or in
/// neither when the row came back untouched. Drafts marked transient become
/// creates with their caller-assigned id stripped; a draft that is neither
/// transient nor matching any persisted id is skipped with a warning.
pub fn plan_movements(original: &[&FinancialMovement], desired: &[MovementDraft]) -> PlanOutcome {
    let by_id: HashMap<&MovementId, &FinancialMovement> =
        original.iter().map(|m| (&m.id, *m)).collect();

    let mut plan = MovementPlan::default();
    let mut warnings = Vec::new();
    let mut seen: HashSet<&MovementId> = HashSet::new();

    for draft in desired {
        if draft.transient {
            plan.create.push(draft.clone().into());
            continue;
        }
        match by_id.get(&draft.id) {
            None => warnings.push(LedgerWarning::UnknownDesiredMovement {
                movement_id: draft.id.clone(),
            }),
            Some(existing) => {
                seen.insert(&draft.id);
                if !same_values(existing, draft) {
                    plan.update.push(draft.clone().into());
                }
            }
        }
    }

    for movement in original {
        if !seen.contains(&movement.id) {
            plan.delete.push(movement.id.clone());
        }
    }

    PlanOutcome { plan, warnings }
}

// The comparable fields are the five value fields. Scope is not part of the
// edit surface; a row never moves between orders or sub-orders.
fn same_values(movement: &FinancialMovement, draft: &MovementDraft) -> bool {
    movement.invoice_number == draft.invoice_number
        && movement.invoice_date == draft.invoice_date
        && movement.invoice_amount == draft.invoice_amount
        && movement.payment_date == draft.payment_date
        && movement.paid_amount == draft.paid_amount
}
