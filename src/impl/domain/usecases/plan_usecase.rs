use std::collections::HashSet;

use tracing::{debug, warn};

use crate::{
    domain::logic::{
        aggregator::aggregate,
        allocator::allocate,
        diff::plan_movements,
        reconcile::reconcile,
        status::derive_status,
        utils::{index_snapshot, working_total},
    },
    entities::{
        BudgetPatch, EditRequest, FinancialMovement, LedgerSnapshot, LedgerWarning, MovementId,
        MovementPlan, MutationBatch, OrderId, OrderPatch, StatusPatch,
    },
    errors::{LedgerError, Result},
};

pub trait PlanUsecase: Send + Sync {
    /// Turns one order's bulk edit into the mutation batch the store needs
    /// to apply. Rejects mode switches on locked orders and budget splits
    /// that do not reconcile; produces status patches for every sub-order
    /// whose derived status would change under the edited movement set.
    fn plan(
        &self,
        snapshot: &LedgerSnapshot,
        order_id: &OrderId,
        edit: &EditRequest,
    ) -> Result<(MutationBatch, Vec<LedgerWarning>)>;
}

pub(crate) struct PlanUsecaseImpl;

impl PlanUsecase for PlanUsecaseImpl {
    fn plan(
        &self,
        snapshot: &LedgerSnapshot,
        order_id: &OrderId,
        edit: &EditRequest,
    ) -> Result<(MutationBatch, Vec<LedgerWarning>)> {
        let index = index_snapshot(snapshot);
        let order = index
            .orders
            .iter()
            .find(|o| o.id == *order_id)
            .ok_or_else(|| LedgerError::UnknownOrder {
                order_id: order_id.to_string(),
            })?;
        let subs = index.sub_orders_of(order_id);
        let stored_movements = index.movements_of(order_id);

        let mut warnings = Vec::new();
        let mut batch = MutationBatch {
            order_id: order_id.clone(),
            order_patch: OrderPatch::default(),
            budget_patches: Vec::new(),
            status_patches: Vec::new(),
            movements: MovementPlan::default(),
        };

        if let Some(requested) = edit.billing_mode {
            match order.billing_mode {
                Some(current) if current == requested => {}
                None if stored_movements.is_empty() => {
                    batch.order_patch.billing_mode = Some(requested);
                }
                // Set, or unset but with money already moved: permanent.
                _ => {
                    return Err(LedgerError::BillingModeLocked {
                        order_number: order.order_number.clone(),
                    })
                }
            }
        }

        if let Some(text) = &edit.observations {
            if order.observations.as_deref() != Some(text.as_str()) {
                batch.order_patch.observations = Some(text.clone());
            }
        }

        if let Some(reallocation) = &edit.budgets {
            let amounts: Vec<f64> = reallocation.budgets.iter().map(|(_, a)| *a).collect();
            let check = reconcile(reallocation.quoted_amount, &amounts);
            if !check.reconciles {
                return Err(LedgerError::BudgetOutOfTolerance {
                    quoted: reallocation.quoted_amount,
                    allocated: amounts.iter().sum(),
                    difference: check.difference,
                });
            }
            if reallocation.quoted_amount != order.quoted_amount {
                batch.order_patch.quoted_amount = Some(reallocation.quoted_amount);
            }
            for (sub_order_id, amount) in &reallocation.budgets {
                match subs.iter().find(|s| s.id == *sub_order_id) {
                    Some(sub) if sub.budgeted_amount == Some(*amount) => {}
                    Some(_) => batch.budget_patches.push(BudgetPatch {
                        sub_order_id: sub_order_id.clone(),
                        budgeted_amount: *amount,
                    }),
                    None => warnings.push(LedgerWarning::UnknownBudgetTarget {
                        sub_order_id: sub_order_id.clone(),
                    }),
                }
            }
        }

        // The movement set statuses are derived on: the edited rows when the
        // edit touches movements, the stored rows otherwise.
        let virtual_movements: Vec<FinancialMovement> = match &edit.movements {
            Some(drafts) => {
                let outcome = plan_movements(stored_movements, drafts);
                let unknown: HashSet<&MovementId> = outcome
                    .warnings
                    .iter()
                    .filter_map(|w| match w {
                        LedgerWarning::UnknownDesiredMovement { movement_id } => Some(movement_id),
                        _ => None,
                    })
                    .collect();
                let virtuals = drafts
                    .iter()
                    .filter(|d| d.transient || !unknown.contains(&d.id))
                    .cloned()
                    .map(Into::into)
                    .collect();
                warnings.extend(outcome.warnings);
                batch.movements = outcome.plan;
                virtuals
            }
            None => stored_movements.iter().map(|m| (*m).clone()).collect(),
        };
        let movement_refs: Vec<&FinancialMovement> = virtual_movements.iter().collect();

        let outcome = allocate(subs, &movement_refs);
        let totals = aggregate(&movement_refs);
        let total_working = working_total(subs);
        let billing_mode = batch.order_patch.billing_mode.or(order.billing_mode);
        for sub in subs {
            let derived = derive_status(sub, &outcome.attribution, total_working, &totals, billing_mode);
            if derived != sub.status {
                batch.status_patches.push(StatusPatch {
                    sub_order_id: sub.id.clone(),
                    status: derived,
                });
            }
        }
        warnings.extend(outcome.warnings);

        debug!(
            order = %order.order_number,
            creates = batch.movements.create.len(),
            updates = batch.movements.update.len(),
            deletes = batch.movements.delete.len(),
            status_patches = batch.status_patches.len(),
            "Planned mutation batch"
        );
        for warning in &warnings {
            warn!("{warning}");
        }

        Ok((batch, warnings))
    }
}

impl PlanUsecaseImpl {
    pub(crate) fn new() -> Self {
        PlanUsecaseImpl
    }
}
