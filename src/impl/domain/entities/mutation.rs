use chrono::NaiveDate;

use super::{
    movement::{FinancialMovement, MovementId, MovementScope},
    order::{BillingMode, OrderId},
    sub_order::{SubOrderId, TaskStatus},
};

// Edit flow, input side.
// ---

// One movement row as the user wants it to end up. `transient` marks rows
// created locally in the editor; their caller-assigned id must not reach
// the store.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementDraft {
    pub id: MovementId,
    pub transient: bool,
    pub scope: MovementScope,
    pub invoice_number: Option<String>,
    pub invoice_date: Option<NaiveDate>,
    pub invoice_amount: Option<f64>,
    pub payment_date: Option<NaiveDate>,
    pub paid_amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetReallocation {
    pub quoted_amount: f64,
    pub budgets: Vec<(SubOrderId, f64)>,
}

// A bulk edit of one order. `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditRequest {
    pub billing_mode: Option<BillingMode>,
    pub observations: Option<String>,
    pub budgets: Option<BudgetReallocation>,
    pub movements: Option<Vec<MovementDraft>>,
}

// Edit flow, output side.
// ---

// Outcome of the budget gate. Callers reject the submission when
// `reconciles` is false; nothing is rebalanced automatically.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetCheck {
    pub reconciles: bool,
    // Quoted amount minus the sum of sub-order budgets.
    pub difference: f64,
}

// A locally-new movement, transient id stripped. The store assigns the
// persistent id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovement {
    pub scope: MovementScope,
    pub invoice_number: Option<String>,
    pub invoice_date: Option<NaiveDate>,
    pub invoice_amount: Option<f64>,
    pub payment_date: Option<NaiveDate>,
    pub paid_amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovementPlan {
    pub create: Vec<NewMovement>,
    pub update: Vec<FinancialMovement>,
    pub delete: Vec<MovementId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderPatch {
    pub billing_mode: Option<BillingMode>,
    pub observations: Option<String>,
    pub quoted_amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetPatch {
    pub sub_order_id: SubOrderId,
    pub budgeted_amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusPatch {
    pub sub_order_id: SubOrderId,
    pub status: TaskStatus,
}

// Everything one "save" action wants persisted. The store is expected to
// apply it atomically; the engine never performs writes itself.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationBatch {
    pub order_id: OrderId,
    pub order_patch: OrderPatch,
    pub budget_patches: Vec<BudgetPatch>,
    pub status_patches: Vec<StatusPatch>,
    pub movements: MovementPlan,
}

// --

impl MovementPlan {
    pub fn is_empty(&self) -> bool {
        self.create.is_empty() && self.update.is_empty() && self.delete.is_empty()
    }
}

impl OrderPatch {
    pub fn is_empty(&self) -> bool {
        self.billing_mode.is_none() && self.observations.is_none() && self.quoted_amount.is_none()
    }
}

impl MutationBatch {
    pub fn is_empty(&self) -> bool {
        self.order_patch.is_empty()
            && self.budget_patches.is_empty()
            && self.status_patches.is_empty()
            && self.movements.is_empty()
    }
}

// Easy conversion.

impl From<FinancialMovement> for MovementDraft {
    fn from(movement: FinancialMovement) -> Self {
        MovementDraft {
            id: movement.id,
            transient: false,
            scope: movement.scope,
            invoice_number: movement.invoice_number,
            invoice_date: movement.invoice_date,
            invoice_amount: movement.invoice_amount,
            payment_date: movement.payment_date,
            paid_amount: movement.paid_amount,
        }
    }
}

impl From<MovementDraft> for FinancialMovement {
    fn from(draft: MovementDraft) -> Self {
        FinancialMovement {
            id: draft.id,
            scope: draft.scope,
            invoice_number: draft.invoice_number,
            invoice_date: draft.invoice_date,
            invoice_amount: draft.invoice_amount,
            payment_date: draft.payment_date,
            paid_amount: draft.paid_amount,
        }
    }
}

impl From<MovementDraft> for NewMovement {
    fn from(draft: MovementDraft) -> Self {
        NewMovement {
            scope: draft.scope,
            invoice_number: draft.invoice_number,
            invoice_date: draft.invoice_date,
            invoice_amount: draft.invoice_amount,
            payment_date: draft.payment_date,
            paid_amount: draft.paid_amount,
        }
    }
}
