use std::collections::HashMap;

use crate::entities::{
    FinancialMovement, LedgerWarning, MovementScope, OrderAttribution, OrderId, SubOrder,
    SubOrderId,
};

pub struct AttributionOutcome {
    pub attribution: OrderAttribution,
    pub warnings: Vec<LedgerWarning>,
}

struct FoldState {
    invoiced: HashMap<SubOrderId, f64>,
    paid: HashMap<SubOrderId, f64>,
    residual_invoiced: f64,
    residual_paid: f64,
    warnings: Vec<LedgerWarning>,
    zero_working_flagged: bool,
}

#[derive(Default)]
struct Transformation {
    invoiced_deltas: Vec<(SubOrderId, f64)>,
    paid_deltas: Vec<(SubOrderId, f64)>,
    residual_invoiced: f64,
    residual_paid: f64,
    warnings: Vec<LedgerWarning>,
    zero_working_flagged: bool,
}

impl FoldState {
    fn new(sub_orders: &[&SubOrder]) -> Self {
        Self {
            invoiced: sub_orders.iter().map(|s| (s.id.clone(), 0.0)).collect(),
            paid: sub_orders.iter().map(|s| (s.id.clone(), 0.0)).collect(),
            residual_invoiced: 0.0,
            residual_paid: 0.0,
            warnings: Vec::new(),
            zero_working_flagged: false,
        }
    }

    /// Update current state with the given transformation.
    fn step(self, t: Transformation) -> Self {
        let mut invoiced = self.invoiced;
        let mut paid = self.paid;
        let mut warnings = self.warnings;

        for (id, delta) in t.invoiced_deltas {
            *invoiced.entry(id).or_insert(0.0) += delta;
        }
        for (id, delta) in t.paid_deltas {
            *paid.entry(id).or_insert(0.0) += delta;
        }
        warnings.extend(t.warnings);

        Self {
            invoiced,
            paid,
            residual_invoiced: self.residual_invoiced + t.residual_invoiced,
            residual_paid: self.residual_paid + t.residual_paid,
            warnings,
            zero_working_flagged: self.zero_working_flagged || t.zero_working_flagged,
        }
    }

    fn into_outcome(self) -> AttributionOutcome {
        AttributionOutcome {
            attribution: OrderAttribution {
                invoiced: self.invoiced,
                paid: self.paid,
                residual_invoiced: self.residual_invoiced,
                residual_paid: self.residual_paid,
            },
            warnings: self.warnings,
        }
    }
}

/// Attributes every movement touching one order across that order's
/// sub-orders.
///
/// Direct movements count in full towards their own sub-order and are
/// applied first. Global movements are then prorated in insertion order:
/// invoice amounts by working-amount share, paid amounts by each
/// sub-order's currently outstanding balance, recomputed per movement and
/// capped so no sub-order is ever attributed more payment than it has
/// outstanding. Whatever a cap leaves undistributed lands in the residual
/// fields instead of rolling over.
pub fn allocate(sub_orders: &[&SubOrder], movements: &[&FinancialMovement]) -> AttributionOutcome {
    let after_direct =
        movements
            .iter()
            .fold(FoldState::new(sub_orders), |state, movement| {
                match &movement.scope {
                    MovementScope::SubOrder(sub_order_id) => {
                        let t = transform_direct(&state, sub_order_id, movement);
                        state.step(t)
                    }
                    MovementScope::Order(_) => state,
                }
            });

    let after_global = movements
        .iter()
        .fold(after_direct, |state, movement| match &movement.scope {
            MovementScope::Order(order_id) => {
                let t = transform_global(&state, sub_orders, order_id, movement);
                state.step(t)
            }
            MovementScope::SubOrder(_) => state,
        });

    after_global.into_outcome()
}

fn transform_direct(
    state: &FoldState,
    sub_order_id: &SubOrderId,
    movement: &FinancialMovement,
) -> Transformation {
    if !state.invoiced.contains_key(sub_order_id) {
        return Transformation {
            warnings: vec![LedgerWarning::UnmatchedDirectMovement {
                movement_id: movement.id.clone(),
                sub_order_id: sub_order_id.clone(),
            }],
            ..Default::default()
        };
    }

    let mut t = Transformation::default();
    if let Some(amount) = movement.invoice_amount {
        t.invoiced_deltas.push((sub_order_id.clone(), amount));
    }
    if let Some(amount) = movement.paid_amount {
        t.paid_deltas.push((sub_order_id.clone(), amount));
    }
    t
}

fn transform_global(
    state: &FoldState,
    sub_orders: &[&SubOrder],
    order_id: &OrderId,
    movement: &FinancialMovement,
) -> Transformation {
    let mut t = Transformation::default();
    let total_working: f64 = sub_orders.iter().map(|s| s.working_amount).sum();

    if !(total_working > 0.0) {
        // Nothing to prorate against. The amounts are kept observable as
        // residual instead of being guessed onto some sub-order.
        if let Some(invoice) = movement.invoice_amount {
            t.residual_invoiced += invoice;
        }
        if let Some(pay) = movement.paid_amount {
            t.residual_paid += pay;
        }
        if !state.zero_working_flagged
            && (movement.invoice_amount.is_some() || movement.paid_amount.is_some())
        {
            t.warnings.push(LedgerWarning::ZeroWorkingTotal {
                order_id: order_id.clone(),
            });
            t.zero_working_flagged = true;
        }
        return t;
    }

    if let Some(invoice) = movement.invoice_amount {
        for sub in sub_orders {
            t.invoiced_deltas
                .push((sub.id.clone(), invoice * sub.working_amount / total_working));
        }
    }

    if let Some(pay) = movement.paid_amount {
        // Outstanding balance per sub-order, given everything attributed so
        // far (direct payments and earlier global movements).
        let outstanding: Vec<(SubOrderId, f64)> = sub_orders
            .iter()
            .map(|s| {
                let paid_so_far = state.paid.get(&s.id).copied().unwrap_or(0.0);
                (s.id.clone(), (s.working_amount - paid_so_far).max(0.0))
            })
            .collect();
        let total_outstanding: f64 = outstanding.iter().map(|(_, o)| o).sum();

        if total_outstanding > 0.0 {
            let mut distributed = 0.0;
            for (id, open) in outstanding {
                if open <= 0.0 {
                    continue;
                }
                let attributed = (pay * open / total_outstanding).min(open);
                distributed += attributed;
                t.paid_deltas.push((id, attributed));
            }
            t.residual_paid += (pay - distributed).max(0.0);
        } else {
            t.residual_paid += pay;
        }
    }

    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{movement_id, order_id, sub_order_id, TaskStatus};

    fn sub(id: &str, working: f64) -> SubOrder {
        SubOrder {
            id: sub_order_id(id),
            order_id: order_id("o1"),
            sequence: 1,
            unit: "Unit".to_string(),
            budgeted_amount: None,
            working_amount: working,
            status: TaskStatus::Pending,
        }
    }

    fn global(id: &str, invoice: Option<f64>, paid: Option<f64>) -> FinancialMovement {
        FinancialMovement {
            id: movement_id(id),
            scope: MovementScope::Order(order_id("o1")),
            invoice_number: None,
            invoice_date: None,
            invoice_amount: invoice,
            payment_date: None,
            paid_amount: paid,
        }
    }

    fn direct(id: &str, sub: &str, invoice: Option<f64>, paid: Option<f64>) -> FinancialMovement {
        FinancialMovement {
            id: movement_id(id),
            scope: MovementScope::SubOrder(sub_order_id(sub)),
            invoice_number: None,
            invoice_date: None,
            invoice_amount: invoice,
            payment_date: None,
            paid_amount: paid,
        }
    }

    #[test]
    fn global_invoice_prorated_by_working_amount() {
        let (a, b) = (sub("a", 600.0), sub("b", 400.0));
        let m = global("m1", Some(1000.0), Some(500.0));

        let outcome = allocate(&[&a, &b], &[&m]);
        let attribution = outcome.attribution;

        assert!((attribution.invoiced_for(&sub_order_id("a")) - 600.0).abs() < 1e-9);
        assert!((attribution.invoiced_for(&sub_order_id("b")) - 400.0).abs() < 1e-9);
        assert!((attribution.paid_for(&sub_order_id("a")) - 300.0).abs() < 1e-9);
        assert!((attribution.paid_for(&sub_order_id("b")) - 200.0).abs() < 1e-9);
        assert!(attribution.residual_paid.abs() < 1e-9);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn direct_movements_count_in_full() {
        let (a, b) = (sub("a", 600.0), sub("b", 400.0));
        let m = direct("m1", "a", Some(250.0), Some(100.0));

        let outcome = allocate(&[&a, &b], &[&m]);
        let attribution = outcome.attribution;

        assert!((attribution.invoiced_for(&sub_order_id("a")) - 250.0).abs() < 1e-9);
        assert!((attribution.paid_for(&sub_order_id("a")) - 100.0).abs() < 1e-9);
        assert!(attribution.invoiced_for(&sub_order_id("b")).abs() < 1e-9);
        assert!(attribution.paid_for(&sub_order_id("b")).abs() < 1e-9);
    }

    #[test]
    fn payment_prorated_by_outstanding_balance_after_direct_payment() {
        let (a, b) = (sub("a", 100.0), sub("b", 100.0));
        // Direct payment closes half of a's balance before the global
        // payment is distributed, regardless of row order.
        let m_global = global("m1", None, Some(150.0));
        let m_direct = direct("m2", "a", None, Some(50.0));

        let outcome = allocate(&[&a, &b], &[&m_global, &m_direct]);
        let attribution = outcome.attribution;

        // Outstanding at distribution time: a = 50, b = 100.
        assert!((attribution.paid_for(&sub_order_id("a")) - (50.0 + 50.0)).abs() < 1e-9);
        assert!((attribution.paid_for(&sub_order_id("b")) - 100.0).abs() < 1e-9);
        assert!(attribution.residual_paid.abs() < 1e-9);
    }

    #[test]
    fn payment_capped_at_outstanding_balance() {
        let (a, b) = (sub("a", 100.0), sub("b", 100.0));
        let m_direct = direct("m1", "a", None, Some(100.0));
        let m_global = global("m2", None, Some(150.0));

        let outcome = allocate(&[&a, &b], &[&m_direct, &m_global]);
        let attribution = outcome.attribution;

        // a is already fully paid; b can absorb at most 100 of the 150.
        assert!((attribution.paid_for(&sub_order_id("a")) - 100.0).abs() < 1e-9);
        assert!((attribution.paid_for(&sub_order_id("b")) - 100.0).abs() < 1e-9);
        assert!((attribution.residual_paid - 50.0).abs() < 1e-9);
    }

    #[test]
    fn residual_never_rolls_over_to_later_movements() {
        let a = sub("a", 100.0);
        let m1 = global("m1", None, Some(150.0));
        let m2 = global("m2", None, Some(30.0));

        let outcome = allocate(&[&a], &[&m1, &m2]);
        let attribution = outcome.attribution;

        // m1 fills the balance and strands 50; m2 finds nothing outstanding
        // and is stranded whole.
        assert!((attribution.paid_for(&sub_order_id("a")) - 100.0).abs() < 1e-9);
        assert!((attribution.residual_paid - 80.0).abs() < 1e-9);
    }

    #[test]
    fn zero_working_total_leaves_amounts_as_residual() {
        let (a, b) = (sub("a", 0.0), sub("b", 0.0));
        let m = global("m1", Some(500.0), Some(200.0));

        let outcome = allocate(&[&a, &b], &[&m]);
        let attribution = outcome.attribution;

        assert!(attribution.invoiced_for(&sub_order_id("a")).abs() < 1e-9);
        assert!(attribution.invoiced_for(&sub_order_id("b")).abs() < 1e-9);
        assert!((attribution.residual_invoiced - 500.0).abs() < 1e-9);
        assert!((attribution.residual_paid - 200.0).abs() < 1e-9);
        assert_eq!(
            outcome.warnings,
            vec![LedgerWarning::ZeroWorkingTotal {
                order_id: order_id("o1")
            }]
        );
    }

    #[test]
    fn zero_working_total_flagged_once() {
        let a = sub("a", 0.0);
        let m1 = global("m1", Some(100.0), None);
        let m2 = global("m2", Some(200.0), None);

        let outcome = allocate(&[&a], &[&m1, &m2]);

        assert_eq!(outcome.warnings.len(), 1);
        assert!((outcome.attribution.residual_invoiced - 300.0).abs() < 1e-9);
    }

    #[test]
    fn direct_movement_for_foreign_sub_order_is_skipped_with_warning() {
        let a = sub("a", 100.0);
        let m = direct("m1", "elsewhere", Some(50.0), None);

        let outcome = allocate(&[&a], &[&m]);

        assert!(outcome.attribution.total_invoiced().abs() < 1e-9);
        assert_eq!(
            outcome.warnings,
            vec![LedgerWarning::UnmatchedDirectMovement {
                movement_id: movement_id("m1"),
                sub_order_id: sub_order_id("elsewhere"),
            }]
        );
    }

    #[test]
    fn paid_attribution_never_exceeds_working_amount() {
        let (a, b, c) = (sub("a", 300.0), sub("b", 200.0), sub("c", 0.0));
        let movements = [
            global("m1", Some(500.0), Some(200.0)),
            global("m2", None, Some(200.0)),
            global("m3", None, Some(400.0)),
        ];
        let refs: Vec<&FinancialMovement> = movements.iter().collect();

        let outcome = allocate(&[&a, &b, &c], &refs);
        let attribution = outcome.attribution;

        for s in [&a, &b, &c] {
            assert!(attribution.paid_for(&s.id) <= s.working_amount + 1e-9);
        }
    }

    #[test]
    fn paid_amounts_are_conserved_including_residual() {
        let (a, b) = (sub("a", 300.0), sub("b", 200.0));
        let movements = [
            direct("m1", "a", None, Some(120.0)),
            global("m2", None, Some(250.0)),
            global("m3", None, Some(300.0)),
        ];
        let refs: Vec<&FinancialMovement> = movements.iter().collect();

        let outcome = allocate(&[&a, &b], &refs);
        let attribution = outcome.attribution;

        let total_in: f64 = 120.0 + 250.0 + 300.0;
        let total_out = attribution.total_paid() + attribution.residual_paid;
        assert!((total_in - total_out).abs() < 1e-9);
    }

    #[test]
    fn no_movements_yields_zeroed_maps() {
        let (a, b) = (sub("a", 600.0), sub("b", 400.0));

        let outcome = allocate(&[&a, &b], &[]);
        let attribution = outcome.attribution;

        assert_eq!(attribution.invoiced.len(), 2);
        assert_eq!(attribution.paid.len(), 2);
        assert!(attribution.total_invoiced().abs() < 1e-9);
        assert!(attribution.total_paid().abs() < 1e-9);
    }
}
