use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::{
    data::repositories::snapshot_repository_impl::SnapshotRepositoryImpl,
    domain::{
        logic::{
            aggregator::aggregate,
            allocator::allocate,
            status::derive_status,
            utils::{index_snapshot, working_total, SnapshotIndex},
        },
        repositories::snapshot_repository::SnapshotRepository,
    },
    entities::{DerivedLedger, EngineConfig, LedgerSnapshot, LedgerWarning},
    errors::Result,
};

#[async_trait]
pub trait DeriveUsecase: Send + Sync {
    /// Computes attribution, totals and statuses for a whole snapshot.
    /// Deterministic, no IO; re-invoke whenever the snapshot changes.
    fn derive(&self, snapshot: &LedgerSnapshot) -> DerivedLedger;

    fn derive_from_csv_strings(
        &self,
        orders_csv: &str,
        sub_orders_csv: &str,
        movements_csv: &str,
    ) -> Result<(LedgerSnapshot, DerivedLedger)>;

    fn derive_from_json_string(&self, snapshot_json: &str) -> Result<(LedgerSnapshot, DerivedLedger)>;

    async fn derive_from_csv_files<P>(
        &self,
        orders_csv: P,
        sub_orders_csv: P,
        movements_csv: P,
    ) -> Result<(LedgerSnapshot, DerivedLedger)>
    where
        P: AsRef<std::path::Path> + Send;

    async fn derive_from_json_file<P>(&self, snapshot_json: P) -> Result<(LedgerSnapshot, DerivedLedger)>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct DeriveUsecaseImpl<
    R = SnapshotRepositoryImpl, // Default.
> where
    R: SnapshotRepository,
{
    snapshot_repository: R,
    config: EngineConfig,
}

#[async_trait]
impl<R> DeriveUsecase for DeriveUsecaseImpl<R>
where
    R: SnapshotRepository,
{
    fn derive(&self, snapshot: &LedgerSnapshot) -> DerivedLedger {
        let SnapshotIndex {
            orders,
            sub_orders_by_order,
            movements_by_order,
            mut warnings,
        } = index_snapshot(snapshot);

        let mut attributions = HashMap::new();
        let mut totals = HashMap::new();
        let mut statuses = HashMap::new();

        for order in orders {
            let subs = sub_orders_by_order
                .get(&order.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let movements = movements_by_order
                .get(&order.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);

            let outcome = allocate(subs, movements);
            let order_totals = aggregate(movements);
            let total_working = working_total(subs);

            for sub in subs {
                statuses.insert(
                    sub.id.clone(),
                    derive_status(
                        sub,
                        &outcome.attribution,
                        total_working,
                        &order_totals,
                        order.billing_mode,
                    ),
                );
            }

            debug!(
                order = %order.order_number,
                invoiced = order_totals.total_invoiced,
                paid = order_totals.total_paid,
                residual_paid = outcome.attribution.residual_paid,
                "Derived order aggregates"
            );

            warnings.extend(outcome.warnings);
            if outcome.attribution.residual_paid > self.config.residual_warn_threshold {
                warnings.push(LedgerWarning::UndistributedResidual {
                    order_id: order.id.clone(),
                    amount: outcome.attribution.residual_paid,
                });
            }

            attributions.insert(order.id.clone(), outcome.attribution);
            totals.insert(order.id.clone(), order_totals);
        }

        for warning in &warnings {
            warn!("{warning}");
        }
        info!(
            orders = snapshot.orders.len(),
            sub_orders = snapshot.sub_orders.len(),
            movements = snapshot.movements.len(),
            warnings = warnings.len(),
            "Ledger derivation complete"
        );

        DerivedLedger {
            attributions,
            totals,
            statuses,
            warnings,
        }
    }

    fn derive_from_csv_strings(
        &self,
        orders_csv: &str,
        sub_orders_csv: &str,
        movements_csv: &str,
    ) -> Result<(LedgerSnapshot, DerivedLedger)> {
        let snapshot =
            self.snapshot_repository
                .from_csv_strings(orders_csv, sub_orders_csv, movements_csv)?;
        let derived = self.derive(&snapshot);
        Ok((snapshot, derived))
    }

    fn derive_from_json_string(&self, snapshot_json: &str) -> Result<(LedgerSnapshot, DerivedLedger)> {
        let snapshot = self.snapshot_repository.from_json_string(snapshot_json)?;
        let derived = self.derive(&snapshot);
        Ok((snapshot, derived))
    }

    async fn derive_from_csv_files<P>(
        &self,
        orders_csv: P,
        sub_orders_csv: P,
        movements_csv: P,
    ) -> Result<(LedgerSnapshot, DerivedLedger)>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let snapshot = self
            .snapshot_repository
            .from_csv_files(orders_csv, sub_orders_csv, movements_csv)
            .await?;
        let derived = self.derive(&snapshot);
        Ok((snapshot, derived))
    }

    async fn derive_from_json_file<P>(&self, snapshot_json: P) -> Result<(LedgerSnapshot, DerivedLedger)>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let snapshot = self.snapshot_repository.from_json_file(snapshot_json).await?;
        let derived = self.derive(&snapshot);
        Ok((snapshot, derived))
    }
}

impl DeriveUsecaseImpl {
    pub(crate) fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub(crate) fn with_config(config: EngineConfig) -> Self {
        DeriveUsecaseImpl {
            snapshot_repository: SnapshotRepositoryImpl::new(),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        movement_id, order_id, sub_order_id, BillingMode, FinancialMovement, MovementScope, Order,
        SubOrder, TaskStatus,
    };

    fn order(id: &str, quoted: f64, mode: Option<BillingMode>) -> Order {
        Order {
            id: order_id(id),
            order_number: format!("2024-{id}"),
            client: "Client".to_string(),
            quoted_amount: quoted,
            billing_mode: mode,
            director: "D".to_string(),
            executive: "E".to_string(),
            observations: None,
        }
    }

    fn sub(id: &str, order: &str, working: f64) -> SubOrder {
        SubOrder {
            id: sub_order_id(id),
            order_id: order_id(order),
            sequence: 1,
            unit: "Unit".to_string(),
            budgeted_amount: None,
            working_amount: working,
            status: TaskStatus::Pending,
        }
    }

    fn global(id: &str, order: &str, invoice: Option<f64>, paid: Option<f64>) -> FinancialMovement {
        FinancialMovement {
            id: movement_id(id),
            scope: MovementScope::Order(order_id(order)),
            invoice_number: None,
            invoice_date: None,
            invoice_amount: invoice,
            payment_date: None,
            paid_amount: paid,
        }
    }

    #[test]
    fn derives_attribution_totals_and_statuses_for_a_global_order() {
        let snapshot = LedgerSnapshot {
            orders: vec![order("o1", 1000.0, Some(BillingMode::Global))],
            sub_orders: vec![sub("a", "o1", 600.0), sub("b", "o1", 400.0)],
            movements: vec![global("m1", "o1", Some(1000.0), Some(500.0))],
        };

        let derived = DeriveUsecaseImpl::new().derive(&snapshot);

        let attribution = &derived.attributions[&order_id("o1")];
        assert!((attribution.invoiced_for(&sub_order_id("a")) - 600.0).abs() < 1e-9);
        assert!((attribution.invoiced_for(&sub_order_id("b")) - 400.0).abs() < 1e-9);
        assert!((attribution.paid_for(&sub_order_id("a")) - 300.0).abs() < 1e-9);
        assert!((attribution.paid_for(&sub_order_id("b")) - 200.0).abs() < 1e-9);

        let totals = &derived.totals[&order_id("o1")];
        assert!((totals.total_invoiced - 1000.0).abs() < 1e-9);
        assert!((totals.total_paid - 500.0).abs() < 1e-9);

        assert_eq!(derived.status_of(&sub_order_id("a")), Some(TaskStatus::Invoiced));
        assert_eq!(derived.status_of(&sub_order_id("b")), Some(TaskStatus::Invoiced));
        assert!(derived.warnings.is_empty());
    }

    #[test]
    fn orphans_are_reported_but_do_not_abort_the_rest() {
        let snapshot = LedgerSnapshot {
            orders: vec![order("o1", 1000.0, Some(BillingMode::Global))],
            sub_orders: vec![sub("a", "o1", 600.0), sub("stray", "missing", 100.0)],
            movements: vec![global("m1", "o1", Some(300.0), None)],
        };

        let derived = DeriveUsecaseImpl::new().derive(&snapshot);

        assert_eq!(derived.status_of(&sub_order_id("a")), Some(TaskStatus::Invoiced));
        assert!(derived.status_of(&sub_order_id("stray")).is_none());
        assert_eq!(derived.warnings.len(), 1);
    }

    #[test]
    fn residual_above_threshold_is_flagged() {
        let snapshot = LedgerSnapshot {
            orders: vec![order("o1", 100.0, Some(BillingMode::Global))],
            sub_orders: vec![sub("a", "o1", 100.0)],
            movements: vec![global("m1", "o1", None, Some(175.0))],
        };

        let derived = DeriveUsecaseImpl::new().derive(&snapshot);

        assert!(derived.warnings.iter().any(|w| matches!(
            w,
            LedgerWarning::UndistributedResidual { amount, .. } if (amount - 75.0).abs() < 1e-9
        )));
    }
}
