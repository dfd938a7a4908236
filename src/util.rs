use crate::{
    data::datasources::engine_config_datasource::{
        EngineConfigDatasource as _, EngineConfigDatasourceImpl,
    },
    domain::usecases::{
        derive_usecase::{DeriveUsecase as _, DeriveUsecaseImpl},
        plan_usecase::{PlanUsecase as _, PlanUsecaseImpl},
    },
    entities::{
        DerivedLedger, EditRequest, EngineConfig, LedgerSnapshot, LedgerWarning, MutationBatch,
        OrderId,
    },
    errors::Result,
    presentation::summary_printer::SummaryPrinter,
};

pub type Summary = String;

pub struct CommercialLedgerUtil {
    derive_usecase: DeriveUsecaseImpl,
    plan_usecase: PlanUsecaseImpl,
    printer: SummaryPrinter,
}

impl CommercialLedgerUtil {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            printer: SummaryPrinter::new(config.currency),
            derive_usecase: DeriveUsecaseImpl::with_config(config),
            plan_usecase: PlanUsecaseImpl::new(),
        }
    }

    pub fn from_config_string(config_ron: &str) -> Result<Self> {
        Ok(Self::with_config(
            EngineConfigDatasourceImpl::new().from_string(config_ron)?,
        ))
    }

    pub async fn from_config_file<T>(config_ron: T) -> Result<Self>
    where
        T: AsRef<std::path::Path> + Send,
    {
        Ok(Self::with_config(
            EngineConfigDatasourceImpl::new().from_file(config_ron).await?,
        ))
    }

    /// Pure derivation over an already-loaded snapshot.
    pub fn derive(&self, snapshot: &LedgerSnapshot) -> DerivedLedger {
        self.derive_usecase.derive(snapshot)
    }

    pub fn from_csv_strings(
        &self,
        orders_csv: &str,
        sub_orders_csv: &str,
        movements_csv: &str,
    ) -> Result<(LedgerSnapshot, DerivedLedger, Summary)> {
        let (snapshot, derived) =
            self.derive_usecase
                .derive_from_csv_strings(orders_csv, sub_orders_csv, movements_csv)?;
        let summary = self.printer.print_summary(&snapshot, &derived);
        Ok((snapshot, derived, summary))
    }

    pub fn from_json_string(
        &self,
        snapshot_json: &str,
    ) -> Result<(LedgerSnapshot, DerivedLedger, Summary)> {
        let (snapshot, derived) = self.derive_usecase.derive_from_json_string(snapshot_json)?;
        let summary = self.printer.print_summary(&snapshot, &derived);
        Ok((snapshot, derived, summary))
    }

    pub async fn from_csv_files<T>(
        &self,
        orders_csv: T,
        sub_orders_csv: T,
        movements_csv: T,
    ) -> Result<(LedgerSnapshot, DerivedLedger, Summary)>
    where
        T: AsRef<std::path::Path> + Send,
    {
        let (snapshot, derived) = self
            .derive_usecase
            .derive_from_csv_files(orders_csv, sub_orders_csv, movements_csv)
            .await?;
        let summary = self.printer.print_summary(&snapshot, &derived);
        Ok((snapshot, derived, summary))
    }

    pub async fn from_json_file<T>(
        &self,
        snapshot_json: T,
    ) -> Result<(LedgerSnapshot, DerivedLedger, Summary)>
    where
        T: AsRef<std::path::Path> + Send,
    {
        let (snapshot, derived) = self
            .derive_usecase
            .derive_from_json_file(snapshot_json)
            .await?;
        let summary = self.printer.print_summary(&snapshot, &derived);
        Ok((snapshot, derived, summary))
    }

    /// Turns one order's bulk edit into the mutation batch to apply.
    pub fn plan(
        &self,
        snapshot: &LedgerSnapshot,
        order_id: &OrderId,
        edit: &EditRequest,
    ) -> Result<(MutationBatch, Vec<LedgerWarning>)> {
        self.plan_usecase.plan(snapshot, order_id, edit)
    }

    pub fn print_summary(&self, snapshot: &LedgerSnapshot, derived: &DerivedLedger) -> Summary {
        self.printer.print_summary(snapshot, derived)
    }
}

impl Default for CommercialLedgerUtil {
    fn default() -> Self {
        Self::new()
    }
}
