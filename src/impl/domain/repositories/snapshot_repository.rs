use async_trait::async_trait;

use crate::{entities::LedgerSnapshot, errors::Result};

// The store side of the engine. Implementations must hand over one atomic
// snapshot per call.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    fn from_csv_strings(
        &self,
        orders_csv: &str,
        sub_orders_csv: &str,
        movements_csv: &str,
    ) -> Result<LedgerSnapshot>;

    fn from_json_string(&self, snapshot_json: &str) -> Result<LedgerSnapshot>;

    async fn from_csv_files<P>(
        &self,
        orders_csv: P,
        sub_orders_csv: P,
        movements_csv: P,
    ) -> Result<LedgerSnapshot>
    where
        P: AsRef<std::path::Path> + Send;

    async fn from_json_file<P>(&self, snapshot_json: P) -> Result<LedgerSnapshot>
    where
        P: AsRef<std::path::Path> + Send;
}
