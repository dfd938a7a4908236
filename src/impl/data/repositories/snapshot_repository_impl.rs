use async_trait::async_trait;

use crate::{
    data::datasources::{
        movements_csv_datasource::{MovementsCsvDatasource, MovementsCsvDatasourceImpl},
        orders_csv_datasource::{OrdersCsvDatasource, OrdersCsvDatasourceImpl},
        snapshot_json_datasource::{SnapshotJsonDatasource, SnapshotJsonDatasourceImpl},
        sub_orders_csv_datasource::{SubOrdersCsvDatasource, SubOrdersCsvDatasourceImpl},
    },
    domain::repositories::snapshot_repository::SnapshotRepository,
    entities::LedgerSnapshot,
    errors::Result,
};

pub(crate) struct SnapshotRepositoryImpl<
    DS1 = OrdersCsvDatasourceImpl,    // Default.
    DS2 = SubOrdersCsvDatasourceImpl, // Default.
    DS3 = MovementsCsvDatasourceImpl, // Default.
    DS4 = SnapshotJsonDatasourceImpl, // Default.
> where
    DS1: OrdersCsvDatasource,
    DS2: SubOrdersCsvDatasource,
    DS3: MovementsCsvDatasource,
    DS4: SnapshotJsonDatasource,
{
    orders_datasource: DS1,
    sub_orders_datasource: DS2,
    movements_datasource: DS3,
    snapshot_datasource: DS4,
}

#[async_trait]
impl<DS1, DS2, DS3, DS4> SnapshotRepository for SnapshotRepositoryImpl<DS1, DS2, DS3, DS4>
where
    DS1: OrdersCsvDatasource + Send + Sync,
    DS2: SubOrdersCsvDatasource + Send + Sync,
    DS3: MovementsCsvDatasource + Send + Sync,
    DS4: SnapshotJsonDatasource + Send + Sync,
{
    fn from_csv_strings(
        &self,
        orders_csv: &str,
        sub_orders_csv: &str,
        movements_csv: &str,
    ) -> Result<LedgerSnapshot> {
        Ok(LedgerSnapshot {
            orders: self.orders_datasource.from_string(orders_csv)?,
            sub_orders: self.sub_orders_datasource.from_string(sub_orders_csv)?,
            movements: self.movements_datasource.from_string(movements_csv)?,
        })
    }

    fn from_json_string(&self, snapshot_json: &str) -> Result<LedgerSnapshot> {
        self.snapshot_datasource.from_string(snapshot_json)
    }

    async fn from_csv_files<P>(
        &self,
        orders_csv: P,
        sub_orders_csv: P,
        movements_csv: P,
    ) -> Result<LedgerSnapshot>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let (orders, sub_orders, movements) = futures::try_join!(
            tokio::fs::read_to_string(orders_csv),
            tokio::fs::read_to_string(sub_orders_csv),
            tokio::fs::read_to_string(movements_csv),
        )?;
        self.from_csv_strings(&orders, &sub_orders, &movements)
    }

    async fn from_json_file<P>(&self, snapshot_json: P) -> Result<LedgerSnapshot>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_json_string(&tokio::fs::read_to_string(snapshot_json).await?)
    }
}

impl SnapshotRepositoryImpl {
    pub(crate) fn new() -> Self {
        SnapshotRepositoryImpl {
            orders_datasource: OrdersCsvDatasourceImpl::new(),
            sub_orders_datasource: SubOrdersCsvDatasourceImpl::new(),
            movements_datasource: MovementsCsvDatasourceImpl::new(),
            snapshot_datasource: SnapshotJsonDatasourceImpl::new(),
        }
    }
}
