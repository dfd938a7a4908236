use crate::{
    data::models::snapshot_doc_model::SnapshotDocModel, entities::LedgerSnapshot, errors::Result,
};

pub(crate) trait SnapshotJsonDatasource {
    fn from_string(&self, s: &str) -> Result<LedgerSnapshot>;
}

pub(crate) struct SnapshotJsonDatasourceImpl;

impl SnapshotJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl SnapshotJsonDatasource for SnapshotJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<LedgerSnapshot> {
        let doc: SnapshotDocModel = serde_json::from_str(s)?;
        doc.try_into()
    }
}
