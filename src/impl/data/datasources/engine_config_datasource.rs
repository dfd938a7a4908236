use async_trait::async_trait;
use ron::from_str;

use crate::{
    data::models::engine_config_model::EngineConfigModel, entities::EngineConfig, errors::Result,
};

#[async_trait]
pub(crate) trait EngineConfigDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<EngineConfig>;

    async fn from_file<P>(&self, path: P) -> Result<EngineConfig>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct EngineConfigDatasourceImpl;

impl EngineConfigDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EngineConfigDatasource for EngineConfigDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<EngineConfig> {
        let model: EngineConfigModel = from_str(s)?;
        model.try_into()
    }

    async fn from_file<P>(&self, path: P) -> Result<EngineConfig>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_string(&tokio::fs::read_to_string(path).await?)
    }
}
