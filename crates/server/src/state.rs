use std::sync::Arc;

use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use service::genes::repo::seaorm::{SeaOrmGeneStore, SeaOrmTranscriptStore};
use service::genes::repository::memory::{InMemoryGeneStore, InMemoryTranscriptStore};
use service::genes::GeneWorkflow;
use tracing::info;

use crate::errors::StartupError;

#[derive(Clone)]
pub struct ServerState {
    pub genes: GeneWorkflow,
}

impl ServerState {
    pub fn new(genes: GeneWorkflow) -> Self {
        Self { genes }
    }

    /// Empty in-memory stores; nothing survives a restart.
    pub fn in_memory() -> Self {
        Self::new(GeneWorkflow::new(
            Arc::new(InMemoryGeneStore::new()),
            Arc::new(InMemoryTranscriptStore::new()),
        ))
    }

    /// Wire the workflow to the configured backend.
    pub async fn from_config(cfg: &AppConfig) -> Result<Self, StartupError> {
        match cfg.storage.backend {
            StorageBackend::Memory => {
                info!(backend = "memory", "gene storage initialized");
                Ok(Self::in_memory())
            }
            StorageBackend::Postgres => {
                let db_cfg = models::db::DatabaseConfig::from(&cfg.database);
                let db = models::db::connect_with_config(&db_cfg)
                    .await
                    .map_err(|e| StartupError::Storage(e.to_string()))?;
                if cfg.database.auto_migrate {
                    migration::Migrator::up(&db, None)
                        .await
                        .map_err(|e| StartupError::Storage(format!("migrate up: {e}")))?;
                    info!("database migrations applied");
                }
                info!(backend = "postgres", "gene storage initialized");
                Ok(Self::new(GeneWorkflow::new(
                    Arc::new(SeaOrmGeneStore { db: db.clone() }),
                    Arc::new(SeaOrmTranscriptStore { db }),
                )))
            }
        }
    }
}
