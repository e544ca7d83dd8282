use sea_orm::DatabaseConnection;
use serde_json::Value;

use models::errors::ModelError;
use models::{gene, transcript};

use crate::genes::domain::{attributes_from_json, Criteria, Gene, GeneRequest, Transcript};
use crate::genes::errors::GeneError;
use crate::genes::repository::{GeneStore, TranscriptStore};

/// Postgres-backed gene store. Name uniqueness is enforced by the `gene.name` unique index.
#[derive(Clone)]
pub struct SeaOrmGeneStore {
    pub db: DatabaseConnection,
}

/// Postgres-backed transcript store. The NM number is the primary key.
#[derive(Clone)]
pub struct SeaOrmTranscriptStore {
    pub db: DatabaseConnection,
}

fn to_gene(m: gene::Model) -> Gene {
    Gene { name: m.name, nm_number: m.nm_number, attributes: attributes_from_json(m.attributes) }
}

fn to_transcript(m: transcript::Model) -> Transcript {
    Transcript { nm_number: m.nm_number, gene_name: m.gene_name, attributes: attributes_from_json(m.attributes) }
}

#[async_trait::async_trait]
impl GeneStore for SeaOrmGeneStore {
    async fn list(&self) -> Result<Vec<Gene>, GeneError> {
        let rows = gene::list(&self.db).await?;
        Ok(rows.into_iter().map(to_gene).collect())
    }

    async fn find(&self, criteria: &GeneRequest) -> Result<Option<Gene>, GeneError> {
        let found = match criteria.criteria() {
            Criteria::Name(name) => gene::find_by_name(&self.db, name).await?,
            Criteria::NmNumber(nm) => gene::find_by_nm_number(&self.db, nm).await?,
            Criteria::Nothing => None,
        };
        Ok(found.map(to_gene))
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Gene>, GeneError> {
        Ok(gene::find_by_name(&self.db, name).await?.map(to_gene))
    }

    async fn insert(&self, g: Gene) -> Result<Gene, GeneError> {
        let created = gene::create(&self.db, &g.name, &g.nm_number, Value::Object(g.attributes))
            .await
            .map_err(|e| match e {
                ModelError::Duplicate(_) => GeneError::GeneNameAlreadyExists,
                other => other.into(),
            })?;
        Ok(to_gene(created))
    }

    async fn update(&self, g: Gene) -> Result<Option<Gene>, GeneError> {
        let updated = gene::update_by_name(&self.db, &g.name, &g.nm_number, Value::Object(g.attributes)).await?;
        Ok(updated.map(to_gene))
    }

    async fn delete(&self, name: &str) -> Result<bool, GeneError> {
        Ok(gene::delete_by_name(&self.db, name).await?)
    }
}

#[async_trait::async_trait]
impl TranscriptStore for SeaOrmTranscriptStore {
    async fn get(&self, nm_number: &str) -> Result<Option<Transcript>, GeneError> {
        Ok(transcript::find(&self.db, nm_number).await?.map(to_transcript))
    }

    async fn insert(&self, t: Transcript) -> Result<Transcript, GeneError> {
        let created = transcript::create(&self.db, &t.nm_number, t.gene_name.as_deref(), Value::Object(t.attributes))
            .await
            .map_err(|e| match e {
                ModelError::Duplicate(_) => GeneError::TranscriptAlreadyExists,
                other => other.into(),
            })?;
        Ok(to_transcript(created))
    }

    async fn delete_by_gene(&self, gene_name: &str) -> Result<u64, GeneError> {
        Ok(transcript::delete_by_gene(&self.db, gene_name).await?)
    }
}
