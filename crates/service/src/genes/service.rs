use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use super::domain::{Gene, GeneRequest, Transcript};
use super::errors::GeneError;
use super::repository::{GeneStore, TranscriptStore};

/// Gene business service independent of web framework.
///
/// Create runs two read checks (NM number, then name) and then writes. The
/// writes are insert-if-absent in both stores, so concurrent creates cannot
/// both persist the same name or NM number even when both pass the checks.
#[derive(Clone)]
pub struct GeneWorkflow {
    genes: Arc<dyn GeneStore>,
    transcripts: Arc<dyn TranscriptStore>,
}

impl GeneWorkflow {
    pub fn new(genes: Arc<dyn GeneStore>, transcripts: Arc<dyn TranscriptStore>) -> Self {
        Self { genes, transcripts }
    }

    pub async fn list(&self) -> Result<Vec<Gene>, GeneError> {
        self.genes.list().await
    }

    /// Lookup by request criteria: by name when given, else by NM number.
    #[instrument(skip(self, criteria), fields(name = %criteria.name, nm_number = %criteria.nm_number))]
    pub async fn get(&self, criteria: &GeneRequest) -> Result<Option<Gene>, GeneError> {
        self.genes.find(criteria).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Gene>, GeneError> {
        self.genes.get_by_name(name).await
    }

    /// Create a gene after the uniqueness checks.
    ///
    /// The NM number check runs first, so when both conflicts hold the
    /// transcript conflict is reported.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::genes::{GeneWorkflow, GeneRequest, GeneError};
    /// use service::genes::repository::memory::{InMemoryGeneStore, InMemoryTranscriptStore};
    /// let wf = GeneWorkflow::new(Arc::new(InMemoryGeneStore::new()), Arc::new(InMemoryTranscriptStore::new()));
    /// let gene = tokio_test::block_on(wf.create(GeneRequest::new("BRCA1", "NM_007294"))).unwrap();
    /// assert_eq!(gene.name, "BRCA1");
    /// let again = tokio_test::block_on(wf.create(GeneRequest::new("BRCA1", "NM_999999")));
    /// assert_eq!(again, Err(GeneError::GeneNameAlreadyExists));
    /// ```
    #[instrument(skip(self, request), fields(name = %request.name, nm_number = %request.nm_number))]
    pub async fn create(&self, request: GeneRequest) -> Result<Gene, GeneError> {
        if let Some(existing) = self.transcripts.get(&request.nm_number).await? {
            debug!(owner = ?existing.gene_name, "nm number already claimed");
            info!(code = GeneError::TranscriptAlreadyExists.code(), "gene_create_rejected");
            return Err(GeneError::TranscriptAlreadyExists);
        }
        if self.genes.get_by_name(&request.name).await?.is_some() {
            info!(code = GeneError::GeneNameAlreadyExists.code(), "gene_create_rejected");
            return Err(GeneError::GeneNameAlreadyExists);
        }

        let gene = self.genes.insert(request.into_gene()).await?;
        if let Err(e) = self.transcripts.insert(Transcript::claimed_by(&gene)).await {
            // lost the NM number to a concurrent create; undo the gene insert
            warn!(error = %e, "transcript insert failed after gene insert; rolling back gene");
            if let Err(rollback) = self.genes.delete(&gene.name).await {
                error!(error = %rollback, "gene rollback failed");
            }
            return Err(e);
        }

        info!("gene_created");
        Ok(gene)
    }

    /// Pass-through update keyed by name. Uniqueness is not re-checked.
    ///
    /// When the NM number changes, the gene's transcript claim moves with it.
    /// A new NM number already claimed elsewhere leaves the gene unclaimed.
    #[instrument(skip(self, request), fields(name = %request.name, nm_number = %request.nm_number))]
    pub async fn update(&self, request: GeneRequest) -> Result<Option<Gene>, GeneError> {
        let previous = self.genes.get_by_name(&request.name).await?;
        let Some(updated) = self.genes.update(request.into_gene()).await? else {
            debug!("update target not found");
            return Ok(None);
        };

        if previous.is_some_and(|p| p.nm_number != updated.nm_number) {
            let released = self.transcripts.delete_by_gene(&updated.name).await?;
            match self.transcripts.insert(Transcript::claimed_by(&updated)).await {
                Ok(_) => debug!(released, "nm number claim moved"),
                Err(GeneError::TranscriptAlreadyExists) => {
                    warn!(released, "new nm number already claimed; gene left without a claim");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(Some(updated))
    }

    /// Delete a gene and the transcripts it owns; true if the gene existed.
    ///
    /// The gene goes first, so a failed delete keeps its NM number claimed.
    #[instrument(skip(self))]
    pub async fn delete(&self, name: &str) -> Result<bool, GeneError> {
        let deleted = self.genes.delete(name).await?;
        // Postgres already cascaded through fk_transcript_gene
        let transcripts = self.transcripts.delete_by_gene(name).await?;
        info!(deleted, transcripts, "gene_delete");
        Ok(deleted)
    }
}
