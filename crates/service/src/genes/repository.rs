use async_trait::async_trait;

use super::domain::{Gene, GeneRequest, Transcript};
use super::errors::GeneError;

/// Persistence abstraction over gene records, keyed by name.
#[async_trait]
pub trait GeneStore: Send + Sync {
    /// All genes in insertion order.
    async fn list(&self) -> Result<Vec<Gene>, GeneError>;
    /// Lookup by request criteria (see `GeneRequest::criteria`).
    async fn find(&self, criteria: &GeneRequest) -> Result<Option<Gene>, GeneError>;
    async fn get_by_name(&self, name: &str) -> Result<Option<Gene>, GeneError>;
    /// Atomic insert; fails with `GeneNameAlreadyExists` when the name is taken.
    async fn insert(&self, gene: Gene) -> Result<Gene, GeneError>;
    /// Replace the gene with the same name; `None` when there is none.
    async fn update(&self, gene: Gene) -> Result<Option<Gene>, GeneError>;
    async fn delete(&self, name: &str) -> Result<bool, GeneError>;
}

/// Persistence abstraction over transcript records, keyed by NM number.
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    async fn get(&self, nm_number: &str) -> Result<Option<Transcript>, GeneError>;
    /// Atomic insert; fails with `TranscriptAlreadyExists` when the NM number is taken.
    async fn insert(&self, transcript: Transcript) -> Result<Transcript, GeneError>;
    /// Remove transcripts owned by `gene_name`; returns how many were removed.
    async fn delete_by_gene(&self, gene_name: &str) -> Result<u64, GeneError>;
}

/// In-memory stores for tests and for running without a database.
pub mod memory {
    use super::*;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryGeneStore {
        // insertion order is list order
        genes: RwLock<Vec<Gene>>,
    }

    impl InMemoryGeneStore {
        pub fn new() -> Self { Self::default() }
    }

    #[async_trait]
    impl GeneStore for InMemoryGeneStore {
        async fn list(&self) -> Result<Vec<Gene>, GeneError> {
            Ok(self.genes.read().await.clone())
        }

        async fn find(&self, criteria: &GeneRequest) -> Result<Option<Gene>, GeneError> {
            let criteria = criteria.criteria();
            let genes = self.genes.read().await;
            Ok(genes.iter().find(|g| g.matches(criteria)).cloned())
        }

        async fn get_by_name(&self, name: &str) -> Result<Option<Gene>, GeneError> {
            let genes = self.genes.read().await;
            Ok(genes.iter().find(|g| g.name == name).cloned())
        }

        async fn insert(&self, gene: Gene) -> Result<Gene, GeneError> {
            let mut genes = self.genes.write().await;
            if genes.iter().any(|g| g.name == gene.name) {
                return Err(GeneError::GeneNameAlreadyExists);
            }
            genes.push(gene.clone());
            Ok(gene)
        }

        async fn update(&self, gene: Gene) -> Result<Option<Gene>, GeneError> {
            let mut genes = self.genes.write().await;
            match genes.iter_mut().find(|g| g.name == gene.name) {
                Some(slot) => {
                    *slot = gene.clone();
                    Ok(Some(gene))
                }
                None => Ok(None),
            }
        }

        async fn delete(&self, name: &str) -> Result<bool, GeneError> {
            let mut genes = self.genes.write().await;
            let before = genes.len();
            genes.retain(|g| g.name != name);
            Ok(genes.len() != before)
        }
    }

    #[derive(Default)]
    pub struct InMemoryTranscriptStore {
        transcripts: RwLock<Vec<Transcript>>,
    }

    impl InMemoryTranscriptStore {
        pub fn new() -> Self { Self::default() }

        /// Store pre-populated with the given transcripts.
        pub fn seeded(transcripts: impl IntoIterator<Item = Transcript>) -> Self {
            Self { transcripts: RwLock::new(transcripts.into_iter().collect()) }
        }
    }

    #[async_trait]
    impl TranscriptStore for InMemoryTranscriptStore {
        async fn get(&self, nm_number: &str) -> Result<Option<Transcript>, GeneError> {
            let transcripts = self.transcripts.read().await;
            Ok(transcripts.iter().find(|t| t.nm_number == nm_number).cloned())
        }

        async fn insert(&self, transcript: Transcript) -> Result<Transcript, GeneError> {
            let mut transcripts = self.transcripts.write().await;
            if transcripts.iter().any(|t| t.nm_number == transcript.nm_number) {
                return Err(GeneError::TranscriptAlreadyExists);
            }
            transcripts.push(transcript.clone());
            Ok(transcript)
        }

        async fn delete_by_gene(&self, gene_name: &str) -> Result<u64, GeneError> {
            let mut transcripts = self.transcripts.write().await;
            let before = transcripts.len();
            transcripts.retain(|t| t.gene_name.as_deref() != Some(gene_name));
            Ok((before - transcripts.len()) as u64)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn gene_store_keeps_insertion_order_and_unique_names() {
            let store = InMemoryGeneStore::new();
            store.insert(GeneRequest::new("BRCA1", "NM_007294").into_gene()).await.unwrap();
            store.insert(GeneRequest::new("ATM", "NM_000051").into_gene()).await.unwrap();
            let dup = store.insert(GeneRequest::new("BRCA1", "NM_1").into_gene()).await;
            assert_eq!(dup, Err(GeneError::GeneNameAlreadyExists));

            let names: Vec<_> = store.list().await.unwrap().into_iter().map(|g| g.name).collect();
            assert_eq!(names, vec!["BRCA1", "ATM"]);
        }

        #[tokio::test]
        async fn gene_store_find_by_nm_number_when_name_blank() {
            let store = InMemoryGeneStore::new();
            store.insert(GeneRequest::new("ATM", "NM_000051").into_gene()).await.unwrap();
            let found = store.find(&GeneRequest::new("", "NM_000051")).await.unwrap();
            assert_eq!(found.map(|g| g.name).as_deref(), Some("ATM"));
            assert!(store.find(&GeneRequest::default()).await.unwrap().is_none());
        }

        #[tokio::test]
        async fn transcript_store_cascade_only_touches_owned_rows() {
            let store = InMemoryTranscriptStore::seeded([Transcript::unassigned("NM_1")]);
            let gene = GeneRequest::new("ATM", "NM_2").into_gene();
            store.insert(Transcript::claimed_by(&gene)).await.unwrap();
            assert_eq!(
                store.insert(Transcript::unassigned("NM_2")).await,
                Err(GeneError::TranscriptAlreadyExists)
            );

            assert_eq!(store.delete_by_gene("ATM").await.unwrap(), 1);
            assert!(store.get("NM_2").await.unwrap().is_none());
            assert!(store.get("NM_1").await.unwrap().is_some());
        }
    }
}
