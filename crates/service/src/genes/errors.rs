use thiserror::Error;

use models::errors::ModelError;

/// Business errors for gene workflows
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneError {
    #[error("Transcript already exists for this NM number.")]
    TranscriptAlreadyExists,
    #[error("Gene with this name already exists.")]
    GeneNameAlreadyExists,
    #[error("store error: {0}")]
    Store(String),
}

impl GeneError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            GeneError::TranscriptAlreadyExists => 2001,
            GeneError::GeneNameAlreadyExists => 2002,
            GeneError::Store(_) => 2200,
        }
    }

    /// Business-rule rejection (client side), as opposed to a store fault.
    pub fn is_business_rule(&self) -> bool {
        !matches!(self, GeneError::Store(_))
    }
}

impl From<ModelError> for GeneError {
    fn from(e: ModelError) -> Self {
        GeneError::Store(e.to_string())
    }
}
