//! Genes module: three-layer architecture (domain, repository, service).
//!
//! Creation goes through `GeneWorkflow`, which checks NM number and name
//! uniqueness against the two stores before writing.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::{Gene, GeneRequest, Transcript};
pub use errors::GeneError;
pub use repository::{GeneStore, TranscriptStore};
pub use service::GeneWorkflow;
