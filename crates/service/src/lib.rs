//! Service layer providing the gene workflows on top of models.
//! - Separates business logic from data access (`GeneStore` / `TranscriptStore`).
//! - Reuses entity definitions and queries in the `models` crate.
//! - Ships in-memory and SeaORM store implementations.

pub mod genes;
#[cfg(test)]
pub mod test_support;
