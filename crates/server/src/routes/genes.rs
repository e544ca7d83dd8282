use axum::{extract::State, Json};
use service::genes::{Gene, GeneRequest};
use tracing::info;

use crate::errors::JsonApiError;
use crate::extract::GeneJson;
use crate::metrics;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/genes", tag = "genes",
    responses(
        (status = 200, description = "All genes in insertion order", body = [crate::openapi::GeneDoc]),
        (status = 500, description = "Internal Server Error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Gene>>, JsonApiError> {
    let genes = state.genes.list().await.map_err(|e| {
        metrics::record_gene_error(&e);
        JsonApiError::from(e)
    })?;
    Ok(Json(genes))
}

#[utoipa::path(
    post, path = "/genes/get", tag = "genes",
    request_body = crate::openapi::GeneDoc,
    responses(
        (status = 200, description = "Matching gene, or null", body = crate::openapi::GeneDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    GeneJson(criteria): GeneJson<GeneRequest>,
) -> Result<Json<Option<Gene>>, JsonApiError> {
    let found = state.genes.get(&criteria).await.map_err(|e| {
        metrics::record_gene_error(&e);
        JsonApiError::from(e)
    })?;
    Ok(Json(found))
}

#[utoipa::path(
    post, path = "/genes/create", tag = "genes",
    request_body = crate::openapi::GeneDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::GeneDoc),
        (status = 400, description = "NM number or name already taken", body = crate::openapi::MessageDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    GeneJson(request): GeneJson<GeneRequest>,
) -> Result<Json<Gene>, JsonApiError> {
    match state.genes.create(request).await {
        Ok(gene) => {
            metrics::GENES_CREATED_TOTAL.inc();
            info!(name = %gene.name, nm_number = %gene.nm_number, "created gene");
            Ok(Json(gene))
        }
        Err(e) => {
            metrics::record_gene_error(&e);
            Err(e.into())
        }
    }
}

#[utoipa::path(
    put, path = "/genes/update", tag = "genes",
    request_body = crate::openapi::GeneDoc,
    responses(
        (status = 200, description = "Updated gene, or null when no gene has that name", body = crate::openapi::GeneDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    GeneJson(request): GeneJson<GeneRequest>,
) -> Result<Json<Option<Gene>>, JsonApiError> {
    let updated = state.genes.update(request).await.map_err(|e| {
        metrics::record_gene_error(&e);
        JsonApiError::from(e)
    })?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/genes/delete", tag = "genes",
    request_body(content = String, description = "Gene name as a JSON string"),
    responses(
        (status = 200, description = "true if a gene was deleted", body = bool),
        (status = 500, description = "Internal Server Error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    GeneJson(name): GeneJson<String>,
) -> Result<Json<bool>, JsonApiError> {
    let deleted = state.genes.delete(&name).await.map_err(|e| {
        metrics::record_gene_error(&e);
        JsonApiError::from(e)
    })?;
    if deleted {
        metrics::GENES_DELETED_TOTAL.inc();
        info!(%name, "deleted gene");
    }
    Ok(Json(deleted))
}
