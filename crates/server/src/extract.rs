use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use tracing::warn;

use crate::errors::JsonApiError;

/// `Json` body extractor whose rejection is an opaque 500 `{message}`.
pub struct GeneJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for GeneJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(GeneJson(value)),
            Err(rejection) => {
                warn!(status = %rejection.status(), error = %rejection.body_text(), "malformed request body");
                Err(JsonApiError::from(rejection))
            }
        }
    }
}
