use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// `{ "message": ... }` returned with 400 and 500 responses.
#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

/// Gene as sent and returned. Extra fields are passed through unchanged.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({"name": "BRCA1", "nmNumber": "NM_007294", "chromosome": "17"}))]
pub struct GeneDoc {
    pub name: String,
    pub nm_number: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::genes::list,
        crate::routes::genes::get,
        crate::routes::genes::create,
        crate::routes::genes::update,
        crate::routes::genes::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            GeneDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "genes")
    )
)]
pub struct ApiDoc;
