use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::chat::message,
        crate::presentation::http::chat::chatbot,
        crate::presentation::http::health::health,
    ),
    components(schemas(
        crate::presentation::http::chat::MessageResponse,
        crate::presentation::http::chat::ChatRequest,
        crate::presentation::http::chat::ChatResponse,
        crate::presentation::http::error::ErrorBody,
        crate::presentation::http::health::HealthResp,
    )),
    tags(
        (name = "Chat", description = "Tree plantation chatbot"),
        (name = "Health", description = "System health checks")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
