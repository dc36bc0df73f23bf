use axum::{Router, routing::get};

pub const LANDING_TEXT: &str =
    "Flask Backend is running! Go to /api/message or /api/chatbot (POST).";

pub async fn landing() -> &'static str {
    LANDING_TEXT
}

pub fn routes() -> Router {
    Router::new().route("/", get(landing))
}
