use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::chat::reply::ReplyToMessage;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::error::{ApiError, ErrorBody};

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/message", get(message))
        .route("/chatbot", post(chatbot))
        .with_state(ctx)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
}

#[utoipa::path(get, path = "/api/message", tag = "Chat",
    responses((status = 200, body = MessageResponse)))]
pub async fn message(State(ctx): State<AppContext>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: format!(
            "Hello from the Tree Plantation backend! {} is ready to help you grow something.",
            ctx.cfg.bot_name
        ),
    })
}

#[utoipa::path(post, path = "/api/chatbot", tag = "Chat",
    request_body = ChatRequest,
    responses(
        (status = 200, body = ChatResponse),
        (status = 400, body = ErrorBody),
        (status = 413, body = ErrorBody),
        (status = 500, body = ErrorBody)
    ))]
pub async fn chatbot(
    State(ctx): State<AppContext>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload?;
    let text = req
        .message
        .ok_or_else(|| ApiError::BadRequest("message is required".into()))?;
    let responder = ctx.chat_responder();
    let uc = ReplyToMessage {
        responder: responder.as_ref(),
        max_chars: ctx.cfg.max_message_chars,
    };
    let response = uc.execute(&text).await?;
    tracing::debug!(chars = text.chars().count(), "chat_reply_sent");
    Ok(Json(ChatResponse { response }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::application::ports::chat_responder::{ChatError, ChatResponder};
    use crate::bootstrap::app_context::AppServices;
    use crate::bootstrap::config::Config;

    struct Canned;

    #[async_trait]
    impl ChatResponder for Canned {
        async fn respond(&self, message: &str) -> Result<String, ChatError> {
            Ok(format!("you said {message}"))
        }
    }

    struct Broken;

    #[async_trait]
    impl ChatResponder for Broken {
        async fn respond(&self, _message: &str) -> Result<String, ChatError> {
            Err(ChatError::Backend(anyhow::anyhow!("model offline")))
        }
    }

    fn app(responder: Arc<dyn ChatResponder>) -> Router {
        let cfg = Config {
            bot_name: "Leafy".into(),
            max_message_chars: 20,
            ..Config::default()
        };
        routes(AppContext::new(cfg, AppServices::new(responder)))
    }

    async fn post_json(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
        let res = app
            .oneshot(
                Request::post("/chatbot")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn message_greets_with_bot_name() {
        let res = app(Arc::new(Canned))
            .oneshot(Request::get("/message").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(v["message"].as_str().unwrap().contains("Leafy"));
    }

    #[tokio::test]
    async fn chatbot_replies_with_response_field() {
        let (status, v) = post_json(app(Arc::new(Canned)), r#"{"message": "  neem  "}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["response"], "you said neem");
    }

    #[tokio::test]
    async fn chatbot_rejects_missing_blank_and_malformed_input() {
        for body in [r#"{}"#, r#"{"message": "   "}"#, r#"{"message": 5}"#, "{oops"] {
            let (status, v) = post_json(app(Arc::new(Canned)), body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert!(v["error"].is_string(), "{body}");
        }
    }

    #[tokio::test]
    async fn chatbot_rejects_overlong_messages() {
        let body = format!(r#"{{"message": "{}"}}"#, "a".repeat(21));
        let (status, v) = post_json(app(Arc::new(Canned)), &body).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(v["error"], "message exceeds 20 characters");
    }

    #[tokio::test]
    async fn backend_failures_are_generic() {
        let (status, v) = post_json(app(Arc::new(Broken)), r#"{"message": "hi"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(v["error"], "internal server error");
        assert!(v.get("detail").is_none());
    }
}
