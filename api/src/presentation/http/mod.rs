pub mod chat;
pub mod diagnostics;
pub mod error;
pub mod health;
pub mod landing;
pub mod openapi;

use axum::{Router, routing::get};

use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::assembler::RouteCollection;

/// Everything served under `/api`.
#[derive(Clone)]
pub struct ApiRoutes {
    ctx: AppContext,
}

impl ApiRoutes {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }
}

impl RouteCollection for ApiRoutes {
    fn name(&self) -> &str {
        "api"
    }

    fn routes(&self) -> anyhow::Result<Router> {
        Ok(Router::new()
            .merge(chat::routes(self.ctx.clone()))
            .merge(health::routes())
            .route("/openapi.json", get(openapi::openapi_json))
            .fallback(error::not_found))
    }
}
