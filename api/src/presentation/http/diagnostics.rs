use std::any::Any;

use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::presentation::http::error::{DiagnosticDetail, ErrorBody};

/// Turns handler panics into 500 responses. The panic message is only put in
/// the body when `expose` is set.
#[derive(Debug, Clone, Copy)]
pub struct PanicResponder {
    expose: bool,
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(
        &mut self,
        err: Box<dyn Any + Send + 'static>,
    ) -> http::Response<Self::ResponseBody> {
        let message = panic_message(err.as_ref());
        tracing::error!(panic = %message, "handler_panicked");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: "internal server error".into(),
                detail: self.expose.then_some(message),
            }),
        )
            .into_response()
    }
}

pub fn catch_panic_layer(expose: bool) -> CatchPanicLayer<PanicResponder> {
    CatchPanicLayer::custom(PanicResponder { expose })
}

/// Rewrites responses carrying a [`DiagnosticDetail`] so the body includes it.
pub async fn expose_error_detail(req: Request, next: Next) -> Response {
    let mut res = next.run(req).await;
    let Some(diag) = res.extensions_mut().remove::<DiagnosticDetail>() else {
        return res;
    };
    let status = res.status();
    (
        status,
        Json(ErrorBody {
            error: diag.error,
            detail: Some(diag.detail),
        }),
    )
        .into_response()
}

fn panic_message(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "panic payload of unknown type".into()
    }
}
