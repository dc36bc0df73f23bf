//! Startup sequence for the HTTP service.
//!
//! The stages are encoded as type states so the order is fixed at compile
//! time: CORS policy, then the mounted collection, then the landing route.
//! Only a fully configured [`Application`] can bind a listener.

use std::future::Future;
use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use axum::extract::{DefaultBodyLimit, MatchedPath};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::bootstrap::config::Config;
use crate::presentation::http::{diagnostics, landing};

/// A prebuilt group of routes that can be nested under a prefix.
pub trait RouteCollection {
    fn name(&self) -> &str;
    fn routes(&self) -> anyhow::Result<Router>;
}

pub struct Initialized;
pub struct CorsApplied(CorsLayer);
pub struct Mounted(CorsLayer);
pub struct Configured(CorsLayer);

pub struct Assembler<S> {
    cfg: Config,
    router: Router,
    state: S,
}

/// Any origin, any method, any request header; no credentials.
pub fn any_origin_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

impl Assembler<Initialized> {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            router: Router::new(),
            state: Initialized,
        }
    }

    /// The layer is held back and applied in [`Assembler::build`], so it also
    /// covers routes attached after this call.
    pub fn allow_any_origin(self) -> Assembler<CorsApplied> {
        warn!("cors_allow_any_origin: every route accepts cross-origin requests from any site");
        Assembler {
            cfg: self.cfg,
            router: self.router,
            state: CorsApplied(any_origin_cors()),
        }
    }
}

impl Assembler<CorsApplied> {
    pub fn mount<C>(self, prefix: &str, collection: &C) -> anyhow::Result<Assembler<Mounted>>
    where
        C: RouteCollection + ?Sized,
    {
        if !prefix.starts_with('/') || prefix == "/" || prefix.ends_with('/') {
            anyhow::bail!("invalid mount prefix {prefix:?}: expected a form like \"/api\"");
        }
        let routes = collection.routes().with_context(|| {
            format!("failed to build route collection `{}`", collection.name())
        })?;
        info!(prefix, collection = collection.name(), "route_collection_mounted");
        Ok(Assembler {
            cfg: self.cfg,
            router: self.router.nest(prefix, routes),
            state: Mounted(self.state.0),
        })
    }
}

impl Assembler<Mounted> {
    pub fn register_landing(self) -> Assembler<Configured> {
        Assembler {
            cfg: self.cfg,
            router: self.router.merge(landing::routes()),
            state: Configured(self.state.0),
        }
    }
}

impl Assembler<Configured> {
    pub fn build(self) -> Application {
        let mut router = self.router;
        if self.cfg.debug {
            warn!("diagnostic_mode_enabled: error details are returned to clients, do not expose this server publicly");
            router = router.layer(axum::middleware::from_fn(diagnostics::expose_error_detail));
        }
        let router = router
            .layer(DefaultBodyLimit::max(self.cfg.body_limit_bytes))
            .layer(diagnostics::catch_panic_layer(self.cfg.debug))
            .layer(self.state.0)
            .layer(
                TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    let matched = req
                        .extensions()
                        .get::<MatchedPath>()
                        .map(|p| p.as_str().to_string())
                        .unwrap_or_default();
                    tracing::info_span!("http", %method, %uri, matched_path = %matched)
                }),
            );
        Application {
            cfg: self.cfg,
            router,
        }
    }
}

/// Fully assembled service, not yet listening.
pub struct Application {
    cfg: Config,
    router: Router,
}

impl Application {
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn bind(self) -> anyhow::Result<Listening> {
        let addr = self.cfg.socket_addr();
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind HTTP listener on {addr}"))?;
        let local_addr = listener.local_addr()?;
        info!(%local_addr, "HTTP API listening");
        Ok(Listening {
            listener,
            router: self.router,
            local_addr,
        })
    }
}

pub struct Listening {
    listener: TcpListener,
    router: Router,
    local_addr: SocketAddr,
}

impl Listening {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serves until `shutdown` resolves; the listener is closed on return.
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server failed")?;
        info!(local_addr = %self.local_addr, "HTTP API stopped");
        Ok(())
    }
}
