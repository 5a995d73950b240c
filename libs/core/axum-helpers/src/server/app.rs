use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::security::security_headers;
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable as RedocServable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

/// Path of the generated OpenAPI document.
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Assembles the public router.
///
/// - OpenAPI documentation at `/swagger-ui`, `/redoc`, `/rapidoc` and `/scalar`
/// - `apis` mounted at the root
/// - JSON 404 fallback
/// - request tracing, security headers, CORS and response compression
///
/// `apis` must already carry its state. Health routes are merged by the caller.
pub fn create_router<T>(apis: Router, cors: CorsLayer) -> Router
where
    T: OpenApi + 'static,
{
    let openapi = T::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON, openapi.clone()))
        .merge(Redoc::with_url("/redoc", openapi.clone()))
        .merge(RapiDoc::new(OPENAPI_JSON).path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", openapi))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new())
}

/// Serves `router` until SIGINT/SIGTERM, then drains in-flight requests.
///
/// Draining is bounded by `server_config.shutdown_timeout`; once it elapses the
/// server stops waiting. `cleanup` runs after the server has stopped.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (coordinator, mut shutdown_rx) = ShutdownCoordinator::new();
    let shutdown_timeout = server_config.shutdown_timeout;

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let signal = coordinator.clone();
    let serve = async move {
        axum::serve(listener, router.into_make_service())
            .with_graceful_shutdown(async move { signal.wait_for_signal().await })
            .await
    };
    tokio::pin!(serve);

    let drain_deadline = async {
        let _ = shutdown_rx.recv().await;
        info!(timeout = ?shutdown_timeout, "Draining in-flight requests");
        tokio::time::sleep(shutdown_timeout).await;
    };

    let serve_result = tokio::select! {
        result = &mut serve => result.inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        }),
        _ = drain_deadline => {
            warn!(timeout = ?shutdown_timeout, "Shutdown timeout exceeded, dropping open connections");
            Ok(())
        }
    };

    info!("Running cleanup tasks");
    cleanup.await;

    serve_result
}
