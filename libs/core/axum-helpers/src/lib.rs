//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! - **[`server`]**: router assembly with OpenAPI UIs, health endpoints, graceful shutdown
//! - **[`http`]**: CORS and security header middleware
//! - **[`errors`]**: [`AppError`] and the JSON [`ErrorResponse`] body
//! - **[`extractors`]**: [`JsonBody`] and [`ObjectIdPath`], rejecting with [`AppError`]
//!
//! ```ignore
//! use axum_helpers::{create_router, health_router, http::cors_layer_from_env};
//!
//! let cors = cors_layer_from_env(&config.environment)?;
//! let app = create_router::<ApiDoc>(api_routes, cors).merge(health_router(config.app));
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

pub use http::{cors_layer, cors_layer_from_env, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{JsonBody, ObjectIdPath};
