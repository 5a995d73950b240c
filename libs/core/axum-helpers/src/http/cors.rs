use axum::http::{HeaderValue, Method, header};
use core_config::Environment;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Parses a comma-separated origin list. `"*"` yields `None` (any origin).
pub fn parse_allowed_origins(raw: &str) -> io::Result<Option<Vec<HeaderValue>>> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }
    if origins.contains(&"*") {
        return Ok(None);
    }

    origins
        .into_iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid CORS_ALLOWED_ORIGIN value {origin:?}: {e}"),
                )
            })
        })
        .collect::<io::Result<Vec<_>>>()
        .map(Some)
}

/// CORS layer for the given origins; `None` allows any origin without credentials.
pub fn cors_layer(origins: Option<Vec<HeaderValue>>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .max_age(Duration::from_secs(3600));

    match origins {
        Some(list) => layer
            .allow_origin(AllowOrigin::list(list))
            .allow_credentials(true),
        None => layer.allow_origin(Any),
    }
}

/// Builds the CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// The variable is required in production. In development it defaults to `*`.
pub fn cors_layer_from_env(environment: &Environment) -> io::Result<CorsLayer> {
    let raw = match std::env::var("CORS_ALLOWED_ORIGIN") {
        Ok(raw) => raw,
        Err(_) if environment.is_development() => "*".to_string(),
        Err(_) => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "CORS_ALLOWED_ORIGIN environment variable is required in production. \
                 Example: CORS_ALLOWED_ORIGIN=https://example.com,https://app.example.com",
            ));
        }
    };

    let origins = parse_allowed_origins(&raw)?;
    tracing::info!(origins = %raw, "CORS configured");
    Ok(cors_layer(origins))
}
