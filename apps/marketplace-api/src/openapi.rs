//! OpenAPI documentation

use axum_helpers::{
    ErrorResponse,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marketplace API",
        version = "0.1.0",
        description = "Products, transports, enquiries, queries and books backed by MongoDB"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    components(
        schemas(ErrorResponse),
        responses(BadRequestResponse, InternalServerErrorResponse)
    )
)]
struct BaseDoc;

/// Combined documentation of every resource group
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseDoc::openapi();
        for group in [
            domain_products::openapi(),
            domain_transports::openapi(),
            domain_enquiries::openapi(),
            domain_queries::openapi(),
            domain_books::openapi(),
        ] {
            doc.merge(group);
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_group_documented() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert_eq!(doc["info"]["title"], "Marketplace API");

        for path in [
            "/products",
            "/transports",
            "/enquiries",
            "/query",
            "/books",
        ] {
            assert!(doc["paths"][path]["get"].is_object(), "{path}");
            assert!(doc["paths"][path]["post"].is_object(), "{path}");
            assert!(doc["paths"][format!("{path}/{{id}}")]["put"].is_object(), "{path}");
        }
    }

    #[test]
    fn test_error_responses_resolvable() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let responses = &doc["components"]["responses"];
        assert!(responses["BadRequestResponse"].is_object());
        assert!(responses["InternalServerErrorResponse"].is_object());
    }
}
