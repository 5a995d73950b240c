//! Reusable OpenAPI responses for the error bodies.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - body or identifier could not be bound",
    content_type = "application/json",
    example = json!({ "error": "invalid id" })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error - document store or object storage failure",
    content_type = "application/json",
    example = json!({
        "error": "Failed to create transport",
        "message": "connection pool was cleared"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
