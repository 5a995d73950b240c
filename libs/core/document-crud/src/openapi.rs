//! OpenAPI paths for a resource, generated from its [`Resource`] metadata.
//!
//! `#[utoipa::path]` needs literal paths and concrete types, so the generic
//! handlers are documented here with the builder API instead.

use utoipa::openapi::path::{HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::schema::{ArrayBuilder, ObjectBuilder, Schema, SchemaType, Type};
use utoipa::openapi::tag::TagBuilder;
use utoipa::openapi::{
    ComponentsBuilder, ContentBuilder, OpenApi, OpenApiBuilder, PathItem, PathsBuilder, Ref,
    RefOr, Required, Response, ResponseBuilder,
};
use utoipa::{PartialSchema, ToSchema};

use crate::resource::Resource;
use crate::response::{WriteAction, success_message};
use crate::store::{DeleteOutcome, InsertOutcome, UpdateOutcome};

const JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudOperation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl CrudOperation {
    pub const ALL: &'static [CrudOperation] = &[
        CrudOperation::List,
        CrudOperation::Get,
        CrudOperation::Create,
        CrudOperation::Update,
        CrudOperation::Delete,
    ];
}

fn object(builder: ObjectBuilder) -> RefOr<Schema> {
    RefOr::T(Schema::Object(builder.build()))
}

fn schema_ref(name: &str) -> RefOr<Schema> {
    RefOr::Ref(Ref::from_schema_name(name))
}

fn response_ref(name: &str) -> RefOr<Response> {
    RefOr::Ref(Ref::from_response_name(name))
}

fn json_response(description: &str, schema: RefOr<Schema>) -> RefOr<Response> {
    RefOr::T(
        ResponseBuilder::new()
            .description(description)
            .content(JSON, ContentBuilder::new().schema(Some(schema)).build())
            .build(),
    )
}

/// `{"data": <payload>}`
fn data_envelope(payload: RefOr<Schema>) -> RefOr<Schema> {
    object(
        ObjectBuilder::new()
            .property("data", payload)
            .required("data"),
    )
}

/// `{"<envelope>": <outcome>, "msg": "..."}`
fn write_envelope<R: Resource>(action: WriteAction, outcome: &str) -> RefOr<Schema> {
    object(
        ObjectBuilder::new()
            .property(R::ENVELOPE, schema_ref(outcome))
            .required(R::ENVELOPE)
            .property(
                "msg",
                object(
                    ObjectBuilder::new()
                        .schema_type(SchemaType::Type(Type::String))
                        .examples([success_message::<R>(action)]),
                ),
            )
            .required("msg"),
    )
}

fn id_parameter<R: Resource>() -> utoipa::openapi::path::Parameter {
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some(format!("{} identifier (24 hex characters)", R::LABEL)))
        .schema(Some(object(
            ObjectBuilder::new().schema_type(SchemaType::Type(Type::String)),
        )))
        .build()
}

fn json_body(schema: &str, description: &str) -> utoipa::openapi::request_body::RequestBody {
    RequestBodyBuilder::new()
        .description(Some(description))
        .content(JSON, ContentBuilder::new().schema(Some(schema_ref(schema))).build())
        .required(Some(Required::True))
        .build()
}

fn operation_id<R: Resource>(prefix: &str) -> String {
    format!("{prefix}_{}", R::COLLECTION)
}

/// OpenAPI fragment documenting `operations` of `R` under `R::URL`.
///
/// Merge the result into the application document; error responses refer to
/// `BadRequestResponse` and `InternalServerErrorResponse` components, which the
/// application document provides.
pub fn crud_openapi<R: Resource>(operations: &[CrudOperation]) -> OpenApi {
    let name = R::name();
    let create_name = <R::Create as ToSchema>::name();
    let update_name = <R::Update as ToSchema>::name();
    let label = R::LABEL.to_lowercase();
    let item_path = format!("{}/{{id}}", R::URL);

    let mut paths = PathsBuilder::new();
    for operation in operations {
        let base = OperationBuilder::new().tag(R::TAG);
        let (path, method, op) = match operation {
            CrudOperation::List => (
                R::URL.to_string(),
                HttpMethod::Get,
                base.summary(Some(format!("List all {}", R::COLLECTION)))
                    .operation_id(Some(operation_id::<R>("list")))
                    .response(
                        "200",
                        json_response(
                            &format!("Every {label}"),
                            data_envelope(RefOr::T(Schema::Array(
                                ArrayBuilder::new().items(schema_ref(&name)).build(),
                            ))),
                        ),
                    )
                    .response("500", response_ref("InternalServerErrorResponse")),
            ),
            CrudOperation::Get => (
                item_path.clone(),
                HttpMethod::Get,
                base.summary(Some(format!("Get a {label} by id")))
                    .operation_id(Some(operation_id::<R>("get")))
                    .parameter(id_parameter::<R>())
                    .response(
                        "200",
                        json_response(&format!("{} found", R::LABEL), data_envelope(schema_ref(&name))),
                    )
                    .response("400", response_ref("BadRequestResponse"))
                    .response("500", response_ref("InternalServerErrorResponse")),
            ),
            CrudOperation::Create => (
                R::URL.to_string(),
                HttpMethod::Post,
                base.summary(Some(format!("Create a {label}")))
                    .operation_id(Some(operation_id::<R>("create")))
                    .request_body(Some(json_body(&create_name, &format!("New {label}"))))
                    .response(
                        "201",
                        json_response(
                            &format!("{} created", R::LABEL),
                            write_envelope::<R>(WriteAction::Create, &InsertOutcome::name()),
                        ),
                    )
                    .response("400", response_ref("BadRequestResponse"))
                    .response("500", response_ref("InternalServerErrorResponse")),
            ),
            CrudOperation::Update => (
                item_path.clone(),
                HttpMethod::Put,
                base.summary(Some(format!("Update a {label}")))
                    .description(Some(
                        "Only supplied fields with non-zero values are written.",
                    ))
                    .operation_id(Some(operation_id::<R>("update")))
                    .parameter(id_parameter::<R>())
                    .request_body(Some(json_body(&update_name, "Fields to change")))
                    .response(
                        "200",
                        json_response(
                            &format!("{} updated", R::LABEL),
                            write_envelope::<R>(WriteAction::Update, &UpdateOutcome::name()),
                        ),
                    )
                    .response("400", response_ref("BadRequestResponse"))
                    .response("500", response_ref("InternalServerErrorResponse")),
            ),
            CrudOperation::Delete => (
                item_path.clone(),
                HttpMethod::Delete,
                base.summary(Some(format!("Delete a {label}")))
                    .operation_id(Some(operation_id::<R>("delete")))
                    .parameter(id_parameter::<R>())
                    .response(
                        "200",
                        json_response(
                            &format!("{} deleted", R::LABEL),
                            write_envelope::<R>(WriteAction::Delete, &DeleteOutcome::name()),
                        ),
                    )
                    .response("400", response_ref("BadRequestResponse"))
                    .response("500", response_ref("InternalServerErrorResponse")),
            ),
        };
        paths = paths.path(path, PathItem::new(method, op.build()));
    }

    let components = ComponentsBuilder::new()
        .schema(name.clone(), R::schema())
        .schema(create_name, <R::Create as PartialSchema>::schema())
        .schema(update_name, <R::Update as PartialSchema>::schema())
        .schema(InsertOutcome::name(), InsertOutcome::schema())
        .schema(UpdateOutcome::name(), UpdateOutcome::schema())
        .schema(DeleteOutcome::name(), DeleteOutcome::schema())
        .build();

    OpenApiBuilder::new()
        .paths(paths.build())
        .components(Some(components))
        .tags(Some(vec![
            TagBuilder::new()
                .name(R::TAG)
                .description(Some(format!("{} management", R::LABEL)))
                .build(),
        ]))
        .build()
}
