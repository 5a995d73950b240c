//! Binding of the product creation form.

use std::fmt::Display;
use std::str::FromStr;

use axum::extract::multipart::Field;
use axum::extract::{FromRequest, Multipart, Request};
use axum_helpers::AppError;
use object_storage::{Spool, StorageError, UploadBody, UploadRequest};

use crate::handlers::UPLOAD_FAILED;
use crate::models::CreateProduct;

/// Text fields and image file of a product creation request.
///
/// Missing text fields stay at their zero value and empty numbers count as
/// zero. A malformed stream or an unparseable number rejects with
/// `400 {"error":"Invalid body"}`. The image is spooled to a temporary file as
/// it arrives. It is optional here; whether it is required is up to the handler.
#[derive(Debug, Default)]
pub struct ProductForm {
    pub product: CreateProduct,
    pub image: Option<UploadRequest>,
}

fn invalid_body(err: impl Display) -> AppError {
    tracing::debug!(error = %err, "Rejected product form");
    AppError::invalid_body()
}

fn spool_error(err: StorageError) -> AppError {
    AppError::storage(UPLOAD_FAILED, err.to_string())
}

async fn spool_field(mut field: Field<'_>) -> Result<UploadBody, AppError> {
    let mut spool = Spool::create().map_err(spool_error)?;
    while let Some(chunk) = field.chunk().await.map_err(invalid_body)? {
        spool.write(&chunk).await.map_err(spool_error)?;
    }
    spool.finish().await.map_err(spool_error)
}

fn parse_number<T>(field: &str, raw: &str) -> Result<T, AppError>
where
    T: FromStr + Default,
    T::Err: Display,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(T::default());
    }
    raw.parse()
        .map_err(|err| invalid_body(format!("{field}: {err}")))
}

impl ProductForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = ProductForm::default();

        while let Some(field) = multipart.next_field().await.map_err(invalid_body)? {
            let name = field.name().unwrap_or_default().to_string();

            if name == "image" {
                let filename = field
                    .file_name()
                    .filter(|filename| !filename.is_empty())
                    .map(str::to_string);
                match filename {
                    Some(filename) => {
                        let body = spool_field(field).await?;
                        form.image = Some(UploadRequest::new(filename, body));
                    }
                    None => {
                        field.bytes().await.map_err(invalid_body)?;
                    }
                }
                continue;
            }

            let value = field.text().await.map_err(invalid_body)?;
            let product = &mut form.product;
            match name.as_str() {
                "name" => product.name = value,
                "description" => product.description = value,
                "sellerId" => product.seller_id = value,
                "price" => product.price = parse_number("price", &value)?,
                "minQuantity" => product.min_quantity = parse_number("minQuantity", &value)?,
                _ => tracing::debug!(field = %name, "Ignoring unknown form field"),
            }
        }

        Ok(form)
    }
}

impl<S> FromRequest<S> for ProductForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| invalid_body(rejection.body_text()))?;
        Self::read(multipart).await
    }
}
