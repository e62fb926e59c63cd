//! Thin wrappers over axum's `Json` and `Path` extractors so that their
//! rejections come back as [`AppError`] with a `{"detail": ...}` body.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};

use crate::error::{AppError, AppResult};

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

/// Product id taken from the `:id` path segment.
///
/// Any integer is accepted; one the store could never have assigned
/// (negative, or beyond `u64`) is simply not found. Only non-integer text
/// is a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub u64);

#[async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        parse_product_id(&raw).map(ProductId)
    }
}

fn parse_product_id(raw: &str) -> AppResult<u64> {
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::Validation(format!(
            "id must be an integer, got `{raw}`"
        )));
    }

    if raw.starts_with('-') && digits.bytes().any(|b| b != b'0') {
        return Err(AppError::product_not_found());
    }
    digits.parse().map_err(|_| AppError::product_not_found())
}
