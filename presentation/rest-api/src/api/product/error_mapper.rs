use poem::http::StatusCode;
use poem_openapi::payload::Json;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

/// Outcomes of product endpoints that are not a product.
///
/// Catalog queries never fail; the only error a caller sees is an id that is
/// not in the current snapshot.
#[derive(Debug, PartialEq)]
pub enum ProductApiError {
    NotFound,
}

impl IntoErrorResponse for ProductApiError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ProductApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("NotFound", "product.not_found")),
            ),
        }
    }
}
