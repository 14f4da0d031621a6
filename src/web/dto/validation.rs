//! Validated request body extraction.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::web::error::ApiError;

/// Extracts a JSON or urlencoded form body and validates it.
///
/// The body is read as a form when the content type is
/// `application/x-www-form-urlencoded`, and as JSON otherwise. Validation
/// failures produce a 422 with field-level details.
///
/// # Example
///
/// ```ignore
/// use corkboard::web::dto::ValidatedPayload;
///
/// async fn create_thread(
///     ValidatedPayload(payload): ValidatedPayload<CreateThreadRequest>,
/// ) -> Result<Response, ApiError> {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedPayload<T>(pub T);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::bad_request(format!("Invalid form body: {}", e)))?;
            value
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e)))?;
            value
        };

        value.validate().map_err(ApiError::from_validation_errors)?;

        Ok(ValidatedPayload(value))
    }
}
