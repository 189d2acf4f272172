//! JSON body extractor with 400 rejections.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::http::error::AppError;

/// Wrapper around [`axum::Json`] that rejects malformed bodies as 400
/// validation errors instead of axum's default 415/422 responses, keeping
/// every client-input failure on the same status code.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}
