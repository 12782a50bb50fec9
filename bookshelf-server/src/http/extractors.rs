//! Custom axum extractors
//!
//! The stock Json/Query extractors reject with 400/415. The wire contract
//! here is 422 for every request-shape violation, so these wrappers route
//! rejections through ApiError::Validation instead.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// JSON body that rejects with 422 on shape violations
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) =
            Json::<T>::from_request(req, state)
                .await
                .map_err(|e: JsonRejection| {
                    ApiError::Validation(ValidationError::Malformed {
                        reason: e.body_text(),
                    })
                })?;

        Ok(Self(value))
    }
}

/// Query string that rejects with 422 on undecodable parameters
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e: QueryRejection| {
                ApiError::Validation(ValidationError::Malformed {
                    reason: e.body_text(),
                })
            })?;

        Ok(Self(value))
    }
}
