//! JSON body extractor
//!
//! Wraps axum's `Json` so that a body which cannot be parsed is reported
//! as 422 with the parser's message, in the same error shape as every
//! other failure. Field rules are checked later by the services.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// JSON body extractor with API-shaped rejections
#[derive(Debug, Clone)]
pub struct ChatJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ChatJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| ApiError::invalid_body(e.body_text()))?;

        Ok(Self(value))
    }
}
