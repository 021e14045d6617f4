//! Message listing query extractor

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw query parameters of `GET /messages`
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    /// Kept as text; the services decide what a valid limit is
    #[serde(default)]
    pub limit: Option<String>,
}

/// The unparsed `limit` query value, if any
#[derive(Debug, Clone, Default)]
pub struct LimitParam(pub Option<String>);

impl LimitParam {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for LimitParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<LimitParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(Self(params.limit))
    }
}
