//! Caller identity extractor
//!
//! The caller names itself in the `User` header. There is no
//! authentication; the name is only checked against present participants.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::response::ApiError;

/// Header carrying the caller's participant name
pub const IDENTITY_HEADER: &str = "user";

/// Caller identity taken from the `User` header
///
/// A missing or non-UTF-8 header is an empty identity, which no
/// participant can hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantIdentity(pub String);

impl ParticipantIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ParticipantIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let name = parts
            .headers
            .get(IDENTITY_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        Ok(Self(name.to_string()))
    }
}
