use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use tracing::Span;

/// Identity header consumed by the backend. The value is the caller's
/// user id, self-asserted with no verification; the backend simulates a
/// server the client fully controls, so this is not a security boundary.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// The caller's claimed user id, if any. Never rejects; resolution
/// against the user collection happens against the loaded document.
pub struct CallerId(pub Option<String>);

impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let caller = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .filter(|value| !value.is_empty());

        if let Some(id) = &caller {
            Span::current().record("user_id", id.as_str());
        }

        Ok(CallerId(caller))
    }
}
