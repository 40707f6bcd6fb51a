//! Path parameter matching.
//!
//! # Design Decisions
//! - `{id}` matches decimal digits only; anything else is treated as an
//!   unknown route (404) before the handler runs
//! - Digit strings too large for an id are a malformed request (400)

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::http::ApiError;
use crate::store::ProverbId;

/// A proverb id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub ProverbId);

/// Match a raw `{id}` segment against the digits-only pattern.
pub fn match_id_segment(raw: &str) -> Result<ProverbId, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::NotFound(format!("no route for /proverbs/{raw}")));
    }
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("id {raw} is out of range")))
}

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        match_id_segment(&raw).map(PathId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_digits_match() {
        assert_eq!(match_id_segment("0").unwrap(), 0);
        assert_eq!(match_id_segment("0042").unwrap(), 42);
    }

    #[test]
    fn test_non_digits_are_unknown_routes() {
        for raw in ["", "abc", "1a", "-1", "+1", " 1", "1.0", "١"] {
            let err = match_id_segment(raw).unwrap_err();
            assert_eq!(err.status(), StatusCode::NOT_FOUND, "{raw:?}");
        }
    }

    #[test]
    fn test_overflow_is_bad_request() {
        let err = match_id_segment("18446744073709551616").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(match_id_segment("18446744073709551615").unwrap(), u64::MAX);
    }
}
