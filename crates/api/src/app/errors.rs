//! Consistent JSON error responses.
//!
//! The error taxonomy maps 1:1 onto status codes. `invalid_transition` and
//! `concurrent_modification` share 409 but keep distinct codes: the former
//! means the partner is no longer eligible for the action at all, the latter
//! means a refetch-and-retry may succeed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use swapcart_auth::AuthError;
use swapcart_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_failed", msg)
        }
        DomainError::InvalidTransition(msg) => {
            json_error(StatusCode::CONFLICT, "invalid_transition", msg)
        }
        DomainError::Conflict(msg) => {
            json_error(StatusCode::CONFLICT, "concurrent_modification", msg)
        }
        DomainError::NotFound => {
            json_error(StatusCode::NOT_FOUND, "not_found", "partner not found")
        }
        DomainError::Unauthenticated => unauthenticated(),
        DomainError::Forbidden(msg) => json_error(StatusCode::FORBIDDEN, "forbidden", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::Storage(msg) => {
            tracing::error!(error = %msg, "storage failure");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage_error",
                "internal storage failure",
            )
        }
    }
}

pub fn auth_error_to_response(err: AuthError) -> axum::response::Response {
    match err {
        AuthError::Unauthenticated => unauthenticated(),
        AuthError::Forbidden(perm) => json_error(
            StatusCode::FORBIDDEN,
            "forbidden",
            format!("missing permission '{perm}'"),
        ),
    }
}

/// 401 body; seeing this is the client's cue to drop its cached credential.
pub fn unauthenticated() -> axum::response::Response {
    json_error(
        StatusCode::UNAUTHORIZED,
        "unauthenticated",
        "missing or invalid credential",
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn parts(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn lost_race_and_illegal_transition_keep_distinct_codes() {
        let (status, body) = parts(domain_error_to_response(DomainError::conflict(
            "expected status 'pending', found 'approved'",
        )))
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "concurrent_modification");

        let (status, body) = parts(domain_error_to_response(
            DomainError::invalid_transition("approve is not legal from status 'rejected'"),
        ))
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "invalid_transition");
    }

    #[tokio::test]
    async fn validation_maps_to_bad_request() {
        let (status, body) = parts(domain_error_to_response(DomainError::validation(
            "rejection reason must not be blank",
        )))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_failed");
    }
}
