//! Per-request identity guard.
//!
//! Every `/admin` route passes through here. Authentication failure is a
//! `401` return value, not an out-of-band broadcast; clients are expected to
//! drop their cached credential when they see it.

use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use swapcart_auth::TokenValidator;

use crate::app::errors;
use crate::context::AdminContext;

#[derive(Clone)]
pub struct AuthState {
    pub validator: Arc<dyn TokenValidator>,
}

pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let token = match extract_bearer(req.headers()) {
        Ok(token) => token,
        Err(response) => return response,
    };

    let claims = match state.validator.validate(token, Utc::now()) {
        Ok(claims) => claims,
        Err(_) => return errors::unauthenticated(),
    };

    req.extensions_mut()
        .insert(AdminContext::new(claims.sub, claims.email, claims.role));

    next.run(req).await
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, Response> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(errors::unauthenticated)?;

    let header = header.to_str().map_err(|_| errors::unauthenticated())?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(errors::unauthenticated)?
        .trim();

    if token.is_empty() {
        return Err(errors::unauthenticated());
    }

    Ok(token)
}
