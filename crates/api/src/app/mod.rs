//! HTTP application wiring (axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: engine/query wiring over the store
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use swapcart_store::InMemoryVerificationStore;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests, which seed the store before spawning).
pub fn build_app(jwt_secret: &str, store: Arc<InMemoryVerificationStore>) -> Router {
    let validator = Arc::new(swapcart_auth::Hs256TokenValidator::new(jwt_secret.as_bytes()));
    let auth_state = middleware::AuthState { validator };

    let services = Arc::new(services::AppServices::new(store));

    // Protected routes: every /admin call passes the identity guard.
    let protected = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        .layer(ServiceBuilder::new())
}
