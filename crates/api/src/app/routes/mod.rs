use axum::{routing::get, Router};

pub mod partners;
pub mod session;
pub mod system;

/// Router for all authenticated `/admin` endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/admin/auth/me", get(session::me))
        .nest("/admin/partners", partners::router())
}
