use axum::{extract::Extension, response::IntoResponse, Json};

use crate::context::AdminContext;

/// Echo the authenticated admin's identity, as established by the bearer
/// middleware. Consoles call this on startup to restore a session.
pub async fn me(Extension(admin): Extension<AdminContext>) -> impl IntoResponse {
    Json(serde_json::json!({
        "id": admin.admin_id().to_string(),
        "email": admin.email(),
        "role": admin.role().as_str(),
    }))
}
