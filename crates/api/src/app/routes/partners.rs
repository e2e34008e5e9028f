use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use swapcart_auth::Permission;
use swapcart_core::PartnerId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz;
use crate::context::AdminContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_partners))
        .route("/pending-verification", get(pending_verification))
        .route("/:id/verification-details", get(verification_details))
        .route("/:id/approve", post(approve))
        .route("/:id/reject", post(reject))
        .route("/:id/request-clarification", post(request_clarification))
        .route("/:id/suspend", post(suspend))
        .route("/:id/reinstate", post(reinstate))
}

pub async fn list_partners(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(admin): Extension<AdminContext>,
    Query(params): Query<dto::ListPartnersParams>,
) -> axum::response::Response {
    if let Err(e) = authz::require(&admin, Permission::PARTNERS_VIEW) {
        return errors::auth_error_to_response(e);
    }

    let status = match params.status.as_deref() {
        Some(raw) => match dto::parse_status(raw) {
            Ok(status) => Some(status),
            Err(response) => return response,
        },
        None => None,
    };

    match services.query().list_partners(status) {
        Ok(partners) => {
            let items = partners.iter().map(dto::partner_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn pending_verification(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(admin): Extension<AdminContext>,
) -> axum::response::Response {
    if let Err(e) = authz::require(&admin, Permission::PARTNERS_VIEW) {
        return errors::auth_error_to_response(e);
    }

    match services.query().pending_partners() {
        Ok(partners) => {
            let items = partners.iter().map(dto::partner_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn verification_details(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(admin): Extension<AdminContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(e) = authz::require(&admin, Permission::PARTNERS_VIEW) {
        return errors::auth_error_to_response(e);
    }
    let partner_id = match parse_partner_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match services.query().verification_details(partner_id) {
        Ok(snapshot) => {
            (StatusCode::OK, Json(dto::snapshot_to_json(&snapshot))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn approve(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(admin): Extension<AdminContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::ApproveRequest>,
) -> axum::response::Response {
    if let Err(e) = authz::require(&admin, Permission::PARTNERS_VERIFY) {
        return errors::auth_error_to_response(e);
    }
    let partner_id = match parse_partner_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    transition_response(
        services
            .engine()
            .approve(partner_id, body.approval_notes.as_deref()),
    )
}

pub async fn reject(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(admin): Extension<AdminContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::RejectRequest>,
) -> axum::response::Response {
    if let Err(e) = authz::require(&admin, Permission::PARTNERS_VERIFY) {
        return errors::auth_error_to_response(e);
    }
    let partner_id = match parse_partner_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    transition_response(services.engine().reject(partner_id, &body.rejection_reason))
}

pub async fn request_clarification(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(admin): Extension<AdminContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::ClarificationRequest>,
) -> axum::response::Response {
    if let Err(e) = authz::require(&admin, Permission::PARTNERS_VERIFY) {
        return errors::auth_error_to_response(e);
    }
    let partner_id = match parse_partner_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    transition_response(
        services
            .engine()
            .request_clarification(partner_id, &body.message),
    )
}

pub async fn suspend(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(admin): Extension<AdminContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::SuspendRequest>,
) -> axum::response::Response {
    if let Err(e) = authz::require(&admin, Permission::PARTNERS_SUSPEND) {
        return errors::auth_error_to_response(e);
    }
    let partner_id = match parse_partner_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    transition_response(services.engine().suspend(partner_id, &body.reason))
}

pub async fn reinstate(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(admin): Extension<AdminContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(e) = authz::require(&admin, Permission::PARTNERS_SUSPEND) {
        return errors::auth_error_to_response(e);
    }
    let partner_id = match parse_partner_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    transition_response(services.engine().reinstate(partner_id))
}

fn parse_partner_id(raw: &str) -> Result<PartnerId, axum::response::Response> {
    raw.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid partner id")
    })
}

fn transition_response(
    result: swapcart_core::DomainResult<swapcart_verification::TransitionOutcome>,
) -> axum::response::Response {
    match result {
        Ok(outcome) => (StatusCode::OK, Json(dto::outcome_to_json(&outcome))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
