//! Request/response DTOs and JSON mapping helpers.
//!
//! Field names follow the operator console's wire contract
//! (`approval_notes`, `rejection_reason`, `message`).

use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};

use swapcart_verification::{
    Partner, ServiceablePincode, TransitionOutcome, VerificationHistoryEntry,
    VerificationSnapshot, VerificationStatus,
};

use crate::app::errors;

#[derive(Debug, Deserialize)]
pub struct ApproveRequest {
    #[serde(default)]
    pub approval_notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RejectRequest {
    pub rejection_reason: String,
}

#[derive(Debug, Deserialize)]
pub struct ClarificationRequest {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SuspendRequest {
    pub reason: String,
}

#[derive(Debug, Deserialize)]
pub struct ListPartnersParams {
    #[serde(default)]
    pub status: Option<String>,
}

pub fn parse_status(s: &str) -> Result<VerificationStatus, axum::response::Response> {
    match s {
        "pending" => Ok(VerificationStatus::Pending),
        "under_review" => Ok(VerificationStatus::UnderReview),
        // The console historically used both labels for the same state.
        "clarification" | "clarification_needed" => Ok(VerificationStatus::ClarificationNeeded),
        "approved" => Ok(VerificationStatus::Approved),
        "rejected" => Ok(VerificationStatus::Rejected),
        "suspended" => Ok(VerificationStatus::Suspended),
        _ => Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_status",
            "status must be one of: pending, under_review, clarification_needed, approved, rejected, suspended",
        )),
    }
}

pub fn partner_to_json(partner: &Partner) -> JsonValue {
    json!({
        "id": partner.id.to_string(),
        "email": partner.email,
        "full_name": partner.full_name,
        "phone": partner.phone,
        "company_name": partner.company_name,
        "business_address": partner.business_address,
        "gst_number": partner.gst_number,
        "pan_number": partner.pan_number,
        "verification_status": partner.verification_status.as_str(),
        "rejection_reason": partner.rejection_reason,
        "credit_balance": partner.credit_balance,
        "is_active": partner.is_active,
        "created_at": partner.created_at,
    })
}

pub fn pincode_to_json(pincode: &ServiceablePincode) -> JsonValue {
    json!({
        "id": pincode.id,
        "pincode": pincode.pincode,
        "city": pincode.city,
        "state": pincode.state,
        "is_active": pincode.is_active,
    })
}

pub fn entry_to_json(entry: &VerificationHistoryEntry) -> JsonValue {
    json!({
        "id": entry.id.to_string(),
        "action_type": entry.action,
        "message_from_admin": entry.message_from_admin,
        "message_from_partner": entry.message_from_partner,
        "created_at": entry.created_at,
    })
}

pub fn snapshot_to_json(snapshot: &VerificationSnapshot) -> JsonValue {
    json!({
        "partner": partner_to_json(&snapshot.partner),
        "serviceable_pincodes": snapshot
            .serviceable_pincodes
            .iter()
            .map(pincode_to_json)
            .collect::<Vec<_>>(),
        "verification_history": snapshot
            .verification_history
            .iter()
            .map(entry_to_json)
            .collect::<Vec<_>>(),
    })
}

pub fn outcome_to_json(outcome: &TransitionOutcome) -> JsonValue {
    json!({
        "partner": partner_to_json(&outcome.partner),
        "history_entry": entry_to_json(&outcome.entry),
    })
}
