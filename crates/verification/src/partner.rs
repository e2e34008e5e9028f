//! Partner record and serviceable-area display data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use swapcart_core::PartnerId;

use crate::status::VerificationStatus;

/// One registered business applicant.
///
/// Created at partner self-registration (outside this crate); the workflow
/// fields (`verification_status`, `rejection_reason`) are mutated exclusively
/// by the [`WorkflowEngine`](crate::engine::WorkflowEngine). Partners are
/// never hard-deleted — rejection and suspension are states, not row
/// deletions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub company_name: Option<String>,
    pub business_address: Option<String>,
    pub gst_number: Option<String>,
    pub pan_number: Option<String>,

    pub verification_status: VerificationStatus,
    /// Populated if and only if `verification_status == Rejected`.
    pub rejection_reason: Option<String>,

    /// Owned by the credit ledger subsystem; read-only here.
    pub credit_balance: i64,
    /// Login axis, independent of the review state.
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
}

impl Partner {
    /// A freshly self-registered partner awaiting review.
    pub fn registered(
        id: PartnerId,
        email: impl Into<String>,
        full_name: impl Into<String>,
        phone: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            full_name: full_name.into(),
            phone: phone.into(),
            company_name: None,
            business_address: None,
            gst_number: None,
            pan_number: None,
            verification_status: VerificationStatus::Pending,
            rejection_reason: None,
            credit_balance: 0,
            is_active: true,
            created_at,
        }
    }

    /// Invariant check: `rejection_reason` is present exactly in `Rejected`.
    pub fn rejection_invariant_holds(&self) -> bool {
        self.rejection_reason.is_some()
            == (self.verification_status == VerificationStatus::Rejected)
    }
}

/// A postal area the partner claims to serve.
///
/// Managed by partner self-service; consumed here only for display in the
/// verification query view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceablePincode {
    pub id: u64,
    pub pincode: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub is_active: bool,
}
