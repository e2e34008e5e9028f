//! Verification status lifecycle.

use serde::{Deserialize, Serialize};

/// A partner's current position in the review workflow.
///
/// This is a closed enum validated centrally by the engine; presentation
/// layers must never re-derive transition legality from status strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// Initial state, assigned at partner self-registration.
    Pending,
    /// An operator has engaged with the application.
    UnderReview,
    /// Waiting on the partner to supply more information.
    ClarificationNeeded,
    /// Terminal for ordinary review; only suspend/reinstate may act on it.
    Approved,
    /// Terminal. `rejection_reason` is populated while in this state.
    Rejected,
    /// A previously approved partner taken off the platform.
    Suspended,
}

impl VerificationStatus {
    /// Whether the ordinary review actions (approve / reject /
    /// request-clarification) are still legal from this state.
    pub fn review_open(self) -> bool {
        matches!(
            self,
            VerificationStatus::Pending
                | VerificationStatus::UnderReview
                | VerificationStatus::ClarificationNeeded
        )
    }

    /// Stable snake_case label, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::UnderReview => "under_review",
            VerificationStatus::ClarificationNeeded => "clarification_needed",
            VerificationStatus::Approved => "approved",
            VerificationStatus::Rejected => "rejected",
            VerificationStatus::Suspended => "suspended",
        }
    }
}

impl core::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
