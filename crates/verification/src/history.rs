//! Immutable verification audit trail.
//!
//! History entries are facts: append-only, never updated or deleted, totally
//! ordered by `created_at` per partner. They are the only source of truth for
//! "what happened and when" — the partner's current `verification_status` is
//! a derived cache that must always equal the net effect of [`replay`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use swapcart_core::{EntryId, PartnerId};

use crate::status::VerificationStatus;

/// The action recorded by one history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationAction {
    Approved,
    Rejected,
    ClarificationRequested,
    /// Written by the partner-facing response flow.
    ClarificationResponded,
    Suspended,
    /// Reserved. Reinstatement is recorded as an `Approved` entry; replay
    /// still accepts this label from older rows.
    Reinstated,
}

impl VerificationAction {
    /// The status a partner is in immediately after this action.
    pub fn resulting_status(self) -> VerificationStatus {
        match self {
            VerificationAction::Approved => VerificationStatus::Approved,
            VerificationAction::Rejected => VerificationStatus::Rejected,
            VerificationAction::ClarificationRequested => {
                VerificationStatus::ClarificationNeeded
            }
            VerificationAction::ClarificationResponded => VerificationStatus::UnderReview,
            VerificationAction::Suspended => VerificationStatus::Suspended,
            VerificationAction::Reinstated => VerificationStatus::Approved,
        }
    }
}

/// One recorded action against a partner's verification state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationHistoryEntry {
    pub id: EntryId,
    pub partner_id: PartnerId,
    pub action: VerificationAction,
    pub message_from_admin: Option<String>,
    /// Populated only by the partner-facing response action.
    pub message_from_partner: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An entry ready to be appended but not yet assigned an id by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryEntry {
    pub partner_id: PartnerId,
    pub action: VerificationAction,
    pub message_from_admin: Option<String>,
    pub message_from_partner: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewHistoryEntry {
    pub fn committed(self, id: EntryId) -> VerificationHistoryEntry {
        VerificationHistoryEntry {
            id,
            partner_id: self.partner_id,
            action: self.action,
            message_from_admin: self.message_from_admin,
            message_from_partner: self.message_from_partner,
            created_at: self.created_at,
        }
    }
}

/// Replay a partner's ordered history into the status it implies.
///
/// An empty history means the partner has not been acted on: `Pending`.
pub fn replay<'a>(
    entries: impl IntoIterator<Item = &'a VerificationHistoryEntry>,
) -> VerificationStatus {
    entries
        .into_iter()
        .fold(VerificationStatus::Pending, |_, entry| {
            entry.action.resulting_status()
        })
}
