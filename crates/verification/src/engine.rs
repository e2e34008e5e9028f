//! Verification workflow engine.
//!
//! The sole entry point for mutating a partner's verification state. Every
//! operation follows the same shape: validate input before touching storage,
//! read the partner, check the transition table, then commit the new status
//! and exactly one audit entry atomically through the store port. The commit
//! is conditioned on the status read at the start of the operation; a
//! concurrent writer surfaces as `Conflict`, never a silent overwrite.

use chrono::Utc;

use swapcart_core::{DomainError, DomainResult, PartnerId};

use crate::history::{NewHistoryEntry, VerificationAction, VerificationHistoryEntry};
use crate::partner::Partner;
use crate::status::VerificationStatus;
use crate::store::{TransitionRecord, VerificationStore};

/// Result of one committed transition: the updated partner record and the
/// audit entry that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOutcome {
    pub partner: Partner,
    pub entry: VerificationHistoryEntry,
}

/// The state machine driver.
///
/// Generic over the store port so tests run against the in-memory store and
/// a persistent backend can be swapped in without touching workflow logic.
#[derive(Debug)]
pub struct WorkflowEngine<S> {
    store: S,
}

impl<S> WorkflowEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: VerificationStore> WorkflowEngine<S> {
    /// Approve the application. Legal from any review-open state; the note
    /// is optional and blank notes are treated as absent.
    pub fn approve(
        &self,
        partner_id: PartnerId,
        notes: Option<&str>,
    ) -> DomainResult<TransitionOutcome> {
        let notes = optional_message(notes);
        let partner = self.store.get_partner(partner_id)?;
        check_review_action(&partner, "approve")?;

        self.commit(
            &partner,
            VerificationStatus::Approved,
            None,
            VerificationAction::Approved,
            notes,
            None,
        )
    }

    /// Reject the application with a mandatory, non-blank reason.
    pub fn reject(&self, partner_id: PartnerId, reason: &str) -> DomainResult<TransitionOutcome> {
        let reason = required_message("rejection reason", reason)?;
        let partner = self.store.get_partner(partner_id)?;
        check_review_action(&partner, "reject")?;

        self.commit(
            &partner,
            VerificationStatus::Rejected,
            Some(reason.clone()),
            VerificationAction::Rejected,
            Some(reason),
            None,
        )
    }

    /// Ask the partner for more information. Legal from any review-open
    /// state; clarification is not terminal and may be followed by any
    /// review action.
    pub fn request_clarification(
        &self,
        partner_id: PartnerId,
        message: &str,
    ) -> DomainResult<TransitionOutcome> {
        let message = required_message("clarification message", message)?;
        let partner = self.store.get_partner(partner_id)?;
        check_review_action(&partner, "request_clarification")?;

        self.commit(
            &partner,
            VerificationStatus::ClarificationNeeded,
            None,
            VerificationAction::ClarificationRequested,
            Some(message),
            None,
        )
    }

    /// Record the partner's answer to a clarification request (external
    /// actor, not an operator command) and move the application back under
    /// review.
    pub fn partner_responds(
        &self,
        partner_id: PartnerId,
        message: &str,
    ) -> DomainResult<TransitionOutcome> {
        let message = required_message("partner response", message)?;
        let partner = self.store.get_partner(partner_id)?;

        if partner.verification_status != VerificationStatus::ClarificationNeeded {
            return Err(transition_refused(&partner, "partner_responds"));
        }

        self.commit(
            &partner,
            VerificationStatus::UnderReview,
            None,
            VerificationAction::ClarificationResponded,
            None,
            Some(message),
        )
    }

    /// Privileged: take an approved, currently active partner off the
    /// platform.
    pub fn suspend(&self, partner_id: PartnerId, reason: &str) -> DomainResult<TransitionOutcome> {
        let reason = required_message("suspension reason", reason)?;
        let partner = self.store.get_partner(partner_id)?;

        if partner.verification_status != VerificationStatus::Approved {
            return Err(transition_refused(&partner, "suspend"));
        }
        if !partner.is_active {
            return Err(DomainError::invalid_transition(
                "suspend requires a currently active partner",
            ));
        }

        self.commit(
            &partner,
            VerificationStatus::Suspended,
            None,
            VerificationAction::Suspended,
            Some(reason),
            None,
        )
    }

    /// Privileged: return a suspended partner to `approved`. Recorded as an
    /// `approved` audit entry, so replaying history lands on the same state.
    pub fn reinstate(&self, partner_id: PartnerId) -> DomainResult<TransitionOutcome> {
        let partner = self.store.get_partner(partner_id)?;

        if partner.verification_status != VerificationStatus::Suspended {
            return Err(transition_refused(&partner, "reinstate"));
        }

        self.commit(
            &partner,
            VerificationStatus::Approved,
            None,
            VerificationAction::Approved,
            Some("Partner reinstated".to_string()),
            None,
        )
    }

    fn commit(
        &self,
        partner: &Partner,
        new_status: VerificationStatus,
        rejection_reason: Option<String>,
        action: VerificationAction,
        message_from_admin: Option<String>,
        message_from_partner: Option<String>,
    ) -> DomainResult<TransitionOutcome> {
        let record = TransitionRecord {
            expected_status: partner.verification_status,
            new_status,
            rejection_reason,
            entry: NewHistoryEntry {
                partner_id: partner.id,
                action,
                message_from_admin,
                message_from_partner,
                created_at: Utc::now(),
            },
        };

        let (partner, entry) = self.store.commit_transition(partner.id, record)?;

        tracing::info!(
            partner_id = %partner.id,
            status = %partner.verification_status,
            action = ?entry.action,
            "verification transition committed"
        );

        Ok(TransitionOutcome { partner, entry })
    }
}

/// Guard shared by approve / reject / request-clarification.
fn check_review_action(partner: &Partner, action: &str) -> DomainResult<()> {
    if partner.verification_status.review_open() {
        Ok(())
    } else {
        Err(transition_refused(partner, action))
    }
}

fn transition_refused(partner: &Partner, action: &str) -> DomainError {
    DomainError::invalid_transition(format!(
        "{action} is not legal from status '{}'",
        partner.verification_status
    ))
}

/// Mandatory operator input: trimmed, rejected when blank before any storage
/// access.
fn required_message(field: &str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DomainError::validation(format!("{field} must not be blank")))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Optional operator input: blank collapses to absent.
fn optional_message(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_message_trims_and_rejects_blank() {
        assert_eq!(
            required_message("reason", "  Invalid documents  ").unwrap(),
            "Invalid documents"
        );

        for blank in ["", "   ", "\n\t"] {
            match required_message("reason", blank) {
                Err(DomainError::Validation(msg)) => assert!(msg.contains("reason")),
                other => panic!("expected Validation, got {other:?}"),
            }
        }
    }

    #[test]
    fn optional_message_collapses_blank_to_none() {
        assert_eq!(optional_message(None), None);
        assert_eq!(optional_message(Some("   ")), None);
        assert_eq!(
            optional_message(Some(" looks good ")),
            Some("looks good".to_string())
        );
    }

    #[test]
    fn review_actions_refused_from_terminal_states() {
        use chrono::Utc;
        let mut partner = Partner::registered(
            swapcart_core::PartnerId::new(),
            "shop@example.com",
            "Asha Mobiles",
            "+91-9000000000",
            Utc::now(),
        );

        for terminal in [
            VerificationStatus::Approved,
            VerificationStatus::Rejected,
            VerificationStatus::Suspended,
        ] {
            partner.verification_status = terminal;
            let err = check_review_action(&partner, "approve").unwrap_err();
            match err {
                DomainError::InvalidTransition(msg) => {
                    assert!(msg.contains(terminal.as_str()))
                }
                other => panic!("expected InvalidTransition, got {other:?}"),
            }
        }

        partner.verification_status = VerificationStatus::ClarificationNeeded;
        assert!(check_review_action(&partner, "approve").is_ok());
    }
}
