//! Storage ports for the verification workflow.
//!
//! Reads are narrow (`get_partner`, `list_partners`, `list_history`,
//! `snapshot`); the only write is [`VerificationStore::commit_transition`],
//! which fuses the status compare-and-swap and the history append into one
//! unit of work. A transition that updates state but fails to log history
//! (or vice versa) is a correctness violation, so the split write contracts
//! are deliberately not exposed.

use std::sync::Arc;

use swapcart_core::{DomainResult, PartnerId};

use crate::history::{NewHistoryEntry, VerificationHistoryEntry};
use crate::partner::{Partner, ServiceablePincode};
use crate::status::VerificationStatus;

/// The atomic effect of one successful workflow transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRecord {
    /// Status read at the start of the operation. The commit must fail with
    /// `Conflict` if the stored status no longer matches.
    pub expected_status: VerificationStatus,
    pub new_status: VerificationStatus,
    /// `Some` only for rejections; every other transition clears the reason,
    /// preserving the reason-iff-rejected invariant.
    pub rejection_reason: Option<String>,
    /// Exactly one entry is appended per committed transition.
    pub entry: NewHistoryEntry,
}

/// One consistent read of everything the operator UI renders for a partner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationSnapshot {
    pub partner: Partner,
    pub serviceable_pincodes: Vec<ServiceablePincode>,
    /// Oldest first. Never newer than `partner.verification_status`, and
    /// never missing the entry that produced it.
    pub verification_history: Vec<VerificationHistoryEntry>,
}

/// Partner record store + audit log store, consumed only by the workflow
/// engine and the query service.
///
/// Implementations must make `commit_transition` atomic and must serialize
/// commits per partner; different partners are independent units of
/// concurrency with no cross-partner ordering requirement.
pub trait VerificationStore: Send + Sync {
    /// Current partner record, or `NotFound`.
    fn get_partner(&self, id: PartnerId) -> DomainResult<Partner>;

    /// All partners, optionally filtered by status.
    fn list_partners(&self, status: Option<VerificationStatus>) -> DomainResult<Vec<Partner>>;

    /// Full ordered history for a partner (oldest first), or `NotFound`.
    fn list_history(&self, partner_id: PartnerId) -> DomainResult<Vec<VerificationHistoryEntry>>;

    /// Snapshot read at one consistent point: a reader may observe the pre-
    /// or post-transition state but never a partially applied one.
    fn snapshot(&self, partner_id: PartnerId) -> DomainResult<VerificationSnapshot>;

    /// Atomically CAS the partner's verification state and append the audit
    /// entry. Fails with `Conflict` if `expected_status` is stale, `NotFound`
    /// if the partner does not exist; both leave the store untouched.
    fn commit_transition(
        &self,
        partner_id: PartnerId,
        record: TransitionRecord,
    ) -> DomainResult<(Partner, VerificationHistoryEntry)>;
}

impl<S> VerificationStore for Arc<S>
where
    S: VerificationStore + ?Sized,
{
    fn get_partner(&self, id: PartnerId) -> DomainResult<Partner> {
        (**self).get_partner(id)
    }

    fn list_partners(&self, status: Option<VerificationStatus>) -> DomainResult<Vec<Partner>> {
        (**self).list_partners(status)
    }

    fn list_history(&self, partner_id: PartnerId) -> DomainResult<Vec<VerificationHistoryEntry>> {
        (**self).list_history(partner_id)
    }

    fn snapshot(&self, partner_id: PartnerId) -> DomainResult<VerificationSnapshot> {
        (**self).snapshot(partner_id)
    }

    fn commit_transition(
        &self,
        partner_id: PartnerId,
        record: TransitionRecord,
    ) -> DomainResult<(Partner, VerificationHistoryEntry)> {
        (**self).commit_transition(partner_id, record)
    }
}
