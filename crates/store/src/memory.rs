//! In-memory verification store.
//!
//! Intended for dev/tests and as the reference implementation of the store
//! port's atomicity contract: one `RwLock` guards each partner's record and
//! history together, so the status CAS and the history append commit as a
//! single unit of work, and snapshot reads observe either the pre- or the
//! post-transition state, never a partially applied one.

use std::collections::HashMap;
use std::sync::RwLock;

use swapcart_core::{DomainError, DomainResult, EntryId, PartnerId};
use swapcart_verification::{
    Partner, ServiceablePincode, TransitionRecord, VerificationHistoryEntry,
    VerificationSnapshot, VerificationStatus, VerificationStore,
};

#[derive(Debug, Clone)]
struct PartnerRecord {
    partner: Partner,
    pincodes: Vec<ServiceablePincode>,
    history: Vec<VerificationHistoryEntry>,
}

/// In-memory store. Not optimized for large partner counts.
#[derive(Debug, Default)]
pub struct InMemoryVerificationStore {
    records: RwLock<HashMap<PartnerId, PartnerRecord>>,
}

impl InMemoryVerificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a partner as registration (outside this core) would have left it.
    ///
    /// Fails with `Conflict` on a duplicate id; registration is the only
    /// path that creates rows.
    pub fn seed_partner(
        &self,
        partner: Partner,
        pincodes: Vec<ServiceablePincode>,
    ) -> DomainResult<()> {
        let mut records = self.write_locked()?;
        if records.contains_key(&partner.id) {
            return Err(DomainError::conflict(format!(
                "partner {} already exists",
                partner.id
            )));
        }

        records.insert(
            partner.id,
            PartnerRecord {
                partner,
                pincodes,
                history: Vec::new(),
            },
        );
        Ok(())
    }

    fn write_locked(
        &self,
    ) -> DomainResult<std::sync::RwLockWriteGuard<'_, HashMap<PartnerId, PartnerRecord>>> {
        self.records
            .write()
            .map_err(|_| DomainError::storage("lock poisoned"))
    }

    fn read_locked(
        &self,
    ) -> DomainResult<std::sync::RwLockReadGuard<'_, HashMap<PartnerId, PartnerRecord>>> {
        self.records
            .read()
            .map_err(|_| DomainError::storage("lock poisoned"))
    }
}

impl VerificationStore for InMemoryVerificationStore {
    fn get_partner(&self, id: PartnerId) -> DomainResult<Partner> {
        let records = self.read_locked()?;
        records
            .get(&id)
            .map(|r| r.partner.clone())
            .ok_or(DomainError::NotFound)
    }

    fn list_partners(&self, status: Option<VerificationStatus>) -> DomainResult<Vec<Partner>> {
        let records = self.read_locked()?;
        Ok(records
            .values()
            .map(|r| r.partner.clone())
            .filter(|p| status.is_none_or(|s| p.verification_status == s))
            .collect())
    }

    fn list_history(&self, partner_id: PartnerId) -> DomainResult<Vec<VerificationHistoryEntry>> {
        let records = self.read_locked()?;
        records
            .get(&partner_id)
            .map(|r| r.history.clone())
            .ok_or(DomainError::NotFound)
    }

    fn snapshot(&self, partner_id: PartnerId) -> DomainResult<VerificationSnapshot> {
        let records = self.read_locked()?;
        let record = records.get(&partner_id).ok_or(DomainError::NotFound)?;

        Ok(VerificationSnapshot {
            partner: record.partner.clone(),
            serviceable_pincodes: record.pincodes.clone(),
            verification_history: record.history.clone(),
        })
    }

    fn commit_transition(
        &self,
        partner_id: PartnerId,
        record: TransitionRecord,
    ) -> DomainResult<(Partner, VerificationHistoryEntry)> {
        let mut records = self.write_locked()?;
        let stored = records.get_mut(&partner_id).ok_or(DomainError::NotFound)?;

        let current = stored.partner.verification_status;
        if current != record.expected_status {
            return Err(DomainError::conflict(format!(
                "expected status '{}', found '{}'",
                record.expected_status, current
            )));
        }

        // Single critical section: status write and history append commit
        // together or not at all.
        stored.partner.verification_status = record.new_status;
        stored.partner.rejection_reason = record.rejection_reason;

        let entry = record.entry.committed(EntryId::new());
        stored.history.push(entry.clone());

        debug_assert!(stored.partner.rejection_invariant_holds());

        Ok((stored.partner.clone(), entry))
    }
}
