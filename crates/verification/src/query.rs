//! Read path for the operator console.
//!
//! Entirely decoupled from the write path: queries never take the engine's
//! commit route and never block it. The store's snapshot read guarantees the
//! returned history is never newer than the returned status.

use swapcart_core::{DomainResult, PartnerId};

use crate::partner::Partner;
use crate::status::VerificationStatus;
use crate::store::{VerificationSnapshot, VerificationStore};

/// Assembles a partner's profile, serviceable areas, and full audit history
/// into one consistent view.
#[derive(Debug)]
pub struct QueryService<S> {
    store: S,
}

impl<S> QueryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: VerificationStore> QueryService<S> {
    /// The full verification view for one partner, or `NotFound`. Never a
    /// partial result: an unknown id is an error, not an empty view.
    pub fn verification_details(&self, partner_id: PartnerId) -> DomainResult<VerificationSnapshot> {
        self.store.snapshot(partner_id)
    }

    /// Partners whose review is still open, oldest application first.
    pub fn pending_partners(&self) -> DomainResult<Vec<Partner>> {
        let mut partners: Vec<Partner> = self
            .store
            .list_partners(None)?
            .into_iter()
            .filter(|p| p.verification_status.review_open())
            .collect();
        partners.sort_by_key(|p| p.created_at);
        Ok(partners)
    }

    /// All partners, optionally filtered by status, oldest first.
    pub fn list_partners(
        &self,
        status: Option<VerificationStatus>,
    ) -> DomainResult<Vec<Partner>> {
        let mut partners = self.store.list_partners(status)?;
        partners.sort_by_key(|p| p.created_at);
        Ok(partners)
    }
}
