//! `swapcart-core` — shared domain foundation.
//!
//! Strongly-typed identifiers and the error taxonomy used across the
//! verification workflow. No infrastructure concerns live here.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{AdminId, EntryId, PartnerId};
