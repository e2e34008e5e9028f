//! `swapcart-verification` — partner verification workflow.
//!
//! The one subsystem of the operator console with real state-machine
//! semantics: a newly registered partner is reviewed, optionally asked for
//! clarification, and ultimately approved, rejected, or later suspended.
//!
//! Layout:
//! - [`status`]: the closed `VerificationStatus` enum and the transition table
//! - [`partner`]: the partner record and serviceable-pincode display data
//! - [`history`]: immutable audit entries and status replay
//! - [`store`]: storage ports (reads are narrow, writes go through one
//!   transactional commit)
//! - [`engine`]: the workflow engine — sole writer of verification state
//! - [`query`]: the consistent read path

pub mod engine;
pub mod history;
pub mod partner;
pub mod query;
pub mod status;
pub mod store;

pub use engine::{TransitionOutcome, WorkflowEngine};
pub use history::{replay, NewHistoryEntry, VerificationAction, VerificationHistoryEntry};
pub use partner::{Partner, ServiceablePincode};
pub use query::QueryService;
pub use status::VerificationStatus;
pub use store::{TransitionRecord, VerificationSnapshot, VerificationStore};
