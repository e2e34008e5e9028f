//! `swapcart-store` — storage backends for the verification workflow.
//!
//! Currently a single in-memory implementation used by the API and the test
//! suite; the [`VerificationStore`](swapcart_verification::VerificationStore)
//! port keeps a future SQL backend swappable without touching workflow code.

pub mod memory;

pub use memory::InMemoryVerificationStore;
