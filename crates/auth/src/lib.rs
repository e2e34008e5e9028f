//! `swapcart-auth` — session/identity guard primitives.
//!
//! Decoupled from HTTP and storage: claim validation and authorization are
//! pure functions, token verification sits behind a trait. The two failure
//! modes stay distinct so callers can tell "log in again" from "not
//! permitted".

pub mod authorize;
pub mod claims;
pub mod permissions;
pub mod roles;
pub mod token;

pub use authorize::authorize;
pub use claims::{validate_claims, AdminClaims, TokenValidationError};
pub use permissions::{permissions_for_role, Permission};
pub use roles::Role;
pub use token::{AuthError, Hs256TokenValidator, TokenValidator};
