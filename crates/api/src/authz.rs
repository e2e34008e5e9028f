//! Handler-boundary permission guard.
//!
//! Enforced before the workflow engine is touched, keeping domain code
//! auth-agnostic.

use swapcart_auth::{authorize, AuthError, Permission};

use crate::context::AdminContext;

/// Check that the authenticated admin holds the required permission.
pub fn require(admin: &AdminContext, permission: &'static str) -> Result<(), AuthError> {
    authorize(admin.role(), &Permission::new(permission))
}
