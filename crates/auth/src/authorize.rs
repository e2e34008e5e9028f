//! Pure authorization policy check.

use crate::permissions::{permissions_for_role, Permission};
use crate::roles::Role;
use crate::token::AuthError;

/// Authorize a role against a required permission.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(role: &Role, required: &Permission) -> Result<(), AuthError> {
    let granted = permissions_for_role(role);

    if granted
        .iter()
        .any(|p| p.is_wildcard() || p.as_str() == required.as_str())
    {
        Ok(())
    } else {
        Err(AuthError::Forbidden(required.as_str().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_passes_any_check() {
        let admin = Role::new("admin");
        for perm in [
            Permission::PARTNERS_VIEW,
            Permission::PARTNERS_VERIFY,
            Permission::PARTNERS_SUSPEND,
        ] {
            assert!(authorize(&admin, &Permission::new(perm)).is_ok());
        }
    }

    #[test]
    fn verifier_is_forbidden_from_suspension() {
        let verifier = Role::new("verifier");
        assert!(authorize(&verifier, &Permission::new(Permission::PARTNERS_VERIFY)).is_ok());

        let err = authorize(&verifier, &Permission::new(Permission::PARTNERS_SUSPEND))
            .unwrap_err();
        match err {
            AuthError::Forbidden(perm) => assert_eq!(perm, Permission::PARTNERS_SUSPEND),
            other => panic!("expected Forbidden, got {other:?}"),
        }
    }

    #[test]
    fn support_can_only_view() {
        let support = Role::new("support");
        assert!(authorize(&support, &Permission::new(Permission::PARTNERS_VIEW)).is_ok());
        assert!(authorize(&support, &Permission::new(Permission::PARTNERS_VERIFY)).is_err());
    }
}
