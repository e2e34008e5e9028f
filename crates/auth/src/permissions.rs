use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// Permission identifier.
///
/// Modeled as opaque strings (e.g. "partners.verify"). The wildcard `"*"`
/// means "allow all" without hardcoding every permission into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    /// Read partner listings and verification details.
    pub const PARTNERS_VIEW: &'static str = "partners.view";
    /// Ordinary review actions: approve, reject, request clarification.
    pub const PARTNERS_VERIFY: &'static str = "partners.verify";
    /// Privileged suspend/reinstate transitions.
    pub const PARTNERS_SUSPEND: &'static str = "partners.suspend";

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.as_str() == "*"
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role → permission mapping.
///
/// Convention: "admin" grants everything; unknown roles grant nothing.
pub fn permissions_for_role(role: &Role) -> Vec<Permission> {
    match role.as_str() {
        "admin" => vec![Permission::new("*")],
        "verifier" => vec![
            Permission::new(Permission::PARTNERS_VIEW),
            Permission::new(Permission::PARTNERS_VERIFY),
        ],
        "support" => vec![Permission::new(Permission::PARTNERS_VIEW)],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_gets_the_wildcard() {
        let perms = permissions_for_role(&Role::new("admin"));
        assert!(perms.iter().any(|p| p.is_wildcard()));
    }

    #[test]
    fn verifier_cannot_suspend() {
        let perms = permissions_for_role(&Role::new("verifier"));
        assert!(perms.iter().any(|p| p.as_str() == Permission::PARTNERS_VERIFY));
        assert!(!perms.iter().any(|p| p.as_str() == Permission::PARTNERS_SUSPEND));
        assert!(!perms.iter().any(|p| p.is_wildcard()));
    }

    #[test]
    fn unknown_roles_grant_nothing() {
        assert!(permissions_for_role(&Role::new("intern")).is_empty());
    }
}
