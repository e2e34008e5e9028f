use swapcart_auth::Role;
use swapcart_core::AdminId;

/// Authenticated admin identity for a request.
///
/// Inserted by the auth middleware; present for all `/admin` routes. There is
/// no ambient logged-in state anywhere — identity flows through this value
/// per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminContext {
    admin_id: AdminId,
    email: String,
    role: Role,
}

impl AdminContext {
    pub fn new(admin_id: AdminId, email: String, role: Role) -> Self {
        Self {
            admin_id,
            email,
            role,
        }
    }

    pub fn admin_id(&self) -> AdminId {
        self.admin_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> &Role {
        &self.role
    }
}
