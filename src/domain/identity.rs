use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of an authenticated principal. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Provider,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Customer => write!(f, "customer"),
            Role::Provider => write!(f, "provider"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// An authenticated principal. The credential is never part of this struct;
/// it lives only in the identity service's credential map, so anything handed
/// back to callers (or written to the session slot) is credential-free by
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub phone: Option<String>,
    pub location: Option<String>,
    /// Customers are approved at registration; providers stay unapproved
    /// until an admin acts.
    pub is_approved: bool,
    pub is_blocked: bool,
}

/// Payload for registering a new identity.
#[derive(Clone)]
pub struct RegisterData {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    pub phone: Option<String>,
    pub location: Option<String>,
}

impl fmt::Debug for RegisterData {
    // Manual impl so the password never lands in logs via #[instrument].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterData")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("phone", &self.phone)
            .field("location", &self.location)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_data_debug_redacts_the_password() {
        let data = RegisterData {
            email: "a@x.com".to_string(),
            password: "hunter2".to_string(),
            name: "Demo".to_string(),
            role: Role::Customer,
            phone: None,
            location: None,
        };
        let printed = format!("{:?}", data);
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("hunter2"));
    }
}
