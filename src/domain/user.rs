use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// An account identity as the portal reports it after login.
/// The portal assigns ids; the client never invents one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

/// Account role, fixed at account creation. Not mutable from the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Applicant,
    Admin,
}

impl Role {
    /// Parse a role string from the wire or from local storage.
    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "applicant" => Ok(Role::Applicant),
            "admin" => Ok(Role::Admin),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Applicant => write!(f, "applicant"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::parse("applicant").unwrap(), Role::Applicant);
        assert_eq!(Role::parse("admin").unwrap(), Role::Admin);
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Applicant.to_string(), "applicant");
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(Role::parse("superuser").is_err());
        assert!(Role::parse("").is_err());
        assert!(Role::parse("Admin").is_err());
    }
}
