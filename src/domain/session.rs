use serde::{Deserialize, Serialize};

use crate::domain::user::{Role, User};

/// The client-held record of the currently signed-in identity and its
/// bearer credential.
///
/// Fields are private so the pair can only be set or cleared together:
/// `is_authenticated()` is true exactly when both are present, and no
/// partially-populated session can be constructed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    user: Option<User>,
    token: Option<String>,
}

impl Session {
    /// The empty session every process starts with.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A fully populated session. The only way to become authenticated.
    pub fn authenticated(user: User, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Drop identity and credential together.
    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applicant() -> User {
        User {
            id: 3,
            username: "dana".to_string(),
            role: Role::Applicant,
        }
    }

    #[test]
    fn test_anonymous_is_not_authenticated() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(session.token().is_none());
        assert!(session.role().is_none());
    }

    #[test]
    fn test_authenticated_iff_user_and_token_present() {
        let session = Session::authenticated(applicant(), "tok-1".to_string());
        assert!(session.is_authenticated());
        assert_eq!(session.user().map(|u| u.id), Some(3));
        assert_eq!(session.token(), Some("tok-1"));
        assert_eq!(session.role(), Some(Role::Applicant));
    }

    #[test]
    fn test_clear_drops_both() {
        let mut session = Session::authenticated(applicant(), "tok-1".to_string());
        session.clear();
        assert!(!session.is_authenticated());
        assert_eq!(session, Session::anonymous());
    }
}
