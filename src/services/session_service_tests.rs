// src/services/session_service_tests.rs
//
// Session Manager tests
//
// INVARIANTS TESTED:
// - authenticated iff user and token are both present
// - durable storage is written before the in-memory update
// - logout erases storage, the installed token and memory, idempotently
// - expected login failures are indistinguishable from each other

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::domain::{Role, User};
    use crate::error::AppError;
    use crate::integrations::{LoginGrant, MockCredentialStore, PortalClient};
    use crate::repositories::{MockCredentialRepository, PersistedCredential};
    use crate::services::session_service::{LoginOutcome, RegisterOutcome, SessionManager};

    fn applicant() -> User {
        User {
            id: 3,
            username: "dana".to_string(),
            role: Role::Applicant,
        }
    }

    fn grant() -> LoginGrant {
        LoginGrant {
            user: applicant(),
            token: "tok-1".to_string(),
        }
    }

    fn persisted() -> PersistedCredential {
        PersistedCredential {
            user: applicant(),
            token: "tok-1".to_string(),
        }
    }

    /// Storage that is empty and accepts writes/clears.
    fn empty_storage() -> MockCredentialRepository {
        let mut storage = MockCredentialRepository::new();
        storage.expect_load().returning(|| Ok(None));
        storage.expect_save().returning(|_| Ok(()));
        storage.expect_clear().returning(|| Ok(()));
        storage
    }

    fn manager(
        credentials: MockCredentialStore,
        storage: MockCredentialRepository,
    ) -> (SessionManager, Arc<PortalClient>) {
        let transport = Arc::new(PortalClient::new("http://localhost:5000"));
        let manager = SessionManager::new(
            Arc::new(credentials),
            Arc::new(storage),
            Arc::clone(&transport),
        );
        (manager, transport)
    }

    // ========================================================================
    // restore
    // ========================================================================

    #[test]
    fn test_restore_populates_session_and_installs_token() {
        let mut storage = MockCredentialRepository::new();
        storage.expect_load().returning(|| Ok(Some(persisted())));

        let (manager, transport) = manager(MockCredentialStore::new(), storage);
        manager.restore().unwrap();

        assert!(manager.is_authenticated());
        assert_eq!(manager.current_user().map(|u| u.id), Some(3));
        assert_eq!(manager.role(), Some(Role::Applicant));
        assert!(transport.has_token());
    }

    #[test]
    fn test_restore_with_empty_storage_stays_anonymous() {
        let mut storage = MockCredentialRepository::new();
        storage.expect_load().returning(|| Ok(None));

        let (manager, transport) = manager(MockCredentialStore::new(), storage);
        manager.restore().unwrap();

        assert!(!manager.is_authenticated());
        assert!(manager.current_user().is_none());
        assert!(!transport.has_token());
    }

    // ========================================================================
    // login
    // ========================================================================

    #[tokio::test]
    async fn test_login_success_persists_then_authenticates() {
        let mut credentials = MockCredentialStore::new();
        credentials
            .expect_login()
            .returning(|_, _| Ok(grant()));

        let mut storage = MockCredentialRepository::new();
        storage
            .expect_save()
            .times(1)
            .withf(|c| c.user.id == 3 && c.token == "tok-1")
            .returning(|_| Ok(()));

        let (manager, transport) = manager(credentials, storage);
        let outcome = manager.login("dana", "pw").await.unwrap();

        assert_eq!(outcome, LoginOutcome::Success(applicant()));
        assert!(manager.is_authenticated());
        assert!(transport.has_token());
    }

    #[tokio::test]
    async fn test_login_rejected_credentials_is_a_failure_outcome() {
        let mut credentials = MockCredentialStore::new();
        credentials
            .expect_login()
            .returning(|_, _| Err(AppError::Authentication));

        let mut storage = MockCredentialRepository::new();
        storage.expect_save().times(0);

        let (manager, transport) = manager(credentials, storage);
        let outcome = manager.login("dana", "wrong").await.unwrap();

        assert!(matches!(outcome, LoginOutcome::Failure { .. }));
        assert!(!manager.is_authenticated());
        assert!(!transport.has_token());
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let rejected = {
            let mut credentials = MockCredentialStore::new();
            credentials
                .expect_login()
                .returning(|_, _| Err(AppError::Authentication));
            let (manager, _) = manager(credentials, empty_storage());
            manager.login("dana", "wrong").await.unwrap()
        };

        let unreachable = {
            let mut credentials = MockCredentialStore::new();
            credentials
                .expect_login()
                .returning(|_, _| Err(AppError::Remote("connection refused".to_string())));
            let (manager, _) = manager(credentials, empty_storage());
            manager.login("dana", "pw").await.unwrap()
        };

        // Same outcome, same message: the caller cannot tell which factor
        // failed, or whether the portal was even reachable.
        assert_eq!(rejected, unreachable);
    }

    #[tokio::test]
    async fn test_login_persistence_failure_leaves_session_anonymous() {
        let mut credentials = MockCredentialStore::new();
        credentials.expect_login().returning(|_, _| Ok(grant()));

        let mut storage = MockCredentialRepository::new();
        storage
            .expect_save()
            .returning(|_| Err(AppError::Other("disk full".to_string())));

        let (manager, transport) = manager(credentials, storage);
        let result = manager.login("dana", "pw").await;

        // Storage is written before memory; a failed write must not leave a
        // session that would not survive a restart.
        assert!(result.is_err());
        assert!(!manager.is_authenticated());
        assert!(!transport.has_token());
    }

    // ========================================================================
    // register
    // ========================================================================

    #[tokio::test]
    async fn test_register_success_does_not_authenticate() {
        let mut credentials = MockCredentialStore::new();
        credentials.expect_register().returning(|_, _, _| Ok(()));

        let (manager, transport) = manager(credentials, empty_storage());
        let outcome = manager.register("dana", "dana@example.com", "pw").await.unwrap();

        assert_eq!(outcome, RegisterOutcome::Success);
        assert!(!manager.is_authenticated());
        assert!(!transport.has_token());
    }

    #[tokio::test]
    async fn test_register_duplicate_surfaces_portal_message() {
        let mut credentials = MockCredentialStore::new();
        credentials
            .expect_register()
            .returning(|_, _, _| Err(AppError::Validation("User already exists!".to_string())));

        let (manager, _) = manager(credentials, empty_storage());
        let outcome = manager.register("dana", "dana@example.com", "pw").await.unwrap();

        assert_eq!(
            outcome,
            RegisterOutcome::Failure {
                message: "User already exists!".to_string()
            }
        );
    }

    // ========================================================================
    // logout
    // ========================================================================

    #[tokio::test]
    async fn test_logout_clears_storage_token_and_memory() {
        let mut credentials = MockCredentialStore::new();
        credentials.expect_login().returning(|_, _| Ok(grant()));

        let mut storage = MockCredentialRepository::new();
        storage.expect_save().returning(|_| Ok(()));
        storage.expect_clear().times(1).returning(|| Ok(()));

        let (manager, transport) = manager(credentials, storage);
        manager.login("dana", "pw").await.unwrap();
        manager.logout().unwrap();

        assert!(!manager.is_authenticated());
        assert!(manager.current_user().is_none());
        assert!(!transport.has_token());
    }

    #[test]
    fn test_logout_twice_equals_logout_once() {
        let mut storage = MockCredentialRepository::new();
        storage.expect_clear().times(2).returning(|| Ok(()));

        let (manager, transport) = manager(MockCredentialStore::new(), storage);
        manager.logout().unwrap();
        let after_once = manager.session();

        manager.logout().unwrap();
        assert_eq!(manager.session(), after_once);
        assert!(!transport.has_token());
    }

    #[test]
    fn test_restore_then_logout_equals_never_restored() {
        let mut storage = MockCredentialRepository::new();
        storage.expect_load().returning(|| Ok(Some(persisted())));
        storage.expect_clear().returning(|| Ok(()));

        let (manager, transport) = manager(MockCredentialStore::new(), storage);
        manager.restore().unwrap();
        manager.logout().unwrap();

        let (never_restored, _) = self::manager(MockCredentialStore::new(), empty_storage());

        assert_eq!(manager.session(), never_restored.session());
        assert!(!transport.has_token());
    }
}
