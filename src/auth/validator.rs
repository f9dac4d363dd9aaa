//! Authentication validator
//!
//! Checks a handle/secret pair against the loaded credential list.
//! Comparison is plaintext: the portal is a mock-up without a security model.

use super::results::ValidationOutcome;
use crate::error::AuthError;
use crate::store::{CredentialStore, UserRecord};
use log::debug;

/// Finds the first record matching `handle`.
///
/// A record matches when its display name equals `handle` exactly, or when its
/// login handle contains `handle` case-insensitively. The substring rule is
/// loose on purpose: "perez" matches "juanperez".
pub fn find_user<'a>(users: &'a [UserRecord], handle: &str) -> Option<&'a UserRecord> {
    let needle = handle.to_lowercase();
    users
        .iter()
        .find(|u| u.display_name == handle || u.handle.to_lowercase().contains(&needle))
}

/// Validates a handle/secret pair against an explicit credential list.
pub fn check_credentials(users: &[UserRecord], handle: &str, secret: &str) -> ValidationOutcome {
    lookup(users, handle, secret).into()
}

fn lookup(users: &[UserRecord], handle: &str, secret: &str) -> Result<UserRecord, AuthError> {
    // An empty needle would match every handle
    if handle.trim().is_empty() {
        return Err(AuthError::MissingField("usuario".into()));
    }
    if secret.is_empty() {
        return Err(AuthError::MissingField("contraseña".into()));
    }

    let user = find_user(users, handle).ok_or_else(|| AuthError::UserNotFound(handle.into()))?;

    if user.password != secret {
        return Err(AuthError::WrongPassword(user.handle.clone()));
    }

    Ok(user.clone())
}

/// Loads the current credential list and validates the pair against it.
pub async fn authenticate(store: &CredentialStore, handle: &str, secret: &str) -> ValidationOutcome {
    let users = store.load_users().await;
    let outcome = check_credentials(&users, handle, secret);
    debug!("Authentication of {:?}: success={}", handle, outcome.is_success());
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fallback_users;

    #[test]
    fn test_display_name_exact_match() {
        let users = fallback_users();
        let outcome = check_credentials(&users, "Juan Perez", "123456");
        match outcome {
            ValidationOutcome::Success { user } => assert_eq!(user.handle, "juanperez"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_display_name_is_case_sensitive() {
        // "juan perez" is neither the display name nor a substring of any handle
        let users = fallback_users();
        assert_eq!(
            check_credentials(&users, "juan perez", "123456"),
            ValidationOutcome::Failure {
                reason: AuthError::UserNotFound("juan perez".into())
            }
        );
    }

    #[test]
    fn test_handle_substring_match() {
        let users = fallback_users();
        assert_eq!(find_user(&users, "PEREZ").map(|u| u.handle.as_str()), Some("juanperez"));
        assert_eq!(find_user(&users, "lopez").map(|u| u.handle.as_str()), Some("marialopez"));
    }

    #[test]
    fn test_first_matching_record_wins() {
        let users = vec![
            UserRecord::new("ana", "Ana", "a@example.com", "uno"),
            UserRecord::new("mariana", "Mariana", "m@example.com", "dos"),
        ];
        assert_eq!(find_user(&users, "ana").map(|u| u.password.as_str()), Some("uno"));
    }

    #[test]
    fn test_wrong_password() {
        let users = fallback_users();
        assert_eq!(
            check_credentials(&users, "juanperez", "wrong"),
            ValidationOutcome::Failure {
                reason: AuthError::WrongPassword("juanperez".into())
            }
        );
    }

    #[test]
    fn test_password_is_case_sensitive() {
        let users = vec![UserRecord::new("ana", "Ana", "a@example.com", "Secreto")];
        assert!(!check_credentials(&users, "ana", "secreto").is_success());
    }

    #[test]
    fn test_unknown_user() {
        let users = fallback_users();
        assert_eq!(
            check_credentials(&users, "nosuchuser", "x"),
            ValidationOutcome::Failure {
                reason: AuthError::UserNotFound("nosuchuser".into())
            }
        );
    }

    #[test]
    fn test_empty_fields() {
        let users = fallback_users();
        assert!(matches!(
            check_credentials(&users, "   ", "123456"),
            ValidationOutcome::Failure { reason: AuthError::MissingField(_) }
        ));
        assert!(matches!(
            check_credentials(&users, "admin", ""),
            ValidationOutcome::Failure { reason: AuthError::MissingField(_) }
        ));
    }

    #[tokio::test]
    async fn test_authenticate_with_fallback_store() {
        let store = CredentialStore::fallback_only();
        let outcome = authenticate(&store, "admin", "123456").await;
        assert_eq!(
            outcome.into_result().map(|u| u.display_name),
            Ok("Admin".to_string())
        );
    }
}
