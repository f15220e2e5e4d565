use super::credentials::{generate_salt, hash_credential};
use super::error::AuthError;
use super::store::{Account, AccountStore};
use crate::modules::utils::logging::log_auth_event;
use crate::modules::utils::time::get_current_timestamp;

/// Create a new account from the registration form fields.
///
/// All three fields are required; an empty field is a validation error and
/// the store is never touched. Uniqueness is enforced by the store itself,
/// so racing registrations for one username produce exactly one account.
pub fn register_account(
    store: &AccountStore,
    username: &str,
    email: &str,
    password: &str,
) -> Result<Account, AuthError> {
    if username.is_empty() {
        return Err(AuthError::Validation("username"));
    }
    if email.is_empty() {
        return Err(AuthError::Validation("email"));
    }
    if password.is_empty() {
        return Err(AuthError::Validation("password"));
    }

    let salt = generate_salt();
    let account = Account {
        id: uuid::Uuid::new_v4().to_string(),
        username: username.to_string(),
        email: email.to_string(),
        credential_hash: hash_credential(password, &salt),
        salt,
        created_at: get_current_timestamp(),
    };

    match store.insert_unique(account.clone()) {
        Ok(()) => {
            log_auth_event("register", username, true, None);
            Ok(account)
        }
        Err(e) => {
            log_auth_event("register", username, false, Some("username already exists"));
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_register_creates_account() {
        let store = AccountStore::new();
        let account = register_account(&store, "alice", "alice@x.com", "secret1").unwrap();

        assert_eq!(account.username, "alice");
        assert_eq!(account.email, "alice@x.com");
        assert!(!account.id.is_empty());
        // The secret itself is never stored
        assert_ne!(account.credential_hash, "secret1");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_register_duplicate_username_fails() {
        let store = AccountStore::new();
        register_account(&store, "alice", "alice@x.com", "secret1").unwrap();

        let result = register_account(&store, "alice", "other@x.com", "secret2");
        assert!(matches!(result, Err(AuthError::DuplicateUsername)));
        assert_eq!(store.len(), 1);

        // The first registration is the one that survives
        let account = store.find_by_username("alice").unwrap();
        assert_eq!(account.email, "alice@x.com");
    }

    #[test]
    fn test_register_empty_fields_rejected() {
        let store = AccountStore::new();

        let result = register_account(&store, "", "a@x.com", "secret1");
        assert!(matches!(result, Err(AuthError::Validation("username"))));

        let result = register_account(&store, "alice", "", "secret1");
        assert!(matches!(result, Err(AuthError::Validation("email"))));

        let result = register_account(&store, "alice", "a@x.com", "");
        assert!(matches!(result, Err(AuthError::Validation("password"))));

        assert!(store.is_empty());
    }

    #[test]
    fn test_fresh_ids_per_account() {
        let store = AccountStore::new();
        let a = register_account(&store, "alice", "a@x.com", "pw1").unwrap();
        let b = register_account(&store, "bob", "b@x.com", "pw2").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_concurrent_registration_single_winner() {
        let store = Arc::new(AccountStore::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                let email = format!("alice{}@x.com", i);
                thread::spawn(move || {
                    register_account(&store, "alice", &email, "secret1").is_ok()
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(store.len(), 1);
    }
}
