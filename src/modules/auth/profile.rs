use serde::Serialize;

use super::error::AuthError;
use super::store::AccountStore;

/// Read-only public projection of an account for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub username: String,
    pub email: String,
}

/// Fetch the profile for the requested username.
///
/// The lookup key is always the caller-supplied username, never whatever
/// identity happens to be bound to a session. Read-only; no side effects.
pub fn resolve_profile(store: &AccountStore, username: &str) -> Result<ProfileView, AuthError> {
    match store.find_by_username(username) {
        Some(account) => Ok(ProfileView {
            username: account.username,
            email: account.email,
        }),
        None => Err(AuthError::UnknownUser),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::registry::register_account;
    use crate::modules::auth::session::{SessionManager, SessionToken};

    #[test]
    fn test_resolve_known_user() {
        let store = AccountStore::new();
        register_account(&store, "alice", "alice@x.com", "secret1").unwrap();

        let view = resolve_profile(&store, "alice").unwrap();
        assert_eq!(view.username, "alice");
        assert_eq!(view.email, "alice@x.com");
    }

    #[test]
    fn test_resolve_unknown_user() {
        let store = AccountStore::new();
        let result = resolve_profile(&store, "bob");
        assert!(matches!(result, Err(AuthError::UnknownUser)));
    }

    #[test]
    fn test_resolve_ignores_session_identity() {
        let store = AccountStore::new();
        register_account(&store, "alice", "alice@x.com", "secret1").unwrap();
        let bob = register_account(&store, "bob", "bob@x.com", "secret2").unwrap();

        // Bob is logged in, but the request names alice
        let sessions = SessionManager::new();
        let token = SessionToken::new("tok-1");
        sessions.establish(&token, &bob);

        let view = resolve_profile(&store, "alice").unwrap();
        assert_eq!(view.username, "alice");
        assert_eq!(view.email, "alice@x.com");
    }
}
