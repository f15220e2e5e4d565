use parking_lot::RwLock;
use std::collections::HashMap;

use super::store::Account;

/// Opaque client-bound token supplied by the transport layer per request.
///
/// The core never mints these; whatever cookie or header value the transport
/// uses to identify one client interaction becomes the token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

/// The two states a client interaction can be in.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Anonymous,
    Authenticated { account_id: String, username: String },
}

/// Binds authenticated identities to client interactions, keyed by token.
///
/// Pure in-memory state; nothing survives the process. Distinct tokens are
/// fully isolated from one another. The manager receives already-verified
/// accounts and never reaches into the account store.
pub struct SessionManager {
    sessions: RwLock<HashMap<SessionToken, SessionState>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Bind the account's identity to the token.
    ///
    /// Always succeeds; any identity previously bound to the token is
    /// overwritten.
    pub fn establish(&self, token: &SessionToken, account: &Account) {
        self.sessions.write().insert(
            token.clone(),
            SessionState::Authenticated {
                account_id: account.id.clone(),
                username: account.username.clone(),
            },
        );
    }

    /// Return the token to the anonymous state.
    ///
    /// A safe no-op when the token was never established or was already
    /// terminated.
    pub fn terminate(&self, token: &SessionToken) {
        self.sessions.write().remove(token);
    }

    /// The identity bound to the token, if any. Read-only.
    pub fn current(&self, token: &SessionToken) -> Option<(String, String)> {
        match self.sessions.read().get(token) {
            Some(SessionState::Authenticated {
                account_id,
                username,
            }) => Some((account_id.clone(), username.clone())),
            _ => None,
        }
    }

    /// The full state for the token. Read-only.
    pub fn state(&self, token: &SessionToken) -> SessionState {
        self.sessions
            .read()
            .get(token)
            .cloned()
            .unwrap_or(SessionState::Anonymous)
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::registry::register_account;
    use crate::modules::auth::store::AccountStore;

    fn alice() -> Account {
        let store = AccountStore::new();
        register_account(&store, "alice", "alice@x.com", "secret1").unwrap()
    }

    #[test]
    fn test_establish_then_current() {
        let sessions = SessionManager::new();
        let token = SessionToken::new("tok-1");
        let account = alice();

        sessions.establish(&token, &account);

        let (account_id, username) = sessions.current(&token).unwrap();
        assert_eq!(account_id, account.id);
        assert_eq!(username, "alice");
        assert_eq!(
            sessions.state(&token),
            SessionState::Authenticated {
                account_id: account.id,
                username: "alice".to_string(),
            }
        );
    }

    #[test]
    fn test_terminate_is_idempotent() {
        let sessions = SessionManager::new();
        let token = SessionToken::new("tok-1");

        // Terminating a session that never existed is not an error
        sessions.terminate(&token);
        assert_eq!(sessions.state(&token), SessionState::Anonymous);

        sessions.establish(&token, &alice());
        sessions.terminate(&token);
        assert!(sessions.current(&token).is_none());

        // And terminating twice is fine too
        sessions.terminate(&token);
        assert_eq!(sessions.state(&token), SessionState::Anonymous);
    }

    #[test]
    fn test_establish_overwrites_prior_identity() {
        let store = AccountStore::new();
        let first = register_account(&store, "alice", "alice@x.com", "secret1").unwrap();
        let second = register_account(&store, "bob", "bob@x.com", "secret2").unwrap();

        let sessions = SessionManager::new();
        let token = SessionToken::new("tok-1");

        sessions.establish(&token, &first);
        sessions.establish(&token, &second);

        let (account_id, username) = sessions.current(&token).unwrap();
        assert_eq!(account_id, second.id);
        assert_eq!(username, "bob");
    }

    #[test]
    fn test_tokens_are_isolated() {
        let sessions = SessionManager::new();
        let one = SessionToken::new("tok-1");
        let two = SessionToken::new("tok-2");

        sessions.establish(&one, &alice());

        assert!(sessions.current(&one).is_some());
        assert!(sessions.current(&two).is_none());

        sessions.terminate(&two);
        assert!(sessions.current(&one).is_some());
    }
}
