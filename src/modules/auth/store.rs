use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{self, Read, Write};
use std::path::Path;

use super::error::AuthError;

/// Represents a single account with its authentication details
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Account {
    pub id: String, // Opaque identifier assigned at creation, immutable
    pub username: String, // Natural key; case-sensitive, never empty
    pub email: String,
    pub credential_hash: String, // PBKDF2 hash of the secret, hex-encoded
    pub salt: String,            // Per-account salt, hex-encoded
    pub created_at: u64,
}

/// Container for all accounts, keyed by username.
///
/// The map lives behind a lock so the uniqueness invariant holds under
/// concurrent registration attempts: the duplicate check and the insert
/// happen under one write guard.
pub struct AccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl AccountStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    fn from_accounts(accounts: HashMap<String, Account>) -> Self {
        Self {
            accounts: RwLock::new(accounts),
        }
    }

    /// Insert a new account, enforcing username uniqueness.
    ///
    /// Exactly one of any number of racing inserts for the same username
    /// succeeds; the rest observe `DuplicateUsername`. An existing record is
    /// never overwritten.
    pub fn insert_unique(&self, account: Account) -> Result<(), AuthError> {
        let mut accounts = self.accounts.write();
        if accounts.contains_key(&account.username) {
            return Err(AuthError::DuplicateUsername);
        }
        accounts.insert(account.username.clone(), account);
        Ok(())
    }

    /// Look up an account by username.
    pub fn find_by_username(&self, username: &str) -> Option<Account> {
        self.accounts.read().get(username).cloned()
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.read().is_empty()
    }

    fn snapshot(&self) -> HashMap<String, Account> {
        self.accounts.read().clone()
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Function to save the account store to disk as JSON
pub fn save_account_store(store: &AccountStore, path: &Path) -> io::Result<()> {
    let data = serde_json::to_string_pretty(&store.snapshot())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    std::fs::File::create(path)?.write_all(data.as_bytes())?;
    Ok(())
}

/// Function to load the account store from disk.
///
/// A missing or empty file yields a fresh store (first run); a file that
/// exists but cannot be parsed is a persistence fault and propagates.
pub fn load_account_store(path: &Path) -> io::Result<AccountStore> {
    let mut file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(AccountStore::new()),
        Err(e) => return Err(e),
    };

    let mut data = String::new();
    file.read_to_string(&mut data)?;

    if data.trim().is_empty() {
        return Ok(AccountStore::new());
    }

    let accounts: HashMap<String, Account> = serde_json::from_str(&data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(AccountStore::from_accounts(accounts))
}
