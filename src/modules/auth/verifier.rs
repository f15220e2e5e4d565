use super::credentials::{hash_credential, verify_credential};
use super::error::AuthError;
use super::store::{Account, AccountStore};
use crate::modules::utils::logging::log_auth_event;

/// Salt fed to the dummy derivation when the username is unknown, so both
/// failure paths perform the same amount of hashing work.
const DUMMY_SALT: &str = "00000000000000000000000000000000";

/// Check a claimed (username, secret) pair against the stored accounts.
///
/// Returns the matching account unchanged. Verification mutates nothing:
/// no attempt counters, no lockouts, no login timestamps.
pub fn verify_credentials(
    store: &AccountStore,
    username: &str,
    password: &str,
) -> Result<Account, AuthError> {
    let account = match store.find_by_username(username) {
        Some(account) => account,
        None => {
            let _ = hash_credential(password, DUMMY_SALT);
            log_auth_event("login", username, false, Some("unknown username"));
            return Err(AuthError::UnknownUser);
        }
    };

    if !verify_credential(password, &account.salt, &account.credential_hash) {
        log_auth_event("login", username, false, Some("credential mismatch"));
        return Err(AuthError::InvalidCredential);
    }

    log_auth_event("login", username, true, None);
    Ok(account)
}
