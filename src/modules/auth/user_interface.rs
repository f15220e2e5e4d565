use std::path::Path;

use super::error::AuthError;
use super::profile::{resolve_profile, ProfileView};
use super::registry::register_account;
use super::session::{SessionManager, SessionToken};
use super::store::{save_account_store, AccountStore};
use super::verifier::verify_credentials;
use crate::modules::utils::logging::log_data_operation;

/// Decision handed back to the presentation layer after a form submission:
/// where to send the client next, and the message to flash there.
#[derive(Debug, PartialEq)]
pub enum FlowOutcome {
    Redirect {
        location: &'static str,
        flash: String,
    },
}

impl FlowOutcome {
    fn home(flash: String) -> Self {
        FlowOutcome::Redirect {
            location: "/",
            flash,
        }
    }
}

/// Handle a registration form submission.
///
/// On success the new account is durably persisted before the confirmation
/// is reported. User-facing failures become a redirect back to the form;
/// only a persistence fault propagates as an error.
pub fn process_registration(
    store: &AccountStore,
    accounts_file: &Path,
    username: &str,
    email: &str,
    password: &str,
) -> Result<FlowOutcome, AuthError> {
    match register_account(store, username, email, password) {
        Ok(account) => {
            if let Err(e) = save_account_store(store, accounts_file) {
                log_data_operation(
                    "create_account",
                    username,
                    "account_store",
                    false,
                    Some(&format!("failed to save store: {}", e)),
                );
                return Err(AuthError::Store(e));
            }
            log_data_operation(
                "create_account",
                username,
                "account_store",
                true,
                Some("account created and store saved"),
            );
            Ok(FlowOutcome::home(format!(
                "Thanks for registering {}!",
                account.username
            )))
        }
        Err(AuthError::DuplicateUsername) => Ok(FlowOutcome::Redirect {
            location: "/register",
            flash: "Username already exists. Please choose a different one.".to_string(),
        }),
        Err(AuthError::Validation(field)) => Ok(FlowOutcome::Redirect {
            location: "/register",
            flash: format!("{} cannot be empty.", capitalize(field)),
        }),
        Err(e) => Err(e),
    }
}

/// Handle a login form submission.
///
/// Both failure causes collapse into one generic message so the response
/// does not confirm whether the username exists.
pub fn process_login(
    store: &AccountStore,
    sessions: &SessionManager,
    token: &SessionToken,
    username: &str,
    password: &str,
) -> FlowOutcome {
    match verify_credentials(store, username, password) {
        Ok(account) => {
            sessions.establish(token, &account);
            FlowOutcome::home(format!("{} has successfully logged in.", account.username))
        }
        Err(_) => FlowOutcome::Redirect {
            location: "/login",
            flash: "Invalid username or password.".to_string(),
        },
    }
}

/// Handle a logout request. Never fails, whatever state the session is in.
pub fn process_logout(sessions: &SessionManager, token: &SessionToken) -> FlowOutcome {
    sessions.terminate(token);
    FlowOutcome::home("You have logged out.".to_string())
}

/// Fetch the profile for the username named in the request path.
pub fn show_profile(store: &AccountStore, username: &str) -> Result<ProfileView, AuthError> {
    resolve_profile(store, username)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
