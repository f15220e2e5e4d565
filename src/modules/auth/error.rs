use std::fmt;
use std::io;

/// Shared error taxonomy for the account and session subsystem.
///
/// The first four variants are recoverable, user-facing conditions that the
/// presentation layer turns into a message plus a redirect. `Store` is a
/// persistence fault and is the only variant callers may treat as fatal.
#[derive(Debug)]
pub enum AuthError {
    /// A required field was empty. Carries the field name.
    Validation(&'static str),
    /// The username is already held by another account.
    DuplicateUsername,
    /// No account exists for the given username.
    UnknownUser,
    /// The account exists but the supplied secret does not match.
    InvalidCredential,
    /// The account store could not be read or written.
    Store(io::Error),
}

impl AuthError {
    /// Whether this error is a persistence fault rather than a user-facing
    /// condition.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AuthError::Store(_))
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Validation(field) => write!(f, "{} must not be empty", field),
            AuthError::DuplicateUsername => write!(f, "username already exists"),
            AuthError::UnknownUser => write!(f, "unknown user"),
            AuthError::InvalidCredential => write!(f, "invalid credentials"),
            AuthError::Store(e) => write!(f, "account store error: {}", e),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for AuthError {
    fn from(e: io::Error) -> Self {
        AuthError::Store(e)
    }
}
