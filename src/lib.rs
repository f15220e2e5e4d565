// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{auth, utils};

// Re-export commonly used types
pub use modules::auth::error::AuthError;
pub use modules::auth::profile::ProfileView;
pub use modules::auth::session::{SessionManager, SessionState, SessionToken};
pub use modules::auth::store::{Account, AccountStore};

// Constants
pub const ACCOUNTS_FILE: &str = "accounts.json";
pub const LOG_FILE: &str = "application.log";

// Type aliases
pub type HmacSha256 = hmac::Hmac<sha2::Sha256>;
