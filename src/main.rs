use clap::{Arg, Command}; // Command-line argument parsing
use rand::Rng;
use std::path::{Path, PathBuf};
use std::process;

use grocer_pass::auth::store::{load_account_store, AccountStore};
use grocer_pass::auth::user_interface::{
    process_login, process_logout, process_registration, show_profile, FlowOutcome,
};
use grocer_pass::utils::io::{read_line, read_password};
use grocer_pass::utils::logging::initialize_logging;
use grocer_pass::{AuthError, SessionManager, SessionState, SessionToken, ACCOUNTS_FILE};

/// Function to show the available actions
fn show_menu() {
    println!("\n=== Grocer Pass ===");
    println!("1. Register new account   (or type 'register')");
    println!("2. Login                  (or type 'login')");
    println!("3. Logout                 (or type 'logout')");
    println!("4. View a profile         (or type 'profile')");
    println!("5. Who am I               (or type 'whoami')");
    println!("6. Exit                   (or type 'exit')");
    println!("\nEnter your choice         (1-6 or command):");
}

/// Mint the opaque token identifying this client interaction.
///
/// A web transport would use its session cookie here; the interactive
/// binary plays that role for one run.
fn mint_session_token() -> SessionToken {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..32).map(|_| rng.gen()).collect();
    SessionToken::new(hex::encode(bytes))
}

fn apply_outcome(outcome: FlowOutcome) {
    let FlowOutcome::Redirect { flash, .. } = outcome;
    println!("\n{}", flash);
}

fn handle_register(store: &AccountStore, accounts_file: &Path) {
    println!("\nEnter desired username:");
    let username = match read_line() {
        Ok(input) => input,
        Err(e) => {
            println!("Error reading input: {}", e);
            return;
        }
    };

    println!("Enter your email address:");
    let email = match read_line() {
        Ok(input) => input,
        Err(e) => {
            println!("Error reading input: {}", e);
            return;
        }
    };

    println!("Enter password:");
    let password = match read_password() {
        Ok(pwd) => pwd,
        Err(e) => {
            println!("Error reading password: {}", e);
            return;
        }
    };

    println!("Confirm password:");
    match read_password() {
        Ok(confirm) if confirm == password => {}
        Ok(_) => {
            println!("Passwords don't match. Registration cancelled.");
            return;
        }
        Err(e) => {
            println!("Error reading password: {}", e);
            return;
        }
    }

    match process_registration(store, accounts_file, &username, &email, &password) {
        Ok(outcome) => apply_outcome(outcome),
        Err(e) if e.is_fatal() => {
            eprintln!("Fatal: {}", e);
            process::exit(1);
        }
        Err(e) => println!("\n{}", e),
    }
}

fn handle_login(store: &AccountStore, sessions: &SessionManager, token: &SessionToken) {
    println!("\nEnter username:");
    let username = match read_line() {
        Ok(input) => input,
        Err(e) => {
            println!("Error reading input: {}", e);
            return;
        }
    };

    println!("Enter password:");
    let password = match read_password() {
        Ok(pwd) => pwd,
        Err(e) => {
            println!("Error reading password: {}", e);
            return;
        }
    };

    apply_outcome(process_login(store, sessions, token, &username, &password));
}

fn handle_profile(store: &AccountStore) {
    println!("\nEnter the username to look up:");
    let username = match read_line() {
        Ok(input) => input,
        Err(e) => {
            println!("Error reading input: {}", e);
            return;
        }
    };

    match show_profile(store, &username) {
        Ok(view) => {
            println!("\nUsername: {}", view.username);
            println!("Email:    {}", view.email);
        }
        Err(AuthError::UnknownUser) => {
            println!("\nNo account found for '{}'.", username);
        }
        Err(e) => {
            println!("\nError: {}", e);
        }
    }
}

fn handle_whoami(sessions: &SessionManager, token: &SessionToken) {
    match sessions.state(token) {
        SessionState::Authenticated {
            account_id,
            username,
        } => {
            println!("\nLogged in as {} (account {})", username, account_id);
        }
        SessionState::Anonymous => {
            println!("\nNot logged in.");
        }
    }
}

fn main() {
    let matches = Command::new("grocer-pass")
        .about("Account registration and session login for the grocery list app")
        .arg(
            Arg::new("accounts-file")
                .long("accounts-file")
                .help("Path to the accounts store file")
                .value_name("FILE"),
        )
        .get_matches();

    if let Err(e) = initialize_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let accounts_file = PathBuf::from(
        matches
            .get_one::<String>("accounts-file")
            .map(String::as_str)
            .unwrap_or(ACCOUNTS_FILE),
    );

    let store = match load_account_store(&accounts_file) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Fatal: failed to load account store: {}", e);
            process::exit(1);
        }
    };

    let sessions = SessionManager::new();
    let token = mint_session_token();

    loop {
        show_menu();

        let choice = match read_line() {
            Ok(input) => input.trim().to_lowercase(),
            Err(e) => {
                println!("Error reading input: {}", e);
                continue;
            }
        };

        match choice.as_str() {
            "1" | "register" => handle_register(&store, &accounts_file),
            "2" | "login" => handle_login(&store, &sessions, &token),
            "3" | "logout" => apply_outcome(process_logout(&sessions, &token)),
            "4" | "profile" => handle_profile(&store),
            "5" | "whoami" => handle_whoami(&sessions, &token),
            "6" | "exit" | "quit" => {
                println!("Goodbye!");
                break;
            }
            _ => {
                println!(
                    "Invalid choice. Please enter a number (1-6) or command (register/login/logout/profile/whoami/exit)."
                );
            }
        }
    }
}
