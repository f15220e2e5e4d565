use std::io;

/// Helper function to read a line from stdin
pub fn read_line() -> io::Result<String> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Helper function to read a secret without echoing it
pub fn read_password() -> io::Result<String> {
    rpassword::read_password()
}
