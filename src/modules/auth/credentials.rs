use crate::HmacSha256;
use pbkdf2::pbkdf2;
use rand::Rng;
use std::num::NonZeroU32;

/// Number of PBKDF2 iterations for credential stretching.
const HASH_ITERATIONS: u32 = 100_000;

/// Salt length in bytes before hex encoding.
const SALT_BYTES: usize = 16;

/// Function to generate a random per-account salt (hex-encoded)
pub fn generate_salt() -> String {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..SALT_BYTES).map(|_| rng.gen()).collect();
    hex::encode(bytes)
}

/// Function to derive a 32-byte credential hash using PBKDF2
pub fn derive_credential_key(secret: &str, salt: &[u8]) -> Vec<u8> {
    let mut key = vec![0u8; 32];
    let iterations = NonZeroU32::new(HASH_ITERATIONS).unwrap();

    pbkdf2::<HmacSha256>(secret.as_bytes(), salt, iterations.get().into(), &mut key);

    key
}

/// Hash a secret against a hex-encoded salt, producing the stored hex form.
pub fn hash_credential(secret: &str, salt: &str) -> String {
    hex::encode(derive_credential_key(secret, salt.as_bytes()))
}

/// Check a claimed secret against a stored hash without leaking timing.
pub fn verify_credential(secret: &str, salt: &str, stored_hash: &str) -> bool {
    let attempt = hash_credential(secret, salt);
    constant_time_eq(attempt.as_bytes(), stored_hash.as_bytes())
}

/// Constant-time byte comparison to prevent timing attacks.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
