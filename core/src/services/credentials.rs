//! Credential generation and hashing.
//!
//! Passwords and OTP codes are drawn uniformly from fixed alphabets using
//! the operating system's CSPRNG. Hashing uses bcrypt exclusively; the
//! salted adaptive digest is the only scheme in the system and digests from
//! any other scheme are not verifiable here.

use rand::rngs::OsRng;
use rand::Rng;

use crate::domain::entities::otp::OTP_LENGTH;
use crate::errors::{DomainError, DomainResult};

/// Alphabet for generated passwords: letters, digits and three symbols
pub const PASSWORD_CHARACTERS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789@#%";

/// Length of a generated password
pub const PASSWORD_LENGTH: usize = 12;

/// Alphabet for generated OTP codes
pub const OTP_CHARACTERS: &[u8] = b"0123456789";

/// Generator for random passwords and numeric OTP codes
///
/// Stateless: entropy comes from `OsRng` on every call, so a single
/// process-wide instance needs no synchronization.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialGenerator;

impl CredentialGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates a random password from the password alphabet
    pub fn generate_password(&self) -> String {
        sample(PASSWORD_CHARACTERS, PASSWORD_LENGTH)
    }

    /// Generates a random numeric OTP code
    pub fn generate_otp(&self) -> String {
        sample(OTP_CHARACTERS, OTP_LENGTH)
    }
}

fn sample(alphabet: &[u8], length: usize) -> String {
    let mut rng = OsRng;
    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

/// Hashes a secret with bcrypt at the default cost
pub fn hash_password(secret: &str) -> DomainResult<String> {
    bcrypt::hash(secret, bcrypt::DEFAULT_COST)
        .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
}

/// Verifies a candidate secret against a stored bcrypt digest
pub fn verify_password(secret: &str, digest: &str) -> DomainResult<bool> {
    bcrypt::verify(secret, digest)
        .map_err(|e| DomainError::internal(format!("Failed to verify password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_password_shape() {
        let generator = CredentialGenerator::new();
        for _ in 0..20 {
            let password = generator.generate_password();
            assert_eq!(password.len(), PASSWORD_LENGTH);
            assert!(password.bytes().all(|b| PASSWORD_CHARACTERS.contains(&b)));
        }
    }

    #[test]
    fn test_generated_otp_is_six_digits() {
        let generator = CredentialGenerator::new();
        for _ in 0..20 {
            let otp = generator.generate_otp();
            assert_eq!(otp.len(), OTP_LENGTH);
            assert!(otp.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_generator_does_not_repeat_constantly() {
        let generator = CredentialGenerator::new();
        let codes: std::collections::HashSet<String> =
            (0..50).map(|_| generator.generate_otp()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_hash_verify_round_trip() {
        let digest = hash_password("s3cret-value").unwrap();
        assert_ne!(digest, "s3cret-value");
        assert!(verify_password("s3cret-value", &digest).unwrap());
        assert!(!verify_password("other-value", &digest).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("same-secret").unwrap();
        let second = hash_password("same-secret").unwrap();
        assert_ne!(first, second);
    }
}
