//! Argon2 password hashing implementation.

use argon2::Argon2;
use argon2::password_hash::{
    self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};

use papyr_core::ports::{AuthError, PasswordService};

/// Argon2id with the crate's default cost parameters.
///
/// User rows store the PHC string produced here (`$argon2id$v=19$...`); the
/// plain password never reaches the database.
#[derive(Default)]
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let phc = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(hashing_error)?;

        Ok(phc.to_string())
    }

    /// `Ok(false)` for a wrong password; `Err` only when `stored` is not a PHC string.
    fn verify(&self, password: &str, stored: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(stored).map_err(hashing_error)?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(hashing_error(e)),
        }
    }
}

fn hashing_error(err: password_hash::Error) -> AuthError {
    AuthError::HashingError(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let service = Argon2PasswordService::new();
        let password = "secure_password_123";

        let hash = service.hash(password).unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(service.verify(password, &hash).unwrap());
        assert!(!service.verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let service = Argon2PasswordService::new();

        assert_ne!(service.hash("pw").unwrap(), service.hash("pw").unwrap());
    }

    #[test]
    fn test_plaintext_stored_value_is_an_error() {
        let service = Argon2PasswordService::new();

        let result = service.verify("pw", "pw");

        assert!(matches!(result, Err(AuthError::HashingError(_))));
    }
}
