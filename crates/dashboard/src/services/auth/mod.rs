//! Authentication service.
//!
//! Password login against the `users` table. Hashes are Argon2id PHC strings,
//! written by the seed workflow and verified here.

mod error;

pub use error::AuthError;

use std::sync::LazyLock;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;

use handcrafted_haven_core::Email;

use crate::db::UserRepository;
use crate::models::User;

/// Verified against when the email has no account, so both failures cost one
/// Argon2 run.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("handcrafted-haven-no-such-user").ok());

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email is malformed.
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    #[tracing::instrument(skip(self, password))]
    pub async fn login_with_password(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        let found = self.users.get_with_password_hash(&email).await?;
        check_credentials(found, password)
    }
}

/// Verify `password` against the looked-up account, or against a dummy hash
/// when there is none.
fn check_credentials(found: Option<(User, String)>, password: &str) -> Result<User, AuthError> {
    let Some((user, password_hash)) = found else {
        if let Some(dummy) = DUMMY_HASH.as_deref() {
            let _ = verify_password(password, dummy);
        }
        return Err(AuthError::InvalidCredentials);
    };

    verify_password(password, &password_hash)?;
    Ok(user)
}

/// Hash a password using Argon2id.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored hash.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` if the hash is unparsable or the
/// password does not match.
pub fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
