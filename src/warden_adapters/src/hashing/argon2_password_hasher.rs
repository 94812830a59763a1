use argon2::{
    password_hash::{rand_core, PasswordHasher as _, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
};
use secrecy::{ExposeSecret, Secret};

use warden_core::{Password, PasswordDigest, PasswordHashError, PasswordHasher};

/// Argon2id password hashing with a fixed work factor (m=15000 KiB, t=2,
/// p=1) and a fresh random salt per call.
///
/// Both operations run on the blocking pool: the hash is deliberately slow
/// and must not stall the async executor or any per-user store guard.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn argon2() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHashError> {
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                argon2()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|hash| PasswordDigest::new(Secret::from(hash.to_string())))
                    .map_err(|e| e.to_string())
            })
        })
        .await
        .map_err(|e| e.to_string())
        .and_then(|inner| inner);

        result.map_err(PasswordHashError::Hashing)
    }

    #[tracing::instrument(name = "Verifying password hash", skip_all)]
    async fn verify(&self, candidate: &Password, digest: &PasswordDigest) -> bool {
        let candidate = candidate.clone();
        let digest = digest.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let Ok(parsed) = PasswordHash::new(digest.as_ref().expose_secret()) else {
                    // malformed digest is a mismatch, not an error
                    return false;
                };
                let Ok(hasher) = argon2() else {
                    return false;
                };
                hasher
                    .verify_password(candidate.as_ref().expose_secret().as_bytes(), &parsed)
                    .is_ok()
            })
        })
        .await
        .unwrap_or(false)
    }
}
