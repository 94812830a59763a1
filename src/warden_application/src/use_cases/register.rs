use warden_core::{
    Clock, EmailAddress, Password, PasswordHashError, PasswordHasher, PhoneNumber, User, UserId,
    UserStore, UserStoreError, Username,
};

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Password hashing error: {0}")]
    HashError(#[from] PasswordHashError),
}

/// Register use case - creates a user with a freshly hashed password.
///
/// The password is hashed before the store is touched, so the slow hash
/// never runs under the store-wide registration lock.
pub struct RegisterUseCase<'a, U, H, C>
where
    U: UserStore,
    H: PasswordHasher,
    C: Clock,
{
    user_store: &'a U,
    hasher: &'a H,
    clock: &'a C,
}

impl<'a, U, H, C> RegisterUseCase<'a, U, H, C>
where
    U: UserStore,
    H: PasswordHasher,
    C: Clock,
{
    pub fn new(user_store: &'a U, hasher: &'a H, clock: &'a C) -> Self {
        Self {
            user_store,
            hasher,
            clock,
        }
    }

    /// Execute the register use case
    ///
    /// # Returns
    /// The new user's id, or `IdentityTaken` if the username, email, or
    /// phone collides with an existing user (whichever field it is).
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: Username,
        email: EmailAddress,
        phone: PhoneNumber,
        password: Password,
    ) -> Result<UserId, RegisterError> {
        let digest = self.hasher.hash(&password).await?;
        let user = User::new(username, email, phone, digest, self.clock.now());
        let user_id = user.id();

        self.user_store.add_user(user).await?;

        tracing::info!(%user_id, "user registered");
        Ok(user_id)
    }
}
