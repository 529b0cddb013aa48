use anyhow::{anyhow, Error, Result};
use database::models::User;
use database::repositories::UserRepository;
use database::Database;
use shared::passwords;
use std::sync::Arc;

pub struct AuthService {
    user_repo: UserRepository,
}

impl AuthService {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            user_repo: UserRepository::new(db.pool.clone()),
        }
    }

    /// Verifies credentials against the stored argon2 hash. The same error is
    /// returned for an unknown user and a wrong password.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, Error> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await
            .map_err(Error::new)?
            .ok_or_else(|| anyhow!("Unknown user"))?;

        if !passwords::verify_password(password, &user.password_hash) {
            return Err(anyhow!("Password mismatch"));
        }

        Ok(user)
    }

    pub async fn find_user_by_id(&self, id: uuid::Uuid) -> Result<Option<User>, Error> {
        self.user_repo.find_by_id(id).await.map_err(Error::new)
    }

    pub async fn create_user(
        &self,
        username: &str,
        email: Option<&str>,
        password: &str,
        role: &str,
    ) -> Result<User, Error> {
        let hash =
            passwords::hash_password(password).map_err(|e| anyhow!("Hashing failed: {}", e))?;
        self.user_repo
            .create(username, email, &hash, role)
            .await
            .map_err(Error::new)
    }
}
