use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, Result};
use crate::user::user_models::User;
use crate::user::user_repository::UserRepository;

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
}

impl AuthService {
    pub fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    pub async fn register(&self, login_key: &str, password: &str, name: &str) -> Result<User> {
        let password_hash = hash_password(password)?;
        self.user_repo.create(login_key, &password_hash, name).await
    }

    /// Unknown login_key and wrong password produce the same error, so a
    /// caller cannot probe which accounts exist.
    pub async fn login(&self, login_key: &str, password: &str) -> Result<User> {
        let user = self
            .user_repo
            .find_by_login_key(login_key)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid credentials".to_string()))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::Authentication("Invalid credentials".to_string()));
        }

        Ok(user)
    }

    /// There is no session state to tear down; logout only confirms the
    /// user exists so a bad login_key still surfaces as 404.
    pub async fn logout(&self, login_key: &str) -> Result<()> {
        self.user_repo
            .find_by_login_key(login_key)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(())
    }
}
