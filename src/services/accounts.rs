//! Account service - registration, token issuance, profiles

use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::error::{AppError, Result};
use crate::models::Profile;
use crate::security::{jwt, password};

pub struct AccountService {
    pool: PgPool,
}

impl AccountService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a new account and its empty profile.
    ///
    /// The username is derived from the email local part. Duplicate email
    /// and password mismatch map to the localized messages the frontend
    /// displays verbatim.
    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        password_value: &str,
        password2: &str,
    ) -> Result<Uuid> {
        if password_value != password2 {
            return Err(AppError::BadRequest("Mật khẩu không khớp".to_string()));
        }

        if db::users::email_exists(&self.pool, email).await? {
            return Err(AppError::BadRequest(
                "Email này đã được sử dụng".to_string(),
            ));
        }

        let username = email.split('@').next().unwrap_or(email);
        let password_hash = password::hash_password(password_value)?;

        let user =
            db::users::create_user(&self.pool, full_name, email, username, &password_hash).await?;
        db::profiles::create_profile(&self.pool, user.id, full_name).await?;

        tracing::info!(user_id = %user.id, "registered new user");
        Ok(user.id)
    }

    /// Verify credentials and issue an access/refresh pair.
    pub async fn login(&self, email: &str, password_value: &str) -> Result<jwt::TokenPair> {
        let user = db::users::find_user_by_email(&self.pool, email)
            .await?
            .ok_or_else(|| AppError::BadRequest("Email hoặc mật khẩu không đúng".to_string()))?;

        password::verify_password(password_value, &user.password_hash)?;

        jwt::generate_token_pair(user.id, &user.email, &user.username, &user.full_name)
            .map_err(|e| AppError::Internal(e.to_string()))
    }

    /// Exchange a refresh token for a new pair.
    pub fn refresh(&self, refresh_token: &str) -> Result<jwt::TokenPair> {
        let token_data = jwt::validate_token(refresh_token)
            .map_err(|_| AppError::BadRequest("Token không hợp lệ".to_string()))?;

        if token_data.claims.token_type != "refresh" {
            return Err(AppError::BadRequest("Token không hợp lệ".to_string()));
        }

        let user_id = Uuid::parse_str(&token_data.claims.sub)
            .map_err(|_| AppError::BadRequest("Token không hợp lệ".to_string()))?;

        jwt::generate_token_pair(
            user_id,
            &token_data.claims.email,
            &token_data.claims.username,
            &token_data.claims.full_name,
        )
        .map_err(|e| AppError::Internal(e.to_string()))
    }

    pub async fn get_profile(&self, user_id: Uuid) -> Result<Profile> {
        db::profiles::find_profile_by_user(&self.pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy hồ sơ người dùng".to_string()))
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        full_name: Option<&str>,
        image: Option<&str>,
        bio: Option<&str>,
        about: Option<&str>,
        country: Option<&str>,
    ) -> Result<Profile> {
        db::profiles::update_profile(&self.pool, user_id, full_name, image, bio, about, country)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy hồ sơ người dùng".to_string()))
    }
}
