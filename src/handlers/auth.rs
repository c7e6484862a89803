//! Authentication and profile handlers

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::handlers::{ErrorResponse, MessageResponse};
use crate::services::AccountService;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub password2: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Access/refresh pair returned by the token endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProfileUpdateRequest {
    pub full_name: Option<String>,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub about: Option<String>,
    pub country: Option<String>,
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn register(
    pool: web::Data<PgPool>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    payload
        .validate()
        .map_err(|errors| AppError::Validation(errors.to_string()))?;

    let service = AccountService::new((**pool).clone());
    service
        .register(
            &payload.full_name,
            &payload.email,
            &payload.password,
            &payload.password2,
        )
        .await?;

    Ok(HttpResponse::Created().json(MessageResponse::new("Đăng ký thành công")))
}

/// Obtain an access/refresh token pair
#[utoipa::path(
    post,
    path = "/api/v1/auth/token",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token pair issued", body = TokenPairResponse),
        (status = 400, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn token_obtain(
    pool: web::Data<PgPool>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    payload
        .validate()
        .map_err(|errors| AppError::Validation(errors.to_string()))?;

    let service = AccountService::new((**pool).clone());
    let pair = service.login(&payload.email, &payload.password).await?;

    Ok(HttpResponse::Ok().json(TokenPairResponse {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
    }))
}

/// Exchange a refresh token for a fresh pair
#[utoipa::path(
    post,
    path = "/api/v1/auth/token/refresh",
    tag = "Auth",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Token pair refreshed", body = TokenPairResponse),
        (status = 400, description = "Invalid refresh token", body = ErrorResponse)
    )
)]
pub async fn token_refresh(
    pool: web::Data<PgPool>,
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse> {
    let service = AccountService::new((**pool).clone());
    let pair = service.refresh(&payload.refresh_token)?;

    Ok(HttpResponse::Ok().json(TokenPairResponse {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
    }))
}

/// Fetch a user's profile
#[utoipa::path(
    get,
    path = "/api/v1/profiles/{user_id}",
    tag = "Auth",
    params(("user_id" = Uuid, Path, description = "Owner of the profile")),
    responses(
        (status = 200, description = "Profile", body = crate::models::Profile),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    )
)]
pub async fn get_profile(
    pool: web::Data<PgPool>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = AccountService::new((**pool).clone());
    let profile = service.get_profile(*user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// Update a user's profile (partial)
#[utoipa::path(
    patch,
    path = "/api/v1/profiles/{user_id}",
    tag = "Auth",
    params(("user_id" = Uuid, Path, description = "Owner of the profile")),
    request_body = ProfileUpdateRequest,
    responses(
        (status = 200, description = "Updated profile", body = crate::models::Profile),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    )
)]
pub async fn update_profile(
    pool: web::Data<PgPool>,
    user_id: web::Path<Uuid>,
    payload: web::Json<ProfileUpdateRequest>,
) -> Result<HttpResponse> {
    let service = AccountService::new((**pool).clone());
    let profile = service
        .update_profile(
            *user_id,
            payload.full_name.as_deref(),
            payload.image.as_deref(),
            payload.bio.as_deref(),
            payload.about.as_deref(),
            payload.country.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}
