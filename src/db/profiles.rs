use crate::models::Profile;
use sqlx::PgPool;
use uuid::Uuid;

/// Create the profile row that accompanies a new registration
pub async fn create_profile(
    pool: &PgPool,
    user_id: Uuid,
    full_name: &str,
) -> Result<Profile, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        r#"
        INSERT INTO profiles (user_id, full_name)
        VALUES ($1, $2)
        RETURNING id, user_id, full_name, image, bio, about, country, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(full_name)
    .fetch_one(pool)
    .await
}

pub async fn find_profile_by_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        r#"
        SELECT id, user_id, full_name, image, bio, about, country, created_at, updated_at
        FROM profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Partial update: COALESCE keeps any field the caller did not send.
pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    full_name: Option<&str>,
    image: Option<&str>,
    bio: Option<&str>,
    about: Option<&str>,
    country: Option<&str>,
) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        r#"
        UPDATE profiles
        SET full_name = COALESCE($2, full_name),
            image = COALESCE($3, image),
            bio = COALESCE($4, bio),
            about = COALESCE($5, about),
            country = COALESCE($6, country),
            updated_at = NOW()
        WHERE user_id = $1
        RETURNING id, user_id, full_name, image, bio, about, country, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(full_name)
    .bind(image)
    .bind(bio)
    .bind(about)
    .bind(country)
    .fetch_optional(pool)
    .await
}
