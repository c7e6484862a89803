use crate::models::Bookmark;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn find_bookmark(
    pool: &PgPool,
    user_id: Uuid,
    post_id: Uuid,
) -> Result<Option<Bookmark>, sqlx::Error> {
    sqlx::query_as::<_, Bookmark>(
        r#"
        SELECT id, user_id, post_id, created_at
        FROM bookmarks
        WHERE user_id = $1 AND post_id = $2
        "#,
    )
    .bind(user_id)
    .bind(post_id)
    .fetch_optional(pool)
    .await
}

pub async fn create_bookmark(
    pool: &PgPool,
    user_id: Uuid,
    post_id: Uuid,
) -> Result<Bookmark, sqlx::Error> {
    sqlx::query_as::<_, Bookmark>(
        r#"
        INSERT INTO bookmarks (user_id, post_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, post_id) DO UPDATE
        SET user_id = EXCLUDED.user_id
        RETURNING id, user_id, post_id, created_at
        "#,
    )
    .bind(user_id)
    .bind(post_id)
    .fetch_one(pool)
    .await
}

pub async fn delete_bookmark(pool: &PgPool, bookmark_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
        .bind(bookmark_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Global bookmark count across all users. The dashboard stats endpoint uses
/// this unscoped figure deliberately.
pub async fn count_all_bookmarks(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookmarks")
        .fetch_one(pool)
        .await
}
