use sqlx::PgPool;
use uuid::Uuid;

/// Sum of view counters across an author's posts. NULL when the author has
/// no posts, matching SQL aggregate semantics surfaced by the API.
pub async fn sum_views_for_author(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, Option<i64>>(
        r#"
        SELECT SUM(view_count)::BIGINT
        FROM posts
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}

pub async fn count_posts_for_author(pool: &PgPool, user_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM posts
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Total likes received across an author's posts. NULL when the author has
/// no posts, 0 when posts exist without likes.
pub async fn sum_likes_for_author(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, Option<i64>>(
        r#"
        SELECT SUM(per_post.likes)::BIGINT
        FROM (
            SELECT COUNT(pl.id) AS likes
            FROM posts p
            LEFT JOIN post_likes pl ON pl.post_id = p.id
            WHERE p.user_id = $1
            GROUP BY p.id
        ) AS per_post
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}
