use crate::models::Post;
use sqlx::PgPool;
use uuid::Uuid;

const POST_COLUMNS: &str = "id, user_id, category_id, title, image, description, tags, slug, \
                            status, view_count, created_at, updated_at";

/// List every post regardless of status, newest first.
pub async fn list_all_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!(
        "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await
}

/// List Active posts in a category, newest first.
pub async fn list_active_posts_by_category(
    pool: &PgPool,
    category_id: Uuid,
) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!(
        "SELECT {POST_COLUMNS} FROM posts \
         WHERE category_id = $1 AND status = 'Active' \
         ORDER BY created_at DESC"
    ))
    .bind(category_id)
    .fetch_all(pool)
    .await
}

/// Fetch an Active post by slug and bump its view counter in the same
/// statement. Every successful fetch counts a view; there is no idempotence.
pub async fn fetch_active_post_and_count_view(
    pool: &PgPool,
    slug: &str,
) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!(
        "UPDATE posts SET view_count = view_count + 1 \
         WHERE slug = $1 AND status = 'Active' \
         RETURNING {POST_COLUMNS}"
    ))
    .bind(slug)
    .fetch_optional(pool)
    .await
}

pub async fn find_post_by_id(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!(
        "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
    ))
    .bind(post_id)
    .fetch_optional(pool)
    .await
}

/// List an author's posts regardless of status, newest first.
pub async fn list_posts_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!(
        "SELECT {POST_COLUMNS} FROM posts \
         WHERE user_id = $1 \
         ORDER BY created_at DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Find a post scoped to its author, used by the dashboard detail endpoints.
pub async fn find_post_by_user_and_id(
    pool: &PgPool,
    user_id: Uuid,
    post_id: Uuid,
) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!(
        "SELECT {POST_COLUMNS} FROM posts WHERE user_id = $1 AND id = $2"
    ))
    .bind(user_id)
    .bind(post_id)
    .fetch_optional(pool)
    .await
}

#[allow(clippy::too_many_arguments)]
pub async fn create_post(
    pool: &PgPool,
    user_id: Uuid,
    category_id: Uuid,
    title: &str,
    image: Option<&str>,
    description: &str,
    tags: &str,
    slug: &str,
    status: &str,
) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!(
        "INSERT INTO posts (user_id, category_id, title, image, description, tags, slug, status) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
         RETURNING {POST_COLUMNS}"
    ))
    .bind(user_id)
    .bind(category_id)
    .bind(title)
    .bind(image)
    .bind(description)
    .bind(tags)
    .bind(slug)
    .bind(status)
    .fetch_one(pool)
    .await
}

/// Update a post's editable fields. `image` is `None` when the caller sent
/// the "undefined" sentinel, in which case the stored image is preserved.
#[allow(clippy::too_many_arguments)]
pub async fn update_post(
    pool: &PgPool,
    post_id: Uuid,
    category_id: Uuid,
    title: &str,
    image: Option<&str>,
    description: &str,
    tags: &str,
    status: &str,
) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!(
        "UPDATE posts \
         SET category_id = $2, title = $3, image = COALESCE($4, image), \
             description = $5, tags = $6, status = $7, updated_at = NOW() \
         WHERE id = $1 \
         RETURNING {POST_COLUMNS}"
    ))
    .bind(post_id)
    .bind(category_id)
    .bind(title)
    .bind(image)
    .bind(description)
    .bind(tags)
    .bind(status)
    .fetch_optional(pool)
    .await
}

pub async fn delete_post(pool: &PgPool, post_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(post_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn slug_exists(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM posts WHERE slug = $1)")
        .bind(slug)
        .fetch_one(pool)
        .await
}
