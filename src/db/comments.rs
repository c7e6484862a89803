use crate::models::Comment;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn create_comment(
    pool: &PgPool,
    post_id: Uuid,
    name: &str,
    email: &str,
    comment: &str,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (post_id, name, email, comment)
        VALUES ($1, $2, $3, $4)
        RETURNING id, post_id, name, email, comment, reply, created_at, updated_at
        "#,
    )
    .bind(post_id)
    .bind(name)
    .bind(email)
    .bind(comment)
    .fetch_one(pool)
    .await
}

/// Comments left on any of an author's posts, newest first.
pub async fn list_comments_for_author(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT c.id, c.post_id, c.name, c.email, c.comment, c.reply, c.created_at, c.updated_at
        FROM comments c
        JOIN posts p ON p.id = c.post_id
        WHERE p.user_id = $1
        ORDER BY c.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Store the author's reply on a comment. Returns false when the comment
/// does not exist.
pub async fn set_comment_reply(
    pool: &PgPool,
    comment_id: Uuid,
    reply: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE comments
        SET reply = $2, updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(comment_id)
    .bind(reply)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
