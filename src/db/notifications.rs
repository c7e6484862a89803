use crate::models::Notification;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn create_notification(
    pool: &PgPool,
    user_id: Uuid,
    post_id: Uuid,
    kind: &str,
) -> Result<Notification, sqlx::Error> {
    sqlx::query_as::<_, Notification>(
        r#"
        INSERT INTO notifications (user_id, post_id, kind)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, post_id, kind, seen, created_at
        "#,
    )
    .bind(user_id)
    .bind(post_id)
    .bind(kind)
    .fetch_one(pool)
    .await
}

pub async fn list_unseen_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<Notification>, sqlx::Error> {
    sqlx::query_as::<_, Notification>(
        r#"
        SELECT id, user_id, post_id, kind, seen, created_at
        FROM notifications
        WHERE user_id = $1 AND seen = FALSE
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Flip seen to true. The transition is one-way; there is no unmark.
pub async fn mark_seen(pool: &PgPool, notification_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE notifications
        SET seen = TRUE
        WHERE id = $1
        "#,
    )
    .bind(notification_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
