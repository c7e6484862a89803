//! Engagement service - likes, comments, bookmarks and their notifications

use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::error::{AppError, Result};
use crate::models::{notification_kind, Comment};

/// Outcome of a like toggle
#[derive(Debug, Clone, Copy)]
pub struct LikeToggle {
    pub liked: bool,
    pub likes_count: i64,
}

/// Outcome of a bookmark toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkToggle {
    Added,
    Removed,
}

pub struct EngagementService {
    pool: PgPool,
}

impl EngagementService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Flip the like relation for (user, post). Returns the new state and
    /// the fresh total. Concurrent double-toggles are last-write-wins.
    pub async fn toggle_like(&self, user_id: Uuid, post_id: Uuid) -> Result<LikeToggle> {
        let post = db::posts::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy bài viết".to_string()))?;

        let liked = if db::likes::user_likes_post(&self.pool, user_id, post.id).await? {
            db::likes::delete_like(&self.pool, user_id, post.id).await?;
            false
        } else {
            db::likes::create_like(&self.pool, user_id, post.id).await?;
            true
        };

        let likes_count = db::likes::count_likes_for_post(&self.pool, post.id).await?;
        Ok(LikeToggle { liked, likes_count })
    }

    /// Record a reader comment and notify the post owner.
    pub async fn submit_comment(
        &self,
        post_id: Uuid,
        name: &str,
        email: &str,
        comment: &str,
    ) -> Result<Comment> {
        let post = db::posts::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy bài viết".to_string()))?;

        let created =
            db::comments::create_comment(&self.pool, post.id, name, email, comment).await?;
        db::notifications::create_notification(
            &self.pool,
            post.user_id,
            post.id,
            notification_kind::COMMENT,
        )
        .await?;

        Ok(created)
    }

    /// Flip the bookmark relation. Adding notifies the post owner; removal
    /// never does.
    pub async fn toggle_bookmark(&self, user_id: Uuid, post_id: Uuid) -> Result<BookmarkToggle> {
        let user_ok = db::users::user_exists(&self.pool, user_id).await?;
        let post = db::posts::find_post_by_id(&self.pool, post_id).await?;
        let post = match (user_ok, post) {
            (true, Some(post)) => post,
            _ => {
                return Err(AppError::NotFound(
                    "Không tìm thấy người dùng hoặc bài viết".to_string(),
                ))
            }
        };

        if let Some(existing) = db::bookmarks::find_bookmark(&self.pool, user_id, post.id).await? {
            db::bookmarks::delete_bookmark(&self.pool, existing.id).await?;
            return Ok(BookmarkToggle::Removed);
        }

        db::bookmarks::create_bookmark(&self.pool, user_id, post.id).await?;
        db::notifications::create_notification(
            &self.pool,
            post.user_id,
            post.id,
            notification_kind::BOOKMARK,
        )
        .await?;

        Ok(BookmarkToggle::Added)
    }
}
