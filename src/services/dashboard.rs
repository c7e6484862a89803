//! Dashboard service - author-facing aggregates and moderation actions

use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::error::{AppError, Result};
use crate::models::{AuthorStats, Comment, Notification};

pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Aggregate stats for one author. An unknown user yields `None` and
    /// the endpoint answers with an empty array rather than a 404; the list
    /// endpoints below behave the same way.
    ///
    /// The bookmarks figure counts every bookmark in the system, not just
    /// the author's. That scoping is inherited behavior, kept deliberately.
    pub async fn author_stats(&self, user_id: Uuid) -> Result<Option<AuthorStats>> {
        if !db::users::user_exists(&self.pool, user_id).await? {
            tracing::warn!(%user_id, "stats requested for unknown user");
            return Ok(None);
        }

        let views = db::stats::sum_views_for_author(&self.pool, user_id).await?;
        let posts = db::stats::count_posts_for_author(&self.pool, user_id).await?;
        let likes = db::stats::sum_likes_for_author(&self.pool, user_id).await?;
        let bookmarks = db::bookmarks::count_all_bookmarks(&self.pool).await?;

        Ok(Some(AuthorStats {
            views,
            posts,
            likes,
            bookmarks,
        }))
    }

    pub async fn comments_for_author(&self, user_id: Uuid) -> Result<Vec<Comment>> {
        if !db::users::user_exists(&self.pool, user_id).await? {
            tracing::warn!(%user_id, "comment list for unknown user");
            return Ok(Vec::new());
        }
        Ok(db::comments::list_comments_for_author(&self.pool, user_id).await?)
    }

    pub async fn unseen_notifications(&self, user_id: Uuid) -> Result<Vec<Notification>> {
        if !db::users::user_exists(&self.pool, user_id).await? {
            tracing::warn!(%user_id, "notification list for unknown user");
            return Ok(Vec::new());
        }
        Ok(db::notifications::list_unseen_for_user(&self.pool, user_id).await?)
    }

    pub async fn mark_notification_seen(&self, notification_id: Uuid) -> Result<()> {
        if db::notifications::mark_seen(&self.pool, notification_id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("Không tìm thấy thông báo".to_string()))
        }
    }

    pub async fn reply_to_comment(&self, comment_id: Uuid, reply: &str) -> Result<()> {
        if db::comments::set_comment_reply(&self.pool, comment_id, reply).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("Không tìm thấy bình luận".to_string()))
        }
    }
}
