//! Author dashboard handlers - stats, lists, moderation, post management

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::Result;
use crate::handlers::{ErrorResponse, MessageResponse};
use crate::services::{DashboardService, PostService};

#[derive(Debug, Deserialize, ToSchema)]
pub struct NotificationSeenRequest {
    pub noti_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentReplyRequest {
    pub comment_id: Uuid,
    pub reply: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PostCreateRequest {
    pub user_id: Uuid,
    pub title: String,
    pub image: Option<String>,
    pub description: String,
    pub tags: String,
    /// Category id
    pub category: Uuid,
    pub post_status: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PostUpdateRequest {
    pub title: String,
    /// The literal string "undefined" leaves the stored image untouched
    pub image: Option<String>,
    pub description: String,
    pub tags: String,
    /// Category id
    pub category: Uuid,
    pub post_status: String,
}

/// Aggregate stats for one author.
///
/// Always an array: one element for a known user, empty for an unknown one.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/stats/{user_id}",
    tag = "Dashboard",
    params(("user_id" = Uuid, Path, description = "Author")),
    responses(
        (status = 200, description = "Zero or one stats object", body = [crate::models::AuthorStats])
    )
)]
pub async fn dashboard_stats(
    pool: web::Data<PgPool>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = DashboardService::new((**pool).clone());
    let stats: Vec<_> = service.author_stats(*user_id).await?.into_iter().collect();

    Ok(HttpResponse::Ok().json(stats))
}

/// The author's posts, newest first
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/post-list/{user_id}",
    tag = "Dashboard",
    params(("user_id" = Uuid, Path, description = "Author")),
    responses(
        (status = 200, description = "Posts, empty for unknown user", body = [crate::models::Post])
    )
)]
pub async fn dashboard_posts(
    pool: web::Data<PgPool>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let posts = service.list_posts_for_author(*user_id).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Comments on the author's posts
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/comment-list/{user_id}",
    tag = "Dashboard",
    params(("user_id" = Uuid, Path, description = "Author")),
    responses(
        (status = 200, description = "Comments, empty for unknown user", body = [crate::models::Comment])
    )
)]
pub async fn dashboard_comments(
    pool: web::Data<PgPool>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = DashboardService::new((**pool).clone());
    let comments = service.comments_for_author(*user_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// The author's unseen notifications
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/noti-list/{user_id}",
    tag = "Dashboard",
    params(("user_id" = Uuid, Path, description = "Author")),
    responses(
        (status = 200, description = "Unseen notifications, empty for unknown user", body = [crate::models::Notification])
    )
)]
pub async fn dashboard_notifications(
    pool: web::Data<PgPool>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = DashboardService::new((**pool).clone());
    let notifications = service.unseen_notifications(*user_id).await?;

    Ok(HttpResponse::Ok().json(notifications))
}

/// Mark a notification as seen (one-way)
#[utoipa::path(
    post,
    path = "/api/v1/dashboard/noti-mark-seen",
    tag = "Dashboard",
    request_body = NotificationSeenRequest,
    responses(
        (status = 200, description = "Marked", body = MessageResponse),
        (status = 404, description = "Notification not found", body = ErrorResponse)
    )
)]
pub async fn mark_notification_seen(
    pool: web::Data<PgPool>,
    payload: web::Json<NotificationSeenRequest>,
) -> Result<HttpResponse> {
    let service = DashboardService::new((**pool).clone());
    service.mark_notification_seen(payload.noti_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Noti Marked As Seen")))
}

/// Store the author's reply to a comment
#[utoipa::path(
    post,
    path = "/api/v1/dashboard/reply-comment",
    tag = "Dashboard",
    request_body = CommentReplyRequest,
    responses(
        (status = 201, description = "Reply stored", body = MessageResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse)
    )
)]
pub async fn reply_comment(
    pool: web::Data<PgPool>,
    payload: web::Json<CommentReplyRequest>,
) -> Result<HttpResponse> {
    let service = DashboardService::new((**pool).clone());
    service
        .reply_to_comment(payload.comment_id, &payload.reply)
        .await?;

    Ok(HttpResponse::Created().json(MessageResponse::new("Comment Response Sent")))
}

/// Create a post
#[utoipa::path(
    post,
    path = "/api/v1/dashboard/posts",
    tag = "Dashboard",
    request_body = PostCreateRequest,
    responses(
        (status = 201, description = "Post created", body = MessageResponse),
        (status = 400, description = "Invalid status", body = ErrorResponse),
        (status = 404, description = "User or category not found", body = ErrorResponse)
    )
)]
pub async fn create_post(
    pool: web::Data<PgPool>,
    payload: web::Json<PostCreateRequest>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    service
        .create_post(
            payload.user_id,
            payload.category,
            &payload.title,
            payload.image.as_deref(),
            &payload.description,
            &payload.tags,
            &payload.post_status,
        )
        .await?;

    Ok(HttpResponse::Created().json(MessageResponse::new("Post Created Successfully")))
}

/// Fetch one of the author's posts
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/posts/{user_id}/{post_id}",
    tag = "Dashboard",
    params(
        ("user_id" = Uuid, Path, description = "Author"),
        ("post_id" = Uuid, Path, description = "Post")
    ),
    responses(
        (status = 200, description = "Post", body = crate::models::Post),
        (status = 404, description = "Post or user not found", body = ErrorResponse)
    )
)]
pub async fn get_dashboard_post(
    pool: web::Data<PgPool>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse> {
    let (user_id, post_id) = path.into_inner();
    let service = PostService::new((**pool).clone());
    let post = service.get_author_post(user_id, post_id).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Update one of the author's posts
#[utoipa::path(
    patch,
    path = "/api/v1/dashboard/posts/{user_id}/{post_id}",
    tag = "Dashboard",
    params(
        ("user_id" = Uuid, Path, description = "Author"),
        ("post_id" = Uuid, Path, description = "Post")
    ),
    request_body = PostUpdateRequest,
    responses(
        (status = 200, description = "Post updated", body = MessageResponse),
        (status = 404, description = "Post, user or category not found", body = ErrorResponse)
    )
)]
pub async fn update_post(
    pool: web::Data<PgPool>,
    path: web::Path<(Uuid, Uuid)>,
    payload: web::Json<PostUpdateRequest>,
) -> Result<HttpResponse> {
    let (user_id, post_id) = path.into_inner();
    let service = PostService::new((**pool).clone());
    service
        .update_post(
            user_id,
            post_id,
            payload.category,
            &payload.title,
            payload.image.as_deref(),
            &payload.description,
            &payload.tags,
            &payload.post_status,
        )
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post Updated Successfully")))
}

/// Delete one of the author's posts
#[utoipa::path(
    delete,
    path = "/api/v1/dashboard/posts/{user_id}/{post_id}",
    tag = "Dashboard",
    params(
        ("user_id" = Uuid, Path, description = "Author"),
        ("post_id" = Uuid, Path, description = "Post")
    ),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 404, description = "Post or user not found", body = ErrorResponse)
    )
)]
pub async fn delete_post(
    pool: web::Data<PgPool>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse> {
    let (user_id, post_id) = path.into_inner();
    let service = PostService::new((**pool).clone());
    service.delete_post(user_id, post_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
