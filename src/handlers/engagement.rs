//! Engagement handlers - like, comment, bookmark

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::Result;
use crate::handlers::{ErrorResponse, MessageResponse};
use crate::middleware::UserId;
use crate::services::engagement::BookmarkToggle;
use crate::services::EngagementService;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LikeRequest {
    pub post_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LikeResponse {
    pub status: String,
    pub liked: bool,
    pub likes_count: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentRequest {
    pub post_id: Uuid,
    pub name: String,
    pub email: String,
    pub comment: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BookmarkRequest {
    pub user_id: Uuid,
    pub post_id: Uuid,
}

/// Toggle the signed-in user's like on a post
#[utoipa::path(
    post,
    path = "/api/v1/posts/like",
    tag = "Engagement",
    request_body = LikeRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "New like state", body = LikeResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
pub async fn like_post(
    pool: web::Data<PgPool>,
    user_id: UserId,
    payload: web::Json<LikeRequest>,
) -> Result<HttpResponse> {
    let service = EngagementService::new((**pool).clone());
    let toggle = service.toggle_like(user_id.0, payload.post_id).await?;

    Ok(HttpResponse::Ok().json(LikeResponse {
        status: "success".to_string(),
        liked: toggle.liked,
        likes_count: toggle.likes_count,
    }))
}

/// Submit a reader comment; notifies the post owner
#[utoipa::path(
    post,
    path = "/api/v1/posts/comment",
    tag = "Engagement",
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment stored", body = MessageResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
pub async fn comment_post(
    pool: web::Data<PgPool>,
    payload: web::Json<CommentRequest>,
) -> Result<HttpResponse> {
    let service = EngagementService::new((**pool).clone());
    service
        .submit_comment(
            payload.post_id,
            &payload.name,
            &payload.email,
            &payload.comment,
        )
        .await?;

    Ok(HttpResponse::Created().json(MessageResponse::new("Commented Sent")))
}

/// Toggle a bookmark; adding one notifies the post owner
#[utoipa::path(
    post,
    path = "/api/v1/posts/bookmark",
    tag = "Engagement",
    request_body = BookmarkRequest,
    responses(
        (status = 201, description = "Bookmark added", body = MessageResponse),
        (status = 200, description = "Bookmark removed", body = MessageResponse),
        (status = 404, description = "User or post not found", body = ErrorResponse)
    )
)]
pub async fn bookmark_post(
    pool: web::Data<PgPool>,
    payload: web::Json<BookmarkRequest>,
) -> Result<HttpResponse> {
    let service = EngagementService::new((**pool).clone());
    match service
        .toggle_bookmark(payload.user_id, payload.post_id)
        .await?
    {
        BookmarkToggle::Added => {
            Ok(HttpResponse::Created().json(MessageResponse::new("Post Bookmarked")))
        }
        BookmarkToggle::Removed => {
            Ok(HttpResponse::Ok().json(MessageResponse::new("Post Un-Bookmarked")))
        }
    }
}
