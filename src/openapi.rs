use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers::auth::{
    LoginRequest, ProfileUpdateRequest, RefreshTokenRequest, RegisterRequest, TokenPairResponse,
};
use crate::handlers::dashboard::{
    CommentReplyRequest, NotificationSeenRequest, PostCreateRequest, PostUpdateRequest,
};
use crate::handlers::engagement::{BookmarkRequest, CommentRequest, LikeRequest, LikeResponse};
use crate::handlers::{ErrorResponse, MessageResponse};
use crate::models::{AuthorStats, Bookmark, Category, Comment, Notification, Post, Profile};

/// OpenAPI document covering every REST endpoint the service exposes
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth::register,
        crate::handlers::auth::token_obtain,
        crate::handlers::auth::token_refresh,
        crate::handlers::auth::get_profile,
        crate::handlers::auth::update_profile,
        crate::handlers::posts::category_list,
        crate::handlers::posts::category_post_list,
        crate::handlers::posts::post_list,
        crate::handlers::posts::post_detail,
        crate::handlers::engagement::like_post,
        crate::handlers::engagement::comment_post,
        crate::handlers::engagement::bookmark_post,
        crate::handlers::dashboard::dashboard_stats,
        crate::handlers::dashboard::dashboard_posts,
        crate::handlers::dashboard::dashboard_comments,
        crate::handlers::dashboard::dashboard_notifications,
        crate::handlers::dashboard::mark_notification_seen,
        crate::handlers::dashboard::reply_comment,
        crate::handlers::dashboard::create_post,
        crate::handlers::dashboard::get_dashboard_post,
        crate::handlers::dashboard::update_post,
        crate::handlers::dashboard::delete_post
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        RefreshTokenRequest,
        ProfileUpdateRequest,
        TokenPairResponse,
        LikeRequest,
        LikeResponse,
        CommentRequest,
        BookmarkRequest,
        NotificationSeenRequest,
        CommentReplyRequest,
        PostCreateRequest,
        PostUpdateRequest,
        MessageResponse,
        ErrorResponse,
        Profile,
        Category,
        Post,
        Comment,
        Bookmark,
        Notification,
        AuthorStats
    )),
    tags(
        (name = "Auth", description = "Registration, tokens, profiles"),
        (name = "Posts", description = "Public categories and posts"),
        (name = "Engagement", description = "Likes, comments, bookmarks"),
        (name = "Dashboard", description = "Author dashboard")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from the token endpoints"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }

    #[test]
    fn every_route_group_is_documented() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/v1/auth/register"));
        assert!(paths.contains_key("/api/v1/posts/like"));
        assert!(paths.contains_key("/api/v1/dashboard/stats/{user_id}"));
        // 22 operations over 19 distinct paths; the profile and the
        // dashboard post detail paths carry multiple methods.
        assert_eq!(paths.len(), 19);
    }
}
