//! Route table for the REST API.
//!
//! Shared by `main` and the integration tests. Static segments are
//! registered before dynamic ones so `/posts/comment` never falls into
//! `/posts/{slug}`.

use actix_web::web;

use crate::handlers;
use crate::middleware::JwtAuthMiddleware;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(handlers::auth::register))
                    .route("/token", web::post().to(handlers::auth::token_obtain))
                    .route(
                        "/token/refresh",
                        web::post().to(handlers::auth::token_refresh),
                    ),
            )
            .service(
                web::resource("/profiles/{user_id}")
                    .route(web::get().to(handlers::auth::get_profile))
                    .route(web::patch().to(handlers::auth::update_profile)),
            )
            .route("/categories", web::get().to(handlers::posts::category_list))
            .route(
                "/categories/{category_slug}/posts",
                web::get().to(handlers::posts::category_post_list),
            )
            .service(
                web::scope("/posts")
                    .service(
                        web::resource("").route(web::get().to(handlers::posts::post_list)),
                    )
                    .service(
                        web::resource("/like")
                            .wrap(JwtAuthMiddleware)
                            .route(web::post().to(handlers::engagement::like_post)),
                    )
                    .route(
                        "/comment",
                        web::post().to(handlers::engagement::comment_post),
                    )
                    .route(
                        "/bookmark",
                        web::post().to(handlers::engagement::bookmark_post),
                    )
                    .route("/{slug}", web::get().to(handlers::posts::post_detail)),
            )
            .service(
                web::scope("/dashboard")
                    .route(
                        "/stats/{user_id}",
                        web::get().to(handlers::dashboard::dashboard_stats),
                    )
                    .route(
                        "/post-list/{user_id}",
                        web::get().to(handlers::dashboard::dashboard_posts),
                    )
                    .route(
                        "/comment-list/{user_id}",
                        web::get().to(handlers::dashboard::dashboard_comments),
                    )
                    .route(
                        "/noti-list/{user_id}",
                        web::get().to(handlers::dashboard::dashboard_notifications),
                    )
                    .route(
                        "/noti-mark-seen",
                        web::post().to(handlers::dashboard::mark_notification_seen),
                    )
                    .route(
                        "/reply-comment",
                        web::post().to(handlers::dashboard::reply_comment),
                    )
                    .route("/posts", web::post().to(handlers::dashboard::create_post))
                    .service(
                        web::resource("/posts/{user_id}/{post_id}")
                            .route(web::get().to(handlers::dashboard::get_dashboard_post))
                            .route(web::patch().to(handlers::dashboard::update_post))
                            .route(web::delete().to(handlers::dashboard::delete_post)),
                    ),
            ),
    );
}
