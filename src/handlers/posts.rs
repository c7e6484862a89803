//! Public catalog handlers - categories and posts

use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::error::Result;
use crate::handlers::ErrorResponse;
use crate::services::PostService;

/// List all categories
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "Posts",
    responses(
        (status = 200, description = "Categories", body = [crate::models::Category])
    )
)]
pub async fn category_list(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let categories = service.list_categories().await?;

    Ok(HttpResponse::Ok().json(categories))
}

/// List Active posts in a category
#[utoipa::path(
    get,
    path = "/api/v1/categories/{category_slug}/posts",
    tag = "Posts",
    params(("category_slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Active posts in the category", body = [crate::models::Post]),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
pub async fn category_post_list(
    pool: web::Data<PgPool>,
    category_slug: web::Path<String>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let posts = service.list_posts_by_category(&category_slug).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// List all posts
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    tag = "Posts",
    responses(
        (status = 200, description = "All posts", body = [crate::models::Post])
    )
)]
pub async fn post_list(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let posts = service.list_posts().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Fetch an Active post by slug. Each successful fetch counts one view.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{slug}",
    tag = "Posts",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post detail", body = crate::models::Post),
        (status = 404, description = "Post not found or not Active", body = ErrorResponse)
    )
)]
pub async fn post_detail(pool: web::Data<PgPool>, slug: web::Path<String>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let post = service.get_post_by_slug(&slug).await?;

    Ok(HttpResponse::Ok().json(post))
}
