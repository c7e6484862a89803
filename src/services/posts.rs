//! Post service - public catalog plus the author's own post management

use rand::distributions::Alphanumeric;
use rand::Rng;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::error::{AppError, Result};
use crate::models::{Category, Post, PostStatus};

/// Image field value that means "leave the stored image alone" on update.
pub const IMAGE_UNCHANGED_SENTINEL: &str = "undefined";

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(db::categories::list_categories(&self.pool).await?)
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(db::posts::list_all_posts(&self.pool).await?)
    }

    /// Active posts in a category; unknown category slug is a 404.
    pub async fn list_posts_by_category(&self, category_slug: &str) -> Result<Vec<Post>> {
        let category = db::categories::find_category_by_slug(&self.pool, category_slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy danh mục này".to_string()))?;

        Ok(db::posts::list_active_posts_by_category(&self.pool, category.id).await?)
    }

    /// Public post detail. Counts a view on every successful fetch.
    pub async fn get_post_by_slug(&self, slug: &str) -> Result<Post> {
        db::posts::fetch_active_post_and_count_view(&self.pool, slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy bài viết này".to_string()))
    }

    pub async fn list_posts_for_author(&self, user_id: Uuid) -> Result<Vec<Post>> {
        if !db::users::user_exists(&self.pool, user_id).await? {
            tracing::warn!(%user_id, "dashboard post list for unknown user");
            return Ok(Vec::new());
        }
        Ok(db::posts::list_posts_by_user(&self.pool, user_id).await?)
    }

    pub async fn get_author_post(&self, user_id: Uuid, post_id: Uuid) -> Result<Post> {
        db::posts::find_post_by_user_and_id(&self.pool, user_id, post_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Không tìm thấy bài viết hoặc người dùng".to_string())
            })
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_post(
        &self,
        user_id: Uuid,
        category_id: Uuid,
        title: &str,
        image: Option<&str>,
        description: &str,
        tags: &str,
        status: &str,
    ) -> Result<Post> {
        let user_ok = db::users::user_exists(&self.pool, user_id).await?;
        let category = db::categories::find_category_by_id(&self.pool, category_id).await?;
        if !user_ok || category.is_none() {
            return Err(AppError::NotFound(
                "Không tìm thấy người dùng hoặc danh mục".to_string(),
            ));
        }

        let status = parse_status(status)?;
        let slug = self.unique_slug(title).await?;

        let post = db::posts::create_post(
            &self.pool,
            user_id,
            category_id,
            title,
            image,
            description,
            tags,
            &slug,
            status.as_str(),
        )
        .await?;

        tracing::info!(post_id = %post.id, %user_id, "post created");
        Ok(post)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_post(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        category_id: Uuid,
        title: &str,
        image: Option<&str>,
        description: &str,
        tags: &str,
        status: &str,
    ) -> Result<Post> {
        // Scoped lookup first so a wrong author gets the same 404 as a
        // missing post.
        self.get_author_post(user_id, post_id).await?;

        if db::categories::find_category_by_id(&self.pool, category_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Không tìm thấy danh mục".to_string()));
        }

        let status = parse_status(status)?;

        // The frontend sends the literal string "undefined" when the image
        // input was untouched; preserve the stored value in that case.
        let image = image.filter(|v| *v != IMAGE_UNCHANGED_SENTINEL);

        db::posts::update_post(
            &self.pool,
            post_id,
            category_id,
            title,
            image,
            description,
            tags,
            status.as_str(),
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Không tìm thấy bài viết hoặc người dùng".to_string()))
    }

    pub async fn delete_post(&self, user_id: Uuid, post_id: Uuid) -> Result<()> {
        let post = self.get_author_post(user_id, post_id).await?;
        db::posts::delete_post(&self.pool, post.id).await?;
        tracing::info!(%post_id, %user_id, "post deleted");
        Ok(())
    }

    /// Slugify the title and append a random suffix until the slug is free.
    async fn unique_slug(&self, title: &str) -> Result<String> {
        loop {
            let candidate = format!("{}-{}", slugify(title), random_suffix(4));
            if !db::posts::slug_exists(&self.pool, &candidate).await? {
                return Ok(candidate);
            }
        }
    }
}

fn parse_status(value: &str) -> Result<PostStatus> {
    PostStatus::parse(value)
        .ok_or_else(|| AppError::Validation(format!("Trạng thái không hợp lệ: {value}")))
}

/// Lowercase the title and collapse anything non-alphanumeric into dashes.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_dash = true;
    for c in title.chars() {
        if c.is_alphanumeric() {
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("post");
    }
    slug
}

fn random_suffix(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation_and_spaces() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust   2024  "), "rust-2024");
        assert_eq!(slugify("声明式 UI"), "声明式-ui");
    }

    #[test]
    fn slugify_never_returns_empty() {
        assert_eq!(slugify("!!!"), "post");
        assert_eq!(slugify(""), "post");
    }

    #[test]
    fn random_suffix_has_requested_length() {
        let suffix = random_suffix(4);
        assert_eq!(suffix.len(), 4);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn status_parsing_rejects_unknown_values() {
        assert!(parse_status("Active").is_ok());
        assert!(parse_status("Draft").is_ok());
        assert!(parse_status("published").is_err());
    }
}
