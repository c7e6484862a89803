//! Data models for the blog API
//!
//! Entities map one-to-one onto the relational schema in `migrations/`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Registered account
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Author profile, 1:1 with a user
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub about: Option<String>,
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub title: String,
    pub image: Option<String>,
    pub slug: String,
}

/// Blog post. `status` holds one of the [`PostStatus`] values as text and
/// gates visibility in the public listing and detail endpoints. `view_count`
/// only ever increases.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub image: Option<String>,
    pub description: String,
    pub tags: String,
    pub slug: String,
    pub status: String,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reader comment on a post. Commenters are not accounts; they leave a name
/// and email. `reply` is filled in later by the post author.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub name: String,
    pub email: String,
    pub comment: String,
    pub reply: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Saved post, unique per (user, post)
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Bookmark {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Event record for a post owner. `seen` transitions false to true only.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub kind: String,
    pub seen: bool,
    pub created_at: DateTime<Utc>,
}

/// Post visibility states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PostStatus {
    Active,
    Draft,
    Disabled,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Active => "Active",
            PostStatus::Draft => "Draft",
            PostStatus::Disabled => "Disabled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Active" => Some(PostStatus::Active),
            "Draft" => Some(PostStatus::Draft),
            "Disabled" => Some(PostStatus::Disabled),
            _ => None,
        }
    }
}

/// Notification kinds produced by the engagement endpoints
pub mod notification_kind {
    pub const COMMENT: &str = "Comment";
    pub const BOOKMARK: &str = "Bookmark";
}

/// One-row aggregate returned by the dashboard stats endpoint.
///
/// `views` and `likes` are SQL sums and stay null when the author has no
/// posts. `bookmarks` counts every bookmark in the system, not just the
/// author's; the scoping is inherited behavior and kept as-is.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorStats {
    pub views: Option<i64>,
    pub posts: i64,
    pub likes: Option<i64>,
    pub bookmarks: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_status_round_trips() {
        for status in [PostStatus::Active, PostStatus::Draft, PostStatus::Disabled] {
            assert_eq!(PostStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(PostStatus::parse("active"), None);
        assert_eq!(PostStatus::parse(""), None);
    }

    #[test]
    fn user_serialization_hides_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            full_name: "Anh Tran".into(),
            email: "anh@example.com".into(),
            username: "anh".into(),
            password_hash: "$argon2id$secret".into(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "anh@example.com");
    }
}
