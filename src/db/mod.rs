//! Database access layer
//!
//! Handwritten SQL over sqlx, one module per table. Functions return
//! `sqlx::Error` and are composed by the service layer.

pub mod bookmarks;
pub mod categories;
pub mod comments;
pub mod likes;
pub mod notifications;
pub mod posts;
pub mod profiles;
pub mod stats;
pub mod users;
