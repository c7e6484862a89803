//! Blog API Library
//!
//! REST backend for a blog publishing platform: registration and token
//! issuance, author profiles, categories, posts, comments, likes, bookmarks,
//! notifications, and an author dashboard with aggregate statistics.
//!
//! # Modules
//!
//! - `handlers`: HTTP request handlers
//! - `models`: Data structures for users, posts, engagement records
//! - `services`: Business logic layer
//! - `db`: Database access layer (handwritten SQL over sqlx)
//! - `middleware`: JWT authentication middleware
//! - `security`: Password hashing and token issuance
//! - `error`: Error types and HTTP mapping
//! - `config`: Configuration management

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod security;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
