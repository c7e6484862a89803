//! Business logic layer
//!
//! Services are constructed per request from the shared pool and compose the
//! `db` repositories. Side-effect sequences (toggle-then-notify) are separate
//! statements, not one transaction.

pub mod accounts;
pub mod dashboard;
pub mod engagement;
pub mod posts;

pub use accounts::AccountService;
pub use dashboard::DashboardService;
pub use engagement::EngagementService;
pub use posts::PostService;
