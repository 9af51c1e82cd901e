//! Business logic services

pub mod auth_service;
pub mod contest_service;
pub mod dispatcher_service;
pub mod notification_service;

pub use auth_service::AuthService;
pub use contest_service::ContestService;
pub use dispatcher_service::{DispatchSummary, DispatcherService};
pub use notification_service::NotificationService;
