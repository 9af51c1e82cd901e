//! Database repositories

pub mod notification_repo;
pub mod token_repo;
pub mod user_repo;

pub use notification_repo::NotificationRepository;
pub use token_repo::TokenRepository;
pub use user_repo::UserRepository;
