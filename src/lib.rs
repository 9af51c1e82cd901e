//! ContestTracker - Competitive Programming Contest Aggregator
//!
//! This library provides the core functionality for the ContestTracker
//! service, which aggregates upcoming contests from multiple competitive
//! programming platforms and sends email reminders before they start.
//!
//! # Features
//!
//! - Upstream feed adapters for six platforms (Codeforces, CodeChef,
//!   LeetCode, HackerRank, HackerEarth, AtCoder)
//! - Concurrent aggregation with per-platform fault isolation
//! - Persisted per-user contest notification subscriptions
//! - Cron-triggered reminder dispatch over SMTP
//! - Email-verified accounts with JWT sessions
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Feeds**: Upstream platform adapters
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod feeds;
pub mod handlers;
pub mod mail;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
