//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod contest;
pub mod filter;
pub mod notification;
pub mod user;
pub mod verification_token;

pub use contest::*;
pub use filter::*;
pub use notification::*;
pub use user::*;
pub use verification_token::*;
