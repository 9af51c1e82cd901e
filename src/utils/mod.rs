//! Utility functions

pub mod crypto;
pub mod time;
pub mod validation;

pub use crypto::{generate_otp, hash_string};
pub use time::{format_contest_start, parse_datetime};
pub use validation::{validate_email, validate_whatsapp_number};
