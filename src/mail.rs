//! Outbound email
//!
//! SMTP transport plus the two message templates the application sends:
//! account verification codes and contest reminders. Bodies are rendered by
//! pure functions so the templates can be tested without a transport.

use chrono::{DateTime, Utc};
use lettre::message::{Mailbox, Message, header};
use lettre::transport::smtp::{AsyncSmtpTransport, authentication::Credentials};
use lettre::{AsyncTransport, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::error::{AppError, AppResult};
use crate::utils::time::format_contest_start;

/// Data for a contest reminder email
#[derive(Debug, Clone)]
pub struct ReminderEmail {
    pub contest_name: String,
    pub contest_platform: String,
    pub contest_url: String,
    pub contest_start_time: DateTime<Utc>,
    pub user_name: Option<String>,
}

/// Outbound mail transport
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl Mailer {
    /// Build the SMTP transport from configuration
    pub fn new(config: &SmtpConfig) -> AppResult<Self> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .credentials(credentials)
            .build();

        let from = config
            .from
            .parse()
            .map_err(|_| AppError::Configuration(format!("invalid EMAIL_FROM: {}", config.from)))?;

        Ok(Self { transport, from })
    }

    /// Send a 6-digit verification code to a new account
    pub async fn send_verification(&self, to: &str, otp: &str) -> AppResult<()> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.parse_recipient(to)?)
            .subject("ContestTracker - Email Verification")
            .header(header::ContentType::TEXT_HTML)
            .body(render_verification_body(otp))?;

        self.transport.send(message).await?;
        Ok(())
    }

    /// Send a reminder that a subscribed contest starts soon
    pub async fn send_contest_reminder(&self, to: &str, data: &ReminderEmail) -> AppResult<()> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.parse_recipient(to)?)
            .subject(reminder_subject(&data.contest_name))
            .header(header::ContentType::TEXT_HTML)
            .body(render_reminder_body(data))?;

        self.transport.send(message).await?;
        Ok(())
    }

    fn parse_recipient(&self, to: &str) -> AppResult<Mailbox> {
        to.parse()
            .map_err(|_| AppError::Mail(format!("invalid recipient address: {to}")))
    }
}

/// Subject line for a contest reminder
pub fn reminder_subject(contest_name: &str) -> String {
    format!("Reminder: {contest_name} starts in 1 hour!")
}

/// HTML body for the verification email
pub fn render_verification_body(otp: &str) -> String {
    format!(
        concat!(
            "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">",
            "<h2>Verify Your Email</h2>",
            "<p>Thank you for registering with ContestTracker!</p>",
            "<p>Your verification code is:</p>",
            "<div style=\"background-color: #f4f4f4; padding: 20px; text-align: center;\">",
            "<span style=\"font-size: 32px; font-weight: bold; letter-spacing: 8px;\">{otp}</span>",
            "</div>",
            "<p>This code will expire in 10 minutes.</p>",
            "<p>If you didn't request this verification, please ignore this email.</p>",
            "<hr>",
            "<p style=\"color: #666; font-size: 12px;\">",
            "ContestTracker - Never miss a programming contest</p>",
            "</div>",
        ),
        otp = otp
    )
}

/// HTML body for the contest reminder email
pub fn render_reminder_body(data: &ReminderEmail) -> String {
    let greeting = match &data.user_name {
        Some(name) => format!("Hi {name}!"),
        None => "Hi!".to_string(),
    };
    let platform = capitalize(&data.contest_platform);
    let starts = format_contest_start(data.contest_start_time);

    format!(
        concat!(
            "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">",
            "<h1>Contest Reminder</h1>",
            "<p>{greeting}</p>",
            "<p>A contest you subscribed to is starting in <strong>1 hour</strong>!</p>",
            "<div style=\"background-color: #f8f9fa; padding: 20px; margin: 20px 0;\">",
            "<h2>{name}</h2>",
            "<p><strong>Platform:</strong> {platform}</p>",
            "<p><strong>Starts:</strong> {starts}</p>",
            "</div>",
            "<p><a href=\"{url}\">Go to Contest</a></p>",
            "<hr>",
            "<p style=\"color: #666; font-size: 12px;\">",
            "ContestTracker - Never miss a programming contest</p>",
            "</div>",
        ),
        greeting = greeting,
        name = data.contest_name,
        platform = platform,
        starts = starts,
        url = data.contest_url,
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::parse_datetime;

    #[test]
    fn test_verification_body_contains_otp() {
        let body = render_verification_body("123456");
        assert!(body.contains("123456"));
        assert!(body.contains("expire in 10 minutes"));
    }

    #[test]
    fn test_reminder_body_with_name() {
        let data = ReminderEmail {
            contest_name: "Weekly Contest 378".to_string(),
            contest_platform: "leetcode".to_string(),
            contest_url: "https://leetcode.com/contest/weekly-contest-378/".to_string(),
            contest_start_time: parse_datetime("2024-06-01T12:00:00Z").unwrap(),
            user_name: Some("Alice".to_string()),
        };

        let body = render_reminder_body(&data);
        assert!(body.contains("Hi Alice!"));
        assert!(body.contains("Weekly Contest 378"));
        assert!(body.contains("Leetcode"));
        assert!(body.contains("Saturday, June 1, 2024 at 12:00 UTC"));
        assert!(body.contains("https://leetcode.com/contest/weekly-contest-378/"));
    }

    #[test]
    fn test_reminder_body_without_name() {
        let data = ReminderEmail {
            contest_name: "Round 912".to_string(),
            contest_platform: "codeforces".to_string(),
            contest_url: "https://codeforces.com/contest/1903".to_string(),
            contest_start_time: parse_datetime("2024-06-01T12:00:00Z").unwrap(),
            user_name: None,
        };

        let body = render_reminder_body(&data);
        assert!(body.contains("Hi!"));
    }

    #[test]
    fn test_reminder_subject() {
        assert_eq!(
            reminder_subject("Round 912"),
            "Reminder: Round 912 starts in 1 hour!"
        );
    }
}
