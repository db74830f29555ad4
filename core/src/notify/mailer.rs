use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::info;
use std::fmt;

use crate::error::Result;
use crate::notify::Notifier;

pub const DEFAULT_SMTP_PORT: u16 = 465;

#[derive(Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub sender_email: String,
    pub recipient_email: String,
    pub smtp_username: String,
    pub smtp_password: String,
}

// keep the password out of debug logs
impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("smtp_server", &self.smtp_server)
            .field("smtp_port", &self.smtp_port)
            .field("sender_email", &self.sender_email)
            .field("recipient_email", &self.recipient_email)
            .field("smtp_username", &self.smtp_username)
            .finish_non_exhaustive()
    }
}

impl EmailConfig {
    /// Notification is all-or-nothing: any missing value disables it.
    pub fn from_parts(
        smtp_server: Option<String>,
        smtp_port: u16,
        sender_email: Option<String>,
        recipient_email: Option<String>,
        smtp_username: Option<String>,
        smtp_password: Option<String>,
    ) -> Option<Self> {
        Some(EmailConfig {
            smtp_server: non_empty(smtp_server)?,
            smtp_port,
            sender_email: non_empty(sender_email)?,
            recipient_email: non_empty(recipient_email)?,
            smtp_username: non_empty(smtp_username)?,
            smtp_password: non_empty(smtp_password)?,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Sends one plain-text message per notification over SMTPS.
pub struct SmtpMailer {
    config: EmailConfig,
}

impl SmtpMailer {
    pub fn new(config: EmailConfig) -> Self {
        SmtpMailer { config }
    }

    pub fn build_message(&self, subject: &str, body: &str) -> Result<Message> {
        let message = Message::builder()
            .from(self.config.sender_email.parse::<Mailbox>()?)
            .to(self.config.recipient_email.parse::<Mailbox>()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;
        Ok(message)
    }
}

#[async_trait]
impl Notifier for SmtpMailer {
    async fn notify(&self, subject: &str, body: &str) -> Result<()> {
        let message = self.build_message(subject, body)?;

        let credentials = Credentials::new(
            self.config.smtp_username.clone(),
            self.config.smtp_password.clone(),
        );
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.smtp_server)?
            .port(self.config.smtp_port)
            .credentials(credentials)
            .build();

        transport.send(message).await?;
        info!(
            "[+] email sent to {} via {}:{}",
            self.config.recipient_email, self.config.smtp_server, self.config.smtp_port
        );
        Ok(())
    }
}
