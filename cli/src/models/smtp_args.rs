use clap::Args;

use m3ucheck_core::notify::mailer::{EmailConfig, DEFAULT_SMTP_PORT};

// SmtpArgs, optional email notification settings
#[derive(Args, Debug, Default)]
pub struct SmtpArgs {
    /// SMTP server address for sending email notifications
    #[arg(long, env = "SMTP_SERVER")]
    pub smtp_server: Option<String>,

    /// SMTP server port
    #[arg(long, env = "SMTP_PORT", default_value_t = DEFAULT_SMTP_PORT)]
    pub smtp_port: u16,

    /// Sender email address for email notifications
    #[arg(long, env = "SMTP_SENDER")]
    pub sender_email: Option<String>,

    /// Recipient email address for email notifications
    #[arg(long, env = "SMTP_RECIPIENT")]
    pub recipient_email: Option<String>,

    /// SMTP username for email authentication
    #[arg(long, env = "SMTP_USERNAME")]
    pub smtp_username: Option<String>,

    /// SMTP password for email authentication
    #[arg(long, env = "SMTP_PASSWORD", hide_env_values = true)]
    pub smtp_password: Option<String>,
}

impl SmtpArgs {
    pub fn into_email_config(self) -> Option<EmailConfig> {
        EmailConfig::from_parts(
            self.smtp_server,
            self.smtp_port,
            self.sender_email,
            self.recipient_email,
            self.smtp_username,
            self.smtp_password,
        )
    }
}
