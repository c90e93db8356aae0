use crate::email::application::ports::outgoing::email_sender::{
    EmailAttachment, EmailSendError, EmailSender,
};
use crate::shared::config::{ConfigError, EnvSource};
use async_trait::async_trait;
use lettre::message::{header::ContentType, Attachment, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::fmt;

/// Outgoing mail settings. `Local` targets an unauthenticated relay such as
/// Mailpit and is selected when `RUST_ENV=test`.
#[derive(Clone, PartialEq, Eq)]
pub enum SmtpConfig {
    Relay {
        host: String,
        port: u16,
        username: String,
        password: String,
        from: String,
    },
    Local {
        host: String,
        port: u16,
        from: String,
    },
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmtpConfig::Relay {
                host,
                port,
                username,
                from,
                ..
            } => f
                .debug_struct("Relay")
                .field("host", host)
                .field("port", port)
                .field("username", username)
                .field("from", from)
                .finish_non_exhaustive(),
            SmtpConfig::Local { host, port, from } => f
                .debug_struct("Local")
                .field("host", host)
                .field("port", port)
                .field("from", from)
                .finish(),
        }
    }
}

impl SmtpConfig {
    pub fn from_source<F>(env: &EnvSource<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from = env.required("EMAIL_FROM")?;

        if env.optional("RUST_ENV").as_deref() == Some("test") {
            return Ok(SmtpConfig::Local {
                host: env
                    .optional("SMTP_HOST")
                    .unwrap_or_else(|| "localhost".to_string()),
                port: env.parse_or("SMTP_PORT", 1025u16)?,
                from,
            });
        }

        Ok(SmtpConfig::Relay {
            host: env.required("SMTP_HOST")?,
            port: env.parse_or("SMTP_PORT", 587u16)?,
            username: env.required("SMTP_USERNAME")?,
            password: env.required("SMTP_PASSWORD")?,
            from,
        })
    }

    pub fn from_address(&self) -> &str {
        match self {
            SmtpConfig::Relay { from, .. } | SmtpConfig::Local { from, .. } => from,
        }
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    /// Builds the transport without connecting; the first send opens the
    /// connection.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, EmailSendError> {
        let transport = match config {
            SmtpConfig::Relay {
                host,
                port,
                username,
                password,
                ..
            } => {
                let creds = Credentials::new(username.clone(), password.clone());
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
                    .map_err(|e| EmailSendError::Transport(e.to_string()))?
                    .port(*port)
                    .credentials(creds)
                    .build()
            }
            // Local/test relay (Mailpit, MailHog, etc.)
            SmtpConfig::Local { host, port, .. } => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host.as_str())
                    .port(*port)
                    .build()
            }
        };

        Ok(Self::new_with_mailer(
            Box::new(transport),
            config.from_address(),
        ))
    }

    fn build_message(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        attachment: EmailAttachment,
    ) -> Result<Message, EmailSendError> {
        let content_type = ContentType::parse(&attachment.content_type)
            .map_err(|e| EmailSendError::Build(e.to_string()))?;

        Message::builder()
            .from(
                self.from_email
                    .parse()
                    .map_err(|_| EmailSendError::InvalidAddress(self.from_email.clone()))?,
            )
            .to(to
                .parse()
                .map_err(|_| EmailSendError::InvalidAddress(to.to_string()))?)
            .subject(subject)
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(body.to_string()))
                    .singlepart(
                        Attachment::new(attachment.filename).body(attachment.data, content_type),
                    ),
            )
            .map_err(|e| EmailSendError::Build(e.to_string()))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_with_attachment(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        attachment: EmailAttachment,
    ) -> Result<(), EmailSendError> {
        let email = self.build_message(to, subject, body, attachment)?;

        self.mailer
            .send(email)
            .await
            .map_err(EmailSendError::Transport)?;

        tracing::info!(to = %to, subject = %subject, "Email sent successfully");
        Ok(())
    }
}
