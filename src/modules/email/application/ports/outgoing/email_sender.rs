use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAttachment {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl EmailAttachment {
    pub fn csv(filename: &str, data: Vec<u8>) -> Self {
        Self {
            filename: filename.to_string(),
            content_type: "text/csv".to_string(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailSendError {
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("SMTP transport error: {0}")]
    Transport(String),
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends a plain-text message carrying a single attachment.
    async fn send_with_attachment(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        attachment: EmailAttachment,
    ) -> Result<(), EmailSendError>;
}
