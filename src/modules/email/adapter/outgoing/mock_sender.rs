use crate::email::application::ports::outgoing::email_sender::{
    EmailAttachment, EmailSendError, EmailSender,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub attachment: EmailAttachment,
}

/// Records every message instead of delivering it.
#[derive(Clone, Default)]
pub struct RecordingEmailSender {
    sent_emails: Arc<Mutex<Vec<SentEmail>>>,
}

impl RecordingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.sent_emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send_with_attachment(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        attachment: EmailAttachment,
    ) -> Result<(), EmailSendError> {
        self.sent_emails.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            attachment,
        });
        Ok(())
    }
}
