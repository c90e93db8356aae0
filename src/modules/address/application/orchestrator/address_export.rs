use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::address::application::domain::export_field::{ExportFieldError, ExportFields};
use crate::address::application::ports::incoming::use_cases::ExportAddressesUseCase;
use crate::auth::application::domain::entities::UserId;
use crate::email::application::ports::outgoing::email_sender::{EmailAttachment, EmailSender};
use crate::shared::validation::is_valid_email;

pub const EXPORT_SUBJECT: &str = "Address Book Export";
pub const EXPORT_BODY: &str = "Please find your address book export attached.";
pub const EXPORT_FILENAME: &str = "address_book.csv";

// ============================================================================
// Export Request Errors (raised before anything is spawned)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportRequestError {
    #[error(transparent)]
    InvalidFields(#[from] ExportFieldError),

    #[error("Invalid recipient email address")]
    InvalidRecipient,
}

// ============================================================================
// Address Export Orchestrator
// ============================================================================

/// Validates an export request up front, then builds the CSV and mails it
/// from a detached task. Failures in the detached stage are logged only.
#[derive(Clone)]
pub struct AddressExportOrchestrator {
    export_use_case: Arc<dyn ExportAddressesUseCase + Send + Sync>,
    email_sender: Arc<dyn EmailSender + Send + Sync>,
}

impl AddressExportOrchestrator {
    pub fn new(
        export_use_case: Arc<dyn ExportAddressesUseCase + Send + Sync>,
        email_sender: Arc<dyn EmailSender + Send + Sync>,
    ) -> Self {
        Self {
            export_use_case,
            email_sender,
        }
    }

    pub fn start(
        &self,
        owner: UserId,
        field_names: &[String],
        recipient: &str,
    ) -> Result<JoinHandle<()>, ExportRequestError> {
        let fields = ExportFields::parse(field_names)?;

        let recipient = recipient.trim().to_string();
        if !is_valid_email(&recipient) {
            return Err(ExportRequestError::InvalidRecipient);
        }

        let export_use_case = Arc::clone(&self.export_use_case);
        let email_sender = Arc::clone(&self.email_sender);

        tracing::info!(user_id = %owner, "Address export started");

        Ok(tokio::spawn(async move {
            let csv = match export_use_case.execute(owner, &fields).await {
                Ok(csv) => csv,
                Err(e) => {
                    tracing::error!(user_id = %owner, error = %e, "Address export failed");
                    return;
                }
            };

            let attachment = EmailAttachment::csv(EXPORT_FILENAME, csv);

            match email_sender
                .send_with_attachment(&recipient, EXPORT_SUBJECT, EXPORT_BODY, attachment)
                .await
            {
                Ok(()) => tracing::info!(user_id = %owner, "Address export delivered"),
                Err(e) => {
                    tracing::error!(user_id = %owner, error = %e, "Address export email failed")
                }
            }
        }))
    }
}
