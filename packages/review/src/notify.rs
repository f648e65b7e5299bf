//! Owner notifications.
//!
//! [`Notifier`] decouples the review workflow from any delivery channel.
//! Callers inject an implementation (mail relay, log-only, or silence)
//! instead of the workflow holding transport credentials itself.

use ewaste_tracker_request_models::{Owner, RequestStatus};

const SIGNATURE: &str = "Best regards,\nE-waste Management Team";

/// Errors a [`Notifier`] can report.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The channel refused or failed to deliver the message.
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// A message to the owner of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Name used in the greeting.
    pub recipient_name: String,
    /// Delivery address.
    pub recipient_email: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

/// Delivery channel for [`Notification`]s.
///
/// Implementations must be `Send + Sync` so a single instance can be
/// shared across concurrent reviews.
pub trait Notifier: Send + Sync {
    /// Delivers `notification`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if delivery fails.
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Writes notifications to the log instead of delivering them.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        log::info!(
            "To: {} <{}>\nSubject: {}\n\n{}",
            notification.recipient_name,
            notification.recipient_email,
            notification.subject,
            notification.body
        );
        Ok(())
    }
}

/// Silently drops every notification.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: &Notification) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// Builds the owner notification for a status change.
///
/// Only decisions ([`RequestStatus::Accepted`], [`RequestStatus::Rejected`])
/// produce a notification.
#[must_use]
pub fn notification_for(status: RequestStatus, owner: &Owner) -> Option<Notification> {
    let (subject, message) = match status {
        RequestStatus::Pending => return None,
        RequestStatus::Accepted => (
            "E-waste Request Accepted",
            "Your e-waste request has been accepted. Our team will contact you soon for pickup.",
        ),
        RequestStatus::Rejected => (
            "E-waste Request Status Update",
            "Your e-waste request has been reviewed and requires additional information. \
             Please contact our support team.",
        ),
    };

    Some(Notification {
        recipient_name: owner.full_name.clone(),
        recipient_email: owner.email.clone(),
        subject: subject.to_string(),
        body: format!("Dear {},\n\n{message}\n\n{SIGNATURE}", owner.full_name),
    })
}
