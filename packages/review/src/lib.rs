#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Administrator review of disposal requests.
//!
//! [`review_request`] changes a request's status through a
//! [`RequestStore`] and then tells the owner about the decision through
//! whichever [`Notifier`] the caller supplies. Delivery is best-effort:
//! a failed notification is reported in the [`ReviewOutcome`] but never
//! rolls back the status change.

pub mod notify;

use ewaste_tracker_request::{RequestError, RequestStore};
use ewaste_tracker_request_models::{DisposalRequest, RequestStatus};

pub use notify::{LogNotifier, Notification, Notifier, NotifyError, NullNotifier, notification_for};

/// Errors that can occur while reviewing a request.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    /// The status change could not be applied.
    #[error("Request store error: {0}")]
    Request(#[from] RequestError),
}

/// What happened to the owner notification after a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    /// The new status does not warrant a notification.
    NotRequired,
    /// The request has no owner contact to notify.
    MissingRecipient,
    /// The notifier accepted the notification.
    Sent,
    /// The notifier failed; the status change still stands.
    Failed(String),
}

/// Result of a successful review.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewOutcome {
    /// The request as stored after the status change.
    pub request: DisposalRequest,
    /// Notification delivery result.
    pub notification: NotificationOutcome,
}

impl ReviewOutcome {
    /// Human-readable summary, mirroring what the admin dashboard shows.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self.notification {
            NotificationOutcome::Failed(_) => {
                "Status updated successfully, but email notification failed"
            }
            _ => "Status updated successfully",
        }
    }
}

/// Sets the status of request `id` and notifies its owner.
///
/// # Errors
///
/// Returns [`ReviewError::Request`] if the request does not exist or the
/// store cannot persist the change. Notification failures are not errors;
/// see [`NotificationOutcome::Failed`].
pub fn review_request(
    store: &mut dyn RequestStore,
    id: &str,
    status: RequestStatus,
    notifier: &dyn Notifier,
) -> Result<ReviewOutcome, ReviewError> {
    let request = store.update_status(id, status)?;

    let notification = match (status.is_reviewed(), request.owner.as_ref()) {
        (false, _) => NotificationOutcome::NotRequired,
        (true, None) => {
            log::warn!("Request {id} has no owner contact, skipping notification");
            NotificationOutcome::MissingRecipient
        }
        (true, Some(owner)) => match notification_for(status, owner) {
            None => NotificationOutcome::NotRequired,
            Some(notification) => match notifier.notify(&notification) {
                Ok(()) => {
                    log::info!("Notified {} about request {id}", owner.email);
                    NotificationOutcome::Sent
                }
                Err(e) => {
                    log::error!("Notification for request {id} failed: {e}");
                    NotificationOutcome::Failed(e.to_string())
                }
            },
        },
    };

    Ok(ReviewOutcome {
        request,
        notification,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::{TimeZone as _, Utc};
    use ewaste_tracker_request::MemoryStore;
    use ewaste_tracker_request_models::{ItemCategory, Owner};

    use super::*;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
            self.sent
                .lock()
                .map_err(|e| NotifyError::Delivery(e.to_string()))?
                .push(notification.clone());
            Ok(())
        }
    }

    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn notify(&self, _notification: &Notification) -> Result<(), NotifyError> {
            Err(NotifyError::Delivery("SMTP unavailable".to_string()))
        }
    }

    fn store(owner: Option<Owner>) -> MemoryStore {
        MemoryStore::new(vec![DisposalRequest {
            id: Some("r1".to_string()),
            item_category: ItemCategory::Television,
            weight_kg: 18.0,
            status: RequestStatus::Pending,
            location_text: "Thane".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 8, 14, 9, 0, 0).unwrap(),
            pickup_date: None,
            phone_number: None,
            owner,
        }])
    }

    fn owner() -> Option<Owner> {
        Some(Owner {
            full_name: "Rahul Deshmukh".to_string(),
            email: "rahul@example.com".to_string(),
        })
    }

    #[test]
    fn acceptance_notifies_owner() {
        let mut store = store(owner());
        let notifier = RecordingNotifier::default();
        let outcome =
            review_request(&mut store, "r1", RequestStatus::Accepted, &notifier).unwrap();

        assert_eq!(outcome.request.status, RequestStatus::Accepted);
        assert_eq!(outcome.notification, NotificationOutcome::Sent);
        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient_email, "rahul@example.com");
        assert_eq!(sent[0].subject, "E-waste Request Accepted");
    }

    #[test]
    fn moving_back_to_pending_sends_nothing() {
        let mut store = store(owner());
        let notifier = RecordingNotifier::default();
        let outcome =
            review_request(&mut store, "r1", RequestStatus::Pending, &notifier).unwrap();
        assert_eq!(outcome.notification, NotificationOutcome::NotRequired);
        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn failed_notification_keeps_status_change() {
        let mut store = store(owner());
        let outcome =
            review_request(&mut store, "r1", RequestStatus::Rejected, &FailingNotifier).unwrap();

        assert!(matches!(outcome.notification, NotificationOutcome::Failed(ref m) if m.contains("SMTP")));
        assert_eq!(
            outcome.message(),
            "Status updated successfully, but email notification failed"
        );
        assert_eq!(
            store.find("r1").unwrap().map(|r| r.status),
            Some(RequestStatus::Rejected)
        );
    }

    #[test]
    fn missing_owner_is_reported() {
        let mut store = store(None);
        let outcome =
            review_request(&mut store, "r1", RequestStatus::Accepted, &NullNotifier).unwrap();
        assert_eq!(outcome.notification, NotificationOutcome::MissingRecipient);
        assert_eq!(outcome.message(), "Status updated successfully");
    }

    #[test]
    fn unknown_request_is_an_error() {
        let mut store = store(owner());
        let err = review_request(&mut store, "nope", RequestStatus::Accepted, &NullNotifier)
            .unwrap_err();
        assert!(matches!(
            err,
            ReviewError::Request(RequestError::NotFound { .. })
        ));
    }
}
