#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Request store boundary.
//!
//! Stored documents are decoded into [`record::RawRequestRecord`]s and
//! validated into [`DisposalRequest`]s here, so that everything downstream
//! (the report engine, the review workflow) can assume well-typed input.
//! The [`RequestStore`] trait is the seam between those consumers and
//! whatever actually holds the records.

pub mod order;
pub mod record;
pub mod store;
pub mod submit;

use ewaste_tracker_request_models::{DisposalRequest, RequestStatus};

pub use order::sort_pending;
pub use store::{JsonFileStore, MemoryStore, load_requests};
pub use submit::{Submission, SubmissionForm, submit};

/// Errors that can occur while loading, validating, or updating requests.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// I/O error (file read/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Weight is zero, negative, or not a finite number.
    #[error("Invalid weight {weight} for request {id}: expected a positive number of kilograms")]
    InvalidWeight {
        /// Identifier of the offending record.
        id: String,
        /// The rejected weight.
        weight: f64,
    },

    /// Status is not one of `pending`, `accepted`, `rejected`.
    #[error("Invalid status '{status}' for request {id}")]
    InvalidStatus {
        /// Identifier of the offending record.
        id: String,
        /// The rejected status string.
        status: String,
    },

    /// Creation timestamp could not be interpreted as an instant.
    #[error("Invalid createdAt '{value}' for request {id}: {message}")]
    InvalidTimestamp {
        /// Identifier of the offending record.
        id: String,
        /// The rejected timestamp string.
        value: String,
        /// Parser diagnostic.
        message: String,
    },

    /// Pickup date is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid pickupDate '{value}' for request {id}: {message}")]
    InvalidPickupDate {
        /// Identifier of the offending record.
        id: String,
        /// The rejected date string.
        value: String,
        /// Parser diagnostic.
        message: String,
    },

    /// Contact number has stray characters or an implausible digit count.
    #[error("Invalid phone number '{value}' for request {id}")]
    InvalidPhoneNumber {
        /// Identifier of the offending record.
        id: String,
        /// The rejected number.
        value: String,
    },

    /// A required intake field is blank.
    #[error("Missing required field {field}")]
    MissingField {
        /// Stored name of the blank field.
        field: &'static str,
    },

    /// A request with the given identifier is already stored.
    #[error("Request {id} already exists")]
    DuplicateId {
        /// The conflicting identifier.
        id: String,
    },

    /// No request with the given identifier exists in the store.
    #[error("Request {id} not found")]
    NotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// A record inside a batch failed validation.
    #[error("Record #{index}: {source}")]
    Record {
        /// Zero-based position of the record in the batch.
        index: usize,
        /// The underlying validation failure.
        #[source]
        source: Box<Self>,
    },
}

/// Source of disposal requests for the report engine and review workflow.
pub trait RequestStore {
    /// Returns every stored request, regardless of status.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the backing storage cannot be read.
    fn all(&self) -> Result<Vec<DisposalRequest>, RequestError>;

    /// Looks up a single request by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the backing storage cannot be read.
    fn find(&self, id: &str) -> Result<Option<DisposalRequest>, RequestError> {
        Ok(self
            .all()?
            .into_iter()
            .find(|request| request.id.as_deref() == Some(id)))
    }

    /// Stores a new request and returns it as stored. A request without an
    /// identifier is assigned a fresh one.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::DuplicateId`] if the identifier is taken, or
    /// another [`RequestError`] if the request cannot be persisted.
    fn insert(&mut self, request: DisposalRequest) -> Result<DisposalRequest, RequestError>;

    /// Sets the status of the request with the given identifier and
    /// returns the updated request.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::NotFound`] if no such request exists, or
    /// another [`RequestError`] if the change cannot be persisted.
    fn update_status(
        &mut self,
        id: &str,
        status: RequestStatus,
    ) -> Result<DisposalRequest, RequestError>;
}
