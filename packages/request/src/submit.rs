//! Intake of new pickup requests.
//!
//! A submission goes through the same validation as a stored record, so a
//! request accepted here always loads back from the store.

use chrono::{DateTime, SecondsFormat, Utc};
use ewaste_tracker_request_models::{
    DisposalRequest, Owner, RequestStatus, estimate_disposal_cost,
};

use crate::record::{RawRequestRecord, normalize};
use crate::{RequestError, RequestStore};

/// Fields of the intake form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionForm {
    /// Item label, one of the category names.
    pub item_name: String,
    /// Declared weight in kilograms.
    pub weight: f64,
    /// Free-form pickup address.
    pub location: String,
    /// Requested pickup day (`YYYY-MM-DD`).
    pub pickup_date: Option<String>,
    /// Contact number.
    pub phone_number: Option<String>,
    /// Requester contact for review notifications.
    pub owner: Option<Owner>,
}

/// A stored submission together with its quoted disposal cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// The request as stored, with its assigned identifier.
    pub request: DisposalRequest,
    /// Estimated disposal cost in rupees.
    pub estimated_cost: f64,
}

/// Validates `form`, stores it as a pending request created at
/// `submitted_at`, and quotes its disposal cost.
///
/// # Errors
///
/// * [`RequestError::MissingField`] if the item label or location is blank
/// * any validation error [`normalize`] reports for the form's values
/// * any error the store reports while inserting
pub fn submit(
    store: &mut dyn RequestStore,
    form: SubmissionForm,
    submitted_at: DateTime<Utc>,
) -> Result<Submission, RequestError> {
    if form.item_name.trim().is_empty() {
        return Err(RequestError::MissingField { field: "itemName" });
    }
    if form.location.trim().is_empty() {
        return Err(RequestError::MissingField { field: "location" });
    }

    let estimated_cost = estimate_disposal_cost(&form.item_name, form.weight);
    let request = normalize(RawRequestRecord {
        id: None,
        item_name: form.item_name,
        weight: form.weight,
        status: RequestStatus::Pending.to_string(),
        location: form.location,
        created_at: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        pickup_date: form.pickup_date,
        phone_number: form.phone_number,
        owner: form.owner,
    })?;

    let request = store.insert(request)?;
    log::debug!(
        "Quoted Rs {estimated_cost:.2} for request {}",
        request.id.as_deref().unwrap_or_default()
    );
    Ok(Submission {
        request,
        estimated_cost,
    })
}
