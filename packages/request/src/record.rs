//! Stored document shape and validation into [`DisposalRequest`].
//!
//! The stored shape uses the intake form's field names (`itemName`,
//! `weight`, `location`). The report-facing names are accepted as aliases
//! so that exports of [`DisposalRequest`] can be loaded back.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use ewaste_tracker_request_models::{DisposalRequest, ItemCategory, Owner, RequestStatus};
use serde::{Deserialize, Serialize};

use crate::RequestError;

/// Placeholder used in diagnostics for records without an identifier.
const UNSAVED_ID: &str = "<unsaved>";

/// Format of the intake form's date picker.
const PICKUP_DATE_FORMAT: &str = "%Y-%m-%d";

/// Digit count accepted for a contact number, with or without country code.
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=15;

/// A disposal request exactly as persisted, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRequestRecord {
    /// Store identifier.
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Item label as picked on the intake form.
    #[serde(alias = "itemCategory")]
    pub item_name: String,
    /// Declared weight in kilograms.
    #[serde(alias = "weightKg")]
    pub weight: f64,
    /// Review status string.
    pub status: String,
    /// Free-form pickup address.
    #[serde(alias = "locationText")]
    pub location: String,
    /// RFC 3339 submission timestamp.
    pub created_at: String,
    /// Requested pickup day (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_date: Option<String>,
    /// Contact number as typed on the intake form.
    #[serde(
        rename = "PhoneNumber",
        alias = "phoneNumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<String>,
    /// Requester contact, if populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
}

impl RawRequestRecord {
    fn label(&self) -> String {
        self.id.clone().unwrap_or_else(|| UNSAVED_ID.to_string())
    }
}

/// Validates a stored record into a [`DisposalRequest`].
///
/// Unknown item labels are not an error; they become
/// [`ItemCategory::Other`].
///
/// # Errors
///
/// * [`RequestError::InvalidWeight`] if the weight is not a finite,
///   positive number
/// * [`RequestError::InvalidStatus`] if the status is not a known status
/// * [`RequestError::InvalidTimestamp`] if `createdAt` is not RFC 3339
/// * [`RequestError::InvalidPickupDate`] if `pickupDate` is not `YYYY-MM-DD`
/// * [`RequestError::InvalidPhoneNumber`] if the contact number is malformed
pub fn normalize(raw: RawRequestRecord) -> Result<DisposalRequest, RequestError> {
    if !raw.weight.is_finite() || raw.weight <= 0.0 {
        return Err(RequestError::InvalidWeight {
            id: raw.label(),
            weight: raw.weight,
        });
    }

    let status = raw
        .status
        .trim()
        .parse::<RequestStatus>()
        .map_err(|_| RequestError::InvalidStatus {
            id: raw.label(),
            status: raw.status.clone(),
        })?;

    let created_at = parse_created_at(&raw.created_at).map_err(|e| {
        RequestError::InvalidTimestamp {
            id: raw.label(),
            value: raw.created_at.clone(),
            message: e.to_string(),
        }
    })?;

    let pickup_date = match non_blank(raw.pickup_date.as_deref()) {
        None => None,
        Some(value) => Some(
            NaiveDate::parse_from_str(value, PICKUP_DATE_FORMAT).map_err(|e| {
                RequestError::InvalidPickupDate {
                    id: raw.label(),
                    value: value.to_string(),
                    message: e.to_string(),
                }
            })?,
        ),
    };

    let phone_number = match non_blank(raw.phone_number.as_deref()) {
        None => None,
        Some(value) if is_valid_phone_number(value) => Some(value.to_string()),
        Some(value) => {
            return Err(RequestError::InvalidPhoneNumber {
                id: raw.label(),
                value: value.to_string(),
            });
        }
    };

    Ok(DisposalRequest {
        item_category: ItemCategory::from_label(&raw.item_name),
        weight_kg: raw.weight,
        status,
        location_text: raw.location,
        created_at,
        pickup_date,
        phone_number,
        owner: raw.owner,
        id: raw.id,
    })
}

/// Validates a batch of stored records, failing on the first bad one.
///
/// # Errors
///
/// Returns [`RequestError::Record`] wrapping the first validation failure
/// together with the record's position in the batch.
pub fn normalize_all(raws: Vec<RawRequestRecord>) -> Result<Vec<DisposalRequest>, RequestError> {
    raws.into_iter()
        .enumerate()
        .map(|(index, raw)| {
            normalize(raw).map_err(|e| RequestError::Record {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Digits plus common separators, with a plausible number of digits.
fn is_valid_phone_number(value: &str) -> bool {
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));
    allowed && PHONE_DIGITS.contains(&value.chars().filter(char::is_ascii_digit).count())
}

/// Parses an RFC 3339 timestamp with any offset into a UTC instant.
fn parse_created_at(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value.trim()).map(|dt| dt.with_timezone(&Utc))
}

impl From<&DisposalRequest> for RawRequestRecord {
    fn from(request: &DisposalRequest) -> Self {
        Self {
            id: request.id.clone(),
            item_name: request.item_category.to_string(),
            weight: request.weight_kg,
            status: request.status.to_string(),
            location: request.location_text.clone(),
            created_at: request
                .created_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            pickup_date: request
                .pickup_date
                .map(|d| d.format(PICKUP_DATE_FORMAT).to_string()),
            phone_number: request.phone_number.clone(),
            owner: request.owner.clone(),
        }
    }
}
