#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the e-waste request tracker.
//!
//! Each public function backs one `ewaste_tracker` subcommand and returns
//! the text to print, so the same code paths serve both the flag-driven
//! CLI and the interactive menu.

pub mod config;
pub mod interactive;
pub mod render;

use std::path::Path;

use chrono::Utc;
use ewaste_tracker_report::{count_locations, generate_report};
use ewaste_tracker_request::{JsonFileStore, RequestError, RequestStore as _, SubmissionForm};
use ewaste_tracker_request_models::{PendingOrder, RequestStatus, estimate_disposal_cost};
use ewaste_tracker_review::{Notifier, ReviewError, review_request};

use crate::config::OutputFormat;
use crate::render::{ReportView, RequestListing, estimate_line, submission_line};

/// Errors surfaced by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    /// Requests could not be loaded or updated.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The review could not be applied.
    #[error(transparent)]
    Review(#[from] ReviewError),

    /// The report could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A command argument was out of range.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of what went wrong.
        message: String,
    },
}

/// Loads every request from `requests_path` and renders the impact report.
/// A missing store file yields the empty report.
///
/// # Errors
///
/// Returns [`CliError`] if the requests cannot be loaded or the report
/// cannot be serialized.
pub fn report(requests_path: &Path, format: OutputFormat) -> Result<String, CliError> {
    let requests = JsonFileStore::open(requests_path)?.all()?;
    log::info!(
        "Generating report from {} request(s) in {}",
        requests.len(),
        requests_path.display()
    );
    let report = generate_report(&requests);

    Ok(match format {
        OutputFormat::Text => ReportView {
            report: &report,
            locations: &count_locations(&requests),
        }
        .to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
    })
}

/// Renders every request in `requests_path`, grouped by status, with the
/// pending group in `pending_order` when given.
///
/// # Errors
///
/// Returns [`CliError`] if the requests cannot be loaded.
pub fn list_requests(
    requests_path: &Path,
    pending_order: Option<PendingOrder>,
) -> Result<String, CliError> {
    let requests = JsonFileStore::open(requests_path)?.all()?;
    Ok(RequestListing {
        requests: &requests,
        pending_order,
    }
    .to_string())
}

/// Validates `form`, stores it in `requests_path` as a pending request,
/// and quotes its disposal cost.
///
/// # Errors
///
/// Returns [`CliError`] if the store cannot be opened, the form fails
/// validation, or the new request cannot be saved.
pub fn submit(requests_path: &Path, form: SubmissionForm) -> Result<String, CliError> {
    let mut store = JsonFileStore::open(requests_path)?;
    let submission = ewaste_tracker_request::submit(&mut store, form, Utc::now())?;
    Ok(submission_line(&submission))
}

/// Quotes the disposal cost for `weight_kg` of the item labelled `label`.
///
/// # Errors
///
/// Returns [`CliError::InvalidArgument`] if `weight_kg` is not a finite,
/// positive number.
pub fn estimate(label: &str, weight_kg: f64) -> Result<String, CliError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(CliError::InvalidArgument {
            message: format!("weight must be a positive number of kilograms, got {weight_kg}"),
        });
    }
    let cost = estimate_disposal_cost(label, weight_kg);
    Ok(estimate_line(label, weight_kg, cost))
}

/// Sets the status of request `id` in the store at `requests_path` and
/// notifies the owner through `notifier`.
///
/// # Errors
///
/// Returns [`CliError`] if the store cannot be opened, the request does
/// not exist, or the change cannot be saved.
pub fn review(
    requests_path: &Path,
    id: &str,
    status: RequestStatus,
    notifier: &dyn Notifier,
) -> Result<String, CliError> {
    let mut store = JsonFileStore::open(requests_path)?;
    let outcome = review_request(&mut store, id, status, notifier)?;
    log::debug!(
        "{} now holds {} request(s)",
        store.path().display(),
        store.all()?.len()
    );
    Ok(format!(
        "{}: request {id} is now {}",
        outcome.message(),
        outcome.request.status
    ))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use ewaste_tracker_request::load_requests;
    use ewaste_tracker_review::NullNotifier;

    use super::*;

    const REQUESTS: &str = r#"[
        {"_id":"r1","itemName":"Laptop","weight":3,"status":"accepted","location":"Thane West","createdAt":"2024-10-02T20:00:00.000Z"},
        {"_id":"r2","itemName":"Smartphone","weight":0.2,"status":"accepted","location":"Mumbai Central","createdAt":"2024-10-03T05:00:00.000Z"},
        {"_id":"r3","itemName":"Unknown","weight":5,"status":"accepted","location":"Thane","createdAt":"2024-11-15T10:00:00.000Z"},
        {"_id":"r4","itemName":"Printer","weight":7,"status":"pending","location":"Pune","createdAt":"2024-11-16T10:00:00.000Z",
         "owner":{"fullName":"Meera Iyer","email":"meera@example.com"}}
    ]"#;

    fn fixture(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "ewaste_tracker_cli_{name}_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, REQUESTS).unwrap();
        path
    }

    #[test]
    fn json_report_uses_wire_keys() {
        let path = fixture("json_report");
        let out = report(&path, OutputFormat::Json).unwrap();
        std::fs::remove_file(&path).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let weight = value["totalAcceptedWeight"].as_f64().unwrap();
        let carbon = value["carbonFootprint"].as_f64().unwrap();
        assert!((weight - 8.2).abs() < 1e-9);
        assert!((carbon - 9.14).abs() < 1e-9);
        assert_eq!(value["mostRequestedLocation"], "thane");
        assert_eq!(value["requestsPerTimeFrame"]["daily"]["2024-10-03"], 2);
        assert_eq!(value["requestsPerTimeFrame"]["monthly"]["2024-11"], 1);
        assert_eq!(value["requestsPerTimeFrame"]["yearly"]["2024"], 3);
    }

    #[test]
    fn text_report_renders() {
        let path = fixture("text_report");
        let out = report(&path, OutputFormat::Text).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(out.contains("Collected:          8.20 kg"));
        assert!(out.contains("Most requested:     thane"));
    }

    #[test]
    fn missing_store_yields_empty_report() {
        let path = std::env::temp_dir().join(format!(
            "ewaste_tracker_cli_absent_{}.json",
            std::process::id()
        ));
        let text = report(&path, OutputFormat::Text).unwrap();
        assert!(text.contains("Collected:          0.00 kg"));
        assert_eq!(text.matches("(none)").count(), 3);

        let json = report(&path, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["totalAcceptedWeight"], 0.0);
        assert!(!path.exists());
    }

    #[test]
    fn text_report_lists_localities() {
        let path = fixture("locality_report");
        let out = report(&path, OutputFormat::Text).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(out.contains("  thane             2"));
        assert!(out.contains("  mumbai            1"));
    }

    #[test]
    fn submit_stores_pending_request() {
        let path = fixture("submit");
        let form = SubmissionForm {
            item_name: "Refrigerator".to_string(),
            weight: 60.0,
            location: "Kharghar, Navi Mumbai".to_string(),
            pickup_date: Some("2024-12-01".to_string()),
            phone_number: Some("+91 98200 12345".to_string()),
            owner: None,
        };
        let out = submit(&path, form).unwrap();
        let reloaded = load_requests(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(out.ends_with("Rs 900.00"), "{out}");
        assert_eq!(reloaded.len(), 5);
        let stored = &reloaded[4];
        assert_eq!(stored.status, RequestStatus::Pending);
        assert!(out.contains(stored.id.as_deref().unwrap()));
    }

    #[test]
    fn submit_rejects_invalid_form() {
        let path = fixture("submit_invalid");
        let form = SubmissionForm {
            item_name: "Laptop".to_string(),
            weight: 2.0,
            location: "Thane".to_string(),
            pickup_date: Some("tomorrow".to_string()),
            ..SubmissionForm::default()
        };
        let err = submit(&path, form).unwrap_err();
        let reloaded = load_requests(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            err,
            CliError::Request(RequestError::InvalidPickupDate { .. })
        ));
        assert_eq!(reloaded.len(), 4);
    }

    #[test]
    fn review_persists_and_reports_outcome() {
        let path = fixture("review");
        let out = review(&path, "r4", RequestStatus::Accepted, &NullNotifier).unwrap();
        let reloaded = load_requests(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(out, "Status updated successfully: request r4 is now accepted");
        let r4 = reloaded.iter().find(|r| r.id.as_deref() == Some("r4")).unwrap();
        assert_eq!(r4.status, RequestStatus::Accepted);
    }

    #[test]
    fn review_unknown_request_fails() {
        let path = fixture("review_unknown");
        let err = review(&path, "zz", RequestStatus::Rejected, &NullNotifier).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            err,
            CliError::Review(ReviewError::Request(RequestError::NotFound { .. }))
        ));
    }

    #[test]
    fn estimate_rejects_non_positive_weight() {
        assert!(estimate("Laptop", 0.0).is_err());
        assert!(estimate("Laptop", f64::NAN).is_err());
        assert!(estimate("Laptop", 1.5).unwrap().ends_with("Rs 45.00"));
    }

    #[test]
    fn listing_reads_store() {
        let path = fixture("listing");
        let out = list_requests(&path, None).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(out.contains("Accepted (3)"));
        assert!(out.contains("Pending (1)"));
    }

    #[test]
    fn listing_applies_pending_order() {
        let path = fixture("listing_sorted");
        let raws = r#"[
            {"_id":"p-late","itemName":"Laptop","weight":2,"status":"pending","location":"Thane","createdAt":"2024-10-01T00:00:00Z","pickupDate":"2024-10-20"},
            {"_id":"p-none","itemName":"Laptop","weight":9,"status":"pending","location":"Thane","createdAt":"2024-10-01T00:00:00Z"},
            {"_id":"p-early","itemName":"Laptop","weight":4,"status":"pending","location":"Thane","createdAt":"2024-10-01T00:00:00Z","pickupDate":"2024-10-05"}
        ]"#;
        std::fs::write(&path, raws).unwrap();
        let by_date = list_requests(&path, Some(PendingOrder::PickupDate)).unwrap();
        let by_weight = list_requests(&path, Some(PendingOrder::WeightAsc)).unwrap();
        std::fs::remove_file(&path).unwrap();

        let pos = |text: &str, id: &str| text.find(id).unwrap();
        assert!(pos(&by_date, "p-early") < pos(&by_date, "p-late"));
        assert!(pos(&by_date, "p-late") < pos(&by_date, "p-none"));
        assert!(pos(&by_weight, "p-late") < pos(&by_weight, "p-early"));
        assert!(pos(&by_weight, "p-early") < pos(&by_weight, "p-none"));
    }
}
