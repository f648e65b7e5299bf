#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Environmental-impact report engine.
//!
//! [`generate_report`] is a pure function over an in-memory slice of
//! disposal requests. Weight, carbon, and time-bucket statistics only
//! consider accepted requests; locality classification looks at every
//! request regardless of status.

pub mod buckets;
pub mod location;

use ewaste_tracker_report_models::{Report, RequestsPerTimeFrame};
use ewaste_tracker_request_models::DisposalRequest;

pub use buckets::{BucketKeys, REPORT_TIME_ZONE, bucket_keys};
pub use location::{classify_location, count_locations};

/// Builds the impact report for `requests`.
///
/// Never fails: an empty slice, or one without any accepted request,
/// yields zero totals, empty time series, and the first locality in
/// precedence order.
#[must_use]
pub fn generate_report(requests: &[DisposalRequest]) -> Report {
    let accepted: Vec<&DisposalRequest> = requests.iter().filter(|r| r.is_accepted()).collect();

    log::debug!(
        "Generating report over {} request(s), {} accepted",
        requests.len(),
        accepted.len()
    );

    let (total_accepted_weight_kg, carbon_footprint_kg) =
        accumulate_totals(accepted.iter().copied());

    let mut requests_per_time_frame = RequestsPerTimeFrame::default();
    for request in &accepted {
        let BucketKeys { day, month, year } = bucket_keys(request.created_at);
        requests_per_time_frame.record(day, month, year);
    }

    let most_requested_location = count_locations(requests).most_requested();

    Report {
        total_accepted_weight_kg,
        carbon_footprint_kg,
        requests_per_time_frame,
        most_requested_location,
    }
}

/// Sums `(weight, weight × emission factor)` over `requests`.
///
/// Does not filter by status; callers pass the accepted subset.
#[must_use]
pub fn accumulate_totals<'a>(
    requests: impl IntoIterator<Item = &'a DisposalRequest>,
) -> (f64, f64) {
    requests
        .into_iter()
        .fold((0.0, 0.0), |(weight, carbon), request| {
            (
                weight + request.weight_kg,
                carbon + request.weight_kg * request.item_category.emission_factor(),
            )
        })
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone as _, Utc};
    use ewaste_tracker_report_models::Locality;
    use ewaste_tracker_request_models::{ItemCategory, RequestStatus};

    use super::*;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn request(
        label: &str,
        weight_kg: f64,
        status: RequestStatus,
        location: &str,
    ) -> DisposalRequest {
        DisposalRequest {
            id: None,
            item_category: ItemCategory::from_label(label),
            weight_kg,
            status,
            location_text: location.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 10, 2, 6, 30, 0).unwrap(),
            pickup_date: None,
            phone_number: None,
            owner: None,
        }
    }

    fn accepted(label: &str, weight_kg: f64, location: &str) -> DisposalRequest {
        request(label, weight_kg, RequestStatus::Accepted, location)
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn end_to_end_scenario() {
        let requests = vec![
            accepted("Laptop", 3.0, "Thane West"),
            accepted("Smartphone", 0.2, "Mumbai Central"),
            accepted("Unknown", 5.0, "Thane"),
        ];
        let report = generate_report(&requests);
        assert!(approx_eq(report.total_accepted_weight_kg, 8.2));
        assert!(approx_eq(report.carbon_footprint_kg, 9.14));
        assert_eq!(report.most_requested_location, Locality::Thane);
    }

    #[test]
    fn empty_input_yields_zero_report() {
        let report = generate_report(&[]);
        assert!(report.total_accepted_weight_kg.abs() < f64::EPSILON);
        assert!(report.carbon_footprint_kg.abs() < f64::EPSILON);
        assert_eq!(report.requests_per_time_frame, RequestsPerTimeFrame::default());
        assert_eq!(report.most_requested_location, Locality::NaviMumbai);
    }

    #[test]
    fn only_accepted_requests_contribute_totals() {
        let requests = vec![
            request("Refrigerator", 60.0, RequestStatus::Pending, "Thane"),
            request("Television", 20.0, RequestStatus::Rejected, "Thane"),
            accepted("Printer", 7.5, "Mumbai"),
        ];
        let report = generate_report(&requests);
        assert!(approx_eq(report.total_accepted_weight_kg, 7.5));
        assert!(approx_eq(report.carbon_footprint_kg, 7.5 * 0.4));
        assert_eq!(report.requests_per_time_frame.yearly.values().sum::<u64>(), 1);
    }

    #[test]
    fn totals_fold_every_request_given() {
        let requests = [
            request("Refrigerator", 10.0, RequestStatus::Pending, "Thane"),
            accepted("Smartphone", 0.5, "Mumbai"),
        ];
        let (weight, carbon) = accumulate_totals(&requests);
        assert!(approx_eq(weight, 10.5));
        assert!(approx_eq(carbon, 10.0 * 1.4 + 0.5 * 0.7));
        let (weight, carbon) = accumulate_totals(std::iter::empty());
        assert!(approx_eq(weight, 0.0) && approx_eq(carbon, 0.0));
    }

    #[test]
    fn all_non_accepted_gives_zero_weight() {
        let requests = vec![
            request("Laptop", 2.0, RequestStatus::Pending, "Thane"),
            request("Laptop", 2.0, RequestStatus::Rejected, "Mumbai"),
        ];
        let report = generate_report(&requests);
        assert!(report.total_accepted_weight_kg.abs() < f64::EPSILON);
        assert!(report.requests_per_time_frame.daily.is_empty());
    }

    #[test]
    fn unknown_category_uses_other_factor() {
        let report = generate_report(&[accepted("Toaster", 10.0, "")]);
        assert!(approx_eq(report.carbon_footprint_kg, 12.0));
    }

    #[test]
    fn zero_and_fractional_weights_are_tolerated() {
        let report = generate_report(&[
            accepted("Smartphone", 0.0, "Mumbai"),
            accepted("Smartphone", 0.15, "Mumbai"),
        ]);
        assert!(approx_eq(report.total_accepted_weight_kg, 0.15));
        assert!(approx_eq(report.carbon_footprint_kg, 0.15 * 0.7));
    }

    #[test]
    fn yearly_counts_sum_to_accepted_count() {
        let mut requests = Vec::new();
        for (i, ts) in [
            "2022-12-31T19:00:00Z",
            "2023-12-31T18:29:59Z",
            "2023-12-31T18:30:00Z",
            "2023-06-15T08:00:00Z",
            "2024-03-01T00:00:00Z",
        ]
        .iter()
        .enumerate()
        {
            let status = if i % 2 == 0 {
                RequestStatus::Accepted
            } else {
                RequestStatus::Pending
            };
            let mut r = request("Laptop", 1.0, status, "Thane");
            r.created_at = at(ts);
            requests.push(r);
        }
        let report = generate_report(&requests);
        let accepted_count = requests.iter().filter(|r| r.is_accepted()).count() as u64;
        assert_eq!(
            report.requests_per_time_frame.yearly.values().sum::<u64>(),
            accepted_count
        );
        // 2022-12-31T19:00Z is already 2023-01-01 in IST.
        assert_eq!(report.requests_per_time_frame.yearly.get(&2022), None);
        assert_eq!(report.requests_per_time_frame.yearly.get(&2023), Some(&1));
        assert_eq!(report.requests_per_time_frame.yearly.get(&2024), Some(&2));
    }

    #[test]
    fn same_ist_day_shares_daily_bucket_across_utc_midnight() {
        // 2024-10-02T20:00Z and 2024-10-03T05:00Z are both 3 October in IST.
        let mut late = accepted("Laptop", 1.0, "Thane");
        late.created_at = at("2024-10-02T20:00:00Z");
        let mut early = accepted("Laptop", 1.0, "Thane");
        early.created_at = at("2024-10-03T05:00:00Z");

        let report = generate_report(&[late, early]);
        let daily = &report.requests_per_time_frame.daily;
        assert_eq!(daily.len(), 1);
        assert_eq!(daily.get("2024-10-03"), Some(&2));
    }

    #[test]
    fn monthly_and_daily_buckets_use_local_calendar() {
        let mut r = accepted("Laptop", 1.0, "Thane");
        r.created_at = at("2024-01-31T20:00:00Z");
        let report = generate_report(&[r]);
        let frames = &report.requests_per_time_frame;
        assert_eq!(frames.daily.get("2024-02-01"), Some(&1));
        assert_eq!(frames.monthly.get("2024-02"), Some(&1));
        assert_eq!(frames.monthly.get("2024-01"), None);
    }

    #[test]
    fn locations_count_every_status() {
        let requests = vec![
            request("Laptop", 1.0, RequestStatus::Pending, "Mumbai"),
            request("Laptop", 1.0, RequestStatus::Rejected, "Mumbai Central"),
            accepted("Laptop", 1.0, "Thane"),
        ];
        assert_eq!(generate_report(&requests).most_requested_location, Locality::Mumbai);
    }

    #[test]
    fn navi_mumbai_wins_ties_against_everything() {
        let requests = vec![
            accepted("Laptop", 1.0, "Navi Mumbai"),
            accepted("Laptop", 1.0, "Thane"),
            accepted("Laptop", 1.0, "Mumbai"),
        ];
        assert_eq!(
            generate_report(&requests).most_requested_location,
            Locality::NaviMumbai
        );
    }

    #[test]
    fn repeated_generation_is_identical() {
        let requests = vec![
            accepted("Laptop", 3.0, "Thane West"),
            accepted("Smartphone", 0.2, "Mumbai Central"),
            request("Microwave", 14.0, RequestStatus::Pending, "Navi Mumbai"),
        ];
        let first = generate_report(&requests);
        let second = generate_report(&requests);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
