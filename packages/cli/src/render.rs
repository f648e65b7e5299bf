//! Plain-text rendering of reports and request listings.

use std::fmt;

use ewaste_tracker_report_models::{
    LocationCounts, Report, TimeGranularity, equivalent_km_driven,
};
use ewaste_tracker_request::{Submission, sort_pending};
use ewaste_tracker_request_models::{DisposalRequest, ItemCategory, PendingOrder, RequestStatus};

/// Text view of a [`Report`] with the locality tally it was built from.
pub struct ReportView<'a> {
    /// The report to render.
    pub report: &'a Report,
    /// Per-locality request counts behind `most_requested_location`.
    pub locations: &'a LocationCounts,
}

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        writeln!(f, "E-Waste Report")?;
        writeln!(f, "{}", "=".repeat(40))?;
        writeln!(
            f,
            "Collected:          {:.2} kg of e-waste",
            report.total_accepted_weight_kg
        )?;
        writeln!(
            f,
            "CO2 saved:          {:.2} kg CO2-equivalent",
            report.carbon_footprint_kg
        )?;
        writeln!(
            f,
            "Equivalent drive:   {:.2} km",
            equivalent_km_driven(report.carbon_footprint_kg)
        )?;
        writeln!(
            f,
            "Most requested:     {}",
            report.most_requested_location
        )?;

        writeln!(f)?;
        writeln!(f, "Requests per locality")?;
        writeln!(f, "{}", "-".repeat(40))?;
        for (locality, count) in self.locations.entries() {
            writeln!(f, "  {:<12} {count:>6}", locality.to_string())?;
        }

        for granularity in [
            TimeGranularity::Daily,
            TimeGranularity::Monthly,
            TimeGranularity::Yearly,
        ] {
            writeln!(f)?;
            writeln!(f, "Accepted requests per {granularity}")?;
            writeln!(f, "{}", "-".repeat(40))?;
            let series = report.requests_per_time_frame.series(granularity);
            if series.is_empty() {
                writeln!(f, "  (none)")?;
            }
            for (period, count) in series {
                writeln!(f, "  {period:<12} {count:>6}")?;
            }
        }
        Ok(())
    }
}

/// Text view of requests grouped by status.
pub struct RequestListing<'a> {
    /// Requests in store order.
    pub requests: &'a [DisposalRequest],
    /// Ordering for the pending group. Other groups keep store order.
    pub pending_order: Option<PendingOrder>,
}

impl fmt::Display for RequestListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, status) in RequestStatus::all().iter().enumerate() {
            let mut group: Vec<&DisposalRequest> =
                self.requests.iter().filter(|r| r.status == *status).collect();
            if let (RequestStatus::Pending, Some(order)) = (status, self.pending_order) {
                sort_pending(&mut group, order);
            }
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{} ({})", capitalize(status.as_ref()), group.len())?;
            writeln!(f, "{}", "-".repeat(96))?;
            for request in group {
                writeln!(
                    f,
                    "  {:<26} {:<18} {:>8.2} kg  {:<10}  {:<16}  {}",
                    request.id.as_deref().unwrap_or("-"),
                    request.item_category.to_string(),
                    request.weight_kg,
                    request
                        .pickup_date
                        .map_or_else(|| "-".to_string(), |d| d.to_string()),
                    request.phone_number.as_deref().unwrap_or("-"),
                    request.location_text
                )?;
            }
        }
        Ok(())
    }
}

/// Intake-form category table: emission factor, cost, and typical weight.
pub struct CategoryTable;

impl fmt::Display for CategoryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<18} {:>10} {:>10}  TYPICAL WEIGHT",
            "CATEGORY", "KG CO2/KG", "RS/KG"
        )?;
        writeln!(f, "{}", "-".repeat(60))?;
        for category in ItemCategory::all() {
            writeln!(
                f,
                "{:<18} {:>10.1} {:>10}  {}",
                category.to_string(),
                category.emission_factor(),
                category.cost_per_kg(),
                category.average_weight()
            )?;
        }
        Ok(())
    }
}

/// Confirmation printed after a request is submitted.
#[must_use]
pub fn submission_line(submission: &Submission) -> String {
    let request = &submission.request;
    format!(
        "Submitted request {} ({} kg of {}, pending review). {}",
        request.id.as_deref().unwrap_or("-"),
        request.weight_kg,
        request.item_category,
        estimate_line(
            &request.item_category.to_string(),
            request.weight_kg,
            submission.estimated_cost
        )
    )
}

/// One-line summary of a disposal cost estimate.
#[must_use]
pub fn estimate_line(label: &str, weight_kg: f64, cost: f64) -> String {
    let category = ItemCategory::from_label(label);
    format!(
        "Estimated cost for {weight_kg} kg of {category} (Rs {}/kg, typically {}): Rs {cost:.2}",
        category.cost_per_kg(),
        category.average_weight()
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
