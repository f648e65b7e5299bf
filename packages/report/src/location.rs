//! Locality classification of free-text pickup addresses.
//!
//! Each address is lower-cased and checked for the keywords of
//! [`Locality::PRECEDENCE`] in order; the first hit wins. Because
//! "navi mumbai" is checked before "mumbai", a Navi Mumbai address is
//! never counted as Mumbai.
//!
//! Known limitation: this is plain substring matching. Abbreviations
//! ("Nv Mumbai"), diacritics, and street names that mention another
//! locality ("Mumbai Thane Road") are not handled.

use ewaste_tracker_report_models::{Locality, LocationCounts};
use ewaste_tracker_request_models::DisposalRequest;

/// Classifies a free-text address into a known locality.
///
/// Returns `None` when none of the locality keywords occur.
#[must_use]
pub fn classify_location(location_text: &str) -> Option<Locality> {
    let lower = location_text.to_lowercase();
    Locality::PRECEDENCE
        .into_iter()
        .find(|locality| lower.contains(locality.keyword()))
}

/// Tallies the locality of every request, whatever its status.
#[must_use]
pub fn count_locations(requests: &[DisposalRequest]) -> LocationCounts {
    let mut counts = LocationCounts::default();
    for locality in requests
        .iter()
        .filter_map(|r| classify_location(&r.location_text))
    {
        counts.increment(locality);
    }
    counts
}
