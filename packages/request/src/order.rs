//! Ordering of the pending review queue.

use std::borrow::Borrow;
use std::cmp::Ordering;

use ewaste_tracker_request_models::{DisposalRequest, PendingOrder};

/// Sorts a group of pending requests in place. The sort is stable, so
/// requests that compare equal keep their submission order.
pub fn sort_pending<R: Borrow<DisposalRequest>>(requests: &mut [R], order: PendingOrder) {
    requests.sort_by(|a, b| compare(a.borrow(), b.borrow(), order));
}

fn compare(a: &DisposalRequest, b: &DisposalRequest, order: PendingOrder) -> Ordering {
    match order {
        PendingOrder::WeightAsc => a.weight_kg.total_cmp(&b.weight_kg),
        PendingOrder::WeightDesc => b.weight_kg.total_cmp(&a.weight_kg),
        PendingOrder::PickupDate => match (a.pickup_date, b.pickup_date) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}
