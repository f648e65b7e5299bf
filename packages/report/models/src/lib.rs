#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Environmental-impact report types.
//!
//! Defines the [`Report`] produced by the report engine, the fixed set of
//! [`Locality`] values requests are classified into, and a couple of
//! presentation helpers shared by report renderers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Kilograms of CO₂ emitted per kilometre driven by an average car.
pub const KG_CO2_PER_KM_DRIVEN: f64 = 0.454;

/// Distance an average car would have to drive to emit `carbon_kg`
/// kilograms of CO₂.
///
/// Returns `0.0` when the result is not a finite number.
#[must_use]
pub fn equivalent_km_driven(carbon_kg: f64) -> f64 {
    let km = carbon_kg / KG_CO2_PER_KM_DRIVEN;
    if km.is_finite() { km } else { 0.0 }
}

/// A known pickup locality.
///
/// Variant order is the matching and tie-break precedence; see
/// [`Locality::PRECEDENCE`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Locality {
    /// Navi Mumbai. Checked first because its name contains "mumbai".
    #[serde(rename = "navi mumbai")]
    #[strum(serialize = "navi mumbai")]
    NaviMumbai,
    /// Thane
    Thane,
    /// Mumbai
    Mumbai,
}

impl Locality {
    /// Matching and tie-break order.
    pub const PRECEDENCE: [Self; 3] = [Self::NaviMumbai, Self::Thane, Self::Mumbai];

    /// Lower-case substring that identifies this locality in free text.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::NaviMumbai => "navi mumbai",
            Self::Thane => "thane",
            Self::Mumbai => "mumbai",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::NaviMumbai => 0,
            Self::Thane => 1,
            Self::Mumbai => 2,
        }
    }
}

/// Number of requests classified into each [`Locality`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocationCounts {
    counts: [u64; 3],
}

impl LocationCounts {
    /// Adds one request to `locality`.
    pub const fn increment(&mut self, locality: Locality) {
        self.counts[locality.index()] += 1;
    }

    /// Number of requests classified into `locality`.
    #[must_use]
    pub const fn get(&self, locality: Locality) -> u64 {
        self.counts[locality.index()]
    }

    /// The locality with the highest count.
    ///
    /// Ties go to whichever locality comes first in
    /// [`Locality::PRECEDENCE`], so an all-zero tally yields
    /// [`Locality::NaviMumbai`].
    #[must_use]
    pub fn most_requested(&self) -> Locality {
        let mut best = Locality::PRECEDENCE[0];
        for locality in Locality::PRECEDENCE.into_iter().skip(1) {
            // Strictly greater, so the earlier locality keeps a tie.
            if self.get(locality) > self.get(best) {
                best = locality;
            }
        }
        best
    }

    /// `(locality, count)` pairs in precedence order.
    #[must_use]
    pub fn entries(&self) -> impl Iterator<Item = (Locality, u64)> + '_ {
        Locality::PRECEDENCE
            .into_iter()
            .map(move |locality| (locality, self.get(locality)))
    }
}

/// Calendar granularity of a request-count bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeGranularity {
    /// Counts per calendar day.
    Daily,
    /// Counts per calendar month.
    Monthly,
    /// Counts per calendar year.
    Yearly,
}

impl std::fmt::Display for TimeGranularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daily => write!(f, "day"),
            Self::Monthly => write!(f, "month"),
            Self::Yearly => write!(f, "year"),
        }
    }
}

/// Accepted-request counts bucketed by calendar period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestsPerTimeFrame {
    /// `YYYY-MM-DD` → count.
    pub daily: BTreeMap<String, u64>,
    /// `YYYY-MM` → count.
    pub monthly: BTreeMap<String, u64>,
    /// Year → count.
    pub yearly: BTreeMap<i32, u64>,
}

impl RequestsPerTimeFrame {
    /// Counts one request in each of the three buckets.
    pub fn record(&mut self, day: String, month: String, year: i32) {
        *self.daily.entry(day).or_insert(0) += 1;
        *self.monthly.entry(month).or_insert(0) += 1;
        *self.yearly.entry(year).or_insert(0) += 1;
    }

    /// `(period label, count)` pairs for `granularity`, oldest first.
    #[must_use]
    pub fn series(&self, granularity: TimeGranularity) -> Vec<(String, u64)> {
        match granularity {
            TimeGranularity::Daily => self.daily.iter().map(|(k, v)| (k.clone(), *v)).collect(),
            TimeGranularity::Monthly => self
                .monthly
                .iter()
                .map(|(k, v)| (k.clone(), *v))
                .collect(),
            TimeGranularity::Yearly => self
                .yearly
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }
}

/// Aggregate environmental-impact report over all disposal requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Total weight of accepted requests, in kilograms.
    #[serde(rename = "totalAcceptedWeight")]
    pub total_accepted_weight_kg: f64,
    /// Estimated CO₂-equivalent of the accepted items, in kilograms.
    #[serde(rename = "carbonFootprint")]
    pub carbon_footprint_kg: f64,
    /// Accepted-request counts per day, month, and year.
    pub requests_per_time_frame: RequestsPerTimeFrame,
    /// Locality with the most requests of any status.
    pub most_requested_location: Locality,
}
