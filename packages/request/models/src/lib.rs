#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Disposal request types and the e-waste item category taxonomy.
//!
//! Every record handed to the report engine or the review workflow is a
//! [`DisposalRequest`]. Item categories are a closed set; anything the
//! intake form did not offer collapses into [`ItemCategory::Other`], so
//! per-category lookups (emission factor, cost) always have an answer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Kind of e-waste item being handed over for disposal.
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
pub enum ItemCategory {
    /// Fridges and freezers
    Refrigerator,
    /// CRT, LCD, and LED TV sets
    Television,
    /// Mobile phones
    Smartphone,
    /// Portable computers
    Laptop,
    /// Desktop towers and all-in-ones
    #[serde(rename = "Desktop Computer", alias = "DesktopComputer")]
    #[strum(to_string = "Desktop Computer", serialize = "DesktopComputer")]
    DesktopComputer,
    /// Printers, scanners, and copiers
    Printer,
    /// Microwave ovens
    Microwave,
    /// Anything not covered by the categories above
    Other,
}

impl ItemCategory {
    /// Maps an item label from the intake form to its category.
    ///
    /// Matching is exact. Labels that are not part of the taxonomy map to
    /// [`ItemCategory::Other`] instead of failing.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(Self::Other)
    }

    /// Kilograms of CO₂-equivalent attributed per kilogram of this item.
    #[must_use]
    pub const fn emission_factor(self) -> f64 {
        match self {
            Self::Refrigerator => 1.4,
            Self::Television | Self::Other => 1.2,
            Self::Smartphone => 0.7,
            Self::Laptop | Self::DesktopComputer | Self::Microwave => 1.0,
            Self::Printer => 0.4,
        }
    }

    /// Disposal cost in rupees per kilogram quoted on the intake form.
    #[must_use]
    pub const fn cost_per_kg(self) -> u32 {
        match self {
            Self::Refrigerator | Self::Microwave => 15,
            Self::Television | Self::Printer | Self::Other => 20,
            Self::Smartphone => 50,
            Self::Laptop => 30,
            Self::DesktopComputer => 25,
        }
    }

    /// Typical weight range shown next to the category on the intake form.
    #[must_use]
    pub const fn average_weight(self) -> &'static str {
        match self {
            Self::Refrigerator => "45-85 kg",
            Self::Television => "15-30 kg",
            Self::Smartphone => "0.1-0.2 kg",
            Self::Laptop => "2-3.5 kg",
            Self::DesktopComputer => "8-15 kg",
            Self::Printer => "5-10 kg",
            Self::Microwave => "12-18 kg",
            Self::Other => "Variable",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Refrigerator,
            Self::Television,
            Self::Smartphone,
            Self::Laptop,
            Self::DesktopComputer,
            Self::Printer,
            Self::Microwave,
            Self::Other,
        ]
    }
}

/// Estimated disposal cost in rupees for `weight_kg` of the item labelled
/// `label`. Unknown labels are priced at the [`ItemCategory::Other`] rate.
#[must_use]
pub fn estimate_disposal_cost(label: &str, weight_kg: f64) -> f64 {
    weight_kg * f64::from(ItemCategory::from_label(label).cost_per_kg())
}

/// Administrator review state of a disposal request.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
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
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RequestStatus {
    /// Submitted, not yet reviewed
    #[default]
    Pending,
    /// Approved for pickup
    Accepted,
    /// Declined by an administrator
    Rejected,
}

impl RequestStatus {
    /// Whether an administrator has made a decision on the request.
    #[must_use]
    pub const fn is_reviewed(self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Pending, Self::Accepted, Self::Rejected]
    }
}

/// Contact details of the user who submitted a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// Display name used in notification greetings.
    pub full_name: String,
    /// Address notifications are delivered to.
    pub email: String,
}

/// A single e-waste pickup request as seen by the report engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisposalRequest {
    /// Store identifier. `None` for records that were never persisted.
    pub id: Option<String>,
    /// What is being disposed of.
    pub item_category: ItemCategory,
    /// Declared weight in kilograms.
    pub weight_kg: f64,
    /// Current review state.
    pub status: RequestStatus,
    /// Free-form pickup address entered by the owner.
    pub location_text: String,
    /// Submission instant.
    pub created_at: DateTime<Utc>,
    /// Day the owner asked for the pickup, if given.
    pub pickup_date: Option<NaiveDate>,
    /// Contact number entered on the intake form.
    pub phone_number: Option<String>,
    /// Requester contact, when the store resolved it.
    pub owner: Option<Owner>,
}

impl DisposalRequest {
    /// Whether this request counts towards report statistics.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.status == RequestStatus::Accepted
    }
}

/// Ordering applied to the pending review queue.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PendingOrder {
    /// Lightest first
    WeightAsc,
    /// Heaviest first
    WeightDesc,
    /// Earliest requested pickup first; requests without a date go last
    PickupDate,
}

impl PendingOrder {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::WeightAsc, Self::WeightDesc, Self::PickupDate]
    }
}
