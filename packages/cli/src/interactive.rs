#![allow(clippy::module_name_repetitions)]

//! Interactive menu for the tracker.
//!
//! Provides a menu-driven interface using `dialoguer` for the same
//! operations the subcommands expose.

use dialoguer::{Input, Select};
use ewaste_tracker_request::SubmissionForm;
use ewaste_tracker_request_models::{ItemCategory, PendingOrder, RequestStatus};
use ewaste_tracker_review::LogNotifier;

use crate::config::TrackerConfig;
use crate::render::CategoryTable;

/// Top-level actions available in the interactive menu.
enum Action {
    Report,
    ListRequests,
    Submit,
    Review,
    Estimate,
    Categories,
}

impl Action {
    const ALL: &[Self] = &[
        Self::Report,
        Self::ListRequests,
        Self::Submit,
        Self::Review,
        Self::Estimate,
        Self::Categories,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Report => "Generate impact report",
            Self::ListRequests => "List requests",
            Self::Submit => "Submit a pickup request",
            Self::Review => "Accept or reject a request",
            Self::Estimate => "Estimate disposal cost",
            Self::Categories => "Show item categories",
        }
    }
}

/// Prompts for an action and runs it against `config`.
///
/// # Errors
///
/// Returns an error if a prompt fails or the selected operation fails.
pub fn run(config: &TrackerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    let output = match Action::ALL[idx] {
        Action::Report => crate::report(&config.requests_path, config.report.format)?,
        Action::ListRequests => list_interactive(config)?,
        Action::Submit => submit_interactive(config)?,
        Action::Review => review_interactive(config)?,
        Action::Estimate => estimate_interactive()?,
        Action::Categories => CategoryTable.to_string(),
    };
    println!("{output}");

    Ok(())
}

fn list_interactive(config: &TrackerConfig) -> Result<String, Box<dyn std::error::Error>> {
    let orders = PendingOrder::all();
    let mut labels = vec!["store order".to_string()];
    labels.extend(orders.iter().map(ToString::to_string));
    let idx = Select::new()
        .with_prompt("Order pending requests by")
        .items(&labels)
        .default(0)
        .interact()?;

    let order = idx.checked_sub(1).map(|i| orders[i]);
    Ok(crate::list_requests(&config.requests_path, order)?)
}

fn submit_interactive(config: &TrackerConfig) -> Result<String, Box<dyn std::error::Error>> {
    let categories = ItemCategory::all();
    let labels: Vec<String> = categories
        .iter()
        .map(|c| format!("{c} ({}, Rs {}/kg)", c.average_weight(), c.cost_per_kg()))
        .collect();
    let idx = Select::new()
        .with_prompt("Item category")
        .items(&labels)
        .default(0)
        .interact()?;

    let weight: f64 = Input::new().with_prompt("Weight (kg)").interact_text()?;
    let location: String = Input::new().with_prompt("Pickup address").interact_text()?;
    let pickup_date: String = Input::new()
        .with_prompt("Pickup date (YYYY-MM-DD, blank to skip)")
        .allow_empty(true)
        .interact_text()?;
    let phone_number: String = Input::new()
        .with_prompt("Phone number (blank to skip)")
        .allow_empty(true)
        .interact_text()?;

    let form = SubmissionForm {
        item_name: categories[idx].to_string(),
        weight,
        location,
        pickup_date: Some(pickup_date),
        phone_number: Some(phone_number),
        owner: None,
    };
    Ok(crate::submit(&config.requests_path, form)?)
}

fn review_interactive(config: &TrackerConfig) -> Result<String, Box<dyn std::error::Error>> {
    let id: String = Input::new().with_prompt("Request ID").interact_text()?;

    let statuses = RequestStatus::all();
    let labels: Vec<String> = statuses.iter().map(ToString::to_string).collect();
    let idx = Select::new()
        .with_prompt("New status")
        .items(&labels)
        .default(1)
        .interact()?;

    Ok(crate::review(
        &config.requests_path,
        id.trim(),
        statuses[idx],
        &LogNotifier,
    )?)
}

fn estimate_interactive() -> Result<String, Box<dyn std::error::Error>> {
    let categories = ItemCategory::all();
    let labels: Vec<String> = categories
        .iter()
        .map(|c| format!("{c} ({})", c.average_weight()))
        .collect();
    let idx = Select::new()
        .with_prompt("Item category")
        .items(&labels)
        .default(0)
        .interact()?;

    let weight: f64 = Input::new()
        .with_prompt("Weight (kg)")
        .interact_text()?;

    Ok(crate::estimate(&categories[idx].to_string(), weight)?)
}
