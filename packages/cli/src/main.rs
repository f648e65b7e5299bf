#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the e-waste request tracker.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ewaste_tracker_cli::config::{OutputFormat, TrackerConfig};
use ewaste_tracker_cli::render::CategoryTable;
use ewaste_tracker_request::SubmissionForm;
use ewaste_tracker_request_models::{Owner, PendingOrder, RequestStatus};
use ewaste_tracker_review::LogNotifier;

#[derive(Parser)]
#[command(name = "ewaste_tracker", about = "E-waste pickup request tracker")]
struct Cli {
    /// Path to a TOML config file (overrides `EWASTE_TRACKER_CONFIG`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the environmental-impact report
    Report {
        /// Request store file (overrides config and `EWASTE_TRACKER_REQUESTS`)
        #[arg(long)]
        requests: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List all requests grouped by status
    Requests {
        /// Request store file (overrides config and `EWASTE_TRACKER_REQUESTS`)
        #[arg(long)]
        requests: Option<PathBuf>,
        /// Order of the pending group: weight-asc, weight-desc, or pickup-date
        #[arg(long)]
        sort: Option<PendingOrder>,
    },
    /// Submit a new pickup request and quote its disposal cost
    Submit {
        /// Item category label (e.g., "Laptop", "Desktop Computer")
        #[arg(long)]
        item: String,
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
        /// Pickup address
        #[arg(long)]
        location: String,
        /// Requested pickup day (YYYY-MM-DD)
        #[arg(long)]
        pickup_date: Option<String>,
        /// Contact number
        #[arg(long)]
        phone: Option<String>,
        /// Requester name for review notifications
        #[arg(long, requires = "email")]
        name: Option<String>,
        /// Requester email for review notifications
        #[arg(long, requires = "name")]
        email: Option<String>,
        /// Request store file (overrides config and `EWASTE_TRACKER_REQUESTS`)
        #[arg(long)]
        requests: Option<PathBuf>,
    },
    /// Accept or reject a request and notify its owner
    Review {
        /// Request identifier
        #[arg(long)]
        id: String,
        /// New status: pending, accepted, or rejected
        #[arg(long)]
        status: RequestStatus,
        /// Request store file (overrides config and `EWASTE_TRACKER_REQUESTS`)
        #[arg(long)]
        requests: Option<PathBuf>,
    },
    /// Estimate the disposal cost of an item
    Estimate {
        /// Item category label (e.g., "Laptop", "Desktop Computer")
        #[arg(long)]
        category: String,
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
    },
    /// Show item categories with their emission factors and rates
    Categories,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let config = TrackerConfig::load(cli.config.as_deref())?;

    let Some(command) = cli.command else {
        return ewaste_tracker_cli::interactive::run(&config);
    };

    let output = match command {
        Commands::Report { requests, format } => {
            let path = requests.unwrap_or_else(|| config.requests_path.clone());
            ewaste_tracker_cli::report(&path, format.unwrap_or(config.report.format))?
        }
        Commands::Requests { requests, sort } => {
            let path = requests.unwrap_or_else(|| config.requests_path.clone());
            ewaste_tracker_cli::list_requests(&path, sort)?
        }
        Commands::Submit {
            item,
            weight,
            location,
            pickup_date,
            phone,
            name,
            email,
            requests,
        } => {
            let path = requests.unwrap_or_else(|| config.requests_path.clone());
            let owner = name
                .zip(email)
                .map(|(full_name, email)| Owner { full_name, email });
            let form = SubmissionForm {
                item_name: item,
                weight,
                location,
                pickup_date,
                phone_number: phone,
                owner,
            };
            ewaste_tracker_cli::submit(&path, form)?
        }
        Commands::Review {
            id,
            status,
            requests,
        } => {
            let path = requests.unwrap_or_else(|| config.requests_path.clone());
            ewaste_tracker_cli::review(&path, &id, status, &LogNotifier)?
        }
        Commands::Estimate { category, weight } => {
            ewaste_tracker_cli::estimate(&category, weight)?
        }
        Commands::Categories => CategoryTable.to_string(),
    };

    println!("{output}");
    Ok(())
}
