//! Command line interface definitions

use crate::collector::{TripForm, parse_form_date};
use crate::models::{BudgetTier, Interest};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use secrecy::SecretString;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "viajero",
    version,
    about = "Viajero: AI travel planning with live web price references",
    long_about = "Viajero: AI travel planning with live web price references.\n\n\
                  Searches the web for flight prices, hotel prices and weather at your \
                  destination, then asks a language model for an estimated quote and a \
                  day-by-day itinerary."
)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a trip plan: quote and itinerary
    Plan(PlanArgs),
    /// Show the effective configuration
    Config,
}

/// Output format for a generated plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown report followed by the raw evidence
    Text,
    /// The full plan as JSON
    Json,
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// OpenAI API key, read fresh on every run
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Departure city [default: Ciudad de México]
    #[arg(long)]
    pub origin: Option<String>,

    /// Destination city [default: Madrid, España]
    #[arg(long)]
    pub destination: Option<String>,

    /// Outbound and return dates [default: in 30 and 37 days]
    #[arg(long, num_args = 1.., value_name = "DD/MM/YYYY", value_parser = parse_form_date)]
    pub dates: Vec<NaiveDate>,

    /// Budget tier: economy, standard or luxury [default: standard]
    #[arg(long)]
    pub budget: Option<BudgetTier>,

    /// Interest, repeatable: gastronomy, history, nature, shopping, art
    /// [default: gastronomy, history]
    #[arg(long = "interest", value_name = "INTEREST")]
    pub interests: Vec<Interest>,

    /// Number of passengers [default: 2]
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub passengers: Option<u8>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl PlanArgs {
    /// Fill the trip form, falling back to the preset values
    #[must_use]
    pub fn into_form(self, today: NaiveDate) -> TripForm {
        let mut form = TripForm::with_defaults(today);

        form.credential = self.api_key.map(SecretString::from);
        if let Some(origin) = self.origin {
            form.origin = origin;
        }
        if let Some(destination) = self.destination {
            form.destination = destination;
        }
        if !self.dates.is_empty() {
            form.dates = self.dates;
        }
        if let Some(budget) = self.budget {
            form.budget = budget;
        }
        if !self.interests.is_empty() {
            form.interests = self.interests;
        }
        if let Some(passengers) = self.passengers {
            form.passengers = passengers;
        }

        form
    }
}
