use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use viajero::cli::{Cli, Command, OutputFormat, PlanArgs};
use viajero::config::LoggingConfig;
use viajero::{
    DuckDuckGoClient, PlanStage, ReportSynthesizer, StageObserver, TripPlanner, TripRequest,
    ViajeroConfig, llm,
};

/// Prints progress lines to stderr so stdout only carries the plan
struct ConsoleProgress;

impl StageObserver for ConsoleProgress {
    fn on_stage(&self, stage: PlanStage, request: Option<&TripRequest>) {
        if let Some(message) = stage.progress_message(request) {
            eprintln!("{message}");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = ViajeroConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    init_logging(&config.logging, cli.verbose);
    debug!(config = ?config, "Configuration loaded");

    match cli.command {
        Command::Plan(args) => plan(&config, args).await,
        Command::Config => show_config(&config, cli.config),
    }
}

fn init_logging(logging: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if logging.format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

async fn plan(config: &ViajeroConfig, args: PlanArgs) -> Result<ExitCode> {
    let format = args.format;

    let search = Arc::new(
        DuckDuckGoClient::new(&config.search).context("Failed to create search client")?,
    );
    let llm = llm::create_client(&config.llm).context("Failed to create LLM client")?;
    let synthesizer = ReportSynthesizer::from_config(llm, &config.llm)?;
    let planner = TripPlanner::new(search, synthesizer).with_observer(Arc::new(ConsoleProgress));

    let form = args.into_form(Local::now().date_naive());

    match planner.generate(form).await {
        Ok(plan) => {
            info!(destination = %plan.request.destination(), "Plan ready");
            match format {
                OutputFormat::Text => println!("{}", plan.presentation),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let marker = if e.is_warning() { "⚠️" } else { "❌" };
            eprintln!("{marker} {}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn show_config(config: &ViajeroConfig, explicit_path: Option<PathBuf>) -> Result<ExitCode> {
    match explicit_path.or_else(ViajeroConfig::get_config_path) {
        Some(path) if path.exists() => println!("# Config file: {}", path.display()),
        Some(path) => println!("# Config file: {} (not found, using defaults)", path.display()),
        None => println!("# Config file: none"),
    }
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(ExitCode::SUCCESS)
}
