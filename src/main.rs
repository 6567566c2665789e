use std::path::{Path, PathBuf};
use std::process::ExitCode;

use analytics::{AnalyticsEngine, ReportEnvelope};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use configuration::Config;
use ingest::IngestError;
use presentation::{Surface, TerminalSurface, format};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the Salient analytics application.
fn main() -> ExitCode {
    // Load environment variables from a .env file, if one is present
    dotenvy::dotenv().ok();

    // Logs go to stderr so the rendered report owns stdout
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Parse command-line arguments
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // 1. Load Configuration
    let config = configuration::load_config().context("Failed to load configuration")?;

    // 2. Execute the requested command
    match cli.command {
        Commands::Report(args) => handle_report(args, &config),
        Commands::Summary(args) => handle_summary(args, &config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A terminal analytics dashboard for e-commerce transaction data.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the full report: every metric, table, and chart.
    Report(ReportArgs),
    /// Print only the headline numbers.
    Summary(SummaryArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// The CSV file to analyze (defaults to the configured input file).
    #[arg(long)]
    input: Option<PathBuf>,

    /// The output format for the report.
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Parser)]
struct SummaryArgs {
    /// The CSV file to analyze (defaults to the configured input file).
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable tables and charts.
    Table,
    /// The full report envelope as JSON.
    Json,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

/// Handles the `report` command: load the dataset, compute every
/// aggregate, and render the result in the requested format.
fn handle_report(args: ReportArgs, config: &Config) -> Result<()> {
    let envelope = build_report(args.input.as_deref(), config)?;

    match args.format {
        OutputFormat::Table => {
            let mut surface = TerminalSurface::stdout(config.display.max_table_rows);
            presentation::render_report(&envelope, &config.display.currency, &mut surface);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&envelope)
                .context("Failed to serialize the report to JSON")?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Handles the `summary` command: the headline numbers only.
fn handle_summary(args: SummaryArgs, config: &Config) -> Result<()> {
    let envelope = build_report(args.input.as_deref(), config)?;
    let report = &envelope.report;
    let currency = &config.display.currency;
    let mut surface = TerminalSurface::stdout(config.display.max_table_rows);

    surface.section("Summary");
    surface.metric("Source", &envelope.source);
    surface.metric("Total Revenue", &format::money(currency, report.total_revenue));
    surface.metric(
        "Average Purchase Value",
        &report
            .average_purchase_value
            .map(|value| format::money(currency, value))
            .unwrap_or_else(|| "undefined".to_string()),
    );
    surface.metric("Total Transactions", &format::count(report.transaction_count));
    if let Some(peak) = &report.peak_shopping_day {
        surface.metric("Peak Shopping Day", &format::long_date(peak.date));
        surface.metric("Revenue on Peak Day", &format::money(currency, peak.revenue));
    }

    Ok(())
}

/// Loads the chosen dataset and computes the full report over it.
fn build_report(input: Option<&Path>, config: &Config) -> Result<ReportEnvelope> {
    // 1. Resolve the input path: the CLI flag wins over the config file
    let path = input.unwrap_or(&config.data.input_file);

    // 2. Load and validate the dataset
    let transactions = ingest::load_transactions(path, &config.data.date_format)
        .context("Failed to load the transaction data")?;

    // 3. Compute every aggregate
    let engine = AnalyticsEngine::new();
    let report = engine.analyze(&transactions);

    Ok(ReportEnvelope::new(path.display().to_string(), report))
}

/// Prints a failure the way a person running the tool needs to see it.
fn report_failure(err: &anyhow::Error) {
    // A missing input file is an expected condition and gets guidance
    // rather than an error chain.
    if let Some(IngestError::DataNotFound { path }) = err.downcast_ref::<IngestError>() {
        eprintln!("Error: The file '{}' was not found.", path.display());
        eprintln!("Please ensure the CSV file exists at that location and try again.");
        return;
    }
    eprintln!("Error: {err:#}");
}
