//! Campaign Insights dashboard
//!
//! Headless front end for the insights core: prints generated snapshots,
//! table pages and summary figures, or runs the refresh controller and logs
//! every snapshot replacement.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

use clap::{Parser, Subcommand, ValueEnum};
use insights_core::utils::{
    format_clock_time, format_currency, format_number, format_percentage, format_rate,
};
use insights_core::{AnalyticsSnapshot, Config};
use insights_data::{CampaignSummary, MockSnapshotSource, generate};
use insights_refresh::{DashboardView, RefreshController, RefreshPhase, Result, TokioScheduler};
use insights_table::{
    CtrTier, PageItem, SortDirection, SortField, StatusFilter, TablePage, TableView,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{info, warn};

/// Command line interface for the insights dashboard
#[derive(Parser)]
#[command(
    name = "insights-dashboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Headless campaign analytics dashboard",
    long_about = "Generates deterministic campaign analytics snapshots, projects the campaign table and drives the simulated refresh cycle."
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log format (json, pretty)
    #[arg(long)]
    log_format: Option<String>,

    /// Enable structured JSON logging
    #[arg(long)]
    json: bool,

    /// Subcommand
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable text
    Table,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// Print one generated snapshot
    Snapshot {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Print one page of the campaign table
    Table {
        /// Search text matched against campaign name and status
        #[arg(short, long, default_value = "")]
        search: String,

        /// Status filter (all, active, paused, completed)
        #[arg(long, default_value = "all")]
        status: StatusFilter,

        /// Sort column
        #[arg(long, default_value = "campaign")]
        sort: SortField,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Print campaign summary figures
    Summary {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Run the refresh controller
    Run {
        /// Stop after this many seconds instead of waiting for Ctrl+C
        #[arg(short, long)]
        duration_secs: Option<u64>,
    },
}

/// Main entry point for the dashboard
///
/// # Errors
///
/// Returns error if configuration, logging or output fails
#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (for development convenience)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: .env file not loaded: {e}");
    }

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    insights_core::init_logging(&config.logging)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.logging.level,
        "Insights dashboard starting"
    );

    match cli.command {
        Some(Commands::Snapshot { format }) => print_snapshot(&generate(), format),
        Some(Commands::Table {
            search,
            status,
            sort,
            desc,
            page,
            format,
        }) => {
            let mut view = TableView::from_config(generate().campaigns, &config.table);
            view.set_search(search);
            view.set_status_filter(status);
            let direction = if desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            view.set_sort(sort, direction);
            view.set_page(page);
            print_table(&view.project(), format)
        }
        Some(Commands::Summary { format }) => {
            print_summary(&CampaignSummary::from_snapshot(&generate()), format)
        }
        Some(Commands::Run { duration_secs }) => run_dashboard(&config, duration_secs).await,
        None => run_dashboard(&config, None).await,
    }
}

/// Load configuration and apply command line overrides
///
/// # Errors
///
/// Returns error if the configuration file cannot be read, parsed or validated
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    if let Some(format) = &cli.log_format {
        config.logging.format.clone_from(format);
    }
    if cli.json {
        config.logging.format = "json".to_string();
    }

    Ok(config)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(insights_core::Error::from)?;
    println!("{json}");
    Ok(())
}

fn print_snapshot(snapshot: &AnalyticsSnapshot, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(snapshot);
    }

    println!("Overview");
    for card in &snapshot.overview {
        println!(
            "  {} {:<16} {:>12}  {} {}",
            card.icon.glyph(),
            card.title,
            card.value,
            card.trend.indicator().glyph(),
            format_percentage(card.change)
        );
    }

    for series in [
        &snapshot.revenue_series,
        &snapshot.conversion_series,
        &snapshot.channel_series,
    ] {
        println!("\n{}", series.label());
        for point in series.points() {
            println!("  {:<16} {:>12.2}", point.name, point.value);
        }
    }

    println!("\nCampaigns: {}", snapshot.campaigns.len());
    Ok(())
}

fn print_table(page: &TablePage<'_>, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(page);
    }

    if let Some(empty) = page.empty_state {
        println!("{}", empty.message());
        return Ok(());
    }

    println!(
        "{:<28} {:>12} {:>8} {:>8} {:>12} {:>6} {:>6} {:>9} {:<10}",
        "Campaign", "Impressions", "Clicks", "Conv.", "Spend", "CTR", "Tier", "CPA", "Status"
    );
    for row in &page.visible_rows {
        println!(
            "{:<28} {:>12} {:>8} {:>8} {:>12} {:>6} {:>6} {:>9} {:<10}",
            row.campaign,
            format_number(row.impressions),
            format_number(row.clicks),
            format_number(row.conversions),
            format_currency(row.spend),
            format_rate(row.ctr),
            CtrTier::for_row(row).as_str(),
            format_currency(row.cpa),
            row.status
        );
    }

    let buttons: Vec<String> = page
        .window
        .iter()
        .map(|item| match item {
            PageItem::Page(number) if *number == page.current_page() => format!("[{number}]"),
            PageItem::Page(number) => number.to_string(),
            PageItem::Gap => "...".to_string(),
        })
        .collect();

    println!("\n{} campaigns", page.meta.range_label());
    println!("Pages: {}", buttons.join(" "));
    Ok(())
}

fn print_summary(summary: &CampaignSummary, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(summary);
    }

    println!("Total Campaigns          {}", summary.total_campaigns);
    println!("Active Now               {}", summary.active_campaigns);
    println!("Total Investment         {}", format_currency(summary.total_spend));
    println!("Avg. Performance         {:.2}%", summary.avg_ctr);
    println!(
        "Best Performing Channel  {}",
        summary.top_channel.as_deref().unwrap_or("N/A")
    );
    println!("Campaign Success Rate    {:.1}%", summary.active_rate);
    println!("Avg. Cost Per Acquisition {}", format_currency(summary.avg_cpa));
    Ok(())
}

fn report(view: &DashboardView) {
    match (&view.snapshot, view.last_updated) {
        (Some(snapshot), Some(at)) => info!(
            phase = %view.phase,
            generation = view.generation,
            last_updated = %format_clock_time(&at),
            campaigns = snapshot.campaigns.len(),
            "Dashboard updated"
        ),
        _ => info!(phase = %view.phase, generation = view.generation, "Dashboard updated"),
    }
}

/// Run the refresh controller until Ctrl+C or the optional duration elapses
///
/// # Errors
///
/// Returns error if the controller cannot be started
async fn run_dashboard(config: &Config, duration_secs: Option<u64>) -> Result<()> {
    let controller = RefreshController::new(
        config.refresh.clone(),
        Arc::new(MockSnapshotSource::new()),
        Arc::new(TokioScheduler::current()?),
    );
    let mut updates = controller.subscribe();
    controller.start()?;
    info!("Dashboard is running. Press Ctrl+C to stop.");

    let deadline = async {
        match duration_secs {
            Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
            None => std::future::pending().await,
        }
    };
    tokio::pin!(deadline);

    let mut refreshed = false;
    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    warn!("Dashboard update channel closed");
                    break;
                }
                let view = updates.borrow_and_update().clone();
                report(&view);

                if !refreshed && view.phase == RefreshPhase::Idle && view.snapshot.is_some() {
                    refreshed = true;
                    let outcome = controller.request_refresh();
                    info!(?outcome, "Requested manual refresh");
                }
            }
            _ = signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down gracefully");
                break;
            }
            () = &mut deadline => {
                info!("Run duration elapsed");
                break;
            }
        }
    }

    controller.shutdown();
    info!("Dashboard stopped");
    Ok(())
}
